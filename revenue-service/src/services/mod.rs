//! Services module for revenue-service.

pub mod revenue;
pub mod source;

pub use revenue::{reconcile_dataset, sum_contributions, RevenueService};
pub use source::{SalesScope, SalesSource};
