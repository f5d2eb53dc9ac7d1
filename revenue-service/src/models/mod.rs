//! Domain models for revenue-service.

#![allow(clippy::should_implement_trait)]

mod detail;
mod reservation;

pub use detail::{
    BillableDetail, PricingBasis, RateContribution, RateLine, ReservationDetail, DEFAULT_TAX_RATE,
};
pub use reservation::{ReservationKind, ReservationStatus, ReservationSummary};
