//! Revenue Service - Tax-aware sales totals for hotel reservation details.
//!
//! Reconciles each billable reservation detail against its per-tax-rate
//! price records so that the aggregated total matches the authoritative
//! monthly report to the yen, even when the itemized records over- or
//! under-shoot the detail's nominal price.

pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;
