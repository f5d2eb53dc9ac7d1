//! Reservation detail and rate line models for revenue-service.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::ReservationSummary;

/// Consumption tax rate assumed when a detail carries no explicit rate line (10%).
pub static DEFAULT_TAX_RATE: Lazy<Decimal> = Lazy::new(|| Decimal::new(10, 2));

/// How a detail's unit price extends to its nominal price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingBasis {
    PerUnit,
    PerOccupant,
}

impl PricingBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingBasis::PerUnit => "per_unit",
            PricingBasis::PerOccupant => "per_occupant",
        }
    }

    /// An unknown basis is a hard error; defaulting here would silently
    /// corrupt the nominal price of every affected detail.
    pub fn from_str(s: &str) -> Result<Self, AppError> {
        match s {
            "per_unit" => Ok(PricingBasis::PerUnit),
            "per_occupant" => Ok(PricingBasis::PerOccupant),
            other => Err(AppError::InvalidPricingBasis(other.to_string())),
        }
    }
}

/// One billable unit of stay for one date (a room-night or per-person charge).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationDetail {
    pub id: i64,
    pub hotel_id: i64,
    pub stay_date: NaiveDate,
    pub pricing_basis: PricingBasis,
    pub occupant_count: i32,
    pub unit_price: Decimal,
    pub billable: bool,
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl ReservationDetail {
    /// Extend a per-unit price to this detail's basis.
    pub fn extended_price(&self, unit_price: Decimal) -> Result<Decimal, AppError> {
        match self.pricing_basis {
            PricingBasis::PerUnit => Ok(unit_price),
            PricingBasis::PerOccupant => unit_price
                .checked_mul(Decimal::from(self.occupant_count))
                .ok_or_else(|| {
                    AppError::ArithmeticOverflow(format!(
                        "extended price for detail {}",
                        self.id
                    ))
                }),
        }
    }

    /// Contracted price for this detail, independent of its tax-rate breakdown.
    pub fn nominal_price(&self) -> Result<Decimal, AppError> {
        self.extended_price(self.unit_price)
    }
}

/// Explicit tax-rate-specific price record attached to a detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLine {
    pub id: i64,
    pub detail_id: i64,
    pub tax_rate: Decimal,
    pub unit_price: Decimal,
}

/// One retrieval row: a detail, its owning reservation, and its rate lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillableDetail {
    pub detail: ReservationDetail,
    pub reservation: ReservationSummary,
    pub rate_lines: Vec<RateLine>,
}

/// A ranked rate line with the amount it contributes to the sales total.
///
/// `rate_line_id` is `None` for the placeholder synthesized when a detail
/// has no rate lines. Rank 1 is the primary line; it absorbs the signed
/// difference between the detail's nominal price and the sum of its rate
/// prices, so the per-detail contributions always add up to the nominal
/// price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateContribution {
    pub detail_id: i64,
    pub rate_line_id: Option<i64>,
    pub tax_rate: Decimal,
    pub rank: u32,
    pub rate_price: Decimal,
    pub contribution: Decimal,
}
