//! Retrieval boundary for revenue-service.
//!
//! The relational store that owns reservations, details, and rate lines
//! sits behind [`SalesSource`]. This service never persists anything and
//! never retries a failed fetch; source errors surface to the caller
//! unchanged.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{BillableDetail, ReservationDetail, ReservationKind, ReservationSummary};

/// Hotel and inclusive stay-date range a sales query covers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SalesScope {
    pub hotel_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl SalesScope {
    pub fn new(hotel_id: i64, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            hotel_id,
            start_date,
            end_date,
        }
    }

    /// Whether a detail counts toward this scope's sales total.
    ///
    /// The source is expected to pre-filter, but the pipeline re-applies
    /// the predicate so exclusion is enforced here rather than trusted.
    pub fn in_scope(&self, detail: &ReservationDetail, reservation: &ReservationSummary) -> bool {
        detail.hotel_id == self.hotel_id
            && detail.stay_date >= self.start_date
            && detail.stay_date <= self.end_date
            && detail.billable
            && detail.cancelled_at.is_none()
            && reservation.status.produces_revenue()
            && reservation.kind != ReservationKind::Employee
    }
}

/// External store supplying billable details with their rate lines.
#[async_trait]
pub trait SalesSource: Send + Sync {
    /// Fetch every detail matching the scope, each with its owning
    /// reservation summary and zero or more rate lines.
    async fn billable_details(&self, scope: &SalesScope) -> Result<Vec<BillableDetail>, AppError>;
}
