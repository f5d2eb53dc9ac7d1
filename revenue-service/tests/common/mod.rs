//! Common test utilities for revenue-service integration tests.

#![allow(dead_code)]

use std::sync::Once;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use revenue_service::config::RevenueConfig;
use revenue_service::error::AppError;
use revenue_service::models::{
    BillableDetail, PricingBasis, RateLine, ReservationDetail, ReservationKind, ReservationStatus,
    ReservationSummary,
};
use revenue_service::observability;
use revenue_service::services::{SalesScope, SalesSource};

pub const HOTEL_ID: i64 = 1;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once per test binary).
pub fn init_tracing() {
    INIT.call_once(|| {
        let config = RevenueConfig::from_env();
        observability::init_tracing(&config.service_name, &config.log_level);
    });
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn yen(amount: i64) -> Decimal {
    Decimal::new(amount, 0)
}

/// Tax rate from whole percent, e.g. `rate(10)` = 0.10.
pub fn rate(percent: i64) -> Decimal {
    Decimal::new(percent, 2)
}

pub fn per_unit_detail(id: i64, stay_date: NaiveDate, unit_price: i64) -> ReservationDetail {
    ReservationDetail {
        id,
        hotel_id: HOTEL_ID,
        stay_date,
        pricing_basis: PricingBasis::PerUnit,
        occupant_count: 1,
        unit_price: yen(unit_price),
        billable: true,
        cancelled_at: None,
    }
}

pub fn per_occupant_detail(
    id: i64,
    stay_date: NaiveDate,
    occupants: i32,
    unit_price: i64,
) -> ReservationDetail {
    ReservationDetail {
        pricing_basis: PricingBasis::PerOccupant,
        occupant_count: occupants,
        ..per_unit_detail(id, stay_date, unit_price)
    }
}

pub fn cancelled_detail(id: i64, stay_date: NaiveDate, unit_price: i64) -> ReservationDetail {
    ReservationDetail {
        cancelled_at: Some(Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()),
        ..per_unit_detail(id, stay_date, unit_price)
    }
}

pub fn rate_line(id: i64, detail_id: i64, tax_percent: i64, unit_price: i64) -> RateLine {
    RateLine {
        id,
        detail_id,
        tax_rate: rate(tax_percent),
        unit_price: yen(unit_price),
    }
}

/// A row owned by an ordinary checked-out guest reservation.
pub fn guest_row(detail: ReservationDetail, rate_lines: Vec<RateLine>) -> BillableDetail {
    row_with(
        detail,
        ReservationStatus::CheckedOut,
        ReservationKind::Guest,
        rate_lines,
    )
}

pub fn row_with(
    detail: ReservationDetail,
    status: ReservationStatus,
    kind: ReservationKind,
    rate_lines: Vec<RateLine>,
) -> BillableDetail {
    BillableDetail {
        detail,
        reservation: ReservationSummary {
            id: 1000,
            status,
            kind,
        },
        rate_lines,
    }
}

/// In-memory source serving a fixed dataset.
pub struct StaticSource {
    pub rows: Vec<BillableDetail>,
}

impl StaticSource {
    pub fn new(rows: Vec<BillableDetail>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl SalesSource for StaticSource {
    async fn billable_details(&self, _scope: &SalesScope) -> Result<Vec<BillableDetail>, AppError> {
        Ok(self.rows.clone())
    }
}

/// Source that always fails, for error propagation tests.
pub struct FailingSource;

#[async_trait]
impl SalesSource for FailingSource {
    async fn billable_details(&self, _scope: &SalesScope) -> Result<Vec<BillableDetail>, AppError> {
        Err(AppError::SourceError(anyhow::anyhow!(
            "connection reset by store"
        )))
    }
}
