//! Sales reconciliation pipeline for revenue-service.
//!
//! For each in-scope reservation detail the pipeline expands the detail's
//! rate lines into priced views, ranks them, and charges the difference
//! between the detail's nominal price and the summed rate prices to the
//! top-ranked line. The reconciled contributions therefore always add up
//! to the nominal prices, which is what keeps the aggregate equal to the
//! authoritative monthly report even when rate records are partial,
//! duplicated, or missing.

use std::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{
    BillableDetail, RateContribution, RateLine, ReservationDetail, DEFAULT_TAX_RATE,
};
use crate::services::source::{SalesScope, SalesSource};

/// One rate line of a detail, priced and ready for ranking.
#[derive(Debug, Clone)]
struct RateView {
    rate_line_id: Option<i64>,
    tax_rate: Decimal,
    rate_price: Decimal,
}

fn overflow(what: &str, detail_id: i64) -> AppError {
    AppError::ArithmeticOverflow(format!("{} for detail {}", what, detail_id))
}

/// Expand a detail's rate lines into priced views.
///
/// Always returns at least one view: a detail with no rate lines gets a
/// single placeholder at the default tax rate carrying no price of its
/// own, so the residual allocation below attributes the full nominal
/// price to the default rate.
fn rate_views(
    detail: &ReservationDetail,
    rate_lines: &[RateLine],
) -> Result<Vec<RateView>, AppError> {
    if rate_lines.is_empty() {
        return Ok(vec![RateView {
            rate_line_id: None,
            tax_rate: *DEFAULT_TAX_RATE,
            rate_price: Decimal::ZERO,
        }]);
    }

    rate_lines
        .iter()
        .map(|line| {
            Ok(RateView {
                rate_line_id: Some(line.id),
                tax_rate: line.tax_rate,
                rate_price: detail.extended_price(line.unit_price)?,
            })
        })
        .collect()
}

/// Ordering that decides which rate line of a detail is primary.
///
/// Highest tax rate first; among equal rates the highest id (the most
/// recently created record) wins, and a placeholder without an id sorts
/// last. Ids are unique per detail, so the order is total for any pair
/// of real records.
fn rank_order(a: &RateView, b: &RateView) -> Ordering {
    b.tax_rate
        .cmp(&a.tax_rate)
        .then_with(|| match (a.rate_line_id, b.rate_line_id) {
            (Some(a_id), Some(b_id)) => b_id.cmp(&a_id),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Reconcile one detail into ranked contributions.
///
/// The rank-1 line absorbs `nominal_price - sum(rate_price)` with its
/// sign intact; every other line contributes its rate price unchanged.
fn reconcile_detail(row: &BillableDetail) -> Result<Vec<RateContribution>, AppError> {
    let detail = &row.detail;
    let nominal_price = detail.nominal_price()?;

    let mut views = rate_views(detail, &row.rate_lines)?;
    views.sort_by(rank_order);

    let mut rate_sum = Decimal::ZERO;
    for view in &views {
        rate_sum = rate_sum
            .checked_add(view.rate_price)
            .ok_or_else(|| overflow("rate price sum", detail.id))?;
    }
    let residual = nominal_price
        .checked_sub(rate_sum)
        .ok_or_else(|| overflow("residual", detail.id))?;

    views
        .into_iter()
        .enumerate()
        .map(|(idx, view)| {
            let rank = (idx + 1) as u32;
            let contribution = if rank == 1 {
                view.rate_price
                    .checked_add(residual)
                    .ok_or_else(|| overflow("primary contribution", detail.id))?
            } else {
                view.rate_price
            };
            Ok(RateContribution {
                detail_id: detail.id,
                rate_line_id: view.rate_line_id,
                tax_rate: view.tax_rate,
                rank,
                rate_price: view.rate_price,
                contribution,
            })
        })
        .collect()
}

/// Reconcile every in-scope row of a dataset into ranked contributions.
///
/// Rows outside the scope are dropped here even if the source already
/// filtered, so cancelled, non-billable, hold/block, and employee rows
/// can never leak into the total.
pub fn reconcile_dataset(
    scope: &SalesScope,
    rows: &[BillableDetail],
) -> Result<Vec<RateContribution>, AppError> {
    let mut contributions = Vec::new();
    for row in rows {
        if !scope.in_scope(&row.detail, &row.reservation) {
            debug!(
                detail_id = row.detail.id,
                status = row.reservation.status.as_str(),
                kind = row.reservation.kind.as_str(),
                "Detail excluded from sales scope"
            );
            continue;
        }
        contributions.extend(reconcile_detail(row)?);
    }
    Ok(contributions)
}

/// Sum contributions into one total with exact decimal arithmetic.
pub fn sum_contributions(contributions: &[RateContribution]) -> Result<Decimal, AppError> {
    let mut total = Decimal::ZERO;
    for c in contributions {
        total = total
            .checked_add(c.contribution)
            .ok_or_else(|| overflow("sales total", c.detail_id))?;
    }
    Ok(total)
}

/// Sales total computation over a [`SalesSource`].
#[derive(Clone)]
pub struct RevenueService<S> {
    source: S,
}

impl<S: SalesSource> RevenueService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Per-rate-line contributions for every in-scope detail.
    #[instrument(skip(self), fields(hotel_id = scope.hotel_id))]
    pub async fn reconciled_contributions(
        &self,
        scope: &SalesScope,
    ) -> Result<Vec<RateContribution>, AppError> {
        let rows = self.source.billable_details(scope).await?;
        reconcile_dataset(scope, &rows)
    }

    /// Reconciled sales total for one hotel over an inclusive date range.
    #[instrument(skip(self), fields(query_id = %Uuid::new_v4()))]
    pub async fn total_sales(
        &self,
        hotel_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Decimal, AppError> {
        let scope = SalesScope::new(hotel_id, start_date, end_date);
        let rows = self.source.billable_details(&scope).await?;
        let contributions = reconcile_dataset(&scope, &rows)?;
        let total_amount = sum_contributions(&contributions)?;

        info!(
            hotel_id,
            %start_date,
            %end_date,
            details = rows.len(),
            rate_lines = contributions.len(),
            total = %total_amount,
            "Sales total reconciled"
        );

        Ok(total_amount)
    }
}
