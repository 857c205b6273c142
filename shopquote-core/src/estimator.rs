//! Service cost estimation.
//!
//! A quote for one catalog service is built from the assigned employee's
//! labor rate, the shop's overhead amortized over its monthly job count, and a
//! profit margin applied on top of both. Every function here is pure and
//! total: degenerate inputs contribute zero instead of failing.

use shopquote_schemas::{
    catalog::CatalogService, employee::Employee, overhead::OverheadConfiguration,
    work_order::EstimateResult,
};

/// Assumed paid hours per month (44-hour week x 4 weeks).
///
/// This is a pricing policy, not a measured value. Changing it changes every
/// quote the shop has ever issued.
pub const MONTHLY_WORKING_HOURS: f64 = 176.0;

/// Hourly labor rate derived from the employee's monthly pay.
///
/// Missing, zero or NaN compensation yields 0. Negative values are not
/// guarded and flow through the division.
pub fn hourly_rate(employee: Option<&Employee>) -> f64 {
    match employee.and_then(|e| e.monthly_compensation) {
        Some(compensation) if compensation != 0.0 && !compensation.is_nan() => {
            compensation / MONTHLY_WORKING_HOURS
        }
        _ => 0.0,
    }
}

/// Monthly overhead divided across the configured average job count.
pub fn average_overhead_per_job(config: &OverheadConfiguration) -> f64 {
    if config.average_monthly_jobs <= 0 {
        return 0.0;
    }
    config.total_monthly_expenses() / config.average_monthly_jobs as f64
}

pub fn estimate_service_cost(
    service: &CatalogService,
    employee: Option<&Employee>,
    config: &OverheadConfiguration,
) -> EstimateResult {
    let hourly_rate = hourly_rate(employee);
    let labor_cost = service.estimated_hours * hourly_rate;
    let overhead_per_job = average_overhead_per_job(config);
    let margin_amount = (labor_cost + overhead_per_job) * (config.profit_margin_percent / 100.0);
    let total = overhead_per_job + labor_cost + margin_amount;

    EstimateResult {
        hourly_rate,
        labor_cost,
        overhead_per_job,
        margin_amount,
        total,
    }
}

/// Rounds a currency value to cents, half away from zero.
///
/// Only call this where a value leaves the program (printing, persisting).
/// Rounded values must not be fed back into the estimator.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A display copy of an estimate with every field rounded to cents.
pub fn rounded(estimate: &EstimateResult) -> EstimateResult {
    EstimateResult {
        hourly_rate: round_to_cents(estimate.hourly_rate),
        labor_cost: round_to_cents(estimate.labor_cost),
        overhead_per_job: round_to_cents(estimate.overhead_per_job),
        margin_amount: round_to_cents(estimate.margin_amount),
        total: round_to_cents(estimate.total),
    }
}
