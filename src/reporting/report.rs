//! Dashboard report assembly.
//!
//! Pure composition over the metric queries and the service revenue
//! resolver. Holds no state between calls; every report queries live data.

use chrono::NaiveDate;
use sqlx::MySqlPool;
use tracing::warn;

use crate::error::Result;

use super::metrics;
use super::models::{DashboardReport, DateRange};
use super::queries;
use super::schema::SchemaCapabilities;

/// Assemble the dashboard report for an inclusive date range.
///
/// A reversed range is rejected before any query runs. Individual metric
/// failures degrade to the type's default (zero / empty) with a logged
/// warning; a full outage therefore renders as zeros rather than an error.
pub async fn dashboard_report(
    pool: &MySqlPool,
    caps: &SchemaCapabilities,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<DashboardReport> {
    let range = DateRange::new(start, end)?;

    let total_revenue = or_default(queries::total_revenue(pool, range).await, "total_revenue");
    let total_appointments = or_default(
        queries::total_appointments(pool, range).await,
        "total_appointments",
    );
    let unique_customers = or_default(
        queries::unique_customers(pool, range).await,
        "unique_customers",
    );
    let completed_appointments = or_default(
        queries::completed_appointments(pool, range).await,
        "completed_appointments",
    );
    let pending_appointments = or_default(
        queries::pending_appointments(pool, range).await,
        "pending_appointments",
    );
    let service_revenue = or_default(
        queries::service_revenue(pool, caps, range).await,
        "service_revenue",
    );
    let daily_revenue_trend = or_default(
        queries::daily_revenue_trend(pool, range).await,
        "daily_revenue_trend",
    );
    let monthly_sales = or_default(queries::monthly_sales(pool, range).await, "monthly_sales");

    Ok(DashboardReport {
        start_date: range.start(),
        end_date: range.end(),
        average_appointment_value: metrics::average_appointment_value(
            total_revenue,
            total_appointments,
        ),
        completion_rate: metrics::completion_rate(completed_appointments, total_appointments),
        top_service_name: metrics::top_service_name(&service_revenue),
        total_revenue,
        total_appointments,
        unique_customers,
        completed_appointments,
        pending_appointments,
        service_revenue,
        daily_revenue_trend,
        monthly_sales,
    })
}

/// Degrade a failed metric to its default value with a warning.
fn or_default<T: Default>(result: Result<T>, metric: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!("{} query failed, using default: {}", metric, e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use rust_decimal::Decimal;

    #[test]
    fn test_or_default_passes_values_through() {
        assert_eq!(or_default(Ok(7i64), "m"), 7);
    }

    #[test]
    fn test_or_default_substitutes_defaults() {
        let failed: Result<Decimal> = Err(AppError::Validation("boom".to_string()));
        assert_eq!(or_default(failed, "m"), Decimal::ZERO);

        let failed: Result<Vec<i64>> = Err(AppError::Validation("boom".to_string()));
        assert!(or_default(failed, "m").is_empty());
    }
}
