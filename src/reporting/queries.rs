//! Aggregation queries for the dashboard and reports.
//!
//! Every date filter is `col >= ? AND col < DATE_ADD(?, INTERVAL 1 DAY)`,
//! which makes the end date inclusive without depending on time-of-day
//! truncation. A half-open filter without the one-day adjustment would
//! silently drop the end date's rows.

use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::error::Result;
use crate::models::{STATUS_COMPLETED, STATUS_PENDING, STATUS_SCHEDULED};

use super::models::{DailyRevenue, DateRange, MonthlySales, RecentPaymentSummary, ServiceRevenue};
use super::schema::{SchemaCapabilities, ServiceRevenueStrategy};

/// Sum of payments in range, null coerced to 0.
pub async fn total_revenue(pool: &MySqlPool, range: DateRange) -> Result<Decimal> {
    let total: Decimal = sqlx::query_scalar(
        r#"
        SELECT IFNULL(SUM(Amount), 0)
        FROM Payments
        WHERE PaymentDate >= ? AND PaymentDate < DATE_ADD(?, INTERVAL 1 DAY)
        "#,
    )
    .bind(range.start())
    .bind(range.end())
    .fetch_one(pool)
    .await?;

    Ok(total)
}

pub async fn total_appointments(pool: &MySqlPool, range: DateRange) -> Result<i64> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM Appointments
        WHERE AppointmentDate >= ? AND AppointmentDate < DATE_ADD(?, INTERVAL 1 DAY)
        "#,
    )
    .bind(range.start())
    .bind(range.end())
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Distinct customers with an appointment in range.
pub async fn unique_customers(pool: &MySqlPool, range: DateRange) -> Result<i64> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(DISTINCT CustomerID)
        FROM Appointments
        WHERE AppointmentDate >= ? AND AppointmentDate < DATE_ADD(?, INTERVAL 1 DAY)
        "#,
    )
    .bind(range.start())
    .bind(range.end())
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Appointments with status exactly `completed` (case-sensitive).
pub async fn completed_appointments(pool: &MySqlPool, range: DateRange) -> Result<i64> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM Appointments
        WHERE AppointmentDate >= ? AND AppointmentDate < DATE_ADD(?, INTERVAL 1 DAY)
          AND Status = ?
        "#,
    )
    .bind(range.start())
    .bind(range.end())
    .bind(STATUS_COMPLETED)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Appointments still open: status `scheduled` or `pending`.
pub async fn pending_appointments(pool: &MySqlPool, range: DateRange) -> Result<i64> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM Appointments
        WHERE AppointmentDate >= ? AND AppointmentDate < DATE_ADD(?, INTERVAL 1 DAY)
          AND Status IN (?, ?)
        "#,
    )
    .bind(range.start())
    .bind(range.end())
    .bind(STATUS_SCHEDULED)
    .bind(STATUS_PENDING)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Revenue per calendar day, ascending.
pub async fn daily_revenue_trend(pool: &MySqlPool, range: DateRange) -> Result<Vec<DailyRevenue>> {
    let rows = sqlx::query_as::<_, DailyRevenue>(
        r#"
        SELECT DATE(PaymentDate) AS day,
               IFNULL(SUM(Amount), 0) AS revenue
        FROM Payments
        WHERE PaymentDate >= ? AND PaymentDate < DATE_ADD(?, INTERVAL 1 DAY)
        GROUP BY DATE(PaymentDate)
        ORDER BY day ASC
        "#,
    )
    .bind(range.start())
    .bind(range.end())
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Revenue per calendar month, ascending, keyed `YYYY-MM`.
pub async fn monthly_sales(pool: &MySqlPool, range: DateRange) -> Result<Vec<MonthlySales>> {
    let rows = sqlx::query_as::<_, MonthlySales>(
        r#"
        SELECT DATE_FORMAT(PaymentDate, '%Y-%m') AS month,
               IFNULL(SUM(Amount), 0) AS revenue
        FROM Payments
        WHERE PaymentDate >= ? AND PaymentDate < DATE_ADD(?, INTERVAL 1 DAY)
        GROUP BY DATE_FORMAT(PaymentDate, '%Y-%m')
        ORDER BY month ASC
        "#,
    )
    .bind(range.start())
    .bind(range.end())
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Revenue attributed to each service, descending by value, under the
/// strategy detected for this deployment.
///
/// Without a resolvable service-name column there is nothing to group by,
/// so a single placeholder row is returned without querying.
pub async fn service_revenue(
    pool: &MySqlPool,
    caps: &SchemaCapabilities,
    range: DateRange,
) -> Result<Vec<ServiceRevenue>> {
    // Interpolated below; only ever a value from SERVICE_NAME_CANDIDATES.
    let name_col = match &caps.service_name_column {
        Some(col) => col.as_str(),
        None => return Ok(unknown_service_rows()),
    };

    let sql = match caps.strategy {
        ServiceRevenueStrategy::LineItemPriced => format!(
            r#"
            SELECT s.{name_col} AS service_name,
                   IFNULL(SUM(asv.ActualPrice), 0) AS amount
            FROM AppointmentServices asv
            JOIN Services s ON s.ServiceID = asv.ServiceID
            JOIN Appointments a ON a.AppointmentID = asv.AppointmentID
            WHERE a.AppointmentDate >= ? AND a.AppointmentDate < DATE_ADD(?, INTERVAL 1 DAY)
            GROUP BY s.{name_col}
            ORDER BY amount DESC
            "#
        ),
        ServiceRevenueStrategy::AppointmentPriced => format!(
            r#"
            SELECT s.{name_col} AS service_name,
                   IFNULL(SUM(a.TotalPrice), 0) AS amount
            FROM Appointments a
            JOIN Services s ON s.ServiceID = a.ServiceID
            WHERE a.AppointmentDate >= ? AND a.AppointmentDate < DATE_ADD(?, INTERVAL 1 DAY)
            GROUP BY s.{name_col}
            ORDER BY amount DESC
            "#
        ),
        ServiceRevenueStrategy::UsageCounted => format!(
            r#"
            SELECT s.{name_col} AS service_name,
                   CAST(COUNT(*) AS DECIMAL(12, 2)) AS amount
            FROM AppointmentServices asv
            JOIN Services s ON s.ServiceID = asv.ServiceID
            JOIN Appointments a ON a.AppointmentID = asv.AppointmentID
            WHERE a.AppointmentDate >= ? AND a.AppointmentDate < DATE_ADD(?, INTERVAL 1 DAY)
            GROUP BY s.{name_col}
            ORDER BY amount DESC
            "#
        ),
        ServiceRevenueStrategy::Unavailable => return Ok(Vec::new()),
    };

    let rows = sqlx::query_as::<_, ServiceRevenue>(&sql)
        .bind(range.start())
        .bind(range.end())
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Placeholder result when no service-name column exists.
fn unknown_service_rows() -> Vec<ServiceRevenue> {
    vec![ServiceRevenue {
        service_name: "Unknown".to_string(),
        amount: Decimal::ZERO,
    }]
}

/// Run the `SummarizeRecentPayments` stored procedure and collect its first
/// result set. The procedure body lives in the database and is not owned
/// here.
pub async fn summarize_recent_payments(
    pool: &MySqlPool,
    days: i32,
) -> Result<Vec<RecentPaymentSummary>> {
    let rows = sqlx::query_as::<_, RecentPaymentSummary>(
        r#"
        CALL SummarizeRecentPayments(?)
        "#,
    )
    .bind(days)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unknown_placeholder_is_single_zero_row() {
        let rows = unknown_service_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].service_name, "Unknown");
        assert_eq!(rows[0].amount, dec!(0.0));
    }
}
