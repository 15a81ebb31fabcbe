//! Schema probing and capability detection.
//!
//! The deployed schema is not guaranteed to be stable: the Services
//! display-name column goes by several names, and revenue may be recorded
//! as line-item prices, appointment totals, or not at all. Rather than
//! re-probing `INFORMATION_SCHEMA` on every report, the probes run once at
//! startup into a `SchemaCapabilities` descriptor that the reporting
//! queries dispatch on.

use sqlx::MySqlPool;
use tracing::{debug, warn};

use crate::error::Result;

/// Candidate names for the Services display-name column, in priority order.
pub const SERVICE_NAME_CANDIDATES: &[&str] = &["Name", "ServiceName", "Title", "Service_Title"];

/// True iff the current database has the given column.
pub async fn has_column(pool: &MySqlPool, table: &str, column: &str) -> Result<bool> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM INFORMATION_SCHEMA.COLUMNS
        WHERE TABLE_SCHEMA = DATABASE()
          AND TABLE_NAME = ?
          AND COLUMN_NAME = ?
        "#,
    )
    .bind(table)
    .bind(column)
    .fetch_one(pool)
    .await?;

    Ok(count > 0)
}

/// Resolve the Services display-name column, first candidate present wins.
pub async fn service_name_column(pool: &MySqlPool) -> Result<Option<String>> {
    for candidate in SERVICE_NAME_CANDIDATES {
        if has_column(pool, "Services", candidate).await? {
            return Ok(Some((*candidate).to_string()));
        }
    }
    Ok(None)
}

/// How revenue can be attributed to services in this deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceRevenueStrategy {
    /// Sum AppointmentServices.ActualPrice per service.
    LineItemPriced,
    /// Sum Appointments.TotalPrice per service.
    AppointmentPriced,
    /// Count AppointmentServices rows per service (popularity, not currency).
    UsageCounted,
    /// No usable columns at all.
    Unavailable,
}

/// Pick the revenue strategy from the four column probes.
///
/// Priority order matters: a schema exposing both line-item and
/// appointment-level prices must resolve to the line-item strategy.
pub fn select_strategy(
    has_line_service: bool,
    has_line_price: bool,
    has_appt_service: bool,
    has_appt_price: bool,
) -> ServiceRevenueStrategy {
    if has_line_service && has_line_price {
        ServiceRevenueStrategy::LineItemPriced
    } else if has_appt_service && has_appt_price {
        ServiceRevenueStrategy::AppointmentPriced
    } else if has_line_service {
        ServiceRevenueStrategy::UsageCounted
    } else {
        ServiceRevenueStrategy::Unavailable
    }
}

/// Resolved shape of the deployed schema, detected once at startup.
#[derive(Debug, Clone)]
pub struct SchemaCapabilities {
    /// The Services display-name column, if any candidate exists.
    pub service_name_column: Option<String>,
    pub strategy: ServiceRevenueStrategy,
}

impl SchemaCapabilities {
    /// Probe the information schema and build the descriptor.
    ///
    /// A failed probe is interpreted as "column absent": reporting degrades
    /// to the next strategy instead of failing hard.
    pub async fn detect(pool: &MySqlPool) -> Self {
        let service_name_column = match service_name_column(pool).await {
            Ok(col) => col,
            Err(e) => {
                warn!("service name column probe failed, treating as absent: {}", e);
                None
            }
        };

        let has_line_service = probe(pool, "AppointmentServices", "ServiceID").await;
        let has_line_price = probe(pool, "AppointmentServices", "ActualPrice").await;
        let has_appt_service = probe(pool, "Appointments", "ServiceID").await;
        let has_appt_price = probe(pool, "Appointments", "TotalPrice").await;

        let strategy = select_strategy(
            has_line_service,
            has_line_price,
            has_appt_service,
            has_appt_price,
        );

        debug!(
            ?strategy,
            name_column = service_name_column.as_deref(),
            "schema capabilities detected"
        );

        Self {
            service_name_column,
            strategy,
        }
    }
}

async fn probe(pool: &MySqlPool, table: &str, column: &str) -> bool {
    match has_column(pool, table, column).await {
        Ok(present) => present,
        Err(e) => {
            warn!("column probe {}.{} failed, treating as absent: {}", table, column, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_priority_line_item_first() {
        // Both line-item and appointment pricing present: line-item wins.
        assert_eq!(
            select_strategy(true, true, true, true),
            ServiceRevenueStrategy::LineItemPriced
        );
    }

    #[test]
    fn test_strategy_appointment_priced() {
        assert_eq!(
            select_strategy(false, false, true, true),
            ServiceRevenueStrategy::AppointmentPriced
        );
        // Line-item price without a service reference is unusable.
        assert_eq!(
            select_strategy(false, true, true, true),
            ServiceRevenueStrategy::AppointmentPriced
        );
    }

    #[test]
    fn test_strategy_usage_counted() {
        assert_eq!(
            select_strategy(true, false, false, false),
            ServiceRevenueStrategy::UsageCounted
        );
        // Appointment table with only one of its two columns falls through.
        assert_eq!(
            select_strategy(true, false, true, false),
            ServiceRevenueStrategy::UsageCounted
        );
        assert_eq!(
            select_strategy(true, false, false, true),
            ServiceRevenueStrategy::UsageCounted
        );
    }

    #[test]
    fn test_strategy_unavailable() {
        assert_eq!(
            select_strategy(false, false, false, false),
            ServiceRevenueStrategy::Unavailable
        );
        assert_eq!(
            select_strategy(false, false, false, true),
            ServiceRevenueStrategy::Unavailable
        );
        assert_eq!(
            select_strategy(false, true, false, false),
            ServiceRevenueStrategy::Unavailable
        );
    }

    #[test]
    fn test_candidate_order() {
        assert_eq!(
            SERVICE_NAME_CANDIDATES,
            &["Name", "ServiceName", "Title", "Service_Title"]
        );
    }
}
