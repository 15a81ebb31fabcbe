//! Row and result types for the reporting layer.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use crate::error::{AppError, Result};

/// Inclusive calendar date range.
///
/// Constructing one validates the ordering, so any query that takes a
/// `DateRange` is guaranteed a usable window; reversed input is rejected
/// before any SQL runs. The SQL side makes the end date inclusive with
/// `col >= start AND col < DATE_ADD(end, INTERVAL 1 DAY)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(AppError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse a range from `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d")?;
        let end = NaiveDate::parse_from_str(end, "%Y-%m-%d")?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Revenue (or usage count, under the counting strategy) attributed to one
/// service.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceRevenue {
    pub service_name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

/// One day of the revenue trend
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyRevenue {
    pub day: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    pub revenue: Decimal,
}

/// One month of sales, keyed `YYYY-MM`
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MonthlySales {
    pub month: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub revenue: Decimal,
}

/// Row of the `SummarizeRecentPayments` stored procedure.
///
/// A `CALL` result set cannot be aliased, so the procedure's column names
/// are mapped here instead.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecentPaymentSummary {
    #[sqlx(rename = "PaymentID")]
    pub payment_id: i64,
    #[sqlx(rename = "AppointmentID")]
    pub appointment_id: i64,
    #[sqlx(rename = "Amount")]
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[sqlx(rename = "Date")]
    pub payment_date: NaiveDate,
}

/// Everything the dashboard view renders for one date range.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_revenue: Decimal,
    pub total_appointments: i64,
    pub unique_customers: i64,
    pub completed_appointments: i64,
    pub pending_appointments: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub average_appointment_value: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub completion_rate: Decimal,
    pub top_service_name: String,
    pub service_revenue: Vec<ServiceRevenue>,
    pub daily_revenue_trend: Vec<DailyRevenue>,
    pub monthly_sales: Vec<MonthlySales>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_accepts_ordered_dates() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        assert_eq!(range.start(), date(2024, 1, 1));
        assert_eq!(range.end(), date(2024, 1, 31));
    }

    #[test]
    fn test_range_accepts_single_day() {
        assert!(DateRange::new(date(2024, 1, 5), date(2024, 1, 5)).is_ok());
    }

    #[test]
    fn test_range_rejects_reversed_dates() {
        let err = DateRange::new(date(2024, 2, 1), date(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, AppError::InvalidDateRange { .. }));
    }

    #[test]
    fn test_range_parse() {
        let range = DateRange::parse("2024-01-01", "2024-01-31").unwrap();
        assert_eq!(range.end(), date(2024, 1, 31));

        assert!(matches!(
            DateRange::parse("2024-13-01", "2024-01-31"),
            Err(AppError::InvalidDate(_))
        ));
        assert!(matches!(
            DateRange::parse("2024-01-31", "2024-01-01"),
            Err(AppError::InvalidDateRange { .. })
        ));
    }
}
