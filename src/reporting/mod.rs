//! Reporting and aggregation layer.
//!
//! Turns a date range into business metrics and chart-ready series over a
//! schema whose exact shape is not guaranteed, adapting to the columns that
//! are actually present.

pub mod metrics;
pub mod models;
pub mod queries;
pub mod report;
pub mod schema;

// Re-export commonly used items
pub use models::{DashboardReport, DateRange, RecentPaymentSummary, ServiceRevenue};
pub use queries::summarize_recent_payments;
pub use report::dashboard_report;
pub use schema::{SchemaCapabilities, ServiceRevenueStrategy};
