//! Appointment models
//!
//! Status is an open-ended string set; the three values below are the ones
//! the application writes or aggregates on, but other values are allowed.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const STATUS_SCHEDULED: &str = "scheduled";
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_COMPLETED: &str = "completed";

/// Appointment listing row joined with customer and vehicle
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AppointmentSummary {
    pub appointment_id: i64,
    pub customer_first_name: String,
    pub vehicle_make: String,
    pub appointment_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
}

/// Input for creating an appointment; new rows always start out `scheduled`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAppointment {
    pub customer_id: i64,
    pub vehicle_id: i64,
    pub appointment_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
