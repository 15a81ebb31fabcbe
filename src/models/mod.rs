//! Database row and input models for the business entities.

mod appointment;
mod customer;
mod payment;
mod vehicle;

pub use appointment::{
    AppointmentSummary, NewAppointment, STATUS_COMPLETED, STATUS_PENDING, STATUS_SCHEDULED,
};
pub use customer::{Customer, CustomerUpdate, NewCustomer};
pub use payment::{NewPayment, Payment};
pub use vehicle::{NewVehicle, VehicleSummary, VehicleUpdate};

use crate::error::{AppError, Result};

/// Reject empty required fields. The schema enforces nothing further.
pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_empty_and_whitespace() {
        assert!(require("email", "").is_err());
        assert!(require("email", "   ").is_err());
        assert!(require("email", "a@b.com").is_ok());
    }
}
