//! Vehicle models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::Result;

use super::require;

/// Vehicle listing row joined with the owning customer's name
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VehicleSummary {
    pub vehicle_id: i64,
    pub owner_first_name: String,
    pub owner_last_name: String,
    pub make: String,
    pub model: String,
    pub license_plate: String,
}

/// Input for creating a vehicle
#[derive(Debug, Clone, Deserialize)]
pub struct NewVehicle {
    pub customer_id: i64,
    pub make: String,
    pub model: String,
    pub license_plate: String,
}

impl NewVehicle {
    pub fn validate(&self) -> Result<()> {
        require("make", &self.make)?;
        require("model", &self.model)?;
        require("license plate", &self.license_plate)?;
        Ok(())
    }
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleUpdate {
    pub make: Option<String>,
    pub model: Option<String>,
    pub license_plate: Option<String>,
}

impl VehicleUpdate {
    pub fn is_empty(&self) -> bool {
        self.make.is_none() && self.model.is_none() && self.license_plate.is_none()
    }
}
