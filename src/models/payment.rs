//! Payment models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::Result;

use super::require;

/// Payment from the Payments table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub payment_id: i64,
    pub appointment_id: i64,
    pub payment_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub payment_method: String,
}

/// Input for recording a payment
#[derive(Debug, Clone, Deserialize)]
pub struct NewPayment {
    pub appointment_id: i64,
    pub payment_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub payment_method: String,
}

impl NewPayment {
    pub fn validate(&self) -> Result<()> {
        require("payment method", &self.payment_method)?;
        Ok(())
    }
}
