//! Customer models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::Result;

use super::require;

/// Customer from the Customers table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub join_date: NaiveDate,
}

/// Input for creating a customer; the join date is set by the database.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl NewCustomer {
    pub fn validate(&self) -> Result<()> {
        require("first name", &self.first_name)?;
        require("last name", &self.last_name)?;
        require("email", &self.email)?;
        require("phone", &self.phone)?;
        Ok(())
    }
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CustomerUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_requires_every_field() {
        let new = NewCustomer {
            first_name: "Ana".to_string(),
            last_name: "Reyes".to_string(),
            email: "ana@example.com".to_string(),
            phone: "555-0100".to_string(),
        };
        assert!(new.validate().is_ok());

        let missing = NewCustomer {
            phone: String::new(),
            ..new
        };
        assert!(missing.validate().is_err());
    }

    #[test]
    fn test_update_is_empty() {
        assert!(CustomerUpdate::default().is_empty());

        let update = CustomerUpdate {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
