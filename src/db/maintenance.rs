//! Destructive maintenance operations.

use sqlx::MySqlPool;
use tracing::{info, warn};

use crate::error::Result;

/// Tables in wipe order, children before parents.
const WIPE_ORDER: &[&str] = &[
    "AppointmentAddOns",
    "AppointmentServices",
    "Reviews",
    "Payments",
    "Appointments",
    "Vehicles",
    "Services",
    "ServiceAddOns",
    "Customers",
];

/// Truncate every business table.
///
/// `SET FOREIGN_KEY_CHECKS` is session-scoped, so the whole sequence runs on
/// a single acquired connection. Tables that fail to truncate (e.g. absent
/// in this deployment) are skipped with a warning.
pub async fn wipe_all_data(pool: &MySqlPool) -> Result<()> {
    let mut conn = pool.acquire().await?;

    sqlx::query("SET FOREIGN_KEY_CHECKS = 0")
        .execute(&mut *conn)
        .await?;

    for table in WIPE_ORDER {
        let stmt = format!("TRUNCATE TABLE {table}");
        if let Err(e) = sqlx::query(&stmt).execute(&mut *conn).await {
            warn!("skipping {}: {}", table, e);
        }
    }

    sqlx::query("SET FOREIGN_KEY_CHECKS = 1")
        .execute(&mut *conn)
        .await?;

    info!("all business tables wiped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wipe_order_children_before_parents() {
        let pos = |t: &str| WIPE_ORDER.iter().position(|x| *x == t).unwrap();
        assert!(pos("Payments") < pos("Appointments"));
        assert!(pos("Appointments") < pos("Vehicles"));
        assert!(pos("Vehicles") < pos("Customers"));
        assert!(pos("AppointmentServices") < pos("Services"));
    }
}
