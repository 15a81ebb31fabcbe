//! CRUD queries for customers, vehicles, appointments, and payments.
//!
//! One async function per statement; partial updates use `COALESCE` so
//! absent fields keep their stored value.

use sqlx::MySqlPool;

use crate::error::{AppError, Result};
use crate::models::{
    AppointmentSummary, Customer, CustomerUpdate, NewAppointment, NewCustomer, NewPayment,
    NewVehicle, Payment, VehicleSummary, VehicleUpdate, STATUS_SCHEDULED,
};

// ---------- Customers ----------

pub async fn list_customers(pool: &MySqlPool) -> Result<Vec<Customer>> {
    let customers = sqlx::query_as::<_, Customer>(
        r#"
        SELECT
            CustomerID AS customer_id,
            FirstName AS first_name,
            LastName AS last_name,
            Email AS email,
            Phone AS phone,
            JoinDate AS join_date
        FROM Customers
        ORDER BY CustomerID
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(customers)
}

/// Insert a customer with the join date set to today. Returns the new id.
pub async fn insert_customer(pool: &MySqlPool, new: &NewCustomer) -> Result<i64> {
    new.validate()?;

    let result = sqlx::query(
        r#"
        INSERT INTO Customers (FirstName, LastName, Email, Phone, JoinDate)
        VALUES (?, ?, ?, ?, CURDATE())
        "#,
    )
    .bind(&new.first_name)
    .bind(&new.last_name)
    .bind(&new.email)
    .bind(&new.phone)
    .execute(pool)
    .await?;

    Ok(result.last_insert_id() as i64)
}

/// Apply a partial update. Returns the number of affected rows.
pub async fn update_customer(
    pool: &MySqlPool,
    customer_id: i64,
    update: &CustomerUpdate,
) -> Result<u64> {
    if update.is_empty() {
        return Err(AppError::Validation("no fields to update".to_string()));
    }

    let result = sqlx::query(
        r#"
        UPDATE Customers
        SET FirstName = COALESCE(?, FirstName),
            LastName = COALESCE(?, LastName),
            Email = COALESCE(?, Email),
            Phone = COALESCE(?, Phone)
        WHERE CustomerID = ?
        "#,
    )
    .bind(&update.first_name)
    .bind(&update.last_name)
    .bind(&update.email)
    .bind(&update.phone)
    .bind(customer_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_customer(pool: &MySqlPool, customer_id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM Customers WHERE CustomerID = ?")
        .bind(customer_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

// ---------- Vehicles ----------

pub async fn list_vehicles(pool: &MySqlPool) -> Result<Vec<VehicleSummary>> {
    let vehicles = sqlx::query_as::<_, VehicleSummary>(
        r#"
        SELECT
            v.VehicleID AS vehicle_id,
            c.FirstName AS owner_first_name,
            c.LastName AS owner_last_name,
            v.Make AS make,
            v.Model AS model,
            v.LicensePlate AS license_plate
        FROM Vehicles v
        JOIN Customers c ON v.CustomerID = c.CustomerID
        ORDER BY v.VehicleID
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(vehicles)
}

pub async fn insert_vehicle(pool: &MySqlPool, new: &NewVehicle) -> Result<i64> {
    new.validate()?;

    let result = sqlx::query(
        r#"
        INSERT INTO Vehicles (CustomerID, Make, Model, LicensePlate)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(new.customer_id)
    .bind(&new.make)
    .bind(&new.model)
    .bind(&new.license_plate)
    .execute(pool)
    .await?;

    Ok(result.last_insert_id() as i64)
}

/// Apply a partial update. Returns the number of affected rows.
pub async fn update_vehicle(
    pool: &MySqlPool,
    vehicle_id: i64,
    update: &VehicleUpdate,
) -> Result<u64> {
    if update.is_empty() {
        return Err(AppError::Validation("no fields to update".to_string()));
    }

    let result = sqlx::query(
        r#"
        UPDATE Vehicles
        SET Make = COALESCE(?, Make),
            Model = COALESCE(?, Model),
            LicensePlate = COALESCE(?, LicensePlate)
        WHERE VehicleID = ?
        "#,
    )
    .bind(&update.make)
    .bind(&update.model)
    .bind(&update.license_plate)
    .bind(vehicle_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_vehicle(pool: &MySqlPool, vehicle_id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM Vehicles WHERE VehicleID = ?")
        .bind(vehicle_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

// ---------- Appointments ----------

pub async fn list_appointments(pool: &MySqlPool) -> Result<Vec<AppointmentSummary>> {
    let appointments = sqlx::query_as::<_, AppointmentSummary>(
        r#"
        SELECT
            a.AppointmentID AS appointment_id,
            c.FirstName AS customer_first_name,
            v.Make AS vehicle_make,
            a.AppointmentDate AS appointment_date,
            a.StartTime AS start_time,
            a.EndTime AS end_time,
            a.Status AS status
        FROM Appointments a
        JOIN Customers c ON a.CustomerID = c.CustomerID
        JOIN Vehicles v ON a.VehicleID = v.VehicleID
        ORDER BY a.AppointmentID
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// Insert an appointment; new rows always start out `scheduled`.
pub async fn insert_appointment(pool: &MySqlPool, new: &NewAppointment) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO Appointments (CustomerID, VehicleID, AppointmentDate, StartTime, EndTime, Status)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(new.customer_id)
    .bind(new.vehicle_id)
    .bind(new.appointment_date)
    .bind(new.start_time)
    .bind(new.end_time)
    .bind(STATUS_SCHEDULED)
    .execute(pool)
    .await?;

    Ok(result.last_insert_id() as i64)
}

pub async fn update_appointment_status(
    pool: &MySqlPool,
    appointment_id: i64,
    status: &str,
) -> Result<u64> {
    if status.trim().is_empty() {
        return Err(AppError::Validation("status is required".to_string()));
    }

    let result = sqlx::query("UPDATE Appointments SET Status = ? WHERE AppointmentID = ?")
        .bind(status)
        .bind(appointment_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn delete_appointment(pool: &MySqlPool, appointment_id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM Appointments WHERE AppointmentID = ?")
        .bind(appointment_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

// ---------- Payments ----------

pub async fn list_payments(pool: &MySqlPool) -> Result<Vec<Payment>> {
    let payments = sqlx::query_as::<_, Payment>(
        r#"
        SELECT
            PaymentID AS payment_id,
            AppointmentID AS appointment_id,
            PaymentDate AS payment_date,
            Amount AS amount,
            PaymentMethod AS payment_method
        FROM Payments
        ORDER BY PaymentID
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(payments)
}

pub async fn insert_payment(pool: &MySqlPool, new: &NewPayment) -> Result<i64> {
    new.validate()?;

    let result = sqlx::query(
        r#"
        INSERT INTO Payments (AppointmentID, PaymentDate, Amount, PaymentMethod)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(new.appointment_id)
    .bind(new.payment_date)
    .bind(new.amount)
    .bind(&new.payment_method)
    .execute(pool)
    .await?;

    Ok(result.last_insert_id() as i64)
}

pub async fn delete_payment(pool: &MySqlPool, payment_id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM Payments WHERE PaymentID = ?")
        .bind(payment_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
