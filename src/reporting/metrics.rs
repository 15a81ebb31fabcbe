//! Derived dashboard metrics.
//!
//! Pure functions over already-fetched values - no database access.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::ServiceRevenue;

/// Round to specified decimal places using banker's rounding
/// (ROUND_HALF_EVEN), which reduces cumulative rounding bias.
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Average revenue per appointment, rounded to cents.
///
/// The denominator is clamped to 1 so an empty range yields 0 instead of a
/// division by zero; the result is not a meaningful average in that case.
pub fn average_appointment_value(total_revenue: Decimal, total_appointments: i64) -> Decimal {
    round_money(total_revenue / Decimal::from(total_appointments.max(1)), 2)
}

/// Share of appointments completed, as a percentage.
pub fn completion_rate(completed_appointments: i64, total_appointments: i64) -> Decimal {
    Decimal::from(completed_appointments) / Decimal::from(total_appointments.max(1))
        * Decimal::from(100)
}

/// Name of the highest-value service, or "No Data" when the resolver came
/// back empty.
pub fn top_service_name(services: &[ServiceRevenue]) -> String {
    services
        .first()
        .map(|s| s.service_name.clone())
        .unwrap_or_else(|| "No Data".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(2)); // rounds down to even
        assert_eq!(round_money(dec!(3.5), 0), dec!(4)); // rounds up to even
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
    }

    // ==================== average_appointment_value tests ====================

    #[test]
    fn test_average_value_basic() {
        assert_eq!(average_appointment_value(dec!(150.00), 2), dec!(75.00));
    }

    #[test]
    fn test_average_value_rounds_to_cents() {
        // 100 / 3 = 33.333...
        assert_eq!(average_appointment_value(dec!(100), 3), dec!(33.33));
    }

    #[test]
    fn test_average_value_zero_appointments_uses_denominator_one() {
        assert_eq!(average_appointment_value(dec!(0), 0), dec!(0.00));
        // Revenue with no recorded appointments: denominator is clamped, not zero.
        assert_eq!(average_appointment_value(dec!(120), 0), dec!(120.00));
    }

    // ==================== completion_rate tests ====================

    #[test]
    fn test_completion_rate_three_of_five() {
        assert_eq!(completion_rate(3, 5), dec!(60.0));
    }

    #[test]
    fn test_completion_rate_all_and_none() {
        assert_eq!(completion_rate(5, 5), dec!(100));
        assert_eq!(completion_rate(0, 5), dec!(0));
    }

    #[test]
    fn test_completion_rate_zero_appointments_uses_denominator_one() {
        assert_eq!(completion_rate(0, 0), dec!(0));
    }

    // ==================== top_service_name tests ====================

    #[test]
    fn test_top_service_name_first_entry_wins() {
        let services = vec![
            ServiceRevenue {
                service_name: "Full Detail".to_string(),
                amount: dec!(900),
            },
            ServiceRevenue {
                service_name: "Wax".to_string(),
                amount: dec!(250),
            },
        ];
        assert_eq!(top_service_name(&services), "Full Detail");
    }

    #[test]
    fn test_top_service_name_empty_is_no_data() {
        assert_eq!(top_service_name(&[]), "No Data");
    }
}
