//! Fare policy - pure pricing rules for completed stays
//!
//! Price is the stay duration in fractional hours times the category's
//! hourly rate, with a free grace window for short stays and a loyalty
//! discount for recurring vehicles. The discount is applied after the
//! grace rule, so a free stay stays free.

use crate::domain::error::ParkingError;
use crate::domain::types::VehicleKind;

/// Hourly rate for cars
pub const CAR_RATE_PER_HOUR: f64 = 1.5;

/// Hourly rate for bikes
pub const BIKE_RATE_PER_HOUR: f64 = 1.0;

/// Stays of at most this many hours are free
const FREE_PARKING_HOURS: f64 = 0.5;

/// Price multiplier for recurring vehicles (5% off)
const RECURRING_DISCOUNT: f64 = 0.95;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Hourly rate lookup for a category
///
/// Exhaustive over the closed `VehicleKind` set: a new category without
/// a rate fails to compile rather than falling through at runtime.
fn hourly_rate(kind: VehicleKind) -> f64 {
    match kind {
        VehicleKind::Car => CAR_RATE_PER_HOUR,
        VehicleKind::Bike => BIKE_RATE_PER_HOUR,
    }
}

/// Compute the fare for a completed stay.
///
/// `exit_ms` must be present and not earlier than `entry_ms`; anything
/// else fails with [`ParkingError::InvalidInterval`]. The function is
/// pure: identical inputs always price identically, and the discount is
/// never compounded across calls.
pub fn calculate_fare(
    entry_ms: u64,
    exit_ms: Option<u64>,
    kind: VehicleKind,
    discount_eligible: bool,
) -> Result<f64, ParkingError> {
    let exit = match exit_ms {
        Some(exit) if exit >= entry_ms => exit,
        _ => return Err(ParkingError::InvalidInterval { entry_ms, exit_ms }),
    };

    let duration_hours = (exit - entry_ms) as f64 / MS_PER_HOUR;
    if duration_hours <= FREE_PARKING_HOURS {
        return Ok(0.0);
    }

    let mut price = duration_hours * hourly_rate(kind);
    if discount_eligible {
        price *= RECURRING_DISCOUNT;
    }
    Ok(price)
}
