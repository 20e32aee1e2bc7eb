//! Domain models - core business types
//!
//! This module contains the canonical data types used throughout the system:
//! - `Ticket` - one parking session from arrival to departure
//! - `ParkingSpot` - physical spot identity and availability
//! - `VehicleKind` - closed set of vehicle categories
//! - `ParkingError` - error taxonomy for the parking core

pub mod error;
pub mod ticket;
pub mod types;

// Re-export commonly used types at module level
pub use error::ParkingError;
pub use ticket::Ticket;
pub use types::{ParkingSpot, SpotId, VehicleKind};
