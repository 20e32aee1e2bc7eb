//! Services - business logic
//!
//! This module contains the decision logic of the facility:
//! - `fare` - Pure fare policy for completed stays
//! - `session` - Parking session lifecycle (arrival, departure, spot lookup)

pub mod fare;
pub mod session;

// Re-export commonly used types
pub use session::{InputSource, ParkingSessionManager, SpotInventory, TicketStore};
