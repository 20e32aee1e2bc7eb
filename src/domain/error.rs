//! Error taxonomy for the parking core

use crate::domain::types::VehicleKind;
use thiserror::Error;

/// Errors surfaced by the fare policy and the session manager
#[derive(Debug, Error)]
pub enum ParkingError {
    /// Exit time absent or earlier than the entry time; fatal to that
    /// fare calculation, never coerced
    #[error("exit time is missing or precedes entry time (entry {entry_ms}, exit {exit_ms:?})")]
    InvalidInterval { entry_ms: u64, exit_ms: Option<u64> },

    /// A category the fare table does not know. With the closed
    /// `VehicleKind` set this cannot be produced; hitting it means a
    /// broken invariant, not bad user input.
    #[error("unsupported vehicle category: {0}")]
    UnsupportedCategory(String),

    /// Category selection outside the menu range
    #[error("invalid vehicle category selection: {0}")]
    InvalidSelection(i32),

    /// Every spot of the requested category is occupied
    #[error("no free {0} spot available")]
    NoAvailableSpot(VehicleKind),

    /// Departure requested for a vehicle with no open ticket
    #[error("no open ticket for vehicle {0}")]
    TicketNotFound(String),

    /// The ticket store reported a failed write; prior state is intact
    #[error("ticket store rejected the {0} write")]
    PersistenceFailure(&'static str),
}
