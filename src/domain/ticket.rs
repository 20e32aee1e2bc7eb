//! Ticket data model for parking sessions

use crate::domain::types::{SpotId, VehicleKind};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Generate a new UUIDv7 (time-sortable)
pub fn new_uuid_v7() -> String {
    Uuid::now_v7().to_string()
}

/// Get current epoch milliseconds
#[inline]
pub fn epoch_ms() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis() as u64
}

/// One parking session for a vehicle
///
/// A ticket references its spot by id and category, never by a shared
/// mutable spot object. It is created open (no exit time, price 0) and
/// closed exactly once at departure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// UUIDv7 ticket ID
    pub id: String,
    /// Vehicle registration identifier
    pub reg_number: String,
    pub spot_id: SpotId,
    pub kind: VehicleKind,
    /// Entry timestamp, epoch ms
    pub entered_at: u64,
    /// Exit timestamp, epoch ms; absent while the vehicle is parked
    pub exited_at: Option<u64>,
    /// Fare in currency units; 0 until departure
    pub price: f64,
}

impl Ticket {
    /// Open a ticket for an arriving vehicle, stamped with the current time
    pub fn new(reg_number: &str, spot_id: SpotId, kind: VehicleKind) -> Self {
        Self {
            id: new_uuid_v7(),
            reg_number: reg_number.to_string(),
            spot_id,
            kind,
            entered_at: epoch_ms(),
            exited_at: None,
            price: 0.0,
        }
    }

    /// Close the ticket with an exit time and the computed fare
    pub fn close(&mut self, exited_at: u64, price: f64) {
        self.exited_at = Some(exited_at);
        self.price = price;
    }

    /// A ticket is open while the vehicle is still parked
    #[inline]
    pub fn is_open(&self) -> bool {
        self.exited_at.is_none()
    }
}
