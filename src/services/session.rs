//! Parking session lifecycle - arrival and departure transitions
//!
//! The session manager owns the three collaborator interfaces (input
//! source, spot inventory, ticket store) and runs one transition at a
//! time: allocate a spot and open a ticket on arrival, price and close
//! the ticket on departure. A spot is freed only after the closing
//! ticket update has persisted, so a fare is never lost to a reused
//! spot.

use crate::domain::error::ParkingError;
use crate::domain::ticket::{epoch_ms, Ticket};
use crate::domain::types::{ParkingSpot, SpotId, VehicleKind};
use crate::services::fare;
use tracing::{info, warn};

/// Source of operator input for a transition
pub trait InputSource {
    /// Read a vehicle category selection (1 = Car, 2 = Bike, else invalid)
    fn read_category_selection(&mut self) -> i32;

    /// Read a vehicle registration identifier
    fn read_vehicle_identifier(&mut self) -> String;
}

/// Spot allocation state for the facility
pub trait SpotInventory {
    /// Next free spot id for a category; 0 or negative means none
    fn next_available(&self, kind: VehicleKind) -> i32;

    fn mark_occupied(&mut self, id: SpotId, kind: VehicleKind);

    fn mark_available(&mut self, id: SpotId, kind: VehicleKind);
}

/// Ticket persistence, keyed by vehicle registration
pub trait TicketStore {
    /// Persist a new ticket; false when the write failed
    fn save(&mut self, ticket: &Ticket) -> bool;

    /// The open ticket for a registration, if the vehicle is parked
    fn find_open_ticket(&self, reg_number: &str) -> Option<Ticket>;

    /// Persist a changed ticket; false when the write failed
    fn update(&mut self, ticket: &Ticket) -> bool;

    /// Number of tickets ever stored for a registration
    fn count_tickets_for(&self, reg_number: &str) -> u32;
}

/// Drives arrival and departure transitions for one operator terminal
pub struct ParkingSessionManager<I, V, T> {
    input: I,
    inventory: V,
    tickets: T,
}

impl<I: InputSource, V: SpotInventory, T: TicketStore> ParkingSessionManager<I, V, T> {
    pub fn new(input: I, inventory: V, tickets: T) -> Self {
        Self { input, inventory, tickets }
    }

    /// Handle an arriving vehicle: allocate a spot and open a ticket.
    ///
    /// The spot is marked occupied before the ticket is saved. If the
    /// save then fails, the spot stays occupied; the facility prefers
    /// under-booking to handing the same spot out twice.
    pub fn process_incoming_vehicle(&mut self) -> Result<Ticket, ParkingError> {
        let spot = self.allocate_spot()?;
        self.inventory.mark_occupied(spot.id(), spot.kind());

        let reg_number = self.input.read_vehicle_identifier();
        if self.tickets.count_tickets_for(&reg_number) > 0 {
            // Greeting only; discount eligibility is recomputed at departure
            info!(reg_number = %reg_number, "recurring_vehicle");
        }

        let ticket = Ticket::new(&reg_number, spot.id(), spot.kind());
        if !self.tickets.save(&ticket) {
            return Err(ParkingError::PersistenceFailure("save"));
        }

        info!(
            ticket_id = %ticket.id,
            reg_number = %ticket.reg_number,
            spot = %ticket.spot_id,
            kind = %ticket.kind,
            "vehicle_parked"
        );
        Ok(ticket)
    }

    /// Handle a departing vehicle: price and close its open ticket.
    ///
    /// Two-step commit: the closed ticket is persisted first, and only a
    /// successful write frees the spot. On failure the spot stays
    /// occupied and the caller may retry the whole transition.
    pub fn process_exiting_vehicle(&mut self) -> Result<Ticket, ParkingError> {
        let reg_number = self.input.read_vehicle_identifier();
        let mut ticket = self
            .tickets
            .find_open_ticket(&reg_number)
            .ok_or_else(|| ParkingError::TicketNotFound(reg_number.clone()))?;

        let exited_at = epoch_ms();
        // Strictly more than one stored ticket: at least one completed
        // visit besides the current one
        let discount = self.tickets.count_tickets_for(&reg_number) > 1;
        let price =
            fare::calculate_fare(ticket.entered_at, Some(exited_at), ticket.kind, discount)?;
        ticket.close(exited_at, price);

        if !self.tickets.update(&ticket) {
            return Err(ParkingError::PersistenceFailure("update"));
        }
        self.inventory.mark_available(ticket.spot_id, ticket.kind);

        info!(
            ticket_id = %ticket.id,
            reg_number = %ticket.reg_number,
            spot = %ticket.spot_id,
            price = %ticket.price,
            discount = %discount,
            "vehicle_departed"
        );
        Ok(ticket)
    }

    /// Next free spot for the operator's category selection.
    ///
    /// Absorbs invalid selections instead of propagating them: user
    /// input mistakes end the lookup, not the session flow. Returns a
    /// descriptor only; nothing is reserved.
    pub fn next_parking_number_if_available(&mut self) -> Option<ParkingSpot> {
        match self.allocate_spot() {
            Ok(spot) => Some(spot),
            Err(ParkingError::InvalidSelection(selection)) => {
                warn!(selection = %selection, "category_selection_invalid");
                None
            }
            Err(ParkingError::NoAvailableSpot(kind)) => {
                info!(kind = %kind, "no_spot_available");
                None
            }
            Err(_) => None,
        }
    }

    /// Read a category selection and query the inventory for its next
    /// free spot
    fn allocate_spot(&mut self) -> Result<ParkingSpot, ParkingError> {
        let selection = self.input.read_category_selection();
        let kind = VehicleKind::from_selection(selection)
            .ok_or(ParkingError::InvalidSelection(selection))?;

        let raw_id = self.inventory.next_available(kind);
        if raw_id <= 0 {
            return Err(ParkingError::NoAvailableSpot(kind));
        }
        Ok(ParkingSpot::new(SpotId(raw_id), kind, true))
    }
}
