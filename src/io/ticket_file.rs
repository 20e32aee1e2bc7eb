//! Ticket store backed by a JSONL file
//!
//! Tickets are appended as one JSON object per line. Opening the store
//! replays the file with last-record-wins per ticket id, so an update is
//! simply a newer record for the same id. Unreadable lines are skipped,
//! never fatal.

use crate::domain::ticket::Ticket;
use crate::services::session::TicketStore;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::{debug, error, info, warn};

pub struct JsonlTicketStore {
    file_path: String,
    /// Replayed records, one per ticket id, in first-seen order
    tickets: Vec<Ticket>,
}

impl JsonlTicketStore {
    /// Open a store, replaying any existing records
    pub fn open(file_path: &str) -> Self {
        let tickets = Self::replay(file_path);
        info!(file_path = %file_path, tickets = %tickets.len(), "ticket_store_opened");
        Self { file_path: file_path.to_string(), tickets }
    }

    fn replay(file_path: &str) -> Vec<Ticket> {
        let content = match std::fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };

        let mut tickets: Vec<Ticket> = Vec::new();
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Ticket>(line) {
                Ok(ticket) => Self::index(&mut tickets, ticket),
                Err(e) => warn!(file = %file_path, error = %e, "ticket_record_skipped"),
            }
        }
        tickets
    }

    fn index(tickets: &mut Vec<Ticket>, ticket: Ticket) {
        match tickets.iter_mut().find(|t| t.id == ticket.id) {
            Some(existing) => *existing = ticket,
            None => tickets.push(ticket),
        }
    }

    fn append_record(&self, ticket: &Ticket) -> std::io::Result<()> {
        let path = Path::new(&self.file_path);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string(ticket)?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", json)?;
        debug!(file = %self.file_path, bytes = %json.len(), "ticket_record_written");

        Ok(())
    }

    fn write(&mut self, ticket: &Ticket, op: &'static str) -> bool {
        match self.append_record(ticket) {
            Ok(()) => {
                Self::index(&mut self.tickets, ticket.clone());
                true
            }
            Err(e) => {
                error!(ticket_id = %ticket.id, op = %op, error = %e, "ticket_write_failed");
                false
            }
        }
    }

    /// Open tickets in the store; used to rehydrate spot occupancy at boot
    pub fn open_tickets(&self) -> Vec<Ticket> {
        self.tickets.iter().filter(|t| t.is_open()).cloned().collect()
    }
}

impl TicketStore for JsonlTicketStore {
    fn save(&mut self, ticket: &Ticket) -> bool {
        self.write(ticket, "save")
    }

    fn find_open_ticket(&self, reg_number: &str) -> Option<Ticket> {
        self.tickets.iter().find(|t| t.reg_number == reg_number && t.is_open()).cloned()
    }

    fn update(&mut self, ticket: &Ticket) -> bool {
        self.write(ticket, "update")
    }

    fn count_tickets_for(&self, reg_number: &str) -> u32 {
        self.tickets.iter().filter(|t| t.reg_number == reg_number).count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticket::epoch_ms;
    use crate::domain::types::{SpotId, VehicleKind};
    use std::fs;
    use tempfile::tempdir;

    fn open_store(dir: &tempfile::TempDir) -> JsonlTicketStore {
        let path = dir.path().join("tickets.jsonl");
        JsonlTicketStore::open(path.to_str().unwrap())
    }

    #[test]
    fn test_save_then_find_open() {
        let dir = tempdir().unwrap();
        let mut store = open_store(&dir);

        let ticket = Ticket::new("ABCDEF", SpotId(1), VehicleKind::Car);
        assert!(store.save(&ticket));

        let found = store.find_open_ticket("ABCDEF").unwrap();
        assert_eq!(found, ticket);
        assert!(store.find_open_ticket("UNKNOWN").is_none());
    }

    #[test]
    fn test_update_closes_the_open_ticket() {
        let dir = tempdir().unwrap();
        let mut store = open_store(&dir);

        let mut ticket = Ticket::new("ABCDEF", SpotId(1), VehicleKind::Car);
        store.save(&ticket);

        ticket.close(epoch_ms(), 1.5);
        assert!(store.update(&ticket));

        assert!(store.find_open_ticket("ABCDEF").is_none());
        // An update is not a new visit
        assert_eq!(store.count_tickets_for("ABCDEF"), 1);
    }

    #[test]
    fn test_count_is_per_registration() {
        let dir = tempdir().unwrap();
        let mut store = open_store(&dir);

        let mut first = Ticket::new("ABCDEF", SpotId(1), VehicleKind::Car);
        first.close(epoch_ms(), 1.5);
        store.save(&first);
        store.save(&Ticket::new("ABCDEF", SpotId(1), VehicleKind::Car));
        store.save(&Ticket::new("GHIJKL", SpotId(4), VehicleKind::Bike));

        assert_eq!(store.count_tickets_for("ABCDEF"), 2);
        assert_eq!(store.count_tickets_for("GHIJKL"), 1);
        assert_eq!(store.count_tickets_for("UNKNOWN"), 0);
    }

    #[test]
    fn test_reopen_replays_last_record_per_ticket() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tickets.jsonl");
        let path_str = path.to_str().unwrap();

        let mut ticket = Ticket::new("ABCDEF", SpotId(2), VehicleKind::Car);
        {
            let mut store = JsonlTicketStore::open(path_str);
            store.save(&ticket);
            ticket.close(epoch_ms(), 3.0);
            store.update(&ticket);
        }

        // Two lines on disk, one ticket after replay
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);

        let store = JsonlTicketStore::open(path_str);
        assert_eq!(store.count_tickets_for("ABCDEF"), 1);
        assert!(store.find_open_ticket("ABCDEF").is_none());
        assert!(store.open_tickets().is_empty());
    }

    #[test]
    fn test_corrupt_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tickets.jsonl");

        let ticket = Ticket::new("ABCDEF", SpotId(1), VehicleKind::Car);
        let good = serde_json::to_string(&ticket).unwrap();
        fs::write(&path, format!("not json at all\n{good}\n{{\"id\":\"half\"\n")).unwrap();

        let store = JsonlTicketStore::open(path.to_str().unwrap());
        assert_eq!(store.count_tickets_for("ABCDEF"), 1);
        assert_eq!(store.find_open_ticket("ABCDEF").unwrap(), ticket);
    }

    #[test]
    fn test_open_tickets_for_rehydration() {
        let dir = tempdir().unwrap();
        let mut store = open_store(&dir);

        let parked = Ticket::new("ABCDEF", SpotId(1), VehicleKind::Car);
        let mut departed = Ticket::new("GHIJKL", SpotId(2), VehicleKind::Car);
        departed.close(epoch_ms(), 1.5);
        store.save(&parked);
        store.save(&departed);

        let open = store.open_tickets();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].reg_number, "ABCDEF");
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested").join("dir").join("tickets.jsonl");

        let mut store = JsonlTicketStore::open(nested.to_str().unwrap());
        assert!(store.save(&Ticket::new("ABCDEF", SpotId(1), VehicleKind::Car)));
        assert!(nested.exists());
    }
}
