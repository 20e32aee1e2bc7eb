//! IO modules - external system interfaces
//!
//! This module contains the default collaborator implementations:
//! - `console` - Operator input from stdin
//! - `inventory` - In-memory spot availability
//! - `ticket_file` - Ticket persistence (JSONL format)

pub mod console;
pub mod inventory;
pub mod ticket_file;

// Re-export commonly used types
pub use console::ConsoleInput;
pub use inventory::InMemorySpotInventory;
pub use ticket_file::JsonlTicketStore;
