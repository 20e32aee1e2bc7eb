//! Console input source - operator selections and registrations from stdin

use crate::services::session::InputSource;
use std::io::{self, BufRead};
use tracing::warn;

/// Stdin-backed input source for the operator terminal
pub struct ConsoleInput {
    eof: bool,
}

impl ConsoleInput {
    pub fn new() -> Self {
        Self { eof: false }
    }

    /// True once stdin has been closed
    pub fn at_eof(&self) -> bool {
        self.eof
    }

    /// Read one trimmed line; `None` once the input stream is closed
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => {
                self.eof = true;
                None
            }
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                warn!(error = %e, "stdin_read_failed");
                self.eof = true;
                None
            }
        }
    }

    /// Read an integer selection; unparsable input maps to -1 so the
    /// session layer rejects it instead of this boundary guessing
    pub fn read_selection(&mut self) -> i32 {
        match self.read_line() {
            Some(line) => line.parse::<i32>().unwrap_or_else(|_| {
                warn!(input = %line, "selection_not_numeric");
                -1
            }),
            None => -1,
        }
    }
}

impl InputSource for ConsoleInput {
    fn read_category_selection(&mut self) -> i32 {
        println!("Please select the vehicle type:");
        println!("  1 - Car");
        println!("  2 - Bike");
        self.read_selection()
    }

    fn read_vehicle_identifier(&mut self) -> String {
        // Tickets carry a non-empty registration; hold the line here
        // rather than letting an empty one into the core
        loop {
            println!("Please type the vehicle registration number and press enter:");
            match self.read_line() {
                Some(reg) if !reg.is_empty() => return reg,
                Some(_) => warn!("empty_registration_rejected"),
                None => {
                    warn!("input_stream_closed");
                    return String::new();
                }
            }
        }
    }
}
