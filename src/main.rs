//! parklot - parking facility control for a single operator terminal
//!
//! Allocates spots to arriving vehicles, records tickets, and prices
//! stays on departure, with a loyalty discount for recurring vehicles.
//!
//! Module structure:
//! - `domain/` - Core business types (Ticket, ParkingSpot, VehicleKind)
//! - `io/` - External interfaces (console input, spot inventory, ticket file)
//! - `services/` - Business logic (fare policy, session manager)
//! - `infra/` - Infrastructure (config)

use clap::Parser;
use parklot::domain::Ticket;
use parklot::infra::Config;
use parklot::io::{ConsoleInput, InMemorySpotInventory, JsonlTicketStore};
use parklot::services::{ParkingSessionManager, SpotInventory};
use tracing::{error, info};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// parklot - parking facility control system
#[derive(Parser, Debug)]
#[command(name = "parklot", version, about)]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "config/dev.toml")]
    config: String,
}

fn main() -> anyhow::Result<()> {
    // Structured logging with configurable level via RUST_LOG env var
    // Default: INFO, use RUST_LOG=debug for full event visibility
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .init();

    info!("parklot starting");

    let args = Args::parse();
    let config = Config::load_from_path(&args.config);

    info!(
        config_file = %config.config_file(),
        facility = %config.facility_name(),
        car_spots = %config.car_spots(),
        bike_spots = %config.bike_spots(),
        tickets_file = %config.tickets_file(),
        "config_loaded"
    );

    let store = JsonlTicketStore::open(config.tickets_file());
    let mut inventory = InMemorySpotInventory::new(config.car_spots(), config.bike_spots());

    // Re-occupy spots held by tickets that were still open at shutdown
    for ticket in store.open_tickets() {
        inventory.mark_occupied(ticket.spot_id, ticket.kind);
        info!(reg_number = %ticket.reg_number, spot = %ticket.spot_id, "spot_rehydrated");
    }

    let mut manager = ParkingSessionManager::new(ConsoleInput::new(), inventory, store);
    let mut menu = ConsoleInput::new();

    println!("Welcome to {}", config.facility_name());

    loop {
        println!();
        println!("Please select an option:");
        println!("  1 - Vehicle arriving (allocate a spot)");
        println!("  2 - Vehicle leaving (compute the fare)");
        println!("  3 - Shutdown");

        match menu.read_selection() {
            1 => match manager.process_incoming_vehicle() {
                Ok(ticket) => print_arrival(&ticket),
                Err(e) => {
                    error!(error = %e, "arrival_failed");
                    println!("Unable to park the vehicle: {e}");
                }
            },
            2 => match manager.process_exiting_vehicle() {
                Ok(ticket) => print_departure(&ticket),
                Err(e) => {
                    error!(error = %e, "departure_failed");
                    println!("Unable to process the departure: {e}");
                }
            },
            3 => {
                info!("shutdown_requested");
                break;
            }
            other => {
                if menu.at_eof() {
                    info!("input_stream_closed");
                    break;
                }
                println!("Unsupported option: {other}");
            }
        }
    }

    println!("Goodbye.");
    Ok(())
}

fn print_arrival(ticket: &Ticket) {
    println!("Ticket recorded. Please park in spot {} ({}).", ticket.spot_id, ticket.kind);
    println!(
        "In-time for vehicle {}: {}",
        ticket.reg_number,
        format_timestamp(ticket.entered_at)
    );
}

fn print_departure(ticket: &Ticket) {
    println!("Please pay the parking fare: {:.2}", ticket.price);
    println!(
        "Out-time for vehicle {}: {}",
        ticket.reg_number,
        format_timestamp(ticket.exited_at.unwrap_or_default())
    );
}

/// Epoch milliseconds rendered for the operator
fn format_timestamp(ms: u64) -> String {
    chrono::DateTime::<chrono::Utc>::from_timestamp_millis(ms as i64)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("{ms} ms"))
}
