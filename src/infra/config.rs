//! Configuration loading from TOML files
//!
//! Config file is selected via the --config command line argument
//! (default: config/dev.toml). A missing or malformed file falls back to
//! compiled defaults with a warning.

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
struct FacilityConfig {
    pub name: String,
    pub car_spots: u32,
    pub bike_spots: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct TicketsConfig {
    #[serde(default = "default_tickets_file")]
    pub file: String,
}

impl Default for TicketsConfig {
    fn default() -> Self {
        Self { file: default_tickets_file() }
    }
}

fn default_tickets_file() -> String {
    "tickets.jsonl".to_string()
}

/// Raw TOML layout
#[derive(Debug, Deserialize)]
struct TomlConfig {
    facility: FacilityConfig,
    #[serde(default)]
    tickets: TicketsConfig,
}

/// Flattened runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    facility_name: String,
    car_spots: u32,
    bike_spots: u32,
    tickets_file: String,
    config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            facility_name: "parklot".to_string(),
            car_spots: 3,
            bike_spots: 2,
            tickets_file: default_tickets_file(),
            config_file: "default".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(Self {
            facility_name: toml_config.facility.name,
            car_spots: toml_config.facility.car_spots,
            bike_spots: toml_config.facility.bike_spots,
            tickets_file: toml_config.tickets.file,
            config_file: path.display().to_string(),
        })
    }

    /// Load configuration - tries the TOML file first, falls back to defaults
    pub fn load_from_path(path: &str) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    // Getters for all config fields
    pub fn facility_name(&self) -> &str {
        &self.facility_name
    }

    pub fn car_spots(&self) -> u32 {
        self.car_spots
    }

    pub fn bike_spots(&self) -> u32 {
        self.bike_spots
    }

    pub fn tickets_file(&self) -> &str {
        &self.tickets_file
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }
}
