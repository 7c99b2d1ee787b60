use std::error::Error;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mock {
    pub host: String,
    pub port: u16,
    pub tick_ms: u64,
}

/// Initial trigger points for the simulated actuators. Matches the
/// `[thresholds]` section the client reads for its editor defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    pub light: i32,
    pub fan: f64,
    pub buzzer: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub mock: Mock,
    pub thresholds: Thresholds,
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let settings: Settings = toml::from_str(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../",
            "configs/default.toml"
        )))?;

        Ok(settings)
    }
}
