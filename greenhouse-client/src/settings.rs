use std::env;
use std::error::Error;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poller {
    pub interval_ms: u64,
    pub history_capacity: usize,
}

/// Advisory defaults surfaced to threshold editors; the device itself owns
/// the effective values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    pub light: i32,
    pub fan: f64,
    pub buzzer: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub device: Device,
    pub poller: Poller,
    pub thresholds: Thresholds,
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let mut settings: Settings = toml::from_str(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../",
            "configs/default.toml"
        )))?;

        if let Ok(base_url) = env::var("GREENHOUSE_DEVICE_URL") {
            settings.device.base_url = base_url;
        }

        settings.device.base_url = settings.device.base_url.trim_end_matches('/').to_string();

        Ok(settings)
    }
}
