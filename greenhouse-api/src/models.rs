use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Control mode of an actuator, as the device serializes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActuatorMode {
    Manual,
    Auto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightService {
    /// Raw ADC reading, nominally 0..=4095
    pub luminosity: i32,
    /// Control mode
    pub mode: ActuatorMode,
    /// Current on/off state
    pub is_on: bool,
    /// Luminosity trigger point for AUTO mode
    pub threshold: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FanService {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity as a percentage
    pub humidity: f64,
    /// Control mode
    pub mode: ActuatorMode,
    /// Current on/off state
    pub is_on: bool,
    /// Temperature trigger point for AUTO mode
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuzzerService {
    /// Control mode
    pub mode: ActuatorMode,
    /// Current on/off state
    pub is_on: bool,
}

/// One snapshot of the greenhouse controller. All three sections are
/// required; a payload missing any of them is rejected wholesale by
/// [`crate::validator::validate_status`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatus {
    pub light: LightService,
    pub fan: FanService,
    pub buzzer: BuzzerService,
}

/// One accumulated observation for charting. Timestamps are wall clock at
/// accumulation time, not device time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySample {
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub temperature: f64,
    pub humidity: f64,
    pub luminosity: i32,
    pub light_on: bool,
    pub fan_on: bool,
    pub buzzer_on: bool,
}

impl HistorySample {
    pub fn from_status(status: &DeviceStatus) -> Self {
        Self {
            timestamp: OffsetDateTime::now_utc(),
            temperature: status.fan.temperature,
            humidity: status.fan.humidity,
            luminosity: status.light.luminosity,
            light_on: status.light.is_on,
            fan_on: status.fan.is_on,
            buzzer_on: status.buzzer.is_on,
        }
    }
}
