use greenhouse_api::{ActuatorMode, BuzzerService, DeviceStatus, FanService, LightService};
use rand::Rng;

use crate::settings::Thresholds;
use crate::simulate::{step_humidity, step_luminosity, step_temperature};

// Comfort band and escalation margins for the buzzer. Demo stand-in
// values, not a firmware contract.
const COMFORT_TEMP_MIN: f64 = 18.0;
const COMFORT_HUMIDITY_MAX: f64 = 75.0;
const TEMP_HIGH_MARGIN: f64 = 4.0;
const TEMP_LOW_MARGIN: f64 = 2.0;
const HUMIDITY_MARGIN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actuator {
    Light,
    Fan,
    Buzzer,
}

impl Actuator {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "fan" => Some(Self::Fan),
            "buzzer" => Some(Self::Buzzer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    On,
    Off,
    Auto,
}

impl Command {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "on" => Some(Self::On),
            "off" => Some(Self::Off),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }
}

/// Simulated greenhouse controller: random-walk sensors plus
/// threshold-based actuator logic for everything left in AUTO mode.
pub struct MockDevice {
    status: DeviceStatus,
}

impl MockDevice {
    pub fn new(thresholds: &Thresholds) -> Self {
        let mut device = Self {
            status: DeviceStatus {
                light: LightService {
                    luminosity: 1800,
                    mode: ActuatorMode::Auto,
                    is_on: false,
                    threshold: thresholds.light,
                },
                fan: FanService {
                    temperature: 24.0,
                    humidity: 65.0,
                    mode: ActuatorMode::Auto,
                    is_on: false,
                    threshold: thresholds.fan,
                },
                buzzer: BuzzerService {
                    mode: ActuatorMode::Auto,
                    is_on: false,
                },
            },
        };
        device.apply_auto_rules();
        device
    }

    pub fn status(&self) -> DeviceStatus {
        self.status.clone()
    }

    /// One simulation tick: walk the sensors, then re-evaluate AUTO rules.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        self.status.fan.temperature = step_temperature(self.status.fan.temperature, rng);
        self.status.fan.humidity = step_humidity(self.status.fan.humidity, rng);
        self.status.light.luminosity = step_luminosity(self.status.light.luminosity, rng);

        self.apply_auto_rules();
    }

    /// Applies a manual override or hands the actuator back to AUTO.
    /// `on`/`off` pin the state and switch to MANUAL, like the firmware.
    pub fn apply(&mut self, actuator: Actuator, command: Command) {
        {
            let (mode, is_on) = match actuator {
                Actuator::Light => (&mut self.status.light.mode, &mut self.status.light.is_on),
                Actuator::Fan => (&mut self.status.fan.mode, &mut self.status.fan.is_on),
                Actuator::Buzzer => {
                    (&mut self.status.buzzer.mode, &mut self.status.buzzer.is_on)
                }
            };

            match command {
                Command::On => {
                    *mode = ActuatorMode::Manual;
                    *is_on = true;
                }
                Command::Off => {
                    *mode = ActuatorMode::Manual;
                    *is_on = false;
                }
                Command::Auto => {
                    *mode = ActuatorMode::Auto;
                }
            }
        }

        if command == Command::Auto {
            self.apply_auto_rules();
        }
    }

    /// Updates the numeric trigger point. Returns false for the buzzer,
    /// which has no threshold.
    pub fn set_threshold(&mut self, actuator: Actuator, value: f64) -> bool {
        match actuator {
            Actuator::Light => {
                self.status.light.threshold = value.round() as i32;
            }
            Actuator::Fan => {
                self.status.fan.threshold = value;
            }
            Actuator::Buzzer => return false,
        }

        self.apply_auto_rules();
        true
    }

    fn apply_auto_rules(&mut self) {
        if self.status.light.mode == ActuatorMode::Auto {
            self.status.light.is_on = self.status.light.luminosity < self.status.light.threshold;
        }

        if self.status.fan.mode == ActuatorMode::Auto {
            self.status.fan.is_on = self.status.fan.temperature > self.status.fan.threshold;
        }

        if self.status.buzzer.mode == ActuatorMode::Auto {
            let fan = &self.status.fan;
            let alarm = fan.temperature > fan.threshold + TEMP_HIGH_MARGIN
                || fan.temperature < COMFORT_TEMP_MIN - TEMP_LOW_MARGIN
                || fan.humidity > COMFORT_HUMIDITY_MAX + HUMIDITY_MARGIN;

            self.status.buzzer.is_on = alarm;
        }
    }
}
