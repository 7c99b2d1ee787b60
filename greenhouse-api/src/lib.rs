pub mod models;
pub mod validator;

pub use models::{
    ActuatorMode, BuzzerService, DeviceStatus, FanService, HistorySample, LightService,
};
pub use validator::{validate_status, validation_error};
