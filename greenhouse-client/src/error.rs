use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Request to device failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Device returned HTTP {0}")]
    Status(StatusCode),

    #[error("Device response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid device response: {0}")]
    InvalidResponse(String),

    #[error("Threshold value must be a finite number, got {0}")]
    InvalidThreshold(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
