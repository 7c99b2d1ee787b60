use std::sync::Arc;

use greenhouse_api::DeviceStatus;

use crate::error::{Error, Result};
use crate::poller::decode_status;
use crate::session::Session;

/// One-shot device commands, issued on user intent and bypassing the poll
/// timer. Results replace the published status wholesale but never append
/// chart history; failures are published to the session AND propagated to
/// the caller, which owns its own feedback.
///
/// A dispatch racing a poller tick resolves last-writer-wins in arrival
/// order. That is the accepted policy; no sequencing is enforced.
pub struct ActionDispatcher {
    client: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl ActionDispatcher {
    pub fn new(base_url: &str, session: Arc<Session>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
            session,
        }
    }

    /// Sends `GET {base}/api/{action}` and publishes the echoed status.
    pub async fn dispatch(&self, action: &str) -> Result<DeviceStatus> {
        let url = format!("{}/api/{}", self.base_url, action);

        match decode_status(&self.client, &url).await {
            Ok(status) => {
                self.session.publish_status(status.clone(), false).await;
                Ok(status)
            }
            Err(e) => {
                tracing::warn!("action {} failed: {}", action, e);
                self.session.publish_error(e.to_string()).await;
                Err(e)
            }
        }
    }

    async fn set_threshold(&self, kind: &str, value: f64) -> Result<DeviceStatus> {
        // Caller-side guard: a non-finite value never reaches the device.
        if !value.is_finite() {
            return Err(Error::InvalidThreshold(value));
        }

        self.dispatch(&format!("{kind}/threshold?value={value}"))
            .await
    }

    pub async fn light_on(&self) -> Result<DeviceStatus> {
        self.dispatch("light/on").await
    }

    pub async fn light_off(&self) -> Result<DeviceStatus> {
        self.dispatch("light/off").await
    }

    pub async fn light_auto(&self) -> Result<DeviceStatus> {
        self.dispatch("light/auto").await
    }

    pub async fn set_light_threshold(&self, value: f64) -> Result<DeviceStatus> {
        self.set_threshold("light", value).await
    }

    pub async fn fan_on(&self) -> Result<DeviceStatus> {
        self.dispatch("fan/on").await
    }

    pub async fn fan_off(&self) -> Result<DeviceStatus> {
        self.dispatch("fan/off").await
    }

    pub async fn fan_auto(&self) -> Result<DeviceStatus> {
        self.dispatch("fan/auto").await
    }

    pub async fn set_fan_threshold(&self, value: f64) -> Result<DeviceStatus> {
        self.set_threshold("fan", value).await
    }

    pub async fn buzzer_on(&self) -> Result<DeviceStatus> {
        self.dispatch("buzzer/on").await
    }

    pub async fn buzzer_off(&self) -> Result<DeviceStatus> {
        self.dispatch("buzzer/off").await
    }

    pub async fn buzzer_auto(&self) -> Result<DeviceStatus> {
        self.dispatch("buzzer/auto").await
    }
}
