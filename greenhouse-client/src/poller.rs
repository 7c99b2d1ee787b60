use std::sync::Arc;
use std::time::Duration;

use greenhouse_api::{DeviceStatus, validate_status, validation_error};
use serde_json::Value;
use tokio::task::JoinHandle;
use tokio::time;

use crate::error::{Error, Result};
use crate::session::Session;

/// Periodic status poller. Fetches `{base}/api/status` on a fixed
/// interval, gates every payload through the shape validator and publishes
/// the outcome to the session. Failures keep the last known status and are
/// retried on the next tick; there is no backoff.
pub struct StatusPoller {
    client: reqwest::Client,
    base_url: String,
    interval: Duration,
    session: Arc<Session>,
}

impl StatusPoller {
    pub fn new(base_url: &str, interval: Duration, session: Arc<Session>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
            interval,
            session,
        }
    }

    /// Starts the polling loop. The first tick fires immediately; the loop
    /// exits once the session is stopped. A fetch already in flight at
    /// stop time is not aborted, but its completion is discarded by the
    /// session's liveness check.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = time::interval(self.interval);

            loop {
                interval.tick().await;

                if !self.session.is_live() {
                    break;
                }

                match self.fetch_status().await {
                    Ok(status) => {
                        tracing::debug!(
                            temperature = status.fan.temperature,
                            humidity = status.fan.humidity,
                            luminosity = status.light.luminosity,
                            "status refreshed"
                        );
                        self.session.publish_status(status, true).await;
                    }
                    Err(e) => {
                        tracing::warn!("poll failed: {}", e);
                        self.session.publish_error(e.to_string()).await;
                    }
                }
            }
        })
    }

    async fn fetch_status(&self) -> Result<DeviceStatus> {
        let url = format!("{}/api/status", self.base_url);
        decode_status(&self.client, &url).await
    }
}

/// Shared request pipeline: GET, check the HTTP status, parse the body as
/// JSON, run the shape gate, then decode to the typed model. Used by both
/// the poller and the action dispatcher.
pub(crate) async fn decode_status(client: &reqwest::Client, url: &str) -> Result<DeviceStatus> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Status(response.status()));
    }

    let payload: Value = response.json().await?;

    if !validate_status(&payload) {
        return Err(Error::InvalidResponse(validation_error(&payload)));
    }

    Ok(serde_json::from_value(payload)?)
}
