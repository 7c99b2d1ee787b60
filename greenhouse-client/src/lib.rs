use std::sync::Arc;
use std::time::Duration;

use crate::poller::StatusPoller;
use crate::session::Session;
use crate::settings::Settings;

pub mod dispatcher;
pub mod error;
pub mod history;
pub mod poller;
pub mod session;
pub mod settings;

/// Runs a headless monitoring session: spawn the poller against the
/// configured device and keep publishing until Ctrl-C.
pub async fn run(settings: &Arc<Settings>) {
    let session = Arc::new(Session::new(settings.poller.history_capacity));

    let poller = StatusPoller::new(
        &settings.device.base_url,
        Duration::from_millis(settings.poller.interval_ms),
        session.clone(),
    );
    let handle = poller.spawn();

    tracing::info!(
        "monitoring {} every {}ms",
        settings.device.base_url,
        settings.poller.interval_ms
    );

    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal.");

    session.stop();
    let _ = handle.await;

    tracing::info!("session stopped");
}
