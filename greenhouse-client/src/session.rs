use std::sync::atomic::{AtomicBool, Ordering};

use greenhouse_api::{DeviceStatus, HistorySample};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::history::HistoryBuffer;

/// Published state of one dashboard session, read by the presentation
/// layer. Mutated only by the poller and the action dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollState {
    pub status: Option<DeviceStatus>,
    pub error: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_update: OffsetDateTime,
    pub loading: bool,
}

impl PollState {
    fn new() -> Self {
        Self {
            status: None,
            error: None,
            last_update: OffsetDateTime::now_utc(),
            loading: true,
        }
    }
}

/// Owned context of one active dashboard session: the poll state, the
/// history buffer, and a liveness flag. One instance per session, torn
/// down with it; nothing here is shared across sessions or persisted.
///
/// Every completion handler goes through `publish_*`, which checks the
/// liveness flag first. A request that resolves after [`Session::stop`]
/// therefore cannot mutate the published state.
pub struct Session {
    state: RwLock<PollState>,
    history: RwLock<HistoryBuffer>,
    live: AtomicBool,
}

impl Session {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            state: RwLock::new(PollState::new()),
            history: RwLock::new(HistoryBuffer::new(history_capacity)),
            live: AtomicBool::new(true),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }

    /// Marks the session as ended. No further state mutations are
    /// accepted; the poller loop exits on its next liveness check.
    pub fn stop(&self) {
        self.live.store(false, Ordering::SeqCst);
    }

    pub async fn snapshot(&self) -> PollState {
        self.state.read().await.clone()
    }

    pub async fn history(&self) -> Vec<HistorySample> {
        self.history.read().await.to_vec()
    }

    /// Replaces the published status wholesale and clears any error.
    /// `record_history` is true only for poller ticks; dispatch results
    /// never produce chart samples.
    pub async fn publish_status(&self, status: DeviceStatus, record_history: bool) {
        if !self.is_live() {
            return;
        }

        if record_history {
            let sample = HistorySample::from_status(&status);
            self.history.write().await.push(sample);
        }

        let mut state = self.state.write().await;
        state.status = Some(status);
        state.error = None;
        state.last_update = OffsetDateTime::now_utc();
        state.loading = false;
    }

    /// Publishes a failure. The last known status is retained, not
    /// cleared; the next successful tick overwrites the error.
    pub async fn publish_error(&self, message: String) {
        if !self.is_live() {
            return;
        }

        let mut state = self.state.write().await;
        state.error = Some(message);
        state.loading = false;
    }
}
