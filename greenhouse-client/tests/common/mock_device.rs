use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Scripted device responses, consumed in request order. When only one
/// entry remains it is repeated, so a poller can keep ticking against the
/// final answer.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Script {
    /// 200 with the given JSON body
    Ok(Value),
    /// Bare status code, empty body
    Http(StatusCode),
    /// 200 with a verbatim (possibly malformed) body
    Raw(&'static str),
    /// 200 with the given JSON body, delayed by the given milliseconds
    Slow(u64, Value),
}

#[derive(Clone)]
struct DeviceState {
    responses: Arc<Mutex<VecDeque<Script>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// In-process stand-in for the greenhouse controller, answering every path
/// from its script and recording what was requested.
pub struct MockDevice {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockDevice {
    pub async fn start(script: Vec<Script>) -> Self {
        let state = DeviceState {
            responses: Arc::new(Mutex::new(script.into())),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = state.requests.clone();

        let app = Router::new().fallback(respond).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    #[allow(dead_code)]
    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

async fn respond(State(state): State<DeviceState>, uri: Uri) -> Response {
    let path = uri
        .path_and_query()
        .map(|pq| pq.to_string())
        .unwrap_or_else(|| uri.path().to_string());
    state.requests.lock().await.push(path);

    let script = {
        let mut responses = state.responses.lock().await;
        if responses.len() > 1 {
            responses.pop_front().unwrap()
        } else {
            responses
                .front()
                .cloned()
                .unwrap_or(Script::Http(StatusCode::NOT_FOUND))
        }
    };

    match script {
        Script::Ok(value) => axum::Json(value).into_response(),
        Script::Http(code) => code.into_response(),
        Script::Raw(body) => Response::builder()
            .status(StatusCode::OK)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
        Script::Slow(delay_ms, value) => {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            axum::Json(value).into_response()
        }
    }
}
