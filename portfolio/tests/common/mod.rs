//! Local webhook server shared by the contact integration tests.
//!
//! A throwaway axum server records every JSON body it receives, so tests
//! observe the real request the `portfolio` transport sends.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;

pub type Received = Arc<Mutex<Vec<Value>>>;

async fn record(State(received): State<Received>, Json(body): Json<Value>) -> StatusCode {
    received.lock().expect("received lock").push(body);
    StatusCode::OK
}

async fn reject(State(received): State<Received>, Json(body): Json<Value>) -> StatusCode {
    received.lock().expect("received lock").push(body);
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Serve `router` on an ephemeral port and return the `/hook` URL.
async fn spawn_webhook(router: Router<Received>, received: Received) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = router.with_state(received);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{}/hook", addr)
}

/// Webhook answering 200 to every POST on `/hook`.
pub async fn accepting_webhook(received: Received) -> String {
    spawn_webhook(Router::new().route("/hook", post(record)), received).await
}

/// Webhook answering 500 to every POST on `/hook`.
pub async fn rejecting_webhook(received: Received) -> String {
    spawn_webhook(Router::new().route("/hook", post(reject)), received).await
}

/// URL on a port that was bound and released, so connections are refused.
pub async fn unreachable_webhook() -> (String, std::net::SocketAddr) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    (format!("http://{}/hook", addr), addr)
}
