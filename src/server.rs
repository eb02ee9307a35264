use crate::{poll::Notifier, state::Backend};
use anyhow::{Context, Result};
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, sync::Mutex};

const ACKNOWLEDGEMENT: &str = "Release check completed";

#[derive(Debug, Serialize, PartialEq)]
pub struct Acknowledgement {
    pub message: String,
}

/// Cycles are serialised behind the mutex; overlapping requests wait.
pub struct AppState {
    notifier: Notifier,
    store: Backend,
    lock: Mutex<()>,
}

impl AppState {
    pub fn new(notifier: Notifier, store: Backend) -> Self {
        AppState {
            notifier,
            store,
            lock: Mutex::new(()),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/", get(check)).with_state(state)
}

pub async fn serve(address: &str, state: AppState) -> Result<()> {
    let address: SocketAddr = address
        .parse()
        .with_context(|| format!("Invalid server address {}", address))?;

    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Cannot bind {}", address))?;

    log::info!("Listening on {}", address);
    axum::serve(listener, router(Arc::new(state)))
        .await
        .context("Server stopped unexpectedly")?;

    Ok(())
}

/// Runs one full cycle and acknowledges regardless of per-repository results.
async fn check(State(state): State<Arc<AppState>>) -> Json<Acknowledgement> {
    let _guard = state.lock.lock().await;

    let summary = state.notifier.run(&state.store).await;
    log::info!(
        "Release check finished: {} notified, {} unchanged, {} failed",
        summary.notified.len(),
        summary.unchanged.len(),
        summary.failed.len()
    );

    Json(Acknowledgement {
        message: ACKNOWLEDGEMENT.to_owned(),
    })
}
