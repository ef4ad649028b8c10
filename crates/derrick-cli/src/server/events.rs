//! Per-project WebSocket event stream.
//!
//! Each socket subscribes to the tracker's broadcast channel and forwards
//! the events of one project as JSON text frames. Incoming frames are
//! ignored apart from close.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::IntoResponse,
};
use derrick_core::TrackerEvent;
use futures_util::{SinkExt, StreamExt};
use log::{debug, warn};
use tokio::sync::broadcast::error::RecvError;

use super::SharedState;

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Path(project_id): Path<String>,
    State(state): State<SharedState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, project_id, state))
}

async fn handle_socket(socket: WebSocket, project_id: String, state: SharedState) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let mut events = state.events.subscribe();
    debug!("Event subscriber joined project {project_id}");

    let mut send_task = tokio::spawn({
        let project_id = project_id.clone();
        async move {
            loop {
                let event = match events.recv().await {
                    Ok(event) => event,
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("Event subscriber for {project_id} missed {skipped} events");
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                };
                let Some(text) = frame_for(&project_id, &event) else {
                    continue;
                };
                if ws_tx.send(Message::Text(text)).await.is_err() {
                    break;
                }
            }
        }
    });

    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = ws_rx.next().await {
            if let Message::Close(_) = msg {
                break;
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }
    debug!("Event subscriber left project {project_id}");
}

/// JSON text for `event` if it belongs to `project_id`.
fn frame_for(project_id: &str, event: &TrackerEvent) -> Option<String> {
    if event.project_id != project_id {
        return None;
    }
    match serde_json::to_string(event) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Failed to encode event: {e}");
            None
        }
    }
}
