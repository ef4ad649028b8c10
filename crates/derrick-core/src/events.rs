//! Change notifications for milestones and tasks.
//!
//! The tracker is handed an [`EventPublisher`] when it is built and calls it
//! after every successful write. Publishing is fire-and-forget: a publisher
//! with no listeners drops the event, and publishing can never fail the write
//! that caused it.

use std::sync::Mutex;

use log::trace;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::broadcast;

use crate::models::{Milestone, MilestoneTask};

/// What happened to the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventAction {
    Created,
    Updated,
    Deleted,
}

/// Which kind of entity the payload holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Milestone,
    Task,
}

/// A change notification scoped to one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerEvent {
    pub action: EventAction,
    pub project_id: String,
    pub entity: EntityKind,
    /// The milestone or task as JSON, after the change (before it, for
    /// deletions)
    pub payload: Value,
}

impl TrackerEvent {
    /// Event carrying a milestone.
    pub fn milestone(action: EventAction, milestone: &Milestone) -> Self {
        Self {
            action,
            project_id: milestone.project_id.clone(),
            entity: EntityKind::Milestone,
            payload: serde_json::to_value(milestone).unwrap_or(Value::Null),
        }
    }

    /// Event carrying a task of a milestone in `project_id`.
    pub fn task(action: EventAction, project_id: &str, task: &MilestoneTask) -> Self {
        Self {
            action,
            project_id: project_id.to_string(),
            entity: EntityKind::Task,
            payload: serde_json::to_value(task).unwrap_or(Value::Null),
        }
    }
}

/// Sink for tracker change notifications.
pub trait EventPublisher: Send + Sync {
    /// Delivers the event to whoever is listening. Must not block.
    fn publish(&self, event: TrackerEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPublisher;

impl EventPublisher for NoopPublisher {
    fn publish(&self, _event: TrackerEvent) {}
}

/// Keeps every published event in memory, in order.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<TrackerEvent>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events published so far.
    pub fn events(&self) -> Vec<TrackerEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl EventPublisher for RecordingPublisher {
    fn publish(&self, event: TrackerEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}

/// Fans events out to any number of async subscribers over a tokio
/// broadcast channel. Slow subscribers may miss events once `capacity` are
/// queued.
#[derive(Debug, Clone)]
pub struct BroadcastPublisher {
    sender: broadcast::Sender<TrackerEvent>,
}

impl BroadcastPublisher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Registers a new subscriber that sees events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<TrackerEvent> {
        self.sender.subscribe()
    }
}

impl EventPublisher for BroadcastPublisher {
    fn publish(&self, event: TrackerEvent) {
        if self.sender.send(event).is_err() {
            trace!("No event subscribers; dropping event");
        }
    }
}
