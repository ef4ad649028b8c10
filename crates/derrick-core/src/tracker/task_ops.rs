//! Task operations for the Tracker.

use log::{debug, info};

use super::Tracker;
use crate::{
    display::UpdateResult,
    error::Result,
    events::{EventAction, TrackerEvent},
    models::MilestoneTask,
    params::{CreateTask, UpdateTask},
};

impl Tracker {
    /// Appends a task to a milestone.
    ///
    /// # Errors
    ///
    /// `TrackerError::InvalidInput` for a missing name or dates, a window
    /// that ends before it starts, or a percentage outside 0-100.
    /// `TrackerError::MilestoneNotFound` when the milestone does not exist.
    pub async fn create_task(&self, milestone_id: u64, params: &CreateTask) -> Result<MilestoneTask> {
        let new = params.validate()?;

        let write = self
            .with_database(move |db| db.create_task(milestone_id, &new))
            .await?;

        info!("Created task {} in milestone {milestone_id}", write.task.id);
        self.publish(TrackerEvent::task(
            EventAction::Created,
            &write.project_id,
            &write.task,
        ));
        Ok(write.task)
    }

    /// Merges the supplied fields into a task. The milestone is resolved
    /// first, so a missing milestone reports `MilestoneNotFound` even when
    /// the task id is also bogus.
    ///
    /// `status` and `completionPercentage` are independent: neither is
    /// derived from the other.
    pub async fn update_task(
        &self,
        milestone_id: u64,
        task_id: u64,
        params: &UpdateTask,
    ) -> Result<UpdateResult<MilestoneTask>> {
        let changes = params.validate()?;
        let policy = self.policy;

        let write = self
            .with_database(move |db| db.update_task(milestone_id, task_id, &changes, policy))
            .await?;

        if write.changes.is_empty() {
            debug!("Task {task_id} in milestone {milestone_id} unchanged");
        } else {
            info!(
                "Updated task {task_id} in milestone {milestone_id}: {}",
                write.changes.join(", ")
            );
            self.publish(TrackerEvent::task(
                EventAction::Updated,
                &write.project_id,
                &write.task,
            ));
        }
        Ok(UpdateResult::with_changes(write.task, write.changes))
    }

    /// Soft-deletes a task. Returns the task as it was.
    pub async fn delete_task(&self, milestone_id: u64, task_id: u64) -> Result<MilestoneTask> {
        let write = self
            .with_database(move |db| db.delete_task(milestone_id, task_id))
            .await?;

        info!("Deleted task {task_id} from milestone {milestone_id}");
        self.publish(TrackerEvent::task(
            EventAction::Deleted,
            &write.project_id,
            &write.task,
        ));
        Ok(write.task)
    }
}
