//! Milestone operations for the Tracker.

use log::{debug, info};

use super::Tracker;
use crate::{
    display::{Milestones, UpdateResult},
    error::Result,
    events::{EventAction, TrackerEvent},
    models::{Milestone, ProjectProgress},
    params::{CreateMilestone, UpdateMilestone},
};

impl Tracker {
    /// Creates a milestone in a project with an empty task list. Status
    /// defaults to `planned`.
    ///
    /// # Errors
    ///
    /// `TrackerError::InvalidInput` when `name`, `description` or
    /// `plannedDate` is missing or malformed. Nothing is written in that case.
    pub async fn create_milestone(&self, params: &CreateMilestone) -> Result<Milestone> {
        let new = params.validate()?;

        let milestone = self
            .with_database(move |db| db.create_milestone(&new))
            .await?;

        info!(
            "Created milestone {} in project {}",
            milestone.id, milestone.project_id
        );
        self.publish(TrackerEvent::milestone(EventAction::Created, &milestone));
        Ok(milestone)
    }

    /// Retrieves a milestone with its tasks, or `None` if it does not exist
    /// or was deleted.
    pub async fn get_milestone(&self, id: u64) -> Result<Option<Milestone>> {
        self.with_database(move |db| db.get_milestone(id)).await
    }

    /// Lists a project's milestones ordered by planned date. An unknown
    /// project yields an empty list.
    pub async fn list_milestones(&self, project_id: &str) -> Result<Milestones> {
        let project_id = project_id.to_string();
        let milestones = self
            .with_database(move |db| db.list_milestones(&project_id))
            .await?;
        Ok(Milestones(milestones))
    }

    /// Merges the supplied fields into a milestone.
    ///
    /// Setting `completed` stamps `actualDate` (the supplied one, or today);
    /// moving away from `completed` clears it. Under
    /// [`StatusPolicy::Strict`](crate::models::StatusPolicy::Strict) illegal
    /// transitions are rejected. An update event is published only when a
    /// field actually changed.
    pub async fn update_milestone(
        &self,
        id: u64,
        params: &UpdateMilestone,
    ) -> Result<UpdateResult<Milestone>> {
        let changes = params.validate()?;
        let policy = self.policy;

        let (milestone, applied) = self
            .with_database(move |db| db.update_milestone(id, &changes, policy))
            .await?;

        if applied.is_empty() {
            debug!("Milestone {id} unchanged");
        } else {
            info!("Updated milestone {id}: {}", applied.join(", "));
            self.publish(TrackerEvent::milestone(EventAction::Updated, &milestone));
        }
        Ok(UpdateResult::with_changes(milestone, applied))
    }

    /// Soft-deletes a milestone and, with it, its tasks. Returns the
    /// milestone as it was.
    pub async fn delete_milestone(&self, id: u64) -> Result<Milestone> {
        let milestone = self.with_database(move |db| db.delete_milestone(id)).await?;

        info!("Deleted milestone {id}");
        self.publish(TrackerEvent::milestone(EventAction::Deleted, &milestone));
        Ok(milestone)
    }

    /// Derives overall and per-milestone progress from the project's current
    /// tasks. Nothing is cached; every call recomputes.
    pub async fn project_progress(&self, project_id: &str) -> Result<ProjectProgress> {
        let milestones = self.list_milestones(project_id).await?;
        Ok(ProjectProgress::from_milestones(project_id, &milestones.0))
    }
}
