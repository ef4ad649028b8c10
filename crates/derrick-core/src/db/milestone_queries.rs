//! Milestone CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use super::utils::{date_column, optional_date_column, status_column, timestamp_column, today_utc};
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{Milestone, MilestoneChanges, NewMilestone, Status, StatusPolicy},
};

const INSERT_MILESTONE_SQL: &str = "INSERT INTO milestones (project_id, name, description, planned_date, actual_date, status, deleted, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, ?7, ?8)";
const SELECT_MILESTONE_BY_ID_SQL: &str = "SELECT id, project_id, name, description, planned_date, actual_date, status, created_at, updated_at FROM milestones WHERE id = ?1 AND deleted = 0";
const SELECT_MILESTONES_BY_PROJECT_SQL: &str = "SELECT id, project_id, name, description, planned_date, actual_date, status, created_at, updated_at FROM milestones WHERE project_id = ?1 AND deleted = 0 ORDER BY planned_date, id";
const UPDATE_MILESTONE_SQL: &str = "UPDATE milestones SET name = ?1, description = ?2, planned_date = ?3, actual_date = ?4, status = ?5, updated_at = ?6 WHERE id = ?7";
const SOFT_DELETE_MILESTONE_SQL: &str =
    "UPDATE milestones SET deleted = 1, updated_at = ?1 WHERE id = ?2 AND deleted = 0";

impl super::Database {
    /// Helper function to construct a Milestone (without tasks) from a row.
    fn build_milestone_from_row(row: &rusqlite::Row) -> rusqlite::Result<Milestone> {
        Ok(Milestone {
            id: row.get::<_, i64>(0)? as u64,
            project_id: row.get(1)?,
            name: row.get(2)?,
            description: row.get(3)?,
            planned_date: date_column(row, 4)?,
            actual_date: optional_date_column(row, 5)?,
            status: status_column(row, 6)?,
            created_at: timestamp_column(row, 7)?,
            updated_at: timestamp_column(row, 8)?,
            tasks: Vec::new(),
        })
    }

    /// Loads a live milestone row without its tasks.
    pub(super) fn load_milestone(conn: &Connection, id: u64) -> Result<Option<Milestone>> {
        conn.query_row(
            SELECT_MILESTONE_BY_ID_SQL,
            params![id as i64],
            Self::build_milestone_from_row,
        )
        .optional()
        .db_context("Failed to load milestone")
    }

    /// Creates a milestone with an empty task list. A milestone created as
    /// completed gets today's date as its actual date.
    pub fn create_milestone(&mut self, new: &NewMilestone) -> Result<Milestone> {
        let now = Timestamp::now();
        let now_str = now.to_string();
        let actual_date = (new.status == Status::Completed).then(today_utc);

        self.connection
            .execute(
                INSERT_MILESTONE_SQL,
                params![
                    new.project_id,
                    new.name,
                    new.description,
                    new.planned_date.to_string(),
                    actual_date.map(|d| d.to_string()),
                    new.status.as_str(),
                    &now_str,
                    &now_str
                ],
            )
            .db_context("Failed to insert milestone")?;

        Ok(Milestone {
            id: self.connection.last_insert_rowid() as u64,
            project_id: new.project_id.clone(),
            name: new.name.clone(),
            description: new.description.clone(),
            planned_date: new.planned_date,
            actual_date,
            status: new.status,
            created_at: now,
            updated_at: now,
            tasks: Vec::new(),
        })
    }

    /// Retrieves a milestone with its live tasks.
    pub fn get_milestone(&self, id: u64) -> Result<Option<Milestone>> {
        let Some(mut milestone) = Self::load_milestone(&self.connection, id)? else {
            return Ok(None);
        };
        milestone.tasks = Self::load_tasks(&self.connection, id)?;
        Ok(Some(milestone))
    }

    /// Lists a project's live milestones, each with its tasks, ordered by
    /// planned date.
    pub fn list_milestones(&self, project_id: &str) -> Result<Vec<Milestone>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_MILESTONES_BY_PROJECT_SQL)
            .db_context("Failed to prepare milestone query")?;

        let mut milestones = stmt
            .query_map(params![project_id], Self::build_milestone_from_row)
            .db_context("Failed to query milestones")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read milestone rows")?;

        for milestone in &mut milestones {
            milestone.tasks = Self::load_tasks(&self.connection, milestone.id)?;
        }

        Ok(milestones)
    }

    /// Merges `changes` into the milestone and persists it, returning the
    /// updated milestone and a description of what changed.
    pub fn update_milestone(
        &mut self,
        id: u64,
        changes: &MilestoneChanges,
        policy: StatusPolicy,
    ) -> Result<(Milestone, Vec<String>)> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let mut milestone =
            Self::load_milestone(&tx, id)?.ok_or(TrackerError::MilestoneNotFound { id })?;
        let applied = changes.apply_to(&mut milestone, policy, today_utc())?;

        if !applied.is_empty() {
            milestone.updated_at = Timestamp::now();
            tx.execute(
                UPDATE_MILESTONE_SQL,
                params![
                    milestone.name,
                    milestone.description,
                    milestone.planned_date.to_string(),
                    milestone.actual_date.map(|d| d.to_string()),
                    milestone.status.as_str(),
                    milestone.updated_at.to_string(),
                    id as i64
                ],
            )
            .db_context("Failed to update milestone")?;
        }

        milestone.tasks = Self::load_tasks(&tx, id)?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok((milestone, applied))
    }

    /// Soft-deletes a milestone. Its tasks become unreachable with it.
    /// Returns the milestone as it was before deletion.
    pub fn delete_milestone(&mut self, id: u64) -> Result<Milestone> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let mut milestone =
            Self::load_milestone(&tx, id)?.ok_or(TrackerError::MilestoneNotFound { id })?;
        milestone.tasks = Self::load_tasks(&tx, id)?;

        tx.execute(
            SOFT_DELETE_MILESTONE_SQL,
            params![Timestamp::now().to_string(), id as i64],
        )
        .db_context("Failed to delete milestone")?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(milestone)
    }
}
