//! Task CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use super::utils::{
    date_column, decode_depends_on, encode_depends_on, status_column, timestamp_column,
};
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{MilestoneTask, NewTask, StatusPolicy, TaskChanges},
};

const SELECT_MILESTONE_PROJECT_SQL: &str =
    "SELECT project_id FROM milestones WHERE id = ?1 AND deleted = 0";
const GET_NEXT_TASK_ORDER_SQL: &str =
    "SELECT COALESCE(MAX(task_order), -1) + 1 FROM milestone_tasks WHERE milestone_id = ?1";
const INSERT_TASK_SQL: &str = "INSERT INTO milestone_tasks (milestone_id, name, status, completion_percentage, start_date, end_date, depends_on, task_order, deleted, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 0, ?9, ?10)";
const SELECT_TASKS_BY_MILESTONE_SQL: &str = "SELECT id, milestone_id, name, status, completion_percentage, start_date, end_date, depends_on, task_order, created_at, updated_at FROM milestone_tasks WHERE milestone_id = ?1 AND deleted = 0 ORDER BY task_order";
const SELECT_TASK_SQL: &str = "SELECT id, milestone_id, name, status, completion_percentage, start_date, end_date, depends_on, task_order, created_at, updated_at FROM milestone_tasks WHERE id = ?1 AND milestone_id = ?2 AND deleted = 0";
const UPDATE_TASK_SQL: &str = "UPDATE milestone_tasks SET name = ?1, status = ?2, completion_percentage = ?3, start_date = ?4, end_date = ?5, depends_on = ?6, updated_at = ?7 WHERE id = ?8";
const SOFT_DELETE_TASK_SQL: &str =
    "UPDATE milestone_tasks SET deleted = 1, updated_at = ?1 WHERE id = ?2 AND deleted = 0";
const TOUCH_MILESTONE_SQL: &str = "UPDATE milestones SET updated_at = ?1 WHERE id = ?2";

/// A task write together with the project its milestone belongs to.
#[derive(Debug, Clone)]
pub struct TaskWrite {
    pub project_id: String,
    pub task: MilestoneTask,
    pub changes: Vec<String>,
}

impl super::Database {
    /// Helper function to construct a MilestoneTask from a database row.
    fn build_task_from_row(row: &rusqlite::Row) -> rusqlite::Result<MilestoneTask> {
        Ok(MilestoneTask {
            id: row.get::<_, i64>(0)? as u64,
            milestone_id: row.get::<_, i64>(1)? as u64,
            name: row.get(2)?,
            status: status_column(row, 3)?,
            completion_percentage: row.get::<_, i64>(4)?.clamp(0, 100) as u8,
            start_date: date_column(row, 5)?,
            end_date: date_column(row, 6)?,
            depends_on: decode_depends_on(row.get(7)?),
            order: row.get::<_, i64>(8)? as u32,
            created_at: timestamp_column(row, 9)?,
            updated_at: timestamp_column(row, 10)?,
        })
    }

    /// Loads the live tasks of a milestone in order.
    pub(super) fn load_tasks(conn: &Connection, milestone_id: u64) -> Result<Vec<MilestoneTask>> {
        let mut stmt = conn
            .prepare(SELECT_TASKS_BY_MILESTONE_SQL)
            .db_context("Failed to prepare task query")?;

        let tasks = stmt
            .query_map(params![milestone_id as i64], Self::build_task_from_row)
            .db_context("Failed to query tasks")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read task rows")?;

        Ok(tasks)
    }

    /// Resolves the project of a live milestone, failing with
    /// `MilestoneNotFound` when there is none.
    fn milestone_project(conn: &Connection, milestone_id: u64) -> Result<String> {
        conn.query_row(
            SELECT_MILESTONE_PROJECT_SQL,
            params![milestone_id as i64],
            |row| row.get(0),
        )
        .optional()
        .db_context("Failed to check milestone existence")?
        .ok_or(TrackerError::MilestoneNotFound { id: milestone_id })
    }

    fn load_task(conn: &Connection, milestone_id: u64, task_id: u64) -> Result<MilestoneTask> {
        conn.query_row(
            SELECT_TASK_SQL,
            params![task_id as i64, milestone_id as i64],
            Self::build_task_from_row,
        )
        .optional()
        .db_context("Failed to load task")?
        .ok_or(TrackerError::TaskNotFound {
            milestone_id,
            id: task_id,
        })
    }

    /// Appends a task to the end of a milestone's task list.
    pub fn create_task(&mut self, milestone_id: u64, new: &NewTask) -> Result<TaskWrite> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let project_id = Self::milestone_project(&tx, milestone_id)?;

        let next_order: i64 = tx
            .query_row(GET_NEXT_TASK_ORDER_SQL, params![milestone_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to get next task order")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_TASK_SQL,
            params![
                milestone_id as i64,
                new.name,
                new.status.as_str(),
                i64::from(new.completion_percentage),
                new.start_date.to_string(),
                new.end_date.to_string(),
                encode_depends_on(&new.depends_on),
                next_order,
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert task")?;

        let id = tx.last_insert_rowid() as u64;

        tx.execute(TOUCH_MILESTONE_SQL, params![&now_str, milestone_id as i64])
            .db_context("Failed to update milestone timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(TaskWrite {
            project_id,
            task: MilestoneTask {
                id,
                milestone_id,
                name: new.name.clone(),
                status: new.status,
                completion_percentage: new.completion_percentage,
                start_date: new.start_date,
                end_date: new.end_date,
                depends_on: new.depends_on.clone(),
                order: next_order as u32,
                created_at: now,
                updated_at: now,
            },
            changes: Vec::new(),
        })
    }

    /// Merges `changes` into a task. The milestone is resolved before the
    /// task so a missing milestone reports `MilestoneNotFound`.
    pub fn update_task(
        &mut self,
        milestone_id: u64,
        task_id: u64,
        changes: &TaskChanges,
        policy: StatusPolicy,
    ) -> Result<TaskWrite> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let project_id = Self::milestone_project(&tx, milestone_id)?;
        let mut task = Self::load_task(&tx, milestone_id, task_id)?;
        let applied = changes.apply_to(&mut task, policy)?;

        if !applied.is_empty() {
            task.updated_at = Timestamp::now();
            let now_str = task.updated_at.to_string();
            tx.execute(
                UPDATE_TASK_SQL,
                params![
                    task.name,
                    task.status.as_str(),
                    i64::from(task.completion_percentage),
                    task.start_date.to_string(),
                    task.end_date.to_string(),
                    encode_depends_on(&task.depends_on),
                    &now_str,
                    task_id as i64
                ],
            )
            .db_context("Failed to update task")?;

            tx.execute(TOUCH_MILESTONE_SQL, params![&now_str, milestone_id as i64])
                .db_context("Failed to update milestone timestamp")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(TaskWrite {
            project_id,
            task,
            changes: applied,
        })
    }

    /// Soft-deletes a task, returning it as it was before deletion.
    pub fn delete_task(&mut self, milestone_id: u64, task_id: u64) -> Result<TaskWrite> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let project_id = Self::milestone_project(&tx, milestone_id)?;
        let task = Self::load_task(&tx, milestone_id, task_id)?;

        let now_str = Timestamp::now().to_string();
        tx.execute(SOFT_DELETE_TASK_SQL, params![&now_str, task_id as i64])
            .db_context("Failed to delete task")?;
        tx.execute(TOUCH_MILESTONE_SQL, params![&now_str, milestone_id as i64])
            .db_context("Failed to update milestone timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(TaskWrite {
            project_id,
            task,
            changes: Vec::new(),
        })
    }
}
