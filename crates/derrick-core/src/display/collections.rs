//! Collection wrapper types for displaying groups of milestones.

use std::{fmt, ops::Index};

use crate::models::{Milestone, ProgressSummary};

/// Newtype wrapper for displaying a project's milestones as a compact list.
///
/// # Examples
///
/// ```rust
/// use derrick_core::{display::Milestones, models::{Milestone, Status}};
/// use jiff::{civil::date, Timestamp};
///
/// let milestone = Milestone {
///     id: 1,
///     project_id: "well-7".to_string(),
///     name: "Spud".to_string(),
///     description: "Begin drilling".to_string(),
///     planned_date: date(2024, 3, 1),
///     actual_date: None,
///     status: Status::Planned,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
///     tasks: vec![],
/// };
/// let output = Milestones(vec![milestone]).to_string();
/// assert!(output.contains("## Spud (ID: 1)"));
/// ```
pub struct Milestones(pub Vec<Milestone>);

impl Milestones {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of milestones in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the milestones.
    pub fn iter(&self) -> std::slice::Iter<'_, Milestone> {
        self.0.iter()
    }
}

impl Index<usize> for Milestones {
    type Output = Milestone;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Milestones {
    type Item = Milestone;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Milestones {
    type Item = &'a Milestone;
    type IntoIter = std::slice::Iter<'a, Milestone>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Milestones {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No milestones found.");
        }

        for milestone in &self.0 {
            let progress = ProgressSummary::from_tasks(&milestone.tasks);
            writeln!(
                f,
                "## {} (ID: {}) {}%",
                milestone.name, milestone.id, progress.overall
            )?;
            writeln!(f)?;
            writeln!(f, "- **Status**: {}", milestone.status.with_icon())?;
            writeln!(f, "- **Planned**: {}", milestone.planned_date)?;
            if let Some(actual) = milestone.actual_date {
                writeln!(f, "- **Actual**: {actual}")?;
            }
            writeln!(
                f,
                "- **Tasks**: {} ({} completed)",
                progress.total(),
                progress.completed
            )?;
            writeln!(f)?;
        }
        Ok(())
    }
}
