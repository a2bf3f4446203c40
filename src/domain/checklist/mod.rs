//! Welcome checklist - the last onboarding step.
//!
//! Three fixed tasks the writer ticks off. Completing onboarding requires
//! every task to be checked.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, ValidationError};

/// A single to-do item on the welcome checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistTask {
    pub id: u8,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl ChecklistTask {
    fn open(id: u8, title: &str, description: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeChecklist {
    tasks: Vec<ChecklistTask>,
}

impl Default for WelcomeChecklist {
    fn default() -> Self {
        Self::new()
    }
}

impl WelcomeChecklist {
    /// The fixed task list, all unchecked.
    pub fn new() -> Self {
        Self {
            tasks: vec![
                ChecklistTask::open(
                    1,
                    "Write your first article",
                    "Start with a topic you're passionate about",
                ),
                ChecklistTask::open(
                    2,
                    "Introduce yourself to the community",
                    "Post a brief introduction in the writers forum",
                ),
                ChecklistTask::open(
                    3,
                    "Set up your publishing calendar",
                    "Plan your content schedule for the next month",
                ),
            ],
        }
    }

    pub fn tasks(&self) -> &[ChecklistTask] {
        &self.tasks
    }

    /// Flips a task and returns its new completed flag.
    ///
    /// # Errors
    ///
    /// `UnknownValue` on field `task_id` when no task has this id.
    pub fn toggle(&mut self, task_id: u8) -> Result<bool, ValidationError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| ValidationError::unknown_value("task_id", task_id.to_string()))?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn all_completed(&self) -> bool {
        self.tasks.iter().all(|t| t.completed)
    }

    pub fn progress(&self) -> Percentage {
        Percentage::of(self.completed_count(), self.tasks.len())
    }
}
