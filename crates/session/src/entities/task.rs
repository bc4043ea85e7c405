use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a household task, optionally recurring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Backend record identifier
    pub id: String,
    /// Household this task belongs to
    pub household_id: Option<String>,
    /// Task title
    pub title: String,
    /// Free-form notes
    pub notes: Option<String>,
    /// Recurrence schedule
    pub recurrence: Recurrence,
    /// User the task is assigned to
    pub assignee_id: Option<String>,
    /// Due timestamp, when set
    pub due_at: Option<String>,
    /// Completion timestamp, when completed
    pub completed_at: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

/// Recurrence enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Once,
    Daily,
    Weekly,
    Monthly,
}

impl From<&str> for Recurrence {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "daily" => Recurrence::Daily,
            "weekly" => Recurrence::Weekly,
            "monthly" => Recurrence::Monthly,
            _ => Recurrence::Once,
        }
    }
}

impl From<Recurrence> for String {
    fn from(recurrence: Recurrence) -> Self {
        match recurrence {
            Recurrence::Once => "once".to_string(),
            Recurrence::Daily => "daily".to_string(),
            Recurrence::Weekly => "weekly".to_string(),
            Recurrence::Monthly => "monthly".to_string(),
        }
    }
}

impl Task {
    /// Create a new task instance
    pub fn new(title: String, household_id: Option<String>) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            household_id,
            title,
            notes: None,
            recurrence: Recurrence::Once,
            assignee_id: None,
            due_at: None,
            completed_at: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Check if this task repeats on a schedule
    pub fn is_recurring(&self) -> bool {
        !matches!(self.recurrence, Recurrence::Once)
    }

    /// Check if the task has been completed
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Mark the task completed now
    pub fn complete(&mut self) {
        self.completed_at = Some(Utc::now().to_rfc3339());
        self.touch();
    }

    /// Update the timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().to_rfc3339();
    }

    /// Validate task data
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Task title cannot be empty".to_string());
        }

        if self.title.len() > 255 {
            return Err("Task title too long (max 255 characters)".to_string());
        }

        if let Some(ref notes) = self.notes {
            if notes.len() > 2000 {
                return Err("Task notes too long (max 2000 characters)".to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new("Take out bins".to_string(), Some("household-1".to_string()));

        assert_eq!(task.title, "Take out bins");
        assert_eq!(task.recurrence, Recurrence::Once);
        assert!(!task.is_recurring());
        assert!(!task.is_completed());
        assert!(task.validate().is_ok());
    }

    #[test]
    fn test_recurrence_conversion() {
        assert_eq!(Recurrence::from("daily"), Recurrence::Daily);
        assert_eq!(Recurrence::from("weekly"), Recurrence::Weekly);
        assert_eq!(Recurrence::from("monthly"), Recurrence::Monthly);
        assert_eq!(Recurrence::from("unknown"), Recurrence::Once);

        assert_eq!(String::from(Recurrence::Once), "once");
        assert_eq!(String::from(Recurrence::Weekly), "weekly");
    }

    #[test]
    fn test_task_completion() {
        let mut task = Task::new("Water plants".to_string(), None);
        assert!(!task.is_completed());

        task.complete();
        assert!(task.is_completed());
        assert!(task.completed_at.is_some());
    }

    #[test]
    fn test_task_validation() {
        let mut task = Task::new("Valid".to_string(), None);
        assert!(task.validate().is_ok());

        task.title = "".to_string();
        assert!(task.validate().is_err());

        task.title = "Valid".to_string();
        task.notes = Some("a".repeat(2001));
        assert!(task.validate().is_err());
    }
}
