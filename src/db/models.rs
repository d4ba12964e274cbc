use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    /// The spelling the collection validator expects.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: i32,
}

impl Task {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: TaskStatus,
        priority: i32,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            status,
            priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{doc, from_document, to_document};

    use super::*;

    #[test]
    fn new_task_serializes_without_an_id() {
        let task = Task::new("Write docs", "Cover the new endpoints.", TaskStatus::Pending, 1);
        let document = to_document(&task).unwrap();

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("title").unwrap(), "Write docs");
        assert_eq!(document.get_str("status").unwrap(), "pending");
        assert_eq!(document.get_i32("priority").unwrap(), 1);
    }

    #[test]
    fn status_spelling_matches_serde() {
        assert_eq!(TaskStatus::Pending.as_str(), "pending");
        assert_eq!(TaskStatus::Completed.as_str(), "completed");
    }

    #[test]
    fn stored_task_deserializes_with_its_id() {
        let document = doc! {
            "_id": ObjectId::new(),
            "title": "Review PR",
            "description": "Second pass on the storage changes.",
            "status": "completed",
            "priority": 2,
        };

        let task: Task = from_document(document).unwrap();
        assert!(task.id.is_some());
        assert_eq!(task.status, TaskStatus::Completed);
    }
}
