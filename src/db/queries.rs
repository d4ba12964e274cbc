use mongodb::Collection;
use mongodb::bson::{Document, doc};
use mongodb::results::InsertManyResult;

use super::models::{Task, TaskStatus};
use crate::error::WorkflowError;

/// Matches tasks in any known status with priority at or below the cutoff.
pub fn status_priority_filter(max_priority: i32) -> Document {
    doc! {
        "status": { "$in": [TaskStatus::Pending.as_str(), TaskStatus::Completed.as_str()] },
        "priority": { "$lte": max_priority },
    }
}

pub async fn insert_tasks(
    tasks: &Collection<Task>,
    batch: &[Task],
) -> Result<InsertManyResult, WorkflowError> {
    Ok(tasks.insert_many(batch).await?)
}

pub async fn find_tasks(
    tasks: &Collection<Task>,
    filter: Document,
) -> Result<Vec<Task>, WorkflowError> {
    let mut cursor = tasks.find(filter).await?;

    let mut found = Vec::new();
    while cursor.advance().await? {
        found.push(cursor.deserialize_current()?);
    }

    Ok(found)
}

/// Marks the first task with this title as completed.
pub async fn complete_task(tasks: &Collection<Task>, title: &str) -> Result<u64, WorkflowError> {
    let result = tasks
        .update_one(
            doc! { "title": title },
            doc! { "$set": { "status": TaskStatus::Completed.as_str() } },
        )
        .await?;

    Ok(result.modified_count)
}

pub async fn find_task_by_title(
    tasks: &Collection<Task>,
    title: &str,
) -> Result<Option<Task>, WorkflowError> {
    Ok(tasks.find_one(doc! { "title": title }).await?)
}

/// Removes the first task with this title.
pub async fn delete_task_by_title(
    tasks: &Collection<Task>,
    title: &str,
) -> Result<u64, WorkflowError> {
    let result = tasks.delete_one(doc! { "title": title }).await?;
    Ok(result.deleted_count)
}
