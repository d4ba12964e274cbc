use anyhow::Result;
use mongodb::Database;

use crate::db;
use crate::db::models::{Task, TaskStatus};
use crate::db::queries;

/// Title of the task the workflow marks as completed.
const TASK_TO_COMPLETE: &str = "Complete Project 1";
/// Title of the task the workflow deletes.
const TASK_TO_DELETE: &str = "Complete Project 3";
/// Priority cutoff for the read-back query.
const PRIORITY_CUTOFF: i32 = 2;

/// Run the scripted create/read/update/delete sequence against the tasks
/// collection, logging the outcome of every step.
pub async fn run(database: &Database, collection: &str) -> Result<()> {
    db::ensure_tasks_collection(database, collection).await?;

    let tasks = database.collection::<Task>(collection);

    let inserted = queries::insert_tasks(&tasks, &sample_tasks()).await?;
    let mut inserted_ids: Vec<_> = inserted.inserted_ids.iter().collect();
    inserted_ids.sort_by_key(|(index, _)| **index);
    let ids: Vec<String> = inserted_ids
        .into_iter()
        .map(|(_, id)| id.to_string())
        .collect();
    tracing::info!(count = inserted.inserted_ids.len(), ?ids, "inserted sample tasks");

    let filter = queries::status_priority_filter(PRIORITY_CUTOFF);
    let matching = queries::find_tasks(&tasks, filter).await?;
    tracing::info!(count = matching.len(), "tasks at priority {PRIORITY_CUTOFF} or below");
    for task in &matching {
        tracing::info!(
            title = %task.title,
            status = task.status.as_str(),
            priority = task.priority,
            "matched task"
        );
    }

    let modified = queries::complete_task(&tasks, TASK_TO_COMPLETE).await?;
    tracing::info!(title = TASK_TO_COMPLETE, modified, "marked task as completed");

    match queries::find_task_by_title(&tasks, TASK_TO_COMPLETE).await? {
        Some(task) => tracing::info!(
            title = %task.title,
            status = task.status.as_str(),
            priority = task.priority,
            "task after update"
        ),
        None => tracing::warn!(title = TASK_TO_COMPLETE, "task not found after update"),
    }

    let deleted = queries::delete_task_by_title(&tasks, TASK_TO_DELETE).await?;
    tracing::info!(title = TASK_TO_DELETE, deleted, "deleted task");

    Ok(())
}

/// The fixed batch of records the workflow seeds the collection with.
fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new(
            "Complete Project 1",
            "Finish the coding project by the end of this week.",
            TaskStatus::Pending,
            1,
        ),
        Task::new(
            "Complete Project 2",
            "Submit the project documentation.",
            TaskStatus::Completed,
            2,
        ),
        Task::new(
            "Complete Project 3",
            "Starting Testing stage.",
            TaskStatus::Pending,
            3,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use mongodb::bson::to_document;

    use super::*;
    use crate::db::task_validator;

    #[test]
    fn seeds_three_tasks_including_both_targets() {
        let tasks = sample_tasks();

        assert_eq!(tasks.len(), 3);
        assert!(tasks.iter().any(|task| task.title == TASK_TO_COMPLETE));
        assert!(tasks.iter().any(|task| task.title == TASK_TO_DELETE));
    }

    #[test]
    fn cutoff_query_matches_exactly_the_low_priority_seeds() {
        let titles: Vec<String> = sample_tasks()
            .into_iter()
            .filter(|task| task.priority <= PRIORITY_CUTOFF)
            .map(|task| task.title)
            .collect();

        assert_eq!(titles, vec!["Complete Project 1", "Complete Project 2"]);
    }

    #[test]
    fn every_seed_satisfies_the_validator_shape() {
        let required: Vec<String> = task_validator()
            .get_document("$jsonSchema")
            .unwrap()
            .get_array("required")
            .unwrap()
            .iter()
            .filter_map(|field| field.as_str().map(str::to_string))
            .collect();

        for task in sample_tasks() {
            let document = to_document(&task).unwrap();
            for field in &required {
                assert!(document.contains_key(field), "seed task missing {field}");
            }
            assert!(task.priority >= 1);
        }
    }
}
