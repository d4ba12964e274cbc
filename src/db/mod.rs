pub mod models;
pub mod queries;

use mongodb::bson::{Document, doc};
use mongodb::options::ValidationAction;
use mongodb::{Client, Database};

use crate::error::WorkflowError;

/// Create MongoDB connection
pub async fn create_client(uri: &str) -> Result<Client, WorkflowError> {
    let client = Client::with_uri_str(uri)
        .await
        .map_err(|source| WorkflowError::Connection {
            uri: uri.to_string(),
            source,
        })?;

    // Ping to verify connection
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|source| WorkflowError::Connection {
            uri: uri.to_string(),
            source,
        })?;

    tracing::info!(uri, "connected to MongoDB");
    Ok(client)
}

/// Create the tasks collection with its schema validator if it does not
/// exist yet. Safe to call against an existing collection.
pub async fn ensure_tasks_collection(db: &Database, name: &str) -> Result<(), WorkflowError> {
    let existing = db
        .list_collection_names()
        .filter(doc! { "name": name })
        .await?;

    if !existing.is_empty() {
        tracing::info!(collection = name, "collection already exists, skipping creation");
        return Ok(());
    }

    db.create_collection(name)
        .validator(task_validator())
        .validation_action(ValidationAction::Error)
        .await?;

    tracing::info!(collection = name, "created collection with validation rules");
    Ok(())
}

/// Shape the store enforces on every write to the tasks collection.
pub fn task_validator() -> Document {
    doc! {
        "$jsonSchema": {
            "bsonType": "object",
            "required": ["title", "description", "status", "priority"],
            "properties": {
                "title": { "bsonType": "string" },
                "description": { "bsonType": "string" },
                "status": { "enum": ["pending", "completed"] },
                "priority": { "bsonType": "int", "minimum": 1 },
            },
        },
    }
}
