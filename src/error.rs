use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use thiserror::Error;

/// Server code MongoDB reports when a write violates a collection validator.
const DOCUMENT_VALIDATION_FAILURE: i32 = 121;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("failed to reach the document store at {uri}")]
    Connection {
        uri: String,
        #[source]
        source: MongoError,
    },
    #[error("write rejected by the collection validator")]
    Validation(#[source] MongoError),
    #[error(transparent)]
    Operation(MongoError),
}

impl From<MongoError> for WorkflowError {
    fn from(err: MongoError) -> Self {
        if is_validation_failure(&err) {
            Self::Validation(err)
        } else {
            Self::Operation(err)
        }
    }
}

fn is_validation_failure(err: &MongoError) -> bool {
    match &*err.kind {
        ErrorKind::Write(WriteFailure::WriteError(write)) => {
            write.code == DOCUMENT_VALIDATION_FAILURE
        }
        ErrorKind::InsertMany(insert) => insert.write_errors.as_ref().is_some_and(|errors| {
            errors
                .iter()
                .any(|write| write.code == DOCUMENT_VALIDATION_FAILURE)
        }),
        _ => false,
    }
}
