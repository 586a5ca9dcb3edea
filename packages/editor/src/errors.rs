//! Error types for the editor

use crate::mutations::MutationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("Mutation {index} in batch rejected: {source}")]
    Batch {
        index: usize,
        #[source]
        source: MutationError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
