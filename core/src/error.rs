use thiserror::Error;

use crate::model::task::TaskId;

/// Errors surfaced by the task store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("task {0} not found")]
    NotFound(TaskId),

    #[error("task text is required")]
    EmptyText,
}

pub type Result<T> = std::result::Result<T, StoreError>;
