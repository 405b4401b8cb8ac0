//! Application state shared across API handlers.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use taskman_core::{InMemoryTaskRepository, TaskService};

use crate::error::ApiError;

type SharedTaskService = Arc<Mutex<TaskService<InMemoryTaskRepository>>>;

/// Shared handler state: the single task service instance behind a mutex,
/// plus the bits of process configuration the handlers report back.
#[derive(Clone)]
pub struct AppState {
    tasks: SharedTaskService,
    /// Environment-mode label (`development` enables verbose 500 detail).
    pub environment: String,
    /// Server start time for uptime reporting.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(service: TaskService<InMemoryTaskRepository>, environment: String) -> Self {
        Self {
            tasks: Arc::new(Mutex::new(service)),
            environment,
            start_time: Instant::now(),
        }
    }

    /// Lock the task service for one store operation. The mutex serializes
    /// request handling over the shared collection; a poisoned lock is the
    /// one internal failure this server can hit and becomes a 500 whose
    /// detail is only exposed in development mode.
    pub fn lock_tasks(
        &self,
    ) -> Result<MutexGuard<'_, TaskService<InMemoryTaskRepository>>, ApiError> {
        self.tasks.lock().map_err(|err| {
            tracing::error!("task store lock poisoned: {err}");
            let message = if self.is_development() {
                err.to_string()
            } else {
                "Internal server error".to_string()
            };
            ApiError::Internal(message)
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
