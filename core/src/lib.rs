pub mod error;
pub mod model;
pub mod repository;
pub mod service;

pub use error::{Result, StoreError};
pub use model::task::{Task, TaskId, TaskPatch};
pub use repository::{InMemoryTaskRepository, TaskRepository};
pub use service::task_service::TaskService;
