use crate::error::Result;
use crate::model::task::{Task, TaskId, TaskPatch};

/// Storage seam for task records. The repository owns id assignment and
/// `updated_at` stamping; input validation (trimming, emptiness) is the
/// service layer's job.
pub trait TaskRepository {
    /// All tasks in insertion order.
    fn list(&self) -> Vec<Task>;

    fn get(&self, id: TaskId) -> Result<Task>;

    /// Append a new task. `text` is expected to be trimmed and non-empty.
    fn create(&mut self, text: String) -> Task;

    /// Apply the present fields of `patch` and stamp `updated_at`, even when
    /// the patch is empty.
    fn update(&mut self, id: TaskId, patch: TaskPatch) -> Result<Task>;

    /// Flip `completed` and stamp `updated_at`.
    fn toggle(&mut self, id: TaskId) -> Result<Task>;

    /// Remove one task, preserving the order of the rest. Returns the
    /// removed record.
    fn delete(&mut self, id: TaskId) -> Result<Task>;

    /// Remove everything and reset id assignment. Returns how many tasks
    /// were removed.
    fn delete_all(&mut self) -> usize;
}
