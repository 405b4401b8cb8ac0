use chrono::Utc;

use crate::error::{Result, StoreError};
use crate::model::task::{Task, TaskId, TaskPatch};
use crate::repository::traits::TaskRepository;

const INITIAL_ID: TaskId = 1;

/// Process-lifetime task storage: a vector in insertion order plus the
/// next-id counter. Deleting a task never frees its id; only `delete_all`
/// winds the counter back to its initial value.
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: INITIAL_ID,
        }
    }

    fn position(&self, id: TaskId) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn get(&self, id: TaskId) -> Result<Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn create(&mut self, text: String) -> Task {
        let task = Task::new(self.next_id, text);
        self.next_id += 1;
        self.tasks.push(task.clone());
        task
    }

    fn update(&mut self, id: TaskId, patch: TaskPatch) -> Result<Task> {
        let pos = self.position(id)?;
        let task = &mut self.tasks[pos];

        if let Some(text) = patch.text {
            task.text = text;
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        task.updated_at = Some(Utc::now());

        Ok(task.clone())
    }

    fn toggle(&mut self, id: TaskId) -> Result<Task> {
        let pos = self.position(id)?;
        let task = &mut self.tasks[pos];

        task.completed = !task.completed;
        task.updated_at = Some(Utc::now());

        Ok(task.clone())
    }

    fn delete(&mut self, id: TaskId) -> Result<Task> {
        let pos = self.position(id)?;
        Ok(self.tasks.remove(pos))
    }

    fn delete_all(&mut self) -> usize {
        let removed = self.tasks.len();
        self.tasks.clear();
        self.next_id = INITIAL_ID;
        removed
    }
}
