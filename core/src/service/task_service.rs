use crate::error::{Result, StoreError};
use crate::model::task::{Task, TaskId, TaskPatch};
use crate::repository::TaskRepository;

/// Application-facing operations over a task repository. Input policy
/// (trimming, emptiness checks) lives here; storage mechanics live in the
/// repository.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_tasks(&self) -> Vec<Task> {
        self.repo.list()
    }

    pub fn get_task(&self, id: TaskId) -> Result<Task> {
        self.repo.get(id)
    }

    pub fn create_task(&mut self, text: &str) -> Result<Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        Ok(self.repo.create(text.to_string()))
    }

    /// Apply a partial update. Text is trimmed like on create but, unlike
    /// create, an empty result is stored as-is. Intentional asymmetry; do
    /// not add an emptiness check here.
    pub fn update_task(&mut self, id: TaskId, mut patch: TaskPatch) -> Result<Task> {
        if let Some(text) = patch.text.take() {
            patch.text = Some(text.trim().to_string());
        }
        self.repo.update(id, patch)
    }

    pub fn toggle_task(&mut self, id: TaskId) -> Result<Task> {
        self.repo.toggle(id)
    }

    pub fn delete_task(&mut self, id: TaskId) -> Result<Task> {
        self.repo.delete(id)
    }

    pub fn delete_all_tasks(&mut self) -> usize {
        self.repo.delete_all()
    }

    /// Populate a fresh store with the introductory tasks shown on first
    /// run. The third one starts out completed so the list demonstrates
    /// both states.
    pub fn seed_welcome_tasks(&mut self) -> Result<()> {
        self.create_task("Welcome to your task manager!")?;
        self.create_task("Tasks live in memory for the lifetime of the server")?;
        let done = self.create_task("Try adding, completing, and deleting tasks")?;
        self.toggle_task(done.id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryTaskRepository;

    fn service() -> TaskService<InMemoryTaskRepository> {
        TaskService::new(InMemoryTaskRepository::new())
    }

    #[test]
    fn test_create_trims_text() {
        let mut svc = service();
        let task = svc.create_task(" buy milk ").unwrap();
        assert_eq!(task.text, "buy milk");
    }

    #[test]
    fn test_create_rejects_empty_text() {
        let mut svc = service();
        assert_eq!(svc.create_task(""), Err(StoreError::EmptyText));
        assert_eq!(svc.create_task("   "), Err(StoreError::EmptyText));
        assert!(svc.list_tasks().is_empty());
    }

    #[test]
    fn test_update_trims_but_allows_empty_text() {
        // Create rejects blank text, update does not. The asymmetry is part
        // of the contract.
        let mut svc = service();
        let task = svc.create_task("buy milk").unwrap();

        let updated = svc
            .update_task(
                task.id,
                TaskPatch {
                    text: Some("   ".to_string()),
                    completed: None,
                },
            )
            .unwrap();
        assert_eq!(updated.text, "");
    }

    #[test]
    fn test_update_only_touches_present_fields() {
        let mut svc = service();
        let task = svc.create_task("buy milk").unwrap();

        let updated = svc
            .update_task(
                task.id,
                TaskPatch {
                    text: None,
                    completed: Some(true),
                },
            )
            .unwrap();
        assert_eq!(updated.text, "buy milk");
        assert!(updated.completed);
        assert!(updated.updated_at.is_some());

        let updated = svc
            .update_task(
                task.id,
                TaskPatch {
                    text: Some(" walk dog ".to_string()),
                    completed: None,
                },
            )
            .unwrap();
        assert_eq!(updated.text, "walk dog");
        assert!(updated.completed, "completed must survive a text-only patch");
    }

    #[test]
    fn test_missing_id_is_not_found_for_every_operation() {
        let mut svc = service();

        assert_eq!(svc.get_task(7), Err(StoreError::NotFound(7)));
        assert_eq!(
            svc.update_task(7, TaskPatch::default()),
            Err(StoreError::NotFound(7))
        );
        assert_eq!(svc.toggle_task(7), Err(StoreError::NotFound(7)));
        assert_eq!(svc.delete_task(7), Err(StoreError::NotFound(7)));
    }

    #[test]
    fn test_delete_all_then_create_starts_over_at_one() {
        let mut svc = service();
        svc.create_task("a").unwrap();
        svc.create_task("b").unwrap();
        svc.create_task("c").unwrap();

        assert_eq!(svc.delete_all_tasks(), 3);
        assert!(svc.list_tasks().is_empty());
        assert_eq!(svc.create_task("fresh").unwrap().id, 1);
    }

    #[test]
    fn test_seed_welcome_tasks() {
        let mut svc = service();
        svc.seed_welcome_tasks().unwrap();

        let tasks = svc.list_tasks();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].id, 1);
        assert!(!tasks[0].completed);
        assert!(!tasks[1].completed);
        assert!(tasks[2].completed);
    }
}
