use super::repository::TodoRepository;
use super::{Status, Todo, TodoId, TodoPayload};
use async_trait::async_trait;

/// Error type for TodoService operations.
#[derive(Debug, thiserror::Error)]
pub enum TodoServiceError {
    /// The addressed todo does not exist.
    #[error("Todo not found")]
    NotFound,
    /// Represents a database error.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Business rules on top of a [`TodoRepository`].
///
/// Status transitions are unrestricted: any status may replace any other.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoService: Send + Sync {
    /// Returns all todos, newest first.
    async fn get_all_todos(&self) -> Result<Vec<Todo>, TodoServiceError>;

    /// Returns one todo, or [`TodoServiceError::NotFound`].
    async fn get_one_todo(&self, id: TodoId) -> Result<Todo, TodoServiceError>;

    /// Creates a todo and returns its id.
    async fn insert_todo(&self, payload: TodoPayload) -> Result<TodoId, TodoServiceError>;

    /// Deletes a todo, or fails with [`TodoServiceError::NotFound`].
    async fn delete_todo(&self, id: TodoId) -> Result<(), TodoServiceError>;

    /// Replaces the status of an existing todo, or fails with
    /// [`TodoServiceError::NotFound`].
    async fn change_todo_status(&self, id: TodoId, status: Status)
    -> Result<(), TodoServiceError>;
}

pub struct DefaultTodoService<R: TodoRepository> {
    repository: R,
}

impl<R: TodoRepository> DefaultTodoService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: TodoRepository> TodoService for DefaultTodoService<R> {
    #[tracing::instrument(skip(self))]
    async fn get_all_todos(&self) -> Result<Vec<Todo>, TodoServiceError> {
        Ok(self.repository.find_all().await?)
    }

    #[tracing::instrument(skip(self))]
    async fn get_one_todo(&self, id: TodoId) -> Result<Todo, TodoServiceError> {
        self.repository
            .find_one(id)
            .await?
            .ok_or(TodoServiceError::NotFound)
    }

    #[tracing::instrument(skip(self))]
    async fn insert_todo(&self, payload: TodoPayload) -> Result<TodoId, TodoServiceError> {
        Ok(self.repository.insert(payload).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_todo(&self, id: TodoId) -> Result<(), TodoServiceError> {
        match self.repository.delete(id).await? {
            0 => Err(TodoServiceError::NotFound),
            _ => Ok(()),
        }
    }

    /// The existence check and the update are separate statements; a delete
    /// landing in between is not detected.
    #[tracing::instrument(skip(self))]
    async fn change_todo_status(
        &self,
        id: TodoId,
        status: Status,
    ) -> Result<(), TodoServiceError> {
        if self.repository.find_one(id).await?.is_none() {
            return Err(TodoServiceError::NotFound);
        }
        self.repository.change_status(id, status).await?;
        Ok(())
    }
}
