//! Persistence access for todos.
//!
//! The repository knows nothing about business rules: absence is reported as
//! `None` or as a zero row count, and store errors are passed through as-is.

use super::{Status, Todo, TodoId, TodoPayload};
use crate::entities::todo;
use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::sync::Arc;

/// CRUD primitives over the `todo` table. Every method is a single statement.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Returns every todo, newest (highest id) first.
    async fn find_all(&self) -> Result<Vec<Todo>, DbErr>;

    /// Returns the todo with the given id, or `None` if there is none.
    async fn find_one(&self, id: TodoId) -> Result<Option<Todo>, DbErr>;

    /// Inserts a todo and returns the id assigned by the store.
    async fn insert(&self, payload: TodoPayload) -> Result<TodoId, DbErr>;

    /// Deletes a todo and returns the number of rows removed.
    async fn delete(&self, id: TodoId) -> Result<u64, DbErr>;

    /// Overwrites the status of a todo. Does not check that the row exists.
    async fn change_status(&self, id: TodoId, status: Status) -> Result<(), DbErr>;
}

/// [`TodoRepository`] backed by a sea-orm connection.
#[derive(Clone, Debug)]
pub struct SeaOrmTodoRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmTodoRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoRepository for SeaOrmTodoRepository {
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Todo>, DbErr> {
        let todos = todo::Entity::find()
            .order_by_desc(todo::Column::Id)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(Todo::from)
            .collect();
        Ok(todos)
    }

    #[tracing::instrument(skip(self))]
    async fn find_one(&self, id: TodoId) -> Result<Option<Todo>, DbErr> {
        let todo = todo::Entity::find_by_id(id.value())
            .one(self.db.as_ref())
            .await?;
        Ok(todo.map(Todo::from))
    }

    #[tracing::instrument(skip(self))]
    async fn insert(&self, payload: TodoPayload) -> Result<TodoId, DbErr> {
        let active_model = todo::ActiveModel {
            title: ActiveValue::Set(payload.title),
            status: ActiveValue::Set(payload.status),
            ..Default::default()
        };
        let result = todo::Entity::insert(active_model)
            .exec(self.db.as_ref())
            .await?;
        Ok(TodoId::assigned(result.last_insert_id))
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: TodoId) -> Result<u64, DbErr> {
        let result = todo::Entity::delete_by_id(id.value())
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected)
    }

    #[tracing::instrument(skip(self))]
    async fn change_status(&self, id: TodoId, status: Status) -> Result<(), DbErr> {
        todo::Entity::update_many()
            .col_expr(todo::Column::Status, Expr::value(status.to_value()))
            .filter(todo::Column::Id.eq(id.value()))
            .exec(self.db.as_ref())
            .await?;
        Ok(())
    }
}
