//! To-do service implementing the [`TodoService`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{TodoRepository, TodoRepositoryError, TodoService};
use crate::domain::{Error, Todo, TodoDraft, TodoId};

fn map_repository_error(error: TodoRepositoryError) -> Error {
    match error {
        TodoRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("todo repository unavailable: {message}"))
        }
        TodoRepositoryError::Query { message } => {
            Error::internal(format!("todo repository error: {message}"))
        }
    }
}

fn not_found(id: TodoId) -> Error {
    warn!(%id, "no to-do entry found");
    Error::not_found(format!("No to-do entry found with id: {id}"))
}

/// Service backed by a [`TodoRepository`].
#[derive(Clone)]
pub struct TodoServiceImpl<R> {
    repository: Arc<R>,
}

impl<R> TodoServiceImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> TodoService for TodoServiceImpl<R>
where
    R: TodoRepository,
{
    async fn add(&self, draft: TodoDraft) -> Result<Todo, Error> {
        debug!(title = draft.title(), "adding to-do entry");
        let added = self
            .repository
            .insert(&draft)
            .await
            .map_err(map_repository_error)?;
        debug!(id = %added.id(), "added to-do entry");
        Ok(added)
    }

    async fn find_all(&self) -> Result<Vec<Todo>, Error> {
        let todos = self
            .repository
            .find_all()
            .await
            .map_err(map_repository_error)?;
        debug!(count = todos.len(), "found to-do entries");
        Ok(todos)
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Todo, Error> {
        debug!(%id, "finding to-do entry");
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }

    async fn update(&self, id: TodoId, draft: TodoDraft) -> Result<Todo, Error> {
        debug!(%id, "updating to-do entry");
        self.repository
            .update(&Todo::new(id, draft))
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }

    async fn delete_by_id(&self, id: TodoId) -> Result<Todo, Error> {
        debug!(%id, "deleting to-do entry");
        self.repository
            .delete(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }
}

#[cfg(test)]
#[path = "todo_service_tests.rs"]
mod tests;
