//! In-process [`TodoRepository`] backed by an ordered map.
//!
//! Writers are serialised behind a tokio `RwLock`; identifiers come from a
//! monotonically increasing counter starting at 1 and are never reused.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{TodoRepository, TodoRepositoryError};
use crate::domain::{Todo, TodoDraft, TodoId};

/// Volatile repository used by the server binary and integration tests.
#[derive(Debug)]
pub struct InMemoryTodoRepository {
    entries: RwLock<BTreeMap<TodoId, Todo>>,
    next_id: AtomicI64,
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&self) -> Result<TodoId, TodoRepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if id <= 0 {
            return Err(TodoRepositoryError::query("identifier sequence exhausted"));
        }
        Ok(TodoId::new(id))
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, draft: &TodoDraft) -> Result<Todo, TodoRepositoryError> {
        let mut entries = self.entries.write().await;
        let id = self.allocate_id()?;
        let todo = Todo::new(id, draft.clone());
        entries.insert(id, todo.clone());
        debug!(%id, "stored to-do entry");
        Ok(todo)
    }

    async fn find_all(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        Ok(self.entries.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoRepositoryError> {
        Ok(self.entries.read().await.get(&id).cloned())
    }

    async fn update(&self, todo: &Todo) -> Result<Option<Todo>, TodoRepositoryError> {
        let mut entries = self.entries.write().await;
        Ok(entries.get_mut(&todo.id()).map(|slot| {
            *slot = todo.clone();
            slot.clone()
        }))
    }

    async fn delete(&self, id: TodoId) -> Result<Option<Todo>, TodoRepositoryError> {
        Ok(self.entries.write().await.remove(&id))
    }
}
