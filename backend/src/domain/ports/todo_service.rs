//! Driving port for to-do use cases.
//!
//! Both the HTML and the JSON adapters talk to this port only. Failures use
//! the transport-agnostic [`Error`]; a missing entry is always
//! [`ErrorCode::NotFound`](crate::domain::ErrorCode::NotFound).

use async_trait::async_trait;

use crate::domain::{Error, Todo, TodoDraft, TodoId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoService: Send + Sync {
    /// Persist a new entry and return it with its assigned identifier.
    async fn add(&self, draft: TodoDraft) -> Result<Todo, Error>;

    /// Every entry, in storage order.
    async fn find_all(&self) -> Result<Vec<Todo>, Error>;

    /// One entry, or `NotFound`.
    async fn find_by_id(&self, id: TodoId) -> Result<Todo, Error>;

    /// Overwrite the title and description of an existing entry.
    async fn update(&self, id: TodoId, draft: TodoDraft) -> Result<Todo, Error>;

    /// Remove an entry and return the state it had before removal.
    async fn delete_by_id(&self, id: TodoId) -> Result<Todo, Error>;
}
