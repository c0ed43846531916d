//! Outbound port for storing to-do entries.
use async_trait::async_trait;

use crate::domain::{Todo, TodoDraft, TodoId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by to-do repository adapters.
    pub enum TodoRepositoryError {
        /// The backing store could not be reached.
        Connection { message: String } => "todo repository connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } => "todo repository query failed: {message}",
    }
}

/// Storage for to-do entries keyed by a persistence-assigned identifier.
///
/// Each method is atomic with respect to the others: an `update` or `delete`
/// racing a `delete` of the same id observes either the entry or its absence,
/// never a partial write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Store a new entry under a freshly assigned identifier.
    async fn insert(&self, draft: &TodoDraft) -> Result<Todo, TodoRepositoryError>;

    /// All stored entries in ascending identifier order.
    async fn find_all(&self) -> Result<Vec<Todo>, TodoRepositoryError>;

    /// Fetch one entry.
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoRepositoryError>;

    /// Replace an existing entry, returning `None` when the id is unknown.
    async fn update(&self, todo: &Todo) -> Result<Option<Todo>, TodoRepositoryError>;

    /// Remove an entry, returning its last stored state.
    async fn delete(&self, id: TodoId) -> Result<Option<Todo>, TodoRepositoryError>;
}
