//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod message_source;
mod todo_repository;
mod todo_service;

pub use message_source::MessageSource;
#[cfg(test)]
pub use todo_repository::MockTodoRepository;
pub use todo_repository::{TodoRepository, TodoRepositoryError};
#[cfg(test)]
pub use todo_service::MockTodoService;
pub use todo_service::TodoService;
