//! Persistence adapters for to-do entries.

mod in_memory_todo_repository;

pub use in_memory_todo_repository::InMemoryTodoRepository;
