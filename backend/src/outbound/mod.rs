//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: in-process storage for to-do entries.
//! - **messages**: static localized feedback catalogue.
//!
//! Adapters translate between domain types and their storage representation.
//! They contain no business logic.

pub mod messages;
pub mod persistence;
