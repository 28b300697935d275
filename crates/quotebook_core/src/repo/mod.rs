//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the data access contract for the quote collection.
//! - Isolate storage details (SQLite or plain map) from service orchestration.
//!
//! # Invariants
//! - Ids are assigned exclusively inside repository implementations.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod memory_repo;
pub mod quote_repo;
