//! Domain model for the quote collection.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every stored quote is identified by a unique sequential `QuoteId`.
//! - Deletion is a hard removal; there are no tombstones.

pub mod quote;
