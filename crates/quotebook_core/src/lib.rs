//! Core domain logic for Quotebook.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging};
pub use model::quote::{NewQuote, Quote, QuoteId};
pub use repo::memory_repo::MemoryQuoteRepository;
pub use repo::quote_repo::{QuoteRepository, RepoError, RepoResult, SqliteQuoteRepository};
pub use service::quote_service::QuoteService;
