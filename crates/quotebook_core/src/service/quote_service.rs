//! Quote use-case service.
//!
//! # Responsibility
//! - Translate user intents into repository operations.
//! - Render quotes into the formatted info strings shown to the user.
//!
//! # Invariants
//! - This is the only layer that raises `NotFound` for missing ids; every
//!   existence check routes through `get_quote_by_id`.
//! - List and search output preserve repository (insertion) order.

use crate::model::quote::{NewQuote, Quote, QuoteId};
use crate::repo::quote_repo::{QuoteRepository, RepoError, RepoResult};

/// Use-case service wrapper for quote operations.
pub struct QuoteService<R: QuoteRepository> {
    repo: R,
}

impl<R: QuoteRepository> QuoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new quote and returns its assigned id.
    ///
    /// # Contract
    /// - Any author/content strings are accepted, including empty ones.
    /// - Id assignment is delegated to the repository.
    pub fn add_quote(
        &mut self,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> RepoResult<QuoteId> {
        self.repo.insert(NewQuote::new(author, content))
    }

    /// Deletes a previously looked-up quote.
    ///
    /// Idempotency is inherited from the repository contract.
    pub fn delete_quote(&mut self, quote: &Quote) -> RepoResult<()> {
        self.repo.delete(quote.id)
    }

    /// Replaces a quote's author/content in place and persists the change.
    ///
    /// The quote keeps its identity; the id never changes.
    pub fn update_quote(
        &mut self,
        quote: &mut Quote,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> RepoResult<()> {
        quote.update(author, content);
        self.repo.update(quote)
    }

    /// Renders every stored quote to its info string, repository order.
    pub fn list_quotes(&self) -> RepoResult<Vec<String>> {
        let quotes = self.repo.select_all()?;
        Ok(quotes.iter().map(Quote::info).collect())
    }

    /// Renders quotes matching `keyword` (author or content), repository order.
    pub fn search_quotes(&self, keyword: &str) -> RepoResult<Vec<String>> {
        let quotes = self.repo.search(keyword)?;
        Ok(quotes.iter().map(Quote::info).collect())
    }

    /// Looks up one quote by id.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when no quote is stored under `id`.
    pub fn get_quote_by_id(&self, id: QuoteId) -> RepoResult<Quote> {
        self.repo
            .select_by_id(id)?
            .ok_or(RepoError::NotFound(id))
    }
}
