//! Plain in-process map repository.
//!
//! # Responsibility
//! - Provide the same repository contract without a database, for callers
//!   (mostly tests) that want a bare id-keyed store.
//!
//! # Invariants
//! - The id counter starts at 1 and only moves forward; deletions never
//!   release an id back to the pool.
//! - Map iteration order equals insertion order because keys are the
//!   monotonically assigned ids.

use crate::model::quote::{NewQuote, Quote, QuoteId};
use crate::repo::quote_repo::{QuoteRepository, RepoError, RepoResult};
use std::collections::BTreeMap;

/// Map-backed quote repository with a repository-owned id counter.
pub struct MemoryQuoteRepository {
    quotes: BTreeMap<QuoteId, Quote>,
    next_id: QuoteId,
}

impl MemoryQuoteRepository {
    pub fn new() -> Self {
        Self {
            quotes: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Default for MemoryQuoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRepository for MemoryQuoteRepository {
    fn insert(&mut self, quote: NewQuote) -> RepoResult<QuoteId> {
        let id = self.next_id;
        self.next_id += 1;
        self.quotes
            .insert(id, Quote::with_id(id, quote.author, quote.content));
        Ok(id)
    }

    fn select_by_id(&self, id: QuoteId) -> RepoResult<Option<Quote>> {
        Ok(self.quotes.get(&id).cloned())
    }

    fn update(&mut self, quote: &Quote) -> RepoResult<()> {
        match self.quotes.get_mut(&quote.id) {
            Some(stored) => {
                stored.update(quote.author.clone(), quote.content.clone());
                Ok(())
            }
            None => Err(RepoError::NotFound(quote.id)),
        }
    }

    fn delete(&mut self, id: QuoteId) -> RepoResult<()> {
        self.quotes.remove(&id);
        Ok(())
    }

    fn select_all(&self) -> RepoResult<Vec<Quote>> {
        Ok(self.quotes.values().cloned().collect())
    }

    fn search(&self, keyword: &str) -> RepoResult<Vec<Quote>> {
        Ok(self
            .quotes
            .values()
            .filter(|quote| quote.author.contains(keyword) || quote.content.contains(keyword))
            .cloned()
            .collect())
    }
}
