//! Quote domain model.
//!
//! # Responsibility
//! - Define the canonical author/content record managed by the application.
//! - Provide the derived display projection used by list/search output.
//!
//! # Invariants
//! - `id` is assigned by the repository at insertion and never changes.
//! - `info()` is recomputed from current fields on every call, never stored.

use serde::{Deserialize, Serialize};

/// Sequential identifier for a stored quote.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Ids start at 1, increase by 1 per insertion and are never reused,
/// even after deletion.
pub type QuoteId = i64;

/// Canonical record for one stored quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Repository-assigned sequential id.
    pub id: QuoteId,
    /// Attributed author. Mutable through update.
    pub author: String,
    /// Quote text. Mutable through update.
    pub content: String,
}

impl Quote {
    /// Creates a quote with a repository-assigned id.
    ///
    /// Only repository implementations should call this; everyone else
    /// starts from a [`NewQuote`] draft.
    pub fn with_id(id: QuoteId, author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            content: content.into(),
        }
    }

    /// Replaces author and content in place. The id is untouched.
    pub fn update(&mut self, author: impl Into<String>, content: impl Into<String>) {
        self.author = author.into();
        self.content = content.into();
    }

    /// Derived display string: `"<id> / <author> / <content>"`.
    pub fn info(&self) -> String {
        format!("{} / {} / {}", self.id, self.author, self.content)
    }
}

/// Id-less draft accepted by repository insertion.
///
/// Keeps "ids are assigned only by the repository" true at the type level:
/// callers cannot hand-pick an id because the draft has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    pub author: String,
    pub content: String,
}

impl NewQuote {
    /// Builds a draft from raw author/content input.
    ///
    /// Empty strings are permitted; the domain has no content validation.
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
        }
    }
}
