//! Quote repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the id-keyed `quotes` store.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `insert` assigns the next sequential id; callers never pick ids.
//! - `select_by_id` models absence as `None`, never as an error.
//! - `delete` is idempotent; removing an unknown id is a no-op.

use crate::db::DbError;
use crate::model::quote::{NewQuote, Quote, QuoteId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const QUOTE_SELECT_SQL: &str = "SELECT
    id,
    author,
    content
FROM quotes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for quote storage and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(QuoteId),
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "quote not found: {id}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; migrations not applied")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for quote CRUD and keyword lookup.
///
/// Implementations own the canonical collection and the id sequence.
pub trait QuoteRepository {
    /// Stores a draft under the next sequential id and returns that id.
    fn insert(&mut self, quote: NewQuote) -> RepoResult<QuoteId>;
    /// Returns the stored quote for `id`, or `None` for unknown ids.
    fn select_by_id(&self, id: QuoteId) -> RepoResult<Option<Quote>>;
    /// Persists changed author/content for an existing quote.
    fn update(&mut self, quote: &Quote) -> RepoResult<()>;
    /// Removes the mapping for `id`. Unknown ids are a no-op.
    fn delete(&mut self, id: QuoteId) -> RepoResult<()>;
    /// Snapshot of all current quotes in insertion order.
    fn select_all(&self) -> RepoResult<Vec<Quote>>;
    /// Quotes whose author or content contains `keyword`, insertion order.
    fn search(&self, keyword: &str) -> RepoResult<Vec<Quote>>;
}

/// SQLite-backed quote repository over an in-memory connection.
#[derive(Debug)]
pub struct SqliteQuoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteQuoteRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        if !table_exists(conn, "quotes")? {
            return Err(RepoError::MissingRequiredTable("quotes"));
        }
        Ok(Self { conn })
    }
}

impl QuoteRepository for SqliteQuoteRepository<'_> {
    fn insert(&mut self, quote: NewQuote) -> RepoResult<QuoteId> {
        self.conn.execute(
            "INSERT INTO quotes (author, content) VALUES (?1, ?2);",
            params![quote.author.as_str(), quote.content.as_str()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn select_by_id(&self, id: QuoteId) -> RepoResult<Option<Quote>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{QUOTE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_quote_row(row)?));
        }

        Ok(None)
    }

    fn update(&mut self, quote: &Quote) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE quotes
             SET
                author = ?1,
                content = ?2
             WHERE id = ?3;",
            params![quote.author.as_str(), quote.content.as_str(), quote.id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(quote.id));
        }

        Ok(())
    }

    fn delete(&mut self, id: QuoteId) -> RepoResult<()> {
        // Idempotent by contract; zero rows changed is not an error here.
        self.conn
            .execute("DELETE FROM quotes WHERE id = ?1;", params![id])?;
        Ok(())
    }

    fn select_all(&self) -> RepoResult<Vec<Quote>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{QUOTE_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut quotes = Vec::new();
        while let Some(row) = rows.next()? {
            quotes.push(parse_quote_row(row)?);
        }

        Ok(quotes)
    }

    fn search(&self, keyword: &str) -> RepoResult<Vec<Quote>> {
        let mut stmt = self.conn.prepare(&format!(
            "{QUOTE_SELECT_SQL}
             WHERE author LIKE '%' || ?1 || '%' ESCAPE '\\'
                OR content LIKE '%' || ?1 || '%' ESCAPE '\\'
             ORDER BY id ASC;"
        ))?;

        let pattern = escape_like_pattern(keyword);
        let mut rows = stmt.query(params![pattern])?;
        let mut quotes = Vec::new();
        while let Some(row) = rows.next()? {
            quotes.push(parse_quote_row(row)?);
        }

        Ok(quotes)
    }
}

fn parse_quote_row(row: &Row<'_>) -> RepoResult<Quote> {
    Ok(Quote {
        id: row.get("id")?,
        author: row.get("author")?,
        content: row.get("content")?,
    })
}

/// Escapes LIKE metacharacters so keywords match literally.
fn escape_like_pattern(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

#[cfg(test)]
mod tests {
    use super::escape_like_pattern;

    #[test]
    fn escape_like_pattern_quotes_metacharacters() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
        assert_eq!(escape_like_pattern("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like_pattern("명언"), "명언");
    }
}
