//! Command enumeration for the interactive loop.
//!
//! # Responsibility
//! - Map raw user tokens onto the closed set of commands.
//!
//! # Invariants
//! - `parse` never fails loudly; unrecognized input is `None` and the
//!   controller decides how to report it.

/// One enumerated user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    Update,
    Delete,
    Search,
    Exit,
}

impl Command {
    /// Parses an already-trimmed user token into a command.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "목록" => Some(Self::List),
            "등록" => Some(Self::Add),
            "수정" => Some(Self::Update),
            "삭제" => Some(Self::Delete),
            "검색" => Some(Self::Search),
            "종료" => Some(Self::Exit),
            _ => None,
        }
    }

    /// The user-facing token, reused inside prompts and confirmations.
    pub fn token(self) -> &'static str {
        match self {
            Self::List => "목록",
            Self::Add => "등록",
            Self::Update => "수정",
            Self::Delete => "삭제",
            Self::Search => "검색",
            Self::Exit => "종료",
        }
    }

    /// ASCII name used in log events.
    pub fn name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Add => "add",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Search => "search",
            Self::Exit => "exit",
        }
    }
}
