//! Command loop driver.
//!
//! # Responsibility
//! - Read one command per iteration, route it to the service and render the
//!   outcome through the view.
//! - Convert every recoverable failure into a user-facing message; nothing
//!   escapes a loop iteration.
//!
//! # Invariants
//! - The loop terminates only on the exit command.
//! - All existence checks route through `QuoteService::get_quote_by_id`.

use crate::command::Command;
use crate::view::QuoteView;
use log::{debug, warn};
use quotebook_core::{QuoteId, QuoteRepository, QuoteService, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Recoverable per-command failure, rendered to the user in Korean.
#[derive(Debug)]
pub enum CommandError {
    InvalidCommand(String),
    InvalidNumber(String),
    QuoteNotFound(QuoteId),
    Storage(RepoError),
}

impl CommandError {
    /// Stable machine-readable code for log events.
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidCommand(_) => "invalid_command",
            Self::InvalidNumber(_) => "invalid_number",
            Self::QuoteNotFound(_) => "quote_not_found",
            Self::Storage(_) => "storage",
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCommand(raw) => write!(f, "잘못된 명령어 입니다: {raw}"),
            Self::InvalidNumber(raw) => write!(f, "숫자만 입력해주세요. 입력된 값: {raw}"),
            Self::QuoteNotFound(id) => write!(f, "{id}번 명언은 존재하지 않습니다."),
            Self::Storage(err) => write!(f, "저장소 오류가 발생했습니다: {err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for CommandError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::QuoteNotFound(id),
            other => Self::Storage(other),
        }
    }
}

/// The command loop coordinating view and service.
pub struct QuoteController<R: QuoteRepository, V: QuoteView> {
    view: V,
    service: QuoteService<R>,
}

impl<R: QuoteRepository, V: QuoteView> QuoteController<R, V> {
    pub fn new(view: V, service: QuoteService<R>) -> Self {
        Self { view, service }
    }

    /// Runs the blocking read-eval loop until the exit command.
    pub fn run(&mut self) {
        self.view.show_title();

        loop {
            let raw = self.view.request_command();
            let raw = raw.trim();

            let Some(command) = Command::parse(raw) else {
                warn!("event=command_rejected module=controller status=error error_code=invalid_command");
                let err = CommandError::InvalidCommand(raw.to_string());
                self.view.display_error_message(&err.to_string());
                continue;
            };

            if command == Command::Exit {
                debug!("event=command_dispatch module=controller status=ok command=exit");
                break;
            }

            debug!(
                "event=command_dispatch module=controller status=ok command={}",
                command.name()
            );
            if let Err(err) = self.dispatch(command) {
                warn!(
                    "event=command_failed module=controller status=error command={} error_code={}",
                    command.name(),
                    err.code()
                );
                self.view.display_error_message(&err.to_string());
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::List => self.handle_list(),
            Command::Add => self.handle_add(),
            Command::Update => self.handle_update(),
            Command::Delete => self.handle_delete(),
            Command::Search => self.handle_search(),
            // Exit is handled by the loop before dispatch.
            Command::Exit => Ok(()),
        }
    }

    fn handle_list(&mut self) -> Result<(), CommandError> {
        let lines = self.service.list_quotes()?;
        self.view.display_quotes(&lines);
        Ok(())
    }

    fn handle_add(&mut self) -> Result<(), CommandError> {
        let (author, content) = self.view.request_register();
        let id = self.service.add_quote(author, content)?;
        self.view.alert_success(id, Command::Add);
        Ok(())
    }

    fn handle_update(&mut self) -> Result<(), CommandError> {
        let target_id = self.parse_target_id(Command::Update)?;
        let mut quote = self.service.get_quote_by_id(target_id)?;
        let (author, content) = self.view.request_update(&quote);
        self.service.update_quote(&mut quote, author, content)?;
        Ok(())
    }

    fn handle_delete(&mut self) -> Result<(), CommandError> {
        let target_id = self.parse_target_id(Command::Delete)?;
        let quote = self.service.get_quote_by_id(target_id)?;
        self.service.delete_quote(&quote)?;
        self.view.alert_success(quote.id, Command::Delete);
        Ok(())
    }

    fn handle_search(&mut self) -> Result<(), CommandError> {
        let keyword = self.view.request_keyword();
        let lines = self.service.search_quotes(keyword.trim())?;
        self.view.display_quotes(&lines);
        Ok(())
    }

    fn parse_target_id(&mut self, command: Command) -> Result<QuoteId, CommandError> {
        let raw = self.view.request_target_id(command);
        let trimmed = raw.trim();
        trimmed
            .parse::<QuoteId>()
            .map_err(|_| CommandError::InvalidNumber(trimmed.to_string()))
    }
}
