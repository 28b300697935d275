//! Terminal I/O boundary.
//!
//! # Responsibility
//! - Own every prompt and every rendered line of the interactive session.
//! - Return raw user input; parsing and validation happen in the controller.

use crate::command::Command;
use quotebook_core::{Quote, QuoteId};
use std::io::{self, BufRead, Write};

/// View contract consumed by the controller.
///
/// Implementations must not interpret user input beyond line framing.
pub trait QuoteView {
    fn show_title(&mut self);
    fn request_command(&mut self) -> String;
    /// Returns (author, content) as two raw lines.
    fn request_register(&mut self) -> (String, String);
    /// Prompts replacement (author, content) while showing current values.
    fn request_update(&mut self, current: &Quote) -> (String, String);
    fn request_target_id(&mut self, command: Command) -> String;
    fn request_keyword(&mut self) -> String;
    fn display_quotes(&mut self, lines: &[String]);
    fn display_error_message(&mut self, message: &str);
    fn alert_success(&mut self, id: QuoteId, command: Command);
}

/// Console implementation over stdin/stdout.
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }

    fn prompt(&mut self, text: &str) -> String {
        print!("{text}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => line.trim_end_matches(['\n', '\r']).to_string(),
            Err(_) => String::new(),
        }
    }

    fn prompt_or_exit(&mut self, text: &str) -> Option<String> {
        print!("{text}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            // A closed stdin would otherwise error-loop forever.
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
        }
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteView for ConsoleView {
    fn show_title(&mut self) {
        println!("== 명언 관리 애플리케이션 ==");
    }

    fn request_command(&mut self) -> String {
        self.prompt_or_exit("명령) ")
            .unwrap_or_else(|| Command::Exit.token().to_string())
    }

    fn request_register(&mut self) -> (String, String) {
        let author = self.prompt("작가 : ");
        let content = self.prompt("명언 : ");
        (author, content)
    }

    fn request_update(&mut self, current: &Quote) -> (String, String) {
        let author = self.prompt(&format!("작가(기존: {}) : ", current.author));
        let content = self.prompt(&format!("명언(기존: {}) : ", current.content));
        (author, content)
    }

    fn request_target_id(&mut self, command: Command) -> String {
        self.prompt(&format!("{}할 명언 번호를 입력해주세요 : ", command.token()))
    }

    fn request_keyword(&mut self) -> String {
        self.prompt("검색어를 입력해주세요 : ")
    }

    fn display_quotes(&mut self, lines: &[String]) {
        for line in lines {
            println!("{line}");
        }
    }

    fn display_error_message(&mut self, message: &str) {
        println!("{message}");
    }

    fn alert_success(&mut self, id: QuoteId, command: Command) {
        println!("{id}번 명언이 {}되었습니다.", command.token());
    }
}
