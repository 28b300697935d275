//! Interactive quote manager entry point.
//!
//! # Responsibility
//! - Wire logging, storage, service and view together and hand control to
//!   the command loop.

mod command;
mod controller;
mod view;

use controller::QuoteController;
use quotebook_core::db::open_db_in_memory;
use quotebook_core::{default_log_level, init_logging, QuoteService, SqliteQuoteRepository};
use view::ConsoleView;

fn main() {
    init_app_logging();

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("저장소 초기화에 실패했습니다: {err}");
            std::process::exit(1);
        }
    };

    let repo = match SqliteQuoteRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("저장소 초기화에 실패했습니다: {err}");
            std::process::exit(1);
        }
    };

    let mut controller = QuoteController::new(ConsoleView::new(), QuoteService::new(repo));
    controller.run();
}

/// Best-effort logging bootstrap; the app stays usable without logs.
fn init_app_logging() {
    let log_dir = std::env::temp_dir().join("quotebook").join("logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("로그 초기화에 실패했습니다 (로그 없이 계속합니다): {err}");
    }
}
