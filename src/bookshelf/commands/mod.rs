//! # Command Layer
//!
//! One module per user-facing operation. Each command runs against a
//! [`Catalog`](crate::catalog::Catalog) and returns a [`CmdResult`]: the
//! books it touched or listed, plus leveled messages for the UI to render.
//!
//! Expected outcomes such as "not found", an invalid status or a failed save
//! are messages, not errors. `Err` is left for failures nothing upstream can
//! sensibly report as an outcome.

use crate::error::CatalogError;
use crate::model::Book;

pub mod add;
pub mod delete;
pub mod find;
pub mod list;
pub mod load;
pub mod status;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<Book>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    /// Whether any message is an error.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }

    /// Add a warning when a mutation could not be saved.
    pub(crate) fn report_persistence(&mut self, persist_error: Option<CatalogError>) {
        if let Some(error) = persist_error {
            self.add_message(CmdMessage::warning(format!(
                "{}. The change is kept in memory only.",
                error
            )));
        }
    }
}
