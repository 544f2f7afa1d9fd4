use crate::model::Quote;
use std::path::PathBuf;

pub mod add;
pub mod build;
pub mod delete;
pub mod list;
pub mod modify;
pub mod sample;
pub mod view;

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

/// One page of the listing, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedPage {
    pub items: Vec<Quote>,
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_quotes: Vec<Quote>,
    pub listed_page: Option<ListedPage>,
    pub artifact_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_quotes(mut self, quotes: Vec<Quote>) -> Self {
        self.affected_quotes = quotes;
        self
    }

    pub fn with_listed_page(mut self, page: ListedPage) -> Self {
        self.listed_page = Some(page);
        self
    }

    pub fn with_artifact_path(mut self, path: PathBuf) -> Self {
        self.artifact_path = Some(path);
        self
    }
}

/// Field changes for `modify`. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct QuoteUpdate {
    pub content: Option<String>,
    pub author: Option<String>,
}

impl QuoteUpdate {
    pub fn new(content: Option<String>, author: Option<String>) -> Self {
        Self { content, author }
    }
}

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn required_field(name: &str, value: &str) -> crate::error::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(crate::error::QuotezError::Api(format!(
            "{} cannot be empty",
            name
        )));
    }
    Ok(trimmed.to_string())
}
