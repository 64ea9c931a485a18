//! Source location of a console message.

/// Where a console message was produced.
///
/// Every field is independently known or unknown; `None` never stands for
/// zero or an empty URL.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConsoleMessageLocation {
    /// URL of the resource, if known.
    pub url: Option<String>,
    /// 0-based line number in the resource, if known.
    pub line_number: Option<u32>,
    /// 0-based column number in the resource, if known.
    pub column_number: Option<u32>,
}

impl ConsoleMessageLocation {
    /// Create a location with every field unknown.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_line_number(mut self, line_number: u32) -> Self {
        self.line_number = Some(line_number);
        self
    }

    pub fn with_column_number(mut self, column_number: u32) -> Self {
        self.column_number = Some(column_number);
        self
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn line_number(&self) -> Option<u32> {
        self.line_number
    }

    pub fn column_number(&self) -> Option<u32> {
        self.column_number
    }

    /// Whether nothing about the location is known.
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.line_number.is_none() && self.column_number.is_none()
    }
}
