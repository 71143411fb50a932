//! TextSource port - content that can be read as text
//!
//! The digest pipeline only needs one capability from an asset's payload:
//! produce it as text, or say it cannot. Collaborators that hold content in
//! other shapes (buffers, lazily rendered sources) implement this trait.

use std::borrow::Cow;
use thiserror::Error;

/// Returned when a payload has no textual representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} content cannot be read as text")]
pub struct UnsupportedContent {
    kind: String,
}

impl UnsupportedContent {
    /// Create an error describing the rejected payload kind
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    /// Kind of payload that was rejected (e.g. "binary")
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

/// Asset payload accessor
pub trait TextSource {
    /// Content as text, exactly as produced. No trimming or normalization.
    fn as_text(&self) -> Result<Cow<'_, str>, UnsupportedContent>;
}

impl TextSource for str {
    fn as_text(&self) -> Result<Cow<'_, str>, UnsupportedContent> {
        Ok(Cow::Borrowed(self))
    }
}

impl TextSource for String {
    fn as_text(&self) -> Result<Cow<'_, str>, UnsupportedContent> {
        Ok(Cow::Borrowed(self.as_str()))
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn as_text(&self) -> Result<Cow<'_, str>, UnsupportedContent> {
        (**self).as_text()
    }
}
