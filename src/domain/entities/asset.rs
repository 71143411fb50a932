//! BuildAsset entity - one finished output of a build pass
//!
//! Assets are produced by the bundler and handed to the core read-only.
//! The core never mutates or owns their lifecycle beyond a single pass.

use std::borrow::Cow;
use std::fmt;

use crate::domain::ports::{Asset, TextSource, UnsupportedContent};

/// Payload of a build asset
#[derive(Clone, PartialEq, Eq)]
pub enum AssetContent {
    /// Textual payload (CSS, JS, HTML, ...)
    Text(String),
    /// Anything that is not valid UTF-8
    Binary(Vec<u8>),
}

impl AssetContent {
    /// Classify raw bytes: valid UTF-8 becomes `Text`, the rest `Binary`
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => AssetContent::Text(text),
            Err(err) => AssetContent::Binary(err.into_bytes()),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, AssetContent::Text(_))
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        match self {
            AssetContent::Text(text) => text.len(),
            AssetContent::Binary(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for AssetContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetContent::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            AssetContent::Binary(bytes) => f.debug_tuple("Binary").field(&bytes.len()).finish(),
        }
    }
}

impl TextSource for AssetContent {
    fn as_text(&self) -> Result<Cow<'_, str>, UnsupportedContent> {
        match self {
            AssetContent::Text(text) => Ok(Cow::Borrowed(text.as_str())),
            AssetContent::Binary(_) => Err(UnsupportedContent::new("binary")),
        }
    }
}

/// A named build output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildAsset {
    /// Path-like name, unique within a pass (e.g. `static/css/main.css`)
    name: String,
    content: AssetContent,
}

impl BuildAsset {
    pub fn new(name: impl Into<String>, content: AssetContent) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    /// Create a text asset
    pub fn text(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(name, AssetContent::Text(content.into()))
    }

    /// Create a binary asset
    pub fn binary(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self::new(name, AssetContent::Binary(content.into()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &AssetContent {
        &self.content
    }
}

impl Asset for BuildAsset {
    type Content = AssetContent;

    fn name(&self) -> &str {
        &self.name
    }

    fn content(&self) -> &AssetContent {
        &self.content
    }
}
