//! Leaf text nodes and content-addressed identifiers.

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid};

/// Derive the identifier of a piece of text from its UTF-8 bytes.
///
/// This is a name-based version 3 UUID computed over the raw bytes with no
/// namespace prefix, so equal text always maps to the same identifier.
pub fn content_id(text: &str) -> Uuid {
    let digest = Md5::digest(text.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest);
    Builder::from_md5_bytes(bytes).into_uuid()
}

/// A fresh random identifier, used for empty text.
pub fn random_id() -> Uuid {
    Uuid::new_v4()
}

/// A leaf holding raw text plus its identifier.
///
/// Both fields are fixed at construction so the identifier always matches
/// the text. Build a new element to change the content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextElement {
    text: String,

    /// Derived from `text`, or random when `text` is empty
    uuid: Uuid,
}

impl TextElement {
    /// Create a text element with a content-addressed identifier.
    ///
    /// Empty text gets a random identifier instead.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let uuid = if text.is_empty() {
            random_id()
        } else {
            content_id(&text)
        };
        Self { text, uuid }
    }

    /// Create an empty text element with a random identifier.
    pub fn empty() -> Self {
        Self::new(String::new())
    }

    /// Check if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the text content.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Get the identifier.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }
}

/// A single sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text
    pub text: TextElement,
}

impl Sentence {
    /// Create a sentence from text.
    pub fn new(text: TextElement) -> Self {
        Self { text }
    }

    /// Get the sentence text.
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }
}
