//! Rendering options and configuration.

/// Options for flattening document text.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// String placed between distinct text fragments
    pub separator: String,

    /// Remove sentence punctuation (`.`, `!`, `?`, `;`)
    pub strip_punctuation: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Enable or disable punctuation stripping.
    pub fn with_strip_punctuation(mut self, strip: bool) -> Self {
        self.strip_punctuation = strip;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            strip_punctuation: true,
        }
    }
}
