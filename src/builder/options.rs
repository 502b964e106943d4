//! Builder options and configuration.

/// Options for [`DocumentBuilder`](super::DocumentBuilder).
#[derive(Debug, Clone)]
pub struct BuilderOptions {
    /// Sentences shorter than this many characters are dropped
    pub min_sentence_length: usize,

    /// Overflow beyond a sentence limit that is still kept in full
    ///
    /// With a limit of `n`, paragraphs of fewer than `n + tolerance`
    /// sentences are not truncated.
    pub truncation_tolerance: usize,

    /// Trim surrounding whitespace before storing text
    ///
    /// Changes identifiers of text with leading or trailing whitespace.
    pub trim_text: bool,
}

impl BuilderOptions {
    /// Create new builder options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum sentence length.
    pub fn with_min_sentence_length(mut self, length: usize) -> Self {
        self.min_sentence_length = length;
        self
    }

    /// Set the truncation tolerance.
    pub fn with_truncation_tolerance(mut self, tolerance: usize) -> Self {
        self.truncation_tolerance = tolerance;
        self
    }

    /// Enable or disable trimming of text.
    pub fn with_trim_text(mut self, trim: bool) -> Self {
        self.trim_text = trim;
        self
    }
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            min_sentence_length: 5,
            truncation_tolerance: 10,
            trim_text: false,
        }
    }
}
