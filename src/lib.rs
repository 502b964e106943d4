//! # scidoc
//!
//! In-memory model for structured scientific and biomedical documents.
//!
//! A document is a tree: bibliographic metadata, front matter (title,
//! abstract), body matter (parts, chapters, sections) and back matter
//! (bibliography). The [`DocumentBuilder`] assembles that tree from raw text
//! fragments, giving every non-empty text a content-derived identifier.
//! The [`render`] functions flatten a finished tree into plain text.
//!
//! ## Quick Start
//!
//! ```
//! use scidoc::{render, Document, DocumentBuilder};
//!
//! fn main() -> scidoc::Result<()> {
//!     let builder = DocumentBuilder::new();
//!     let mut doc = Document::new();
//!
//!     builder.set_title(&mut doc, "Study X", None);
//!     builder.add_person(&mut doc, "Ada", "Lovelace");
//!     builder.set_abstract(&mut doc, "Short summary.");
//!     let section = builder.create_main_section("Cells grew. Then they stopped.", None)?;
//!     builder.add_body_section(&mut doc, section);
//!
//!     let abstract_text = render::get_document_abstract(&doc)?;
//!     let tokens = render::render_text_contents(&doc);
//!     println!("{}\n{}", abstract_text, tokens);
//!     Ok(())
//! }
//! ```
//!
//! ## Collaborators
//!
//! - **Sentence segmentation**: any [`SentenceDetector`]; a punctuation-based
//!   [`RuleBasedSentenceDetector`] is the default.
//! - **Content digest**: any [`ContentDigest`]; [`Sha512Hex`] is the default.
//! - **Diagnostics**: soft failures go to a [`DiagnosticSink`].

pub mod builder;
pub mod diagnostics;
pub mod digest;
pub mod error;
pub mod model;
pub mod render;
pub mod sentence;

// Re-export commonly used types
pub use builder::{BuilderOptions, DocumentBuilder, ReferenceDraft};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, LogSink};
pub use digest::{ContentDigest, Sha512Hex};
pub use error::{Error, Result};
pub use model::{
    Abstract, Author, Bibliographic, Bibliography, BodyMatter, Document, DocumentElement,
    FrontMatter, MetaElement, Paragraph, Section, Sentence, StructureElement, TextElement,
};
pub use render::{JsonFormat, RenderOptions};
pub use sentence::{RuleBasedSentenceDetector, SentenceDetector};
