//! Document tree model for structured scientific documents.
//!
//! A [`Document`] owns one [`DocumentElement`], which splits into metadata,
//! front, body and back matter. Every parent exclusively owns its children.
//! Collection-valued fields stay `None` until the first element is added.

mod container;
mod document;
mod image;
mod index;
mod meta;
mod paragraph;
mod structure;
mod table;
mod text;

pub use container::{BackMatter, BodyMatter, Chapter, FrontMatter, Part, Section};
pub use document::{Document, DocumentElement, Provenance, ProvenanceEntry};
pub use image::ImageContent;
pub use index::TextIndex;
pub use meta::{
    Abstract, Affiliation, Author, Bibliographic, Bibliography, Concept, Date, Keywords, License,
    MetaElement, Person, PublicationType, Reference, Title,
};
pub use paragraph::{Paragraph, StructureElement};
pub use structure::{CaptionedBox, Code, Figure, Formula, Outline, OutlineItem, Quotation};
pub use table::{DataTable, Table, TableCell, TableRow};
pub use text::{content_id, random_id, Sentence, TextElement};
