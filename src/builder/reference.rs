//! Input for bibliography entries.

use crate::model::Author;
use chrono::NaiveDate;

/// Raw fields of a bibliography entry, turned into a
/// [`Reference`](crate::model::Reference) by
/// [`DocumentBuilder::add_reference`](super::DocumentBuilder::add_reference).
#[derive(Debug, Clone, Default)]
pub struct ReferenceDraft {
    /// Key within the bibliography
    pub id: String,

    /// Journal or other source
    pub source: Option<String>,

    /// Publication identifier (DOI, PMID, ...)
    pub publication_id: Option<String>,

    /// Publication type
    pub publication_type: Option<String>,

    /// Title
    pub title: Option<String>,

    /// Authors in byline order
    pub authors: Vec<Author>,

    /// Publication date
    pub date: Option<NaiveDate>,
}

impl ReferenceDraft {
    /// Start a draft for the given bibliography key.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the publication identifier.
    pub fn with_publication_id(mut self, id: impl Into<String>) -> Self {
        self.publication_id = Some(id.into());
        self
    }

    /// Set the publication type.
    pub fn with_publication_type(mut self, publication_type: impl Into<String>) -> Self {
        self.publication_type = Some(publication_type.into());
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append an author.
    pub fn with_author(mut self, author: Author) -> Self {
        self.authors.push(author);
        self
    }

    /// Replace the authors.
    pub fn with_authors(mut self, authors: Vec<Author>) -> Self {
        self.authors = authors;
        self
    }

    /// Set the publication date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}
