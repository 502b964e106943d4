//! Incremental document assembly.
//!
//! [`DocumentBuilder`] creates tree nodes from raw text and writes them into
//! a [`Document`]. It keeps no tree state of its own: every `get_*` accessor
//! materializes the requested container on the document passed in, and
//! repeated calls return the same instance.
//!
//! # Example
//!
//! ```
//! use scidoc::{render, DocumentBuilder, Document};
//!
//! let builder = DocumentBuilder::new();
//! let mut doc = Document::new();
//! builder.set_title(&mut doc, "Study X", None);
//! builder.add_person(&mut doc, "Ada", "Lovelace");
//! builder.set_abstract(&mut doc, "Short summary.");
//!
//! assert_eq!(render::get_document_abstract(&doc).unwrap(), "Short summary.");
//! ```

mod options;
mod reference;

pub use options::BuilderOptions;
pub use reference::ReferenceDraft;

use crate::digest::{ContentDigest, Sha512Hex};
use crate::error::Result;
use crate::model::{
    Abstract, Affiliation, Author, BackMatter, Bibliographic, Bibliography, BodyMatter, Chapter,
    Concept, DataTable, Date, Document, DocumentElement, Figure, FrontMatter, ImageContent,
    Keywords, License, MetaElement, Paragraph, Person, PublicationType, Reference, Section,
    Sentence, StructureElement, Table, TableCell, TableRow, TextElement, Title,
};
use crate::sentence::{RuleBasedSentenceDetector, SentenceDetector};
use std::fmt;

/// Value used when a label or identifier is missing.
pub const UNSPECIFIED: &str = "unspecified";

/// Title used when none is given.
pub const NO_TITLE: &str = "no title provided";

/// Abstract text used when none is given.
pub const NO_ABSTRACT: &str = "no abstract provided";

/// Rhetorical label and title of abstract sections.
pub const ABSTRACT_LABEL: &str = "Abstract";

/// Rhetorical label of sections created by [`DocumentBuilder::create_main_section`].
pub const MAIN_SECTION_LABEL: &str = "Main Section";

/// Title of sections created by [`DocumentBuilder::create_main_section`].
pub const MAIN_SECTION_TITLE: &str = "Main";

/// Rhetorical label of keyword lists when none is given.
pub const KEYWORDS_LABEL: &str = "keywords";

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

/// Creates document nodes and assembles them into documents.
///
/// Not safe to share across threads while authoring the same document:
/// the lazy accessors are plain check-then-insert.
pub struct DocumentBuilder {
    sentence_detector: Box<dyn SentenceDetector>,
    digest: Box<dyn ContentDigest>,
    options: BuilderOptions,
}

impl DocumentBuilder {
    /// Create a builder with the rule-based sentence detector and SHA-512.
    pub fn new() -> Self {
        Self::with_detector(RuleBasedSentenceDetector::new())
    }

    /// Create a builder around a sentence detector.
    pub fn with_detector(detector: impl SentenceDetector + 'static) -> Self {
        Self {
            sentence_detector: Box::new(detector),
            digest: Box::new(Sha512Hex),
            options: BuilderOptions::default(),
        }
    }

    /// Replace the content digest.
    pub fn with_digest(mut self, digest: impl ContentDigest + 'static) -> Self {
        self.digest = Box::new(digest);
        self
    }

    /// Replace the options.
    pub fn with_options(mut self, options: BuilderOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the options.
    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    // ------------------------------------------------------------------
    // Lazy accessors. Each one mutates its parent on first use.
    // ------------------------------------------------------------------

    /// Get the document element, creating it if absent.
    pub fn get_document_element<'a>(&self, document: &'a mut Document) -> &'a mut DocumentElement {
        document.document_element_mut()
    }

    /// Get the front matter, creating it (and its parents) if absent.
    pub fn get_front_matter<'a>(&self, document: &'a mut Document) -> &'a mut FrontMatter {
        self.get_document_element(document)
            .front_matter
            .get_or_insert_with(FrontMatter::default)
    }

    /// Get the body matter, creating it (and its parents) if absent.
    pub fn get_body_matter<'a>(&self, document: &'a mut Document) -> &'a mut BodyMatter {
        self.get_document_element(document)
            .body_matter
            .get_or_insert_with(BodyMatter::default)
    }

    /// Get the back matter, creating it (and its parents) if absent.
    pub fn get_back_matter<'a>(&self, document: &'a mut Document) -> &'a mut BackMatter {
        self.get_document_element(document)
            .back_matter
            .get_or_insert_with(BackMatter::default)
    }

    /// Get the meta element, creating it (and its parents) if absent.
    pub fn get_meta_element<'a>(&self, document: &'a mut Document) -> &'a mut MetaElement {
        self.get_document_element(document)
            .meta_element
            .get_or_insert_with(MetaElement::default)
    }

    /// Get the bibliographic record, creating it (and its parents) if absent.
    pub fn get_bibliographic<'a>(&self, document: &'a mut Document) -> &'a mut Bibliographic {
        self.get_meta_element(document)
            .bibliographic
            .get_or_insert_with(Bibliographic::default)
    }

    /// Get the bibliography, creating it (and its parents) if absent.
    pub fn get_bibliography<'a>(&self, document: &'a mut Document) -> &'a mut Bibliography {
        self.get_back_matter(document)
            .bibliography
            .get_or_insert_with(Bibliography::default)
    }

    /// Get the identity concept, creating it (and its parents) if absent.
    pub fn get_concept<'a>(&self, document: &'a mut Document) -> &'a mut Concept {
        self.get_meta_element(document)
            .concept
            .get_or_insert_with(Concept::default)
    }

    // ------------------------------------------------------------------
    // Node constructors
    // ------------------------------------------------------------------

    /// Create a text element.
    ///
    /// Non-empty text gets an identifier derived from its bytes; empty text
    /// gets a random one.
    pub fn create_text_element(&self, text: &str) -> TextElement {
        if self.options.trim_text {
            TextElement::new(text.trim())
        } else {
            TextElement::new(text)
        }
    }

    /// Wrap text in a structure element.
    pub fn create_structure_element(&self, text: &str) -> StructureElement {
        StructureElement::Text(self.create_text_element(text))
    }

    /// Create a sentence, or `None` for empty text.
    pub fn create_sentence(&self, text: &str) -> Option<Sentence> {
        if text.is_empty() {
            return None;
        }
        Some(Sentence::new(self.create_text_element(text)))
    }

    /// Split text into sentences, without any limit.
    pub fn create_sentences(&self, text: &str) -> Result<Vec<Sentence>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .segment(text)?
            .iter()
            .filter_map(|s| self.create_sentence(s))
            .collect())
    }

    /// Create a paragraph from text.
    ///
    /// Returns `None` for empty text. Without sentence splitting the whole
    /// text becomes one text element. With splitting, each sentence becomes
    /// a sentence element; when `sentence_limit` is set and exceeded by at
    /// least the truncation tolerance, only `sentence_limit` sentences are
    /// kept and a note sentence reports how many were skipped.
    pub fn create_paragraph(
        &self,
        text: &str,
        create_sentences: bool,
        sentence_limit: Option<usize>,
    ) -> Result<Option<Paragraph>> {
        if text.is_empty() {
            return Ok(None);
        }

        if !create_sentences {
            return Ok(Some(Paragraph::with_text(self.create_text_element(text))));
        }

        let sentences = self.segment(text)?;
        log::debug!("Created {} sentence(s).", sentences.len());
        if sentences.is_empty() {
            return Ok(None);
        }

        let total = sentences.len();
        let truncate_at = sentence_limit
            .filter(|&limit| total > limit && total - limit >= self.options.truncation_tolerance);

        let mut paragraph = Paragraph::new();
        for sentence in sentences.iter().take(truncate_at.unwrap_or(total)) {
            if let Some(sentence) = self.create_sentence(sentence) {
                paragraph.add_structure_element(StructureElement::Sentence(sentence));
            }
        }

        if let Some(limit) = truncate_at {
            let note = format!(
                ">> Note: skipped {} sentences due to size limit of {}.",
                total - limit,
                limit
            );
            log::info!("{}", note);
            paragraph.add_structure_element(StructureElement::Sentence(Sentence::new(
                self.create_text_element(&note),
            )));
        }

        Ok(Some(paragraph))
    }

    /// Create a section with rhetorical label and title.
    pub fn create_section(&self, rhetorical: &str, title: &str) -> Section {
        Section {
            rhetorical: Some(self.create_text_element(rhetorical)),
            title: Some(self.create_text_element(title)),
            ..Section::default()
        }
    }

    /// Create a section holding `text` as a single unsplit paragraph.
    pub fn create_simple_section(&self, text: &str, rhetorical: &str, title: &str) -> Section {
        let mut section = self.create_section(rhetorical, title);
        section.add_paragraph(Paragraph::with_text(self.create_text_element(text)));
        section
    }

    /// Create the main body section from running text, split into sentences.
    pub fn create_main_section(&self, text: &str, sentence_limit: Option<usize>) -> Result<Section> {
        let mut section = self.create_section(MAIN_SECTION_LABEL, MAIN_SECTION_TITLE);
        if let Some(paragraph) = self.create_paragraph(text, true, sentence_limit)? {
            section.add_paragraph(paragraph);
        }
        Ok(section)
    }

    /// Create a title without subtitle.
    pub fn create_title(&self, content: &str) -> Title {
        Title {
            title_text: Some(self.create_text_element(content)),
            sub_title_text: None,
        }
    }

    /// Create a title from prepared text elements.
    ///
    /// Empty elements are left out; returns `None` if both are empty.
    pub fn create_document_title(
        &self,
        title: Option<TextElement>,
        subtitle: Option<TextElement>,
    ) -> Option<Title> {
        let title = title.filter(|t| !t.is_empty());
        let subtitle = subtitle.filter(|t| !t.is_empty());
        if title.is_none() && subtitle.is_none() {
            return None;
        }
        Some(Title {
            title_text: title,
            sub_title_text: subtitle,
        })
    }

    /// Create an author from a name pair.
    pub fn create_author(&self, forename: &str, surname: &str) -> Author {
        Author::person(Person {
            forename: Some(self.create_text_element(forename)),
            surname: Some(self.create_text_element(surname)),
        })
    }

    /// Create a figure; only the given parts are set.
    pub fn create_figure(
        &self,
        rhetorical: Option<&str>,
        caption: Option<&str>,
        title: Option<&str>,
        image: Option<ImageContent>,
    ) -> Figure {
        Figure {
            rhetorical: rhetorical.map(|t| self.create_text_element(t)),
            title: title.map(|t| self.create_text_element(t)),
            caption: caption.map(|t| self.create_text_element(t)),
            image,
        }
    }

    /// Create a table float; only the given parts are set.
    pub fn create_table(
        &self,
        rhetorical: Option<&str>,
        caption: Option<&str>,
        title: Option<&str>,
    ) -> Table {
        Table {
            rhetorical: rhetorical.map(|t| self.create_text_element(t)),
            title: title.map(|t| self.create_text_element(t)),
            caption: caption.map(|t| self.create_text_element(t)),
            data: None,
        }
    }

    /// Create tabular data from rows of cell texts.
    ///
    /// The first `header_rows` rows form the header. Each cell spans one row
    /// and one column.
    pub fn create_data_table<S: AsRef<str>>(&self, rows: &[Vec<S>], header_rows: u8) -> DataTable {
        let mut table = DataTable::with_header(header_rows);
        for cells in rows {
            let mut row = TableRow::new();
            for cell in cells {
                row.add_cell(TableCell::new(self.create_text_element(cell.as_ref())));
            }
            table.add_row(row);
        }
        table
    }

    /// Create a keyword list, or `None` if `keywords` is empty.
    ///
    /// Each keyword is cut at the first `@` and trimmed. The rhetorical label
    /// defaults to "keywords".
    pub fn create_keywords<S: AsRef<str>>(
        &self,
        keywords: &[S],
        rhetorical: Option<&str>,
    ) -> Option<Keywords> {
        if keywords.is_empty() {
            return None;
        }

        let mut list = Keywords::default();
        for keyword in keywords {
            let term = keyword.as_ref().split('@').next().unwrap_or_default().trim();
            list.add_keyword(self.create_text_element(term));
        }
        let label = rhetorical.filter(|r| !r.is_empty()).unwrap_or(KEYWORDS_LABEL);
        list.rhetorical = Some(self.create_text_element(label));
        Some(list)
    }

    /// Create a single-entry license list.
    pub fn create_license(&self, value: &str) -> Vec<License> {
        vec![License {
            license_name: Some(self.create_text_element(value)),
        }]
    }

    // ------------------------------------------------------------------
    // Composite setters
    // ------------------------------------------------------------------

    /// Set the document title (default "no title provided") and subtitle.
    ///
    /// The title goes to the front matter and the bibliographic record. A
    /// previously set title is dropped from the text index.
    pub fn set_title(&self, document: &mut Document, title: &str, subtitle: Option<&str>) {
        let title = self.create_text_element(or_default(title, NO_TITLE));
        let subtitle = subtitle.map(|s| self.create_text_element(s));

        if let Some(previous) = Self::front_matter_of(document).and_then(|f| f.title_text.clone()) {
            document.unindex_text(&previous);
        }
        document.index_text(&title);
        self.get_front_matter(document).title_text = Some(title.clone());
        self.get_bibliographic(document).title = self.create_document_title(Some(title), subtitle);
    }

    /// Set the document type label (default "unspecified").
    pub fn set_doc_type(&self, document: &mut Document, doc_type: &str) {
        document.doc_type = Some(or_default(doc_type, UNSPECIFIED).to_string());
    }

    /// Set the source format label (default "unspecified").
    pub fn set_source_format(&self, document: &mut Document, format: &str) {
        document.source_format = Some(or_default(format, UNSPECIFIED).to_string());
    }

    /// Set the document language (default "unspecified").
    pub fn set_language(&self, document: &mut Document, language: &str) {
        let language = self.create_text_element(or_default(language, UNSPECIFIED));
        self.get_bibliographic(document).language = Some(language);
    }

    /// Set the document abstract (default "no abstract provided").
    ///
    /// The abstract becomes one unsplit "Abstract" section, stored in both
    /// the front matter and the bibliographic record. A previously set
    /// abstract is dropped from the text index.
    pub fn set_abstract(&self, document: &mut Document, text: &str) {
        let section = self.create_simple_section(
            or_default(text, NO_ABSTRACT),
            ABSTRACT_LABEL,
            ABSTRACT_LABEL,
        );

        if let Some(previous) =
            Self::front_matter_of(document).and_then(|f| f.document_abstract.clone())
        {
            for old_section in previous.abstract_sections() {
                document.unindex_section(old_section);
            }
        }
        document.index_section(&section);

        let mut document_abstract = Abstract::default();
        document_abstract.add_abstract_section(section);
        self.get_front_matter(document).document_abstract = Some(document_abstract.clone());
        self.get_bibliographic(document).document_abstract = Some(document_abstract);
    }

    /// Set where the document came from (default "unspecified").
    pub fn set_source(&self, document: &mut Document, source: &str) {
        let source = self.create_text_element(or_default(source, UNSPECIFIED));
        self.get_bibliographic(document).source = Some(source);
    }

    /// Set the document identifier.
    ///
    /// Empty parts default to "unspecified". The preferred label is
    /// "source:id" and the alternate labels are replaced by `alt_label`.
    pub fn set_document_id<'a>(
        &self,
        document: &'a mut Document,
        source: &str,
        id: &str,
        alt_label: &str,
    ) -> &'a mut Concept {
        let source = or_default(source, UNSPECIFIED);
        let id = or_default(id, UNSPECIFIED);
        let alt_label = or_default(alt_label, UNSPECIFIED);

        let identifier_source = self.create_text_element(source);
        let identifier = self.create_text_element(id);
        let pref_label = self.create_text_element(&format!("{}:{}", source, id));
        let alt_label = self.create_text_element(alt_label);

        let concept = self.get_concept(document);
        concept.identifier_source = Some(identifier_source);
        concept.identifier = Some(identifier);
        concept.pref_label = Some(pref_label);
        concept.alt_labels = Some(vec![alt_label]);
        concept
    }

    /// Set the document identifier to the hex digest of `content`.
    ///
    /// The identifier source is the digest algorithm name.
    pub fn set_document_id_as_hash<'a>(
        &self,
        document: &'a mut Document,
        content: &str,
        alt_label: &str,
    ) -> Result<&'a mut Concept> {
        let id = self.digest.digest_hex(content.as_bytes())?;
        let source = self.digest.algorithm().to_string();
        Ok(self.set_document_id(document, &source, &id, alt_label))
    }

    /// Append another identifier to the alternate labels.
    pub fn add_other_document_id(&self, document: &mut Document, id: &str) {
        let label = self.create_text_element(id);
        self.get_concept(document).add_alt_label(label);
    }

    /// Append an author given by name.
    pub fn add_person(&self, document: &mut Document, forename: &str, surname: &str) {
        let author = self.create_author(forename, surname);
        self.get_bibliographic(document).add_author(author);
    }

    /// Append an organization author, optionally with a contact person.
    pub fn add_organization(
        &self,
        document: &mut Document,
        name: &str,
        forename: Option<&str>,
        surname: Option<&str>,
    ) {
        let person = if forename.is_none() && surname.is_none() {
            None
        } else {
            Some(Person {
                forename: forename.map(|f| self.create_text_element(f)),
                surname: surname.map(|s| self.create_text_element(s)),
            })
        };
        let author = Author {
            author: person,
            organization: Some(Affiliation {
                organization: Some(self.create_text_element(name)),
            }),
        };
        self.get_bibliographic(document).add_author(author);
    }

    /// Append a keyword list; nothing happens for an empty list.
    pub fn add_keywords<S: AsRef<str>>(
        &self,
        document: &mut Document,
        rhetorical: Option<&str>,
        keywords: &[S],
    ) {
        let Some(list) = self.create_keywords(keywords, rhetorical) else {
            return;
        };
        for keyword in list.keywords() {
            document.index_text(keyword);
        }
        self.get_meta_element(document).add_keywords(list);
    }

    /// Set the publication date. Components are stored as given.
    pub fn set_publication_date(&self, document: &mut Document, day: u32, month: u32, year: i32) {
        self.get_bibliographic(document).pub_date = Some(Date::new(day, month, year));
    }

    /// Append a publication type.
    pub fn add_publication_type(&self, document: &mut Document, id: &str, publication_type: &str) {
        let publication_type = PublicationType {
            identifier: Some(self.create_text_element(id)),
            publication_type: Some(self.create_text_element(publication_type)),
        };
        self.get_bibliographic(document)
            .add_publication_type(publication_type);
    }

    /// Append a license.
    pub fn add_license(&self, document: &mut Document, value: &str) {
        let bibliographic = self.get_bibliographic(document);
        for license in self.create_license(value) {
            bibliographic.add_license(license);
        }
    }

    /// Append an ISSN.
    pub fn add_issn(&self, document: &mut Document, issn: &str) {
        let issn = self.create_text_element(issn);
        self.get_bibliographic(document).add_issn(issn);
    }

    /// Add a bibliography entry under `draft.id`.
    pub fn add_reference(&self, document: &mut Document, draft: ReferenceDraft) {
        let mut reference = Reference::default();

        for author in draft.authors {
            reference.add_author(author);
        }
        if let Some(publication_id) = &draft.publication_id {
            reference.add_publication_id(self.create_text_element(publication_id));
        }
        reference.publication_type = draft
            .publication_type
            .as_deref()
            .map(|t| self.create_text_element(t));
        reference.reference_source = draft
            .source
            .as_deref()
            .map(|s| self.create_text_element(s));
        reference.title = draft
            .title
            .as_deref()
            .and_then(|t| self.create_document_title(Some(self.create_text_element(t)), None));
        reference.date = draft.date.map(Date::from);

        self.get_bibliography(document)
            .add_reference(draft.id, reference);
    }

    /// Append a section to the front matter and index its content.
    pub fn add_front_section(&self, document: &mut Document, section: Section) {
        document.index_section(&section);
        self.get_front_matter(document).add_section(section);
    }

    /// Append a section to the body matter and index its content.
    pub fn add_body_section(&self, document: &mut Document, section: Section) {
        document.index_section(&section);
        self.get_body_matter(document).add_section(section);
    }

    /// Append a section to the back matter and index its content.
    pub fn add_back_section(&self, document: &mut Document, section: Section) {
        document.index_section(&section);
        self.get_back_matter(document).add_section(section);
    }

    /// Append a chapter to the body matter and index its content.
    pub fn add_chapter(&self, document: &mut Document, chapter: Chapter) {
        for section in chapter.sections() {
            document.index_section(section);
        }
        self.get_body_matter(document).add_chapter(chapter);
    }

    fn front_matter_of(document: &Document) -> Option<&FrontMatter> {
        document
            .document_element
            .as_ref()
            .and_then(|e| e.front_matter.as_ref())
    }

    fn segment(&self, text: &str) -> Result<Vec<String>> {
        let ends = self.sentence_detector.find_sentence_end_positions(text)?;
        self.sentence_detector
            .get_sentences(&ends, text, self.options.min_sentence_length)
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DocumentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentBuilder")
            .field("digest", &self.digest.algorithm())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
