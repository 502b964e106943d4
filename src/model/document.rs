//! Document-level types.

use super::{
    BackMatter, BodyMatter, FrontMatter, MetaElement, Paragraph, Section, StructureElement,
    TextElement, TextIndex,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A structured document: the root of the tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Processing history
    pub provenance: Provenance,

    /// Document content and metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_element: Option<DocumentElement>,

    /// Document type label (e.g. "article")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,

    /// Format the document was ingested from (e.g. "PMC-XML")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_format: Option<String>,

    /// Identifier index over attached text; rebuilt on demand
    #[serde(skip)]
    text_index: TextIndex,
}

impl Document {
    /// Create a new empty document with fresh provenance.
    pub fn new() -> Self {
        Self {
            provenance: Provenance::new(),
            document_element: None,
            doc_type: None,
            source_format: None,
            text_index: TextIndex::new(),
        }
    }

    /// Get the document element, creating it if absent.
    ///
    /// Mutates the document on first call.
    pub fn document_element_mut(&mut self) -> &mut DocumentElement {
        self.document_element
            .get_or_insert_with(DocumentElement::default)
    }

    /// Get the text index.
    ///
    /// The index only holds what has been registered so far and is not a
    /// complete enumeration of the tree.
    pub fn text_index(&self) -> &TextIndex {
        &self.text_index
    }

    /// Register a structure element in the text index.
    pub fn index_element(&mut self, element: &StructureElement) {
        self.text_index.insert(element.clone());
    }

    /// Register a bare text element in the text index.
    pub fn index_text(&mut self, text: &TextElement) {
        if !text.is_empty() {
            self.text_index.insert(StructureElement::Text(text.clone()));
        }
    }

    /// Register every element of a paragraph.
    pub fn index_paragraph(&mut self, paragraph: &Paragraph) {
        for element in paragraph.structure_elements() {
            self.index_element(element);
        }
        for sentence in paragraph.sentences() {
            self.text_index
                .insert(StructureElement::Sentence(sentence.clone()));
        }
    }

    /// Register every paragraph of a section and its subsections.
    pub fn index_section(&mut self, section: &Section) {
        for paragraph in section.paragraphs() {
            self.index_paragraph(paragraph);
        }
        for subsection in section.subsections() {
            self.index_section(subsection);
        }
    }

    /// Drop a text element from the text index.
    pub fn unindex_text(&mut self, text: &TextElement) {
        self.text_index.remove(&text.uuid());
    }

    /// Drop every element of a section and its subsections from the text
    /// index.
    pub fn unindex_section(&mut self, section: &Section) {
        for paragraph in section.paragraphs() {
            for element in paragraph.structure_elements() {
                self.text_index.remove(&element.identifier());
            }
            for sentence in paragraph.sentences() {
                self.text_index.remove(&sentence.text.uuid());
            }
        }
        for subsection in section.subsections() {
            self.unindex_section(subsection);
        }
    }

    /// Discard the text index and rebuild it from a full tree walk.
    pub fn rebuild_text_index(&mut self) {
        self.text_index.clear();
        let Some(element) = self.document_element.take() else {
            return;
        };
        self.index_document_element(&element);
        self.document_element = Some(element);
    }

    fn index_document_element(&mut self, element: &DocumentElement) {
        if let Some(front) = &element.front_matter {
            if let Some(title) = &front.title_text {
                self.index_text(title);
            }
            if let Some(abs) = &front.document_abstract {
                for section in abs.abstract_sections() {
                    self.index_section(section);
                }
            }
            for section in front.sections() {
                self.index_section(section);
            }
        }
        if let Some(meta) = &element.meta_element {
            for keywords in meta.keywords() {
                for keyword in keywords.keywords() {
                    self.index_text(keyword);
                }
            }
        }
        if let Some(body) = &element.body_matter {
            for part in body.parts() {
                for chapter in part.chapters() {
                    for section in chapter.sections() {
                        self.index_section(section);
                    }
                }
            }
            for chapter in body.chapters() {
                for section in chapter.sections() {
                    self.index_section(section);
                }
            }
            for section in body.sections() {
                self.index_section(section);
            }
        }
        if let Some(back) = &element.back_matter {
            for section in back.sections() {
                self.index_section(section);
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// The four zones of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentElement {
    /// Bibliographic, identity and keyword metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_element: Option<MetaElement>,

    /// Title, abstract and front sections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_matter: Option<FrontMatter>,

    /// Main content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_matter: Option<BodyMatter>,

    /// Bibliography and back sections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_matter: Option<BackMatter>,
}

/// Processing history of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    /// When the document was created
    pub created: DateTime<Utc>,

    /// Processing steps in order, allocated on first insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<ProvenanceEntry>>,
}

impl Provenance {
    /// Create provenance stamped with the current time.
    pub fn new() -> Self {
        Self {
            created: Utc::now(),
            history: None,
        }
    }

    /// Record a processing step.
    pub fn add_entry(&mut self, activity: impl Into<String>) {
        self.history
            .get_or_insert_with(Vec::new)
            .push(ProvenanceEntry::new(activity));
    }

    /// Get the recorded steps.
    pub fn history(&self) -> &[ProvenanceEntry] {
        self.history.as_deref().unwrap_or_default()
    }
}

impl Default for Provenance {
    fn default() -> Self {
        Self::new()
    }
}

/// One processing step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceEntry {
    /// When the step ran
    pub timestamp: DateTime<Utc>,

    /// What was done (e.g. "parsed PMC-XML")
    pub activity: String,
}

impl ProvenanceEntry {
    /// Create an entry stamped with the current time.
    pub fn new(activity: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            activity: activity.into(),
        }
    }
}
