//! Containers: the three document zones and the sections inside them.

use super::{Abstract, Bibliography, Paragraph, TextElement};
use serde::{Deserialize, Serialize};

/// A section with a rhetorical role, a title and ordered paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Rhetorical label (e.g. "Introduction")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rhetorical: Option<TextElement>,

    /// Section title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TextElement>,

    /// Ordered paragraphs, allocated on first insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraphs: Option<Vec<Paragraph>>,

    /// Ordered subsections, allocated on first insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsections: Option<Vec<Section>>,
}

impl Section {
    /// Create a new empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.get_or_insert_with(Vec::new).push(paragraph);
    }

    /// Append a subsection.
    pub fn add_subsection(&mut self, section: Section) {
        self.subsections.get_or_insert_with(Vec::new).push(section);
    }

    /// Get the paragraphs (empty if none were added).
    pub fn paragraphs(&self) -> &[Paragraph] {
        self.paragraphs.as_deref().unwrap_or_default()
    }

    /// Get the subsections (empty if none were added).
    pub fn subsections(&self) -> &[Section] {
        self.subsections.as_deref().unwrap_or_default()
    }
}

/// A chapter: a titled run of sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TextElement>,

    /// Ordered sections, allocated on first insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
}

impl Chapter {
    /// Create a new empty chapter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section.
    pub fn add_section(&mut self, section: Section) {
        self.sections.get_or_insert_with(Vec::new).push(section);
    }

    /// Get the sections.
    pub fn sections(&self) -> &[Section] {
        self.sections.as_deref().unwrap_or_default()
    }
}

/// A part: the level above chapters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Part title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TextElement>,

    /// Chapters, allocated on first insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapters: Option<Vec<Chapter>>,
}

impl Part {
    /// Create a new empty part.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chapter.
    pub fn add_chapter(&mut self, chapter: Chapter) {
        self.chapters.get_or_insert_with(Vec::new).push(chapter);
    }

    /// Get the chapters.
    pub fn chapters(&self) -> &[Chapter] {
        self.chapters.as_deref().unwrap_or_default()
    }
}

/// Preliminary material: title, abstract and front sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    /// Title text as it appears on the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_text: Option<TextElement>,

    /// Document abstract
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_abstract: Option<Abstract>,

    /// Front sections (e.g. acknowledgements placed before the body)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
}

impl FrontMatter {
    /// Append a section.
    pub fn add_section(&mut self, section: Section) {
        self.sections.get_or_insert_with(Vec::new).push(section);
    }

    /// Get the sections.
    pub fn sections(&self) -> &[Section] {
        self.sections.as_deref().unwrap_or_default()
    }
}

/// The main content of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyMatter {
    /// Parts, allocated on first insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Part>>,

    /// Chapters, allocated on first insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapters: Option<Vec<Chapter>>,

    /// Sections, allocated on first insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,

    /// Abstract stored in the body by older producers.
    ///
    /// Deprecated: the abstract lives in [`FrontMatter`] and the bibliographic
    /// metadata. Kept so older trees still load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_abstract: Option<Abstract>,
}

impl BodyMatter {
    /// Append a part.
    pub fn add_part(&mut self, part: Part) {
        self.parts.get_or_insert_with(Vec::new).push(part);
    }

    /// Append a chapter.
    pub fn add_chapter(&mut self, chapter: Chapter) {
        self.chapters.get_or_insert_with(Vec::new).push(chapter);
    }

    /// Append a section.
    pub fn add_section(&mut self, section: Section) {
        self.sections.get_or_insert_with(Vec::new).push(section);
    }

    /// Get the parts.
    pub fn parts(&self) -> &[Part] {
        self.parts.as_deref().unwrap_or_default()
    }

    /// Get the chapters.
    pub fn chapters(&self) -> &[Chapter] {
        self.chapters.as_deref().unwrap_or_default()
    }

    /// Get the sections.
    pub fn sections(&self) -> &[Section] {
        self.sections.as_deref().unwrap_or_default()
    }
}

/// Trailing material: bibliography and back sections.
///
/// Back sections keep insertion order like everywhere else in the tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackMatter {
    /// Bibliography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bibliography: Option<Bibliography>,

    /// Back sections (appendices, acknowledgements), allocated on first insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
}

impl BackMatter {
    /// Append a section.
    pub fn add_section(&mut self, section: Section) {
        self.sections.get_or_insert_with(Vec::new).push(section);
    }

    /// Get the sections.
    pub fn sections(&self) -> &[Section] {
        self.sections.as_deref().unwrap_or_default()
    }
}
