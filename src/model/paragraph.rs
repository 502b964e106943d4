//! Paragraphs and the structure elements they hold.

use super::{
    content_id, random_id, CaptionedBox, Code, DataTable, Figure, Formula, ImageContent, Outline,
    Quotation, Sentence, Table, TextElement,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A paragraph.
///
/// Content is held either as structure elements or, in the alternate
/// representation, as bare sentences. Readers must handle both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Ordered structure elements, allocated on first insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure_elements: Option<Vec<StructureElement>>,

    /// Ordered sentences, allocated on first insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentences: Option<Vec<Sentence>>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph holding a single text element.
    pub fn with_text(text: TextElement) -> Self {
        let mut p = Self::new();
        p.add_structure_element(StructureElement::Text(text));
        p
    }

    /// Append a structure element.
    pub fn add_structure_element(&mut self, element: StructureElement) {
        self.structure_elements
            .get_or_insert_with(Vec::new)
            .push(element);
    }

    /// Append a sentence to the sentence representation.
    pub fn add_sentence(&mut self, sentence: Sentence) {
        self.sentences.get_or_insert_with(Vec::new).push(sentence);
    }

    /// Get the structure elements (empty if none were added).
    pub fn structure_elements(&self) -> &[StructureElement] {
        self.structure_elements.as_deref().unwrap_or_default()
    }

    /// Get the sentences (empty if none were added).
    pub fn sentences(&self) -> &[Sentence] {
        self.sentences.as_deref().unwrap_or_default()
    }

    /// Check if the paragraph holds nothing.
    pub fn is_empty(&self) -> bool {
        self.structure_elements().is_empty() && self.sentences().is_empty()
    }
}

/// A node holding exactly one kind of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StructureElement {
    /// Plain text
    Text(TextElement),
    /// A sentence
    Sentence(Sentence),
    /// A figure
    Figure(Figure),
    /// A table float
    Table(Table),
    /// Raw tabular data
    DataTable(DataTable),
    /// A formula
    Formula(Formula),
    /// A code block
    Code(Code),
    /// A boxed sidebar
    CaptionedBox(CaptionedBox),
    /// A nested outline
    Outline(Outline),
    /// A quotation
    Quotation(Quotation),
    /// An inline image
    Image(ImageContent),
}

impl StructureElement {
    /// Identifier under which this element is indexed.
    ///
    /// Text and sentences use their text identifier. Other variants are
    /// addressed by the content of their JSON form.
    pub fn identifier(&self) -> Uuid {
        match self {
            StructureElement::Text(text) => text.uuid(),
            StructureElement::Sentence(sentence) => sentence.text.uuid(),
            _ => match serde_json::to_string(self) {
                Ok(json) => content_id(&json),
                Err(_) => random_id(),
            },
        }
    }

    /// Get the text element for text and sentence variants.
    pub fn text_element(&self) -> Option<&TextElement> {
        match self {
            StructureElement::Text(text) => Some(text),
            StructureElement::Sentence(sentence) => Some(&sentence.text),
            _ => None,
        }
    }

    /// Get the sentence if this is a sentence element.
    pub fn as_sentence(&self) -> Option<&Sentence> {
        match self {
            StructureElement::Sentence(sentence) => Some(sentence),
            _ => None,
        }
    }

    /// Short name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            StructureElement::Text(_) => "text",
            StructureElement::Sentence(_) => "sentence",
            StructureElement::Figure(_) => "figure",
            StructureElement::Table(_) => "table",
            StructureElement::DataTable(_) => "data_table",
            StructureElement::Formula(_) => "formula",
            StructureElement::Code(_) => "code",
            StructureElement::CaptionedBox(_) => "captioned_box",
            StructureElement::Outline(_) => "outline",
            StructureElement::Quotation(_) => "quotation",
            StructureElement::Image(_) => "image",
        }
    }
}

impl From<TextElement> for StructureElement {
    fn from(text: TextElement) -> Self {
        StructureElement::Text(text)
    }
}

impl From<Sentence> for StructureElement {
    fn from(sentence: Sentence) -> Self {
        StructureElement::Sentence(sentence)
    }
}

impl From<Figure> for StructureElement {
    fn from(figure: Figure) -> Self {
        StructureElement::Figure(figure)
    }
}

impl From<Table> for StructureElement {
    fn from(table: Table) -> Self {
        StructureElement::Table(table)
    }
}
