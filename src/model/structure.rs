//! Non-text payloads of structure elements: figures, formulas, code,
//! boxes, outlines and quotations.

use super::{ImageContent, Paragraph, TextElement};
use serde::{Deserialize, Serialize};

/// A figure with optional caption and image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Rhetorical label (e.g. "Methods")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rhetorical: Option<TextElement>,

    /// Figure title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TextElement>,

    /// Figure caption
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<TextElement>,

    /// The image itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageContent>,
}

impl Figure {
    /// Create a new empty figure.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A mathematical formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formula {
    /// Equation label (e.g. "(1)")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<TextElement>,

    /// Formula source, e.g. TeX or MathML
    pub notation: TextElement,
}

impl Formula {
    /// Create a formula from its notation.
    pub fn new(notation: TextElement) -> Self {
        Self {
            label: None,
            notation,
        }
    }
}

/// A block of source code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code {
    /// Programming language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<TextElement>,

    /// The code
    pub content: TextElement,
}

impl Code {
    /// Create a code block.
    pub fn new(content: TextElement) -> Self {
        Self {
            language: None,
            content,
        }
    }
}

/// A boxed sidebar with its own paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptionedBox {
    /// Box title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TextElement>,

    /// Box caption
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<TextElement>,

    /// Content paragraphs, allocated on first insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraphs: Option<Vec<Paragraph>>,
}

impl CaptionedBox {
    /// Create a new empty box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.get_or_insert_with(Vec::new).push(paragraph);
    }

    /// Get the paragraphs.
    pub fn paragraphs(&self) -> &[Paragraph] {
        self.paragraphs.as_deref().unwrap_or_default()
    }
}

/// A nested outline, e.g. a bulleted list or a table of contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Top-level outline items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OutlineItem>>,
}

impl Outline {
    /// Create a new empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the outline.
    pub fn add_item(&mut self, item: OutlineItem) {
        self.items.get_or_insert_with(Vec::new).push(item);
    }

    /// Get the top-level items.
    pub fn items(&self) -> &[OutlineItem] {
        self.items.as_deref().unwrap_or_default()
    }

    /// Check if the outline is empty.
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// A single outline item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineItem {
    /// Item text
    pub title: TextElement,

    /// Nesting level (0 = top level)
    pub level: u8,

    /// Child items, allocated on first insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<OutlineItem>>,
}

impl OutlineItem {
    /// Create a new outline item.
    pub fn new(title: TextElement, level: u8) -> Self {
        Self {
            title,
            level,
            children: None,
        }
    }

    /// Add a child item.
    pub fn add_child(&mut self, child: OutlineItem) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }

    /// Get the child items (empty if none were added).
    pub fn children(&self) -> &[OutlineItem] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// A quotation block citing another document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    /// Quotation label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<TextElement>,

    /// Key of the cited entry in the bibliography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
}

impl Quotation {
    /// Create a quotation pointing at a bibliography key.
    pub fn citing(reference_id: impl Into<String>) -> Self {
        Self {
            label: None,
            reference_id: Some(reference_id.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline() {
        let mut outline = Outline::new();
        assert!(outline.items.is_none());

        let mut first = OutlineItem::new(TextElement::new("Background"), 0);
        assert!(first.children.is_none());
        first.add_child(OutlineItem::new(TextElement::new("Prior work"), 1));
        first.add_child(OutlineItem::new(TextElement::new("Open problems"), 1));
        outline.add_item(first);

        assert!(!outline.is_empty());
        let children = outline.items()[0].children();
        assert_eq!(children.len(), 2);
        assert!(children[0].children.is_none());
        let json = serde_json::to_string(&children[0]).unwrap();
        assert!(!json.contains("children"));
    }

    #[test]
    fn test_captioned_box_paragraphs() {
        let mut b = CaptionedBox::new();
        assert!(b.paragraphs().is_empty());
        b.add_paragraph(Paragraph::new());
        assert_eq!(b.paragraphs().len(), 1);
    }

    #[test]
    fn test_quotation_citing() {
        let q = Quotation::citing("ref-12");
        assert_eq!(q.reference_id.as_deref(), Some("ref-12"));
        assert!(q.label.is_none());
    }
}
