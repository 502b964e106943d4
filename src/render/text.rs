//! Plain text views of a document.

use crate::error::{Error, Result};
use crate::model::{Document, StructureElement};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use super::RenderOptions;

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?;]").expect("punctuation pattern is valid"));

/// Representative text of a structure element.
///
/// Text and sentences yield their text. Every other variant yields the
/// compact JSON of its payload.
pub fn get_text(element: &StructureElement) -> String {
    let json = match element {
        StructureElement::Text(text) => return text.as_str().to_string(),
        StructureElement::Sentence(sentence) => return sentence.as_str().to_string(),
        StructureElement::CaptionedBox(b) => serde_json::to_string(b),
        StructureElement::Code(code) => serde_json::to_string(code),
        StructureElement::DataTable(table) => serde_json::to_string(table),
        StructureElement::Figure(figure) => serde_json::to_string(figure),
        StructureElement::Formula(formula) => serde_json::to_string(formula),
        StructureElement::Image(image) => serde_json::to_string(image),
        StructureElement::Outline(outline) => serde_json::to_string(outline),
        StructureElement::Quotation(quotation) => serde_json::to_string(quotation),
        StructureElement::Table(table) => serde_json::to_string(table),
    };

    json.unwrap_or_else(|e| {
        log::debug!("Cannot represent {} element: {}", element.kind(), e);
        String::new()
    })
}

/// Flatten all indexed text into one space-separated bag of fragments.
///
/// Walks the document's text index, not the tree. Sentence punctuation is
/// removed and each distinct fragment appears once.
pub fn render_text_contents(doc: &Document) -> String {
    render_text_contents_with(doc, &RenderOptions::default())
}

/// Flatten all indexed text with custom options.
pub fn render_text_contents_with(doc: &Document, options: &RenderOptions) -> String {
    let mut seen = HashSet::new();
    let mut contents = Vec::new();

    for element in doc.text_index().values() {
        let mut text = get_text(element);
        if options.strip_punctuation {
            text = PUNCTUATION.replace_all(&text, "").into_owned();
        }
        if text.is_empty() {
            continue;
        }
        if seen.insert(text.clone()) {
            contents.push(text);
        }
    }

    contents.join(&options.separator)
}

/// Get the document abstract as plain text.
///
/// Paragraph texts are concatenated without separators and punctuation is
/// kept. Fails if the document has no bibliographic record or no abstract.
pub fn get_document_abstract(doc: &Document) -> Result<String> {
    let bibliographic = doc
        .document_element
        .as_ref()
        .and_then(|e| e.meta_element.as_ref())
        .and_then(|m| m.bibliographic.as_ref())
        .ok_or(Error::MissingNode("bibliographic"))?;
    let document_abstract = bibliographic
        .document_abstract
        .as_ref()
        .ok_or(Error::MissingNode("abstract"))?;

    let mut output = String::new();
    for section in document_abstract.abstract_sections() {
        for paragraph in section.paragraphs() {
            if paragraph.sentences.is_some() {
                for sentence in paragraph.sentences() {
                    output.push_str(sentence.as_str());
                }
            } else {
                for element in paragraph.structure_elements() {
                    output.push_str(&get_text(element));
                }
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Abstract, CaptionedBox, Code, DataTable, Figure, Formula, ImageContent, Outline,
        OutlineItem, Paragraph, Quotation, Section, Sentence, Table, TableCell, TableRow,
        TextElement,
    };

    #[test]
    fn test_get_text_variants() {
        let text = StructureElement::from(TextElement::new("Plain."));
        assert_eq!(get_text(&text), "Plain.");

        let sentence = StructureElement::from(Sentence::new(TextElement::new("A sentence.")));
        assert_eq!(get_text(&sentence), "A sentence.");

        let mut figure = Figure::new();
        figure.caption = Some(TextElement::new("Kaplan-Meier plot"));
        let rendered = get_text(&StructureElement::from(figure));
        assert!(rendered.starts_with('{'));
        assert!(rendered.contains("Kaplan-Meier plot"));
    }

    #[test]
    fn test_get_text_payload_json() {
        let mut row = TableRow::new();
        row.add_cell(TableCell::new(TextElement::new("BRCA1")));
        let mut data = DataTable::new();
        data.add_row(row);

        let mut outline = Outline::new();
        outline.add_item(OutlineItem::new(TextElement::new("Background"), 0));

        let mut sidebar = CaptionedBox::new();
        sidebar.title = Some(TextElement::new("Box 1"));
        sidebar.add_paragraph(Paragraph::with_text(TextElement::new("Inside the box")));

        let mut table = Table::new();
        table.caption = Some(TextElement::new("Cohort"));

        let cases: Vec<(StructureElement, String)> = vec![
            (
                StructureElement::Code(Code::new(TextElement::new("fn main() {}"))),
                serde_json::to_string(&Code::new(TextElement::new("fn main() {}"))).unwrap(),
            ),
            (
                StructureElement::DataTable(data.clone()),
                serde_json::to_string(&data).unwrap(),
            ),
            (
                StructureElement::Formula(Formula::new(TextElement::new("E = mc^2"))),
                serde_json::to_string(&Formula::new(TextElement::new("E = mc^2"))).unwrap(),
            ),
            (
                StructureElement::Image(ImageContent::new(vec![1, 2], "image/png")),
                serde_json::to_string(&ImageContent::new(vec![1, 2], "image/png")).unwrap(),
            ),
            (
                StructureElement::Outline(outline.clone()),
                serde_json::to_string(&outline).unwrap(),
            ),
            (
                StructureElement::Quotation(Quotation::citing("ref-3")),
                serde_json::to_string(&Quotation::citing("ref-3")).unwrap(),
            ),
            (
                StructureElement::Table(table.clone()),
                serde_json::to_string(&table).unwrap(),
            ),
            (
                StructureElement::CaptionedBox(sidebar.clone()),
                serde_json::to_string(&sidebar).unwrap(),
            ),
        ];

        for (element, expected) in cases {
            let rendered = get_text(&element);
            assert_eq!(rendered, expected, "{}", element.kind());
            assert!(!rendered.contains("\"type\""), "{}", element.kind());
        }
    }

    #[test]
    fn test_render_strips_and_dedups() {
        let mut doc = Document::new();
        doc.index_text(&TextElement::new("Cells grew. Fast!"));
        doc.index_element(&Sentence::new(TextElement::new("Cells grew; Fast?")).into());
        doc.index_text(&TextElement::new("Other text"));

        let output = render_text_contents(&doc);
        assert_eq!(output, "Cells grew Fast Other text");
    }

    #[test]
    fn test_render_skips_fragments_that_become_empty() {
        let mut doc = Document::new();
        doc.index_text(&TextElement::new("..."));
        doc.index_text(&TextElement::new("kept"));
        assert_eq!(render_text_contents(&doc), "kept");
    }

    #[test]
    fn test_render_with_options() {
        let mut doc = Document::new();
        doc.index_text(&TextElement::new("One."));
        doc.index_text(&TextElement::new("Two."));

        let options = RenderOptions::new()
            .with_separator("|")
            .with_strip_punctuation(false);
        assert_eq!(render_text_contents_with(&doc, &options), "One.|Two.");
    }

    #[test]
    fn test_render_empty_document() {
        assert_eq!(render_text_contents(&Document::new()), "");
    }

    #[test]
    fn test_abstract_missing_nodes() {
        let doc = Document::new();
        assert!(matches!(
            get_document_abstract(&doc),
            Err(Error::MissingNode("bibliographic"))
        ));

        let mut doc = Document::new();
        doc.document_element_mut().meta_element = Some(Default::default());
        doc.document_element_mut()
            .meta_element
            .as_mut()
            .unwrap()
            .bibliographic = Some(Default::default());
        assert!(matches!(
            get_document_abstract(&doc),
            Err(Error::MissingNode("abstract"))
        ));
    }

    #[test]
    fn test_abstract_prefers_sentences() {
        let mut with_sentences = Paragraph::new();
        with_sentences.add_sentence(Sentence::new(TextElement::new("First. ")));
        with_sentences.add_sentence(Sentence::new(TextElement::new("Second.")));
        // ignored: the sentence representation wins
        with_sentences.add_structure_element(TextElement::new("Hidden").into());

        let mut section = Section::new();
        section.add_paragraph(with_sentences);
        section.add_paragraph(Paragraph::with_text(TextElement::new(" Third.")));

        let mut document_abstract = Abstract::default();
        document_abstract.add_abstract_section(section);

        let mut doc = Document::new();
        let meta = doc
            .document_element_mut()
            .meta_element
            .get_or_insert_with(Default::default);
        meta.bibliographic
            .get_or_insert_with(Default::default)
            .document_abstract = Some(document_abstract);

        assert_eq!(get_document_abstract(&doc).unwrap(), "First. Second. Third.");
    }
}
