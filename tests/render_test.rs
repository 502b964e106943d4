//! Integration tests for text rendering.

use scidoc::model::{Figure, Paragraph, Section, StructureElement};
use scidoc::render::{self, JsonFormat};
use scidoc::{Document, DocumentBuilder, ReferenceDraft};

fn twelve_sentences() -> String {
    (1..=12)
        .map(|i| format!("Finding number {} is reported here.", i))
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_study() -> Document {
    let builder = DocumentBuilder::new();
    let mut doc = Document::new();

    builder.set_title(&mut doc, "Study X", None);
    builder.add_person(&mut doc, "Ada", "Lovelace");
    builder.set_abstract(&mut doc, "Short summary.");
    let section = builder
        .create_main_section(&twelve_sentences(), Some(1))
        .unwrap();
    builder.add_body_section(&mut doc, section);
    doc
}

#[test]
fn test_end_to_end_study() {
    let builder = DocumentBuilder::new();
    let mut doc = build_study();

    assert_eq!(
        render::get_document_abstract(&doc).unwrap(),
        "Short summary."
    );

    let body = builder.get_body_matter(&mut doc);
    let paragraph = &body.sections()[0].paragraphs()[0];
    let sentences: Vec<_> = paragraph
        .structure_elements()
        .iter()
        .filter_map(|se| se.as_sentence())
        .map(|s| s.as_str().to_string())
        .collect();
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0], "Finding number 1 is reported here.");
    assert_eq!(
        sentences[1],
        ">> Note: skipped 11 sentences due to size limit of 1."
    );

    let bib = builder.get_bibliographic(&mut doc);
    let title = bib.title.as_ref().unwrap().title_text.as_ref().unwrap();
    assert_eq!(title.as_str(), "Study X");
    assert_eq!(bib.authors()[0].author.as_ref().unwrap().full_name(), "Ada Lovelace");
}

#[test]
fn test_render_text_contents_of_study() {
    let doc = build_study();
    let output = render::render_text_contents(&doc);

    assert!(!output.contains(['.', '!', '?', ';']));
    assert!(output.contains("Study X"));
    assert!(output.contains("Short summary"));
    assert!(output.contains("Finding number 1 is reported here"));
    assert!(output.contains("Note: skipped 11 sentences due to size limit of 1"));
    // truncated sentences were never attached
    assert!(!output.contains("Finding number 2 "));
}

#[test]
fn test_render_dedups_repeated_content() {
    let builder = DocumentBuilder::new();
    let mut doc = Document::new();

    for _ in 0..3 {
        let section = builder.create_simple_section("Repeated paragraph.", "Note", "Note");
        builder.add_back_section(&mut doc, section);
    }
    let mut section = Section::new();
    let mut paragraph = Paragraph::new();
    paragraph.add_structure_element(builder.create_structure_element("Repeated paragraph!"));
    section.add_paragraph(paragraph);
    builder.add_front_section(&mut doc, section);

    let output = render::render_text_contents(&doc);
    assert_eq!(output.matches("Repeated paragraph").count(), 1);
}

#[test]
fn test_render_non_text_elements() {
    let builder = DocumentBuilder::new();
    let mut doc = Document::new();

    let figure: Figure = builder.create_figure(None, Some("Tumor volume."), None, None);
    let mut paragraph = Paragraph::new();
    paragraph.add_structure_element(StructureElement::Figure(figure));
    let mut section = builder.create_section("Results", "Results");
    section.add_paragraph(paragraph);
    builder.add_body_section(&mut doc, section);

    let output = render::render_text_contents(&doc);
    assert!(output.contains("Tumor volume"));
    assert!(!output.contains('.'));
}

#[test]
fn test_abstract_requires_set_abstract() {
    let builder = DocumentBuilder::new();
    let mut doc = Document::new();
    builder.set_title(&mut doc, "Untitled draft", None);
    assert!(render::get_document_abstract(&doc).is_err());

    builder.set_abstract(&mut doc, "");
    assert_eq!(
        render::get_document_abstract(&doc).unwrap(),
        "no abstract provided"
    );
}

#[test]
fn test_json_round_trip_and_reindex() {
    let builder = DocumentBuilder::new();
    let mut doc = build_study();
    builder.add_reference(&mut doc, ReferenceDraft::new("R1").with_title("Earlier work"));
    builder.add_keywords(&mut doc, None, &["glioma"]);

    let json = render::to_json(&doc, JsonFormat::Compact).unwrap();
    let mut restored: Document = serde_json::from_str(&json).unwrap();
    assert!(restored.text_index().is_empty());
    assert_eq!(render::render_text_contents(&restored), "");

    // a tree walk visits keywords before the body, so compare word sets
    restored.rebuild_text_index();
    let words = |d: &Document| {
        let mut words: Vec<String> = render::render_text_contents(d)
            .split(' ')
            .map(str::to_string)
            .collect();
        words.sort();
        words
    };
    assert_eq!(words(&restored), words(&doc));
    assert!(render::render_text_contents(&restored).contains("glioma"));
    assert_eq!(
        render::get_document_abstract(&restored).unwrap(),
        "Short summary."
    );
}

#[test]
fn test_pretty_string() {
    let doc = build_study();
    let pretty = render::to_pretty_string(&doc).unwrap();
    assert!(pretty.contains("Lovelace"));
    assert!(pretty.contains('\n'));
}

#[test]
fn test_replaced_title_and_abstract_not_rendered() {
    let builder = DocumentBuilder::new();
    let mut doc = Document::new();

    builder.set_title(&mut doc, "Old title", None);
    builder.set_title(&mut doc, "New title", None);
    builder.set_abstract(&mut doc, "Old abstract.");
    builder.set_abstract(&mut doc, "New abstract.");

    assert_eq!(render::render_text_contents(&doc), "New title New abstract");
    assert_eq!(
        render::get_document_abstract(&doc).unwrap(),
        "New abstract."
    );
}

#[test]
fn test_setting_same_title_twice_keeps_it_rendered() {
    let builder = DocumentBuilder::new();
    let mut doc = Document::new();

    builder.set_title(&mut doc, "Study X", None);
    builder.set_title(&mut doc, "Study X", None);
    builder.set_abstract(&mut doc, "");
    builder.set_abstract(&mut doc, "");

    assert_eq!(
        render::render_text_contents(&doc),
        "Study X no abstract provided"
    );
}
