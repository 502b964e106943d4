//! Bibliographic, identity and keyword metadata.

use super::{Section, TextElement};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Metadata zone: bibliographic record, identity concept and keywords.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaElement {
    /// Bibliographic record of the document itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bibliographic: Option<Bibliographic>,

    /// Document identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<Concept>,

    /// Keyword lists, allocated on first insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<Keywords>>,
}

impl MetaElement {
    /// Append a keyword list.
    pub fn add_keywords(&mut self, keywords: Keywords) {
        self.keywords.get_or_insert_with(Vec::new).push(keywords);
    }

    /// Get the keyword lists.
    pub fn keywords(&self) -> &[Keywords] {
        self.keywords.as_deref().unwrap_or_default()
    }
}

/// Bibliographic information about the document itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bibliographic {
    /// Document abstract
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_abstract: Option<Abstract>,

    /// Authors in byline order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<Author>>,

    /// Publication date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<Date>,

    /// Licenses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licenses: Option<Vec<License>>,

    /// Title and subtitle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,

    /// Document language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<TextElement>,

    /// Where the document came from (journal, repository, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<TextElement>,

    /// ISSNs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issns: Option<Vec<TextElement>>,

    /// Publication types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_types: Option<Vec<PublicationType>>,
}

impl Bibliographic {
    /// Append an author.
    pub fn add_author(&mut self, author: Author) {
        self.authors.get_or_insert_with(Vec::new).push(author);
    }

    /// Append a license.
    pub fn add_license(&mut self, license: License) {
        self.licenses.get_or_insert_with(Vec::new).push(license);
    }

    /// Append an ISSN.
    pub fn add_issn(&mut self, issn: TextElement) {
        self.issns.get_or_insert_with(Vec::new).push(issn);
    }

    /// Append a publication type.
    pub fn add_publication_type(&mut self, publication_type: PublicationType) {
        self.publication_types
            .get_or_insert_with(Vec::new)
            .push(publication_type);
    }

    /// Get the authors.
    pub fn authors(&self) -> &[Author] {
        self.authors.as_deref().unwrap_or_default()
    }

    /// Get the licenses.
    pub fn licenses(&self) -> &[License] {
        self.licenses.as_deref().unwrap_or_default()
    }

    /// Get the ISSNs.
    pub fn issns(&self) -> &[TextElement] {
        self.issns.as_deref().unwrap_or_default()
    }

    /// Get the publication types.
    pub fn publication_types(&self) -> &[PublicationType] {
        self.publication_types.as_deref().unwrap_or_default()
    }
}

/// A document abstract, made of ordered sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Abstract {
    /// Abstract sections (structured abstracts have several)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abstract_sections: Option<Vec<Section>>,
}

impl Abstract {
    /// Append a section.
    pub fn add_abstract_section(&mut self, section: Section) {
        self.abstract_sections
            .get_or_insert_with(Vec::new)
            .push(section);
    }

    /// Get the abstract sections.
    pub fn abstract_sections(&self) -> &[Section] {
        self.abstract_sections.as_deref().unwrap_or_default()
    }
}

/// An author: a person, an organization, or both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// The person
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Person>,

    /// The organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Affiliation>,
}

impl Author {
    /// Create an author from a person.
    pub fn person(person: Person) -> Self {
        Self {
            author: Some(person),
            organization: None,
        }
    }
}

/// A person's name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Given name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forename: Option<TextElement>,

    /// Family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<TextElement>,
}

impl Person {
    /// Full name as "forename surname", skipping empty parts.
    pub fn full_name(&self) -> String {
        [&self.forename, &self.surname]
            .into_iter()
            .flatten()
            .map(|t| t.as_str())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// An organization an author belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Affiliation {
    /// Organization name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<TextElement>,
}

/// The bibliography: references keyed by id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bibliography {
    /// References, allocated on first insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Reference>>,
}

impl Bibliography {
    /// Add a reference under `id`, replacing any earlier entry with that id.
    pub fn add_reference(&mut self, id: impl Into<String>, mut reference: Reference) {
        reference.id = id.into();
        let references = self.references.get_or_insert_with(Vec::new);
        match references.iter_mut().find(|r| r.id == reference.id) {
            Some(existing) => *existing = reference,
            None => references.push(reference),
        }
    }

    /// Look up a reference by id.
    pub fn get(&self, id: &str) -> Option<&Reference> {
        self.references().iter().find(|r| r.id == id)
    }

    /// Get the references.
    pub fn references(&self) -> &[Reference] {
        self.references.as_deref().unwrap_or_default()
    }

    /// Number of references.
    pub fn len(&self) -> usize {
        self.references().len()
    }

    /// Check if the bibliography is empty.
    pub fn is_empty(&self) -> bool {
        self.references().is_empty()
    }
}

/// A bibliography entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// Key within the bibliography
    pub id: String,

    /// Authors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<Author>>,

    /// Publication identifiers (DOI, PMID, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_ids: Option<Vec<TextElement>>,

    /// Publication type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_type: Option<TextElement>,

    /// Journal or other source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_source: Option<TextElement>,

    /// Title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,

    /// Publication date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
}

impl Reference {
    /// Append an author.
    pub fn add_author(&mut self, author: Author) {
        self.authors.get_or_insert_with(Vec::new).push(author);
    }

    /// Append a publication identifier.
    pub fn add_publication_id(&mut self, id: TextElement) {
        self.publication_ids.get_or_insert_with(Vec::new).push(id);
    }

    /// Get the authors.
    pub fn authors(&self) -> &[Author] {
        self.authors.as_deref().unwrap_or_default()
    }

    /// Get the publication identifiers.
    pub fn publication_ids(&self) -> &[TextElement] {
        self.publication_ids.as_deref().unwrap_or_default()
    }
}

/// A calendar date. Components are stored as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Date {
    /// Day of month
    pub day: u32,
    /// Month (1-12)
    pub month: u32,
    /// Year
    pub year: i32,
}

impl Date {
    /// Create a date from its components.
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Replace all three components.
    pub fn set_date(&mut self, day: u32, month: u32, year: i32) {
        self.day = day;
        self.month = month;
        self.year = year;
    }

    /// Convert to a chrono date, if the components form a valid date.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.day(), date.month(), date.year())
    }
}

/// A title with optional subtitle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Title {
    /// Main title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_text: Option<TextElement>,

    /// Subtitle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_title_text: Option<TextElement>,
}

/// A license the document is published under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// License name or URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_name: Option<TextElement>,
}

/// A labelled keyword list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Keywords {
    /// Rhetorical label (e.g. "MeSH", "keywords")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rhetorical: Option<TextElement>,

    /// Keywords in source order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<TextElement>>,
}

impl Keywords {
    /// Append a keyword.
    pub fn add_keyword(&mut self, keyword: TextElement) {
        self.keywords.get_or_insert_with(Vec::new).push(keyword);
    }

    /// Get the keywords.
    pub fn keywords(&self) -> &[TextElement] {
        self.keywords.as_deref().unwrap_or_default()
    }
}

/// A publication type with its identifier (e.g. a MeSH publication type).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicationType {
    /// Type identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<TextElement>,

    /// Type name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_type: Option<TextElement>,
}

/// Identity of the document within a source namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    /// Namespace of the identifier (e.g. "PMC", "sha512Hex")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_source: Option<TextElement>,

    /// Identifier within the namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<TextElement>,

    /// Preferred label, "source:id"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pref_label: Option<TextElement>,

    /// Alternate labels and other identifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_labels: Option<Vec<TextElement>>,
}

impl Concept {
    /// Append an alternate label.
    pub fn add_alt_label(&mut self, label: TextElement) {
        self.alt_labels.get_or_insert_with(Vec::new).push(label);
    }

    /// Get the alternate labels.
    pub fn alt_labels(&self) -> &[TextElement] {
        self.alt_labels.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bibliographic_lazy_lists() {
        let mut bib = Bibliographic::default();
        assert!(bib.authors.is_none());
        assert!(bib.issns.is_none());

        bib.add_author(Author::default());
        bib.add_issn(TextElement::new("1234-5678"));
        assert_eq!(bib.authors().len(), 1);
        assert_eq!(bib.issns()[0].as_str(), "1234-5678");
        assert!(bib.licenses.is_none());
    }

    #[test]
    fn test_bibliography_replaces_same_id() {
        let mut bib = Bibliography::default();
        let mut first = Reference::default();
        first.add_publication_id(TextElement::new("doi:1"));
        bib.add_reference("r1", first);
        bib.add_reference("r2", Reference::default());

        let mut replacement = Reference::default();
        replacement.add_publication_id(TextElement::new("doi:2"));
        bib.add_reference("r1", replacement);

        assert_eq!(bib.len(), 2);
        assert_eq!(bib.references()[0].id, "r1");
        assert_eq!(
            bib.get("r1").unwrap().publication_ids()[0].as_str(),
            "doi:2"
        );
        assert!(bib.get("missing").is_none());
    }

    #[test]
    fn test_date_from_naive() {
        let date = Date::from(NaiveDate::from_ymd_opt(2018, 3, 14).unwrap());
        assert_eq!(date, Date::new(14, 3, 2018));
        assert_eq!(date.to_naive_date(), NaiveDate::from_ymd_opt(2018, 3, 14));
    }

    #[test]
    fn test_invalid_date_is_stored() {
        let mut date = Date::default();
        date.set_date(31, 2, 2020);
        assert_eq!(date.day, 31);
        assert!(date.to_naive_date().is_none());
    }

    #[test]
    fn test_person_full_name() {
        let person = Person {
            forename: Some(TextElement::new("Ada")),
            surname: Some(TextElement::new("Lovelace")),
        };
        assert_eq!(person.full_name(), "Ada Lovelace");

        let surname_only = Person {
            forename: Some(TextElement::empty()),
            surname: Some(TextElement::new("Curie")),
        };
        assert_eq!(surname_only.full_name(), "Curie");
    }
}
