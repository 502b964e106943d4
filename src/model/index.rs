//! Identifier index over the text-bearing nodes of a document.

use super::StructureElement;
use std::collections::HashMap;
use uuid::Uuid;

/// Cache mapping identifiers to structure elements.
///
/// The tree stays authoritative. Entries are snapshots taken when content
/// is attached, and iteration follows first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct TextIndex {
    order: Vec<Uuid>,
    entries: HashMap<Uuid, StructureElement>,
}

impl TextIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element under its identifier.
    ///
    /// Elements with identical content share an identifier, so the later
    /// snapshot replaces the earlier one without changing its position.
    pub fn insert(&mut self, element: StructureElement) {
        let id = element.identifier();
        if self.entries.insert(id, element).is_none() {
            self.order.push(id);
        }
    }

    /// Drop an element, returning its last snapshot.
    pub fn remove(&mut self, id: &Uuid) -> Option<StructureElement> {
        let element = self.entries.remove(id)?;
        self.order.retain(|entry| entry != id);
        Some(element)
    }

    /// Look up an element.
    pub fn get(&self, id: &Uuid) -> Option<&StructureElement> {
        self.entries.get(id)
    }

    /// Check if an identifier is indexed.
    pub fn contains(&self, id: &Uuid) -> bool {
        self.entries.contains_key(id)
    }

    /// Iterate over the indexed elements.
    pub fn values(&self) -> impl Iterator<Item = &StructureElement> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Number of indexed elements.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.order.clear();
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextElement;

    #[test]
    fn test_insert_dedups_by_content() {
        let mut index = TextIndex::new();
        index.insert(TextElement::new("alpha").into());
        index.insert(TextElement::new("beta").into());
        index.insert(TextElement::new("alpha").into());

        assert_eq!(index.len(), 2);
        let texts: Vec<_> = index
            .values()
            .filter_map(|se| se.text_element().map(|t| t.as_str().to_string()))
            .collect();
        assert_eq!(texts, ["alpha", "beta"]);
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut index = TextIndex::new();
        for text in ["one", "two", "three"] {
            index.insert(TextElement::new(text).into());
        }
        let two = TextElement::new("two").uuid();

        assert!(index.remove(&two).is_some());
        assert!(index.remove(&two).is_none());
        assert!(!index.contains(&two));
        assert_eq!(index.len(), 2);
        let texts: Vec<_> = index
            .values()
            .filter_map(|se| se.text_element().map(|t| t.as_str().to_string()))
            .collect();
        assert_eq!(texts, ["one", "three"]);

        // re-inserting appends at the end
        index.insert(TextElement::new("two").into());
        let last = index.values().last().and_then(|se| se.text_element());
        assert_eq!(last.map(|t| t.as_str()), Some("two"));
    }

    #[test]
    fn test_lookup_and_clear() {
        let mut index = TextIndex::new();
        let text = TextElement::new("gamma");
        let id = text.uuid();
        index.insert(text.into());
        assert!(index.contains(&id));
        assert!(index.get(&id).is_some());

        index.clear();
        assert!(index.is_empty());
        assert!(index.get(&id).is_none());
    }
}
