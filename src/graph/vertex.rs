//! Vertex storage shared by both graph backings
//!
//! A single insertion-ordered map holds the label set, the label ↔ id
//! bijection (the id of a label is its position in the map) and the optional
//! payload of each vertex.

use super::error::{GraphError, GraphResult};
use super::types::{VertexId, VertexLabel};
use indexmap::map::Entry;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;

/// Ordered, fixed set of labeled vertices with one optional value each
#[derive(Debug, Clone, PartialEq)]
pub struct VertexStore<V> {
    values: IndexMap<VertexLabel, Option<V>>,
}

impl<V> VertexStore<V> {
    /// Build a store from the final label list
    ///
    /// Ids follow the input order. The list must be non-empty and free of
    /// duplicates.
    pub fn new<I, L>(labels: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<VertexLabel>,
    {
        let labels = labels.into_iter();
        let mut values: IndexMap<VertexLabel, Option<V>> =
            IndexMap::with_capacity(labels.size_hint().0);

        for label in labels {
            match values.entry(label.into()) {
                Entry::Occupied(entry) => {
                    return Err(GraphError::DuplicateVertex(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(None);
                }
            }
        }

        if values.is_empty() {
            return Err(GraphError::EmptyVertexSet);
        }

        Ok(VertexStore { values })
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.values.contains_key(label)
    }

    /// Resolve a label to its id
    pub fn id_of(&self, label: &str) -> GraphResult<VertexId> {
        self.values
            .get_index_of(label)
            .map(VertexId::new)
            .ok_or_else(|| GraphError::unknown(label))
    }

    /// Resolve an id back to its label
    pub fn label_of(&self, id: VertexId) -> Option<&VertexLabel> {
        self.values.get_index(id.as_usize()).map(|(label, _)| label)
    }

    /// Labels in id order
    pub fn labels(&self) -> impl Iterator<Item = &VertexLabel> + '_ {
        self.values.keys()
    }

    pub fn label_set(&self) -> FxHashSet<VertexLabel> {
        self.values.keys().cloned().collect()
    }

    /// Value stored at `label`, `None` when the vertex holds no value
    pub fn value(&self, label: &str) -> GraphResult<Option<&V>> {
        self.values
            .get(label)
            .map(Option::as_ref)
            .ok_or_else(|| GraphError::unknown(label))
    }

    /// Overwrite the value stored at `label`
    pub fn set_value(&mut self, label: &str, value: Option<V>) -> GraphResult<()> {
        let slot = self
            .values
            .get_mut(label)
            .ok_or_else(|| GraphError::unknown(label))?;
        *slot = value;
        Ok(())
    }

    /// `(id, label, value)` triples in id order
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &VertexLabel, Option<&V>)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(idx, (label, value))| (VertexId::new(idx), label, value.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_input_order() {
        let store: VertexStore<i32> = VertexStore::new(["c", "a", "b"]).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.id_of("c").unwrap(), VertexId::new(0));
        assert_eq!(store.id_of("b").unwrap(), VertexId::new(2));
        assert_eq!(store.label_of(VertexId::new(1)).unwrap(), "a");
        assert!(store.label_of(VertexId::new(3)).is_none());

        let ordered: Vec<&str> = store.labels().map(|l| l.as_str()).collect();
        assert_eq!(ordered, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_rejects_duplicates_and_empty() {
        let dup = VertexStore::<()>::new(["a", "b", "a"]);
        assert_eq!(dup, Err(GraphError::DuplicateVertex(VertexLabel::new("a"))));

        let empty = VertexStore::<()>::new(Vec::<String>::new());
        assert_eq!(empty, Err(GraphError::EmptyVertexSet));
    }

    #[test]
    fn test_values_default_to_absent() {
        let mut store: VertexStore<&str> = VertexStore::new(["a", "b"]).unwrap();
        assert_eq!(store.value("a").unwrap(), None);

        store.set_value("a", Some("x")).unwrap();
        assert_eq!(store.value("a").unwrap(), Some(&"x"));

        store.set_value("a", None).unwrap();
        assert_eq!(store.value("a").unwrap(), None);
    }

    #[test]
    fn test_unknown_vertex() {
        let mut store: VertexStore<u8> = VertexStore::new(["a"]).unwrap();
        assert_eq!(store.id_of("q"), Err(GraphError::unknown("q")));
        assert_eq!(store.value("q"), Err(GraphError::unknown("q")));
        assert_eq!(store.set_value("q", Some(1)), Err(GraphError::unknown("q")));
        assert!(!store.contains("q"));
    }
}
