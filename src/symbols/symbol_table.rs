use std::collections::HashMap;

/// Registry of user-defined identifiers in order of first appearance.
///
/// Indices are 1-based and dense: the n-th distinct identifier seen gets
/// index n. Registering a name twice returns the original index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    indices: HashMap<String, usize>,
    order: Vec<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Registers `name` if it is not present yet and returns its index.
    pub fn insert(&mut self, name: &str) -> usize {
        if let Some(index) = self.indices.get(name) {
            return *index;
        }

        self.order.push(name.to_string());
        let index = self.order.len();
        self.indices.insert(name.to_string(), index);
        index
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries as `(index, name)`, ordered by index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.order
            .iter()
            .enumerate()
            .map(|(i, name)| (i + 1, name.as_str()))
    }
}
