//! Directed reference graph between notes.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::item_path::ItemPath;

/// Adjacency map: source note to the notes it references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReferenceGraph {
    edges: BTreeMap<ItemPath, BTreeSet<ItemPath>>,
}

impl ReferenceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `from -> to`. Returns false if the edge already existed.
    pub fn add_edge(&mut self, from: ItemPath, to: ItemPath) -> bool {
        self.edges.entry(from).or_default().insert(to)
    }

    pub fn contains_edge(&self, from: &ItemPath, to: &ItemPath) -> bool {
        self.edges.get(from).is_some_and(|targets| targets.contains(to))
    }

    /// Notes referenced by `from`.
    pub fn outgoing(&self, from: &ItemPath) -> impl Iterator<Item = &ItemPath> {
        self.edges.get(from).into_iter().flatten()
    }

    /// Notes referencing `to`.
    pub fn backlinks<'a>(&'a self, to: &'a ItemPath) -> impl Iterator<Item = &'a ItemPath> {
        self.edges
            .iter()
            .filter(move |(_, targets)| targets.contains(to))
            .map(|(source, _)| source)
    }

    /// All edges, ordered by source then target.
    pub fn edges(&self) -> impl Iterator<Item = (&ItemPath, &ItemPath)> {
        self.edges
            .iter()
            .flat_map(|(source, targets)| targets.iter().map(move |t| (source, t)))
    }

    /// Every identity that is an endpoint of some edge.
    pub fn nodes(&self) -> BTreeSet<&ItemPath> {
        self.edges().flat_map(|(a, b)| [a, b]).collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count() == 0
    }
}
