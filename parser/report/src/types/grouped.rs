use super::keys::GroupKey;
use super::matrix::RunMatrix;
use indexmap::IndexMap;

/// Run matrices bucketed by [`GroupKey`]. Keys keep the order in which they were first seen.
#[derive(Debug, Clone, Default)]
pub struct GroupedCollection {
    groups: IndexMap<GroupKey, Vec<RunMatrix>>,
}

impl GroupedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: GroupKey, matrix: RunMatrix) {
        self.groups.entry(key).or_default().push(matrix);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &[RunMatrix])> {
        self.groups.iter().map(|(key, runs)| (key, runs.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of run matrices across all keys.
    pub fn total_runs(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
