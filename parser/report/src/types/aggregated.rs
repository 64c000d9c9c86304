use super::keys::AggregateKey;
use super::protocol::Protocol;
use crate::error::FlamethrowerError;
use indexmap::IndexMap;

/// Per-test values merged under an [`AggregateKey`]. The position in each list follows the
/// order tests were first seen while grouping, so index `i` is rendered as `Test i+1`.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedCollection<T> {
    values: IndexMap<AggregateKey, Vec<T>>,
}

impl<T> Default for AggregatedCollection<T> {
    fn default() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }
}

impl<T> AggregatedCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: AggregateKey, value: T) {
        self.values.entry(key).or_default().push(value);
    }

    pub fn get(&self, key: &AggregateKey) -> Result<&[T], FlamethrowerError> {
        self.values
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| FlamethrowerError::MissingAggregate(key.to_string()))
    }

    pub fn protocol(
        &self,
        protocol: Protocol,
        qualifier: Option<&str>,
    ) -> Result<&[T], FlamethrowerError> {
        self.get(&AggregateKey::for_protocol(protocol, qualifier))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AggregateKey, &[T])> {
        self.values.iter().map(|(key, values)| (key, values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
