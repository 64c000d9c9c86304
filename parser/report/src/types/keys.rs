use super::protocol::Protocol;
use derive_more::Display;
use derive_new::new;

/// Bucket of the grouped collection. `qualifier` holds the round in `foreach` mode and the
/// resolver in `resolver` mode; it is `None` when grouping is combined.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct GroupKey {
    pub protocol: Protocol,
    pub test: String,
    pub qualifier: Option<String>,
}

impl GroupKey {
    /// Drops the test component, leaving the key the aggregated values are merged under.
    pub fn reduced(&self) -> AggregateKey {
        match &self.qualifier {
            Some(qualifier) => AggregateKey::Qualified(self.protocol, qualifier.clone()),
            None => AggregateKey::Protocol(self.protocol),
        }
    }
}

/// Key of the aggregated collection, rendered as `udp` or `udp-round1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum AggregateKey {
    #[display("{_0}")]
    Protocol(Protocol),
    #[display("{_0}-{_1}")]
    Qualified(Protocol, String),
}

impl AggregateKey {
    /// Key for `protocol` under an optional round or resolver.
    pub fn for_protocol(protocol: Protocol, qualifier: Option<&str>) -> Self {
        match qualifier {
            Some(qualifier) => AggregateKey::Qualified(protocol, qualifier.to_owned()),
            None => AggregateKey::Protocol(protocol),
        }
    }
}
