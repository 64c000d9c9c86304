use derive_more::Display;

/// Decides which parameters besides protocol and test make up a grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Default)]
pub enum GroupingMode {
    /// `(protocol, test)`
    #[default]
    #[display("combined")]
    Combined,
    /// `(protocol, test, round)`
    #[display("foreach")]
    Foreach,
    /// `(protocol, test, resolver)`
    #[display("resolver")]
    Resolver,
}
