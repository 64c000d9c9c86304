use super::protocol::Protocol;
use derive_new::new;

pub const DEFAULT_CONCURRENCY: usize = 10;

/// Experiment parameters recovered from a run's command line and file path.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ExperimentParams {
    pub protocol: Protocol,
    pub concurrency: usize,
    pub test: String,
    /// Only recovered when grouping per round.
    pub round: Option<String>,
    /// Only recovered when grouping per resolver.
    pub resolver: Option<String>,
}
