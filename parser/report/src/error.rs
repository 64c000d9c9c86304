use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of a [`FlamethrowerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedInput,
    ShapeMismatch,
    Lookup,
    Io,
    Rendering,
}

#[derive(Debug, Error)]
pub enum FlamethrowerError {
    #[error("Cannot read file: {path}")]
    CannotReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot walk directory: {path}")]
    CannotWalkDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot create output directory: {path}")]
    CannotCreateOutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed record at line {line} of {path}")]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("Line {line} of {path} is not valid UTF-8")]
    InvalidEncoding {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("File {0} contains no records")]
    EmptyRunFile(PathBuf),
    #[error("First record of {0} has no cmdline")]
    MissingCommandLine(PathBuf),
    #[error("Cannot split cmdline of {path}: {cmdline}")]
    InvalidCommandLine { path: PathBuf, cmdline: String },
    #[error("Cannot reshape {rows} samples of {path} into {concurrency} columns")]
    ShapeMismatch {
        path: PathBuf,
        rows: usize,
        concurrency: usize,
    },
    #[error("Flag {0} has no value")]
    MissingArgumentValue(String),
    #[error("Invalid value '{value}' for flag {flag}")]
    InvalidArgumentValue { flag: String, value: String },
    #[error("Unsupported protocol: {0}")]
    UnsupportedProtocol(String),
    #[error("None of the resolvers {resolvers:?} appears in the cmdline")]
    ResolverNotFound { resolvers: Vec<String> },
    #[error("No round label found in path: {0}")]
    RoundNotFound(PathBuf),
    #[error("No test label found in path: {0}")]
    TestNotFound(PathBuf),
    #[error("No aggregated values for key: {0}")]
    MissingAggregate(String),
    #[error("No entry for test {index} under key: {key}")]
    MissingTestEntry { key: String, index: usize },
    #[error("Series '{name}' has {actual} values, expected {expected}")]
    MisalignedSeries {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("Cannot render chart {path}: {reason}")]
    ChartRendering { path: PathBuf, reason: String },
}

impl FlamethrowerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedRecord { .. }
            | Self::InvalidEncoding { .. }
            | Self::EmptyRunFile(_)
            | Self::MissingCommandLine(_)
            | Self::InvalidCommandLine { .. } => ErrorKind::MalformedInput,
            Self::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            Self::MissingArgumentValue(_)
            | Self::InvalidArgumentValue { .. }
            | Self::UnsupportedProtocol(_)
            | Self::ResolverNotFound { .. }
            | Self::RoundNotFound(_)
            | Self::TestNotFound(_)
            | Self::MissingAggregate(_)
            | Self::MissingTestEntry { .. } => ErrorKind::Lookup,
            Self::CannotReadFile { .. }
            | Self::CannotWalkDirectory { .. }
            | Self::CannotCreateOutputDirectory { .. } => ErrorKind::Io,
            Self::MisalignedSeries { .. } | Self::ChartRendering { .. } => ErrorKind::Rendering,
        }
    }
}
