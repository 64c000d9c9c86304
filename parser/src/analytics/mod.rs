pub mod aggregator;
pub mod extractor;
pub mod grouper;
pub mod loader;
pub mod metrics;
pub mod reducers;
