use crate::aggregated::AggregatedCollection;
use colored::Colorize;
use std::path::Path;
use tracing::{info, warn};

/// Confirmation line for a chart written to disk.
pub fn print_saved(path: &Path) {
    println!("{}", format!("Saved {}", path.display()).green());
}

impl AggregatedCollection<f64> {
    pub fn print_summary(&self, title: &str) {
        if self.is_empty() {
            warn!("{title}: no values to report");
            return;
        }
        info!("{}", format!("{title} ({} keys)", self.len()).blue());
        for (key, values) in self.iter() {
            let formatted = values
                .iter()
                .enumerate()
                .map(|(index, value)| format!("test {}: {value:.2}", index + 1))
                .collect::<Vec<_>>()
                .join(", ");
            info!("{}", format!("{key}: {formatted}").green());
        }
    }
}

impl AggregatedCollection<Vec<f64>> {
    pub fn print_sample_counts(&self, title: &str) {
        if self.is_empty() {
            warn!("{title}: no values to report");
            return;
        }
        info!("{}", format!("{title} ({} keys)", self.len()).blue());
        for (key, values) in self.iter() {
            let total: usize = values.iter().map(Vec::len).sum();
            info!(
                "{}",
                format!("{key}: {} tests, {total} samples", values.len()).green()
            );
        }
    }
}
