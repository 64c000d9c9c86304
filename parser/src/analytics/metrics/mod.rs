mod handshake;
mod round_trip;

use flamethrower_report::matrix::RunMatrix;
pub use handshake::{TcpHandshakeLatency, TlsHandshakeLatency};
pub use round_trip::RoundTripTime;

/// Flattens one measurement out of all runs of a group. Values that carry no
/// measurement (zero handshakes, empty periods) are left out.
pub trait MetricExtractor {
    fn name(&self) -> &'static str;
    fn extract(&self, runs: &[RunMatrix]) -> Vec<f64>;
}
