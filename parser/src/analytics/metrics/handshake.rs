use super::MetricExtractor;
use flamethrower_report::matrix::RunMatrix;
use flamethrower_report::record::Sample;

/// TCP connection setup time of every request that opened a connection.
pub struct TcpHandshakeLatency;

/// TLS handshake time of every request that negotiated a session.
pub struct TlsHandshakeLatency;

impl MetricExtractor for TcpHandshakeLatency {
    fn name(&self) -> &'static str {
        "tcp handshake latency"
    }

    fn extract(&self, runs: &[RunMatrix]) -> Vec<f64> {
        handshakes(runs, |sample| sample.tcp_handshake_ms)
    }
}

impl MetricExtractor for TlsHandshakeLatency {
    fn name(&self) -> &'static str {
        "tls handshake latency"
    }

    fn extract(&self, runs: &[RunMatrix]) -> Vec<f64> {
        handshakes(runs, |sample| sample.tls_handshake_ms)
    }
}

fn handshakes(runs: &[RunMatrix], duration: impl Fn(&Sample) -> f64) -> Vec<f64> {
    runs.iter()
        .flat_map(RunMatrix::cells)
        .map(duration)
        .filter(|ms| ms.is_finite() && *ms != 0.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn run(handshakes: &[(f64, f64)]) -> RunMatrix {
        let samples = handshakes
            .iter()
            .map(|(tcp, tls)| Sample::new(*tcp, *tls, vec![]))
            .collect();
        RunMatrix::reshape(samples, 2, Path::new("run.json")).unwrap()
    }

    #[test]
    fn should_concatenate_non_zero_handshakes_across_runs() {
        let runs = vec![
            run(&[(1.0, 0.0), (0.0, 0.0)]),
            run(&[(2.0, 5.0), (3.0, 0.0), (0.0, 6.0), (4.0, f64::NAN)]),
        ];
        assert_eq!(TcpHandshakeLatency.extract(&runs), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(TlsHandshakeLatency.extract(&runs), vec![5.0, 6.0]);
    }

    #[test]
    fn should_return_nothing_for_udp_like_runs() {
        let runs = vec![run(&[(0.0, 0.0), (0.0, 0.0)])];
        assert!(TcpHandshakeLatency.extract(&runs).is_empty());
    }
}
