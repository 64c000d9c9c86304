use super::MetricExtractor;
use flamethrower_report::matrix::RunMatrix;

/// Every response time of every period, generator and run. Periods without a response
/// contribute nothing.
pub struct RoundTripTime;

impl MetricExtractor for RoundTripTime {
    fn name(&self) -> &'static str {
        "round-trip time"
    }

    fn extract(&self, runs: &[RunMatrix]) -> Vec<f64> {
        runs.iter()
            .flat_map(RunMatrix::cells)
            .flat_map(|sample| sample.period_response_ms.iter())
            .filter(|period| !period.is_empty())
            .flatten()
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flamethrower_report::record::Sample;
    use std::path::Path;

    #[test]
    fn should_flatten_periods_of_all_generators_and_runs() {
        let first = RunMatrix::reshape(
            vec![
                Sample::new(0.0, 0.0, vec![vec![1.0, 2.0], vec![]]),
                Sample::new(0.0, 0.0, vec![vec![3.0]]),
            ],
            2,
            Path::new("a.json"),
        )
        .unwrap();
        let second = RunMatrix::reshape(
            vec![Sample::new(0.0, 0.0, vec![vec![], vec![4.0]])],
            1,
            Path::new("b.json"),
        )
        .unwrap();

        assert_eq!(
            RoundTripTime.extract(&[first, second]),
            vec![1.0, 2.0, 3.0, 4.0]
        );
    }

    #[test]
    fn should_be_empty_when_no_period_got_a_response() {
        let run = RunMatrix::reshape(
            vec![Sample::new(0.0, 0.0, vec![vec![], vec![]])],
            1,
            Path::new("a.json"),
        )
        .unwrap();
        assert!(RoundTripTime.extract(&[run]).is_empty());
    }
}
