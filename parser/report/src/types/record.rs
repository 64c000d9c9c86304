use derive_new::new;
use serde::Deserialize;

/// A single line of a flamethrower JSON-lines result file, as written by the tool.
///
/// Only the fields needed for the charts are kept. The header line carries `cmdline`,
/// summary lines carry `total_response_avg_ms` and per-period lines carry the
/// measurements.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FlamethrowerLine {
    #[serde(default)]
    pub cmdline: Option<String>,
    #[serde(default)]
    pub total_response_avg_ms: Option<serde_json::Value>,
    #[serde(default)]
    pub tcp_handshake: Option<f64>,
    #[serde(default)]
    pub tls_handshake: Option<f64>,
    #[serde(default)]
    pub period_response_arr_ms: Option<Vec<Vec<f64>>>,
}

impl FlamethrowerLine {
    pub fn is_summary(&self) -> bool {
        self.total_response_avg_ms.is_some()
    }

    pub fn into_sample(self) -> Sample {
        Sample {
            tcp_handshake_ms: self.tcp_handshake.unwrap_or_default(),
            tls_handshake_ms: self.tls_handshake.unwrap_or_default(),
            period_response_ms: self.period_response_arr_ms.unwrap_or_default(),
        }
    }
}

/// One raw per-request row. Handshake durations of zero mean "not applicable" and empty
/// periods mean no response arrived in that period.
#[derive(Debug, Clone, PartialEq, Default, new)]
pub struct Sample {
    pub tcp_handshake_ms: f64,
    pub tls_handshake_ms: f64,
    pub period_response_ms: Vec<Vec<f64>>,
}

/// Content of one result file after dropping the header and summary lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunRecord {
    pub samples: Vec<Sample>,
    pub command_line: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_null_total_average_as_raw_row() {
        let line: FlamethrowerLine =
            serde_json::from_str(r#"{"total_response_avg_ms": null, "tcp_handshake": 2.5}"#)
                .unwrap();
        assert!(!line.is_summary());
        assert_eq!(line.into_sample().tcp_handshake_ms, 2.5);
    }

    #[test]
    fn should_detect_summary_row_and_ignore_unknown_fields() {
        let line: FlamethrowerLine = serde_json::from_str(
            r#"{"total_response_avg_ms": 12.0, "total_queries": 100, "qps": 10}"#,
        )
        .unwrap();
        assert!(line.is_summary());
    }

    #[test]
    fn should_default_missing_measurements() {
        let sample = FlamethrowerLine::default().into_sample();
        assert_eq!(sample, Sample::new(0.0, 0.0, vec![]));
    }
}
