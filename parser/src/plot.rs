use crate::analytics::aggregator::aggregate;
use crate::analytics::metrics::{
    MetricExtractor, RoundTripTime, TcpHandshakeLatency, TlsHandshakeLatency,
};
use crate::analytics::reducers::{Identity, Mean, StandardDeviation};
use clap::ValueEnum;
use flamethrower_report::aggregated::AggregatedCollection;
use flamethrower_report::grouped::GroupedCollection;
use flamethrower_report::grouping_mode::GroupingMode;
use flamethrower_report::keys::AggregateKey;
use flamethrower_report::labels::ExperimentLabels;
use flamethrower_report::protocol::Protocol;
use flamethrower_report::{
    bar_chart, cdf_chart, difference_bar_chart, three_bar_chart, ChartLabels,
    FlamethrowerError, ProtocolSeries,
};
use std::path::{Path, PathBuf};

const TESTS_DESC: &str = "Test cases";
const RTT_DESC: &str = "Round-trip time in milliseconds";

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    /// Mean TCP handshake latency per test
    #[value(name = "tcp_handshake")]
    TcpHandshake,
    /// Mean TLS handshake latency per test
    #[value(name = "tls_handshake")]
    TlsHandshake,
    /// Mean round-trip time per test and protocol, plus its difference from UDP
    #[value(name = "rtt_mean")]
    RttMean,
    /// Standard deviation of the round-trip time per test and protocol
    #[value(name = "rtt_stdev")]
    RttStdev,
    /// Round-trip time distribution of every test
    #[value(name = "rtt_cdf")]
    RttCdf,
}

impl PlotKind {
    /// Order in which requested plots are rendered.
    pub const RENDER_ORDER: [PlotKind; 5] = [
        PlotKind::TcpHandshake,
        PlotKind::TlsHandshake,
        PlotKind::RttMean,
        PlotKind::RttCdf,
        PlotKind::RttStdev,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PlotKind::TcpHandshake => "tcp_handshake",
            PlotKind::TlsHandshake => "tls_handshake",
            PlotKind::RttMean => "rtt_mean",
            PlotKind::RttStdev => "rtt_stdev",
            PlotKind::RttCdf => "rtt_cdf",
        }
    }
}

/// Settings shared by every chart of one invocation.
pub struct PlotContext<'a> {
    pub subdir: &'a str,
    pub mode: GroupingMode,
    pub labels: &'a ExperimentLabels,
    pub output_dir: &'a Path,
    pub caption_prefix: &'a str,
}

impl PlotContext<'_> {
    /// Rounds or resolvers the three-protocol charts are drawn for, `None` when combined.
    fn qualifiers(&self) -> Vec<Option<&str>> {
        match self.mode {
            GroupingMode::Combined => vec![None],
            GroupingMode::Foreach => self
                .labels
                .rounds
                .iter()
                .map(|r| Some(r.as_str()))
                .collect(),
            GroupingMode::Resolver => self
                .labels
                .resolvers
                .iter()
                .map(|r| Some(r.as_str()))
                .collect(),
        }
    }

    fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}-{name}.png", self.subdir))
    }

    fn chart_labels(&self, title: &str, x_desc: &str, y_desc: &str) -> ChartLabels {
        let caption = if self.caption_prefix.is_empty() {
            title.to_owned()
        } else {
            format!("{} {title}", self.caption_prefix)
        };
        ChartLabels::new(&caption, x_desc, y_desc)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    Bars(Vec<f64>),
    ProtocolBars([Vec<f64>; 3]),
    ProtocolDifference([Vec<f64>; 3]),
    Cdf([Vec<f64>; 3]),
}

/// A chart ready to be rendered to `path`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartJob {
    pub path: PathBuf,
    pub labels: ChartLabels,
    pub data: ChartData,
}

impl ChartJob {
    pub fn render(&self) -> Result<(), FlamethrowerError> {
        match &self.data {
            ChartData::Bars(values) => bar_chart(values, &self.path, &self.labels),
            ChartData::ProtocolBars(values) => {
                three_bar_chart(&protocol_series(values), &self.path, &self.labels)
            }
            ChartData::ProtocolDifference(values) => {
                difference_bar_chart(&protocol_series(values), &self.path, &self.labels)
            }
            ChartData::Cdf(values) => {
                cdf_chart(&protocol_series(values), &self.path, &self.labels)
            }
        }
    }
}

fn protocol_series(values: &[Vec<f64>; 3]) -> ProtocolSeries<'_> {
    let [udp, get, post] = values;
    ProtocolSeries::new(udp, get, post)
}

/// Aggregates the grouped runs for `kind` and lays out the charts to draw.
pub fn chart_jobs(
    kind: PlotKind,
    grouped: &GroupedCollection,
    ctx: &PlotContext,
) -> Result<Vec<ChartJob>, FlamethrowerError> {
    match kind {
        PlotKind::TcpHandshake => Ok(handshake_jobs(
            grouped,
            ctx,
            &TcpHandshakeLatency,
            "tcp",
            "TCP latency in milliseconds",
        )),
        PlotKind::TlsHandshake => Ok(handshake_jobs(
            grouped,
            ctx,
            &TlsHandshakeLatency,
            "tls",
            "TLS latency in milliseconds",
        )),
        PlotKind::RttMean => rtt_mean_jobs(grouped, ctx),
        PlotKind::RttStdev => rtt_stdev_jobs(grouped, ctx),
        PlotKind::RttCdf => rtt_cdf_jobs(grouped, ctx),
    }
}

fn handshake_jobs(
    grouped: &GroupedCollection,
    ctx: &PlotContext,
    metric: &dyn MetricExtractor,
    short_name: &str,
    y_desc: &str,
) -> Vec<ChartJob> {
    let latencies = aggregate(grouped, metric, &Mean);
    latencies.print_summary(&format!("Mean {}", metric.name()));
    latencies
        .iter()
        .map(|(key, values)| ChartJob {
            path: ctx.output_path(&format!("{}-{key}-{short_name}-mean", ctx.mode)),
            labels: ctx.chart_labels(&format!("{key} {}", metric.name()), TESTS_DESC, y_desc),
            data: ChartData::Bars(values.to_vec()),
        })
        .collect()
}

fn rtt_mean_jobs(
    grouped: &GroupedCollection,
    ctx: &PlotContext,
) -> Result<Vec<ChartJob>, FlamethrowerError> {
    let means = aggregate(grouped, &RoundTripTime, &Mean);
    means.print_summary("Mean round-trip time");
    let mut jobs = Vec::new();
    for qualifier in ctx.qualifiers() {
        let suffix = qualifier.unwrap_or("combined");
        let values = protocol_values(&means, qualifier)?;
        jobs.push(ChartJob {
            path: ctx.output_path(&format!("{suffix}-rtt-mean")),
            labels: ctx.chart_labels(
                &format!("{suffix} mean round-trip time"),
                TESTS_DESC,
                RTT_DESC,
            ),
            data: ChartData::ProtocolBars(values.clone()),
        });
        jobs.push(ChartJob {
            path: ctx.output_path(&format!("{suffix}-rtt-difference")),
            labels: ctx.chart_labels(
                &format!("{suffix} round-trip time difference"),
                TESTS_DESC,
                "Round-trip time difference (UDP) in milliseconds",
            ),
            data: ChartData::ProtocolDifference(values),
        });
    }
    Ok(jobs)
}

fn rtt_stdev_jobs(
    grouped: &GroupedCollection,
    ctx: &PlotContext,
) -> Result<Vec<ChartJob>, FlamethrowerError> {
    let deviations = aggregate(grouped, &RoundTripTime, &StandardDeviation);
    deviations.print_summary("Round-trip time standard deviation");
    ctx.qualifiers()
        .into_iter()
        .map(|qualifier| {
            let suffix = qualifier.unwrap_or("combined");
            Ok(ChartJob {
                path: ctx.output_path(&format!("{suffix}-rtt-stdev")),
                labels: ctx.chart_labels(
                    &format!("{suffix} round-trip time standard deviation"),
                    TESTS_DESC,
                    "Standard deviation in milliseconds",
                ),
                data: ChartData::ProtocolBars(protocol_values(&deviations, qualifier)?),
            })
        })
        .collect()
}

fn rtt_cdf_jobs(
    grouped: &GroupedCollection,
    ctx: &PlotContext,
) -> Result<Vec<ChartJob>, FlamethrowerError> {
    let rtts = aggregate(grouped, &RoundTripTime, &Identity);
    rtts.print_sample_counts("Round-trip time samples");
    let mut jobs = Vec::new();
    for qualifier in ctx.qualifiers() {
        let tests = rtts.protocol(Protocol::Udp, qualifier)?.len();
        for index in 0..tests {
            let name = match qualifier {
                Some(qualifier) => format!("{qualifier}-cdf-test{}", index + 1),
                None => format!("cdf-test{}", index + 1),
            };
            let [udp, get, post] = Protocol::ALL
                .map(|protocol| test_entry(&rtts, protocol, qualifier, index));
            jobs.push(ChartJob {
                path: ctx.output_path(&name),
                labels: ctx.chart_labels(
                    &format!("Test {} round-trip time distribution", index + 1),
                    RTT_DESC,
                    "Cumulative probability",
                ),
                data: ChartData::Cdf([udp?, get?, post?]),
            });
        }
    }
    Ok(jobs)
}

/// UDP, HTTPS GET and HTTPS POST values under the same qualifier.
fn protocol_values(
    aggregated: &AggregatedCollection<f64>,
    qualifier: Option<&str>,
) -> Result<[Vec<f64>; 3], FlamethrowerError> {
    let [udp, get, post] = Protocol::ALL.map(|protocol| {
        aggregated
            .protocol(protocol, qualifier)
            .map(<[f64]>::to_vec)
    });
    Ok([udp?, get?, post?])
}

fn test_entry(
    rtts: &AggregatedCollection<Vec<f64>>,
    protocol: Protocol,
    qualifier: Option<&str>,
    index: usize,
) -> Result<Vec<f64>, FlamethrowerError> {
    rtts.protocol(protocol, qualifier)?
        .get(index)
        .cloned()
        .ok_or_else(|| FlamethrowerError::MissingTestEntry {
            key: AggregateKey::for_protocol(protocol, qualifier).to_string(),
            index: index + 1,
        })
}
