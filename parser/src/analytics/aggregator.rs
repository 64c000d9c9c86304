use super::metrics::MetricExtractor;
use super::reducers::Reducer;
use flamethrower_report::aggregated::AggregatedCollection;
use flamethrower_report::grouped::GroupedCollection;
use tracing::debug;

/// Extracts `metric` from every group and merges the reduced results under the group's
/// reduced key, keeping group order. Groups without any value are skipped rather than
/// contributing a zero or NaN entry.
pub fn aggregate<M, R>(
    grouped: &GroupedCollection,
    metric: &M,
    reducer: &R,
) -> AggregatedCollection<R::Output>
where
    M: MetricExtractor + ?Sized,
    R: Reducer + ?Sized,
{
    let mut aggregated = AggregatedCollection::new();
    for (key, runs) in grouped.iter() {
        let values = metric.extract(runs);
        if values.is_empty() {
            debug!(
                "No {} values for {} {}, skipping",
                metric.name(),
                key.reduced(),
                key.test
            );
            continue;
        }
        debug!(
            "Aggregating {} {} values for {} {}",
            values.len(),
            metric.name(),
            key.reduced(),
            key.test
        );
        aggregated.push(key.reduced(), reducer.reduce(values));
    }
    aggregated
}
