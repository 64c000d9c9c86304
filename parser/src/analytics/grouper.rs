use super::extractor::extract_params;
use super::loader::load_run;
use flamethrower_report::grouped::GroupedCollection;
use flamethrower_report::grouping_mode::GroupingMode;
use flamethrower_report::keys::GroupKey;
use flamethrower_report::labels::ExperimentLabels;
use flamethrower_report::matrix::RunMatrix;
use flamethrower_report::FlamethrowerError;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

const RESULT_EXTENSION: &str = "json";

/// Loads every result file below the root directories and buckets the resulting run
/// matrices by the key of the configured grouping mode.
pub struct FileGrouper<'a> {
    labels: &'a ExperimentLabels,
    mode: GroupingMode,
    subdir: &'a str,
}

impl<'a> FileGrouper<'a> {
    pub fn new(labels: &'a ExperimentLabels, mode: GroupingMode, subdir: &'a str) -> Self {
        Self {
            labels,
            mode,
            subdir,
        }
    }

    pub fn group(&self, roots: &[PathBuf]) -> Result<GroupedCollection, FlamethrowerError> {
        let mut grouped = GroupedCollection::new();
        for root in roots {
            let files = discover_files(root, self.subdir)?;
            info!(
                "Found {} result files under {} in {}",
                files.len(),
                self.subdir,
                root.display()
            );
            for path in files {
                let (key, matrix) = self.load(&path)?;
                grouped.push(key, matrix);
            }
        }
        Ok(grouped)
    }

    fn load(&self, path: &Path) -> Result<(GroupKey, RunMatrix), FlamethrowerError> {
        let run = load_run(path)?;
        let params = extract_params(&run.command_line, path, self.mode, self.labels)?;
        let matrix = RunMatrix::reshape(run.samples, params.concurrency, path)?;
        let qualifier = match self.mode {
            GroupingMode::Combined => None,
            GroupingMode::Foreach => params.round,
            GroupingMode::Resolver => params.resolver,
        };
        let key = GroupKey::new(params.protocol, params.test, qualifier);
        debug!(
            "{} -> {} {} {:?}, shape {:?}",
            path.display(),
            key.protocol,
            key.test,
            key.qualifier,
            matrix.shape()
        );
        Ok((key, matrix))
    }
}

/// Every non-hidden `.json` file below `root` located inside a directory named `subdir`,
/// sorted by path.
pub fn discover_files(root: &Path, subdir: &str) -> Result<Vec<PathBuf>, FlamethrowerError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));
    for entry in walker {
        let entry = entry.map_err(|error| FlamethrowerError::CannotWalkDirectory {
            path: root.to_path_buf(),
            source: error.into(),
        })?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension() == Some(OsStr::new(RESULT_EXTENSION))
            && is_inside(path, subdir)
        {
            files.push(entry.into_path());
        }
    }
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn is_inside(path: &Path, subdir: &str) -> bool {
    path.parent()
        .is_some_and(|parent| parent.components().any(|c| c.as_os_str() == subdir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::aggregator::aggregate;
    use crate::analytics::metrics::RoundTripTime;
    use crate::analytics::reducers::Mean;
    use flamethrower_report::keys::AggregateKey;
    use flamethrower_report::protocol::Protocol;
    use flamethrower_report::ErrorKind;
    use std::fs;
    use tempfile::TempDir;

    fn write_run(root: &Path, relative: &str, cmdline: &str, rtts: &[f64]) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut content = format!("{{\"cmdline\": \"{cmdline}\"}}\n");
        for rtt in rtts {
            content.push_str(&format!(
                "{{\"tcp_handshake\": 0, \"tls_handshake\": 0, \"period_response_arr_ms\": [[{rtt}]]}}\n"
            ));
        }
        content.push_str("{\"total_response_avg_ms\": 1.0}\n");
        fs::write(path, content).unwrap();
    }

    fn grouper(labels: &ExperimentLabels, mode: GroupingMode) -> FileGrouper<'_> {
        FileGrouper::new(labels, mode, "nocaching")
    }

    #[test]
    fn should_discover_sorted_json_files_under_subdir_only() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write_run(root, "nocaching/test2/b.json", "flame -c 1", &[1.0]);
        write_run(root, "nocaching/test1/a.json", "flame -c 1", &[1.0]);
        write_run(root, "caching/test1/a.json", "flame -c 1", &[1.0]);
        write_run(root, "nocaching/test1/.hidden.json", "flame -c 1", &[1.0]);
        write_run(root, "nocaching/test1/notes.txt", "flame -c 1", &[1.0]);
        write_run(root, "nocaching.json", "flame -c 1", &[1.0]);

        let files = discover_files(root, "nocaching").unwrap();

        assert_eq!(
            files,
            vec![
                root.join("nocaching/test1/a.json"),
                root.join("nocaching/test2/b.json"),
            ]
        );
    }

    #[test]
    fn should_group_combined_runs_and_aggregate_mean_rtt() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write_run(root, "nocaching/test1/udp.json", "flame -c 2 -P udp 127.0.0.1", &[1.0, 3.0]);
        write_run(
            root,
            "nocaching/test1/https.json",
            "flame -c 2 -P https -M GET 127.0.0.1",
            &[10.0, 20.0],
        );
        let labels = ExperimentLabels::default();

        let grouped = grouper(&labels, GroupingMode::Combined)
            .group(&[root.to_path_buf()])
            .unwrap();
        let means = aggregate(&grouped, &RoundTripTime, &Mean);

        assert_eq!(grouped.len(), 2);
        assert_eq!(means.len(), 2);
        assert_eq!(
            means.get(&AggregateKey::Protocol(Protocol::Udp)).unwrap(),
            &[2.0]
        );
        assert_eq!(
            means.get(&AggregateKey::Protocol(Protocol::HttpsGet)).unwrap(),
            &[15.0]
        );
    }

    #[test]
    fn should_partition_runs_per_round_in_foreach_mode() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        for round in ["round1", "round2"] {
            for test in ["test1", "test2"] {
                write_run(
                    root,
                    &format!("{round}/nocaching/{test}/udp-1.json"),
                    "flame -c 1",
                    &[1.0],
                );
                write_run(
                    root,
                    &format!("{round}/nocaching/{test}/udp-2.json"),
                    "flame -c 1",
                    &[2.0],
                );
            }
        }
        let labels = ExperimentLabels::default();

        let grouped = grouper(&labels, GroupingMode::Foreach)
            .group(&[root.to_path_buf()])
            .unwrap();

        assert_eq!(grouped.len(), 4);
        assert_eq!(grouped.total_runs(), 8);
        assert!(grouped.iter().all(|(_, runs)| runs.len() == 2));
        let (first, _) = grouped.iter().next().unwrap();
        assert_eq!(first.test, "test1");
        assert_eq!(first.qualifier.as_deref(), Some("round1"));
    }

    #[test]
    fn should_group_by_resolver() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write_run(root, "nocaching/test1/a.json", "flame -c 1 dns1.example.com", &[1.0]);
        write_run(root, "nocaching/test1/b.json", "flame -c 1 dns2.example.com", &[2.0]);
        let labels = ExperimentLabels::new(
            vec![],
            ExperimentLabels::default().tests,
            vec!["dns1.example.com".to_owned(), "dns2.example.com".to_owned()],
        );

        let grouped = grouper(&labels, GroupingMode::Resolver)
            .group(&[root.to_path_buf()])
            .unwrap();

        let qualifiers: Vec<_> = grouped
            .iter()
            .map(|(key, _)| key.qualifier.clone().unwrap())
            .collect();
        assert_eq!(qualifiers, vec!["dns1.example.com", "dns2.example.com"]);
    }

    #[test]
    fn should_abort_on_truncated_run() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write_run(root, "nocaching/test1/udp.json", "flame -c 2", &[1.0, 2.0, 3.0]);
        let labels = ExperimentLabels::default();

        let error = grouper(&labels, GroupingMode::Combined)
            .group(&[root.to_path_buf()])
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn should_keep_empty_runs_out_of_aggregation() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write_run(root, "nocaching/test1/udp.json", "flame", &[]);
        let labels = ExperimentLabels::default();

        let grouped = grouper(&labels, GroupingMode::Combined)
            .group(&[root.to_path_buf()])
            .unwrap();

        assert_eq!(grouped.total_runs(), 1);
        assert!(aggregate(&grouped, &RoundTripTime, &Mean).is_empty());
    }
}
