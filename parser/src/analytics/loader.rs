use flamethrower_report::record::{FlamethrowerLine, RunRecord};
use flamethrower_report::FlamethrowerError;
use human_repr::HumanCount;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Reads a flamethrower JSON-lines result file.
///
/// The first record's `cmdline` is split into shell words. Summary records (those with a
/// `total_response_avg_ms`) are dropped, then the first remaining record, which is the
/// warm-up/header line, is dropped as well.
pub fn load_run(path: &Path) -> Result<RunRecord, FlamethrowerError> {
    let cannot_read = |source| FlamethrowerError::CannotReadFile {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(cannot_read)?;
    let size = file.metadata().map(|m| m.len()).unwrap_or_default();

    let mut lines = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| match source.kind() {
            io::ErrorKind::InvalidData => FlamethrowerError::InvalidEncoding {
                path: path.to_path_buf(),
                line: index + 1,
                source,
            },
            _ => cannot_read(source),
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str::<FlamethrowerLine>(&line).map_err(|source| {
            FlamethrowerError::MalformedRecord {
                path: path.to_path_buf(),
                line: index + 1,
                source,
            }
        })?;
        lines.push(record);
    }

    let cmdline = lines
        .first()
        .ok_or_else(|| FlamethrowerError::EmptyRunFile(path.to_path_buf()))?
        .cmdline
        .as_deref()
        .ok_or_else(|| FlamethrowerError::MissingCommandLine(path.to_path_buf()))?;
    let command_line =
        shlex::split(cmdline).ok_or_else(|| FlamethrowerError::InvalidCommandLine {
            path: path.to_path_buf(),
            cmdline: cmdline.to_owned(),
        })?;

    let total = lines.len();
    let samples: Vec<_> = lines
        .into_iter()
        .filter(|line| !line.is_summary())
        .skip(1)
        .map(FlamethrowerLine::into_sample)
        .collect();
    debug!(
        "Loaded {} ({}): {} samples out of {} records",
        path.display(),
        size.human_count_bytes(),
        samples.len(),
        total
    );

    Ok(RunRecord {
        samples,
        command_line,
    })
}
