use crate::analytics::grouper::FileGrouper;
use crate::args::FlamethrowerArgs;
use crate::plot::{chart_jobs, PlotContext, PlotKind};
use flamethrower_report::FlamethrowerError;
use std::fs;
use tracing::{info, warn};

pub fn run(args: &FlamethrowerArgs) -> Result<(), FlamethrowerError> {
    let labels = args.labels();
    let mode = args.grouping_mode();
    info!(
        "Grouping flamethrower results from {} directories in {mode} mode...",
        args.dirs.len()
    );
    let grouped = FileGrouper::new(&labels, mode, &args.subdir).group(&args.dirs)?;
    info!(
        "Grouped {} runs into {} groups.",
        grouped.total_runs(),
        grouped.len()
    );

    if grouped.is_empty() {
        warn!(
            "No result files found under a '{}' directory in {:?}.",
            args.subdir, args.dirs
        );
    }

    if args.plots.is_empty() {
        warn!("No plots selected, use --plots to render charts.");
        return Ok(());
    }

    fs::create_dir_all(&args.output_dir).map_err(|source| {
        FlamethrowerError::CannotCreateOutputDirectory {
            path: args.output_dir.clone(),
            source,
        }
    })?;

    let ctx = PlotContext {
        subdir: &args.subdir,
        mode,
        labels: &labels,
        output_dir: &args.output_dir,
        caption_prefix: &args.label,
    };
    for kind in PlotKind::RENDER_ORDER {
        if !args.plots.contains(&kind) {
            continue;
        }
        let jobs = chart_jobs(kind, &grouped, &ctx)?;
        info!("Rendering {} {} charts...", jobs.len(), kind.name());
        for job in &jobs {
            job.render()?;
        }
    }
    Ok(())
}
