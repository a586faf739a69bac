mod date;
mod logfile;
mod media;
mod mover;
mod placer;
mod scan;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use crate::logfile::RunLog;
use crate::media::MediaFile;

#[derive(Parser)]
#[command(
    name = "photo-organizer",
    version,
    about = "Sort photos and videos into a year/month archive by capture date"
)]
struct Cli {
    /// Source directory to organize (defaults to the current directory)
    #[arg(default_value = ".")]
    source: PathBuf,

    /// Print planned moves without touching the disk
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Default)]
struct RunReport {
    moved: u64,
    failed: u64,
    interrupted: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = interrupted.clone();
        ctrlc::set_handler(move || interrupted.store(true, Ordering::SeqCst))
            .context("failed to install Ctrl-C handler")?;
    }

    let source = cli
        .source
        .canonicalize()
        .with_context(|| format!("cannot read source directory {}", cli.source.display()))?;

    let report = run(&source, cli.dry_run, &interrupted)?;
    eprintln!("{}", summary_line(&report, cli.dry_run));
    Ok(())
}

/// One-line end-of-run summary. Dry runs write no log file, so the log
/// pointer only appears when moves actually happened.
fn summary_line(report: &RunReport, dry_run: bool) -> String {
    if report.interrupted {
        format!(
            "Cancelled: {} moved, {} failed; remaining files left in place",
            report.moved, report.failed
        )
    } else if dry_run {
        format!("Done! {} planned moves, nothing touched", report.moved)
    } else {
        format!(
            "Done! {} moved, {} failed. Details in {}",
            report.moved,
            report.failed,
            logfile::LOG_FILENAME
        )
    }
}

/// Process every eligible file in `source` sequentially. Per-file failures
/// are logged and counted; only the interrupt flag stops the run early.
fn run(source: &Path, dry_run: bool, interrupted: &AtomicBool) -> anyhow::Result<RunReport> {
    let files = scan::scan_source(source)
        .with_context(|| format!("cannot scan {}", source.display()))?;
    if files.is_empty() {
        eprintln!("No media files found in {}. Nothing to do.", source.display());
        return Ok(RunReport::default());
    }

    let archive_root = source.join(placer::ARCHIVE_DIR);
    let mut log = if dry_run {
        None
    } else {
        Some(RunLog::open(source).context("cannot open log file")?)
    };

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40}] {pos}/{len} organizing")
            .unwrap(),
    );

    let mut report = RunReport::default();
    for file in &files {
        if interrupted.load(Ordering::SeqCst) {
            report.interrupted = true;
            break;
        }

        match organize_one(&archive_root, file, dry_run) {
            Ok(dest) => {
                let rel = dest.strip_prefix(&archive_root).unwrap_or(&dest);
                if dry_run {
                    pb.println(format!("would move {} -> {}", file.filename, rel.display()));
                } else if let Some(log) = log.as_mut() {
                    log.success(&file.filename, rel);
                }
                report.moved += 1;
            }
            Err(e) => {
                if let Some(log) = log.as_mut() {
                    log.failure(&file.filename, &format!("{e:#}"));
                }
                report.failed += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(report)
}

/// Resolve, place and move a single file; returns the destination path.
fn organize_one(archive_root: &Path, file: &MediaFile, dry_run: bool) -> anyhow::Result<PathBuf> {
    let date = date::resolve_date(file);

    if dry_run {
        // No directory creation and no collision probing in dry-run mode.
        return Ok(archive_root
            .join(date.year_folder())
            .join(date.month_folder())
            .join(&file.filename));
    }

    let dest = placer::place(archive_root, &date, &file.filename)?;
    mover::move_file(&file.path, &dest)?;
    Ok(dest)
}
