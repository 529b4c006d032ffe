//! Sweep orchestration — checkpoint resume, worker pool, final save

use std::process::ExitCode;

use anyhow::Context;

use crate::checkpoint::Checkpoint;
use crate::config::{Config, DEFAULT_START_ID};
use crate::cursor::IdCursor;
use crate::fetch::Fetcher;
use crate::progress::SharedProgress;
use crate::shutdown::ShutdownToken;
use crate::sink::CategorySink;
use crate::stats::RunStats;
use crate::worker::Worker;

/// Run one sweep, executed once per process lifetime.
///
/// Setup failures (directories, HTTP client, thread pool) surface as
/// hard errors; everything past that point is handled where it occurs
/// and the run always reaches the final checkpoint save.
pub fn run(
    config: &Config,
    shutdown: &ShutdownToken,
    progress: &SharedProgress,
) -> anyhow::Result<ExitCode> {
    config.validate()?;

    let sink = CategorySink::new(&config.out_dir).context("cannot create output directories")?;
    let checkpoint = Checkpoint::in_dir(sink.misc_dir());

    // Explicit start wins over the checkpoint, which wins over the
    // compiled-in origin.
    let start_id = match config.start_id {
        Some(id) => id,
        None => match checkpoint.load() {
            Some(id) => {
                log::info!("resuming from checkpoint at {id}");
                id
            }
            None => DEFAULT_START_ID,
        },
    };

    log::info!(
        "sweep starting: start={start_id}, end={}, workers={}",
        config.end_id,
        config.workers
    );

    // One HTTP session per worker, built up front so a client
    // construction failure aborts before any ID is claimed.
    let fetchers: Vec<Fetcher> = (0..config.workers)
        .map(|_| Fetcher::new(&config.base_url))
        .collect::<Result<_, _>>()
        .context("cannot initialize HTTP client")?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()
        .context("cannot create worker pool")?;

    let cursor = IdCursor::new(start_id);
    let stats = RunStats::new();
    let pb = progress.sweep_bar();

    pool.install(|| {
        rayon::scope(|s| {
            for fetcher in fetchers {
                let worker = Worker::new(
                    fetcher,
                    &cursor,
                    &sink,
                    &stats,
                    shutdown,
                    config.end_id,
                    pb.clone(),
                );
                s.spawn(move |_| worker.run());
            }
        });
    });
    pb.finish_and_clear();

    // Each worker that hit the end bound still advanced the cursor past
    // it, so clamp: the saved value is start + IDs dispensed in range.
    let next_id = cursor.position().min(config.end_id);
    log::info!("saving checkpoint {next_id} to {}", checkpoint.path().display());
    if let Err(e) = checkpoint.save(next_id) {
        log::error!("cannot save checkpoint: {e}");
    }

    if progress.is_tty() {
        stats.print();
    } else {
        stats.log();
    }

    if shutdown.is_requested() {
        log::warn!("shutdown requested, sweep interrupted");
        return Ok(ExitCode::from(130));
    }
    Ok(ExitCode::SUCCESS)
}
