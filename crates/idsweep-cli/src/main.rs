//! idsweep - parallel sequential-ID page dumper
//!
//! Sweeps a numeric ID range against the ticket page endpoint with a
//! pool of fetch workers, files each page under a per-day directory,
//! and checkpoints the cursor so an interrupted sweep can resume.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use idsweep_core::config::{DEFAULT_BASE_URL, DEFAULT_WORKERS};
use idsweep_core::{Config, ProgressContext, ShutdownToken, init_logging};

#[derive(Parser)]
#[command(name = "idsweep", version)]
#[command(about = "Parallel sequential-ID page dumper with resume support")]
struct Cli {
    /// Number of worker threads
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_WORKERS as u16,
        value_parser = clap::value_parser!(u16).range(1..=1024)
    )]
    threads: u16,

    /// Output root directory
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Start ID (default: checkpoint file, or the compiled-in origin)
    #[arg(short, long)]
    start_id: Option<u64>,

    /// End ID, exclusive (default: sweep until interrupted)
    #[arg(short, long)]
    end_id: Option<u64>,

    /// Page endpoint; the ID is appended as the final path segment
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Suppress info logs (only warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging (per-page save lines)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let progress = Arc::new(ProgressContext::new());
    let multi = if progress.is_tty() {
        Some(progress.multi())
    } else {
        None
    };
    init_logging(cli.quiet, cli.verbose, multi);

    let shutdown = ShutdownToken::new();
    if let Err(e) = setup_signal_handlers(&shutdown) {
        log::error!("cannot install signal handlers: {e}");
        return ExitCode::from(2);
    }

    let config = Config {
        out_dir: cli.out_dir,
        base_url: cli.base_url,
        start_id: cli.start_id,
        end_id: cli.end_id.unwrap_or(u64::MAX),
        workers: cli.threads as usize,
    };

    match idsweep_core::run(&config, &shutdown, &progress) {
        Ok(code) => code,
        Err(e) => {
            log::error!("fatal: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// First SIGINT/SIGTERM/SIGHUP requests a graceful stop; a second one
/// force-exits. SIGPIPE is swallowed so a dying pipe consumer cannot
/// kill the sweep mid-run.
fn setup_signal_handlers(shutdown: &ShutdownToken) -> Result<(), std::io::Error> {
    use signal_hook::consts::{SIGHUP, SIGINT, SIGPIPE, SIGTERM};

    // SAFETY: ShutdownToken::request and process::exit are
    // async-signal-safe
    unsafe {
        for sig in [SIGINT, SIGTERM, SIGHUP] {
            let token = shutdown.clone();
            signal_hook::low_level::register(sig, move || {
                if token.request() {
                    std::process::exit(130);
                }
            })?;
        }
        signal_hook::low_level::register(SIGPIPE, || {})?;
    }
    Ok(())
}
