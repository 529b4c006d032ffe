//! Logging setup with indicatif integration

use std::io::Write;

use indicatif::MultiProgress;

/// Logger that routes lines through a `MultiProgress` so they do not
/// tear the active progress display.
pub struct ProgressLogger {
    inner: env_logger::Logger,
    multi: MultiProgress,
}

impl log::Log for ProgressLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &log::Record) {
        if self.inner.enabled(record.metadata()) {
            let line = format!("[{:<5}] {}", record.level(), record.args());
            self.multi.suspend(|| eprintln!("{line}"));
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Initialize logging.
///
/// TTY mode (a `MultiProgress` is supplied) wraps the env_logger so log
/// lines and progress bars share stderr cleanly; non-TTY mode installs
/// a plain leveled format.
pub fn init_logging(quiet: bool, verbose: bool, multi: Option<&MultiProgress>) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));

    match multi {
        Some(multi) => {
            let logger = builder.build();
            let max_level = logger.filter();
            log::set_boxed_logger(Box::new(ProgressLogger {
                inner: logger,
                multi: multi.clone(),
            }))
            .expect("logger already installed");
            log::set_max_level(max_level);
        }
        None => {
            builder
                .format(|buf, record| writeln!(buf, "[{:<5}] {}", record.level(), record.args()))
                .init();
        }
    }
}
