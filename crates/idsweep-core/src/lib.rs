//! idsweep core - parallel sweep of a sequential page-ID space
//!
//! A fixed pool of workers shares a strictly increasing atomic cursor
//! over an ID range. Each worker fetches the page for its claimed ID,
//! classifies it by day marker, and writes it into a per-category
//! directory; the cursor position is checkpointed at the end of the run
//! so an interrupted sweep resumes where it left off.

pub mod checkpoint;
pub mod config;
pub mod cursor;
pub mod fetch;
pub mod logging;
pub mod progress;
pub mod runner;
pub mod shutdown;
pub mod sink;
pub mod stats;
pub mod worker;

// Re-exports for convenience
pub use checkpoint::Checkpoint;
pub use config::Config;
pub use cursor::IdCursor;
pub use fetch::{FetchError, Fetcher, Page};
pub use logging::init_logging;
pub use progress::{ProgressContext, SharedProgress};
pub use runner::run;
pub use shutdown::ShutdownToken;
pub use sink::{Category, CategorySink};
pub use stats::RunStats;
