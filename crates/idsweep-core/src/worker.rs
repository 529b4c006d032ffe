//! Worker loop — claim an ID, fetch, classify, persist, repeat

use indicatif::ProgressBar;

use crate::cursor::IdCursor;
use crate::fetch::Fetcher;
use crate::shutdown::ShutdownToken;
use crate::sink::CategorySink;
use crate::stats::RunStats;

/// One fetch worker. Owns its HTTP session for its whole lifetime;
/// everything else is shared with the other workers.
pub struct Worker<'a> {
    fetcher: Fetcher,
    cursor: &'a IdCursor,
    sink: &'a CategorySink,
    stats: &'a RunStats,
    shutdown: &'a ShutdownToken,
    end_id: u64,
    progress: ProgressBar,
}

impl<'a> Worker<'a> {
    pub fn new(
        fetcher: Fetcher,
        cursor: &'a IdCursor,
        sink: &'a CategorySink,
        stats: &'a RunStats,
        shutdown: &'a ShutdownToken,
        end_id: u64,
        progress: ProgressBar,
    ) -> Self {
        Self {
            fetcher,
            cursor,
            sink,
            stats,
            shutdown,
            end_id,
            progress,
        }
    }

    /// Consume IDs until the end bound, a shutdown request, or a
    /// transport failure (which stops this worker only). HTTP-level
    /// failures and persistence errors never stop the loop.
    pub fn run(&self) {
        while !self.shutdown.is_requested() {
            let id = self.cursor.next();
            if id >= self.end_id {
                break;
            }

            let page = match self.fetcher.fetch(id) {
                Ok(page) => page,
                Err(e) => {
                    self.stats.record_transport_error();
                    log::error!("fetch {id} failed: {e}; stopping this worker");
                    break;
                }
            };
            self.progress.inc(1);

            match page.status {
                200 => match self.sink.persist(id, &page.body) {
                    Ok(category) => self.stats.record_saved(category),
                    Err(e) => {
                        self.stats.record_write_error();
                        log::error!("cannot save page {id}: {e}");
                    }
                },
                404 => self.stats.record_not_found(),
                status => {
                    self.stats.record_unexpected_status();
                    log::warn!("unexpected HTTP {status} for page {id}");
                }
            }
        }
    }
}
