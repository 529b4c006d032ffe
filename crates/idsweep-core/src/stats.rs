//! Shared run counters and the end-of-run summary

use std::sync::atomic::{AtomicU64, Ordering};

use comfy_table::{Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};

use crate::sink::Category;

/// Outcome counters updated by all workers.
///
/// Relaxed ordering throughout — these are totals for the final
/// summary, with no ordering relationship to the work itself.
#[derive(Debug, Default)]
pub struct RunStats {
    day1: AtomicU64,
    day2: AtomicU64,
    unclassified: AtomicU64,
    not_found: AtomicU64,
    unexpected_status: AtomicU64,
    write_errors: AtomicU64,
    transport_errors: AtomicU64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_saved(&self, category: Category) {
        let counter = match category {
            Category::Day1 => &self.day1,
            Category::Day2 => &self.day2,
            Category::Unknown => &self.unclassified,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unexpected_status(&self) {
        self.unexpected_status.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_write_error(&self) {
        self.write_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_transport_error(&self) {
        self.transport_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn pages_saved(&self) -> u64 {
        self.day1.load(Ordering::Relaxed)
            + self.day2.load(Ordering::Relaxed)
            + self.unclassified.load(Ordering::Relaxed)
    }

    /// Summary table for TTY runs
    pub fn print(&self) {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_header(vec![
                Cell::new("Outcome").fg(Color::Cyan),
                Cell::new("Pages").fg(Color::Cyan),
            ]);

        table.add_row(vec![
            "saved (day1)".to_string(),
            self.day1.load(Ordering::Relaxed).to_string(),
        ]);
        table.add_row(vec![
            "saved (day2)".to_string(),
            self.day2.load(Ordering::Relaxed).to_string(),
        ]);
        table.add_row(vec![
            "saved (unclassified)".to_string(),
            self.unclassified.load(Ordering::Relaxed).to_string(),
        ]);
        table.add_row(vec![
            "not found".to_string(),
            self.not_found.load(Ordering::Relaxed).to_string(),
        ]);
        table.add_row(vec![
            "unexpected status".to_string(),
            self.unexpected_status.load(Ordering::Relaxed).to_string(),
        ]);
        table.add_row(vec![
            "write errors".to_string(),
            self.write_errors.load(Ordering::Relaxed).to_string(),
        ]);
        table.add_row(vec![
            "worker transport failures".to_string(),
            self.transport_errors.load(Ordering::Relaxed).to_string(),
        ]);

        eprintln!("\n{table}");
    }

    /// Summary log line for non-TTY runs
    pub fn log(&self) {
        log::info!(
            "sweep summary: {} saved (day1 {}, day2 {}, unclassified {}), \
             {} not found, {} unexpected statuses, {} write errors, \
             {} worker transport failures",
            self.pages_saved(),
            self.day1.load(Ordering::Relaxed),
            self.day2.load(Ordering::Relaxed),
            self.unclassified.load(Ordering::Relaxed),
            self.not_found.load(Ordering::Relaxed),
            self.unexpected_status.load(Ordering::Relaxed),
            self.write_errors.load(Ordering::Relaxed),
            self.transport_errors.load(Ordering::Relaxed),
        );
    }
}
