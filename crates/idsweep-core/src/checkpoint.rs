//! Resume checkpoint — the next ID to dispense, as decimal text

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Checkpoint filename inside the misc output directory
const CHECKPOINT_FILE: &str = "last_id";

/// Single-value store holding the cursor position between runs.
///
/// Owned by the dispatcher: read once at startup (unless an explicit
/// start ID overrides it), overwritten once at the end of the run.
pub struct Checkpoint {
    path: PathBuf,
}

impl Checkpoint {
    /// Checkpoint located in `dir` (the misc output directory)
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(CHECKPOINT_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved cursor position. A missing or malformed file is
    /// not an error — there is just nothing to resume from.
    pub fn load(&self) -> Option<u64> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    log::warn!("cannot read checkpoint {}: {e}", self.path.display());
                }
                return None;
            }
        };
        match text.trim().parse() {
            Ok(id) => Some(id),
            Err(_) => {
                log::warn!("ignoring malformed checkpoint {}", self.path.display());
                None
            }
        }
    }

    /// Overwrite the checkpoint with `next_id`
    pub fn save(&self, next_id: u64) -> io::Result<()> {
        fs::write(&self.path, format!("{next_id}\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Checkpoint::in_dir(dir.path()).load(), None);
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let checkpoint = Checkpoint::in_dir(dir.path());
        for value in [0, 1, 16_816_356_000_000, u64::MAX] {
            checkpoint.save(value).unwrap();
            assert_eq!(checkpoint.load(), Some(value));
        }
    }

    #[test]
    fn save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let checkpoint = Checkpoint::in_dir(dir.path());
        checkpoint.save(100).unwrap();
        checkpoint.save(200).unwrap();
        assert_eq!(checkpoint.load(), Some(200));
    }

    #[test]
    fn saved_format_is_decimal_with_newline() {
        let dir = tempfile::tempdir().unwrap();
        let checkpoint = Checkpoint::in_dir(dir.path());
        checkpoint.save(1003).unwrap();
        let text = fs::read_to_string(dir.path().join("last_id")).unwrap();
        assert_eq!(text, "1003\n");
    }

    #[test]
    fn load_tolerates_missing_newline() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("last_id"), "42").unwrap();
        assert_eq!(Checkpoint::in_dir(dir.path()).load(), Some(42));
    }

    #[test]
    fn load_malformed_is_none() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("last_id"), "not a number\n").unwrap();
        assert_eq!(Checkpoint::in_dir(dir.path()).load(), None);
    }
}
