//! Categorized page storage — classify a body, write `<id>.html`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Day markers checked in the page body. "Day 2" is tested first, so a
/// page mentioning both days is filed under day 2.
const DAY2_MARKER: &[u8] = b"Day 2";
const DAY1_MARKER: &[u8] = b"Day 1";

/// Classification bucket, determining the destination directory
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Day1,
    Day2,
    Unknown,
}

impl Category {
    /// Classify a page body by its day marker
    pub fn detect(body: &[u8]) -> Self {
        if contains(body, DAY2_MARKER) {
            Self::Day2
        } else if contains(body, DAY1_MARKER) {
            Self::Day1
        } else {
            Self::Unknown
        }
    }

    /// Directory name under the output root
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Day1 => "day1",
            Self::Day2 => "day2",
            Self::Unknown => "misc",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Byte-wise substring search; bodies are not guaranteed to be UTF-8
fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Writes fetched pages into per-category directories under one root.
///
/// Paths are distinct per ID, so concurrent workers never write to the
/// same file within a run; a re-fetch of the same ID overwrites.
pub struct CategorySink {
    day1_dir: PathBuf,
    day2_dir: PathBuf,
    misc_dir: PathBuf,
}

impl CategorySink {
    /// Create the three category directories under `root` (idempotent)
    pub fn new(root: &Path) -> io::Result<Self> {
        let sink = Self {
            day1_dir: root.join(Category::Day1.dir_name()),
            day2_dir: root.join(Category::Day2.dir_name()),
            misc_dir: root.join(Category::Unknown.dir_name()),
        };
        fs::create_dir_all(&sink.day1_dir)?;
        fs::create_dir_all(&sink.day2_dir)?;
        fs::create_dir_all(&sink.misc_dir)?;
        Ok(sink)
    }

    /// Directory for unclassified pages; also hosts the checkpoint file
    pub fn misc_dir(&self) -> &Path {
        &self.misc_dir
    }

    fn category_dir(&self, category: Category) -> &Path {
        match category {
            Category::Day1 => &self.day1_dir,
            Category::Day2 => &self.day2_dir,
            Category::Unknown => &self.misc_dir,
        }
    }

    /// Classify and write one page as `<id>.html`, silently overwriting
    /// any earlier copy. Returns the resolved category.
    pub fn persist(&self, id: u64, body: &[u8]) -> io::Result<Category> {
        let category = Category::detect(body);
        match category {
            Category::Day1 | Category::Day2 => log::debug!("saving {category} page {id}"),
            Category::Unknown => log::error!("no day marker in page {id}"),
        }
        let path = self.category_dir(category).join(format!("{id}.html"));
        fs::write(path, body)?;
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_day1() {
        assert_eq!(Category::detect(b"<html>Day 1 pass</html>"), Category::Day1);
    }

    #[test]
    fn detect_day2() {
        assert_eq!(Category::detect(b"<html>Day 2 pass</html>"), Category::Day2);
    }

    #[test]
    fn detect_day2_wins_when_both_present() {
        assert_eq!(Category::detect(b"Day 1 and Day 2"), Category::Day2);
        assert_eq!(Category::detect(b"Day 2 and Day 1"), Category::Day2);
    }

    #[test]
    fn detect_unknown_without_markers() {
        assert_eq!(Category::detect(b"<html>sold out</html>"), Category::Unknown);
        assert_eq!(Category::detect(b""), Category::Unknown);
        // marker match is case-sensitive
        assert_eq!(Category::detect(b"day 1"), Category::Unknown);
    }

    #[test]
    fn detect_handles_non_utf8_bodies() {
        let mut body = vec![0xff, 0xfe, 0x00];
        body.extend_from_slice(b"Day 1");
        assert_eq!(Category::detect(&body), Category::Day1);
    }

    #[test]
    fn new_creates_category_dirs() {
        let root = tempfile::tempdir().unwrap();
        let sink = CategorySink::new(root.path()).unwrap();
        assert!(root.path().join("day1").is_dir());
        assert!(root.path().join("day2").is_dir());
        assert!(root.path().join("misc").is_dir());
        assert_eq!(sink.misc_dir(), root.path().join("misc"));
    }

    #[test]
    fn new_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        CategorySink::new(root.path()).unwrap();
        CategorySink::new(root.path()).unwrap();
    }

    #[test]
    fn persist_writes_body_verbatim_under_category() {
        let root = tempfile::tempdir().unwrap();
        let sink = CategorySink::new(root.path()).unwrap();

        let category = sink.persist(1000, b"ticket Day 1").unwrap();
        assert_eq!(category, Category::Day1);

        let path = root.path().join("day1").join("1000.html");
        assert_eq!(fs::read(path).unwrap(), b"ticket Day 1");
    }

    #[test]
    fn persist_unknown_goes_to_misc() {
        let root = tempfile::tempdir().unwrap();
        let sink = CategorySink::new(root.path()).unwrap();

        assert_eq!(sink.persist(5, b"no markers").unwrap(), Category::Unknown);
        assert!(root.path().join("misc").join("5.html").exists());
    }

    #[test]
    fn persist_overwrites_last_write_wins() {
        let root = tempfile::tempdir().unwrap();
        let sink = CategorySink::new(root.path()).unwrap();

        sink.persist(7, b"Day 2 first").unwrap();
        sink.persist(7, b"Day 2 second").unwrap();

        let dir: Vec<_> = fs::read_dir(root.path().join("day2"))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(dir.len(), 1);
        let path = root.path().join("day2").join("7.html");
        assert_eq!(fs::read(path).unwrap(), b"Day 2 second");
    }
}
