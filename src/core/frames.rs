//! # Frame Loading
//!
//! A frame set is a directory of plain text files named `<prefix>_<N>`,
//! numbered from 1. Loading happens once at startup:
//!
//! ```text
//! movie/
//! ├── addition_1   ─┐
//! ├── addition_2    ├─▶ FrameSet [0, 1, 2]
//! ├── addition_3   ─┘
//! ├── notes.txt        (ignored: wrong prefix)
//! └── addition_x       (ignored: not a number)
//! ```
//!
//! The scan only decides how many frames there are (the highest index
//! seen, at least 1). Every index from 1 to that maximum is then read.
//! What happens when one of them is missing is decided by [`GapPolicy`].

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Separator between the prefix and the frame number in a file name.
pub const INDEX_SEPARATOR: char = '_';

/// One block of text shown on screen at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame(String);

impl Frame {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn content(&self) -> &str {
        &self.0
    }
}

/// The ordered, never-empty list of frames being viewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    frames: Vec<Frame>,
}

impl FrameSet {
    /// Returns `None` for an empty list: navigation needs at least one frame.
    pub fn new(frames: Vec<Frame>) -> Option<Self> {
        if frames.is_empty() {
            None
        } else {
            Some(Self { frames })
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }
}

/// What to do when an index between 1 and the highest frame has no file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GapPolicy {
    /// Abort loading with [`LoadError::MissingFrame`].
    #[default]
    Fail,
    /// Show an empty frame in place of the missing file.
    Blank,
}

#[derive(Debug)]
pub enum LoadError {
    /// The frame directory itself could not be listed.
    ReadDir { dir: PathBuf, source: io::Error },
    /// An expected frame file is absent or unreadable.
    MissingFrame { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::ReadDir { dir, source } => {
                write!(f, "cannot list frame directory {}: {source}", dir.display())
            }
            LoadError::MissingFrame { path, source } => {
                write!(f, "cannot read frame {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::ReadDir { source, .. } | LoadError::MissingFrame { source, .. } => {
                Some(source)
            }
        }
    }
}

/// Extracts the frame number from a file name, or `None` if the name
/// doesn't follow the `<prefix>_<N>` convention.
pub fn parse_frame_index(name: &str, prefix: &str) -> Option<usize> {
    if name.len() <= prefix.len() + 1 {
        return None;
    }
    name.strip_prefix(prefix)?
        .strip_prefix(INDEX_SEPARATOR)?
        .parse()
        .ok()
}

/// File name of frame `index` (1-based).
pub fn frame_file_name(prefix: &str, index: usize) -> String {
    format!("{prefix}{INDEX_SEPARATOR}{index}")
}

/// Result of scanning a frame directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameScan {
    /// Highest frame number present, never less than 1.
    pub end: usize,
    /// How many entries matched `<prefix>_<N>`.
    pub found: usize,
}

/// Lists `dir` and finds the highest `<prefix>_<N>` index in it.
pub fn scan_frames(dir: &Path, prefix: &str) -> Result<FrameScan, LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::ReadDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut scan = FrameScan { end: 1, found: 0 };
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::ReadDir {
            dir: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            debug!("Skipping non UTF-8 entry {:?}", entry.path());
            continue;
        };
        match parse_frame_index(name, prefix) {
            Some(index) => {
                scan.end = scan.end.max(index);
                scan.found += 1;
            }
            None => debug!("Skipping {name}: not a {prefix} frame"),
        }
    }
    Ok(scan)
}

/// Loads frames `1..=N` of `prefix` from `dir`, where N is the highest
/// index found by [`scan_frames`].
///
/// The list grows one file at a time, so a stray huge index costs nothing
/// until the first missing file. Under [`GapPolicy::Blank`], loading fails
/// once the blank frames would outnumber the files actually found.
pub fn load_frames(dir: &Path, prefix: &str, gaps: GapPolicy) -> Result<FrameSet, LoadError> {
    let scan = scan_frames(dir, prefix)?;
    info!(
        "Loading {} frame(s) with prefix {prefix:?} from {} ({} found)",
        scan.end,
        dir.display(),
        scan.found
    );

    let mut frames = Vec::new();
    let mut blanks = 0;
    for index in 1..=scan.end {
        let path = dir.join(frame_file_name(prefix, index));
        match fs::read_to_string(&path) {
            Ok(content) => frames.push(Frame::new(content)),
            Err(e)
                if e.kind() == io::ErrorKind::NotFound
                    && gaps == GapPolicy::Blank
                    && blanks < scan.found =>
            {
                warn!("Frame {} is missing, showing it blank", path.display());
                blanks += 1;
                frames.push(Frame::new(String::new()));
            }
            Err(source) => return Err(LoadError::MissingFrame { path, source }),
        }
    }

    // end >= 1, so at least one frame was pushed or we returned early.
    FrameSet::new(frames).ok_or_else(|| LoadError::MissingFrame {
        path: dir.join(frame_file_name(prefix, 1)),
        source: io::Error::from(io::ErrorKind::NotFound),
    })
}

/// Copies every regular file in `source` into `dest`, creating `dest` if
/// needed. Returns how many files were copied.
pub fn mirror_frames(source: &Path, dest: &Path) -> io::Result<usize> {
    fs::create_dir_all(dest)?;
    let mut copied = 0;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        fs::copy(entry.path(), dest.join(entry.file_name()))?;
        copied += 1;
    }
    info!("Mirrored {copied} file(s) from {} to {}", source.display(), dest.display());
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::frame_dir;

    #[test]
    fn test_parse_frame_index_accepts_prefixed_number() {
        assert_eq!(parse_frame_index("addition_1", "addition"), Some(1));
        assert_eq!(parse_frame_index("addition_42", "addition"), Some(42));
    }

    #[test]
    fn test_parse_frame_index_rejects_short_names() {
        // "addition_" is exactly prefix + separator: nothing left to parse
        assert_eq!(parse_frame_index("addition_", "addition"), None);
        assert_eq!(parse_frame_index("add", "addition"), None);
    }

    #[test]
    fn test_parse_frame_index_rejects_other_prefixes() {
        assert_eq!(parse_frame_index("subtraction_1", "addition"), None);
        assert_eq!(parse_frame_index("Addition_1", "addition"), None);
    }

    #[test]
    fn test_parse_frame_index_rejects_non_numeric_suffix() {
        assert_eq!(parse_frame_index("addition_one", "addition"), None);
        assert_eq!(parse_frame_index("addition_1.txt", "addition"), None);
        assert_eq!(parse_frame_index("addition_-3", "addition"), None);
    }

    #[test]
    fn test_parse_frame_index_requires_underscore_separator() {
        assert_eq!(parse_frame_index("addition-3", "addition"), None);
        assert_eq!(parse_frame_index("addition33", "addition"), None);
    }

    #[test]
    fn test_parse_frame_index_longer_prefix_sharing_stem() {
        // "frame_extra_2" starts with "frame" + '_' but "extra_2" isn't a number
        assert_eq!(parse_frame_index("frame_extra_2", "frame"), None);
        assert_eq!(parse_frame_index("frame_extra_2", "frame_extra"), Some(2));
    }

    #[test]
    fn test_frame_file_name() {
        assert_eq!(frame_file_name("addition", 3), "addition_3");
    }

    #[test]
    fn test_frame_set_rejects_empty() {
        assert!(FrameSet::new(Vec::new()).is_none());
    }

    #[test]
    fn test_scan_ignores_unrelated_files() {
        let dir = frame_dir(&[
            ("addition_1", "a"),
            ("addition_2", "b"),
            ("addition_x", "junk"),
            ("notes.txt", "junk"),
            ("subtraction_9", "junk"),
        ]);
        let scan = scan_frames(dir.path(), "addition").unwrap();
        assert_eq!(scan, FrameScan { end: 2, found: 2 });
    }

    #[test]
    fn test_scan_empty_directory_expects_one_frame() {
        let dir = frame_dir(&[]);
        let scan = scan_frames(dir.path(), "addition").unwrap();
        assert_eq!(scan, FrameScan { end: 1, found: 0 });
    }

    #[test]
    fn test_scan_missing_directory_is_read_dir_error() {
        let dir = frame_dir(&[]);
        let missing = dir.path().join("nope");
        let err = scan_frames(&missing, "addition").unwrap_err();
        assert!(matches!(err, LoadError::ReadDir { .. }));
    }

    #[test]
    fn test_load_frames_in_index_order() {
        // Numeric, not lexical: 10 comes after 9
        let entries: Vec<(String, String)> = (1..=10)
            .map(|i| (format!("slide_{i}"), format!("frame {i}")))
            .collect();
        let refs: Vec<(&str, &str)> = entries
            .iter()
            .map(|(n, c)| (n.as_str(), c.as_str()))
            .collect();
        let dir = frame_dir(&refs);

        let frames = load_frames(dir.path(), "slide", GapPolicy::Fail).unwrap();
        assert_eq!(frames.len(), 10);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame.content(), format!("frame {}", i + 1));
        }
    }

    #[test]
    fn test_load_frames_keeps_content_verbatim() {
        let dir = frame_dir(&[("addition_1", "  1\n+ 2\n---\n  3\n\n")]);
        let frames = load_frames(dir.path(), "addition", GapPolicy::Fail).unwrap();
        assert_eq!(frames.get(0).unwrap().content(), "  1\n+ 2\n---\n  3\n\n");
    }

    #[test]
    fn test_load_frames_gap_fails_on_first_missing_index() {
        let dir = frame_dir(&[("frame_1", "one"), ("frame_2", "two"), ("frame_5", "five")]);
        let err = load_frames(dir.path(), "frame", GapPolicy::Fail).unwrap_err();
        match err {
            LoadError::MissingFrame { path, source } => {
                assert_eq!(path, dir.path().join("frame_3"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected MissingFrame, got {other:?}"),
        }
    }

    #[test]
    fn test_load_frames_gap_blank_fills_missing_indices() {
        let dir = frame_dir(&[("frame_1", "one"), ("frame_2", "two"), ("frame_5", "five")]);
        let frames = load_frames(dir.path(), "frame", GapPolicy::Blank).unwrap();
        let contents: Vec<&str> = frames.iter().map(Frame::content).collect();
        assert_eq!(contents, vec!["one", "two", "", "", "five"]);
    }

    #[test]
    fn test_load_frames_huge_index_fails_at_first_gap() {
        let dir = frame_dir(&[("addition_1", "one"), ("addition_99999999999999999", "stray")]);
        let err = load_frames(dir.path(), "addition", GapPolicy::Fail).unwrap_err();
        assert!(
            matches!(err, LoadError::MissingFrame { ref path, .. } if path.ends_with("addition_2"))
        );
    }

    #[test]
    fn test_load_frames_huge_index_blank_stops_padding() {
        // Two files found, so at most two blanks: addition_2 and _3, then _4 fails
        let dir = frame_dir(&[("addition_1", "one"), ("addition_99999999999999999", "stray")]);
        let err = load_frames(dir.path(), "addition", GapPolicy::Blank).unwrap_err();
        assert!(
            matches!(err, LoadError::MissingFrame { ref path, .. } if path.ends_with("addition_4"))
        );
    }

    #[test]
    fn test_load_frames_empty_directory_misses_first_frame() {
        let dir = frame_dir(&[("readme", "not a frame")]);
        let err = load_frames(dir.path(), "addition", GapPolicy::Fail).unwrap_err();
        assert!(
            matches!(err, LoadError::MissingFrame { ref path, .. } if path.ends_with("addition_1"))
        );
    }

    #[test]
    fn test_load_error_display_names_path() {
        let err = LoadError::MissingFrame {
            path: PathBuf::from("movie/addition_3"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("cannot read frame movie/addition_3"));
    }

    #[test]
    fn test_mirror_frames_copies_files_only() {
        let src = frame_dir(&[("addition_1", "Hello"), ("notes.txt", "n")]);
        fs::create_dir(src.path().join("subdir")).unwrap();
        let dest = frame_dir(&[]);
        let target = dest.path().join("mirror");

        let copied = mirror_frames(src.path(), &target).unwrap();
        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(target.join("addition_1")).unwrap(), "Hello");
        assert!(!target.join("subdir").exists());
    }
}
