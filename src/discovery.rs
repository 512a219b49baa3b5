//! File system scanner for discovering icons.
//!
//! Recursively walks a directory and yields every file whose name ends
//! with `icon.png`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// File name suffix that marks a file as an icon.
pub const ICON_SUFFIX: &str = "icon.png";

/// Lazy iterator over icon files below a root directory.
///
/// Symlinked files are yielded but symlinked directories are not entered,
/// so an icon is never reported under two paths. Entries that cannot be
/// read (permission denied) are skipped; walking continues with the next
/// sibling.
pub struct Icons {
    walker: Option<walkdir::IntoIter>,
    skipped: usize,
}

impl Icons {
    /// Number of entries skipped so far because they could not be read.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl Iterator for Icons {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.walker.as_mut()?.next()? {
                Ok(entry) => entry,
                Err(_) => {
                    self.skipped += 1;
                    continue;
                }
            };

            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if is_file && is_icon(entry.path()) {
                return Some(entry.into_path());
            }
        }
    }
}

/// Walk `root` for icon files.
///
/// A missing root yields nothing. Each call starts a fresh walk.
pub fn icons(root: impl AsRef<Path>) -> Icons {
    let root = root.as_ref();

    let walker = root
        .exists()
        .then(|| WalkDir::new(root).into_iter());

    Icons { walker, skipped: 0 }
}

/// Check whether a file name carries the icon suffix.
///
/// The match is exact and case-sensitive.
pub fn is_icon(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.ends_with(ICON_SUFFIX))
}
