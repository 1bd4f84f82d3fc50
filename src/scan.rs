//! Pages directory scanning.
//!
//! Stage 1 of the routegen pipeline. Lists the immediate children of the
//! pages directory — one level only, no recursion — and classifies each as a
//! page or as ignorable.
//!
//! ## Directory Structure
//!
//! ```text
//! src/pages/                   # Pages root
//! ├── home.tsx                 # Page file → route "/"
//! ├── about.tsx                # Page file → route "/about"
//! ├── user-profile.tsx         # Page file → route "/user-profile"
//! ├── blog/                    # Index-bearing directory → route "/blog"
//! │   ├── index.tsx            # Makes blog/ a page
//! │   └── post.tsx             # Not scanned (single level only)
//! ├── drafts/                  # No index file → skipped silently
//! │   └── notes.tsx
//! └── styles.css               # Wrong extension → skipped silently
//! ```
//!
//! ## Classification Rules
//!
//! - A file with the recognized extension is a page; its name is the stem.
//! - A directory is a page iff it directly contains `index.<ext>`.
//! - Everything else is skipped with no diagnostic.
//!
//! ## Ordering
//!
//! Entries are sorted lexicographically by name before they are returned.
//! Raw `read_dir` order is platform-dependent; sorting here is what makes
//! the generated file byte-identical across runs and machines.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("pages directory not found: {0}")]
    MissingPagesDir(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// How a page entry exists on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// A single `name.<ext>` file in the pages root.
    File,
    /// A `name/` directory containing `index.<ext>`.
    IndexDir,
}

/// One discovered page: its base name (extension already stripped for files)
/// and how it exists on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub name: String,
    pub kind: PageKind,
}

impl PageEntry {
    /// The entry as it appears on disk, for diagnostics:
    /// `about.tsx` for files, `blog/index.tsx` for index directories.
    pub fn source(&self, extension: &str) -> String {
        match self.kind {
            PageKind::File => format!("{}.{}", self.name, extension),
            PageKind::IndexDir => format!("{}/index.{}", self.name, extension),
        }
    }
}

/// Scan the pages directory and return its page entries, sorted by name.
///
/// A missing pages directory is fatal — there is no meaningful empty output
/// for a root that does not exist, and a typo in the configured path should
/// not silently generate a routeless module.
pub fn scan_pages(pages_dir: &Path, extension: &str) -> Result<Vec<PageEntry>, ScanError> {
    if !pages_dir.is_dir() {
        return Err(ScanError::MissingPagesDir(pages_dir.to_path_buf()));
    }

    let index_name = format!("index.{extension}");
    let mut entries = Vec::new();

    for dir_entry in fs::read_dir(pages_dir)? {
        let path = dir_entry?.path();
        if path.is_dir() {
            if path.join(&index_name).is_file()
                && let Some(name) = path.file_name()
            {
                entries.push(PageEntry {
                    name: name.to_string_lossy().into_owned(),
                    kind: PageKind::IndexDir,
                });
            }
        } else if has_extension(&path, extension)
            && let Some(stem) = path.file_stem()
        {
            entries.push(PageEntry {
                name: stem.to_string_lossy().into_owned(),
                kind: PageKind::File,
            });
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy() == extension)
        .unwrap_or(false)
}
