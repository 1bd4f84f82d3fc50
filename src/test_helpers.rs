//! Shared test utilities for the routegen test suite.
//!
//! Provides a standard pages fixture, entry/descriptor constructors, and
//! bulk extractors used across the scan, routes, and generate tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = pages_fixture();
//! let summary = generate(&fixture_config(tmp.path())).unwrap();
//! assert_eq!(route_paths(&summary.routes), vec!["/about", "/blog", "/", "/user-profile"]);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::config::GeneratorConfig;
use crate::routes::RouteDescriptor;
use crate::scan::{PageEntry, PageKind};

// =========================================================================
// Fixture setup
// =========================================================================

/// Build the standard pages fixture in a temp directory:
///
/// ```text
/// src/pages/
/// ├── home.tsx              → "/"
/// ├── about.tsx             → "/about"
/// ├── user-profile.tsx      → "/user-profile"
/// ├── blog/index.tsx        → "/blog"
/// ├── drafts/notes.tsx      (no index — skipped)
/// └── styles.css            (wrong extension — skipped)
/// ```
pub fn pages_fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let pages = tmp.path().join("src/pages");
    fs::create_dir_all(&pages).unwrap();

    write_page(&pages, "home.tsx");
    write_page(&pages, "about.tsx");
    write_page(&pages, "user-profile.tsx");
    write_page(&pages, "styles.css");

    let blog = pages.join("blog");
    fs::create_dir_all(&blog).unwrap();
    write_page(&blog, "index.tsx");

    let drafts = pages.join("drafts");
    fs::create_dir_all(&drafts).unwrap();
    write_page(&drafts, "notes.tsx");

    tmp
}

/// Write a placeholder page module. The scanner only looks at names, so the
/// content is a minimal stub.
pub fn write_page(dir: &Path, name: &str) {
    fs::write(dir.join(name), "export default function Page() {}\n").unwrap();
}

/// Default config resolved against a fixture root.
pub fn fixture_config(root: &Path) -> GeneratorConfig {
    GeneratorConfig::default().resolve_at(root)
}

// =========================================================================
// Entry and descriptor constructors
// =========================================================================

pub fn file_entry(name: &str) -> PageEntry {
    PageEntry {
        name: name.to_string(),
        kind: PageKind::File,
    }
}

pub fn index_dir_entry(name: &str) -> PageEntry {
    PageEntry {
        name: name.to_string(),
        kind: PageKind::IndexDir,
    }
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All entry names in scan order.
pub fn entry_names(entries: &[PageEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

/// All route paths in table order.
pub fn route_paths(routes: &[RouteDescriptor]) -> Vec<&str> {
    routes.iter().map(|r| r.route_path.as_str()).collect()
}

/// Find a route by path. Panics with the available paths on a miss.
pub fn find_route<'a>(routes: &'a [RouteDescriptor], path: &str) -> &'a RouteDescriptor {
    routes
        .iter()
        .find(|r| r.route_path == path)
        .unwrap_or_else(|| {
            let paths = route_paths(routes);
            panic!("route '{path}' not found. Available: {paths:?}")
        })
}
