//! Pipeline orchestration.
//!
//! Runs the full scan → build → emit → write pipeline. This is the only
//! module that both reads and writes the filesystem; everything between the
//! scan and the final write is pure, which keeps the pipeline testable
//! end to end with nothing but a temp directory.
//!
//! Two entry points:
//!
//! - [`generate`] — the whole pipeline, ending in an atomic write of the
//!   routes file.
//! - [`check`] — the same pipeline without the write, for validating a
//!   pages directory (missing root, component collisions) in CI or before
//!   a build.
//!
//! Both take an explicit [`GeneratorConfig`] rather than deriving paths
//! from their own location, so they can be embedded in a larger build step
//! or driven from tests with arbitrary roots. The binary in `main.rs` is a
//! thin wrapper that maps returned errors to a non-zero exit status.

use crate::config::GeneratorConfig;
use crate::emit;
use crate::routes::{self, RouteDescriptor, RouteError};
use crate::scan::{self, ScanError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Routes(#[from] RouteError),
    #[error("failed to write routes file: {0}")]
    Write(#[from] std::io::Error),
}

/// Result of a pipeline run, for output formatting.
#[derive(Debug)]
pub struct Summary {
    /// The route table, in emission order.
    pub routes: Vec<RouteDescriptor>,
    /// Where the routes file was (or would be) written.
    pub routes_file: PathBuf,
}

/// Scan and build the route table without writing anything.
pub fn check(config: &GeneratorConfig) -> Result<Summary, GenerateError> {
    let entries = scan::scan_pages(&config.pages_dir, &config.extension)?;
    let prefix = routes::import_prefix(&config.routes_file, &config.pages_dir);
    let routes = routes::build_routes(&entries, &prefix)?;
    Ok(Summary {
        routes,
        routes_file: config.routes_file.clone(),
    })
}

/// Run the full pipeline and overwrite the routes file.
///
/// The write goes through a temp file in the target directory followed by a
/// rename, so a failure mid-write leaves any previous routes file intact.
pub fn generate(config: &GeneratorConfig) -> Result<Summary, GenerateError> {
    let summary = check(config)?;
    let text = emit::emit_routes_module(&summary.routes);
    write_atomic(&summary.routes_file, &text)?;
    Ok(summary)
}

fn write_atomic(target: &Path, text: &str) -> std::io::Result<()> {
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}
