//! CLI output formatting.
//!
//! Output is information-centric, not file-centric: the primary display for
//! every route is its derived identity — positional index, URL path, and
//! component name — with the import path shown as secondary context via an
//! indented `Source:` line.
//!
//! ```text
//! Routes
//! 001 / → Home
//!     Source: ./pages/home
//! 002 /about → About
//!     Source: ./pages/about
//!
//! Generated 2 routes → src/routes.tsx
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::generate::Summary;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn route_lines(summary: &Summary) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Routes".to_string());

    if summary.routes.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, route) in summary.routes.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            route.route_path,
            route.component_name
        ));
        lines.push(format!("    Source: {}", route.import_path));
    }
    lines
}

/// Format `generate` output: the route table plus what was written where.
pub fn format_generate_output(summary: &Summary) -> Vec<String> {
    let mut lines = route_lines(summary);
    lines.push(String::new());
    lines.push(format!(
        "Generated {} route{} → {}",
        summary.routes.len(),
        if summary.routes.len() == 1 { "" } else { "s" },
        summary.routes_file.display()
    ));
    lines
}

/// Format `check` output: the route table, nothing written.
pub fn format_check_output(summary: &Summary) -> Vec<String> {
    let mut lines = route_lines(summary);
    lines.push(String::new());
    lines.push(format!(
        "Checked {} route{} (nothing written)",
        summary.routes.len(),
        if summary.routes.len() == 1 { "" } else { "s" },
    ));
    lines
}

pub fn print_generate_output(summary: &Summary) {
    for line in format_generate_output(summary) {
        println!("{line}");
    }
}

pub fn print_check_output(summary: &Summary) {
    for line in format_check_output(summary) {
        println!("{line}");
    }
}
