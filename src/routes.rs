//! Route descriptor building.
//!
//! Stage 2 of the routegen pipeline. Turns scanned [`PageEntry`] values into
//! [`RouteDescriptor`]s by applying the naming transforms and resolving each
//! page's import path. Pure — no filesystem access; the scanner has already
//! said everything the builder needs to know.
//!
//! ## Collision Detection
//!
//! Because `-` and `.` both separate words in component names, distinct
//! pages can normalize to the same identifier (`user-profile.tsx` and
//! `user.profile.tsx` both become `UserProfile`). Emitting both would
//! produce two same-named import bindings that only fail later, in the
//! consumer's compiler, far from the cause. The builder rejects the
//! collision here with both offending entries named.

use crate::naming;
use crate::scan::PageEntry;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("pages '{first}' and '{second}' both produce component '{name}'")]
    ComponentCollision {
        name: String,
        first: String,
        second: String,
    },
}

/// One row of the route table: URL path, component identifier, and the
/// module path the component is imported from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    pub route_path: String,
    pub component_name: String,
    pub import_path: String,
}

/// Build one descriptor per page entry, preserving entry order.
///
/// `prefix` is the module path from the generated file's directory to the
/// pages directory (see [`import_prefix`]). Directory pages import the
/// directory itself — the bundler resolves `index` implicitly — and file
/// pages import the stem without extension, so both kinds produce the same
/// `{prefix}/{name}` shape.
pub fn build_routes(
    entries: &[PageEntry],
    prefix: &str,
) -> Result<Vec<RouteDescriptor>, RouteError> {
    let mut seen: HashMap<String, &PageEntry> = HashMap::new();
    let mut routes = Vec::with_capacity(entries.len());

    for entry in entries {
        let component = naming::component_name(&entry.name);
        if let Some(previous) = seen.insert(component.clone(), entry) {
            return Err(RouteError::ComponentCollision {
                name: component,
                first: previous.name.clone(),
                second: entry.name.clone(),
            });
        }
        routes.push(RouteDescriptor {
            route_path: naming::route_path(&entry.name),
            component_name: component,
            import_path: format!("{prefix}/{}", entry.name),
        });
    }

    Ok(routes)
}

/// Compute the module import prefix from the generated file's directory to
/// the pages directory.
///
/// - `src/routes.tsx` + `src/pages` → `./pages`
/// - `src/generated/routes.tsx` + `src/pages` → `../pages`
///
/// Paths are compared component-wise from their shared prefix; no
/// canonicalization happens, so both should be expressed relative to the
/// same root (the orchestrator guarantees this).
pub fn import_prefix(routes_file: &Path, pages_dir: &Path) -> String {
    let from: Vec<_> = routes_file
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .components()
        .collect();
    let to: Vec<_> = pages_dir.components().collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = vec!["..".to_string(); from.len() - common];
    parts.extend(
        to[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    if parts.first().is_some_and(|p| p == "..") {
        parts.join("/")
    } else {
        format!("./{}", parts.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{file_entry, index_dir_entry};

    #[test]
    fn one_descriptor_per_entry_in_order() {
        let entries = vec![
            file_entry("about"),
            index_dir_entry("blog"),
            file_entry("home"),
        ];
        let routes = build_routes(&entries, "./pages").unwrap();

        let paths: Vec<&str> = routes.iter().map(|r| r.route_path.as_str()).collect();
        assert_eq!(paths, vec!["/about", "/blog", "/"]);
    }

    #[test]
    fn file_page_descriptor() {
        let routes = build_routes(&[file_entry("about")], "./pages").unwrap();
        assert_eq!(
            routes[0],
            RouteDescriptor {
                route_path: "/about".into(),
                component_name: "About".into(),
                import_path: "./pages/about".into(),
            }
        );
    }

    #[test]
    fn index_dir_imports_the_directory() {
        let routes = build_routes(&[index_dir_entry("blog")], "./pages").unwrap();
        assert_eq!(routes[0].import_path, "./pages/blog");
        assert_eq!(routes[0].component_name, "Blog");
    }

    #[test]
    fn dashed_name_becomes_pascal_case() {
        let routes = build_routes(&[file_entry("user-profile")], "./pages").unwrap();
        assert_eq!(routes[0].component_name, "UserProfile");
        assert_eq!(routes[0].route_path, "/user-profile");
        assert_eq!(routes[0].import_path, "./pages/user-profile");
    }

    #[test]
    fn component_collision_is_error() {
        let entries = vec![file_entry("user-profile"), file_entry("user.profile")];
        let err = build_routes(&entries, "./pages").unwrap_err();

        let RouteError::ComponentCollision {
            name,
            first,
            second,
        } = err;
        assert_eq!(name, "UserProfile");
        assert_eq!(first, "user-profile");
        assert_eq!(second, "user.profile");
    }

    #[test]
    fn collision_across_kinds_is_error() {
        let entries = vec![index_dir_entry("blog"), file_entry("blog")];
        assert!(build_routes(&entries, "./pages").is_err());
    }

    #[test]
    fn empty_entries_build_empty_table() {
        assert!(build_routes(&[], "./pages").unwrap().is_empty());
    }

    #[test]
    fn sibling_pages_dir_prefix() {
        let prefix = import_prefix(Path::new("src/routes.tsx"), Path::new("src/pages"));
        assert_eq!(prefix, "./pages");
    }

    #[test]
    fn nested_routes_file_walks_up() {
        let prefix = import_prefix(Path::new("src/generated/routes.tsx"), Path::new("src/pages"));
        assert_eq!(prefix, "../pages");
    }

    #[test]
    fn disjoint_roots_walk_fully_up() {
        let prefix = import_prefix(Path::new("gen/routes.tsx"), Path::new("app/pages"));
        assert_eq!(prefix, "../app/pages");
    }

    #[test]
    fn entry_kind_does_not_change_import_shape() {
        let file = build_routes(&[file_entry("about")], "./pages").unwrap();
        let dir = build_routes(&[index_dir_entry("about")], "./pages").unwrap();
        assert_eq!(file[0].import_path, dir[0].import_path);
    }
}
