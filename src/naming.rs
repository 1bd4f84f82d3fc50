//! Route path and component identifier derivation.
//!
//! Page entries map to routes through two pure transforms: the base name
//! becomes a URL path ([`route_path`]) and a PascalCase component identifier
//! ([`component_name`]). Both are total over valid entry names and perform
//! no filesystem access, so the mapping rules live in one place and can be
//! tested without fixtures.
//!
//! ## Naming Convention
//!
//! - `home.tsx` → route `/`, component `Home` (the root page is special-cased)
//! - `about.tsx` → route `/about`, component `About`
//! - `blog/index.tsx` → route `/blog`, component `Blog`
//! - `user-profile.tsx` → route `/user-profile`, component `UserProfile`
//!
//! Dashes and periods both act as word separators for the component name.
//! Two names that differ only in separator (`user-profile`, `user.profile`)
//! therefore collide on the identifier; the route builder rejects that case.

/// Derive a URL route path from a page base name.
///
/// Strips a trailing `.tsx` extension if present, then a trailing `index`
/// suffix (a bare index file reduces to the empty string, i.e. the root).
/// The name `home` maps to `/`; anything else is prefixed with `/`.
///
/// - `"home"` → `"/"`
/// - `"about"` → `"/about"`
/// - `"blog"` → `"/blog"`
/// - `"index"` → `"/"`
///
/// No validation of URL characters is performed — the name passes through.
pub fn route_path(base: &str) -> String {
    let name = base.strip_suffix(".tsx").unwrap_or(base);
    let name = name.strip_suffix("index").unwrap_or(name);
    if name == "home" {
        "/".to_string()
    } else {
        format!("/{name}")
    }
}

/// Derive a PascalCase component identifier from a page base name.
///
/// Splits on `-` and `.`, uppercases the first character of each segment,
/// and concatenates without separators:
///
/// - `"about"` → `"About"`
/// - `"user-profile"` → `"UserProfile"`
/// - `"user.profile"` → `"UserProfile"` (collides with the above)
pub fn component_name(base: &str) -> String {
    base.split(['-', '.']).map(capitalize).collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
