//! # routegen
//!
//! A filesystem-driven route table generator for React page modules. Your
//! pages directory is the data source: each `.tsx` file and each
//! index-bearing subdirectory becomes one route in a generated
//! `routes.tsx`, wrapped in the `react-router-dom` boilerplate and exported
//! as a single `AppRoutes` component.
//!
//! # Architecture: Linear Pipeline
//!
//! ```text
//! 1. Scan    src/pages/      →  Vec<PageEntry>         (filesystem → structured data)
//! 2. Build   entries         →  Vec<RouteDescriptor>   (names → routes, collision check)
//! 3. Emit    descriptors     →  module text            (pure data-to-text)
//! 4. Write   text            →  src/routes.tsx         (atomic temp-file + rename)
//! ```
//!
//! Only the first and last steps touch the filesystem. Everything in the
//! middle is a pure function, so the mapping rules and the exact generated
//! text are unit-testable without fixtures, and the whole pipeline is
//! deterministic: identical directory contents produce a byte-identical
//! routes file.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — lists one level of the pages directory, classifies entries |
//! | [`routes`] | Stage 2 — builds route descriptors, rejects component-name collisions |
//! | [`emit`] | Stage 3 — renders descriptors into the generated module text |
//! | [`generate`] | Orchestrator — runs the pipeline, owns the atomic write |
//! | [`naming`] | Pure route-path and PascalCase identifier derivation |
//! | [`config`] | `routegen.toml` loading, defaults, validation |
//! | [`output`] | CLI output formatting — indexed route-table display |
//!
//! # Design Decisions
//!
//! ## Sorted Scan Order
//!
//! Raw directory listings are platform-dependent, which would make the
//! generated file differ between machines for identical content. The
//! scanner sorts entries lexicographically by name, making ordering an
//! explicit policy instead of a filesystem artifact.
//!
//! ## Fail Fast on Identifier Collisions
//!
//! `user-profile.tsx` and `user.profile.tsx` both normalize to
//! `UserProfile`. Generating both imports would only fail later, in the
//! consumer's compiler, far from the cause. The builder rejects the
//! collision with both offending pages named.
//!
//! ## Explicit Configuration
//!
//! Paths come from [`config::GeneratorConfig`], not from the generator's
//! own location, so the library can be embedded in any build step and
//! tested against arbitrary roots. The `routegen` binary is a thin clap
//! wrapper that loads `routegen.toml` and maps errors to exit codes.
//!
//! ## Disposable Output
//!
//! The routes file is regenerated wholesale on every run and written via a
//! temp file plus rename, so a failed run never leaves a truncated file.
//! It must never be hand-edited.

pub mod config;
pub mod emit;
pub mod generate;
pub mod naming;
pub mod output;
pub mod routes;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
