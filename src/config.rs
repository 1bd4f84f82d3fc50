//! Generator configuration.
//!
//! Handles loading and validating `routegen.toml`. All options have
//! defaults matching the conventional React project layout, so most
//! projects need no config file at all.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! pages_dir = "src/pages"       # Directory scanned for page modules
//! routes_file = "src/routes.tsx" # Generated route table (never hand-edit)
//! extension = "tsx"             # Recognized page extension, without dot
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown
//! keys are rejected to catch typos early. Relative paths are resolved
//! against the project root via [`GeneratorConfig::resolve_at`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the project root.
pub const CONFIG_FILE: &str = "routegen.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator configuration loaded from `routegen.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory scanned for page modules, one level deep.
    pub pages_dir: PathBuf,
    /// Path of the generated route table module. Fully overwritten on every
    /// run — never hand-edit it.
    pub routes_file: PathBuf,
    /// Recognized page file extension, without the leading dot.
    pub extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            pages_dir: PathBuf::from("src/pages"),
            routes_file: PathBuf::from("src/routes.tsx"),
            extension: "tsx".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Validate config values.
    ///
    /// The routes file must not land inside the pages directory: the next
    /// run would then scan the generator's own output as a page.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extension.is_empty() {
            return Err(ConfigError::Validation(
                "extension must not be empty".into(),
            ));
        }
        if self.extension.starts_with('.') {
            return Err(ConfigError::Validation(format!(
                "extension must not include the leading dot: '{}'",
                self.extension
            )));
        }
        if self.routes_file.starts_with(&self.pages_dir) {
            return Err(ConfigError::Validation(format!(
                "routes_file '{}' must not be inside pages_dir '{}'",
                self.routes_file.display(),
                self.pages_dir.display()
            )));
        }
        Ok(())
    }

    /// Resolve relative paths against a project root. Absolute paths pass
    /// through unchanged.
    pub fn resolve_at(&self, root: &Path) -> Self {
        let join = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                root.join(p)
            }
        };
        Self {
            pages_dir: join(&self.pages_dir),
            routes_file: join(&self.routes_file),
            extension: self.extension.clone(),
        }
    }
}

/// Load `routegen.toml` from the project root, falling back to defaults
/// when the file doesn't exist. The returned config is validated but not
/// yet resolved against the root.
pub fn load_config(root: &Path) -> Result<GeneratorConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        GeneratorConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A stock `routegen.toml` with every option documented, for `gen-config`.
pub fn stock_config_toml() -> String {
    "\
# routegen configuration
# All options are optional - the values below are the defaults.

# Directory scanned for page modules. One level deep: files with the
# recognized extension become routes, and a subdirectory becomes a route
# iff it directly contains an index file.
pages_dir = \"src/pages\"

# Path of the generated route table module. Regenerated wholesale on every
# run - never hand-edit it.
routes_file = \"src/routes.tsx\"

# Recognized page file extension, without the leading dot.
extension = \"tsx\"
"
    .to_string()
}
