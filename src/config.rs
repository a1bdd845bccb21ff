//! Configuration for docs-portal
//!
//! Optional `docs-portal.toml`. Every field has a default, so an empty or
//! missing file yields the stock HalRust portal under `docs/`.
//!
//! ```toml
//! [project]
//! name = "HalRust"
//! root = "docs"
//!
//! [template]
//! footer = ["line one", "line two"]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::paths;
use crate::template::{self, Branding};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub template: TemplateSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    /// Name stamped into placeholders and the report
    #[serde(default = "default_name")]
    pub name: String,
    /// Output root for the documentation tree
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

fn default_name() -> String {
    template::DEFAULT_PROJECT.to_string()
}
fn default_root() -> PathBuf {
    PathBuf::from(paths::DEFAULT_ROOT)
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            root: default_root(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSection {
    #[serde(default = "template::default_footer")]
    pub footer: Vec<String>,
}

impl Default for TemplateSection {
    fn default() -> Self {
        Self {
            footer: template::default_footer(),
        }
    }
}

impl Config {
    /// Parse config from TOML text
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| ScaffoldError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load an explicit config file; it must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ScaffoldError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content, path)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default file in `dir`
    /// is used when present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load_from(path);
        }

        let path = paths::default_config_path(dir);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load_from(&path)
        } else {
            tracing::debug!("no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn branding(&self) -> Branding {
        Branding {
            project: self.project.name.clone(),
            footer: self.template.footer.clone(),
        }
    }
}
