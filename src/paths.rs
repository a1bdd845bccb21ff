//! Filesystem layout for docs-portal.
//!
//! Defines WHERE things live. No I/O here.
//!
//! ```text
//! project/
//! ├── docs-portal.toml         # Optional config
//! └── docs/                    # Default output root
//!     ├── 00_INTRODUCTION/
//!     │   └── overview.md
//!     └── ...
//! ```

use std::path::{Path, PathBuf};

/// Output root used when neither config nor CLI names one
pub const DEFAULT_ROOT: &str = "docs";

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "docs-portal.toml";

/// Environment variable holding a log filter directive
pub const LOG_ENV_VAR: &str = "DOCS_PORTAL_LOG";

/// Default config location: `<dir>/docs-portal.toml`
pub fn default_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

/// Section directory: `<root>/<section>/`
pub fn section_dir(root: &Path, section: &str) -> PathBuf {
    root.join(section)
}

/// Placeholder file: `<root>/<section>/<file>`
pub fn document_path(root: &Path, section: &str, file: &str) -> PathBuf {
    section_dir(root, section).join(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_path_nests_under_section() {
        let path = document_path(Path::new("docs"), "09_APPENDIX", "glossary.md");
        assert_eq!(path, PathBuf::from("docs/09_APPENDIX/glossary.md"));
    }

    #[test]
    fn test_default_config_path() {
        assert_eq!(
            default_config_path(Path::new("/work")),
            PathBuf::from("/work/docs-portal.toml")
        );
    }
}
