//! Initialize the documentation tree
//!
//! Public interface for the init command; logic lives in `internal`.
//!
//! # Example
//!
//! ```text
//! $ docs-portal init
//! ✅ HalRust documentation tree initialized: 42 markdown files created.
//! ```

mod internal;

use anyhow::Result;
use std::path::PathBuf;

/// Options for a single init run
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Output root; falls back to the config, then `docs`
    pub root: Option<PathBuf>,
    /// Project name override for templates and the report
    pub project: Option<String>,
    /// Explicit config file
    pub config: Option<PathBuf>,
    /// Show what would be written without touching disk
    pub dry_run: bool,
    pub json: bool,
}

/// Execute the init command
///
/// # Process
///
/// 1. Load config (explicit file, else `docs-portal.toml`, else defaults)
/// 2. Apply CLI overrides
/// 3. Create missing section directories and placeholder files
/// 4. Print the summary and next steps
///
/// Existing files are never modified, so rerunning is safe.
///
/// # Errors
///
/// Returns an error if the config is unreadable or a directory or file
/// cannot be created.
pub fn execute(options: InitOptions) -> Result<()> {
    internal::execute_init(options)
}
