//! Materializes the documentation tree on disk.
//!
//! Directories are created recursively and tolerate already existing.
//! Files are only ever created, never rewritten: anything already present at a
//! target path (file, directory, symlink) is left alone and not counted.
//! A failed run leaves earlier files in place, so rerunning resumes.

use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::paths;
use crate::structure;
use crate::template::{self, Branding};

/// What a run would do with one target file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Skip,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedFile {
    pub section: &'static str,
    pub file: &'static str,
    pub path: PathBuf,
    pub action: Action,
}

/// Read-only preview of a run
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub root: PathBuf,
    pub files: Vec<PlannedFile>,
}

impl Plan {
    pub fn to_create(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.action == Action::Create)
            .count()
    }

    pub fn to_skip(&self) -> usize {
        self.files.len() - self.to_create()
    }
}

pub struct Scaffolder {
    branding: Branding,
}

impl Default for Scaffolder {
    fn default() -> Self {
        Self::new(Branding::default())
    }
}

impl Scaffolder {
    pub fn new(branding: Branding) -> Self {
        Self { branding }
    }

    pub fn branding(&self) -> &Branding {
        &self.branding
    }

    /// Ensure every section directory and placeholder file exists under `root`.
    ///
    /// Returns the number of files written by this call. Pre-existing files
    /// are skipped byte-for-byte and do not count.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Filesystem`] on the first directory or file
    /// that cannot be created. No rollback is attempted.
    pub fn initialize(&self, root: impl AsRef<Path>) -> Result<usize> {
        let root = root.as_ref();
        ensure_dir(root)?;

        let mut created = 0;
        for (section, files) in structure::STRUCTURE {
            let section_path = paths::section_dir(root, section);
            ensure_dir(&section_path)?;

            for file in files.iter() {
                let file_path = section_path.join(file);
                if entry_exists(&file_path)? {
                    tracing::debug!(path = %file_path.display(), "skipping existing file");
                    continue;
                }

                let title = template::derive_title(file);
                let content = template::render(&title, &self.branding);
                if write_new(&file_path, &content)? {
                    tracing::debug!(path = %file_path.display(), "created placeholder");
                    created += 1;
                }
            }
        }

        tracing::info!(
            root = %root.display(),
            created,
            total = structure::file_count(),
            "documentation tree initialized"
        );
        Ok(created)
    }

    /// Report what [`initialize`](Self::initialize) would do, without writing.
    pub fn plan(&self, root: impl AsRef<Path>) -> Result<Plan> {
        let root = root.as_ref();
        let mut files = Vec::with_capacity(structure::file_count());

        for (section, file) in structure::entries() {
            let path = paths::document_path(root, section, file);
            let action = if entry_exists(&path)? {
                Action::Skip
            } else {
                Action::Create
            };
            files.push(PlannedFile {
                section,
                file,
                path,
                action,
            });
        }

        Ok(Plan {
            root: root.to_path_buf(),
            files,
        })
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| ScaffoldError::filesystem(path, e))
}

/// True when anything occupies `path`; dangling symlinks count.
fn entry_exists(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ScaffoldError::filesystem(path, e)),
    }
}

/// Create `path` with `content`. Returns false if something appeared there
/// between the existence probe and the create.
fn write_new(path: &Path, content: &str) -> Result<bool> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(ScaffoldError::filesystem(path, e)),
    };
    file.write_all(content.as_bytes())
        .map_err(|e| ScaffoldError::filesystem(path, e))?;
    Ok(true)
}
