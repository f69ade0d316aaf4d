//! Conflict-aware file writing
//!
//! Files are written one at a time in plan order. When a target already
//! exists the user decides, and an "all" or "skip all" answer sticks for the
//! rest of the run through [`OverwritePolicy`].

use crate::prompt::Prompter;
use crate::templates::RenderedFile;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filesystem operations the writer depends on
pub trait FileSystem {
    fn path_exists(&self, path: &Path) -> bool;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    fn write_text(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write_text(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }
}

/// Errors that abort a write run
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write file {}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read overwrite answer")]
    Prompt(#[source] io::Error),
}

/// Answer to "overwrite this file?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteChoice {
    /// Overwrite this file
    Yes,
    /// Keep this file
    No,
    /// Overwrite this and every later conflict
    All,
    /// Keep this and every later conflict
    SkipAll,
}

impl OverwriteChoice {
    /// Parse a typed answer; anything unrecognized keeps the existing file
    pub fn parse(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => OverwriteChoice::Yes,
            "a" | "all" => OverwriteChoice::All,
            "s" | "skip" | "skip-all" | "skip all" => OverwriteChoice::SkipAll,
            _ => OverwriteChoice::No,
        }
    }
}

/// How conflicts are handled for the remainder of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Ask for each existing file
    #[default]
    Ask,
    OverwriteAll,
    SkipAll,
}

/// What happened to a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Did not exist and was created
    Created,
    /// Existed and was replaced
    Overwritten,
    /// Existed and was left untouched
    Skipped,
}

impl WriteOutcome {
    pub fn is_written(&self) -> bool {
        !matches!(self, WriteOutcome::Skipped)
    }
}

/// Outcome of one planned file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

/// Create the target directory (and parents)
pub fn ensure_dir<F: FileSystem>(fs: &F, path: &Path) -> Result<(), WriteError> {
    fs.create_dir_all(path).map_err(|source| WriteError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Write one file, consulting and updating `policy` when it already exists
pub fn write_one<F, P>(
    fs: &F,
    prompter: &mut P,
    policy: &mut OverwritePolicy,
    path: &Path,
    content: &str,
) -> Result<WriteOutcome, WriteError>
where
    F: FileSystem,
    P: Prompter + ?Sized,
{
    let outcome = if !fs.path_exists(path) {
        WriteOutcome::Created
    } else {
        match *policy {
            OverwritePolicy::SkipAll => WriteOutcome::Skipped,
            OverwritePolicy::OverwriteAll => WriteOutcome::Overwritten,
            OverwritePolicy::Ask => {
                let choice = prompter
                    .choose_overwrite(path)
                    .map_err(WriteError::Prompt)?;
                log::debug!("overwrite answer for {}: {:?}", path.display(), choice);

                match choice {
                    OverwriteChoice::Yes => WriteOutcome::Overwritten,
                    OverwriteChoice::No => WriteOutcome::Skipped,
                    OverwriteChoice::All => {
                        *policy = OverwritePolicy::OverwriteAll;
                        WriteOutcome::Overwritten
                    }
                    OverwriteChoice::SkipAll => {
                        *policy = OverwritePolicy::SkipAll;
                        WriteOutcome::Skipped
                    }
                }
            }
        }
    };

    if outcome.is_written() {
        fs.write_text(path, content)
            .map_err(|source| WriteError::WriteFile {
                path: path.to_path_buf(),
                source,
            })?;
    }

    log::info!("{:?} {}", outcome, path.display());
    Ok(outcome)
}

/// Write all rendered files in order
///
/// `observe` sees every outcome as soon as it happens. The first write error
/// stops the run; files written before it stay on disk.
pub fn write_all<F, P, O>(
    fs: &F,
    prompter: &mut P,
    files: &[RenderedFile],
    mut observe: O,
) -> Result<Vec<FileOutcome>, WriteError>
where
    F: FileSystem,
    P: Prompter + ?Sized,
    O: FnMut(&FileOutcome),
{
    let mut policy = OverwritePolicy::default();
    let mut outcomes = Vec::with_capacity(files.len());

    for file in files {
        let outcome = write_one(fs, prompter, &mut policy, &file.path, &file.content)?;
        let outcome = FileOutcome {
            path: file.path.clone(),
            outcome,
        };
        observe(&outcome);
        outcomes.push(outcome);
    }

    Ok(outcomes)
}
