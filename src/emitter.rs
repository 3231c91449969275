//! Writes rendered artifacts to disk.
use crate::artifacts::Artifact;
use crate::error::{Error, Result};
use log::{debug, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Outcome of [`emit_artifacts`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EmitReport {
    /// Files written, in order
    pub written: Vec<PathBuf>,
    /// Files skipped because a non-directory file is in the way of their folder
    pub skipped: Vec<PathBuf>,
}

/// Writes every artifact under `root`, creating folders as needed.
///
/// Each written file is reported on `out`. A folder conflict is reported on
/// `err` and only skips that file; any other I/O error stops the run, leaving
/// the files already written in place.
pub fn emit_artifacts(
    root: &Path,
    artifacts: &[Artifact],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<EmitReport> {
    let mut report = EmitReport::default();

    for artifact in artifacts {
        let target = root.join(&artifact.path);
        match write_file(&target, &artifact.content) {
            Ok(()) => {
                writeln!(out, "Wrote file {}", target.display())?;
                report.written.push(target);
            }
            Err(e @ Error::FolderConflictError { .. }) => {
                warn!("Skipping {}", target.display());
                writeln!(err, "{e}")?;
                report.skipped.push(target);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

/// Writes `content` to `path`, creating its parent folders first.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        ensure_folder(parent)?;
    }

    debug!("Writing file: {}", path.display());
    fs::write(path, content).map_err(Error::IoError)
}

fn ensure_folder(folder: &Path) -> Result<()> {
    if folder.as_os_str().is_empty() || folder.is_dir() {
        return Ok(());
    }

    let conflict = || Error::FolderConflictError { folder: folder.display().to_string() };
    if folder.exists() {
        return Err(conflict());
    }

    fs::create_dir_all(folder).map_err(|e| {
        // create_dir_all fails on a regular file anywhere up the path
        if folder.ancestors().skip(1).any(|ancestor| ancestor.is_file()) {
            conflict()
        } else {
            Error::IoError(e)
        }
    })
}
