//! Bundled archive extraction
//!
//! Images are sometimes distributed as a single `Images.zip` dropped into the
//! scan directory. When present, the bundle is unpacked in place before path
//! collection runs; when absent, nothing happens. A corrupt or unreadable
//! bundle is fatal for the run, with no partial-extraction recovery.

use crate::config::BUNDLE_NAME;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Archive extraction errors
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed archive: {0}")]
    MalformedArchive(#[from] zip::result::ZipError),

    #[error("Archive entry '{0}' escapes the target directory")]
    UnsafeEntryPath(String),
}

/// Extract `Images.zip` from `dir` into `dir`, if it exists.
///
/// Returns the number of entries extracted, or `None` when no bundle is
/// present. Entry paths are validated so a crafted archive cannot write
/// outside the target directory.
pub fn extract_bundle<P: AsRef<Path>>(dir: P) -> Result<Option<usize>, ArchiveError> {
    let dir = dir.as_ref();
    let bundle = dir.join(BUNDLE_NAME);
    if !bundle.is_file() {
        return Ok(None);
    }

    let file = fs::File::open(&bundle)?;
    let mut archive = zip::ZipArchive::new(file)?;
    let entries = archive.len();

    for i in 0..entries {
        let mut entry = archive.by_index(i)?;
        let relative = match entry.enclosed_name() {
            Some(path) => path.to_owned(),
            None => return Err(ArchiveError::UnsafeEntryPath(entry.name().to_string())),
        };
        let target = dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = fs::File::create(&target)?;
        io::copy(&mut entry, &mut out)?;
    }

    tracing::debug!(bundle = %bundle.display(), entries, "extracted image bundle");
    Ok(Some(entries))
}
