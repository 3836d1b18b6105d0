//! Output directory housekeeping.
//!
//! Report assets are written to an `assets` directory directly under the
//! current working directory:
//!
//! ```text
//! ./
//! └── assets/      # recreated empty by reset_assets_dir()
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, TableSummaryError};

/// Name of the report assets directory.
pub const ASSETS_DIR: &str = "assets";

/// Ensure `./assets` exists and is empty.
///
/// An existing `assets` directory is removed with all its contents and then
/// recreated. The two steps are not atomic: if the process dies between
/// them, no `assets` directory is left behind.
///
/// # Example
///
/// ```no_run
/// let assets = tablesum::reset_assets_dir()?;
/// assert!(assets.ends_with("assets"));
/// # Ok::<(), tablesum::TableSummaryError>(())
/// ```
pub fn reset_assets_dir() -> Result<PathBuf> {
    reset_assets_dir_in(current_dir()?)
}

/// Ensure `<base>/assets` exists and is empty.
pub fn reset_assets_dir_in(base: impl AsRef<Path>) -> Result<PathBuf> {
    let path = base.as_ref().join(ASSETS_DIR);

    match fs::symlink_metadata(&path) {
        Ok(meta) if meta.is_dir() => {
            log::warn!("removing existing assets directory '{}'", path.display());
            fs::remove_dir_all(&path).map_err(|e| filesystem(&path, e))?;
        }
        Ok(_) => {
            return Err(filesystem(
                &path,
                io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    "path exists and is not a directory",
                ),
            ));
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(filesystem(&path, e)),
    }

    fs::create_dir(&path).map_err(|e| filesystem(&path, e))?;
    log::debug!("created assets directory '{}'", path.display());

    Ok(path)
}

/// Recursively delete `./<name>` and everything in it.
///
/// Fails with [`TableSummaryError::NotFound`] if the directory does not exist.
pub fn remove_dir(name: impl AsRef<Path>) -> Result<()> {
    remove_dir_in(current_dir()?, name)
}

/// Recursively delete `<base>/<name>` and everything in it.
pub fn remove_dir_in(base: impl AsRef<Path>, name: impl AsRef<Path>) -> Result<()> {
    let path = base.as_ref().join(name);

    let meta = match fs::symlink_metadata(&path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(TableSummaryError::NotFound { path });
        }
        Err(e) => return Err(filesystem(&path, e)),
    };

    if !meta.is_dir() {
        return Err(filesystem(
            &path,
            io::Error::other("path is not a directory"),
        ));
    }

    fs::remove_dir_all(&path).map_err(|e| filesystem(&path, e))?;
    log::debug!("removed directory '{}'", path.display());

    Ok(())
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| filesystem(Path::new("."), e))
}

fn filesystem(path: &Path, source: io::Error) -> TableSummaryError {
    TableSummaryError::Filesystem {
        path: path.to_path_buf(),
        source,
    }
}
