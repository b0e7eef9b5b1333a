use std::io;
use std::path::{Path, PathBuf};

use crate::core::config::SecurityConfig;

/// Errors that can occur while resolving a file handed to a conversion tool
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    #[error("Path '{path}' is outside allowed root directory '{root}'")]
    OutsideRootDirectory { path: PathBuf, root: PathBuf },

    #[error("Symlink '{path}' points outside allowed root directory")]
    SymlinkOutsideRoot { path: PathBuf },

    #[error("Symlinks are not allowed: '{path}'")]
    SymlinkNotAllowed { path: PathBuf },

    #[error("Path is not a regular file: '{path}'")]
    NotAFile { path: PathBuf },

    #[error("Path does not exist: '{path}'")]
    PathNotFound { path: PathBuf },

    #[error("IO error for path '{path}': {error}")]
    IoError { path: PathBuf, error: io::Error },
}

/// Resolves a user supplied file reference to a canonical path inside the
/// configured root.
///
/// Accepts plain paths and `file://` URIs. The checks are:
/// 1. The file exists and is a regular file
/// 2. Symlinks are rejected outright unless `allow_symlinks` is set
/// 3. With a root configured, the canonical path must lie under it
///
/// # Examples
///
/// ```rust,ignore
/// let config = Config::from_env();
/// let pdf = validate_path("file:///home/user/docs/report.pdf", &config.security)?;
/// ```
pub fn validate_path(input: &str, security: &SecurityConfig) -> Result<PathBuf, PathSecurityError> {
    let path = Path::new(input.strip_prefix("file://").unwrap_or(input));

    let metadata = path.symlink_metadata().map_err(|e| io_error(path, e))?;
    let is_symlink = metadata.file_type().is_symlink();

    if is_symlink && !security.allow_symlinks {
        return Err(PathSecurityError::SymlinkNotAllowed {
            path: path.to_path_buf(),
        });
    }

    let canonical = path.canonicalize().map_err(|e| io_error(path, e))?;
    if !canonical.is_file() {
        return Err(PathSecurityError::NotAFile { path: canonical });
    }

    let Some(ref root) = security.root_path else {
        return Ok(canonical);
    };

    let canonical_root = root.canonicalize().map_err(|e| PathSecurityError::IoError {
        path: root.clone(),
        error: e,
    })?;

    if !canonical.starts_with(&canonical_root) {
        return Err(if is_symlink {
            PathSecurityError::SymlinkOutsideRoot {
                path: path.to_path_buf(),
            }
        } else {
            PathSecurityError::OutsideRootDirectory {
                path: canonical,
                root: canonical_root,
            }
        });
    }

    Ok(canonical)
}

fn io_error(path: &Path, error: io::Error) -> PathSecurityError {
    if error.kind() == io::ErrorKind::NotFound {
        PathSecurityError::PathNotFound {
            path: path.to_path_buf(),
        }
    } else {
        PathSecurityError::IoError {
            path: path.to_path_buf(),
            error,
        }
    }
}
