//! Synchronous asset loading and path helpers.
//!
//! Asset reads happen during configuration assembly, before rendering
//! begins. A missing file is a permanent configuration defect, never a
//! transient fault: the whole run fails and no partial output is produced.

use crate::error::{ReportError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Read a required asset file as UTF-8 text.
pub fn read_asset(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    if !absolute.exists() {
        return Err(ReportError::MissingAsset { path: absolute });
    }

    Ok(fs::read_to_string(&absolute)?)
}

/// Strip the first matching base from `path`.
///
/// Bases are tried in list order and only the first occurrence of the
/// matching base is removed; a path matching none is returned unchanged.
pub fn collapsed_path(path: &str, bases_to_hide: Option<&[String]>) -> String {
    let Some(bases) = bases_to_hide else {
        return path.to_string();
    };

    for base in bases {
        let collapsed = path.replacen(base.as_str(), "", 1);
        if collapsed != path {
            return collapsed;
        }
    }

    path.to_string()
}

/// Inline the configured custom CSS files, in order.
///
/// `None` means no custom CSS is configured. Any single missing file
/// fails the whole operation.
pub fn inline_custom_css(paths: Option<&[PathBuf]>) -> Result<Option<Vec<String>>> {
    let Some(paths) = paths else {
        return Ok(None);
    };

    let mut inlined = Vec::with_capacity(paths.len());
    for path in paths {
        inlined.push(read_asset(path)?);
    }

    Ok(Some(inlined))
}
