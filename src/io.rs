// File-level helpers for diffing text files.
//
// A missing path means "absent" rather than "empty", so callers can drive
// the engine's absence handling from the command line.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::engine::{self, DiffOptions};
use crate::render::Mode;
use crate::segment::Segments;

/// Error reading an input sequence.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: input is not valid UTF-8", .path.display())]
    Utf8 { path: PathBuf },
}

/// Read a file as a sequence. `None` stays absent.
pub fn read_sequence(path: Option<&Path>) -> Result<Option<String>, ReadError> {
    let Some(path) = path else {
        return Ok(None);
    };
    let bytes = fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| ReadError::Utf8 {
        path: path.to_path_buf(),
    })?;
    log::debug!("read {} ({} bytes)", path.display(), text.len());
    Ok(Some(text))
}

/// Segments for two files; either path may be absent.
pub fn diff_files(old: Option<&Path>, new: Option<&Path>) -> Result<Segments, ReadError> {
    let old = read_sequence(old)?;
    let new = read_sequence(new)?;
    Ok(engine::diff_segments_with_options(
        old.as_deref(),
        new.as_deref(),
        &DiffOptions::default(),
    ))
}

/// Rendered diff for two files; `Ok(None)` when both paths are absent.
pub fn render_files(
    old: Option<&Path>,
    new: Option<&Path>,
    mode: Mode,
) -> Result<Option<String>, ReadError> {
    let old = read_sequence(old)?;
    let new = read_sequence(new)?;
    Ok(engine::diff_with_mode(
        old.as_deref(),
        new.as_deref(),
        mode,
        &DiffOptions::default(),
    ))
}
