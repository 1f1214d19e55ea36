use std::{env, fs, path::Path, rc::Rc};

use tracing::{debug, info};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Reads the source file at `path` and trims its outer whitespace.
///
/// Fails when the file does not exist, cannot be read as UTF-8 text, or
/// holds nothing but whitespace.
pub fn load_source(path: &Path) -> Result<String, Error> {
    let display = path.to_string_lossy().to_string();
    let position = Position(0, Rc::new(display.clone()));

    if !path.is_file() {
        return Err(Error::new(ErrorImpl::FileNotFound { path: display }, position));
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|dir| dir.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    info!(path = %absolute.display(), "opening source file");

    let content = fs::read_to_string(path).map_err(|err| {
        Error::new(
            ErrorImpl::ReadFailed {
                path: display.clone(),
                reason: err.to_string(),
            },
            position.clone(),
        )
    })?;

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(Error::new(ErrorImpl::EmptyFile { path: display }, position));
    }

    debug!(bytes = trimmed.len(), "source loaded");
    Ok(trimmed.to_string())
}
