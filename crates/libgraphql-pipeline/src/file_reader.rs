//! Loading GraphQL source text from disk.

use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ReadContentError>;

const UTF8_BOM: char = '\u{feff}';

/// Read the file at `file_path` as UTF-8 text, dropping a leading byte
/// order mark if there is one.
pub fn read_content(file_path: impl AsRef<Path>) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path).map_err(|err| ReadContentError::Io {
        file_path: file_path.to_path_buf(),
        err,
    })?;
    let mut content = String::from_utf8(bytes).map_err(|err| ReadContentError::InvalidUtf8 {
        file_path: file_path.to_path_buf(),
        valid_up_to: err.utf8_error().valid_up_to(),
    })?;

    if content.starts_with(UTF8_BOM) {
        content.drain(..UTF8_BOM.len_utf8());
    }
    tracing::trace!(file = %file_path.display(), bytes = content.len(), "read source file");
    Ok(content)
}

/// Read several files and join their text, one file per line block. Useful
/// for schemas split across files.
pub fn read_concatenated<P: AsRef<Path>>(file_paths: &[P]) -> Result<String> {
    let mut joined = String::new();
    for file_path in file_paths {
        joined.push_str(&read_content(file_path)?);
        if !joined.ends_with('\n') {
            joined.push('\n');
        }
    }
    Ok(joined)
}

#[derive(Debug, thiserror::Error)]
pub enum ReadContentError {
    #[error("File at {file_path:?} is not valid utf-8 past byte {valid_up_to}")]
    InvalidUtf8 {
        file_path: PathBuf,
        valid_up_to: usize,
    },

    #[error("Failed to read file at {file_path:?}: {err}")]
    Io {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Path is not a file: {0:?}")]
    PathIsNotAFile(PathBuf),
}
impl std::cmp::PartialEq for ReadContentError {
    /// I/O errors compare by [`ErrorKind`](std::io::ErrorKind) only.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::InvalidUtf8 { file_path: a_path, valid_up_to: a_pos },
                Self::InvalidUtf8 { file_path: b_path, valid_up_to: b_pos },
            ) => a_path == b_path && a_pos == b_pos,

            (
                Self::Io { file_path: a_path, err: a_err },
                Self::Io { file_path: b_path, err: b_err },
            ) => a_path == b_path && a_err.kind() == b_err.kind(),

            (Self::PathIsNotAFile(a_path), Self::PathIsNotAFile(b_path)) =>
                a_path == b_path,

            _ => false,
        }
    }
}
