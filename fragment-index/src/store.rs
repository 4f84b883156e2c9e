//! Raw fragment byte serving

use std::path::{Path, PathBuf};

use fs_err as fs;

/// Errors when serving a fragment file by name.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// The requested name is not a bare file name.
    ///
    /// Anything containing a path separator or referring to the current or
    /// parent directory is rejected before any filesystem lookup so a request
    /// can never escape the fragment directory.
    #[error("invalid fragment file name: {name:?}")]
    InvalidName { name: String },

    /// No fragment file exists under the requested name.
    ///
    /// Also covers a file observed by an earlier listing but deleted by the
    /// time the serve request arrives.
    #[error("Fragment file not found: {name}")]
    NotFound { name: String },

    /// The file exists but reading it failed.
    #[error("failed to read fragment file '{name}'")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Serves raw fragment bytes out of a single directory.
#[derive(Clone, Debug)]
pub struct FragmentStore {
    dir: PathBuf,
}

impl FragmentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reads the exact byte content of the named fragment file.
    pub fn read(&self, name: &str) -> Result<Vec<u8>, ServeError> {
        if !is_bare_file_name(name) {
            return Err(ServeError::InvalidName {
                name: name.to_string(),
            });
        }

        match fs::read(self.dir.join(name)) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(ServeError::NotFound {
                name: name.to_string(),
            }),
            Err(err) => Err(ServeError::Read {
                name: name.to_string(),
                source: err,
            }),
        }
    }
}

/// A name is served only if it is a plain file name: non-empty, no path
/// separators, no NUL, and not a directory reference.
fn is_bare_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}
