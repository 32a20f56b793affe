use std::path::PathBuf;

#[derive(Debug)]
/// Represents failures while reading or writing the session state file.
pub enum StorageError {
    /// The file could not be opened, read, or written.
    Io {
        /// The state file.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
    /// The file contents are not a valid state record.
    Json {
        /// The state file.
        path:   PathBuf,
        /// The underlying (de)serialization failure.
        source: serde_json::Error,
    },
    /// A numeric variable is infinite or NaN and has no JSON representation.
    NonFinite {
        /// The state file.
        path: PathBuf,
        /// The offending variable.
        name: String,
    },
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Could not access state file '{}': {source}.", path.display())
            },
            Self::Json { path, source } => {
                write!(f, "State file '{}' is malformed: {source}.", path.display())
            },
            Self::NonFinite { path, name } => {
                write!(f,
                       "Cannot save '{name}' to '{}': it is not a finite number.",
                       path.display())
            },
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::NonFinite { .. } => None,
        }
    }
}
