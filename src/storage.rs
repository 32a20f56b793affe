use std::{
    collections::BTreeMap,
    ffi::OsString,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// File name used when no state path is given.
pub const DEFAULT_STATE_FILE: &str = "calculator_state.json";

/// The persisted part of a session.
///
/// Serialized as a JSON object with the keys `variables`,
/// `string_variables` and `history`. Missing keys read as empty collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    /// Numeric variables.
    pub variables:        BTreeMap<String, f64>,
    /// Textual variables.
    pub string_variables: BTreeMap<String, String>,
    /// Command history, oldest first.
    pub history:          Vec<String>,
}

/// A JSON file that stores a [`State`] between sessions.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// Refers to the state file at `path`. Nothing is read or created yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the state file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next state is written to before it replaces the
    /// real one, e.g. `calculator_state.json.tmp`.
    #[must_use]
    pub fn staging_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Reads the state. A file that does not exist yet is an empty state.
    ///
    /// # Errors
    /// `Io` if the file exists but cannot be read, `Json` if it is not a
    /// state record.
    pub fn load(&self) -> Result<State, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(State::default()),
            Err(source) => {
                return Err(StorageError::Io { path: self.path.clone(),
                                              source });
            },
        };

        let state: State = serde_json::from_str(&contents).map_err(|source| {
                                                              StorageError::Json { path: self.path.clone(),
                                                                                   source }
                                                          })?;
        info!("loaded {} variables and {} history entries from {}",
              state.variables.len() + state.string_variables.len(),
              state.history.len(),
              self.path.display());
        Ok(state)
    }

    /// Writes the state as indented JSON, replacing the file.
    ///
    /// The JSON is written to [`StateFile::staging_path`] first and then
    /// renamed over the state file, so a failed save leaves the previous
    /// state intact.
    ///
    /// # Errors
    /// - `NonFinite` if a numeric variable is infinite or NaN. Nothing is
    ///   written.
    /// - `Json` if serialization fails.
    /// - `Io` if the staging file cannot be written or renamed.
    pub fn save(&self, state: &State) -> Result<(), StorageError> {
        if let Some(name) = state.variables
                                 .iter()
                                 .find_map(|(name, value)| (!value.is_finite()).then_some(name))
        {
            return Err(StorageError::NonFinite { path: self.path.clone(),
                                                 name: name.clone() });
        }

        let mut json = serde_json::to_string_pretty(state).map_err(|source| {
                                                              StorageError::Json { path: self.path.clone(),
                                                                                   source }
                                                          })?;
        json.push('\n');

        let staging = self.staging_path();
        let replaced = fs::write(&staging, json).and_then(|()| fs::rename(&staging, &self.path));
        if let Err(source) = replaced {
            let _ = fs::remove_file(&staging);
            return Err(StorageError::Io { path: self.path.clone(),
                                          source });
        }

        info!("saved state to {}", self.path.display());
        Ok(())
    }
}
