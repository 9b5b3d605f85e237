use std::io::Write;
use std::path::PathBuf;

use super::{RawMap, StoreBackend, StoreError};

const XDG_PREFIX: &str = "flagpanel";
const XDG_STORE_FILENAME: &str = "flags.json";

/// A store backend keeping the flag map as one pretty-printed JSON file,
/// replaced atomically on every save.
pub struct JsonFile {
    location: PathBuf,
    directory: PathBuf,
}

impl JsonFile {
    #[tracing::instrument]
    pub fn new(location: PathBuf) -> Option<Self> {
        Some(Self {
            directory: location.parent()?.to_owned(),
            location,
        })
    }

    pub fn try_default() -> Result<Self, StoreError> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix(XDG_PREFIX);

        let file = xdg_dirs
            .place_state_file(XDG_STORE_FILENAME)
            .map_err(|e| {
                match xdg_dirs
                    .get_state_file(XDG_STORE_FILENAME)
                    .ok_or(StoreError::NoHome)
                {
                    Ok(loc) => StoreError::Create(loc, e),
                    Err(e) => e,
                }
            })?;

        Self::new(file).ok_or(StoreError::LocationHasNoParent)
    }
}

impl StoreBackend for JsonFile {
    #[tracing::instrument(skip(self))]
    fn load(&self) -> Result<RawMap, StoreError> {
        let contents = match std::fs::read(&self.location) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RawMap::new());
            }
            Err(e) => return Err(StoreError::Read(self.location.clone(), e)),
        };

        if contents.is_empty() {
            return Ok(RawMap::new());
        }

        Ok(serde_json::from_slice(&contents)?)
    }

    #[tracing::instrument(skip(self, values))]
    fn save(&self, values: &RawMap) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(values)?;

        let mut tempfile = tempfile::NamedTempFile::new_in(&self.directory)
            .map_err(|e| StoreError::Create(self.directory.clone(), e))?;

        tempfile
            .write_all(json.as_bytes())
            .map_err(|e| StoreError::Write(tempfile.path().into(), e))?;

        tempfile.persist(&self.location)?;

        tracing::trace!(location = ?self.location, "Flag store persisted");

        Ok(())
    }
}
