mod generic;
mod json_file;

pub use generic::Generic;
pub use json_file::JsonFile;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use crate::notifier::{ChangeNotifier, Subscription};

/// A primitive value as the store persists it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    String(String),
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::String(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::String(value)
    }
}

/// The full key-value mapping a backend loads and saves.
pub type RawMap = BTreeMap<String, RawValue>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("No HOME is available")]
    NoHome,

    #[error("The store location has no parent directory")]
    LocationHasNoParent,

    #[error("Serializing / deserializing failure: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reading the flag store at `{0}` failed: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Creating the store file in `{0}` failed: {1}")]
    Create(PathBuf, std::io::Error),

    #[error("Writing the flag store to `{0}` failed: {1}")]
    Write(PathBuf, std::io::Error),

    #[error(transparent)]
    Persist(#[from] tempfile::PersistError),
}

/// Where a [`FlagStore`] keeps its values between runs.
pub trait StoreBackend: Send + Sync + 'static {
    fn load(&self) -> Result<RawMap, StoreError>;
    fn save(&self, values: &RawMap) -> Result<(), StoreError>;
}

struct Inner {
    values: RwLock<RawMap>,
    backend: Box<dyn StoreBackend>,
    notifier: ChangeNotifier,
}

/// The durable key-value store backing local flags, keyed by flag id.
///
/// Cloning yields another handle onto the same store. Writes are visible
/// to subsequent reads immediately and fire the store-wide change signal;
/// reads of absent or type-mismatched keys resolve to `None`, never an
/// error.
#[derive(Clone)]
pub struct FlagStore {
    inner: Arc<Inner>,
}

impl FlagStore {
    /// A store with no persistence, for tests and ephemeral menus.
    pub fn in_memory() -> Self {
        Self::from_parts(RawMap::new(), Box::new(Generic::default()))
    }

    /// Opens a JSON-file-backed store at `location`. An absent file loads
    /// as the empty store.
    pub fn open(location: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let backend = JsonFile::new(location.into()).ok_or(StoreError::LocationHasNoParent)?;
        Self::with_backend(backend)
    }

    /// Opens the store at its default location: a dedicated settings
    /// domain under the XDG state directory, kept separate from any
    /// general application settings to avoid key collisions.
    #[tracing::instrument]
    pub fn try_default() -> Result<Self, StoreError> {
        Self::with_backend(JsonFile::try_default()?)
    }

    pub fn with_backend(backend: impl StoreBackend) -> Result<Self, StoreError> {
        let values = backend.load()?;
        Ok(Self::from_parts(values, Box::new(backend)))
    }

    fn from_parts(values: RawMap, backend: Box<dyn StoreBackend>) -> Self {
        FlagStore {
            inner: Arc::new(Inner {
                values: RwLock::new(values),
                backend,
                notifier: ChangeNotifier::new(),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<RawValue> {
        self.inner
            .values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// The boolean under `key`, or `None` when absent or not a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key) {
            Some(RawValue::Bool(value)) => Some(value),
            _ => None,
        }
    }

    /// The string under `key`, or `None` when absent or not a string.
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.get(key) {
            Some(RawValue::String(value)) => Some(value),
            _ => None,
        }
    }

    /// Writes `value` under `key` and signals every subscriber, whichever
    /// key they care about. Persistence failures are logged and swallowed;
    /// the value stays visible in memory.
    pub fn set(&self, key: impl Into<String>, value: impl Into<RawValue>) {
        let key = key.into();
        let value = value.into();

        tracing::trace!(%key, ?value, "Storing a flag value");

        {
            let mut values = self
                .inner
                .values
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            values.insert(key, value);

            if let Err(e) = self.inner.backend.save(&values) {
                tracing::warn!(%e, "Persisting the flag store failed; the value is retained in memory only");
            }
        }

        self.inner.notifier.broadcast();
    }

    /// Subscribes to the store-wide change signal. The signal fires on
    /// every write to any key, even one that left the value unchanged;
    /// callers needing a per-flag stream subscribe through
    /// [`FlagDescriptor::changes`](crate::FlagDescriptor::changes) instead.
    pub fn on_any_change(&self, callback: impl FnMut() + Send + 'static) -> Subscription {
        self.inner.notifier.subscribe(Box::new(callback))
    }
}

impl std::fmt::Debug for FlagStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagStore").finish()
    }
}
