use crate::config::{load_config, Config};
use crate::error::PrayerResult;
use crate::notifications::{LogNotifier, Notifier};
use crate::store::{SettingsStore, Storage};
use std::path::PathBuf;
use std::sync::Arc;

/// Central context for CLI operations, owning the settings store and the notifier
pub struct AppContext {
    config: Config,
    store: Option<SettingsStore>,
    notifier: Arc<dyn Notifier>,
}

impl AppContext {
    /// Create a context from the environment's configuration
    pub fn new() -> Self {
        Self::from_config(load_config())
    }

    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            store: None,
            notifier: Arc::new(LogNotifier::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the store, opening it from storage on first use.
    /// Must be called from inside a tokio runtime.
    pub fn store(&mut self) -> &mut SettingsStore {
        let config = &self.config;
        self.store.get_or_insert_with(|| {
            let storage: Arc<dyn Storage> = Arc::new(config.storage());
            SettingsStore::open(storage)
        })
    }

    pub fn notifier(&self) -> Arc<dyn Notifier> {
        self.notifier.clone()
    }

    /// Wait for all pending settings writes to land.
    pub async fn flush(&self) -> PrayerResult<()> {
        match &self.store {
            Some(store) => store.flush().await,
            None => Ok(()),
        }
    }

    /// Hand the store over, e.g. to the interactive app.
    pub fn into_parts(mut self) -> (SettingsStore, Arc<dyn Notifier>) {
        self.store();
        let store = self.store.take().unwrap_or_default();
        (store, self.notifier)
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating contexts with specific configurations
pub struct AppContextBuilder {
    data_dir: Option<PathBuf>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl AppContextBuilder {
    pub fn new() -> Self {
        Self {
            data_dir: None,
            notifier: None,
        }
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn build(self) -> AppContext {
        let config = match self.data_dir {
            Some(dir) => Config::with_data_dir(dir),
            None => load_config(),
        };

        let mut context = AppContext::from_config(config);
        if let Some(notifier) = self.notifier {
            context.notifier = notifier;
        }
        context
    }
}

impl Default for AppContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
