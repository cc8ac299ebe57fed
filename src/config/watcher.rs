//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::global;
use crate::config::loader::load_config;
use crate::config::schema::LoggerConfig;

/// Watches a config file and swaps every valid revision into the global slot.
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Start watching in notify's background thread. Drop the returned watcher to stop.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        self.run_with(global::replace)
    }

    /// Like `run`, handing each reloaded config to `apply` instead of the global slot.
    pub fn run_with<F>(self, apply: F) -> Result<RecommendedWatcher, notify::Error>
    where
        F: Fn(LoggerConfig) + Send + 'static,
    {
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Config file change detected, reloading...");
                        match load_config(&path) {
                            Ok(new_config) => apply(new_config),
                            Err(e) => {
                                tracing::error!("Failed to reload config: {}. Keeping current configuration.", e);
                            }
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}
