//! Process-wide configuration slot.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::config::schema::LoggerConfig;

static CURRENT: LazyLock<ArcSwap<LoggerConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(LoggerConfig::default()));

/// Snapshot of the configuration in effect right now.
pub fn current() -> Arc<LoggerConfig> {
    CURRENT.load_full()
}

/// Replace the whole configuration.
pub fn replace(config: LoggerConfig) {
    CURRENT.store(Arc::new(config));
}

/// Replace the configuration with a modified copy of the current one.
///
/// Two concurrent `update` calls can lose one of the edits; callers that need
/// read-modify-write atomicity must serialize them.
pub fn update(edit: impl FnOnce(&mut LoggerConfig)) {
    let mut next = LoggerConfig::clone(&CURRENT.load());
    edit(&mut next);
    replace(next);
}

/// Restore the defaults.
pub fn reset() {
    replace(LoggerConfig::default());
}
