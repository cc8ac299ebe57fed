//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LoggerConfig
//!     → global.rs (ArcSwap slot read by every log call)
//!
//! On file change:
//!     watcher.rs detects modify/create
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → global.rs swaps it in wholesale
//! ```
//!
//! # Design Decisions
//! - Every field has a default so an empty file is a valid config
//! - Each log call reads one snapshot; a replace never tears a record across two configs
//! - Replacement has no ordering relative to calls already in flight on other threads

pub mod global;
pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::LoggerConfig;
