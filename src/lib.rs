//! Leveled text logging with date-rotated files
//!
//! # Architecture Overview
//!
//! ```text
//!   log!/warn!/… ──┐   compile-time placeholder check, call site capture
//!                  ▼
//!            ┌───────────┐   ┌────────────┐   ┌──────────┐   ┌────────────────┐
//!            │ stringify │──▶│  template  │──▶│  record  │──▶│ sink::console  │── stdout
//!            │ (args)    │   │  (render)  │   │ (layout) │   │ sink::file     │── <dir>/YYYY_MM_DD.log
//!            └───────────┘   └────────────┘   └──────────┘   └────────────────┘
//!                  ▲                                ▲
//!                  └──────────── engine ────────────┘
//!                                  ▲
//!                       config::global (ArcSwap) ◀── loader / watcher
//! ```
//!
//! Everything runs synchronously on the calling thread. Concurrent callers are not
//! serialized: lines from different threads may interleave on both sinks.

pub mod config;
pub mod engine;
pub mod error;
pub mod level;
pub mod macros;
pub mod record;
pub mod sink;
pub mod stringify;
pub mod template;

pub use config::LoggerConfig;
pub use engine::Dispatcher;
pub use error::LogError;
pub use level::Severity;
pub use record::CallSite;
