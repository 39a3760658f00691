//! Commit Insight Engine — deterministic, rule-based analytics over commit history.
//!
//! Normalizes raw commit records into a table and derives three independent
//! reports: project health, a completion forecast, and a per-author
//! contribution/risk ranking.
//!
//! No ML, no DB, no network; pure computation, fresh state per call.

pub mod completion;
pub mod config;
pub mod engine;
pub mod error;
pub mod focus;
pub mod health;
pub mod normalize;
pub mod stats;
pub mod table;
pub mod team;
pub mod types;

pub use config::Config;
pub use engine::Engine;
pub use error::EngineError;
pub use table::CommitTable;
pub use types::{InboundCommit, RepoRequest};
