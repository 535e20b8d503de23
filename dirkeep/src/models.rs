// src/models.rs
pub mod action;
pub mod config;
pub mod error;
pub mod insight;
pub mod probe;
pub mod record;
pub mod summary;

pub use action::Action;
pub use config::{DEFAULT_STALE_DAYS, PlaceholderMode, ScanConfig};
pub use error::RunError;
pub use insight::DirInsight;
pub use probe::PlaceholderProbe;
pub use record::DirRecord;
pub use summary::{ApplyEvent, RunSummary};
