//! Domain models for run tracking

pub mod event;

// Re-exports
pub use event::{Event, EventLog};
