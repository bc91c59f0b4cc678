//! Run position shared by the stream manager and its checkpoints

pub mod progress;
