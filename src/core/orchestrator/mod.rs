//! Pipeline orchestration

pub mod pipeline;

pub use pipeline::{CancelToken, ProgressCallback, SplitOrchestrator, SplitProgress};
