//! Segment extraction

pub mod segments;

pub use segments::{codec_args, SegmentExtractor};
