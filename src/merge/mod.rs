//! PDF merging operations.

pub mod merger;

pub use merger::{MergeOutcome, Merger};
