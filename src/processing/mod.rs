//! Address extraction and ordering logic.
//!
//! This module contains the text processing stages:
//! - [`extract`] - Permissive scan for candidate tokens
//! - [`validate`] - Strict parsing of a candidate into a record
//! - [`sort`] - Canonical ordering of records
//! - [`highlight`] - Classification of the source text for display
//! - [`pipeline`] - All stages in one call

mod extract;
mod highlight;
mod pipeline;
mod sort;
mod validate;

// Re-export public functions
pub use extract::{extract_candidates, Candidate};
pub use highlight::{segments, Segment, SegmentKind};
pub use pipeline::{process, Processed};
pub use sort::sort_records;
pub use validate::{validate, PrefixPolicy};
