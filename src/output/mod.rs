//! Output formatting for address records.
//!
//! This module handles turning records into text:
//! - [`format`] - Configuration-syntax rendering
//! - [`summary`] - Record counts
//! - [`terminal`] - Highlighted view of the source text

mod format;
mod summary;
mod terminal;

pub use format::{render, OutputFormat};
pub use summary::Summary;
pub use terminal::{highlight, legend, set_color};
