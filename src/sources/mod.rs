//! Where text comes from and where rendered output goes.
//!
//! - [`file`] - File and stdin input, file output
//! - [`cloudflare`] - Cloudflare published ranges over HTTP

mod cloudflare;
mod file;

use crate::config::Input;
use crate::error::Result;

pub use cloudflare::{fetch_ranges, ranges_to_text, IpsResponse, IpsResult};
pub use file::{read_stdin, read_text, write_text};

/// Load the full input text for a run.
pub async fn load(input: &Input) -> Result<String> {
    match input {
        Input::File(path) => read_text(path),
        Input::Stdin => read_stdin(),
        Input::Cloudflare { url } => fetch_ranges(url).await,
    }
}
