// cargo watch -x 'fmt' -x 'test'

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod sources;

use config::Settings;
use std::error::Error;

pub use models::{AddressRecord, Family, MatchSpan};
pub use output::{OutputFormat, Summary};
pub use processing::{process, PrefixPolicy, Processed};

/// Extract, sort and render the addresses found in `text`.
pub fn sort_text(text: &str, format: OutputFormat) -> String {
    process(text, format, PrefixPolicy::default()).rendered
}

/// Result of a run: the text that was read and what came out of it.
#[derive(Debug)]
pub struct Outcome {
    pub text: String,
    pub processed: Processed,
}

/// Load the configured input, process it, and write the rendering to the
/// output file when one is set.
pub async fn run(settings: &Settings) -> Result<Outcome, Box<dyn Error>> {
    let text = sources::load(&settings.input).await?;
    let processed = process(&text, settings.format, settings.policy);
    log::info!(
        "Processed {} bytes: {} format={}",
        text.len(),
        processed.summary,
        settings.format
    );

    if let Some(path) = &settings.output {
        sources::write_text(path, &processed.rendered)?;
    }
    Ok(Outcome { text, processed })
}
