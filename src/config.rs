//! Constants and runtime settings.

use crate::output::OutputFormat;
use crate::processing::PrefixPolicy;
use std::path::PathBuf;

/// Cloudflare's published edge ranges.
pub const CLOUDFLARE_IPS_URL: &str = "https://api.cloudflare.com/client/v4/ips";

/// Timeout for the Cloudflare request.
pub const HTTP_TIMEOUT_SEC: u64 = 15;

pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Where the text to process comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    File(PathBuf),
    Stdin,
    Cloudflare { url: String },
}

/// Settings for one run, built from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: Input,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub policy: PrefixPolicy,
    pub highlight: bool,
    pub quiet: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            input: Input::Stdin,
            output: None,
            format: OutputFormat::default(),
            policy: PrefixPolicy::default(),
            highlight: false,
            quiet: false,
        }
    }
}
