//! Command-line argument definitions.

use crate::config::{self, Input, Settings};
use crate::output::OutputFormat;
use crate::processing::PrefixPolicy;
use clap::Parser;
use std::path::PathBuf;

/// Extract IP addresses and CIDR blocks from text, sort them, and print them
/// as firewall / web server configuration lines.
#[derive(Parser, Debug)]
#[command(name = "cidr-sort")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text file to read (stdin when absent)
    #[arg(value_name = "FILE", conflicts_with = "cloudflare")]
    pub file: Option<PathBuf>,

    /// Output format: lines, space, f5, nginx, apache (or 0-4)
    #[arg(short = 'f', long = "format", default_value = "lines", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Write the result to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Use Cloudflare's published IP ranges as input
    #[arg(long = "cloudflare")]
    pub cloudflare: bool,

    /// Endpoint for --cloudflare
    #[arg(long = "cloudflare-url", value_name = "URL", default_value = config::CLOUDFLARE_IPS_URL)]
    pub cloudflare_url: String,

    /// Print the input with recognised addresses highlighted to stderr
    #[arg(long = "highlight")]
    pub highlight: bool,

    /// Drop entries whose prefix is longer than 32 (IPv4) or 128 (IPv6)
    #[arg(long = "strict-prefix")]
    pub strict_prefix: bool,

    /// Do not print the summary line
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// log4rs configuration file
    #[arg(long = "log-config", value_name = "FILE", default_value = config::LOG_CONFIG_FILE)]
    pub log_config: PathBuf,

    /// More logging when no log config file is found (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

impl Args {
    pub fn settings(&self) -> Settings {
        let input = if self.cloudflare {
            Input::Cloudflare {
                url: self.cloudflare_url.clone(),
            }
        } else {
            match &self.file {
                Some(path) => Input::File(path.clone()),
                None => Input::Stdin,
            }
        };
        Settings {
            input,
            output: self.output.clone(),
            format: self.format,
            policy: if self.strict_prefix {
                PrefixPolicy::Strict
            } else {
                PrefixPolicy::Lenient
            },
            highlight: self.highlight,
            quiet: self.quiet,
        }
    }
}
