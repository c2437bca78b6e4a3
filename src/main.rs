use cidr_sort::cli::Args;
use cidr_sort::output::{highlight, legend, set_color};
use cidr_sort::{logging, run};
use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::io::{IsTerminal, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    logging::init(&args.log_config, args.verbose)?;
    log::info!("#Start main()");

    let settings = args.settings();
    // Status and highlight output go to stderr
    set_color(std::io::stderr().is_terminal());
    let outcome = match run(&settings).await {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "ERROR".on_red());
            std::process::exit(1);
        }
    };
    let processed = &outcome.processed;

    if settings.highlight {
        let color = std::io::stderr().is_terminal();
        eprintln!("{}", highlight(&outcome.text, &processed.segments, color));
        if color {
            eprintln!("{}", legend(color));
        }
    }

    if settings.output.is_none() {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(processed.rendered.as_bytes())?;
        stdout.flush()?;
    }

    if !settings.quiet {
        eprintln!("{}", processed.summary.to_string().bold());
    }

    Ok(())
}
