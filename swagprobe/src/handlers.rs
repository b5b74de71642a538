use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;
use swagprobe_core::report::generate_summary;
use swagprobe_core::{CandidatePaths, CheckOptions, OutputFormat, run_check};
use tracing::Level;

/// Install the fmt subscriber. Quiet by default, every probe with `-v`.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Expand a leading `~` in a user supplied path
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Turn parsed arguments into run options
pub fn build_check_options(args: &ArgMatches) -> Result<CheckOptions> {
    let input = args
        .get_one::<String>("input")
        .ok_or_else(|| anyhow!("--input is required"))?;
    let output = args
        .get_one::<String>("output")
        .ok_or_else(|| anyhow!("--output is required"))?;

    let format = match args.get_one::<String>("format") {
        Some(format) => format.parse::<OutputFormat>().map_err(|e| anyhow!(e))?,
        None => OutputFormat::default(),
    };

    let paths = args
        .get_one::<String>("paths")
        .map(|list| CandidatePaths::parse_list(list))
        .unwrap_or_default();

    let timeout = args
        .get_one::<u64>("timeout")
        .map(|secs| Duration::from_secs(*secs));

    let quiet = args.get_flag("quiet");
    let verbose = args.get_flag("verbose");

    Ok(CheckOptions {
        input: expand_path(input),
        output: expand_path(output),
        format,
        paths,
        timeout,
        // Spinner and debug logs fight over the terminal
        show_progress_bars: !quiet && !verbose,
    })
}

pub async fn handle_check(args: &ArgMatches) -> Result<()> {
    let quiet = args.get_flag("quiet");
    let options = build_check_options(args)?;
    let output = options.output.clone();

    if !quiet {
        println!(
            "{} Input: {}",
            "→".blue(),
            options.input.display().to_string().bright_white()
        );
        println!(
            "{} Paths: {}",
            "→".blue(),
            options
                .paths
                .iter()
                .map(|p| if p.is_empty() { "/" } else { p })
                .collect::<Vec<_>>()
                .join(" ")
                .bright_white()
        );
        match options.timeout {
            Some(timeout) => println!("{} Timeout: {}s", "→".blue(), timeout.as_secs()),
            None => println!("{} Timeout: none", "→".blue()),
        }
        println!();
    }

    let records = run_check(options).await.context("Check failed")?;

    if !quiet {
        print!("{}", generate_summary(&records));
        println!();
    }

    println!(
        "{} Results saved to {}",
        "✓".green().bold(),
        output.display().to_string().bright_white()
    );

    Ok(())
}
