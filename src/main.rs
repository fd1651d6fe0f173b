use anyhow::{Context, Result};
use clap::Parser;
use meancalc::{Input, summarize};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// TOML file with the values to average (defaults to a built-in sample)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Number of leading values to average
    #[arg(long)]
    count: Option<usize>,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let input = match &args.input {
        Some(file) => Input::from_file(file).context("failed to load input")?,
        None => Input::sample(),
    };
    log::info!("{input:?}");

    let count = args.count.unwrap_or_else(|| input.count());

    let report = summarize(&input.values, count).context("failed to compute mean")?;
    log::info!("sum of {} values is {}", report.count, report.sum);

    println!("{:?}", report.mean);

    Ok(())
}
