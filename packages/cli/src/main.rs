mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{fmt, lint, urls, FmtArgs, LintArgs, UrlsArgs};
use config::Config;
use tracing_subscriber::EnvFilter;

/// Roadmapper CLI - check and format tab-indented roadmaps
#[derive(Parser, Debug)]
#[command(name = "roadmap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check roadmap files for invalid indentation
    Lint(LintArgs),

    /// Convert a space-indented outline to tabs
    Fmt(FmtArgs),

    /// Print the image URLs of a roadmap page
    Urls(UrlsArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::load(&cwd)?;

    match cli.command {
        Command::Lint(args) => lint(args, &config),
        Command::Fmt(args) => fmt(args),
        Command::Urls(args) => urls(args, &config),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
