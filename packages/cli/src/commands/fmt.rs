use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use roadmap_editor::{normalize_paste, EditorError};
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Roadmap file to normalize
    pub input: PathBuf,

    /// Write the result back instead of printing it
    #[arg(short, long)]
    pub write: bool,
}

/// Normalize a space-indented outline into the tab-indented form
pub fn fmt(args: FmtArgs) -> Result<()> {
    let source = fs::read_to_string(&args.input)?;

    let formatted = format_source(&source)
        .map_err(|e| anyhow!("{}: {}", args.input.display(), e.user_message()))?;

    if args.write {
        if formatted != source {
            fs::write(&args.input, &formatted)?;
        }
        println!("{} {}", "Formatted".green().bold(), args.input.display());
    } else {
        print!("{}", formatted);
    }

    Ok(())
}

/// Normalize a whole file; trailing blank lines collapse into one final newline
pub fn format_source(source: &str) -> Result<String, EditorError> {
    let formatted = normalize_paste(source.trim_end())?;
    Ok(format!("{}\n", formatted))
}
