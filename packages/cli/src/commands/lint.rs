use anyhow::Result;
use clap::Args;
use colored::Colorize;
use roadmap_editor::validate;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Input roadmap file or directory to lint
    pub input: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

/// Indentation errors of one file, with 1-based line numbers
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub file: String,
    pub lines: Vec<usize>,
}

pub fn lint(args: LintArgs, config: &Config) -> Result<()> {
    let files = if args.input.is_file() {
        vec![args.input.clone()]
    } else if args.input.is_dir() {
        find_roadmap_files(&args.input, config)
    } else {
        return Err(anyhow::anyhow!(
            "Input path does not exist: {}",
            args.input.display()
        ));
    };

    tracing::debug!(files = files.len(), "Linting roadmap files");

    let mut reports = Vec::new();
    for file in &files {
        let source = fs::read_to_string(file)?;
        reports.push(lint_source(&file.display().to_string(), &source));
    }

    let failed = reports.iter().filter(|r| !r.lines.is_empty()).count();

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_text(&reports, config);
    }

    if failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

pub fn lint_source(file: &str, source: &str) -> FileReport {
    let report = validate(source);

    FileReport {
        file: file.to_string(),
        lines: report.error_lines.iter().map(|l| l + 1).collect(),
    }
}

fn print_text(reports: &[FileReport], config: &Config) {
    for report in reports {
        if report.lines.is_empty() {
            println!("{} {}", "✓".green(), report.file);
            continue;
        }

        println!(
            "{} {}",
            "✗".red(),
            error_summary(report, &config.editor.invalid_message)
        );
    }

    let failed = reports.iter().filter(|r| !r.lines.is_empty()).count();

    println!();
    println!("   Files checked: {}", reports.len());
    if failed > 0 {
        println!("   {} {}", "Invalid:".red(), failed);
    } else {
        println!("   {} No issues found!", "✓".green());
    }
}

/// `plan.txt: invalid indentation on lines: 3, 7`
fn error_summary(report: &FileReport, message: &str) -> String {
    let lines: Vec<String> = report.lines.iter().map(|l| l.to_string()).collect();
    format!("{}: {} on lines: {}", report.file, message, lines.join(", "))
}

fn find_roadmap_files(dir: &Path, config: &Config) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| path.is_file() && config.matches(path))
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lint_source() {
        let report = lint_source("plan.txt", "Plan\n\tResearch\n\t\t\tDeep\n\tBuild");
        assert_eq!(report.lines, vec![3]);

        let report = lint_source("ok.txt", "Plan\n\tResearch");
        assert!(report.lines.is_empty());
    }

    #[test]
    fn test_error_summary_line_numbers() {
        let report = lint_source("plan.txt", "\tPlan\n\tA\n\t\t\tB");
        assert_eq!(
            error_summary(&report, "invalid indentation"),
            "plan.txt: invalid indentation on lines: 1, 3"
        );
    }

    #[test]
    fn test_report_json() {
        let report = lint_source("plan.txt", "\tPlan");
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"file":"plan.txt","lines":[1]}"#);
    }
}
