//! TDIFF command-line interface.
//!
//! Thin wrapper over the library facade: parse arguments, compare the two
//! files, print the rendered patch, and exit 0 (no changes), 1 (changes),
//! or 2 (error).

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process;
use tdiff::{DiffOptions, DiffResult, Differ, PatchFormat};

/// TDIFF - structural diff for JSON, YAML, and TOML
///
/// Compares two structured data files and reports additions, removals, and
/// replacements by path, ignoring formatting differences.
#[derive(Parser)]
#[command(name = "tdiff")]
#[command(version)]
#[command(about = "Structural diff tool for structured data", long_about = None)]
struct Cli {
    /// First file to compare
    #[arg(value_name = "FILE1")]
    file1: PathBuf,

    /// Second file to compare
    #[arg(value_name = "FILE2")]
    file2: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "unified")]
    format: PatchFormatArg,

    /// Force the semantic report format, overriding --format
    #[arg(long)]
    semantic: bool,

    /// Ignore common metadata fields (timestamps, versions, uids)
    #[arg(long)]
    ignore_metadata: bool,

    /// Ignore ordering of arrays whose elements have id/name/key fields
    #[arg(long)]
    ignore_order: bool,

    /// Context lines hint for the unified format
    #[arg(long, default_value = "3")]
    context_lines: usize,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Verbose output (show progress on stderr)
    #[arg(short, long)]
    verbose: bool,
}

/// Output format argument for clap
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum PatchFormatArg {
    /// Unified-diff-style text
    Unified,
    /// Two-column side-by-side text
    SideBySide,
    /// JSON array of patch-like operations
    JsonPatch,
    /// Human-readable semantic report
    Semantic,
}

impl From<PatchFormatArg> for PatchFormat {
    fn from(arg: PatchFormatArg) -> Self {
        match arg {
            PatchFormatArg::Unified => PatchFormat::Unified,
            PatchFormatArg::SideBySide => PatchFormat::SideBySide,
            PatchFormatArg::JsonPatch => PatchFormat::JsonPatch,
            PatchFormatArg::Semantic => PatchFormat::Semantic,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let options = DiffOptions {
        format: cli.format.into(),
        ignore_metadata: cli.ignore_metadata,
        ignore_order: cli.ignore_order,
        context_lines: cli.context_lines,
        colorize: !cli.no_color,
        semantic: cli.semantic,
    };
    let colorize = options.colorize;
    let differ = Differ::new(options);

    if cli.verbose {
        eprintln!(
            "Comparing {} and {}...",
            cli.file1.display(),
            cli.file2.display()
        );
    }

    let result = differ
        .compare_files(&cli.file1, &cli.file2)
        .context("Comparison failed")?;

    if !result.patch.is_empty() {
        if colorize {
            print!("{}", colorize_patch(&result.patch));
        } else {
            print!("{}", result.patch);
        }
    }

    Ok(exit_code(&result))
}

fn exit_code(result: &DiffResult) -> i32 {
    if result.has_changes {
        1
    } else {
        0
    }
}

/// Colors patch lines by their leading marker. The patch text itself is
/// never altered; only ANSI wrapping is added for display.
fn colorize_patch(patch: &str) -> String {
    let mut out = String::with_capacity(patch.len());
    for line in patch.lines() {
        let colored_line = if line.starts_with("+++") || line.starts_with("---") {
            line.bold().to_string()
        } else if line.starts_with('+') {
            line.green().to_string()
        } else if line.starts_with('-') {
            line.red().to_string()
        } else if line.starts_with('~') {
            line.yellow().to_string()
        } else {
            line.to_string()
        };
        out.push_str(&colored_line);
        out.push('\n');
    }
    out
}
