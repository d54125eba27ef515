//! CLI argument definitions for the animal dataset normalizer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use fauna_model::ColumnRole;
use fauna_output::DEFAULT_LABEL;

#[derive(Parser)]
#[command(
    name = "fauna",
    version,
    about = "Normalize messy animal datasets into name,speed,diet CSV",
    long_about = "Normalize a loosely structured animal dataset into a canonical CSV.\n\n\
                  Finds the name, speed and diet columns under unknown headers, parses\n\
                  free-form speeds (ranges, number words, units) and maps diets onto\n\
                  carnivore, herbivore or omnivore. Rows that cannot be normalized are dropped."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean an input file and write the canonical CSV outputs.
    Clean(CleanArgs),

    /// Show which source columns would be used for name, speed and diet.
    Columns(ColumnsArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// Delimited input file; the first row holds the headers.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Field delimiter for input and output (single ASCII character, or "tab").
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

#[derive(Args)]
pub struct CleanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory for generated files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Label embedded in the exported file name ("<LABEL> - Cleaned Animal Data.csv").
    #[arg(long = "label", default_value = DEFAULT_LABEL)]
    pub label: String,

    /// Path of the shared sample copy (default: <DIR>/sample_animals.csv).
    #[arg(long = "sample-path", value_name = "PATH", conflicts_with = "no_sample")]
    pub sample_path: Option<PathBuf>,

    /// Skip writing the shared sample copy.
    #[arg(long = "no-sample")]
    pub no_sample: bool,

    /// Clean and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the run report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ColumnsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only report these roles (name, speed, diet); repeatable.
    #[arg(long = "role", value_name = "ROLE")]
    pub roles: Vec<ColumnRole>,

    /// Print the mapping as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    if raw.eq_ignore_ascii_case("tab") || raw == "\\t" {
        return Ok(b'\t');
    }
    match raw.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!("delimiter must be a single ASCII character, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_delimiters() {
        assert_eq!(parse_delimiter(","), Ok(b','));
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter("tab"), Ok(b'\t'));
        assert_eq!(parse_delimiter("\t"), Ok(b'\t'));
        assert!(parse_delimiter("::").is_err());
        assert!(parse_delimiter("é").is_err());
    }

    #[test]
    fn parses_clean_command() {
        let cli = Cli::try_parse_from([
            "fauna",
            "clean",
            "animals.csv",
            "--label",
            "Ada",
            "--no-sample",
            "--delimiter",
            ";",
        ])
        .expect("parse args");
        let Command::Clean(args) = cli.command else {
            panic!("expected clean command");
        };
        assert_eq!(args.input.input, PathBuf::from("animals.csv"));
        assert_eq!(args.input.delimiter, b';');
        assert_eq!(args.label, "Ada");
        assert!(args.no_sample);
        assert_eq!(args.output_dir, PathBuf::from("."));
    }

    #[test]
    fn parses_role_filter() {
        let cli = Cli::try_parse_from([
            "fauna", "columns", "animals.csv", "--role", "Diet", "--role", "speed",
        ])
        .expect("parse args");
        let Command::Columns(args) = cli.command else {
            panic!("expected columns command");
        };
        assert_eq!(args.roles, vec![ColumnRole::Diet, ColumnRole::Speed]);
    }

    #[test]
    fn rejects_unknown_role() {
        let result = Cli::try_parse_from(["fauna", "columns", "animals.csv", "--role", "habitat"]);
        assert!(result.is_err());
    }

    #[test]
    fn sample_path_conflicts_with_no_sample() {
        let result = Cli::try_parse_from([
            "fauna",
            "clean",
            "animals.csv",
            "--no-sample",
            "--sample-path",
            "x.csv",
        ]);
        assert!(result.is_err());
    }
}
