//! extgroup: list the files beneath a directory, grouped by extension.
//!
//! Thin binary entry point. All logic lives in the `extgroup-core` crate;
//! this file only translates process arguments into a collection and a
//! report.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use extgroup_core::{collect_files, write_report, ReportFormat};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "extgroup")]
#[command(about = "Get files from a directory, grouped by extension")]
#[command(version)]
struct Cli {
    /// Name of a directory (or full path)
    dir_name: PathBuf,

    /// File type(s) to output, without the leading dot (all by default)
    #[arg(short = 't', long = "types", num_args = 1.., value_name = "EXT")]
    extensions: Option<Vec<String>>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Csv,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
            FormatArg::Csv => ReportFormat::Csv,
        }
    }
}

fn log_level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(io::stderr)
        .init();

    let format = ReportFormat::from(cli.format);
    tracing::info!(dir = %cli.dir_name.display(), format = format.label(), "extgroup starting");

    let index = collect_files(&cli.dir_name);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if format == ReportFormat::Text {
        // Two blank lines separate the report from the command line.
        out.write_all(b"\n\n").context("failed to write report")?;
    }
    write_report(&mut out, &index, cli.extensions.as_deref(), format)
        .context("failed to write report")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_types_after_directory() {
        let cli = Cli::try_parse_from(["extgroup", "my_dir", "-t", "exe", "txt", "pdf"]).unwrap();
        assert_eq!(cli.dir_name, PathBuf::from("my_dir"));
        assert_eq!(
            cli.extensions.as_deref(),
            Some(&["exe".to_string(), "txt".to_string(), "pdf".to_string()][..])
        );
        assert!(cli.format == FormatArg::Text);
    }

    #[test]
    fn types_flag_is_optional() {
        let cli = Cli::try_parse_from(["extgroup", "my_dir"]).unwrap();
        assert!(cli.extensions.is_none());
        assert_eq!(cli.verbose, 0);
    }

    /// `-t` with no values is malformed and must be rejected by the parser.
    #[test]
    fn types_flag_requires_a_value() {
        assert!(Cli::try_parse_from(["extgroup", "my_dir", "-t"]).is_err());
    }

    #[test]
    fn directory_is_required() {
        assert!(Cli::try_parse_from(["extgroup"]).is_err());
    }

    #[test]
    fn format_and_verbosity() {
        let cli = Cli::try_parse_from(["extgroup", "d", "--format", "json", "-vv"]).unwrap();
        assert_eq!(ReportFormat::from(cli.format), ReportFormat::Json);
        assert_eq!(log_level(cli.verbose), tracing::Level::DEBUG);
        assert_eq!(log_level(9), tracing::Level::TRACE);
    }
}
