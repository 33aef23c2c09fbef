/// Reporter: renders an `ExtensionIndex` for humans or other tools.
///
/// The report covers either every extension in the index (in first-seen
/// order) or an explicit list supplied by the caller. Extensions the index
/// has never seen are not an error: they render as "no files" in text and
/// as an empty list in JSON.
mod delimited;
mod json;
mod text;

use crate::error::ReportError;
use crate::model::ExtensionIndex;
use std::io::{self, Write};

/// Output format of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportFormat {
    /// Grouped, bulleted listing.
    #[default]
    Text,
    /// Pretty-printed object keyed by extension.
    Json,
    /// `extension,file` rows.
    Csv,
}

impl ReportFormat {
    /// Short lowercase name, as accepted on the command line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

/// Resolve which extensions a report covers.
///
/// `None` or an empty list means every extension in the index.
fn requested_extensions<'a, S: AsRef<str>>(
    index: &'a ExtensionIndex,
    extensions: Option<&'a [S]>,
) -> Vec<&'a str> {
    match extensions {
        Some(list) if !list.is_empty() => list.iter().map(|ext| ext.as_ref()).collect(),
        _ => index.extensions().collect(),
    }
}

/// Write a report of `index` to `out` in the given format.
pub fn write_report<W: Write, S: AsRef<str>>(
    out: &mut W,
    index: &ExtensionIndex,
    extensions: Option<&[S]>,
    format: ReportFormat,
) -> Result<(), ReportError> {
    let requested = requested_extensions(index, extensions);
    match format {
        ReportFormat::Text => text::write_text(out, index, &requested)?,
        ReportFormat::Json => json::write_json(out, index, &requested)?,
        ReportFormat::Csv => delimited::write_csv(out, index, &requested)?,
    }
    out.flush()?;
    Ok(())
}

/// Print the text report of `index` to standard output.
pub fn print_files<S: AsRef<str>>(
    index: &ExtensionIndex,
    extensions: Option<&[S]>,
) -> Result<(), ReportError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, index, extensions, ReportFormat::Text)
}
