/// extgroup core: directory collection, extension index, and reporting.
///
/// This crate contains all business logic with zero CLI dependencies.
/// It is designed to be embedded directly as a library dependency.
///
/// # Modules
///
/// - [`model`]: The `ExtensionIndex` and the extension rule.
/// - [`collector`]: Recursive directory walk that builds an index.
/// - [`report`]: Text, JSON, and CSV rendering of an index.
/// - [`error`]: Errors raised while writing a report.
pub mod collector;
pub mod error;
pub mod model;
pub mod report;

pub use collector::collect_files;
pub use error::ReportError;
pub use model::{extension_of, ExtensionIndex};
pub use report::{print_files, write_report, ReportFormat};
