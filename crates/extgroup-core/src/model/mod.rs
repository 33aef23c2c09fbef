/// Data model for extgroup.
///
/// Re-exports the extension index and the extension rule.
pub mod extension;
pub mod index;

pub use extension::extension_of;
pub use index::ExtensionIndex;
