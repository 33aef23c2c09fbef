/// CSV report: an `extension,file` header then one row per file.
///
/// Requested extensions without files contribute no rows.
use crate::model::ExtensionIndex;
use std::io::Write;

pub(super) fn write_csv<W: Write>(
    out: &mut W,
    index: &ExtensionIndex,
    extensions: &[&str],
) -> Result<(), crate::ReportError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["extension", "file"])?;
    for ext in extensions {
        for name in index.files(ext) {
            writer.write_record([*ext, name.as_str()])?;
        }
    }
    writer.flush()?;
    Ok(())
}
