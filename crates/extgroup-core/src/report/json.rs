/// JSON report: an object mapping each requested extension to its files.
///
/// Keys follow request order, so the selection is serialised by hand
/// rather than through an intermediate (sorted) `serde_json::Map`.
use crate::model::ExtensionIndex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::io::Write;

/// The requested slice of an index.
struct Selection<'a> {
    index: &'a ExtensionIndex,
    extensions: &'a [&'a str],
}

impl Serialize for Selection<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.extensions.len()))?;
        for ext in self.extensions {
            let names: Vec<&str> = self.index.files(ext).iter().map(|n| n.as_str()).collect();
            map.serialize_entry(ext, &names)?;
        }
        map.end()
    }
}

pub(super) fn write_json<W: Write>(
    out: &mut W,
    index: &ExtensionIndex,
    extensions: &[&str],
) -> Result<(), crate::ReportError> {
    let selection = Selection { index, extensions };
    serde_json::to_writer_pretty(&mut *out, &selection)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use compact_str::CompactString;

    fn sample_index() -> ExtensionIndex {
        let mut index = ExtensionIndex::new();
        for name in ["a.txt", "c.pdf", "b.txt"] {
            index.push(CompactString::new(name));
        }
        index
    }

    #[test]
    fn unseen_extension_is_an_empty_array() {
        let mut out = Vec::new();
        write_json(&mut out, &sample_index(), &["zzz"]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value, serde_json::json!({ "zzz": [] }));
    }

    #[test]
    fn keys_follow_request_order() {
        let mut out = Vec::new();
        write_json(&mut out, &sample_index(), &["pdf", "txt"]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let pdf = text.find("\"pdf\"").unwrap();
        let txt = text.find("\"txt\"").unwrap();
        assert!(pdf < txt, "pdf must be serialised before txt:\n{text}");
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn lists_files_in_traversal_order() {
        let mut out = Vec::new();
        write_json(&mut out, &sample_index(), &["txt"]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["txt"], serde_json::json!(["a.txt", "b.txt"]));
    }
}
