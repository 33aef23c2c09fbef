/// Plain-text report: one block per requested extension.
///
/// ```text
/// txt files:
///
/// - a.txt
/// - b.txt
///
///
/// no files of type zzz found
///
/// ```
use crate::model::ExtensionIndex;
use std::io::{self, Write};

pub(super) fn write_text<W: Write>(
    out: &mut W,
    index: &ExtensionIndex,
    extensions: &[&str],
) -> io::Result<()> {
    for ext in extensions {
        let files = index.files(ext);
        if files.is_empty() {
            writeln!(out, "no files of type {ext} found\n")?;
            continue;
        }

        writeln!(out, "{ext} files:\n")?;
        for name in files {
            writeln!(out, "- {name}")?;
        }
        writeln!(out, "\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use compact_str::CompactString;

    fn render(names: &[&str], extensions: &[&str]) -> String {
        let mut index = ExtensionIndex::new();
        for name in names {
            index.push(CompactString::new(name));
        }
        let mut out = Vec::new();
        write_text(&mut out, &index, extensions).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn populated_extension_renders_header_and_bullets() {
        let out = render(&["a.txt", "b.txt"], &["txt"]);
        assert_eq!(out, "txt files:\n\n- a.txt\n- b.txt\n\n\n");
    }

    #[test]
    fn unseen_extension_renders_single_message() {
        let out = render(&["a.txt"], &["zzz"]);
        assert_eq!(out, "no files of type zzz found\n\n");
    }

    /// Extensionless files are grouped under the empty key.
    #[test]
    fn empty_extension_key() {
        let out = render(&["Makefile"], &[""]);
        assert_eq!(out, " files:\n\n- Makefile\n\n\n");
    }

    #[test]
    fn blocks_follow_requested_order() {
        let out = render(&["a.txt", "c.pdf"], &["pdf", "zzz", "txt"]);
        assert_eq!(
            out,
            "pdf files:\n\n- c.pdf\n\n\n\
             no files of type zzz found\n\n\
             txt files:\n\n- a.txt\n\n\n"
        );
    }

    #[test]
    fn nothing_requested_writes_nothing() {
        assert_eq!(render(&["a.txt"], &[]), "");
    }
}
