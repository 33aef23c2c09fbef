//! Extension rule used to key the index.
//!
//! The extension is everything after the last `.` of a basename. Leading
//! dots are part of the stem, so dotfiles such as `.bashrc` have no
//! extension. Matching is case-sensitive: `JPG` and `jpg` are different keys.

/// Return the extension of `name` without its separator.
///
/// Returns `""` when the name has no `.`, when only dots precede the last
/// `.` (`.bashrc`, `..`), or when the name ends with a `.`.
pub fn extension_of(name: &str) -> &str {
    let Some(dot) = name.rfind('.') else {
        return "";
    };

    // A stem made only of dots means the "extension" is really the name.
    if name[..dot].bytes().all(|b| b == b'.') {
        return "";
    }

    &name[dot + 1..]
}
