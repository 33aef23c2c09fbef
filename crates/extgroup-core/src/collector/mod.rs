/// Collector: recursive directory walk that builds an `ExtensionIndex`.
///
/// Uses `jwalk` in serial mode: a single thread, no rayon pool, entries
/// yielded in the order the filesystem lists them. Hidden entries are
/// included and symlinks are not followed.
///
/// # Silent-empty policy
///
/// The root is not validated up front. A missing root, or a root that is a
/// regular file, produces no recordable entries, so the caller gets an empty
/// index. Per-entry walk errors (e.g. permission denied on a subdirectory)
/// are logged at `debug` and skipped.
use crate::model::ExtensionIndex;
use compact_str::CompactString;
use jwalk::DirEntry;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Walk `dir` and every nested subdirectory, grouping file basenames by
/// extension.
///
/// Never fails: anything that cannot be read is left out of the index.
pub fn collect_files(dir: impl AsRef<Path>) -> ExtensionIndex {
    let root = dir.as_ref();
    let start = Instant::now();
    let mut index = ExtensionIndex::new();
    let mut error_count: u64 = 0;

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                error_count += 1;
                debug!(
                    path = %err.path().map(|p| p.display().to_string()).unwrap_or_default(),
                    error = %err,
                    "Skipping unreadable entry"
                );
                continue;
            }
        };

        // The root itself is never a member of the index.
        if entry.depth == 0 {
            continue;
        }

        if is_directory(&entry) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        index.push(CompactString::new(file_name.as_ref()));
    }

    info!(
        root = %root.display(),
        files = index.total_files(),
        extensions = index.len(),
        errors = error_count,
        elapsed = ?start.elapsed(),
        "Collection complete"
    );

    index
}

/// `true` for directories and for symlinks that resolve to a directory.
///
/// Links are not followed during the walk, so a link to a directory is
/// neither descended into nor recorded. Dangling links count as files.
fn is_directory(entry: &DirEntry<((), ())>) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return true;
    }
    if file_type.is_symlink() {
        return std::fs::metadata(entry.path())
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
    }
    false
}
