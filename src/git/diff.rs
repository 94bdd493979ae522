//! Diff post-processing: per-file splitting, stats and noise filtering.

use crate::git::DiffStats;

/// One file's slice of a larger diff.
#[derive(Debug, Clone)]
pub struct FileDiff {
    /// File name relative to the repository root.
    pub filename: String,
    /// The full patch for this file, from its `diff --git` header to the
    /// next file boundary.
    pub content: String,
    /// The file was deleted in this diff.
    pub deleted: bool,
    pub insertions: usize,
    pub deletions: usize,
}

/// Lock files and other generated artifacts that only add noise to the
/// model context.
const AUTO_GENERATED_BASENAMES: &[&str] = &[
    "package-lock.json",
    "pnpm-lock.yaml",
    "yarn.lock",
    "Cargo.lock",
    "go.sum",
];

const AUTO_GENERATED_SUFFIXES: &[&str] = &[".lock", ".min.js", ".min.css"];

/// Returns `true` if `filename` looks auto-generated.
pub fn is_auto_generated(filename: &str) -> bool {
    let basename = filename.rsplit('/').next().unwrap_or(filename);
    AUTO_GENERATED_BASENAMES.contains(&basename)
        || AUTO_GENERATED_SUFFIXES.iter().any(|s| basename.ends_with(s))
}

fn extract_filename_from_diff_header(line: &str) -> Option<String> {
    const PREFIX: &str = "diff --git ";
    let rest = line.strip_prefix(PREFIX)?;

    // Locate the a/..b/ boundary via " b/" so paths with spaces survive.
    if let Some(b_pos) = rest.find(" b/") {
        return rest[..b_pos].strip_prefix("a/").map(str::to_string);
    }

    // Quoted paths: diff --git "a/with space.rs" "b/with space.rs"
    if let Some(stripped) = rest.strip_prefix('"') {
        if let Some(end) = stripped.find('"') {
            return stripped[..end].strip_prefix("a/").map(str::to_string);
        }
    }

    rest.split_whitespace()
        .next()
        .and_then(|s| s.strip_prefix("a/"))
        .map(str::to_string)
}

/// Splits a raw diff into per-file patches, preserving file order.
pub fn split_diff_by_file(diff: &str) -> Vec<FileDiff> {
    if diff.is_empty() {
        return Vec::new();
    }

    #[derive(Default)]
    struct Pending<'a> {
        lines: Vec<&'a str>,
        deleted: bool,
        insertions: usize,
        deletions: usize,
    }

    let mut files: Vec<FileDiff> = Vec::new();
    let mut current_filename: Option<String> = None;
    let mut pending = Pending::default();

    let mut flush = |filename: Option<String>, pending: &mut Pending| {
        if let Some(filename) = filename {
            files.push(FileDiff {
                filename,
                content: pending.lines.join("\n"),
                deleted: pending.deleted,
                insertions: pending.insertions,
                deletions: pending.deletions,
            });
        }
        *pending = Pending::default();
    };

    for line in diff.lines() {
        if line.starts_with("diff --git") {
            flush(current_filename.take(), &mut pending);
            current_filename = extract_filename_from_diff_header(line);
        } else if current_filename.is_some() {
            if line.starts_with("deleted file mode") {
                pending.deleted = true;
            } else if line.starts_with('+') && !line.starts_with("+++") {
                pending.insertions += 1;
            } else if line.starts_with('-') && !line.starts_with("---") {
                pending.deletions += 1;
            }
        }
        pending.lines.push(line);
    }
    flush(current_filename, &mut pending);

    files
}

/// Drops auto-generated and deleted files from a diff and reassembles it
/// together with the stats of what remains.
pub fn filter_diff(diff: &str) -> (String, DiffStats) {
    let files: Vec<FileDiff> = split_diff_by_file(diff)
        .into_iter()
        .filter(|f| !f.deleted && !is_auto_generated(&f.filename))
        .collect();

    let stats = DiffStats {
        files_changed: files.iter().map(|f| f.filename.clone()).collect(),
        insertions: files.iter().map(|f| f.insertions).sum(),
        deletions: files.iter().map(|f| f.deletions).sum(),
    };

    let content = files
        .iter()
        .map(|f| f.content.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    (content, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TWO_FILE_DIFF: &str = "diff --git a/src/main.rs b/src/main.rs\n\
index 1234567..abcdefg 100644\n\
--- a/src/main.rs\n\
+++ b/src/main.rs\n\
@@ -1,3 +1,4 @@\n\
 fn main() {\n\
+    println!(\"Hello\");\n\
-    println!(\"Old\");\n\
 }\n\
diff --git a/Cargo.lock b/Cargo.lock\n\
index 0000000..1111111 100644\n\
--- a/Cargo.lock\n\
+++ b/Cargo.lock\n\
@@ -1,1 +1,2 @@\n\
+[[package]]\n";

    #[test]
    fn test_split_diff_by_file() {
        let files = split_diff_by_file(TWO_FILE_DIFF);
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].filename, "src/main.rs");
        assert_eq!(files[0].insertions, 1);
        assert_eq!(files[0].deletions, 1);
        assert_eq!(files[1].filename, "Cargo.lock");
        assert!(files[1].content.starts_with("diff --git a/Cargo.lock"));
    }

    #[test]
    fn test_split_diff_empty() {
        assert!(split_diff_by_file("").is_empty());
    }

    #[test]
    fn test_filename_with_spaces() {
        let line = "diff --git a/my file.rs b/my file.rs";
        assert_eq!(
            extract_filename_from_diff_header(line),
            Some("my file.rs".to_string())
        );
    }

    #[test]
    fn test_is_auto_generated() {
        assert!(is_auto_generated("package-lock.json"));
        assert!(is_auto_generated("sub/dir/yarn.lock"));
        assert!(is_auto_generated("Cargo.lock"));
        assert!(is_auto_generated("dist/app.min.js"));
        assert!(!is_auto_generated("src/main.rs"));
        assert!(!is_auto_generated("locker.rs"));
    }

    #[test]
    fn test_filter_diff_drops_lock_files() {
        let (content, stats) = filter_diff(TWO_FILE_DIFF);
        assert_eq!(stats.files_changed, vec!["src/main.rs"]);
        assert_eq!(stats.insertions, 1);
        assert_eq!(stats.deletions, 1);
        assert!(!content.contains("Cargo.lock"));
        assert!(content.contains("src/main.rs"));
    }

    #[test]
    fn test_filter_diff_drops_deleted_files() {
        let diff = "diff --git a/src/old.rs b/src/old.rs\n\
deleted file mode 100644\n\
index 1234567..0000000\n\
--- a/src/old.rs\n\
+++ /dev/null\n\
@@ -1,1 +0,0 @@\n\
-fn gone() {}\n\
diff --git a/src/new.rs b/src/new.rs\n\
index 0000000..abcdefg 100644\n\
--- a/src/new.rs\n\
+++ b/src/new.rs\n\
@@ -0,0 +1,1 @@\n\
+fn here() {}\n";
        let files = split_diff_by_file(diff);
        assert!(files[0].deleted);
        assert!(!files[1].deleted);

        let (content, stats) = filter_diff(diff);
        assert_eq!(stats.files_changed, vec!["src/new.rs"]);
        assert!(!content.contains("old.rs"));
    }

    #[test]
    fn test_filter_diff_everything_filtered() {
        let diff = "diff --git a/yarn.lock b/yarn.lock\n+something\n";
        let (content, stats) = filter_diff(diff);
        assert!(content.is_empty());
        assert!(stats.files_changed.is_empty());
    }
}
