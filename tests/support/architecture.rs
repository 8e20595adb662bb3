use std::fs;
use std::path::{Path, PathBuf};

/// `(path relative to the crate root, 1-based line number, line)`.
pub type Hit = (String, usize, String);

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn display_path(path: &Path) -> String {
    path.strip_prefix(crate_root())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("failed to read dir {}: {e}", dir.display()));

    for entry in entries {
        let path = entry
            .unwrap_or_else(|e| panic!("failed to read dir entry: {e}"))
            .path();
        if path.is_dir() {
            walk(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// Every line of every source file under `relative_dir`, in path order.
fn source_lines(relative_dir: &str) -> Vec<Hit> {
    let mut files = Vec::new();
    walk(&crate_root().join(relative_dir), &mut files);
    files.sort();

    files
        .iter()
        .flat_map(|file| {
            let content = fs::read_to_string(file)
                .unwrap_or_else(|e| panic!("failed to read {}: {e}", file.display()));
            let path = display_path(file);
            content
                .lines()
                .enumerate()
                .map(|(idx, line)| (path.clone(), idx + 1, line.to_string()))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Lines under `relative_dir` containing any of `patterns`.
pub fn find_lines_containing(relative_dir: &str, patterns: &[&str]) -> Vec<Hit> {
    source_lines(relative_dir)
        .into_iter()
        .filter(|(_, _, line)| patterns.iter().any(|p| line.contains(p)))
        .collect()
}

/// Like [`find_lines_containing`], ignoring the files in `allowed`.
pub fn find_lines_containing_except_files(
    relative_dir: &str,
    patterns: &[&str],
    allowed: &[&str],
) -> Vec<Hit> {
    find_lines_containing(relative_dir, patterns)
        .into_iter()
        .filter(|(path, _, _)| !allowed.contains(&path.as_str()))
        .collect()
}

/// Lines in `mod.rs` files that are not docs, comments, module
/// declarations, cfg attributes or single-line re-exports.
pub fn find_non_export_lines_in_mod_files(relative_dir: &str) -> Vec<Hit> {
    const ALLOWED_PREFIXES: [&str; 5] = ["//", "pub mod ", "mod ", "pub use ", "#[cfg"];

    source_lines(relative_dir)
        .into_iter()
        .filter(|(path, _, _)| path.ends_with("/mod.rs"))
        .filter(|(_, _, line)| {
            let line = line.trim();
            !line.is_empty() && !ALLOWED_PREFIXES.iter().any(|p| line.starts_with(p))
        })
        .collect()
}
