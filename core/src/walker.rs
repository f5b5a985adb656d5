//! Recursive enumeration of JavaScript sources.

use std::path::{Path, PathBuf};

use sapconv_common::error::ConvertError;

const JS_SUFFIX: &str = ".js";

/// Collects every file ending in `.js` under `root`, depth-first.
///
/// The list is materialized eagerly: command directories are small and
/// the batch loop wants a stable count up front. No filtering happens
/// beyond the suffix test, and no symlink cycles are detected.
pub async fn collect_js_files(root: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut entries = tokio::fs::read_dir(&dir).await.map_err(|source| {
            ConvertError::Walk {
                path: dir.clone(),
                source,
            }
        })?;

        while let Some(entry) = entries.next_entry().await.map_err(|source| {
            ConvertError::Walk {
                path: dir.clone(),
                source,
            }
        })? {
            let path = entry.path();
            let file_type = entry.file_type().await.map_err(|source| {
                ConvertError::Walk {
                    path: path.clone(),
                    source,
                }
            })?;

            if file_type.is_dir() {
                pending.push(path);
            } else if path.to_string_lossy().ends_with(JS_SUFFIX) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::collect_js_files;
    use std::fs;

    #[tokio::test]
    async fn finds_nested_js_and_ignores_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        fs::write(root.join("a.js"), "// a").unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub").join("b.js"), "// b").unwrap();
        fs::write(root.join("c.txt"), "not a command").unwrap();

        let mut found = collect_js_files(root).await.unwrap();
        found.sort();

        assert_eq!(found.len(), 2, "expected exactly the two .js files");
        assert!(found[0].ends_with("a.js"));
        assert!(found[1].ends_with("sub/b.js"));
    }

    #[tokio::test]
    async fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(collect_js_files(&missing).await.is_err());
    }
}
