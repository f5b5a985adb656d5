//! File boundary of the pipeline: reading command sources, writing the
//! converted output, and the overwrite/replace policy.

use std::path::{Path, PathBuf};

use sapconv_common::config::Config;
use sapconv_common::error::ConvertError;
use tracing::{error, warn};

const JS_SUFFIX: &str = ".js";
const TS_EXTENSION: &str = "ts";

/// What [`save_typescript_file`] did with the output.
#[derive(Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Output written to the contained path.
    Written(PathBuf),
    /// Output already existed and overwriting is disabled.
    SkippedExisting,
}

/// Reads a JavaScript source file, appending the `.js` suffix when the
/// given path does not already end with it. Returns the path actually
/// read alongside the text.
pub async fn read_javascript_file(input: &Path) -> Result<(PathBuf, String), ConvertError> {
    let path = append_js_suffix(input);
    let text = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| ConvertError::Read {
            path: path.clone(),
            source,
        })?;
    Ok((path, text))
}

fn append_js_suffix(input: &Path) -> PathBuf {
    if input.to_string_lossy().ends_with(JS_SUFFIX) {
        return input.to_path_buf();
    }
    let mut path = input.as_os_str().to_os_string();
    path.push(JS_SUFFIX);
    PathBuf::from(path)
}

/// Writes converted TypeScript to `output_path` with its extension
/// replaced by `.ts`, creating parent directories as needed.
///
/// With `overwrite` disabled and the output already present, nothing is
/// written. With `replace` enabled, the original source file is deleted
/// after a successful write; a deletion failure is reported but never
/// rolls back the write that already happened.
pub async fn save_typescript_file(
    ts_code: &str,
    output_path: &Path,
    source_path: &Path,
    cfg: &Config,
) -> Result<SaveOutcome, ConvertError> {
    let output_file = output_path.with_extension(TS_EXTENSION);

    if let Some(parent) = output_file.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ConvertError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
    }

    if !cfg.overwrite && tokio::fs::try_exists(&output_file).await.unwrap_or(false) {
        warn!("File {} already exists. Skipping.", output_file.display());
        return Ok(SaveOutcome::SkippedExisting);
    }

    tokio::fs::write(&output_file, ts_code)
        .await
        .map_err(|source| ConvertError::Write {
            path: output_file.clone(),
            source,
        })?;

    if cfg.replace {
        if let Err(err) = tokio::fs::remove_file(source_path).await {
            error!("Error deleting original JavaScript file: {err}");
        }
    }

    Ok(SaveOutcome::Written(output_file))
}
