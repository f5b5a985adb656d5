//! End-to-end conversion flows shared by the CLI commands.
//!
//! Each file runs read → transform → write (→ delete) to completion
//! before the next one starts; there is no parallel file processing and
//! no state shared across files.

use std::path::{Path, PathBuf};

use sapconv_common::config::Config;
use sapconv_common::error::ConvertError;
use tracing::{error, info};

use crate::io::{self, SaveOutcome};
use crate::{converter, walker};

/// Converts a single command file.
///
/// `output_path` defaults to the input's directory and basename; the
/// `.ts` extension is derived either way. Returns the path of the
/// written output, or `None` when the write was skipped.
pub async fn convert_file(
    input_file: &Path,
    output_path: Option<&Path>,
    cfg: &Config,
) -> Result<Option<PathBuf>, ConvertError> {
    let (source_path, js_code) = io::read_javascript_file(input_file).await?;
    let ts_code = converter::convert_source(&js_code)?;

    let output_path = output_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| source_path.with_extension(""));

    match io::save_typescript_file(&ts_code, &output_path, &source_path, cfg).await? {
        SaveOutcome::Written(path) => {
            info!("Cmd converted & saved to {}", path.display());
            Ok(Some(path))
        }
        SaveOutcome::SkippedExisting => Ok(None),
    }
}

/// Recursively converts every `.js` file under `directory`, mirroring
/// the tree into `output_directory` (in place when omitted). Returns
/// the number of files written.
///
/// A failing file aborts the remaining batch; the error propagates to
/// the caller, which reports it without failing the process.
pub async fn convert_directory(
    directory: &Path,
    output_directory: Option<&Path>,
    cfg: &Config,
) -> Result<usize, ConvertError> {
    let js_files = walker::collect_js_files(directory).await?;
    if js_files.is_empty() {
        error!(
            "No JavaScript files found in directory {}.",
            directory.display()
        );
        return Ok(0);
    }
    info!("Found {} JavaScript files to convert.", js_files.len());

    let target_root = output_directory.unwrap_or(directory);
    let mut written = 0usize;

    for js_file in &js_files {
        info!("Converting {}...", js_file.display());

        let (source_path, js_code) = io::read_javascript_file(js_file).await?;
        let ts_code = converter::convert_source(&js_code)?;

        let relative = source_path.strip_prefix(directory).unwrap_or(&source_path);
        let output_path = target_root.join(relative);

        match io::save_typescript_file(&ts_code, &output_path, &source_path, cfg).await? {
            SaveOutcome::Written(path) => {
                info!("Converted & saved to {}", path.display());
                written += 1;
            }
            SaveOutcome::SkippedExisting => {}
        }
    }

    info!("Completed TS conversion!");
    Ok(written)
}
