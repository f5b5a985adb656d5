use std::path::Path;

use sapconv_common::config::Config;
use sapconv_core::pipeline;
use tracing::warn;

/// Converts one JavaScript command file to TypeScript.
pub async fn run(
    input_file: &Path,
    output_path: Option<&Path>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let written = pipeline::convert_file(input_file, output_path, cfg).await?;

    if written.is_none() {
        warn!("Nothing was written for {}.", input_file.display());
    }
    Ok(())
}
