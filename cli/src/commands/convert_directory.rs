use std::path::Path;
use std::time::Instant;

use colored::*;
use sapconv_common::config::Config;
use sapconv_core::pipeline;
use tracing::info;

/// Recursively converts every `.js` command file under `directory`.
pub async fn run(
    directory: &Path,
    output_directory: Option<&Path>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let start_time = Instant::now();
    let written = pipeline::convert_directory(directory, output_directory, cfg).await?;

    if written > 0 {
        print_summary(written, start_time);
    }
    Ok(())
}

fn print_summary(written: usize, start_time: Instant) {
    let count: ColoredString = format!("{written} files").bold().green();
    let total_time: ColoredString = format!("{:.2}s", start_time.elapsed().as_secs_f64())
        .bold()
        .yellow();
    info!("{}", format!("Conversion complete: {count} written in {total_time}"));
}
