mod commands;
mod terminal;

use commands::{CommandLine, Commands, convert_directory, convert_file};
use sapconv_common::config::Config;
use terminal::{logging, print};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        overwrite: commands.overwrite,
        replace: commands.replace,
    };

    let outcome = match commands.command {
        Commands::ConvertFile {
            input_file,
            output_path,
        } => {
            print::header("converting file");
            convert_file::run(&input_file, output_path.as_deref(), &cfg).await
        }
        Commands::ConvertDirectory {
            directory,
            output_directory,
        } => {
            print::header("converting directory");
            convert_directory::run(&directory, output_directory.as_deref(), &cfg).await
        }
    };

    // Failures are reported, not propagated: the tool always exits
    // cleanly after logging.
    if let Err(err) = outcome {
        error!("Error: {:#}", err);
    }

    Ok(())
}
