pub mod convert_directory;
pub mod convert_file;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sapconv", version)]
#[command(about = "CLI tool to convert Sapphire.js command files from JS to TS.")]
#[command(arg_required_else_help = true)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Replace original JS command files with the converted TypeScript files
    #[arg(short, long, global = true)]
    pub replace: bool,

    /// Overwrite existing TypeScript files (enabled by default; pass `--overwrite false` to skip them)
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Set,
        default_value_t = true,
        default_missing_value = "true",
        num_args = 0..=1,
        value_name = "BOOL"
    )]
    pub overwrite: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a specific JS command file to TS
    #[command(name = "convert-file", alias = "cf")]
    #[command(after_help = "Example:\n  $ sapconv convert-file src/commands/myCommand.js dist/commands/myCommand")]
    ConvertFile {
        /// Path to the JS command file to convert
        input_file: PathBuf,
        /// Output path for the TS file. Defaults to the same directory and basename as the input
        output_path: Option<PathBuf>,
    },
    /// Recursively convert all JS command files in a directory to TS
    #[command(name = "convert-directory", alias = "cdir")]
    #[command(after_help = "Example:\n  $ sapconv convert-directory src/commands dist/commands")]
    ConvertDirectory {
        /// Directory containing JS command files; every `.js` file under it is converted blindly
        directory: PathBuf,
        /// Output directory for the TS files. Defaults to converting in place
        output_directory: Option<PathBuf>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
