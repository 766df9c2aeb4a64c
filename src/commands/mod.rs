use crate::commands::cue::CueCommands;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod cue;

/// CLI for reading, editing and generating CUE sheets.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Generate(GenerateCommand),

    #[command(subcommand)]
    Cue(CueCommands),
}

/// Generates one cue sheet per disc from an album description
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
#[command(
    long_about = "Generates one cue sheet per disc from an album description\n\nNote: the first disc is written to OUTPUT, every further disc gets its number appended to the file name, e.g. album-2.cue"
)]
pub struct GenerateCommand {
    /// Album JSON file with metadata, track lengths and linked files
    #[arg(value_name = "ALBUM_JSON")]
    pub album: PathBuf,

    /// Output cue file path for the first disc
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Force overwrite of existing cue files
    #[arg(long, short = 'f', value_name = "FORCE", default_value_t = false)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate_command() {
        let cli = Cli::try_parse_from(["cuesheet", "generate", "album.json", "out.cue", "-f"]).unwrap();
        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.album, PathBuf::from("album.json"));
                assert_eq!(cmd.output, PathBuf::from("out.cue"));
                assert!(cmd.force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
