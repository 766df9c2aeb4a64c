use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Commands working on existing cue sheets
#[derive(Subcommand, Debug, Eq, PartialEq)]
pub enum CueCommands {
    Show(ShowCommand),
    SetPerformer(SetPerformerCommand),
    Rewrite(RewriteCommand),
}

/// Prints the disc header and every track with its computed length.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct ShowCommand {
    /// Input cue file path
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// Replaces the performer of one track.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct SetPerformerCommand {
    /// Input cue file path
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Track number, 0 addresses the disc itself
    #[arg(value_name = "TRACK")]
    pub track: usize,

    /// New performer
    #[arg(value_name = "PERFORMER")]
    pub performer: String,

    #[arg(
        value_name = "OUTPUT",
        long,
        short = 'o',
        help = "writes the result to OUTPUT instead of modifying INPUT"
    )]
    pub output: Option<PathBuf>,
}

/// Rewrites a cue sheet as normalized UTF-8.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct RewriteCommand {
    /// Input cue file path
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output cue file path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Force overwrite of the output file if it already exists
    #[arg(long, short = 'f', value_name = "FORCE", default_value_t = false)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use crate::commands::{Cli, Commands};
    use super::*;

    #[test]
    fn parses_set_performer_with_output() {
        let cli = Cli::try_parse_from([
            "cuesheet",
            "cue",
            "set-performer",
            "in.cue",
            "3",
            "Some One",
            "--output",
            "out.cue",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Commands::Cue(CueCommands::SetPerformer(SetPerformerCommand {
                track: 3,
                ref performer,
                output: Some(_),
                ..
            })) if performer == "Some One"
        ));
    }

    #[test]
    fn rejects_non_numeric_track() {
        assert!(Cli::try_parse_from(["cuesheet", "cue", "set-performer", "in.cue", "x", "A"]).is_err());
    }
}
