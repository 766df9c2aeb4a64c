use crate::commands::cue::CueCommands;
use crate::commands::{Cli, Commands};
use anyhow::Result;
use clap::Parser;
use cuesheet::album::generate_cuesheets_from_file;
use cuesheet::cue::{rewrite_cue, set_track_performer, show_cue};
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;

mod commands;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let logger = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .build();

    let level = logger.filter();
    let pb = MultiProgress::new();

    LogWrapper::new(pb.clone(), logger).try_init()?;
    log::set_max_level(level);

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(cmd) => {
            generate_cuesheets_from_file(pb.clone(), &cmd.album, &cmd.output, cmd.force).await?;
        }
        Commands::Cue(inner) => match inner {
            CueCommands::Show(cmd) => show_cue(&cmd.input).await?,
            CueCommands::SetPerformer(cmd) => {
                set_track_performer(cmd.input, cmd.track, &cmd.performer, cmd.output).await?;
            }
            CueCommands::Rewrite(cmd) => {
                rewrite_cue(cmd.input, cmd.output, cmd.force).await?;
            }
        },
    }

    Ok(())
}
