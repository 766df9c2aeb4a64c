use crate::error::{CuesheetError, CuesheetResult};
use log::{debug, info};
use std::path::{Path, PathBuf};

pub mod error;
pub mod models;
pub mod sheet;
pub mod tokenizer;
pub mod track;

pub use models::{CueRecord, Keyword, MSF, msf_to_ms};
pub use sheet::{CueSheet, disc_output_path};
pub use track::CueTrack;

pub async fn open_cue(input: impl AsRef<Path>) -> CuesheetResult<CueSheet> {
    let mut sheet = CueSheet::new(input);
    sheet.read().await?;
    Ok(sheet)
}

/// One line per track: number, performer, title and length.
pub fn describe(sheet: &CueSheet) -> Vec<String> {
    let mut lines = Vec::new();
    for track in sheet.tracks() {
        if track.track_number() == 0 {
            lines.push(format!("{} - {}", track.artist(), track.title()));
            continue;
        }

        let seconds = sheet.length_of(track) / 1000;
        lines.push(format!(
            "{:02}. {} - {} [{}:{:02}]",
            track.track_number(),
            track.artist(),
            track.title(),
            seconds / 60,
            seconds % 60
        ));
    }
    lines
}

pub async fn show_cue(input: impl AsRef<Path>) -> CuesheetResult<()> {
    let sheet = open_cue(input).await?;
    for line in describe(&sheet) {
        println!("{line}");
    }
    Ok(())
}

pub async fn set_track_performer(
    input: PathBuf,
    track_number: usize,
    performer: &str,
    output: Option<PathBuf>,
) -> CuesheetResult<PathBuf> {
    let mut sheet = open_cue(&input).await?;
    if let Some(output) = output {
        sheet.set_output_path(output);
    }

    let track = sheet
        .track_mut(track_number)
        .ok_or(CuesheetError::TrackNotFound(track_number))?;
    track.set_artist(performer);
    debug!("Set performer of track {track_number} to {performer:?}");

    let written = sheet.write().await?;
    info!("Wrote {}", written.display());
    Ok(written)
}

/// Re-reads a cue sheet and writes it back as normalized UTF-8.
pub async fn rewrite_cue(input: PathBuf, output: PathBuf, force: bool) -> CuesheetResult<PathBuf> {
    if tokio::fs::try_exists(&output).await? && !force {
        return Err(CuesheetError::OutputAlreadyExists(output));
    }

    let mut sheet = open_cue(&input).await?;
    sheet.set_output_path(&output);

    let written = sheet.write().await?;
    info!("Rewrote {} to {}", input.display(), written.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISC: &str = concat!(
        "PERFORMER \"The Band\"\n",
        "TITLE Record\n",
        "  TRACK 01 AUDIO\n",
        "    PERFORMER \"The Band\"\n",
        "    TITLE One\n",
        "    INDEX 01 00:00:00\n",
        "  TRACK 02 AUDIO\n",
        "    TITLE Two\n",
        "    INDEX 01 02:05:00\n",
    );

    #[test]
    fn describe_lists_tracks_with_length() {
        let mut sheet = CueSheet::new("x.cue");
        sheet.parse(DISC.as_bytes()).unwrap();
        assert_eq!(
            describe(&sheet),
            vec![
                "The Band - Record".to_string(),
                "01. The Band - One [2:05]".to_string(),
                "02.  - Two [0:00]".to_string(),
            ]
        );
    }

    #[test]
    fn describe_handles_largest_track_number() {
        let mut sheet = CueSheet::new("x.cue");
        sheet
            .parse(b"TRACK 18446744073709551615 AUDIO\nINDEX 01 00:00:00\n")
            .unwrap();
        let lines = describe(&sheet);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "18446744073709551615.  -  [0:00]");
    }

    #[tokio::test]
    async fn set_track_performer_rewrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("disc.cue");
        std::fs::write(&path, DISC).unwrap();

        set_track_performer(path.clone(), 2, "Guest Star", None)
            .await
            .unwrap();

        let sheet = open_cue(&path).await.unwrap();
        assert_eq!(sheet.track(2).unwrap().artist(), "Guest Star");
        assert_eq!(sheet.track(1).unwrap().artist(), "The Band");
    }

    #[tokio::test]
    async fn set_track_performer_rejects_unknown_track() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("disc.cue");
        std::fs::write(&path, DISC).unwrap();

        let result = set_track_performer(path, 7, "Nobody", None).await;
        assert!(matches!(result, Err(CuesheetError::TrackNotFound(7))));
    }

    #[tokio::test]
    async fn rewrite_converts_latin1_to_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.cue");
        let output = dir.path().join("out.cue");
        std::fs::write(&input, b"TITLE \"Caf\xe9  Noir\"\nTRACK 01 AUDIO\nINDEX 01 00:00:00\n").unwrap();

        rewrite_cue(input.clone(), output.clone(), false)
            .await
            .unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            text,
            "TITLE \"Café  Noir\"\n  TRACK 01 AUDIO\n    INDEX 01 00:00:00\n"
        );

        let again = rewrite_cue(input, output, false).await;
        assert!(matches!(again, Err(CuesheetError::OutputAlreadyExists(_))));
    }
}
