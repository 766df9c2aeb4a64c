use crate::album::models::{Album, AlbumTrack};
use crate::cue::{CueSheet, Keyword, MSF};
use crate::error::{CuesheetError, CuesheetResult};
use indicatif::{MultiProgress, ProgressBar};
use log::{debug, info};
use std::path::{Path, PathBuf};

pub mod models;

/// Groups tracks by disc number in order of first appearance.
pub fn group_by_disc(tracks: &[AlbumTrack]) -> Vec<(&str, Vec<&AlbumTrack>)> {
    let mut discs: Vec<(&str, Vec<&AlbumTrack>)> = Vec::new();
    for track in tracks {
        let disc = track.disc_number();
        match discs.iter_mut().find(|(number, _)| *number == disc) {
            Some((_, group)) => group.push(track),
            None => discs.push((disc, vec![track])),
        }
    }
    discs
}

/// Reference to an audio file as written in a `FILE` record, relative when it
/// sits next to the cue sheet.
fn audio_file_reference(cue_path: &Path, audio_path: &Path) -> String {
    if audio_path.parent() == cue_path.parent() {
        if let Some(name) = audio_path.file_name() {
            return name.to_string_lossy().into_owned();
        }
    }
    audio_path.to_string_lossy().into_owned()
}

fn build_disc(album: &Album, disc: &str, tracks: &[&AlbumTrack], base_path: &Path) -> CueSheet {
    let mut sheet = CueSheet::for_disc(base_path, disc);

    let preamble = sheet.add_track();
    preamble.set(Keyword::Performer, [album.metadata.get("albumartist")]);
    preamble.set(Keyword::Title, [album.metadata.get("album")]);
    preamble.set(
        Keyword::Rem,
        ["MUSICBRAINZ_ALBUM_ID", album.metadata.get("musicbrainz_albumid")],
    );
    preamble.set(
        Keyword::Rem,
        [
            "MUSICBRAINZ_ALBUM_ARTIST_ID",
            album.metadata.get("musicbrainz_albumartistid"),
        ],
    );
    if album.metadata.contains("date") {
        preamble.set(Keyword::Rem, ["DATE", album.metadata.get("date")]);
    }

    let mut offset = 0;
    for (idx, source) in tracks.iter().enumerate() {
        let position = MSF::from_millis(offset);
        offset = offset.saturating_add(source.length);

        let track = sheet.add_track();
        track.set(Keyword::Track, [format!("{:02}", idx + 1), "AUDIO".to_string()]);
        track.set(Keyword::Performer, [source.metadata.get("artist")]);
        track.set(Keyword::Title, [source.metadata.get("title")]);
        track.set(
            Keyword::Rem,
            ["MUSICBRAINZ_TRACK_ID", source.metadata.get("musicbrainz_trackid")],
        );
        track.set(
            Keyword::Rem,
            ["MUSICBRAINZ_ARTIST_ID", source.metadata.get("musicbrainz_artistid")],
        );
        track.set(Keyword::Index, ["01".to_string(), position.to_string()]);
        for file in &source.linked_files {
            track.set(
                Keyword::File,
                [audio_file_reference(base_path, file), "MP3".to_string()],
            );
        }
    }

    debug!("Built disc {disc} with {} tracks", tracks.len());
    sheet
}

/// One cue sheet per disc of `album`, the first disc at `base_path`.
pub fn build_cuesheets(album: &Album, base_path: &Path) -> Vec<CueSheet> {
    group_by_disc(&album.tracks)
        .into_iter()
        .map(|(disc, tracks)| build_disc(album, disc, &tracks, base_path))
        .collect()
}

pub async fn generate_cuesheets(
    pb: MultiProgress,
    album: &Album,
    base_path: &Path,
    force: bool,
) -> CuesheetResult<Vec<PathBuf>> {
    if album.tracks.is_empty() {
        return Err(CuesheetError::EmptyAlbum);
    }

    let sheets = build_cuesheets(album, base_path);

    if !force {
        for sheet in &sheets {
            if tokio::fs::try_exists(sheet.output_path()).await? {
                return Err(CuesheetError::OutputAlreadyExists(
                    sheet.output_path().to_path_buf(),
                ));
            }
        }
    }

    let bar = pb.add(ProgressBar::new(sheets.len() as u64));
    let mut written = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        bar.set_message(sheet.output_path().display().to_string());
        let path = sheet.write().await?;
        info!("Wrote {}", path.display());
        written.push(path);
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(written)
}

pub async fn generate_cuesheets_from_file(
    pb: MultiProgress,
    album_path: &Path,
    output: &Path,
    force: bool,
) -> CuesheetResult<Vec<PathBuf>> {
    debug!("Loading album: {:?}", album_path);
    let album = Album::load(album_path).await?;
    generate_cuesheets(pb, &album, output, force).await
}
