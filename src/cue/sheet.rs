use crate::cue::error::{CueError, CueResult};
use crate::cue::models::{CueRecord, Keyword};
use crate::cue::tokenizer::{decode, quote, tokenize};
use crate::cue::track::CueTrack;
use log::debug;
use std::path::{Path, PathBuf};

pub const FIRST_DISC: &str = "1";

/// Path of the cue sheet for `disc`, the first disc keeps `base` unchanged.
pub fn disc_output_path(base: impl AsRef<Path>, disc: &str) -> PathBuf {
    let base = base.as_ref();
    if disc.is_empty() || disc == FIRST_DISC {
        return base.to_path_buf();
    }

    let file_name = base
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = match file_name.rfind('.') {
        Some(dot) => &file_name[..dot],
        None => file_name.as_str(),
    };
    let disc = disc.replace(['/', '\\'], "_");
    base.with_file_name(format!("{stem}-{disc}.cue"))
}

#[derive(Debug, Clone)]
pub struct CueSheet {
    output_path: PathBuf,
    tracks: Vec<CueTrack>,
}

impl CueSheet {
    pub fn new(output_path: impl AsRef<Path>) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
            tracks: Vec::new(),
        }
    }

    pub fn for_disc(base: impl AsRef<Path>, disc: &str) -> Self {
        Self::new(disc_output_path(base, disc))
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn set_output_path(&mut self, output_path: impl AsRef<Path>) {
        self.output_path = output_path.as_ref().to_path_buf();
    }

    pub fn tracks(&self) -> &[CueTrack] {
        &self.tracks
    }

    pub fn track(&self, index: usize) -> Option<&CueTrack> {
        self.tracks.iter().find(|track| track.track_number() == index)
    }

    pub fn track_mut(&mut self, index: usize) -> Option<&mut CueTrack> {
        self.tracks
            .iter_mut()
            .find(|track| track.track_number() == index)
    }

    /// Appends a new track numbered after the last one.
    pub fn add_track(&mut self) -> &mut CueTrack {
        let index = self.tracks.len();
        self.tracks.push(CueTrack::new(index));
        &mut self.tracks[index]
    }

    pub fn length_of(&self, track: &CueTrack) -> u64 {
        track.length(&self.tracks)
    }

    pub async fn read(&mut self) -> CueResult<()> {
        debug!("Reading cue sheet: {:?}", self.output_path);
        let data = tokio::fs::read(&self.output_path).await?;
        self.parse(&data)
    }

    pub fn parse(&mut self, data: &[u8]) -> CueResult<()> {
        let (mode, text) = decode(data);
        debug!("Decoding cue sheet as {mode:?}");

        let mut tracks = vec![CueTrack::new(0)];

        for (number, line) in text.lines().enumerate() {
            let line_number = number + 1;
            let line = line.trim();

            let Some(record) = CueRecord::from_tokens(tokenize(line)) else {
                return Err(CueError::EmptyLine {
                    line: line_number,
                    content: line.to_string(),
                });
            };

            if record.keyword == Keyword::Track {
                let index = record
                    .args
                    .first()
                    .and_then(|number| number.parse::<usize>().ok())
                    .ok_or_else(|| CueError::InvalidTrackNumber {
                        line: line_number,
                        content: line.to_string(),
                    })?;
                tracks.push(CueTrack::new(index));
            }

            if let Some(track) = tracks.last_mut() {
                track.append(record);
            }
        }

        debug!("Parsed {} tracks", tracks.len() - 1);
        self.tracks = tracks;
        Ok(())
    }

    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for track in &self.tracks {
            for record in track.records() {
                let indent = indent_for(track.track_number(), &record.keyword);
                let line = record.tokens().map(quote).collect::<Vec<_>>().join(" ");
                out.push_str(&" ".repeat(indent));
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }

    /// Writes the sheet as UTF-8 to its output path. Consumes the sheet.
    pub async fn write(self) -> CueResult<PathBuf> {
        debug!("Writing cue sheet: {:?}", self.output_path);
        tokio::fs::write(&self.output_path, self.serialize()).await?;
        Ok(self.output_path)
    }
}

pub fn indent_for(track_number: usize, keyword: &Keyword) -> usize {
    if track_number == 0 {
        return 0;
    }
    match keyword {
        Keyword::Track => 2,
        Keyword::File => 0,
        _ => 4,
    }
}
