use crate::cue::models::{CueRecord, Keyword, msf_to_ms};
use log::debug;

/// Records belonging to one track of a cue sheet. Index 0 holds the disc preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueTrack {
    index: usize,
    records: Vec<CueRecord>,
}

impl CueTrack {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            records: Vec::new(),
        }
    }

    pub fn append(&mut self, record: CueRecord) {
        self.records.push(record);
    }

    pub fn set<I, S>(&mut self, keyword: Keyword, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.append(CueRecord::new(keyword, args));
    }

    pub fn records(&self) -> &[CueRecord] {
        &self.records
    }

    pub fn find_by_prefix(&self, prefix: &[&str]) -> Vec<&CueRecord> {
        self.records
            .iter()
            .filter(|record| record.matches_prefix(prefix))
            .collect()
    }

    /// Token following `prefix` in the first matching record, empty if nothing matches.
    pub fn get_field(&self, prefix: &[&str]) -> &str {
        self.records
            .iter()
            .find(|record| record.matches_prefix(prefix))
            .and_then(|record| record.token(prefix.len()))
            .unwrap_or("")
    }

    pub fn artist(&self) -> &str {
        self.get_field(&["PERFORMER"])
    }

    pub fn title(&self) -> &str {
        self.get_field(&["TITLE"])
    }

    pub fn set_artist(&mut self, artist: &str) {
        self.replace_or_insert(Keyword::Performer, artist);
    }

    pub fn set_title(&mut self, title: &str) {
        self.replace_or_insert(Keyword::Title, title);
    }

    fn replace_or_insert(&mut self, keyword: Keyword, value: &str) {
        let positions: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.keyword == keyword)
            .map(|(position, _)| position)
            .collect();

        let Some((&first, duplicates)) = positions.split_first() else {
            self.set(keyword, [value]);
            return;
        };

        let record = &mut self.records[first];
        match record.args.first_mut() {
            Some(existing) => *existing = value.to_string(),
            None => record.args.push(value.to_string()),
        }

        for &position in duplicates.iter().rev() {
            self.records.remove(position);
        }
    }

    pub fn track_number(&self) -> usize {
        self.index
    }

    /// Length in milliseconds up to the next track's `INDEX 01`, 0 when it
    /// cannot be computed.
    pub fn length(&self, tracks: &[CueTrack]) -> u64 {
        let Some(next) = self.index.checked_add(1).and_then(|next| tracks.get(next)) else {
            return 0;
        };

        let start = self.get_field(&["INDEX", "01"]);
        let end = next.get_field(&["INDEX", "01"]);
        match (msf_to_ms(start), msf_to_ms(end)) {
            (Ok(start), Ok(end)) => end.saturating_sub(start),
            (Err(e), _) | (_, Err(e)) => {
                debug!("Cannot compute length of track {}: {e}", self.index);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track_with_index(index: usize, position: &str) -> CueTrack {
        let mut track = CueTrack::new(index);
        track.set(Keyword::Track, [format!("{index:02}"), "AUDIO".to_string()]);
        track.set(Keyword::Index, ["01", position]);
        track
    }

    #[test]
    fn set_artist_appends_then_replaces() {
        let mut track = CueTrack::new(1);
        track.set(Keyword::Title, ["Song"]);

        track.set_artist("First");
        assert_eq!(track.find_by_prefix(&["PERFORMER"]).len(), 1);
        assert_eq!(track.artist(), "First");

        track.set_artist("Second");
        assert_eq!(track.records().len(), 2);
        assert_eq!(track.artist(), "Second");
        assert_eq!(track.records()[1].keyword, Keyword::Performer);
    }

    #[test]
    fn set_artist_drops_duplicate_performers() {
        let mut track = CueTrack::new(1);
        track.set(Keyword::Performer, ["A"]);
        track.set(Keyword::Title, ["Song"]);
        track.set(Keyword::Performer, ["B"]);
        track.set(Keyword::Performer, ["C"]);

        track.set_artist("Z");

        assert_eq!(track.find_by_prefix(&["PERFORMER"]).len(), 1);
        assert_eq!(track.artist(), "Z");
        assert_eq!(track.title(), "Song");
        assert_eq!(track.records()[0].keyword, Keyword::Performer);
    }

    #[test]
    fn set_title_replaces_in_place() {
        let mut track = CueTrack::new(0);
        track.set(Keyword::Title, ["Old"]);
        track.set_title("New");
        assert_eq!(track.records().len(), 1);
        assert_eq!(track.title(), "New");
    }

    #[test]
    fn get_field_returns_empty_when_missing() {
        let mut track = CueTrack::new(1);
        track.set(Keyword::Rem, ["DATE", "1999"]);
        assert_eq!(track.get_field(&["REM", "DATE"]), "1999");
        assert_eq!(track.get_field(&["REM", "GENRE"]), "");
        assert_eq!(track.artist(), "");
    }

    #[test]
    fn find_by_prefix_keeps_field_order() {
        let mut track = CueTrack::new(1);
        track.set(Keyword::Index, ["00", "00:00:00"]);
        track.set(Keyword::Index, ["01", "00:02:00"]);
        track.set(Keyword::Index, ["01", "00:03:00"]);

        let found = track.find_by_prefix(&["INDEX", "01"]);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].args[1], "00:02:00");
        assert_eq!(found[1].args[1], "00:03:00");
    }

    #[test]
    fn length_is_distance_to_next_index() {
        let tracks = vec![
            CueTrack::new(0),
            track_with_index(1, "00:00:00"),
            track_with_index(2, "01:30:37"),
        ];
        assert_eq!(tracks[1].length(&tracks), 90493);
        assert_eq!(tracks[1].track_number(), 1);
    }

    #[test]
    fn length_of_last_track_is_zero() {
        let tracks = vec![CueTrack::new(0), track_with_index(1, "00:00:00")];
        assert_eq!(tracks[1].length(&tracks), 0);
    }

    #[test]
    fn length_of_highest_track_number_is_zero() {
        let tracks = vec![CueTrack::new(0), track_with_index(usize::MAX, "00:00:00")];
        assert_eq!(tracks[1].length(&tracks), 0);
    }

    #[test]
    fn length_without_index_is_zero() {
        let mut next = CueTrack::new(2);
        next.set(Keyword::Title, ["No index"]);
        let tracks = vec![CueTrack::new(0), track_with_index(1, "00:00:00"), next];
        assert_eq!(tracks[1].length(&tracks), 0);
    }
}
