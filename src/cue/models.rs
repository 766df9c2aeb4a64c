use crate::cue::error::{CueError, CueResult};
use std::fmt::Display;
use std::str::FromStr;

pub const FRAMES_PER_SECOND: u64 = 75;

/// Record keyword. Known keywords are matched case-insensitively, anything
/// else is kept verbatim in `Other`.
#[derive(Debug, Clone, Eq)]
pub enum Keyword {
    Rem,
    Performer,
    Title,
    Track,
    Index,
    File,
    Other(String),
}

impl Keyword {
    pub fn parse(token: &str) -> Self {
        match token.to_ascii_uppercase().as_str() {
            "REM" => Keyword::Rem,
            "PERFORMER" => Keyword::Performer,
            "TITLE" => Keyword::Title,
            "TRACK" => Keyword::Track,
            "INDEX" => Keyword::Index,
            "FILE" => Keyword::File,
            _ => Keyword::Other(token.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Keyword::Rem => "REM",
            Keyword::Performer => "PERFORMER",
            Keyword::Title => "TITLE",
            Keyword::Track => "TRACK",
            Keyword::Index => "INDEX",
            Keyword::File => "FILE",
            Keyword::Other(keyword) => keyword,
        }
    }
}

impl PartialEq for Keyword {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Keyword::Other(a), Keyword::Other(b)) => a.eq_ignore_ascii_case(b),
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a cue sheet: a keyword followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueRecord {
    pub keyword: Keyword,
    pub args: Vec<String>,
}

impl CueRecord {
    pub fn new<I, S>(keyword: Keyword, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keyword,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a record from already tokenized text, first token being the keyword.
    pub fn from_tokens(mut tokens: Vec<String>) -> Option<Self> {
        if tokens.is_empty() {
            return None;
        }
        let args = tokens.split_off(1);
        Some(Self {
            keyword: Keyword::parse(&tokens[0]),
            args,
        })
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.keyword.as_str()).chain(self.args.iter().map(String::as_str))
    }

    pub fn matches_prefix(&self, prefix: &[&str]) -> bool {
        let Some((keyword, rest)) = prefix.split_first() else {
            return true;
        };
        Keyword::parse(keyword) == self.keyword
            && rest.len() <= self.args.len()
            && rest.iter().zip(&self.args).all(|(a, b)| *a == b)
    }

    /// Token at `position` counting the keyword as position 0.
    pub fn token(&self, position: usize) -> Option<&str> {
        match position {
            0 => Some(self.keyword.as_str()),
            n => self.args.get(n - 1).map(String::as_str),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MSF {
    pub minutes: u32,
    pub seconds: u8,
    pub frames: u8,
}

impl MSF {
    pub fn total_frames(&self) -> u64 {
        (self.minutes as u64 * 60 + self.seconds as u64) * FRAMES_PER_SECOND + self.frames as u64
    }

    pub fn to_millis(&self) -> u64 {
        self.total_frames() * 1000 / FRAMES_PER_SECOND
    }

    /// Floors to whole frames. Minutes saturate at `u32::MAX`.
    pub fn from_millis(millis: u64) -> Self {
        let total_frames =
            millis / 1000 * FRAMES_PER_SECOND + millis % 1000 * FRAMES_PER_SECOND / 1000;
        let total_seconds = total_frames / FRAMES_PER_SECOND;
        Self {
            minutes: u32::try_from(total_seconds / 60).unwrap_or(u32::MAX),
            seconds: (total_seconds % 60) as u8,
            frames: (total_frames % FRAMES_PER_SECOND) as u8,
        }
    }
}

impl FromStr for MSF {
    type Err = CueError;

    fn from_str(msf_str: &str) -> CueResult<Self> {
        let parts: Vec<&str> = msf_str.split(':').collect();
        if parts.len() != 3 {
            return Err(CueError::InvalidMSFFormat(msf_str.to_string()));
        }

        Ok(MSF {
            minutes: parts[0].parse()?,
            seconds: parts[1].parse()?,
            frames: parts[2].parse()?,
        })
    }
}

impl Display for MSF {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.minutes, self.seconds, self.frames)
    }
}

pub fn msf_to_ms(msf: &str) -> CueResult<u64> {
    Ok(msf.parse::<MSF>()?.to_millis())
}
