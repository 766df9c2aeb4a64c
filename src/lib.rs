pub mod album;
pub mod cue;
pub mod error;
