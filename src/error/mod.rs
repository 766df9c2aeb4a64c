use crate::cue::error::CueError;
use std::path::PathBuf;
use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CuesheetError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    CueError(#[from] CueError),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("Cue sheet already exists, use --force to overwrite: {0}")]
    OutputAlreadyExists(PathBuf),

    #[error("Track {0} does not exist in the cue sheet")]
    TrackNotFound(usize),

    #[error("The album has no tracks")]
    EmptyAlbum,
}

pub type CuesheetResult<T> = result::Result<T, CuesheetError>;
