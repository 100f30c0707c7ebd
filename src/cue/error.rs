use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CueError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("CUE file too big: {size} bytes")]
    CueFileTooLarge { size: u64 },

    #[error("Cannot open CUE file {path:?}: {source}")]
    CueOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot open track {track}: {path:?}: {source}")]
    TrackOpen {
        track: TrackNumber,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Track {track} has unknown sector type: {label}")]
    UnknownTrackType { track: TrackNumber, label: String },

    #[error("Unterminated quoted FILE name")]
    UnterminatedQuote,

    #[error("Failed to parse or invalid file with 0 tracks")]
    NoTracks,
}

pub type CueResult<T> = Result<T, CueError>;

/// Track number as written in the sheet, absent when no TRACK directive preceded the INDEX.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackNumber(pub Option<u32>);

pub const UNKNOWN_TRACK: TrackNumber = TrackNumber(None);

impl Display for TrackNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(number) => write!(f, "{number}"),
            None => write!(f, "?"),
        }
    }
}

/// Sheet quality issues that do not prevent a usable disc.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CueWarning {
    #[error("Unrecognized REM token {0:?}. Expected SINGLE-DENSITY or HIGH-DENSITY")]
    UnknownDensity(Option<String>),

    #[error("Unrecognized REM token {0:?}. Expected AREA")]
    MissingArea(Option<String>),

    #[error("Unrecognized FILE token {0:?}. Expected BINARY")]
    UnsupportedFileType(Option<String>),

    #[error("Size {size} of track {filename} is not a multiple of sector size {sector_size}")]
    MisalignedTrackSize {
        filename: String,
        size: u64,
        sector_size: u32,
    },

    #[error("Invalid {directive} number {value:?}")]
    InvalidNumber {
        directive: &'static str,
        value: Option<String>,
    },
}
