// src/cue/models
use crate::cd::Ctrl;
use std::fmt::Display;

/// Returned by [`TrackType::sector_size`] for labels outside the table.
pub const UNKNOWN_SECTOR_SIZE: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackType {
    Audio,
    CdG,
    Mode1_2048,
    Mode1_2352,
    Mode2_2336,
    Mode2_2352,
    CdI2336,
    CdI2352,
    Unknown(String),
}

impl TrackType {
    /// Labels are matched exactly, `mode1/2352` is not `MODE1/2352`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "AUDIO" => TrackType::Audio,
            "CDG" => TrackType::CdG,
            "MODE1/2048" => TrackType::Mode1_2048,
            "MODE1/2352" => TrackType::Mode1_2352,
            "MODE2/2336" => TrackType::Mode2_2336,
            "MODE2/2352" => TrackType::Mode2_2352,
            "CDI/2336" => TrackType::CdI2336,
            "CDI/2352" => TrackType::CdI2352,
            other => TrackType::Unknown(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TrackType::Audio => "AUDIO",
            TrackType::CdG => "CDG",
            TrackType::Mode1_2048 => "MODE1/2048",
            TrackType::Mode1_2352 => "MODE1/2352",
            TrackType::Mode2_2336 => "MODE2/2336",
            TrackType::Mode2_2352 => "MODE2/2352",
            TrackType::CdI2336 => "CDI/2336",
            TrackType::CdI2352 => "CDI/2352",
            TrackType::Unknown(label) => label,
        }
    }

    pub fn sector_size(&self) -> u32 {
        match self {
            TrackType::Audio => 2352,      // PCM audio
            TrackType::CdG => 2352,        // karaoke CD+G
            TrackType::Mode1_2048 => 2048, // cooked
            TrackType::Mode1_2352 => 2352,
            TrackType::Mode2_2336 => 2336, // XA
            TrackType::Mode2_2352 => 2352,
            TrackType::CdI2336 => 2336,
            TrackType::CdI2352 => 2352,
            TrackType::Unknown(_) => UNKNOWN_SECTOR_SIZE,
        }
    }

    /// Unknown labels are classified as data, only the sector size lookup rejects them.
    pub fn ctrl(&self) -> Ctrl {
        match self {
            TrackType::Audio | TrackType::CdG => Ctrl::Audio,
            _ => Ctrl::Data,
        }
    }
}

impl Display for TrackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Binary,
    Motorola,
    Aiff,
    Wave,
    Mp3,
}

impl FileType {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "BINARY" => Some(FileType::Binary),
            "MOTOROLA" => Some(FileType::Motorola),
            "AIFF" => Some(FileType::Aiff),
            "WAVE" => Some(FileType::Wave),
            "MP3" => Some(FileType::Mp3),
            _ => None,
        }
    }
}
