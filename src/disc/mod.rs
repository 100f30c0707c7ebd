use crate::cd::{AUDIO_PREGAP_FADS, Ctrl};
use crate::disc::error::{DiscError, DiscResult};
use crate::disc::track_file::RawTrackFile;
use log::debug;
use std::fmt::Display;

pub mod error;
pub mod session;
pub mod track_file;

#[derive(Debug)]
pub struct Track {
    pub ctrl: Ctrl,
    pub addr: u8,
    pub start_fad: u32,
    /// Filled in by the session layout, 0 until then.
    pub end_fad: u32,
    pub sector_size: u32,
    pub file: RawTrackFile,
}

impl Track {
    pub fn is_audio(&self) -> bool {
        self.ctrl == Ctrl::Audio
    }

    pub fn contains(&self, fad: u32) -> bool {
        (self.start_fad..=self.end_fad).contains(&fad)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscType {
    CdRom,
    GdRom,
}

impl Display for DiscType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscType::CdRom => write!(f, "CD-ROM"),
            DiscType::GdRom => write!(f, "GD-ROM"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// 1-based
    pub first_track: usize,
    pub start_fad: u32,
}

/// Tracks in physical order plus the session table computed by a [`session::SessionLayout`].
#[derive(Debug)]
pub struct Disc {
    pub disc_type: DiscType,
    pub tracks: Vec<Track>,
    pub sessions: Vec<Session>,
    pub lead_out_fad: u32,
}

impl Default for Disc {
    fn default() -> Self {
        Self::new()
    }
}

impl Disc {
    pub fn new() -> Self {
        Self {
            disc_type: DiscType::CdRom,
            tracks: Vec::new(),
            sessions: Vec::new(),
            lead_out_fad: 0,
        }
    }

    pub fn push_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// The pregap of an audio track is on the medium but is not addressable data.
    pub fn strip_audio_pregaps(&mut self) {
        for track in self.tracks.iter_mut().filter(|t| t.is_audio()) {
            track.start_fad = track.start_fad.saturating_add(AUDIO_PREGAP_FADS);
            debug!("Stripped audio pregap, track now starts at FAD {}", track.start_fad);
        }
    }

    pub fn track_for_fad(&self, fad: u32) -> Option<&Track> {
        self.tracks.iter().find(|t| t.contains(fad))
    }

    pub fn track_for_fad_mut(&mut self, fad: u32) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.contains(fad))
    }

    pub fn read_sector(&mut self, fad: u32, buf: &mut [u8]) -> DiscResult<()> {
        self.track_for_fad_mut(fad)
            .ok_or(DiscError::NoTrackForFad { fad })?
            .file
            .read_sector(fad, buf)
    }
}
