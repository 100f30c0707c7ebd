// src/cd/mod.rs

/// Frames preceding the first addressable sector of a disc (2 seconds).
pub const LEAD_IN_FADS: u32 = 150;

/// Pregap stripped from the reported start of audio tracks.
pub const AUDIO_PREGAP_FADS: u32 = 150;

/// First FAD of the high-density area on a GD-ROM.
pub const HIGH_DENSITY_START_FAD: u32 = 45000 + LEAD_IN_FADS;

/// Lead-out FAD of a GD-ROM high-density area.
pub const GD_LEAD_OUT_FAD: u32 = 549300;

/// CUE sheets must be strictly smaller than this.
pub const MAX_CUE_SIZE: u64 = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ctrl {
    Audio = 0,
    Data = 4,
}

impl Ctrl {
    pub fn bits(self) -> u8 {
        self as u8
    }
}
