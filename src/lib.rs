//! CUE sheet loading for CD and GD-ROM images.
//!
//! [`cue::load_cue`] turns a sheet and the track files it references into a [`disc::Disc`]
//! whose tracks carry exact frame addresses and can serve sectors from their backing files.

pub mod cd;
pub mod cue;
pub mod disc;
pub mod fs;
