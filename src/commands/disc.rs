use clap::Parser;
use std::path::PathBuf;

/// Prints the track layout of one or more CUE sheets.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct InfoCommand {
    /// CUE sheets to load
    #[arg(value_name = "CUE", required = true)]
    pub cues: Vec<PathBuf>,
}

/// Reads a single sector by frame address.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
#[command(
    long_about = "Reads a single sector by frame address\n\nNote: the start address of an audio track excludes its 150 frame pregap, so pregap frames are not readable"
)]
pub struct ReadSectorCommand {
    /// CUE sheet to load
    #[arg(value_name = "CUE")]
    pub cue: PathBuf,

    /// Frame address of the sector
    #[arg(value_name = "FAD")]
    pub fad: u32,

    /// Write the raw sector to this file instead of printing a hex dump
    #[arg(long, short = 'o', value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}
