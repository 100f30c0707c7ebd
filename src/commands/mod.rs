use crate::commands::disc::{InfoCommand, ReadSectorCommand};
use clap::{Parser, Subcommand};

pub mod disc;

/// CLI for inspecting CUE/BIN disc images.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Info(InfoCommand),
    ReadSector(ReadSectorCommand),
}
