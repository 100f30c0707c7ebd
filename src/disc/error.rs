use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("FAD {fad} is not part of any track")]
    NoTrackForFad { fad: u32 },

    #[error("FAD {fad} lies before the start of the track file at FAD {fad_base}")]
    FadBeforeTrackFile { fad: u32, fad_base: u32 },

    #[error("Sector buffer holds {actual} bytes, track sectors are {expected} bytes")]
    BufferSize { expected: usize, actual: usize },
}

pub type DiscResult<T> = Result<T, DiscError>;
