use crate::cd::MAX_CUE_SIZE;
use crate::cue::error::{CueError, CueResult, CueWarning};
use crate::cue::interpreter::CueInterpreter;
use crate::disc::Disc;
use crate::disc::session::{GdSessionLayout, SessionLayout};
use crate::fs::{FileProvider, FsFileProvider};
use log::{debug, warn};
use std::path::Path;

pub mod error;
pub mod interpreter;
pub mod models;
pub mod tokenizer;

/// A successfully assembled disc and the advisory issues found on the way.
#[derive(Debug)]
pub struct LoadedDisc {
    pub disc: Disc,
    pub warnings: Vec<CueWarning>,
}

/// Only paths ending in `.cue` (any case) are handled, paths of 4 characters or fewer are not checked.
pub fn is_cue_path(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() <= 4 || bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".cue")
}

/// Everything up to and including the last path separator, empty for a bare file name.
pub fn cue_directory(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(i) => &path[..=i],
        None => "",
    }
}

pub struct CueLoader<P: FileProvider, L: SessionLayout = GdSessionLayout> {
    provider: P,
    layout: L,
}

impl<P: FileProvider> CueLoader<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            layout: GdSessionLayout,
        }
    }
}

impl<P: FileProvider, L: SessionLayout> CueLoader<P, L> {
    pub fn with_layout<T: SessionLayout>(self, layout: T) -> CueLoader<P, T> {
        CueLoader {
            provider: self.provider,
            layout,
        }
    }

    /// Parses the sheet at `cue_path` and every track file it references.
    ///
    /// Returns `Ok(None)` when the path is not a CUE sheet. On error nothing opened so far
    /// outlives the call.
    pub fn load(&self, cue_path: impl AsRef<Path>) -> CueResult<Option<LoadedDisc>> {
        let cue_path = cue_path.as_ref();
        let path = cue_path.to_string_lossy();

        if !is_cue_path(&path) {
            debug!("Not a CUE sheet: {cue_path:?}");
            return Ok(None);
        }

        self.load_sheet(cue_path, cue_directory(&path))
            .inspect_err(|e| warn!("CUE parse error: {e}"))
            .map(Some)
    }

    fn load_sheet(&self, cue_path: &Path, cue_dir: &str) -> CueResult<LoadedDisc> {
        let mut cue_file = self
            .provider
            .open(cue_path)
            .map_err(|source| CueError::CueOpen {
                path: cue_path.to_path_buf(),
                source,
            })?;

        let size = cue_file.size();
        if size >= MAX_CUE_SIZE {
            return Err(CueError::CueFileTooLarge { size });
        }

        let mut data = vec![0u8; size as usize];
        cue_file.read_at(0, &mut data)?;
        drop(cue_file);

        let text = String::from_utf8_lossy(&data);

        debug!("Parsing CUE file: {cue_path:?}");
        let mut interpreter = CueInterpreter::new(&self.provider, cue_dir);
        interpreter.run(&text)?;

        let (mut disc, warnings) = interpreter.into_parts();
        if disc.tracks.is_empty() {
            return Err(CueError::NoTracks);
        }

        self.layout.fill_sessions(&mut disc);
        disc.strip_audio_pregaps();

        debug!(
            "Loaded {} with {} track(s) and {} warning(s)",
            disc.disc_type,
            disc.tracks.len(),
            warnings.len()
        );

        Ok(LoadedDisc { disc, warnings })
    }
}

/// Loads a CUE sheet from the local filesystem.
pub fn load_cue(cue_path: impl AsRef<Path>) -> CueResult<Option<LoadedDisc>> {
    CueLoader::new(FsFileProvider).load(cue_path)
}
