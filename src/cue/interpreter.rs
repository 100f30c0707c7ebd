use crate::cd::{HIGH_DENSITY_START_FAD, LEAD_IN_FADS};
use crate::cue::error::{CueError, CueResult, CueWarning, TrackNumber, UNKNOWN_TRACK};
use crate::cue::models::{FileType, TrackType, UNKNOWN_SECTOR_SIZE};
use crate::cue::tokenizer::{FileName, Tokenizer};
use crate::disc::track_file::RawTrackFile;
use crate::disc::{Disc, Track};
use crate::fs::FileProvider;
use log::{debug, warn};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    Rem,
    File,
    Track,
    Index,
}

impl Directive {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "REM" => Some(Directive::Rem),
            "FILE" => Some(Directive::File),
            "TRACK" => Some(Directive::Track),
            "INDEX" => Some(Directive::Index),
            _ => None,
        }
    }
}

/// What has been read since the last committed track.
#[derive(Debug)]
struct PendingTrack {
    number: TrackNumber,
    track_type: TrackType,
    filename: String,
}

impl Default for PendingTrack {
    fn default() -> Self {
        Self {
            number: UNKNOWN_TRACK,
            track_type: TrackType::Unknown(String::new()),
            filename: String::new(),
        }
    }
}

/// Directive state machine. Tracks are committed to the disc on `INDEX 1`, at which point
/// the referenced file is opened through the provider and the FAD cursor moves past it.
pub struct CueInterpreter<P: FileProvider> {
    provider: P,
    cue_dir: String,
    cursor: u32,
    pending: PendingTrack,
    disc: Disc,
    warnings: Vec<CueWarning>,
}

impl<P: FileProvider> CueInterpreter<P> {
    /// `cue_dir` is prepended verbatim to every FILE name, it must end with a separator
    /// unless it is empty.
    pub fn new(provider: P, cue_dir: impl Into<String>) -> Self {
        Self {
            provider,
            cue_dir: cue_dir.into(),
            cursor: LEAD_IN_FADS,
            pending: PendingTrack::default(),
            disc: Disc::new(),
            warnings: Vec::new(),
        }
    }

    /// FAD the next committed track will start at.
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn disc(&self) -> &Disc {
        &self.disc
    }

    pub fn warnings(&self) -> &[CueWarning] {
        &self.warnings
    }

    pub fn into_parts(self) -> (Disc, Vec<CueWarning>) {
        (self.disc, self.warnings)
    }

    pub fn run(&mut self, text: &str) -> CueResult<()> {
        let mut tokens = Tokenizer::new(text);

        while let Some(token) = tokens.next_token() {
            match Directive::from_token(token) {
                Some(Directive::Rem) => self.rem(&mut tokens),
                Some(Directive::File) => self.file(&mut tokens)?,
                Some(Directive::Track) => self.track(&mut tokens),
                Some(Directive::Index) => self.index(&mut tokens)?,
                None => {}
            }
        }

        Ok(())
    }

    fn warn(&mut self, warning: CueWarning) {
        warn!("CUE parse warning: {warning}");
        self.warnings.push(warning);
    }

    fn rem(&mut self, tokens: &mut Tokenizer) {
        match tokens.next_token() {
            Some("HIGH-DENSITY") => {
                debug!("Entering high-density area at FAD {HIGH_DENSITY_START_FAD}");
                self.cursor = HIGH_DENSITY_START_FAD;
            }
            Some("SINGLE-DENSITY") => {}
            other => self.warn(CueWarning::UnknownDensity(other.map(str::to_string))),
        }

        match tokens.next_token() {
            Some("AREA") => {}
            other => self.warn(CueWarning::MissingArea(other.map(str::to_string))),
        }
    }

    fn file(&mut self, tokens: &mut Tokenizer) -> CueResult<()> {
        // quoted names accumulate, a bare name replaces what was read so far
        match tokens.next_file_argument()? {
            Some(FileName::Quoted(name)) => self.pending.filename.push_str(name),
            Some(FileName::Bare(name)) => self.pending.filename = name.to_string(),
            None => {}
        }

        let file_type = tokens.next_token();
        if file_type.and_then(FileType::from_label) != Some(FileType::Binary) {
            self.warn(CueWarning::UnsupportedFileType(
                file_type.map(str::to_string),
            ));
        }

        Ok(())
    }

    fn track(&mut self, tokens: &mut Tokenizer) {
        self.pending.number = TrackNumber(self.number(tokens, "TRACK"));
        self.pending.track_type = TrackType::from_label(tokens.next_token().unwrap_or_default());
    }

    fn index(&mut self, tokens: &mut Tokenizer) -> CueResult<()> {
        // only INDEX 01 marks the start of track data, pregap indexes are skipped
        if self.number(tokens, "INDEX") == Some(1) {
            self.commit_track()?;
        }
        Ok(())
    }

    fn number(&mut self, tokens: &mut Tokenizer, directive: &'static str) -> Option<u32> {
        let token = tokens.next_token();
        let number = token.and_then(|t| t.parse().ok());
        if number.is_none() {
            self.warn(CueWarning::InvalidNumber {
                directive,
                value: token.map(str::to_string),
            });
        }
        number
    }

    fn commit_track(&mut self) -> CueResult<()> {
        let pending = std::mem::take(&mut self.pending);
        let start_fad = self.cursor;
        let ctrl = pending.track_type.ctrl();

        let path = PathBuf::from(format!("{}{}", self.cue_dir, pending.filename));
        let file = self
            .provider
            .open(&path)
            .map_err(|source| CueError::TrackOpen {
                track: pending.number,
                path: path.clone(),
                source,
            })?;

        let sector_size = pending.track_type.sector_size();
        if sector_size == UNKNOWN_SECTOR_SIZE {
            return Err(CueError::UnknownTrackType {
                track: pending.number,
                label: pending.track_type.label().to_string(),
            });
        }

        let size = file.size();
        if size % sector_size as u64 != 0 {
            self.warn(CueWarning::MisalignedTrackSize {
                filename: pending.filename.clone(),
                size,
                sector_size,
            });
        }

        let sectors = u32::try_from(size / sector_size as u64).unwrap_or(u32::MAX);
        self.cursor = start_fad.saturating_add(sectors);

        debug!(
            "Track {} {:?}: {} StartFAD {start_fad}, sector size {sector_size}, file size {size}",
            pending.number, pending.filename, pending.track_type
        );

        self.disc.push_track(Track {
            ctrl,
            addr: 0,
            start_fad,
            end_fad: 0,
            sector_size,
            file: RawTrackFile::new(file, 0, start_fad, sector_size),
        });

        Ok(())
    }
}
