use crate::cd::{GD_LEAD_OUT_FAD, HIGH_DENSITY_START_FAD};
use crate::disc::{Disc, DiscType, Session};
use log::debug;

/// Finalizes the table of contents once every track has been committed.
pub trait SessionLayout {
    /// Called with at least one track, before audio pregaps are stripped.
    fn fill_sessions(&self, disc: &mut Disc);
}

impl<L: SessionLayout + ?Sized> SessionLayout for &L {
    fn fill_sessions(&self, disc: &mut Disc) {
        (**self).fill_sessions(disc)
    }
}

/// Splits the disc at the high-density area: tracks starting below FAD 45150 form the
/// single-density session, the rest the high-density one.
#[derive(Debug, Default, Clone, Copy)]
pub struct GdSessionLayout;

impl SessionLayout for GdSessionLayout {
    fn fill_sessions(&self, disc: &mut Disc) {
        let high_density = disc
            .tracks
            .iter()
            .position(|t| t.start_fad >= HIGH_DENSITY_START_FAD);

        let mut session_starts = vec![0];
        if let Some(first) = high_density.filter(|i| *i > 0) {
            session_starts.push(first);
        }

        for i in 0..disc.tracks.len() {
            let next_in_session = (i + 1 < disc.tracks.len() && !session_starts.contains(&(i + 1)))
                .then(|| disc.tracks[i + 1].start_fad);

            let track = &mut disc.tracks[i];
            track.end_fad = match next_in_session {
                Some(next) => next.saturating_sub(1).max(track.start_fad),
                None => track
                    .start_fad
                    .saturating_add(track.file.sector_count().saturating_sub(1)),
            };
        }

        disc.sessions = session_starts
            .iter()
            .map(|&i| Session {
                first_track: i + 1,
                start_fad: disc.tracks[i].start_fad,
            })
            .collect();

        if high_density.is_some() {
            disc.disc_type = DiscType::GdRom;
            disc.lead_out_fad = GD_LEAD_OUT_FAD;
        } else {
            disc.disc_type = DiscType::CdRom;
            disc.lead_out_fad = disc
                .tracks
                .last()
                .map(|t| t.end_fad.saturating_add(1))
                .unwrap_or(0);
        }

        debug!(
            "Laid out {} as {} session(s), lead-out at FAD {}",
            disc.disc_type,
            disc.sessions.len(),
            disc.lead_out_fad
        );
    }
}
