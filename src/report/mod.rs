use crate::commands::disc::{InfoCommand, ReadSectorCommand};
use anyhow::{Context, Result, anyhow};
use cue_disc::cue::{LoadedDisc, load_cue};
use cue_disc::disc::Disc;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{debug, info};
use std::path::Path;

fn load(cue: &Path) -> Result<LoadedDisc> {
    load_cue(cue)
        .with_context(|| format!("Failed to load {cue:?}"))?
        .ok_or_else(|| anyhow!("{cue:?} is not a CUE sheet"))
}

fn describe(cue: &Path, disc: &Disc) -> String {
    let mut out = format!(
        "{cue:?}: {}, {} session(s), lead-out at FAD {}\n",
        disc.disc_type,
        disc.sessions.len(),
        disc.lead_out_fad
    );
    out.push_str("  #   CTRL  START    END      SECTOR  BYTES\n");

    for (i, track) in disc.tracks.iter().enumerate() {
        out.push_str(&format!(
            "  {:<3} {:<5} {:<8} {:<8} {:<7} {}\n",
            i + 1,
            track.ctrl.bits(),
            track.start_fad,
            track.end_fad,
            track.sector_size,
            track.file.file_size()
        ));
    }

    out
}

pub fn print_info(pb: MultiProgress, cmd: InfoCommand) -> Result<()> {
    let progress = pb.add(ProgressBar::new(cmd.cues.len() as u64));
    progress.set_style(ProgressStyle::with_template(
        "{spinner} [{bar:40}] {pos}/{len} {msg}",
    )?);

    for cue in &cmd.cues {
        progress.set_message(cue.display().to_string());

        let loaded = load(cue)?;
        for warning in &loaded.warnings {
            debug!("{cue:?}: {warning}");
        }

        pb.println(describe(cue, &loaded.disc))?;
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(())
}

pub fn read_sector(cmd: ReadSectorCommand) -> Result<()> {
    let mut disc = load(&cmd.cue)?.disc;

    let sector_size = disc
        .track_for_fad(cmd.fad)
        .map(|t| t.sector_size)
        .ok_or_else(|| anyhow!("FAD {} is not part of any track", cmd.fad))?;

    let mut sector = vec![0u8; sector_size as usize];
    disc.read_sector(cmd.fad, &mut sector)?;

    match cmd.output {
        Some(output) => {
            std::fs::write(&output, &sector)?;
            info!("Wrote {sector_size} bytes of FAD {} to {output:?}", cmd.fad);
        }
        None => {
            for (i, line) in sector.chunks(16).enumerate() {
                println!("{:06x}  {}", i * 16, hex::encode(line));
            }
        }
    }

    Ok(())
}
