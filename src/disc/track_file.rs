use crate::disc::error::{DiscError, DiscResult};
use crate::fs::BackingFile;

/// A track's view into its backing file: sector `fad` lives at
/// `offset + (fad - fad_base) * sector_size`.
#[derive(Debug)]
pub struct RawTrackFile {
    file: Box<dyn BackingFile>,
    offset: u64,
    fad_base: u32,
    sector_size: u32,
}

impl RawTrackFile {
    pub fn new(file: Box<dyn BackingFile>, offset: u64, fad_base: u32, sector_size: u32) -> Self {
        Self {
            file,
            offset,
            fad_base,
            sector_size,
        }
    }

    pub fn fad_base(&self) -> u32 {
        self.fad_base
    }

    pub fn file_size(&self) -> u64 {
        self.file.size()
    }

    /// Whole sectors available after the base offset, a trailing partial sector is not counted.
    pub fn sector_count(&self) -> u32 {
        let available = self.file.size().saturating_sub(self.offset);
        u32::try_from(available / self.sector_size as u64).unwrap_or(u32::MAX)
    }

    pub fn read_sector(&mut self, fad: u32, buf: &mut [u8]) -> DiscResult<()> {
        if buf.len() != self.sector_size as usize {
            return Err(DiscError::BufferSize {
                expected: self.sector_size as usize,
                actual: buf.len(),
            });
        }

        let relative = fad
            .checked_sub(self.fad_base)
            .ok_or(DiscError::FadBeforeTrackFile {
                fad,
                fad_base: self.fad_base,
            })?;
        let position = self.offset + relative as u64 * self.sector_size as u64;

        self.file.read_at(position, buf)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFile;

    fn numbered_sectors(count: u8, sector_size: usize) -> Vec<u8> {
        (0..count)
            .flat_map(|i| std::iter::repeat_n(i, sector_size))
            .collect()
    }

    #[test]
    fn reads_sector_relative_to_fad_base() {
        let file = MemoryFile::new(numbered_sectors(4, 2048));
        let mut track = RawTrackFile::new(Box::new(file), 0, 150, 2048);
        let mut buf = vec![0u8; 2048];

        track.read_sector(152, &mut buf).unwrap();
        assert!(buf.iter().all(|b| *b == 2));
        assert_eq!(track.sector_count(), 4);
    }

    #[test]
    fn honours_byte_offset() {
        let file = MemoryFile::new(numbered_sectors(4, 2352));
        let mut track = RawTrackFile::new(Box::new(file), 2352, 300, 2352);
        let mut buf = vec![0u8; 2352];

        track.read_sector(300, &mut buf).unwrap();
        assert!(buf.iter().all(|b| *b == 1));
        assert_eq!(track.sector_count(), 3);
    }

    #[test]
    fn rejects_fad_before_base() {
        let file = MemoryFile::new(numbered_sectors(1, 2352));
        let mut track = RawTrackFile::new(Box::new(file), 0, 150, 2352);
        let mut buf = vec![0u8; 2352];

        assert!(matches!(
            track.read_sector(149, &mut buf),
            Err(DiscError::FadBeforeTrackFile { fad: 149, fad_base: 150 })
        ));
    }

    #[test]
    fn rejects_wrong_buffer_size() {
        let file = MemoryFile::new(numbered_sectors(1, 2336));
        let mut track = RawTrackFile::new(Box::new(file), 0, 150, 2336);
        let mut buf = vec![0u8; 2352];

        assert!(matches!(
            track.read_sector(150, &mut buf),
            Err(DiscError::BufferSize {
                expected: 2336,
                actual: 2352
            })
        ));
    }

    #[test]
    fn partial_trailing_sector_is_not_readable() {
        let file = MemoryFile::new(vec![0u8; 2352 + 100]);
        let mut track = RawTrackFile::new(Box::new(file), 0, 150, 2352);
        let mut buf = vec![0u8; 2352];

        assert_eq!(track.sector_count(), 1);
        assert!(matches!(
            track.read_sector(151, &mut buf),
            Err(DiscError::IoError(_))
        ));
    }
}
