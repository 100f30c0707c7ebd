use std::collections::HashMap;
use std::fmt::Debug;
use std::fs::File;
use std::io::{self, ErrorKind, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// An opened file that can report its size and serve bytes at absolute offsets.
pub trait BackingFile: Debug + Send {
    fn size(&self) -> u64;

    /// Fills `buf` completely from `offset` or fails.
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<()>;
}

/// Capability used by the loader to open the CUE sheet and every track file it references.
pub trait FileProvider {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BackingFile>>;
}

impl<P: FileProvider + ?Sized> FileProvider for &P {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BackingFile>> {
        (**self).open(path)
    }
}

#[derive(Debug)]
pub struct FsFile {
    file: File,
    size: u64,
}

impl FsFile {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        let metadata = file.metadata()?;

        // directories open fine on some platforms
        if !metadata.is_file() {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                "not a regular file",
            ));
        }

        Ok(Self {
            file,
            size: metadata.len(),
        })
    }
}

impl BackingFile for FsFile {
    fn size(&self) -> u64 {
        self.size
    }

    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.read_exact(buf)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FsFileProvider;

impl FileProvider for FsFileProvider {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BackingFile>> {
        Ok(Box::new(FsFile::open(path)?))
    }
}

#[derive(Debug, Clone)]
pub struct MemoryFile {
    data: Arc<Vec<u8>>,
}

impl MemoryFile {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Arc::new(data.into()),
        }
    }
}

impl BackingFile for MemoryFile {
    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        let start = usize::try_from(offset).map_err(|_| io::Error::from(ErrorKind::UnexpectedEof))?;
        let end = start
            .checked_add(buf.len())
            .filter(|end| *end <= self.data.len())
            .ok_or_else(|| io::Error::from(ErrorKind::UnexpectedEof))?;

        buf.copy_from_slice(&self.data[start..end]);
        Ok(())
    }
}

/// In-memory file table keyed by exact path.
#[derive(Debug, Default, Clone)]
pub struct MemoryFileProvider {
    files: HashMap<PathBuf, MemoryFile>,
}

impl MemoryFileProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), MemoryFile::new(data));
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(path, data);
        self
    }
}

impl FileProvider for MemoryFileProvider {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BackingFile>> {
        self.files
            .get(path)
            .map(|file| Box::new(file.clone()) as Box<dyn BackingFile>)
            .ok_or_else(|| io::Error::new(ErrorKind::NotFound, format!("{path:?} not found")))
    }
}
