use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

use crate::error::{LocateError, Result};
use crate::file_source::{split_line, LineSource};

/// A read-only memory map of a file with a byte cursor.
pub struct MappedFile {
    mmap: Mmap,
    pos: u64,
    display_name: String,
}

impl MappedFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LocateError::from_open(e, path))?;
        if file.metadata()?.is_dir() {
            return Err(LocateError::IsDirectory {
                path: path.display().to_string(),
            });
        }

        let mmap = unsafe { Mmap::map(&file)? };
        log::debug!("mapped {} ({} bytes)", path.display(), mmap.len());

        Ok(Self {
            mmap,
            pos: 0,
            display_name: path.display().to_string(),
        })
    }

    fn remaining(&self) -> &[u8] {
        let start = usize::try_from(self.pos).unwrap_or(usize::MAX).min(self.mmap.len());
        &self.mmap[start..]
    }
}

impl LineSource for MappedFile {
    fn position(&self) -> u64 {
        self.pos
    }

    fn seek_to(&mut self, pos: u64) -> Result<()> {
        self.pos = pos;
        Ok(())
    }

    fn read_line(&mut self, buf: &mut Vec<u8>) -> Result<usize> {
        let data = self.remaining();
        let (content, consumed) = split_line(data);
        buf.extend_from_slice(&data[..content]);
        self.pos += consumed as u64;
        Ok(consumed)
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }
}
