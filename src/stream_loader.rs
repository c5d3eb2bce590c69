use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::{LocateError, Result};
use crate::file_source::{split_line, LineSource};

/// A buffered reader that tracks its own byte position.
pub struct StreamFile<R: Read + Seek> {
    reader: BufReader<R>,
    pos: u64,
    display_name: String,
}

impl StreamFile<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LocateError::from_open(e, path))?;
        if file.metadata()?.is_dir() {
            return Err(LocateError::IsDirectory {
                path: path.display().to_string(),
            });
        }

        log::debug!("opened {} for buffered reading", path.display());
        Ok(Self::new(file, path.display().to_string()))
    }
}

impl<R: Read + Seek> StreamFile<R> {
    /// Wraps `inner`, which must be positioned at its start.
    pub fn new(inner: R, display_name: String) -> Self {
        Self {
            reader: BufReader::new(inner),
            pos: 0,
            display_name,
        }
    }
}

impl<R: Read + Seek> LineSource for StreamFile<R> {
    fn position(&self) -> u64 {
        self.pos
    }

    fn seek_to(&mut self, pos: u64) -> Result<()> {
        self.reader.seek(SeekFrom::Start(pos))?;
        self.pos = pos;
        Ok(())
    }

    fn read_line(&mut self, buf: &mut Vec<u8>) -> Result<usize> {
        let mut consumed = 0;

        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                break;
            }

            let (content, used) = split_line(available);
            buf.extend_from_slice(&available[..content]);
            let terminated = used > content;
            let ends_with_cr =
                used == content + 1 && used == available.len() && available[content] == b'\r';
            self.reader.consume(used);
            consumed += used;

            if ends_with_cr {
                // A `\r` at the end of the buffer may be the first half of `\r\n`
                if self.reader.fill_buf()?.first() == Some(&b'\n') {
                    self.reader.consume(1);
                    consumed += 1;
                }
                break;
            }
            if terminated {
                break;
            }
        }

        self.pos += consumed as u64;
        Ok(consumed)
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }
}
