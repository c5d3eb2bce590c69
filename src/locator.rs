use std::path::Path;

use crate::error::{LocateError, Result};
use crate::file_loader::MappedFile;
use crate::file_source::LineSource;
use crate::stream_loader::StreamFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Mapped,
    Stream,
}

impl Backend {
    /// Only non-empty regular files are mapped. Pipes, device files and `/proc` entries
    /// (which report a zero length) are read through a stream instead.
    pub fn resolve(self, path: &Path) -> Backend {
        match (self, std::fs::metadata(path)) {
            (Backend::Mapped, Ok(meta)) if meta.is_file() && meta.len() > 0 => Backend::Mapped,
            (Backend::Mapped, Ok(_)) => Backend::Stream,
            (backend, _) => backend,
        }
    }
}

/// Skip `skip_lines` lines, remember that position as the seek origin, consume one more line,
/// then return the line starting `offset_chars` bytes after the origin.
///
/// The extra line is read and thrown away; it moves the cursor but not the origin. Negative
/// `skip_lines` skips nothing and a negative seek target is an error. The returned text has
/// its line terminator removed and must be valid UTF-8.
pub fn locate<S: LineSource>(
    source: &mut S,
    skip_lines: i64,
    offset_chars: i64,
) -> Result<String> {
    let mut discard = Vec::new();
    for _ in 0..skip_lines.max(0) {
        discard.clear();
        source.read_line(&mut discard)?;
        log::trace!("skipped line, cursor at {}", source.position());
    }

    let origin = source.position();
    discard.clear();
    source.read_line(&mut discard)?;

    let target = i64::try_from(origin)
        .unwrap_or(i64::MAX)
        .saturating_add(offset_chars);
    let target =
        u64::try_from(target).map_err(|_| LocateError::NegativeSeek { position: target })?;
    log::debug!(
        "{}: seek origin {}, target {}",
        source.display_name(),
        origin,
        target
    );
    source.seek_to(target)?;

    let mut line = Vec::new();
    source.read_line(&mut line)?;
    Ok(String::from_utf8(line)?)
}

/// Open `path` with the chosen backend and run [`locate`] on it. The file is closed before
/// returning, on success and on error.
pub fn locate_path<P: AsRef<Path>>(
    path: P,
    skip_lines: i64,
    offset_chars: i64,
    backend: Backend,
) -> Result<String> {
    let path = path.as_ref();
    match backend.resolve(path) {
        Backend::Mapped => locate(&mut MappedFile::open(path)?, skip_lines, offset_chars),
        Backend::Stream => locate(&mut StreamFile::open(path)?, skip_lines, offset_chars),
    }
}
