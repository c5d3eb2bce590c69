use crate::error::Result;

pub trait LineSource {
    /// Current byte position of the cursor
    fn position(&self) -> u64;

    /// Move the cursor to an absolute byte position. Positions past the end are allowed and
    /// make every following read empty.
    fn seek_to(&mut self, pos: u64) -> Result<()>;

    /// Append the next line to `buf` without its terminator (`\n`, `\r\n` or a lone `\r`) and
    /// move the cursor past the terminator. Returns the number of bytes consumed, 0 at EOF.
    fn read_line(&mut self, buf: &mut Vec<u8>) -> Result<usize>;

    /// Display name for diagnostics
    fn display_name(&self) -> &str;
}

/// Split the line starting at `data[0]`: returns (content length, consumed length).
pub(crate) fn split_line(data: &[u8]) -> (usize, usize) {
    match data.iter().position(|&b| b == b'\n' || b == b'\r') {
        Some(i) if data[i] == b'\r' && data.get(i + 1) == Some(&b'\n') => (i, i + 2),
        Some(i) => (i, i + 1),
        None => (data.len(), data.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_line_terminators() {
        assert_eq!(split_line(b"abc\ndef"), (3, 4));
        assert_eq!(split_line(b"abc\r\ndef"), (3, 5));
        assert_eq!(split_line(b"abc\rdef"), (3, 4));
        assert_eq!(split_line(b"abc"), (3, 3));
        assert_eq!(split_line(b""), (0, 0));
        assert_eq!(split_line(b"\n"), (0, 1));
        assert_eq!(split_line(b"abc\r"), (3, 4));
    }
}
