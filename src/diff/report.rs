//! Result emission

use crate::types::Line;
use std::io::{self, Write};

/// Writes differing lines to an output stream, one per line.
///
/// Emits exactly what the engine produces, in the order produced: no
/// sorting, no extra deduplication, no formatting. Line bytes are written
/// as-is followed by a single `\n`.
pub struct DiffWriter<W: Write> {
    out: W,
    emitted: u64,
}

impl<W: Write> DiffWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, emitted: 0 }
    }

    /// Write one differing line
    pub fn emit(&mut self, line: &Line) -> io::Result<()> {
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.emitted += 1;
        Ok(())
    }

    /// Lines written so far
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Flush the underlying stream
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_line_with_terminator() {
        let mut writer = DiffWriter::new(Vec::new());
        writer.emit(&Line::from("abc")).unwrap();
        writer.emit(&Line::from("foo")).unwrap();

        assert_eq!(writer.emitted(), 2);
        assert_eq!(writer.out, b"abc\nfoo\n");
    }

    #[test]
    fn test_empty_line_still_terminated() {
        let mut writer = DiffWriter::new(Vec::new());
        writer.emit(&Line::from("")).unwrap();
        assert_eq!(writer.out, b"\n");
    }

    #[test]
    fn test_bytes_written_verbatim() {
        let mut writer = DiffWriter::new(Vec::new());
        writer.emit(&Line::from("dos\r")).unwrap();
        assert_eq!(writer.out, b"dos\r\n");
    }
}
