//! Line ingestion - streams a file into discrete line records

use crate::types::FcompareError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Lazy, single-pass line reader over one input file.
///
/// Yields each newline-delimited record with the terminator stripped. A file
/// that ends without a final newline still yields its last partial line; it
/// does not yield a trailing empty record either way. Interior empty lines
/// are real records.
///
/// The reader is not restartable; reopen the file to scan again.
///
/// # Errors
/// * `FcompareError::FileAccess` from [`LineReader::open`] when the path is
///   missing or unreadable - fatal, the comparison aborts
/// * `FcompareError::Io` from the iterator on read failures after open
pub struct LineReader {
    inner: BufReader<File>,
}

impl LineReader {
    /// Open a file for line ingestion
    pub fn open(path: &Path) -> Result<Self, FcompareError> {
        let file = File::open(path).map_err(|source| FcompareError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            // 64KB buffer; line reads on multi-million-line inputs are
            // dominated by syscall count otherwise
            inner: BufReader::with_capacity(64 * 1024, file),
        })
    }
}

impl Iterator for LineReader {
    type Item = Result<Vec<u8>, FcompareError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();

        match self.inner.read_until(b'\n', &mut buf) {
            Ok(0) => None, // EOF, no pending record
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                }
                Some(Ok(buf))
            }
            Err(e) => Some(Err(FcompareError::Io(e))),
        }
    }
}
