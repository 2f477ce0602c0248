//! Source line tracking for report streams
//!
//! The CSV reader skips blank lines without counting them, so its own line
//! numbers drift below the real ones after the first blank separator. This
//! adapter records where every newline sits in the raw byte stream, which
//! lets the parser turn a record's byte offset back into its real line.

use std::io::{self, Read};

/// A reader that remembers the byte offset of every `\n` passed through it
#[derive(Debug)]
pub struct LineIndexedReader<R> {
    inner: R,
    consumed: u64,
    newlines: Vec<u64>,
}

impl<R: Read> LineIndexedReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            consumed: 0,
            newlines: Vec::new(),
        }
    }

    /// 1-based line containing the byte at `offset`
    ///
    /// Only valid for offsets already read through this adapter.
    pub fn line_at(&self, offset: u64) -> u64 {
        self.newlines.partition_point(|&newline| newline < offset) as u64 + 1
    }
}

impl<R: Read> Read for LineIndexedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        for (i, byte) in buf[..n].iter().enumerate() {
            if *byte == b'\n' {
                self.newlines.push(self.consumed + i as u64);
            }
        }
        self.consumed += n as u64;
        Ok(n)
    }
}
