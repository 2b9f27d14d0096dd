//! Bounded last-N-lines file reading.
//!
//! Reads fixed-size blocks backwards from the end of the file until
//! enough newlines have been seen, so tailing a multi-gigabyte log
//! costs only the window actually requested.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// How many bytes each backward read covers.
const BLOCK_SIZE: u64 = 8192;

/// The trailing window of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTail {
    /// The trailing lines, oldest first.
    pub lines: Vec<String>,
    /// True when the whole file held fewer lines than were requested.
    pub truncated: bool,
}

/// Reads the last `max_lines` lines of the file at `path`.
///
/// Ordering is oldest-first within the returned window. I/O errors
/// (missing file, permissions) propagate to the caller; the sources
/// built on top degrade them to descriptive results.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn tail_file(path: &Path, max_lines: usize) -> io::Result<FileTail> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();

    if max_lines == 0 {
        return Ok(FileTail {
            lines: Vec::new(),
            truncated: false,
        });
    }

    let mut buf: Vec<u8> = Vec::new();
    let mut pos = len;

    while pos > 0 {
        let read_len = BLOCK_SIZE.min(pos);
        pos -= read_len;
        file.seek(SeekFrom::Start(pos))?;
        let mut block = vec![0u8; read_len as usize];
        file.read_exact(&mut block)?;
        block.extend_from_slice(&buf);
        buf = block;

        // One newline more than requested guarantees `max_lines`
        // complete lines even when the buffer front is mid-line.
        if count_newlines(&buf) > max_lines {
            break;
        }
    }

    let reached_start = pos == 0;
    let text = String::from_utf8_lossy(&buf);
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    let truncated = reached_start && lines.len() < max_lines;
    if lines.len() > max_lines {
        lines.drain(..lines.len() - max_lines);
    }

    Ok(FileTail { lines, truncated })
}

fn count_newlines(buf: &[u8]) -> usize {
    buf.iter().filter(|&&b| b == b'\n').count()
}
