//! File and stream I/O helpers.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::ExtensionResult;

const COPY_BUFFER_SIZE: usize = 8 * 1024;

/// Reads the entire file into a byte vector.
pub fn read_bytes(path: impl AsRef<Path>) -> ExtensionResult<Vec<u8>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading file");
    Ok(fs::read(path)?)
}

/// Reads the entire file as UTF-8 text.
pub fn read_string(path: impl AsRef<Path>) -> ExtensionResult<String> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading file");
    Ok(fs::read_to_string(path)?)
}

/// Writes the bytes to the file, creating parent directories as needed and
/// replacing any existing content.
pub fn write_bytes(path: impl AsRef<Path>, data: &[u8]) -> ExtensionResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    debug!(path = %path.display(), bytes = data.len(), "writing file");
    let mut file = File::create(path)?;
    file.write_all(data)?;
    Ok(())
}

/// Copies everything from `reader` to `writer` through a fixed-size buffer,
/// returning the number of bytes copied.
pub fn copy_stream<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> ExtensionResult<u64> {
    let mut buffer = [0u8; COPY_BUFFER_SIZE];
    let mut copied = 0u64;
    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            return Ok(copied);
        }
        writer.write_all(&buffer[..read])?;
        copied += read as u64;
    }
}

/// Reads at most `limit` bytes from `reader`.
///
/// Stops at end of input or at the limit, whichever comes first; never
/// over-reads past the limit.
pub fn read_at_most<R: Read>(reader: &mut R, limit: usize) -> ExtensionResult<Vec<u8>> {
    let mut out = Vec::new();
    reader.take(limit as u64).read_to_end(&mut out)?;
    Ok(out)
}
