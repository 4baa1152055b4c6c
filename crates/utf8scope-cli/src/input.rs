use std::{
    ffi::OsString,
    fs,
    io::{self, BufRead},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

/// Byte capacity of the input buffer.
pub const DEFAULT_MAX_BYTES: usize = 256;

/// Where the text buffer comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Arg(OsString),
    File(PathBuf),
    Stdin,
}

/// Reads the buffer from `source` and applies the capacity check.
pub fn read(source: &Source, max_bytes: usize) -> Result<Vec<u8>> {
    let bytes = match source {
        Source::Arg(text) => text.clone().into_encoded_bytes(),
        Source::File(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        Source::Stdin => read_line(io::stdin().lock()).context("failed to read stdin")?,
    };
    debug!(source = ?source, len = bytes.len(), "read input");
    Ok(truncate(bytes, max_bytes))
}

/// Reads one line, without its line terminator.
pub fn read_line(mut reader: impl BufRead) -> Result<Vec<u8>> {
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        bail!("no input");
    }
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    Ok(line)
}

fn truncate(mut bytes: Vec<u8>, max_bytes: usize) -> Vec<u8> {
    if bytes.len() > max_bytes {
        warn!(len = bytes.len(), max_bytes, "input truncated");
        bytes.truncate(max_bytes);
    }
    bytes
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn strips_one_line_terminator() {
        assert_eq!(read_line(&b"hello\nworld\n"[..]).unwrap(), b"hello");
        assert_eq!(read_line(&b"crlf\r\n"[..]).unwrap(), b"crlf");
        assert_eq!(read_line(&b"no newline"[..]).unwrap(), b"no newline");
        assert_eq!(read_line(&b"\n"[..]).unwrap(), b"");
    }

    #[test]
    fn empty_stdin_is_an_error() {
        assert!(read_line(&b""[..]).is_err());
    }

    #[test]
    fn truncates_at_capacity() {
        let source = Source::Arg("abcdef".into());
        assert_eq!(read(&source, 4).unwrap(), b"abcd");
        assert_eq!(read(&source, DEFAULT_MAX_BYTES).unwrap(), b"abcdef");
    }

    #[test]
    fn reads_raw_file_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xE4, 0xB8, 0xAD, b'\n', 0xFF]).unwrap();
        let bytes = read(&Source::File(file.path().to_path_buf()), 256).unwrap();
        assert_eq!(bytes, [0xE4, 0xB8, 0xAD, b'\n', 0xFF]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let err = read(&Source::File(missing), 256).unwrap_err();
        assert!(err.to_string().starts_with("failed to read"));
    }
}
