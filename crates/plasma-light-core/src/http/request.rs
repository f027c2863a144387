use embedded_io_async::Read;
use heapless::Vec;

use super::{Error, HttpResult, io_error};

const MODE_PARAM: &str = "?mode=";
const VERSION_MARKER: &str = " HTTP/1.1";

/// Header lines only need to be told apart from the blank separator.
const HEADER_LINE_CAPACITY: usize = 8;

/// How a call to [`read_line`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    /// A `\n` was read; it is part of the returned line
    Newline,
    /// The peer closed its side before a `\n` arrived
    EndOfStream,
}

/// Read one line, including its terminator, into `line`.
///
/// Bytes that do not fit into `line` are consumed and dropped.
pub async fn read_line<R: Read, const N: usize>(
    reader: &mut R,
    line: &mut Vec<u8, N>,
) -> Result<LineEnd, Error> {
    line.clear();
    let mut byte = [0u8; 1];
    loop {
        let n = reader.read(&mut byte).await.map_err(io_error)?;
        if n == 0 {
            return Ok(LineEnd::EndOfStream);
        }
        let _ = line.push(byte[0]);
        if byte[0] == b'\n' {
            return Ok(LineEnd::Newline);
        }
    }
}

/// Read and drop header lines up to and including the blank separator line.
///
/// There is no deadline: a peer that keeps the connection open without ever
/// sending the blank line keeps this future pending.
pub async fn skip_headers<R: Read>(reader: &mut R) -> HttpResult {
    let mut line = Vec::<u8, HEADER_LINE_CAPACITY>::new();
    loop {
        match read_line(reader, &mut line).await? {
            LineEnd::EndOfStream => return Ok(()),
            LineEnd::Newline if is_blank(&line) => return Ok(()),
            LineEnd::Newline => {}
        }
    }
}

/// Extract the `mode` value from a request line.
///
/// The value is whatever follows `?mode=` up to ` HTTP/1.1` (or the end of
/// the line when the marker is missing). No percent-decoding or further
/// query parsing takes place.
pub fn extract_mode(request_line: &str) -> Option<&str> {
    let line = request_line.trim_end_matches(['\r', '\n']);
    let start = line.find(MODE_PARAM)? + MODE_PARAM.len();
    let value = &line[start..];
    let end = value.find(VERSION_MARKER).unwrap_or(value.len());
    Some(&value[..end])
}

/// Longest valid UTF-8 prefix of `bytes`.
pub(super) fn utf8_prefix(bytes: &[u8]) -> &str {
    match core::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
    }
}

fn is_blank(line: &[u8]) -> bool {
    line == b"\r\n" || line == b"\n"
}
