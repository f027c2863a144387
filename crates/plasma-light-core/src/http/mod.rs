//! Minimal HTTP/1.0 responder for the mode control page.
//!
//! Only the request line is interpreted. Headers are read and dropped, the
//! body is never read. Every request, however malformed, gets the status
//! page back.

mod headers;
mod page;
mod request;
mod responder;

pub use headers::{ContentType, ResponseHeaders, StatusCode};
pub use page::write_page;
pub use request::{extract_mode, read_line, skip_headers, LineEnd};
pub use responder::serve_client;

/// Maximum stored length of the request line. Longer lines are cut.
pub const REQUEST_LINE_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The peer went away while the response was written
    Closed,
    Io(embedded_io::ErrorKind),
    FormatHeaders,
}

impl From<core::fmt::Error> for Error {
    fn from(_error: core::fmt::Error) -> Self {
        Error::FormatHeaders
    }
}

/// Map a transport error into [`Error`].
pub(crate) fn io_error<E: embedded_io::Error>(error: E) -> Error {
    match error.kind() {
        embedded_io::ErrorKind::ConnectionReset
        | embedded_io::ErrorKind::BrokenPipe
        | embedded_io::ErrorKind::NotConnected => Error::Closed,
        kind => Error::Io(kind),
    }
}

pub type HttpResult = Result<(), Error>;
