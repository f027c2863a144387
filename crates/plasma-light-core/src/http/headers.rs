use core::fmt::Write;

pub type StatusCode = u16;

fn reason_phrase(code: StatusCode) -> &'static str {
    match code {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// HTTP Content Type.
#[derive(Debug, Clone, Copy)]
pub enum ContentType {
    TextHtml,
}

impl ContentType {
    /// Convert the content type to a string.
    pub(super) fn as_str(self) -> &'static str {
        match self {
            ContentType::TextHtml => "text/html",
        }
    }
}

/// Response status line and headers.
///
/// Responses are always HTTP/1.0, so the connection closes after the body
/// without a `Connection` header.
#[derive(Debug, Clone, Copy)]
pub struct ResponseHeaders {
    status: StatusCode,
    content_type: Option<ContentType>,
}

impl ResponseHeaders {
    /// Create response headers with a status code.
    pub const fn from_code(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
        }
    }

    /// `200 OK`
    pub const fn success() -> Self {
        Self::from_code(200)
    }

    /// Set the content type.
    #[must_use]
    pub const fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Write the status line and headers, including the blank separator line.
    pub fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error> {
        write!(
            writer,
            "HTTP/1.0 {} {}\r\n",
            self.status,
            reason_phrase(self.status)
        )?;
        if let Some(content_type) = self.content_type {
            write!(writer, "Content-type: {}\r\n", content_type.as_str())?;
        }
        write!(writer, "\r\n")
    }
}
