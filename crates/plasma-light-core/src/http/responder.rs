use embedded_io_async::{Read, Write};
use heapless::{String, Vec};
use log::{debug, info};

use super::{
    ContentType,
    HttpResult,
    REQUEST_LINE_CAPACITY,
    ResponseHeaders,
    io_error,
    page::write_page,
    request::{LineEnd, extract_mode, read_line, skip_headers, utf8_prefix},
};
use crate::{mode::UNKNOWN_MODE_NAME, state::ControlState};

const RESPONSE_HEAD_SIZE: usize = 64;

/// Serve a single request on `conn` and store the requested mode.
///
/// A request without a `mode` parameter (including an empty or missing
/// request line) stores [`UNKNOWN_MODE_NAME`]. The status page is always
/// returned with `200 OK`. Closing the connection is left to the caller.
pub async fn serve_client<C>(conn: &mut C, state: &ControlState) -> HttpResult
where
    C: Read + Write,
{
    let mut request_line = Vec::<u8, REQUEST_LINE_CAPACITY>::new();
    if read_line(conn, &mut request_line).await? == LineEnd::Newline {
        skip_headers(conn).await?;
    }

    let request = utf8_prefix(&request_line);
    debug!("http: request {:?}", request.trim_end());

    let mode = extract_mode(request).unwrap_or(UNKNOWN_MODE_NAME);
    state.set(mode);
    info!("http: mode set to '{}'", mode);

    let mut head = String::<RESPONSE_HEAD_SIZE>::new();
    ResponseHeaders::success()
        .with_content_type(ContentType::TextHtml)
        .write_to(&mut head)?;
    conn.write_all(head.as_bytes()).await.map_err(io_error)?;
    write_page(conn, mode).await?;
    conn.flush().await.map_err(io_error)
}
