use embassy_net::{Stack, tcp::TcpSocket};
use log::{debug, warn};
use plasma_light_core::http::HttpResult;

pub(crate) trait HttpHandler {
    async fn handle_request(&self, socket: &mut TcpSocket<'_>) -> HttpResult;
}

/// Sequential accept loop: one connection at a time on one socket.
pub(crate) struct HttpServer<'a, T: HttpHandler> {
    handler: &'a T,
    port: u16,
}

impl<'a, T: HttpHandler> HttpServer<'a, T> {
    pub(crate) fn new(handler: &'a T, port: u16) -> Self {
        Self { handler, port }
    }

    /// Accept and serve connections forever.
    ///
    /// No socket timeout is set, so a client that never finishes its header
    /// block keeps this server busy until the peer goes away.
    pub(crate) async fn listen_and_serve(
        &self,
        stack: Stack<'static>,
        rx_buffer: &mut [u8],
        tx_buffer: &mut [u8],
    ) {
        loop {
            let mut socket = TcpSocket::new(stack, rx_buffer, tx_buffer);
            socket.set_timeout(None);

            if let Err(e) = socket.accept(self.port).await {
                warn!("http_server: accept error: {:?}", e);
                continue;
            }
            debug!("http_server: client {:?} connected", socket.remote_endpoint());

            if let Err(e) = self.handler.handle_request(&mut socket).await {
                warn!("http_server: connection error: {:?}", e);
            }

            socket.close();
            if let Err(e) = socket.flush().await {
                debug!("http_server: close error: {:?}", e);
            }
            debug!("http_server: client disconnected");
        }
    }
}
