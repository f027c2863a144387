use embassy_net::tcp::TcpSocket;
use plasma_light_core::{ControlState, http::{HttpResult, serve_client}};

use crate::net::HttpHandler;

/// Serves the mode page and writes requested modes into the control state.
pub struct ModeController {
    state: &'static ControlState,
}

impl ModeController {
    pub fn new(state: &'static ControlState) -> Self {
        Self { state }
    }
}

impl HttpHandler for ModeController {
    async fn handle_request(&self, socket: &mut TcpSocket<'_>) -> HttpResult {
        serve_client(socket, self.state).await
    }
}
