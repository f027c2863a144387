use embassy_net::Stack;
use log::info;

use crate::{
    config::{HTTP_PORT, HTTP_RX_BUFFER_SIZE, HTTP_TX_BUFFER_SIZE},
    controllers::ModeController,
    net::HttpServer,
};

/// One HTTP worker. Several run side by side so a stalled client does not
/// lock out everyone else.
#[embassy_executor::task(pool_size = 2)]
pub async fn http_server_task(
    stack: Stack<'static>,
    controller: &'static ModeController,
    worker: usize,
) {
    let mut rx_buffer = [0u8; HTTP_RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; HTTP_TX_BUFFER_SIZE];

    info!("http_server[{}]: listening on port {}", worker, HTTP_PORT);
    HttpServer::new(controller, HTTP_PORT)
        .listen_and_serve(stack, &mut rx_buffer, &mut tx_buffer)
        .await;
}
