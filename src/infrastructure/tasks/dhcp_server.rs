use embassy_net::udp::{PacketMetadata, UdpSocket};
use embassy_net::{Ipv4Address, Stack};
use log::{debug, info, warn};
use plasma_light_core::net::dhcp::{
    CLIENT_PORT,
    MAX_PACKET_SIZE,
    SERVER_PORT,
    allocate_ip,
    build_reply,
    parse_request,
};

/// DHCP server for the fallback access point.
///
/// Stateless: every client gets an address derived from its MAC.
#[embassy_executor::task]
pub async fn dhcp_server_task(stack: Stack<'static>, server_address: Ipv4Address) {
    let mut rx_meta = [PacketMetadata::EMPTY; 8];
    let mut rx_buffer = [0u8; 1024];
    let mut tx_meta = [PacketMetadata::EMPTY; 8];
    let mut tx_buffer = [0u8; 1024];

    let mut socket = UdpSocket::new(
        stack,
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
    );

    if let Err(e) = socket.bind(SERVER_PORT) {
        warn!("dhcp_server: failed to bind port {}: {:?}", SERVER_PORT, e);
        return;
    }
    info!("dhcp_server: listening on port {}", SERVER_PORT);

    let mut packet = [0u8; MAX_PACKET_SIZE];

    loop {
        let len = match socket.recv_from(&mut packet).await {
            Ok((len, _remote)) => len,
            Err(e) => {
                warn!("dhcp_server: recv error: {:?}", e);
                continue;
            }
        };

        let Some(request) = parse_request(&packet[..len]) else {
            debug!("dhcp_server: ignoring malformed packet");
            continue;
        };
        let Some(reply) = request.message_type.reply() else {
            continue;
        };

        let offered = allocate_ip(server_address, &request.client_mac);
        debug!(
            "dhcp_server: {:?} from {:02x?}, offering {}",
            request.message_type, request.client_mac, offered
        );

        let reply_len = build_reply(&mut packet, server_address, &request, offered, reply);
        if let Err(e) = socket
            .send_to(&packet[..reply_len], (Ipv4Address::BROADCAST, CLIENT_PORT))
            .await
        {
            warn!("dhcp_server: send error: {:?}", e);
        }
    }
}
