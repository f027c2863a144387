//! Stateless DHCP server wire format
//!
//! Enough of RFC 2131 to hand out addresses to clients of the fallback
//! access point: DISCOVER is answered with OFFER, REQUEST with ACK. The
//! offered address is derived from the client MAC, so no lease table is
//! kept.

use core::net::Ipv4Addr;

pub const SERVER_PORT: u16 = 67;
pub const CLIENT_PORT: u16 = 68;

/// Largest packet the server reads or builds.
pub const MAX_PACKET_SIZE: usize = 576;

const OP_BOOTREQUEST: u8 = 1;
const OP_BOOTREPLY: u8 = 2;
const HTYPE_ETHERNET: u8 = 1;
const HLEN_ETHERNET: u8 = 6;
const FLAG_BROADCAST: u16 = 0x8000;

const OPTION_PAD: u8 = 0;
const OPTION_SUBNET_MASK: u8 = 1;
const OPTION_ROUTER: u8 = 3;
const OPTION_DNS: u8 = 6;
const OPTION_LEASE_TIME: u8 = 51;
const OPTION_MESSAGE_TYPE: u8 = 53;
const OPTION_SERVER_ID: u8 = 54;
const OPTION_END: u8 = 255;

const MAGIC_COOKIE: [u8; 4] = [99, 130, 83, 99];
const OPTIONS_OFFSET: usize = 240;

const LEASE_TIME_SECS: u32 = 3600;
const SUBNET_MASK: Ipv4Addr = Ipv4Addr::new(255, 255, 255, 0);

/// First and last host octet handed out to clients.
const FIRST_CLIENT_HOST: u8 = 2;
const LAST_CLIENT_HOST: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Discover,
    Offer,
    Request,
    Ack,
}

impl MessageType {
    fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            1 => Self::Discover,
            2 => Self::Offer,
            3 => Self::Request,
            5 => Self::Ack,
            _ => return None,
        })
    }

    const fn as_raw(self) -> u8 {
        match self {
            Self::Discover => 1,
            Self::Offer => 2,
            Self::Request => 3,
            Self::Ack => 5,
        }
    }

    /// Reply a server sends to this client message, if any.
    pub const fn reply(self) -> Option<Self> {
        match self {
            Self::Discover => Some(Self::Offer),
            Self::Request => Some(Self::Ack),
            Self::Offer | Self::Ack => None,
        }
    }
}

/// Fields of a client message the server needs to answer it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DhcpRequest {
    pub xid: [u8; 4],
    pub client_mac: [u8; 6],
    pub message_type: MessageType,
}

/// Parse a BOOTREQUEST. Anything else yields `None`.
pub fn parse_request(packet: &[u8]) -> Option<DhcpRequest> {
    if packet.len() < OPTIONS_OFFSET || packet[0] != OP_BOOTREQUEST {
        return None;
    }
    if packet[236..OPTIONS_OFFSET] != MAGIC_COOKIE {
        return None;
    }

    let mut xid = [0u8; 4];
    xid.copy_from_slice(&packet[4..8]);
    let mut client_mac = [0u8; 6];
    client_mac.copy_from_slice(&packet[28..34]);

    let message_type = find_option(&packet[OPTIONS_OFFSET..], OPTION_MESSAGE_TYPE)
        .and_then(|data| data.first().copied())
        .and_then(MessageType::from_raw)?;

    Some(DhcpRequest {
        xid,
        client_mac,
        message_type,
    })
}

/// Address offered to a client, inside the server's /24.
pub fn allocate_ip(server: Ipv4Addr, mac: &[u8; 6]) -> Ipv4Addr {
    let span = LAST_CLIENT_HOST - FIRST_CLIENT_HOST + 1;
    let mut host = FIRST_CLIENT_HOST + mac[5] % span;
    let [a, b, c, server_host] = server.octets();
    if host == server_host {
        host = if host == LAST_CLIENT_HOST {
            FIRST_CLIENT_HOST
        } else {
            host + 1
        };
    }
    Ipv4Addr::new(a, b, c, host)
}

/// Build a reply into `buffer` and return its length.
///
/// `buffer` must hold at least [`MAX_PACKET_SIZE`] bytes.
pub fn build_reply(
    buffer: &mut [u8],
    server: Ipv4Addr,
    request: &DhcpRequest,
    offered: Ipv4Addr,
    reply: MessageType,
) -> usize {
    buffer.fill(0);

    buffer[0] = OP_BOOTREPLY;
    buffer[1] = HTYPE_ETHERNET;
    buffer[2] = HLEN_ETHERNET;
    buffer[4..8].copy_from_slice(&request.xid);
    buffer[10..12].copy_from_slice(&FLAG_BROADCAST.to_be_bytes());
    buffer[16..20].copy_from_slice(&offered.octets());
    buffer[20..24].copy_from_slice(&server.octets());
    buffer[28..34].copy_from_slice(&request.client_mac);
    buffer[236..OPTIONS_OFFSET].copy_from_slice(&MAGIC_COOKIE);

    let mut options = OptionWriter::new(buffer, OPTIONS_OFFSET);
    options.put(OPTION_MESSAGE_TYPE, &[reply.as_raw()]);
    options.put(OPTION_SERVER_ID, &server.octets());
    options.put(OPTION_LEASE_TIME, &LEASE_TIME_SECS.to_be_bytes());
    options.put(OPTION_SUBNET_MASK, &SUBNET_MASK.octets());
    options.put(OPTION_ROUTER, &server.octets());
    // The access point answers nothing else, but clients insist on a resolver
    options.put(OPTION_DNS, &server.octets());
    options.end()
}

/// Sequential TLV writer for the options area.
struct OptionWriter<'a> {
    buffer: &'a mut [u8],
    position: usize,
}

impl<'a> OptionWriter<'a> {
    fn new(buffer: &'a mut [u8], position: usize) -> Self {
        Self { buffer, position }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn put(&mut self, code: u8, data: &[u8]) {
        let start = self.position;
        self.buffer[start] = code;
        self.buffer[start + 1] = data.len() as u8;
        self.buffer[start + 2..start + 2 + data.len()].copy_from_slice(data);
        self.position = start + 2 + data.len();
    }

    fn end(self) -> usize {
        self.buffer[self.position] = OPTION_END;
        self.position + 1
    }
}

fn find_option(options: &[u8], wanted: u8) -> Option<&[u8]> {
    let mut i = 0;
    while i < options.len() {
        match options[i] {
            OPTION_END => break,
            OPTION_PAD => {
                i += 1;
                continue;
            }
            code => {
                let len = *options.get(i + 1)? as usize;
                let data = options.get(i + 2..i + 2 + len)?;
                if code == wanted {
                    return Some(data);
                }
                i += 2 + len;
            }
        }
    }
    None
}
