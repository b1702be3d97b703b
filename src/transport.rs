//! Multicast UDP transport.
//!
//! One socket, bound to the wildcard address on port 5353 and joined to
//! 224.0.0.251 on one interface. The receiver task is the only reader;
//! senders only issue short atomic writes. Coexistence with a system mDNS
//! daemon is a known constraint of this single-socket design; the bind
//! error text spells it out rather than attempting SO_REUSEPORT.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tracing::{debug, info};

use crate::error::MdnsError;
use crate::{MAX_PAYLOAD_SIZE, MDNS_GROUP, MDNS_PORT};

/// Receive buffer requested from the kernel; large enough to absorb a
/// burst of maximum-size (9000 B) payloads.
const RECV_BUFFER_SIZE: usize = 64 * 1024;

/// The mDNS socket plus the destination all queries are written to.
pub(crate) struct MdnsSocket {
    socket: UdpSocket,
    target: SocketAddr,
}

impl MdnsSocket {
    /// Bind 0.0.0.0:5353, join the group, and hand the socket to tokio.
    pub(crate) fn bind_multicast(interface: Option<Ipv4Addr>) -> Result<Self, MdnsError> {
        let bind_addr = SocketAddr::from(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, MDNS_PORT));

        let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))
            .map_err(|e| MdnsError::network("create socket", bind_addr.to_string(), e.to_string(), Some(e)))?;

        socket
            .set_reuse_address(true)
            .map_err(|e| MdnsError::network("configure socket", bind_addr.to_string(), e.to_string(), Some(e)))?;

        // Best effort; a small kernel default only costs burst tolerance.
        if let Err(e) = socket.set_recv_buffer_size(RECV_BUFFER_SIZE) {
            debug!("could not grow receive buffer to {}: {}", RECV_BUFFER_SIZE, e);
        }

        socket.bind(&bind_addr.into()).map_err(|e| {
            let detail = match e.kind() {
                std::io::ErrorKind::PermissionDenied => format!(
                    "{e}; UDP port {MDNS_PORT} is privileged on some Unix-like systems; grant \
                     the binary a raw-network capability (e.g. CAP_NET_BIND_SERVICE) or run it \
                     with sufficient privileges"
                ),
                std::io::ErrorKind::AddrInUse => format!(
                    "{e}; a system mDNS daemon (avahi-daemon, mDNSResponder) likely owns port \
                     {MDNS_PORT} already; this querier uses a single exclusive socket and does \
                     not attempt SO_REUSEPORT"
                ),
                _ => e.to_string(),
            };
            MdnsError::network("bind", bind_addr.to_string(), detail, Some(e))
        })?;

        let iface = interface.unwrap_or(Ipv4Addr::UNSPECIFIED);
        socket.join_multicast_v4(&MDNS_GROUP, &iface).map_err(|e| {
            MdnsError::network(
                "join multicast group",
                format!("{MDNS_GROUP} on {iface}"),
                format!("{e}; no usable multicast-capable network interface was available"),
                Some(e),
            )
        })?;

        // Hear responders on this host too.
        if let Err(e) = socket.set_multicast_loop_v4(true) {
            debug!("could not enable multicast loopback: {}", e);
        }

        let socket = Self::into_tokio(socket, bind_addr)?;
        info!("mdns querier bound to {} (group {})", bind_addr, MDNS_GROUP);

        Ok(Self {
            socket,
            target: SocketAddr::from(SocketAddrV4::new(MDNS_GROUP, MDNS_PORT)),
        })
    }

    /// Socket bound on `local` and aimed at `target` instead of the
    /// multicast group. Lets the engine tests run a scripted responder
    /// in-process and exercise an explicitly chosen interface address.
    #[cfg(test)]
    pub(crate) fn bind_loopback(local: Ipv4Addr, target: SocketAddr) -> Result<Self, MdnsError> {
        let bind_addr = SocketAddr::from(SocketAddrV4::new(local, 0));
        let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))
            .map_err(|e| MdnsError::network("create socket", bind_addr.to_string(), e.to_string(), Some(e)))?;
        socket
            .bind(&bind_addr.into())
            .map_err(|e| MdnsError::network("bind", bind_addr.to_string(), e.to_string(), Some(e)))?;
        let socket = Self::into_tokio(socket, bind_addr)?;
        Ok(Self { socket, target })
    }

    fn into_tokio(socket: Socket, bind_addr: SocketAddr) -> Result<UdpSocket, MdnsError> {
        socket
            .set_nonblocking(true)
            .map_err(|e| MdnsError::network("configure socket", bind_addr.to_string(), e.to_string(), Some(e)))?;
        UdpSocket::from_std(socket.into())
            .map_err(|e| MdnsError::network("register socket", bind_addr.to_string(), e.to_string(), Some(e)))
    }

    /// Send one query datagram to the group.
    pub(crate) async fn send(&self, payload: &[u8]) -> Result<(), MdnsError> {
        let written = self
            .socket
            .send_to(payload, self.target)
            .await
            .map_err(|e| MdnsError::network("send", self.target.to_string(), e.to_string(), Some(e)))?;
        if written != payload.len() {
            return Err(MdnsError::network(
                "send",
                self.target.to_string(),
                format!("short write: {written} of {} bytes", payload.len()),
                None,
            ));
        }
        Ok(())
    }

    /// Receive one datagram; buffers must be sized for [`MAX_PAYLOAD_SIZE`].
    pub(crate) async fn recv_from(&self, buf: &mut [u8]) -> std::io::Result<(usize, SocketAddr)> {
        debug_assert!(buf.len() >= MAX_PAYLOAD_SIZE);
        self.socket.recv_from(buf).await
    }
}
