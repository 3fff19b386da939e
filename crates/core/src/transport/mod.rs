//! Network transport layer for RTSP signaling and RTP media reception.
//!
//! RTSP uses a split transport model:
//!
//! - **TCP** ([`tcp`]): carries RTSP request/response signaling. One
//!   connection per server, driven synchronously — one exchange at a time.
//!
//! - **UDP** ([`udp`]): carries inbound RTP media datagrams on the client
//!   port pair offered in the SETUP `Transport` header.
//!
//! The message-construction layer in [`crate::protocol`] never touches
//! either side; it only produces the strings the control channel sends.

pub mod tcp;
pub mod udp;

pub use tcp::ControlChannel;
pub use udp::UdpReceiver;
