//! RTSP protocol message construction (RFC 2326).
//!
//! This module builds the text-based RTSP request messages a client sends
//! on the control connection — request lines, headers, and method-specific
//! defaults. It performs no I/O and holds no state; each constructor is a
//! pure function from inputs to a complete message.
//!
//! ## RTSP message format (RFC 2326 §4)
//!
//! RTSP messages follow HTTP/1.1 syntax with a different method set:
//!
//! ```text
//! DESCRIBE rtsp://server/stream RTSP/1.0\r\n
//! CSeq: 2\r\n
//! Accept: application/sdp\r\n
//! \r\n
//! ```
//!
//! Key differences from HTTP:
//! - Stateful: sessions persist across requests (RFC 2326 §3).
//! - The server assigns a session ID that the client echoes in `Session`
//!   headers (RFC 2326 §12.37).
//! - The data plane (RTP over UDP) is negotiated out-of-band via the
//!   SETUP `Transport` header (RFC 2326 §12.39).
//!
//! ## Supported methods
//!
//! | Method | RFC section | Purpose |
//! |--------|-------------|---------|
//! | OPTIONS | §10.1 | Capability discovery |
//! | DESCRIBE | §10.2 | Retrieve SDP session description |
//! | ANNOUNCE | §10.3 | Post a session description to the server |
//! | SETUP | §10.4 | Negotiate transport (UDP ports) |
//! | PLAY | §10.5 | Start media delivery |
//! | PAUSE | §10.6 | Suspend media delivery |
//! | TEARDOWN | §10.7 | Destroy session |
//! | GET_PARAMETER | §10.8 | Keepalive / parameter query |
//! | SET_PARAMETER | §10.9 | Set a device or stream parameter |
//! | RECORD | §10.11 | Start recording a media stream |

pub mod messages;
pub mod method;
pub mod request;
pub mod transport;

pub use messages::{
    AnnounceParams, DescribeParams, GetParameterParams, OptionsParams, PlayParams, RecordParams,
    SetParameterParams, SetupParams, TeardownParams,
};
pub use method::Method;
pub use request::RtspRequest;
pub use transport::TransportSpec;

/// Protocol version emitted on every request line. The only version this
/// library speaks.
pub const RTSP_VERSION: &str = "RTSP/1.0";

/// Default media description format for `Accept` and `Content-Type` headers.
pub const APPLICATION_SDP: &str = "application/sdp";

/// CSeq value used when the caller has not supplied one (RFC 2326 §12.17).
pub const DEFAULT_SEQUENCE: u32 = 1;

/// Default client RTP port offered in the SETUP `Transport` header.
/// RTCP is always the next port up.
pub const DEFAULT_CLIENT_RTP_PORT: u16 = 9000;

/// Default lower-transport specification for SETUP.
pub const DEFAULT_TRANSPORT: &str = "RTP/AVP";

/// Default routing mode for SETUP.
pub const DEFAULT_ROUTING: &str = "unicast";

/// Default playback range for PLAY: Normal Play Time from the stream start.
pub const DEFAULT_NPT: &str = "0.000-";

/// Client identification string appended to outgoing requests by
/// [`RtspClient`](crate::RtspClient) per RFC 2326 §12.41.
pub const USER_AGENT: &str = "rtsp-client-rs/0.1";
