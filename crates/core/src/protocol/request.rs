use crate::protocol::RTSP_VERSION;
use crate::protocol::method::Method;

/// An RTSP request (RFC 2326 §6).
///
/// Serializes to the standard text format:
///
/// ```text
/// DESCRIBE rtsp://host/stream RTSP/1.0\r\n
/// CSeq: 2\r\n
/// Accept: application/sdp\r\n
/// \r\n
/// ```
///
/// Uses a builder pattern — chain [`add_header`](Self::add_header) and
/// [`with_body`](Self::with_body), then call [`serialize`](Self::serialize).
/// `Content-Length` is computed automatically when a body is present.
///
/// Prefer the per-method constructors in
/// [`messages`](crate::protocol::messages), which add the headers each RTSP
/// method requires and validate required fields.
#[must_use]
#[derive(Debug, Clone)]
pub struct RtspRequest {
    /// RTSP method (OPTIONS, DESCRIBE, SETUP, PLAY, etc.).
    pub method: Method,
    /// Request-URI (e.g. `rtsp://host:port/stream/track1`). Passed through
    /// verbatim; this layer does not validate URLs.
    pub uri: String,
    /// Headers as ordered (name, value) pairs. Names are stored as-given;
    /// lookups via [`header`](Self::header) are case-insensitive.
    pub headers: Vec<(String, String)>,
    /// Message body (e.g. an SDP description for ANNOUNCE).
    pub body: Option<String>,
}

impl RtspRequest {
    pub fn new(method: Method, uri: &str) -> Self {
        RtspRequest {
            method,
            uri: uri.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn add_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// Look up a header value by name (case-insensitive, per RFC 2326 §4.2).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the CSeq header value, which numbers and orders RTSP
    /// request/response pairs (RFC 2326 §12.17).
    pub fn cseq(&self) -> Option<&str> {
        self.header("CSeq")
    }

    /// Serialize to the RTSP text wire format.
    ///
    /// The header block is always terminated by a blank line, and when a
    /// body is present `Content-Length` is appended automatically
    /// (RFC 2326 §12.14).
    pub fn serialize(&self) -> String {
        let mut message = format!("{} {} {}\r\n", self.method, self.uri, RTSP_VERSION);

        for (name, value) in &self.headers {
            message.push_str(&format!("{}: {}\r\n", name, value));
        }

        if let Some(body) = &self.body {
            message.push_str(&format!("Content-Length: {}\r\n", body.len()));
            message.push_str("\r\n");
            message.push_str(body);
        } else {
            message.push_str("\r\n");
        }
        message
    }
}
