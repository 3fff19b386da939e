//! Error types for the RTSP client library.

/// Errors that can occur in the RTSP client library.
///
/// Variants map to specific failure modes across the stack:
///
/// - **Message construction**: [`MissingRequiredField`](Self::MissingRequiredField),
///   [`InvalidOption`](Self::InvalidOption),
///   [`MissingContentType`](Self::MissingContentType).
/// - **Control channel**: [`Io`](Self::Io),
///   [`NotConnected`](Self::NotConnected),
///   [`AlreadyConnected`](Self::AlreadyConnected),
///   [`ConnectionClosed`](Self::ConnectionClosed),
///   [`InvalidAddress`](Self::InvalidAddress).
/// - **Session state**: [`NoSession`](Self::NoSession).
#[derive(Debug, thiserror::Error)]
pub enum RtspError {
    /// Underlying I/O or socket error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value the method requires (e.g. session for ANNOUNCE) was empty.
    #[error("{method}: missing required field `{field}`")]
    MissingRequiredField {
        method: &'static str,
        field: &'static str,
    },

    /// An option value had the wrong shape (e.g. an unpairable RTP port).
    #[error("{method}: invalid `{option}` option: {reason}")]
    InvalidOption {
        method: &'static str,
        option: &'static str,
        reason: String,
    },

    /// A message body was supplied without a content type to describe it.
    #[error("message has a body but no Content-Type header")]
    MissingContentType,

    /// [`RtspClient::connect`](crate::RtspClient::connect) has not been called yet.
    #[error("control connection not established")]
    NotConnected,

    /// [`RtspClient::connect`](crate::RtspClient::connect) was called while connected.
    #[error("control connection already established")]
    AlreadyConnected,

    /// The server closed the control connection mid-exchange.
    #[error("control connection closed by server")]
    ConnectionClosed,

    /// A session-scoped request was attempted before a session ID was set.
    #[error("no session established")]
    NoSession,

    /// The control address could not be resolved to a socket address.
    #[error("invalid control address: {0}")]
    InvalidAddress(String),
}

/// Convenience alias for `Result<T, RtspError>`.
pub type Result<T> = std::result::Result<T, RtspError>;
