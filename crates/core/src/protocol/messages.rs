//! Per-method RTSP request constructors (RFC 2326 §10).
//!
//! Each RTSP method gets its own constructor rather than a shared template:
//! the methods differ in which headers are required and which options they
//! recognize, and correctness depends on exact header names and CRLF line
//! endings, so direct construction is both simpler and safer.
//!
//! Required inputs are positional parameters; the options a method
//! recognizes live in one struct per method with `Option<T>` fields and
//! documented defaults. Unsupplied required strings fail fast with
//! [`RtspError::MissingRequiredField`] instead of interpolating empty text.
//!
//! Constructors are pure: no I/O, no shared state, no sequence tracking.
//! The caller owns the CSeq counter across a session
//! ([`RtspClient`](crate::RtspClient) does this); when absent the sequence
//! defaults to 1.

use chrono::Utc;

use crate::error::{Result, RtspError};
use crate::protocol::method::Method;
use crate::protocol::request::RtspRequest;
use crate::protocol::transport::TransportSpec;
use crate::protocol::{
    APPLICATION_SDP, DEFAULT_CLIENT_RTP_PORT, DEFAULT_NPT, DEFAULT_ROUTING, DEFAULT_SEQUENCE,
    DEFAULT_TRANSPORT,
};

/// Options recognized by [`RtspRequest::options`].
#[derive(Debug, Clone, Default)]
pub struct OptionsParams {
    /// CSeq value; defaults to 1.
    pub sequence: Option<u32>,
}

/// Options recognized by [`RtspRequest::describe`].
#[derive(Debug, Clone, Default)]
pub struct DescribeParams {
    /// CSeq value; defaults to 1.
    pub sequence: Option<u32>,
    /// `Accept` header value; defaults to `application/sdp`.
    pub accept: Option<String>,
}

/// Options recognized by [`RtspRequest::announce`].
#[derive(Debug, Clone, Default)]
pub struct AnnounceParams {
    /// CSeq value; defaults to 1.
    pub sequence: Option<u32>,
    /// `Content-Type` for the posted description; defaults to
    /// `application/sdp`.
    pub content_type: Option<String>,
    /// `Date` header value; defaults to the current UTC time in RFC 1123
    /// form. Supply a fixed value for byte-reproducible output.
    pub date: Option<String>,
    /// Session description carried as the message body. `Content-Length`
    /// is derived from it.
    pub sdp: Option<String>,
}

/// Options recognized by [`RtspRequest::setup`].
#[derive(Debug, Clone, Default)]
pub struct SetupParams {
    /// CSeq value; defaults to 1.
    pub sequence: Option<u32>,
    /// Transport specification; defaults to `RTP/AVP`.
    pub transport: Option<String>,
    /// Client RTP port; RTCP is always `port + 1`. Defaults to 9000.
    pub port: Option<u16>,
    /// Routing mode; defaults to `unicast`.
    pub routing: Option<String>,
    /// Destination address parameter; omitted when `None`.
    pub destination: Option<String>,
}

/// Options recognized by [`RtspRequest::play`].
#[derive(Debug, Clone, Default)]
pub struct PlayParams {
    /// CSeq value; defaults to 1.
    pub sequence: Option<u32>,
    /// Normal Play Time range; defaults to `0.000-` (from the start).
    pub npt: Option<String>,
}

/// Options recognized by [`RtspRequest::teardown`].
#[derive(Debug, Clone, Default)]
pub struct TeardownParams {
    /// CSeq value; defaults to 1.
    pub sequence: Option<u32>,
}

/// Options recognized by [`RtspRequest::get_parameter`].
#[derive(Debug, Clone, Default)]
pub struct GetParameterParams {
    /// CSeq value; defaults to 1.
    pub sequence: Option<u32>,
    /// `Content-Type` describing the body. No default; required when a
    /// body is supplied.
    pub content_type: Option<String>,
    /// Parameter query carried as the message body.
    pub body: Option<String>,
}

/// Options recognized by [`RtspRequest::set_parameter`].
#[derive(Debug, Clone, Default)]
pub struct SetParameterParams {
    /// CSeq value; defaults to 1.
    pub sequence: Option<u32>,
    /// `Session` header; emitted only when supplied. SET_PARAMETER may
    /// target server-level parameters outside any session.
    pub session: Option<String>,
    /// `Content-Type` describing the body. No default; required when a
    /// body is supplied.
    pub content_type: Option<String>,
    /// Parameter assignment carried as the message body.
    pub body: Option<String>,
}

/// Options recognized by [`RtspRequest::record`].
#[derive(Debug, Clone, Default)]
pub struct RecordParams {
    /// CSeq value; defaults to 1.
    pub sequence: Option<u32>,
    /// `Conference` header value; emitted only when supplied.
    pub conference: Option<String>,
}

impl RtspRequest {
    /// OPTIONS — capability discovery (RFC 2326 §10.1).
    ///
    /// The minimal RTSP request: request line, CSeq, blank line.
    pub fn options(uri: &str, params: OptionsParams) -> Result<Self> {
        require(Method::Options, "uri", uri)?;
        Ok(Self::new(Method::Options, uri).add_header("CSeq", &cseq(params.sequence)))
    }

    /// DESCRIBE — retrieve the media description (RFC 2326 §10.2).
    pub fn describe(uri: &str, params: DescribeParams) -> Result<Self> {
        require(Method::Describe, "uri", uri)?;
        Ok(Self::new(Method::Describe, uri)
            .add_header("CSeq", &cseq(params.sequence))
            .add_header("Accept", params.accept.as_deref().unwrap_or(APPLICATION_SDP)))
    }

    /// ANNOUNCE — post a session description to the server (RFC 2326 §10.3).
    ///
    /// `session` is required and never defaulted.
    pub fn announce(uri: &str, session: &str, params: AnnounceParams) -> Result<Self> {
        require(Method::Announce, "uri", uri)?;
        require(Method::Announce, "session", session)?;

        let date = params.date.unwrap_or_else(http_date);
        let content_type = params
            .content_type
            .unwrap_or_else(|| APPLICATION_SDP.to_string());

        let mut request = Self::new(Method::Announce, uri)
            .add_header("CSeq", &cseq(params.sequence))
            .add_header("Date", &date)
            .add_header("Session", session)
            .add_header("Content-Type", &content_type);
        if let Some(sdp) = params.sdp {
            request = request.with_body(sdp);
        }
        Ok(request)
    }

    /// SETUP — negotiate the data-plane transport for a track
    /// (RFC 2326 §10.4).
    ///
    /// Offers `client_port=<port>-<port + 1>`: RTP on the given port, RTCP
    /// on the next one up.
    pub fn setup(track: &str, params: SetupParams) -> Result<Self> {
        require(Method::Setup, "track", track)?;

        let spec = TransportSpec::new(
            params
                .transport
                .unwrap_or_else(|| DEFAULT_TRANSPORT.to_string()),
            params.routing.unwrap_or_else(|| DEFAULT_ROUTING.to_string()),
            params.destination,
            params.port.unwrap_or(DEFAULT_CLIENT_RTP_PORT),
        )?;

        Ok(Self::new(Method::Setup, track)
            .add_header("CSeq", &cseq(params.sequence))
            .add_header("Transport", &spec.header_value()))
    }

    /// PLAY — start media delivery within a session (RFC 2326 §10.5).
    pub fn play(uri: &str, session: &str, params: PlayParams) -> Result<Self> {
        require(Method::Play, "uri", uri)?;
        require(Method::Play, "session", session)?;

        let npt = params.npt.as_deref().unwrap_or(DEFAULT_NPT);
        Ok(Self::new(Method::Play, uri)
            .add_header("CSeq", &cseq(params.sequence))
            .add_header("Session", session)
            .add_header("Range", &format!("npt={}", npt)))
    }

    /// PAUSE — suspend media delivery (RFC 2326 §10.6).
    ///
    /// Unlike the other methods the sequence is a required input, not a
    /// defaulted option.
    pub fn pause(uri: &str, session: &str, sequence: u32) -> Result<Self> {
        require(Method::Pause, "uri", uri)?;
        require(Method::Pause, "session", session)?;

        Ok(Self::new(Method::Pause, uri)
            .add_header("CSeq", &sequence.to_string())
            .add_header("Session", session))
    }

    /// TEARDOWN — destroy the session (RFC 2326 §10.7).
    pub fn teardown(uri: &str, session: &str, params: TeardownParams) -> Result<Self> {
        require(Method::Teardown, "uri", uri)?;
        require(Method::Teardown, "session", session)?;

        Ok(Self::new(Method::Teardown, uri)
            .add_header("CSeq", &cseq(params.sequence))
            .add_header("Session", session))
    }

    /// GET_PARAMETER — query a parameter, or keepalive with an empty body
    /// (RFC 2326 §10.8).
    pub fn get_parameter(uri: &str, session: &str, params: GetParameterParams) -> Result<Self> {
        require(Method::GetParameter, "uri", uri)?;
        require(Method::GetParameter, "session", session)?;

        let request = Self::new(Method::GetParameter, uri)
            .add_header("CSeq", &cseq(params.sequence))
            .add_header("Session", session);
        with_parameter_body(request, params.content_type, params.body)
    }

    /// SET_PARAMETER — set a device or stream parameter (RFC 2326 §10.9).
    pub fn set_parameter(uri: &str, params: SetParameterParams) -> Result<Self> {
        require(Method::SetParameter, "uri", uri)?;

        let mut request =
            Self::new(Method::SetParameter, uri).add_header("CSeq", &cseq(params.sequence));
        if let Some(session) = &params.session {
            request = request.add_header("Session", session);
        }
        with_parameter_body(request, params.content_type, params.body)
    }

    /// RECORD — start recording the media stream (RFC 2326 §10.11).
    pub fn record(uri: &str, session: &str, params: RecordParams) -> Result<Self> {
        require(Method::Record, "uri", uri)?;
        require(Method::Record, "session", session)?;

        let mut request = Self::new(Method::Record, uri)
            .add_header("CSeq", &cseq(params.sequence))
            .add_header("Session", session);
        if let Some(conference) = &params.conference {
            request = request.add_header("Conference", conference);
        }
        Ok(request)
    }
}

fn cseq(sequence: Option<u32>) -> String {
    sequence.unwrap_or(DEFAULT_SEQUENCE).to_string()
}

fn require(method: Method, field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RtspError::MissingRequiredField {
            method: method.as_str(),
            field,
        });
    }
    Ok(())
}

/// Attach an optional parameter body. A body without a content type to
/// describe it is rejected; a content type without a body is allowed.
fn with_parameter_body(
    request: RtspRequest,
    content_type: Option<String>,
    body: Option<String>,
) -> Result<RtspRequest> {
    match (content_type, body) {
        (Some(content_type), Some(body)) => Ok(request
            .add_header("Content-Type", &content_type)
            .with_body(body)),
        (Some(content_type), None) => Ok(request.add_header("Content-Type", &content_type)),
        (None, Some(_)) => Err(RtspError::MissingContentType),
        (None, None) => Ok(request),
    }
}

/// Current UTC time in the RFC 1123 form used by the `Date` header.
fn http_date() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
