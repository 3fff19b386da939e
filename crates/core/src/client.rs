use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::error::{Result, RtspError};
use crate::protocol::messages::{
    DescribeParams, GetParameterParams, OptionsParams, PlayParams, SetupParams, TeardownParams,
};
use crate::protocol::request::RtspRequest;
use crate::protocol::USER_AGENT;
use crate::transport::tcp::ControlChannel;

/// Client-level configuration applied to every control exchange.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// `User-Agent` header appended to outgoing requests; `None` disables it.
    pub user_agent: Option<String>,
    /// TCP connect timeout for the control connection.
    pub connect_timeout: Duration,
    /// Read timeout while waiting for a response.
    pub read_timeout: Duration,
    /// Write timeout while sending a request.
    pub write_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: Some(USER_AGENT.to_string()),
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(5),
            write_timeout: Duration::from_secs(5),
        }
    }
}

/// Per-session request state: the CSeq counter and the session identifier.
#[derive(Debug)]
struct RequestState {
    next_sequence: u32,
    session: Option<String>,
}

/// High-level RTSP client orchestrator.
///
/// Owns the TCP control channel and the request state a session accumulates:
/// the CSeq counter, incremented once per sent request (RFC 2326 §12.17),
/// and the server-assigned session identifier echoed back in `Session`
/// headers (RFC 2326 §12.37). Message construction is delegated to
/// [`RtspRequest`]'s per-method constructors, which stay pure and stateless.
///
/// Responses are returned as raw text, verbatim: interpreting status lines,
/// headers, or SDP bodies is the caller's concern.
///
/// State lives behind `parking_lot` mutexes, so a keepalive or receiver
/// thread can share the client through an `Arc`.
pub struct RtspClient {
    control_addr: String,
    control: Mutex<Option<ControlChannel>>,
    state: Mutex<RequestState>,
    config: Arc<ClientConfig>,
}

impl RtspClient {
    pub fn new(control_addr: &str) -> Self {
        Self::with_config(control_addr, ClientConfig::default())
    }

    /// Create a client with custom timeouts / user agent.
    pub fn with_config(control_addr: &str, config: ClientConfig) -> Self {
        Self {
            control_addr: control_addr.to_string(),
            control: Mutex::new(None),
            state: Mutex::new(RequestState {
                next_sequence: 1,
                session: None,
            }),
            config: Arc::new(config),
        }
    }

    /// Establish the TCP control connection.
    pub fn connect(&self) -> Result<()> {
        let mut control = self.control.lock();
        if control.is_some() {
            return Err(RtspError::AlreadyConnected);
        }
        let channel = ControlChannel::connect(&self.control_addr, &self.config)?;
        tracing::info!(addr = %self.control_addr, "control connection established");
        *control = Some(channel);
        Ok(())
    }

    /// Drop the control connection. Safe to call when not connected.
    pub fn disconnect(&self) {
        if self.control.lock().take().is_some() {
            tracing::info!(addr = %self.control_addr, "control connection closed");
        }
    }

    pub fn is_connected(&self) -> bool {
        self.control.lock().is_some()
    }

    /// Record the server-assigned session identifier to echo in
    /// session-scoped requests. The client never allocates or validates
    /// identifiers; they come from the SETUP response.
    pub fn set_session(&self, id: &str) {
        tracing::debug!(session = id, "session recorded");
        self.state.lock().session = Some(id.to_string());
    }

    pub fn session(&self) -> Option<String> {
        self.state.lock().session.clone()
    }

    pub fn clear_session(&self) {
        self.state.lock().session = None;
    }

    fn next_sequence(&self) -> u32 {
        let mut state = self.state.lock();
        let sequence = state.next_sequence;
        state.next_sequence += 1;
        sequence
    }

    fn require_session(&self) -> Result<String> {
        self.state.lock().session.clone().ok_or(RtspError::NoSession)
    }

    /// Send an already-built request and return the raw response text.
    ///
    /// Appends the configured `User-Agent` header. The response is not
    /// interpreted.
    pub fn send(&self, request: RtspRequest) -> Result<String> {
        let request = match &self.config.user_agent {
            Some(agent) => request.add_header("User-Agent", agent),
            None => request,
        };

        let mut control = self.control.lock();
        let channel = control.as_mut().ok_or(RtspError::NotConnected)?;

        tracing::debug!(
            method = %request.method,
            uri = %request.uri,
            cseq = request.cseq().unwrap_or("-"),
            "request"
        );
        let response = channel.exchange(&request.serialize())?;
        tracing::debug!(bytes = response.len(), "response");

        Ok(response)
    }

    /// OPTIONS with the next CSeq.
    pub fn options(&self, uri: &str) -> Result<String> {
        let sequence = Some(self.next_sequence());
        self.send(RtspRequest::options(uri, OptionsParams { sequence })?)
    }

    /// DESCRIBE with the next CSeq and the default SDP accept type.
    pub fn describe(&self, uri: &str) -> Result<String> {
        let sequence = Some(self.next_sequence());
        self.send(RtspRequest::describe(
            uri,
            DescribeParams {
                sequence,
                ..Default::default()
            },
        )?)
    }

    /// SETUP offering the given client RTP port (RTCP on `port + 1`).
    ///
    /// The session identifier in the server's response must be applied via
    /// [`set_session`](Self::set_session) before session-scoped calls.
    pub fn setup(&self, track: &str, port: u16) -> Result<String> {
        let sequence = Some(self.next_sequence());
        self.send(RtspRequest::setup(
            track,
            SetupParams {
                sequence,
                port: Some(port),
                ..Default::default()
            },
        )?)
    }

    /// PLAY from the start of the range, within the recorded session.
    pub fn play(&self, uri: &str) -> Result<String> {
        let session = self.require_session()?;
        let sequence = Some(self.next_sequence());
        self.send(RtspRequest::play(
            uri,
            &session,
            PlayParams {
                sequence,
                ..Default::default()
            },
        )?)
    }

    /// PAUSE within the recorded session.
    pub fn pause(&self, uri: &str) -> Result<String> {
        let session = self.require_session()?;
        let sequence = self.next_sequence();
        self.send(RtspRequest::pause(uri, &session, sequence)?)
    }

    /// TEARDOWN the recorded session and forget it.
    pub fn teardown(&self, uri: &str) -> Result<String> {
        let session = self.require_session()?;
        let sequence = Some(self.next_sequence());
        let response = self.send(RtspRequest::teardown(
            uri,
            &session,
            TeardownParams { sequence },
        )?)?;
        self.clear_session();
        Ok(response)
    }

    /// GET_PARAMETER with an empty body — the conventional session
    /// keepalive (RFC 2326 §10.8).
    pub fn keepalive(&self, uri: &str) -> Result<String> {
        let session = self.require_session()?;
        tracing::trace!(session = %session, "GET_PARAMETER keepalive");
        let sequence = Some(self.next_sequence());
        self.send(RtspRequest::get_parameter(
            uri,
            &session,
            GetParameterParams {
                sequence,
                ..Default::default()
            },
        )?)
    }
}
