use crate::error::{Result, RtspError};

/// Client transport offer for the SETUP `Transport` header (RFC 2326 §12.39).
///
/// Describes the data-plane protocol, routing mode, and the client port
/// pair media should be delivered to.
///
/// ## Wire format examples
///
/// ```text
/// Transport: RTP/AVP;unicast;client_port=9000-9001
/// Transport: RTP/AVP;multicast;destination=224.2.0.1;client_port=5000-5001
/// ```
#[derive(Debug, Clone)]
pub struct TransportSpec {
    /// Transport specification (protocol/profile), e.g. `RTP/AVP`.
    pub protocol: String,
    /// Routing mode: `unicast` or `multicast`.
    pub routing: String,
    /// Destination address parameter; omitted from the header when `None`.
    pub destination: Option<String>,
    /// Client's RTP receive port.
    pub client_rtp_port: u16,
    /// Client's RTCP receive port (always `client_rtp_port + 1`).
    pub client_rtcp_port: u16,
}

impl TransportSpec {
    /// Build a spec from an RTP port; RTCP always takes the next port up.
    ///
    /// Fails with [`RtspError::InvalidOption`] when the RTCP port would
    /// overflow the u16 range.
    pub fn new(
        protocol: String,
        routing: String,
        destination: Option<String>,
        client_rtp_port: u16,
    ) -> Result<Self> {
        let client_rtcp_port =
            client_rtp_port
                .checked_add(1)
                .ok_or_else(|| RtspError::InvalidOption {
                    method: "SETUP",
                    option: "port",
                    reason: format!("RTP port {} has no RTCP pair", client_rtp_port),
                })?;

        if client_rtp_port % 2 != 0 {
            tracing::warn!(
                port = client_rtp_port,
                "RTP port is odd; RFC 3550 §11 expects an even RTP port"
            );
        }

        Ok(TransportSpec {
            protocol,
            routing,
            destination,
            client_rtp_port,
            client_rtcp_port,
        })
    }

    /// Format the `Transport` header value.
    pub fn header_value(&self) -> String {
        let mut value = format!("{};{}", self.protocol, self.routing);
        if let Some(destination) = &self.destination {
            value.push_str(&format!(";destination={}", destination));
        }
        value.push_str(&format!(
            ";client_port={}-{}",
            self.client_rtp_port, self.client_rtcp_port
        ));
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(port: u16) -> TransportSpec {
        TransportSpec::new("RTP/AVP".to_string(), "unicast".to_string(), None, port).unwrap()
    }

    #[test]
    fn header_value_unicast() {
        assert_eq!(spec(9000).header_value(), "RTP/AVP;unicast;client_port=9000-9001");
    }

    #[test]
    fn header_value_with_destination() {
        let spec = TransportSpec::new(
            "RTP/AVP".to_string(),
            "multicast".to_string(),
            Some("224.2.0.1".to_string()),
            5000,
        )
        .unwrap();
        assert_eq!(
            spec.header_value(),
            "RTP/AVP;multicast;destination=224.2.0.1;client_port=5000-5001"
        );
    }

    #[test]
    fn rtcp_port_pairs_with_rtp() {
        assert_eq!(spec(5000).client_rtcp_port, 5001);
        assert_eq!(spec(0).client_rtcp_port, 1);
    }

    #[test]
    fn max_port_has_no_pair() {
        let err = TransportSpec::new(
            "RTP/AVP".to_string(),
            "unicast".to_string(),
            None,
            u16::MAX,
        )
        .unwrap_err();
        assert!(matches!(err, RtspError::InvalidOption { option: "port", .. }));
    }
}
