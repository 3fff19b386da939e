use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};

use crate::client::ClientConfig;
use crate::error::{Result, RtspError};

/// TCP control channel carrying RTSP request/response text.
///
/// The stream is split into a buffered reader and a writer via `try_clone`
/// so response lines can be read incrementally while requests are written
/// whole.
pub struct ControlChannel {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
    peer_addr: SocketAddr,
}

impl ControlChannel {
    /// Connect to the server's control port with the configured timeouts.
    pub fn connect(addr: &str, config: &ClientConfig) -> Result<Self> {
        let socket_addr = addr
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| RtspError::InvalidAddress(addr.to_string()))?;

        let stream = TcpStream::connect_timeout(&socket_addr, config.connect_timeout)?;
        stream.set_read_timeout(Some(config.read_timeout))?;
        stream.set_write_timeout(Some(config.write_timeout))?;

        let reader_stream = stream.try_clone()?;
        let peer_addr = stream.peer_addr()?;
        tracing::debug!(%peer_addr, "control channel connected");

        Ok(Self {
            reader: BufReader::new(reader_stream),
            writer: stream,
            peer_addr,
        })
    }

    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    /// Write a complete request message and read back one response.
    ///
    /// Reads the status line and headers up to the blank line, then a body
    /// of `Content-Length` bytes when that header is present. The text is
    /// returned verbatim — interpreting it is the caller's concern.
    pub fn exchange(&mut self, message: &str) -> Result<String> {
        self.writer.write_all(message.as_bytes())?;
        self.writer.flush()?;

        let mut response = String::new();
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(RtspError::ConnectionClosed);
            }
            response.push_str(&line);
            if line == "\r\n" || line == "\n" {
                break;
            }
        }

        if let Some(length) = content_length(&response) {
            if length > 0 {
                let mut body = vec![0u8; length];
                self.reader.read_exact(&mut body)?;
                response.push_str(&String::from_utf8_lossy(&body));
            }
        }

        Ok(response)
    }
}

/// Scrape `Content-Length` out of raw response text (case-insensitive).
/// Framing only — nothing else in the response is interpreted.
fn content_length(response: &str) -> Option<usize> {
    response
        .lines()
        .find(|line| line.to_ascii_lowercase().starts_with("content-length:"))
        .and_then(|line| line.split(':').nth(1))
        .and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_length_scrape() {
        let response = "RTSP/1.0 200 OK\r\nCSeq: 2\r\nContent-Length: 142\r\n\r\n";
        assert_eq!(content_length(response), Some(142));
    }

    #[test]
    fn content_length_case_insensitive() {
        let response = "RTSP/1.0 200 OK\r\ncontent-length: 7\r\n\r\n";
        assert_eq!(content_length(response), Some(7));
    }

    #[test]
    fn content_length_absent() {
        assert_eq!(content_length("RTSP/1.0 200 OK\r\nCSeq: 1\r\n\r\n"), None);
    }
}
