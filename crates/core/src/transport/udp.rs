use std::net::{SocketAddr, UdpSocket};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::error::Result;

/// Receive buffer sized for the largest practical UDP datagram.
const RECV_BUFFER_SIZE: usize = 64 * 1024;

/// Poll interval for the stop flag while no datagrams arrive.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// UDP receiver for the inbound RTP data plane.
///
/// Binds the client port agreed in the SETUP `Transport` header
/// (`client_port=<rtp>-<rtcp>`) and reads datagrams until stopped. The
/// receiver knows nothing about the control exchange beyond that port
/// value.
///
/// Cloning shares the underlying socket and stop flag, so one handle can
/// run the receive loop on a worker thread while another calls
/// [`stop`](Self::stop).
#[derive(Clone)]
pub struct UdpReceiver {
    socket: Arc<UdpSocket>,
    running: Arc<AtomicBool>,
    local_addr: SocketAddr,
}

impl UdpReceiver {
    /// Bind `0.0.0.0:<port>`. Port 0 binds an ephemeral port.
    pub fn bind(port: u16) -> Result<Self> {
        let socket = UdpSocket::bind(("0.0.0.0", port))?;
        socket.set_read_timeout(Some(POLL_INTERVAL))?;
        let local_addr = socket.local_addr()?;
        tracing::debug!(%local_addr, "data receiver bound");

        Ok(Self {
            socket: Arc::new(socket),
            running: Arc::new(AtomicBool::new(false)),
            local_addr,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Read one datagram into `buf`; `Ok(None)` when the poll interval
    /// elapses with nothing to read.
    pub fn recv(&self, buf: &mut [u8]) -> Result<Option<(usize, SocketAddr)>> {
        match self.socket.recv_from(buf) {
            Ok((len, from)) => Ok(Some((len, from))),
            Err(e)
                if e.kind() == std::io::ErrorKind::WouldBlock
                    || e.kind() == std::io::ErrorKind::TimedOut =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Receive datagrams until [`stop`](Self::stop) is called, invoking
    /// `on_packet` for each. Checks the stop flag between reads at the
    /// poll interval so another thread can terminate the loop promptly.
    pub fn run<F: FnMut(&[u8], SocketAddr)>(&self, mut on_packet: F) -> Result<()> {
        self.running.store(true, Ordering::SeqCst);
        let mut buf = vec![0u8; RECV_BUFFER_SIZE];

        while self.running.load(Ordering::SeqCst) {
            if let Some((len, from)) = self.recv(&mut buf)? {
                tracing::trace!(bytes = len, %from, "RTP datagram");
                on_packet(&buf[..len], from);
            }
        }

        tracing::debug!(local_addr = %self.local_addr, "receive loop exited");
        Ok(())
    }

    /// Signal the receive loop to exit. Safe to call from any thread.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}
