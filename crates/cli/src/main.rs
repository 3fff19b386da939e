use std::thread;
use std::time::Duration;

use clap::Parser;
use rtsp_client::transport::UdpReceiver;
use rtsp_client::{Result, RtspClient};

/// Default RTSP control port (RFC 2326 §9.2).
const DEFAULT_RTSP_PORT: u16 = 554;

#[derive(Parser)]
#[command(
    name = "rtsp-client",
    about = "Command-line RTSP client: play a stream and receive RTP data"
)]
struct Args {
    /// RTSP URL (rtsp://host[:port]/path)
    url: String,

    /// Local RTP port offered in SETUP (RTCP uses the next port up)
    #[arg(long, short, default_value_t = 9000)]
    port: u16,

    /// Track path appended to the URL for SETUP
    #[arg(long, default_value = "track1")]
    track: String,

    /// Seconds to receive RTP data before tearing down
    #[arg(long, short, default_value_t = 5)]
    duration: u64,
}

/// Derive `host:port` for the control connection from an rtsp:// URL.
fn control_addr(url: &str) -> Option<String> {
    let after_scheme = url
        .strip_prefix("rtsp://")
        .or_else(|| url.strip_prefix("rtsps://"))?;
    let host_port = after_scheme.split('/').next()?;
    if host_port.is_empty() {
        return None;
    }
    if host_port.contains(':') {
        Some(host_port.to_string())
    } else {
        Some(format!("{}:{}", host_port, DEFAULT_RTSP_PORT))
    }
}

/// Scrape the session identifier out of raw SETUP response text.
/// Strips the timeout suffix: `4231;timeout=60` → `4231`.
fn extract_session(response: &str) -> Option<String> {
    response
        .lines()
        .find(|line| line.to_ascii_lowercase().starts_with("session:"))
        .and_then(|line| line.split(':').nth(1))
        .map(|value| value.trim().split(';').next().unwrap_or("").to_string())
        .filter(|id| !id.is_empty())
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let Some(addr) = control_addr(&args.url) else {
        eprintln!("not an rtsp:// URL: {}", args.url);
        std::process::exit(1);
    };

    if let Err(e) = run(&args, &addr) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args, addr: &str) -> Result<()> {
    let client = RtspClient::new(addr);
    client.connect()?;

    println!("{}", client.options(&args.url)?);
    println!("{}", client.describe(&args.url)?);

    let track_uri = format!("{}/{}", args.url.trim_end_matches('/'), args.track);
    let setup = client.setup(&track_uri, args.port)?;
    println!("{}", setup);

    match extract_session(&setup) {
        Some(session) => client.set_session(&session),
        None => {
            eprintln!("no Session header in SETUP response");
            client.disconnect();
            return Ok(());
        }
    }

    println!("{}", client.play(&args.url)?);

    let receiver = UdpReceiver::bind(args.port)?;
    let handle = {
        let receiver = receiver.clone();
        thread::spawn(move || {
            receiver.run(|packet, from| {
                tracing::info!(bytes = packet.len(), %from, "RTP datagram");
            })
        })
    };

    thread::sleep(Duration::from_secs(args.duration));
    receiver.stop();
    if let Ok(result) = handle.join() {
        result?;
    }

    println!("{}", client.teardown(&args.url)?);
    client.disconnect();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_addr_with_port() {
        assert_eq!(
            control_addr("rtsp://10.0.0.1:8554/stream"),
            Some("10.0.0.1:8554".to_string())
        );
    }

    #[test]
    fn control_addr_default_port() {
        assert_eq!(
            control_addr("rtsp://camera.local/stream"),
            Some("camera.local:554".to_string())
        );
    }

    #[test]
    fn control_addr_rejects_other_schemes() {
        assert_eq!(control_addr("http://host/stream"), None);
        assert_eq!(control_addr("rtsp://"), None);
    }

    #[test]
    fn extract_session_strips_timeout() {
        let response = "RTSP/1.0 200 OK\r\nCSeq: 3\r\nSession: 4231;timeout=60\r\n\r\n";
        assert_eq!(extract_session(response), Some("4231".to_string()));
    }

    #[test]
    fn extract_session_absent() {
        assert_eq!(extract_session("RTSP/1.0 200 OK\r\nCSeq: 1\r\n\r\n"), None);
    }
}
