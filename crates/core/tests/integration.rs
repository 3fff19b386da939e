//! Integration test: full client handshake OPTIONS → DESCRIBE → SETUP →
//! PLAY → TEARDOWN against a scripted RTSP server on a local TCP listener.
//!
//! The mock server echoes each request's CSeq and records the raw request
//! text so the test can verify what actually went over the wire.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;

use rtsp_client::RtspClient;

fn read_request(reader: &mut BufReader<TcpStream>) -> Option<String> {
    let mut request = String::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).ok()? == 0 {
            return None;
        }
        request.push_str(&line);
        if line == "\r\n" || line == "\n" {
            break;
        }
    }
    Some(request)
}

fn cseq_of(request: &str) -> String {
    request
        .lines()
        .find(|line| line.to_ascii_lowercase().starts_with("cseq:"))
        .and_then(|line| line.split(':').nth(1))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Accept one connection and answer scripted responses until TEARDOWN.
/// Every received request is forwarded on the channel.
fn spawn_mock_server() -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
    let addr = listener.local_addr().unwrap().to_string();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let mut writer = stream;

        while let Some(request) = read_request(&mut reader) {
            let method = request
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string();
            let cseq = cseq_of(&request);

            let response = match method.as_str() {
                "OPTIONS" => format!(
                    "RTSP/1.0 200 OK\r\nCSeq: {}\r\n\
                     Public: OPTIONS, DESCRIBE, SETUP, PLAY, PAUSE, TEARDOWN\r\n\r\n",
                    cseq
                ),
                "DESCRIBE" => {
                    let body = "v=0\r\no=- 0 0 IN IP4 127.0.0.1\r\ns=Mock\r\n";
                    format!(
                        "RTSP/1.0 200 OK\r\nCSeq: {}\r\n\
                         Content-Type: application/sdp\r\nContent-Length: {}\r\n\r\n{}",
                        cseq,
                        body.len(),
                        body
                    )
                }
                "SETUP" => format!(
                    "RTSP/1.0 200 OK\r\nCSeq: {}\r\nSession: 4231;timeout=60\r\n\
                     Transport: RTP/AVP;unicast;client_port=9000-9001;server_port=5000-5001\r\n\r\n",
                    cseq
                ),
                _ => format!("RTSP/1.0 200 OK\r\nCSeq: {}\r\nSession: 4231\r\n\r\n", cseq),
            };

            writer.write_all(response.as_bytes()).expect("write response");
            let done = method == "TEARDOWN";
            tx.send(request).expect("record request");
            if done {
                break;
            }
        }
    });

    (addr, rx)
}

#[test]
fn full_handshake_against_mock_server() {
    let (addr, requests) = spawn_mock_server();

    let client = RtspClient::new(&addr);
    client.connect().expect("connect");

    let uri = format!("rtsp://{}/stream", addr);
    let track = format!("{}/track1", uri);

    let options = client.options(&uri).expect("OPTIONS");
    assert!(
        options.starts_with("RTSP/1.0 200 OK"),
        "OPTIONS: unexpected response: {}",
        options.lines().next().unwrap_or("")
    );
    assert!(options.contains("Public:"), "OPTIONS: missing Public header");

    let describe = client.describe(&uri).expect("DESCRIBE");
    assert!(
        describe.contains("Content-Type: application/sdp"),
        "DESCRIBE: missing Content-Type"
    );
    assert!(describe.contains("v=0"), "DESCRIBE: SDP body not read");

    let setup = client.setup(&track, 9000).expect("SETUP");
    let session = setup
        .lines()
        .find(|line| line.to_ascii_lowercase().starts_with("session:"))
        .and_then(|line| line.split(':').nth(1))
        .map(|value| value.trim().split(';').next().unwrap_or("").to_string())
        .expect("SETUP: missing Session header");
    assert_eq!(session, "4231");
    client.set_session(&session);

    let play = client.play(&uri).expect("PLAY");
    assert!(play.starts_with("RTSP/1.0 200 OK"));

    client.teardown(&uri).expect("TEARDOWN");
    assert_eq!(client.session(), None, "session forgotten after TEARDOWN");
    client.disconnect();

    let sent: Vec<String> = requests.iter().collect();
    assert_eq!(sent.len(), 5, "expected five requests on the wire");

    assert!(sent[0].starts_with(&format!("OPTIONS {} RTSP/1.0\r\n", uri)));
    assert!(sent[0].contains("CSeq: 1\r\n"));
    assert!(sent[0].contains("User-Agent: rtsp-client-rs/0.1\r\n"));

    assert!(sent[1].starts_with(&format!("DESCRIBE {} RTSP/1.0\r\n", uri)));
    assert!(sent[1].contains("CSeq: 2\r\n"));
    assert!(sent[1].contains("Accept: application/sdp\r\n"));

    assert!(sent[2].starts_with(&format!("SETUP {} RTSP/1.0\r\n", track)));
    assert!(sent[2].contains("CSeq: 3\r\n"));
    assert!(sent[2].contains("client_port=9000-9001"));

    assert!(sent[3].starts_with(&format!("PLAY {} RTSP/1.0\r\n", uri)));
    assert!(sent[3].contains("CSeq: 4\r\n"));
    assert!(sent[3].contains("Session: 4231\r\n"));
    assert!(sent[3].contains("Range: npt=0.000-\r\n"));

    assert!(sent[4].starts_with(&format!("TEARDOWN {} RTSP/1.0\r\n", uri)));
    assert!(sent[4].contains("CSeq: 5\r\n"));
    assert!(sent[4].contains("Session: 4231\r\n"));

    for request in &sent {
        assert!(
            request.ends_with("\r\n\r\n"),
            "header block not terminated: {:?}",
            request
        );
    }
}
