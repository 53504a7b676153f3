//! Shared test utilities: a one-shot local HTTP server.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Content type sent by the quote server for its event stream.
pub const EVENT_STREAM: &str = "text/event-stream; charset=utf-8";

/// Serves exactly one request on a random local port and returns the base
/// URL (`http://127.0.0.1:PORT`).
///
/// The response carries no `Content-Length`; the body is written chunk by
/// chunk and ended by closing the connection.
pub async fn serve_once(status: &'static str, content_type: &'static str, chunks: Vec<String>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no address");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept failed");

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("read failed");
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let head = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nCache-Control: no-cache\r\nConnection: close\r\n\r\n"
        );
        socket.write_all(head.as_bytes()).await.expect("write failed");

        for chunk in chunks {
            socket.write_all(chunk.as_bytes()).await.expect("write failed");
            socket.flush().await.expect("flush failed");
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let _ = socket.shutdown().await;
    });

    format!("http://{addr}")
}

/// HTTP client that never goes through a proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("failed to build HTTP client")
}

/// One `message` event carrying `payload`.
pub fn message(payload: &str) -> String {
    format!("data: {payload}\n\n")
}
