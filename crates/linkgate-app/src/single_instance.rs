//! Hand-off of deep links to an already running instance.
//!
//! The running app listens on a loopback port and records it in a port
//! file. A later launch with a URL connects, sends one `open <url>` line,
//! and exits; the running app publishes the URL as a warm deep link.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use linkgate_common::events::{Event, EventBus};

/// A live instance answers at once; anything slower is a stale port.
const CONNECT_TIMEOUT: Duration = Duration::from_millis(500);

/// `<data_local_dir>/linkgate/instance.port`, when the platform has one.
pub fn default_port_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("linkgate").join("instance.port"))
}

/// Parse one control line. Only `open <url>` with a well-formed URL counts.
pub fn parse_command(line: &str) -> Option<String> {
    let url = line.trim().strip_prefix("open ")?;
    crate::cli::launch_url(Some(url.trim()))
}

/// Send `url` to the instance recorded in `port_file`.
///
/// Returns `false` when no instance is listening: the port file is
/// missing or unreadable, or nothing accepts on the recorded port.
pub async fn forward(port_file: &Path, url: &str) -> io::Result<bool> {
    let Some(port) = read_port(port_file) else {
        return Ok(false);
    };
    let mut stream = match tokio::time::timeout(
        CONNECT_TIMEOUT,
        TcpStream::connect(("127.0.0.1", port)),
    )
    .await
    {
        Ok(Ok(stream)) => stream,
        Ok(Err(e)) => {
            tracing::debug!(port, "instance connect: {}", e);
            return Ok(false);
        }
        Err(_) => {
            tracing::debug!(port, "instance connect timed out");
            return Ok(false);
        }
    };
    stream.write_all(format!("open {url}\n").as_bytes()).await?;
    stream.shutdown().await?;
    Ok(true)
}

/// Listen on a fresh loopback port and record it in `port_file`.
pub async fn bind(port_file: &Path) -> io::Result<TcpListener> {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
    let port = listener.local_addr()?.port();
    if let Some(dir) = port_file.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(port_file, port.to_string())?;
    tracing::info!(port, path = %port_file.display(), "Instance listener bound");
    Ok(listener)
}

/// Accept connections forever, publishing each `open` line as a deep link.
pub async fn serve(listener: TcpListener, bus: EventBus) {
    loop {
        match listener.accept().await {
            Ok((stream, _)) => {
                let bus = bus.clone();
                tokio::spawn(async move {
                    let mut lines = BufReader::new(stream).lines();
                    while let Ok(Some(line)) = lines.next_line().await {
                        match parse_command(&line) {
                            Some(url) => {
                                tracing::info!(url = %url, "Deep link from another instance");
                                bus.publish(Event::DeepLink(url));
                            }
                            None => tracing::debug!(line = %line, "instance: ignored line"),
                        }
                    }
                });
            }
            Err(e) => tracing::debug!("instance accept: {}", e),
        }
    }
}

/// Remove `port_file` if it still names `port`.
///
/// A newer instance may have taken the file over; leave it alone then.
pub fn release(port_file: &Path, port: u16) {
    if read_port(port_file) != Some(port) {
        return;
    }
    if let Err(e) = std::fs::remove_file(port_file) {
        tracing::warn!(path = %port_file.display(), "instance port file: {}", e);
    }
}

fn read_port(port_file: &Path) -> Option<u16> {
    std::fs::read_to_string(port_file).ok()?.trim().parse().ok()
}
