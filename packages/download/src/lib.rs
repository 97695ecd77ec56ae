//! Single-file HTTP downloads.
//!
//! A download is one blocking HTTP GET whose body is streamed to a local
//! file. Redirects follow the client's default policy and the whole request
//! is bounded by a caller-supplied timeout. There are no retries.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//!
//! let url = url::Url::parse("https://example.com/archive.tar.gz")?;
//! let bytes = cabinet_download::download(&url, Path::new("/tmp/archive.tar.gz"), Duration::from_secs(30))?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;

pub use error::DownloadError;
pub use url::Url;

use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;
use std::time::Duration;

const BUFFER_SIZE: usize = 64 * 1024;

/// Download `url` into `destination`, which must name the resulting file.
///
/// The body is streamed into a temporary file next to `destination`, synced,
/// and renamed into place once the whole body has arrived. An error status
/// or a failed transfer leaves `destination` untouched. Returns the number
/// of bytes written.
///
/// # Errors
///
/// * If the request fails or exceeds `timeout`
/// * If the server responds with an error status
/// * If the connection fails while the body is being read
/// * If the destination cannot be created or written
pub fn download(url: &Url, destination: &Path, timeout: Duration) -> Result<u64, DownloadError> {
    log::debug!(
        "Downloading {url} -> {} (timeout {timeout:?})",
        destination.display()
    );

    let agent = ureq::AgentBuilder::new().timeout(timeout).build();

    let response = agent.get(url.as_str()).call().map_err(|e| match e {
        ureq::Error::Status(status, _) => DownloadError::Status {
            url: url.to_string(),
            status,
        },
        ureq::Error::Transport(transport) => DownloadError::RequestError {
            url: url.to_string(),
            source: Box::new(transport),
        },
    })?;

    log::trace!("Response status {}", response.status());

    let write_error = |e: io::Error| DownloadError::WriteError {
        path: destination.to_path_buf(),
        source: e,
    };

    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = tempfile::Builder::new()
        .prefix(".cabinet-")
        .tempfile_in(parent)
        .map_err(write_error)?;

    let mut reader = response.into_reader();
    let mut buffer = vec![0u8; BUFFER_SIZE];
    let mut bytes = 0u64;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(DownloadError::BodyError {
                    url: url.to_string(),
                    source: e,
                });
            }
        };
        staged.write_all(&buffer[..read]).map_err(write_error)?;
        bytes += read as u64;
    }

    staged.as_file().sync_all().map_err(write_error)?;
    staged
        .persist(destination)
        .map_err(|e| write_error(e.error))?;

    log::debug!("Downloaded {bytes} bytes to {}", destination.display());

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader};
    use std::net::TcpListener;
    use std::thread;
    use tempfile::TempDir;

    /// Accept one connection per canned response and answer them in order.
    fn serve(responses: Vec<String>) -> (Url, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let handle = thread::spawn(move || {
            for response in responses {
                let (mut stream, _) = listener.accept().unwrap();
                read_request(&stream);
                stream.write_all(response.as_bytes()).unwrap();
                stream.flush().unwrap();
            }
        });

        let url = Url::parse(&format!("http://127.0.0.1:{port}/file.txt")).unwrap();
        (url, handle)
    }

    fn serve_once(response: String) -> (Url, thread::JoinHandle<()>) {
        serve(vec![response])
    }

    fn read_request(stream: &std::net::TcpStream) {
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        loop {
            line.clear();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line.is_empty() {
                break;
            }
        }
    }

    fn ok_response(body: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    fn entry_count(dir: &Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_download_writes_body() {
        let dir = TempDir::new().unwrap();
        let destination = dir.path().join("file.txt");
        let (url, server) = serve_once(ok_response("downloaded content"));

        let bytes = download(&url, &destination, Duration::from_secs(10)).unwrap();
        server.join().unwrap();

        assert_eq!(bytes, 18);
        assert_eq!(
            std::fs::read_to_string(&destination).unwrap(),
            "downloaded content"
        );
        assert_eq!(entry_count(dir.path()), 1);
    }

    #[test]
    fn test_download_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let destination = dir.path().join("file.txt");
        std::fs::write(&destination, "stale and longer").unwrap();
        let (url, server) = serve_once(ok_response("fresh"));

        download(&url, &destination, Duration::from_secs(10)).unwrap();
        server.join().unwrap();

        assert_eq!(std::fs::read_to_string(&destination).unwrap(), "fresh");
    }

    #[test]
    fn test_download_follows_redirect() {
        let dir = TempDir::new().unwrap();
        let destination = dir.path().join("file.txt");
        let (url, server) = serve(vec![
            "HTTP/1.1 302 Found\r\nLocation: /b\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                .to_string(),
            ok_response("ok"),
        ]);

        let result = download(&url, &destination, Duration::from_secs(10));
        server.join().unwrap();

        assert_eq!(result.unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&destination).unwrap(), "ok");
    }

    #[test]
    fn test_download_timeout() {
        let dir = TempDir::new().unwrap();
        let destination = dir.path().join("file.txt");
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        // Accept the request and never answer it.
        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            read_request(&stream);
            thread::sleep(Duration::from_secs(5));
            drop(stream);
        });

        let url = Url::parse(&format!("http://127.0.0.1:{port}/slow")).unwrap();
        let started = std::time::Instant::now();
        let result = download(&url, &destination, Duration::from_secs(1));

        assert!(matches!(result, Err(DownloadError::RequestError { .. })));
        assert!(started.elapsed() < Duration::from_secs(4));
        assert!(!destination.exists());
    }

    #[test]
    fn test_download_truncated_body() {
        let dir = TempDir::new().unwrap();
        let destination = dir.path().join("file.txt");
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\nshort"
                .to_string(),
        );

        let result = download(&url, &destination, Duration::from_secs(10));
        server.join().unwrap();

        assert!(matches!(result, Err(DownloadError::BodyError { .. })));
        assert!(!destination.exists());
        assert_eq!(entry_count(dir.path()), 0);
    }

    #[test]
    fn test_download_error_status() {
        let dir = TempDir::new().unwrap();
        let destination = dir.path().join("file.txt");
        let (url, server) = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                .to_string(),
        );

        let result = download(&url, &destination, Duration::from_secs(10));
        server.join().unwrap();

        assert!(matches!(
            result,
            Err(DownloadError::Status { status: 404, .. })
        ));
        assert!(!destination.exists());
    }

    #[test]
    fn test_download_connection_refused() {
        let dir = TempDir::new().unwrap();
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap();

        let result = download(&url, &dir.path().join("file"), Duration::from_secs(5));

        let Err(error) = result else {
            panic!("expected a request error");
        };
        assert!(matches!(error, DownloadError::RequestError { .. }));
        assert!(std::error::Error::source(&error).is_some());
        assert_eq!(error.to_string().matches(url.as_str()).count(), 1);
    }

    #[test]
    fn test_download_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let destination = dir.path().join("missing/file.txt");
        let (url, server) = serve_once(ok_response("body"));

        let result = download(&url, &destination, Duration::from_secs(10));
        server.join().unwrap();

        assert!(matches!(result, Err(DownloadError::WriteError { .. })));
    }
}
