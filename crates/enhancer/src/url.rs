use anyhow::{Error, anyhow};
use bytes::{Bytes, BytesMut};
use reqwest::get as reqwest_get;
use tokio::fs::read as tokio_fs_read;
use tokio_stream::StreamExt as _;
use url::Url;

/// Fetch the bytes behind a URL.
///
/// Supported URL schemes:
/// - `http`, `https`: fetched via `reqwest` as a streaming response
/// - `file`: read from the local filesystem
///
/// # Errors
///
/// - Returns `Err` if the URL scheme is unsupported
/// - Returns `Err` if the HTTP fetch fails or returns a non-success status
/// - Returns `Err` if the file path is invalid or the file cannot be read
pub async fn fetch_bytes(url: &Url) -> Result<Bytes, Error> {
    match url.scheme() {
        "http" | "https" => {
            let response = reqwest_get(url.clone())
                .await
                .map_err(|err| anyhow!("Failed to fetch URL {url}: {err}"))?;

            if !response.status().is_success() {
                return Err(anyhow!(
                    "Failed to fetch URL: {} (Status: {})",
                    url,
                    response.status()
                ));
            }
            let mut stream = response.bytes_stream();
            let mut buf = BytesMut::new();
            while let Some(chunk) = stream.next().await {
                let chunk = chunk.map_err(|err| anyhow!("Failed streaming {url}: {err}"))?;
                buf.extend_from_slice(&chunk);
            }
            Ok(buf.freeze())
        }
        "file" => {
            let path = url
                .to_file_path()
                .map_err(|()| anyhow!("Invalid file path for file url: {url}"))?;
            Ok(tokio_fs_read(path).await.map(Bytes::from)?)
        }
        _ => Err(anyhow!("Unsupported url scheme {}", url.scheme())),
    }
}
