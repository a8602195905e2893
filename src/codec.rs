//! Asset payload codec: gzip, then standard base64.
//!
//! The generated Go code carries its own decoder for this exact scheme, so
//! changing anything here means changing `render/templates/code.go.tmpl` too.

use std::io::{self, Read, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use sha2::{Digest, Sha256};

/// Failure to turn a payload back into bytes.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid gzip stream: {0}")]
    Gzip(#[from] io::Error),
}

/// Compresses and base64-encodes `data`.
///
/// Incompressible input grows a little; that is fine.
///
/// # Examples
///
/// ```
/// let payload = blobgen::codec::encode(b"hello").unwrap();
/// assert_eq!(blobgen::codec::decode(&payload).unwrap(), b"hello");
/// ```
pub fn encode(data: &[u8]) -> io::Result<String> {
    let mut gz = GzEncoder::new(Vec::new(), Compression::default());
    gz.write_all(data)?;
    let compressed = gz.finish()?;
    Ok(STANDARD.encode(compressed))
}

/// Reverses [`encode`].
pub fn decode(payload: &str) -> Result<Vec<u8>, CodecError> {
    let compressed = STANDARD.decode(payload)?;
    let mut data = Vec::new();
    GzDecoder::new(compressed.as_slice()).read_to_end(&mut data)?;
    Ok(data)
}

/// Lowercase hex SHA-256 of `data`.
pub fn checksum(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
