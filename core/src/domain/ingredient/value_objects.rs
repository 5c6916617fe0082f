use std::sync::LazyLock;

use base64::{Engine as _, engine::general_purpose};
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::domain::common::entities::app_errors::CoreError;

static DATA_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^data:(?P<mime>[a-zA-Z0-9.+/-]+)?(?:;[a-zA-Z0-9=-]+)*;base64,(?P<data>.*)$")
        .expect("data URI pattern is valid")
});

/// Largest decoded image accepted, in bytes.
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

/// Image payload as supplied by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Raw file bytes, e.g. a multipart upload.
    Bytes(Vec<u8>),
    /// `data:image/...;base64,...` URI as produced by a browser camera capture.
    DataUri(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct AnalyzeImageInput {
    pub image: ImageSource,
}

impl ImageSource {
    /// Uploads may carry either the file itself or a data URI sent as text.
    pub fn from_upload(data: Vec<u8>) -> Self {
        if data.starts_with(b"data:") {
            match String::from_utf8(data) {
                Ok(uri) => ImageSource::DataUri(uri.trim().to_string()),
                Err(e) => ImageSource::Bytes(e.into_bytes()),
            }
        } else {
            ImageSource::Bytes(data)
        }
    }

    pub fn decode(&self) -> Result<DecodedImage, CoreError> {
        let bytes = match self {
            ImageSource::Bytes(bytes) => bytes.clone(),
            ImageSource::DataUri(uri) => decode_data_uri(uri)?,
        };

        if bytes.is_empty() {
            return Err(CoreError::ExtractionFailed("image is empty".to_string()));
        }

        // Data URIs are measured after decoding, so their base64 overhead is not counted
        if bytes.len() > MAX_IMAGE_SIZE {
            return Err(CoreError::InvalidInput(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        let mime_type = sniff_mime_type(&bytes).ok_or_else(|| {
            CoreError::ExtractionFailed("unsupported or corrupt image data".to_string())
        })?;

        Ok(DecodedImage {
            mime_type: mime_type.to_string(),
            bytes,
        })
    }
}

impl DecodedImage {
    pub fn sha256(&self) -> String {
        hex::encode(Sha256::digest(&self.bytes))
    }
}

fn decode_data_uri(uri: &str) -> Result<Vec<u8>, CoreError> {
    let captures = DATA_URI
        .captures(uri)
        .ok_or_else(|| CoreError::ExtractionFailed("malformed image data URI".to_string()))?;

    if let Some(mime) = captures.name("mime") {
        if !mime.as_str().starts_with("image/") {
            return Err(CoreError::ExtractionFailed(format!(
                "data URI does not contain an image: {}",
                mime.as_str()
            )));
        }
    }

    let payload: String = captures["data"]
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| CoreError::ExtractionFailed(format!("invalid base64 image payload: {}", e)))
}

fn sniff_mime_type(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some("image/png"),
        [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => Some("image/gif"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        _ => None,
    }
}
