use std::fmt;
use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::ImageError;

/// Reference to one stored image.
///
/// The registry stores images either inline as `data:` URLs or as paths
/// on disk. Resolving either kind to bytes is the loader's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageSource {
    DataUrl(String),
    Path(PathBuf),
}

impl ImageSource {
    pub fn is_data_url(&self) -> bool {
        matches!(self, ImageSource::DataUrl(_))
    }
}

impl From<String> for ImageSource {
    fn from(value: String) -> Self {
        if value.trim_start().starts_with("data:") {
            ImageSource::DataUrl(value)
        } else {
            ImageSource::Path(PathBuf::from(value))
        }
    }
}

impl From<&str> for ImageSource {
    fn from(value: &str) -> Self {
        ImageSource::from(value.to_string())
    }
}

impl From<ImageSource> for String {
    fn from(value: ImageSource) -> Self {
        match value {
            ImageSource::DataUrl(url) => url,
            ImageSource::Path(path) => path.to_string_lossy().into_owned(),
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::DataUrl(url) => write!(f, "data URL ({} bytes)", url.len()),
            ImageSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Decode the payload of a base64 `data:` URL
///
/// Only base64 payloads are accepted; that is the only form the registry
/// writes (`data:image/jpeg;base64,...`).
pub fn decode_data_url(url: &str) -> Result<Vec<u8>, ImageError> {
    let rest = url
        .trim()
        .strip_prefix("data:")
        .ok_or_else(|| ImageError::DataUrl("missing `data:` scheme".to_string()))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| ImageError::DataUrl("missing `,` separator".to_string()))?;

    if !header.ends_with(";base64") {
        return Err(ImageError::DataUrl(format!(
            "unsupported encoding `{}`",
            header
        )));
    }

    // Line breaks sometimes survive copy/paste into exported JSON
    let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(STANDARD.decode(cleaned)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_detection() {
        assert!(ImageSource::from("data:image/png;base64,AAAA").is_data_url());
        assert_eq!(
            ImageSource::from("images/boldo.jpg"),
            ImageSource::Path(PathBuf::from("images/boldo.jpg"))
        );
    }

    #[test]
    fn test_decode_data_url() {
        let bytes = decode_data_url("data:text/plain;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_decode_data_url_rejects_plain_encoding() {
        let err = decode_data_url("data:text/plain,hello").unwrap_err();
        assert!(matches!(err, ImageError::DataUrl(_)));
    }

    #[test]
    fn test_decode_data_url_rejects_bad_payload() {
        let err = decode_data_url("data:image/png;base64,@@@").unwrap_err();
        assert!(matches!(err, ImageError::Base64(_)));
    }
}
