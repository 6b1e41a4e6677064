//! Image loading
//!
//! Records reference images either inline (base64 `data:` URLs, the way the
//! registry stores uploads) or as files. Loading is async so callers can plug
//! in remote sources; decoding happens once per source.

use std::path::PathBuf;
use std::sync::Arc;

use printpdf::{RawImage, RawImageData, RawImageFormat};

use crate::error::ImageError;
use crate::model::{decode_data_url, ImageSource};

/// A decoded raster ready for embedding
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedImage {
    /// Natural width in pixels
    pub width: u32,
    /// Natural height in pixels
    pub height: u32,
    /// Packed RGB8 pixels, row-major
    pub rgb: Vec<u8>,
}

impl LoadedImage {
    /// Decode PNG or JPEG bytes
    pub fn decode(bytes: &[u8]) -> Result<Self, ImageError> {
        let decoded = image::load_from_memory(bytes)?;
        if decoded.width() == 0 || decoded.height() == 0 {
            return Err(ImageError::EmptyImage);
        }

        let rgb = decoded.to_rgb8();
        Ok(Self {
            width: rgb.width(),
            height: rgb.height(),
            rgb: rgb.into_raw(),
        })
    }

    pub fn to_raw_image(&self) -> RawImage {
        RawImage {
            pixels: RawImageData::U8(self.rgb.clone()),
            width: self.width as usize,
            height: self.height as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        }
    }
}

/// Resolves an image reference to decoded pixels.
///
/// Layout awaits every load in the order images appear; a failed load is
/// the layout's cue to draw a placeholder instead.
#[allow(async_fn_in_trait)]
pub trait ImageLoader {
    async fn load(&self, source: &ImageSource) -> Result<Arc<LoadedImage>, ImageError>;
}

impl<L: ImageLoader> ImageLoader for &L {
    async fn load(&self, source: &ImageSource) -> Result<Arc<LoadedImage>, ImageError> {
        (**self).load(source).await
    }
}

/// Loads data URLs inline and file paths relative to `base_dir`
#[derive(Debug, Clone)]
pub struct SourceLoader {
    base_dir: PathBuf,
}

impl SourceLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl Default for SourceLoader {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ImageLoader for SourceLoader {
    async fn load(&self, source: &ImageSource) -> Result<Arc<LoadedImage>, ImageError> {
        let bytes = match source {
            ImageSource::DataUrl(url) => decode_data_url(url)?,
            ImageSource::Path(relative) => {
                // absolute paths replace the base
                let path = self.base_dir.join(relative);
                tokio::fs::read(&path)
                    .await
                    .map_err(|source| ImageError::Io { path, source })?
            }
        };

        log::debug!("Decoding {} ({} bytes)", source, bytes.len());
        Ok(Arc::new(LoadedImage::decode(&bytes)?))
    }
}
