//! In-memory document model
//!
//! Layout writes into this model first; only `writer` knows about PDF.
//! Coordinates are millimetres from the top-left corner of the page, with
//! text positioned at its baseline.

use std::sync::Arc;

use super::helpers::colors::RgbColor;
use super::helpers::fonts::TextStyle;
use super::images::LoadedImage;

/// Index of an image registered with a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(usize);

impl ImageHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    /// Baseline
    pub y: f32,
    pub style: TextStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: RgbColor,
}

impl FilledRect {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedImage {
    pub handle: ImageHandle,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(TextRun),
    Rect(FilledRect),
    Image(PlacedImage),
}

/// One page, painted in element order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub elements: Vec<Element>,
}

impl Page {
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text(run) => Some(run),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &FilledRect> {
        self.elements.iter().filter_map(|e| match e {
            Element::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &PlacedImage> {
        self.elements.iter().filter_map(|e| match e {
            Element::Image(image) => Some(image),
            _ => None,
        })
    }

    /// Whether any text run on the page equals `text`
    pub fn has_text(&self, text: &str) -> bool {
        self.texts().any(|run| run.text == text)
    }
}

/// A laid-out document: pages plus the images they reference
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub title: String,
    pub pages: Vec<Page>,
    images: Vec<Arc<LoadedImage>>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pages: Vec::new(),
            images: Vec::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Append an empty page and return its index
    pub fn add_page(&mut self) -> usize {
        self.pages.push(Page::default());
        self.pages.len() - 1
    }

    /// Register an image for embedding.
    ///
    /// The same `Arc` registered twice yields the same handle, so a logo
    /// stamped on every page is embedded once.
    pub fn add_image(&mut self, image: Arc<LoadedImage>) -> ImageHandle {
        if let Some(index) = self.images.iter().position(|i| Arc::ptr_eq(i, &image)) {
            return ImageHandle(index);
        }
        self.images.push(image);
        ImageHandle(self.images.len() - 1)
    }

    pub fn image(&self, handle: ImageHandle) -> Option<&Arc<LoadedImage>> {
        self.images.get(handle.0)
    }

    pub fn images(&self) -> &[Arc<LoadedImage>] {
        &self.images
    }

    /// All text runs in page order
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.pages.iter().flat_map(|page| page.texts())
    }

    /// Index of the first page carrying `text`
    pub fn find_page_with(&self, text: &str) -> Option<usize> {
        self.pages.iter().position(|page| page.has_text(text))
    }
}
