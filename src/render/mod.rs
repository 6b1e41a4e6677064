//! PDF rendering modules

pub mod components;
pub mod document;
pub mod helpers;
pub mod images;
pub mod layouts;
pub mod page;
pub mod writer;

// Re-export commonly used items for convenience
pub use document::{Document, Element, Page};
pub use helpers::{get_helvetica_measurer, BuiltinFontMeasurer, LayerBuilder, TextStyle};
pub use images::{ImageLoader, LoadedImage, SourceLoader};
pub use layouts::{CatalogRenderer, FactSheetRenderer};
pub use page::{LayoutCursor, PageManager};
pub use writer::PdfWriter;
