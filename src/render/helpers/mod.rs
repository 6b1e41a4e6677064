//! Helper utilities for PDF rendering

pub mod colors;
pub mod compress;
pub mod fonts;
pub mod image_fit;
pub mod layer;
pub mod text_metrics;
pub mod wrap;

pub use colors::RgbColor;
pub use compress::compress_pdf;
pub use fonts::{Align, Slant, TextStyle, Weight};
pub use image_fit::{fit_within, FittedSize};
pub use layer::LayerBuilder;
pub use text_metrics::{
    get_builtin_measurer, get_helvetica_bold_measurer, get_helvetica_measurer,
    BuiltinFontMeasurer,
};
pub use wrap::{wrap_measured, wrap_text, WrapLines};
