//! Serialize a laid-out [`Document`] to PDF bytes with printpdf

use printpdf::{Mm, PaintMode, PdfDocument, PdfPage, PdfSaveOptions, Pt, XObjectId, XObjectTransform};

use crate::config::Settings;
use crate::error::RenderError;

use super::document::{Document, Element, FilledRect, PlacedImage, TextRun};
use super::helpers::compress::compress_pdf;
use super::helpers::layer::LayerBuilder;

/// Resolution images are embedded at; placement scales from this size
const IMAGE_DPI: f32 = 300.0;

const MM_TO_PT: f32 = 2.834_645_7;

/// Document writer
pub struct PdfWriter<'a> {
    settings: &'a Settings,
}

impl<'a> PdfWriter<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Emit the document, compressing streams unless disabled
    pub fn write(&self, document: &Document) -> Result<Vec<u8>, RenderError> {
        if document.pages.is_empty() {
            return Err(RenderError::EmptyDocument);
        }

        let mut doc = PdfDocument::new(&document.title);

        let xobjects: Vec<XObjectId> = document
            .images()
            .iter()
            .map(|image| doc.add_image(&image.to_raw_image()))
            .collect();

        let mut pages = Vec::with_capacity(document.pages.len());
        for page in &document.pages {
            let mut layer = LayerBuilder::new();
            for element in &page.elements {
                match element {
                    Element::Text(run) => self.draw_text(&mut layer, run),
                    Element::Rect(rect) => self.draw_rect(&mut layer, rect),
                    Element::Image(placed) => {
                        self.draw_image(&mut layer, placed, document, &xobjects)?
                    }
                }
            }
            pages.push(PdfPage::new(
                Mm(self.settings.page_width),
                Mm(self.settings.page_height),
                layer.into_ops(),
            ));
        }

        doc.with_pages(pages);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::debug!("printpdf reported {} warnings", warnings.len());
        }

        if !self.settings.compress {
            return Ok(bytes);
        }

        match compress_pdf(&bytes) {
            Ok(compressed) => Ok(compressed),
            Err(e) => {
                log::warn!("{}; writing uncompressed output", e);
                Ok(bytes)
            }
        }
    }

    /// Convert a top-down y in mm to PDF's bottom-up coordinate
    fn flip(&self, y: f32) -> f32 {
        self.settings.page_height - y
    }

    fn draw_text(&self, layer: &mut LayerBuilder, run: &TextRun) {
        let x = run.style.left_edge(&run.text, run.x);
        layer.set_fill_color(run.style.color.to_pdf());
        layer.use_text_builtin(
            run.text.as_str(),
            run.style.size,
            Mm(x),
            Mm(self.flip(run.y)),
            run.style.builtin_font(),
        );
    }

    fn draw_rect(&self, layer: &mut LayerBuilder, rect: &FilledRect) {
        layer.set_fill_color(rect.color.to_pdf());
        layer.add_rect(
            Mm(rect.x),
            Mm(self.flip(rect.bottom())),
            Mm(rect.x + rect.width),
            Mm(self.flip(rect.y)),
            PaintMode::Fill,
        );
    }

    fn draw_image(
        &self,
        layer: &mut LayerBuilder,
        placed: &PlacedImage,
        document: &Document,
        xobjects: &[XObjectId],
    ) -> Result<(), RenderError> {
        let missing = || {
            RenderError::PdfGeneration(format!("unknown image handle {}", placed.handle.index()))
        };
        let image = document.image(placed.handle).ok_or_else(missing)?;
        let id = xobjects.get(placed.handle.index()).ok_or_else(missing)?;

        // Natural size at IMAGE_DPI, in mm
        let natural_width = image.width as f32 * 25.4 / IMAGE_DPI;
        let natural_height = image.height as f32 * 25.4 / IMAGE_DPI;

        let transform = XObjectTransform {
            translate_x: Some(Pt(placed.x * MM_TO_PT)),
            translate_y: Some(Pt(self.flip(placed.y + placed.height) * MM_TO_PT)),
            scale_x: Some(placed.width / natural_width),
            scale_y: Some(placed.height / natural_height),
            rotate: None,
            dpi: Some(IMAGE_DPI),
        };
        layer.use_xobject(id.clone(), transform);
        Ok(())
    }
}
