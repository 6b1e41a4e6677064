//! Page lifecycle: headers, page breaks and the footer pass

use std::sync::Arc;

use crate::config::Settings;

use super::document::{Document, Element, FilledRect, ImageHandle, PlacedImage, TextRun};
use super::helpers::colors::{RgbColor, FOOTER_GRAY, PRIMARY, WHITE};
use super::helpers::fonts::TextStyle;
use super::helpers::image_fit::fit_within;
use super::helpers::wrap::wrap_text;
use super::images::LoadedImage;

/// Header logo box (top-left corner and size)
const LOGO_X: f32 = 10.0;
const LOGO_Y: f32 = 2.0;
const LOGO_WIDTH: f32 = 25.0;
const LOGO_HEIGHT: f32 = 15.0;

/// Header title wrap width in characters
const HEADER_TITLE_WRAP: usize = 35;
const HEADER_TITLE_X_WITH_LOGO: f32 = 40.0;
const HEADER_TITLE_FIRST_BASELINE: f32 = 8.0;
const HEADER_TITLE_LINE_HEIGHT: f32 = 6.0;

/// Page-number stamp in the header
const HEADER_PAGE_X: f32 = 180.0;
const HEADER_PAGE_Y: f32 = 13.0;

/// Write position while laying out a document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    /// Next baseline / top edge, mm from the top of the page
    pub y: f32,
    /// 1-based number of the page being written (0 before the first page)
    pub page: usize,
}

impl LayoutCursor {
    pub fn new() -> Self {
        Self { y: 0.0, page: 0 }
    }
}

impl Default for LayoutCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the document being built and draws onto its current page.
///
/// Content pages get the header band when opened; footers are stamped on
/// every page by [`PageManager::finish`] once the page count is known.
pub struct PageManager<'a> {
    settings: &'a Settings,
    document: Document,
    header_title: String,
    logo: Option<ImageHandle>,
}

impl<'a> PageManager<'a> {
    pub fn new(settings: &'a Settings, header_title: impl Into<String>) -> Self {
        let header_title = header_title.into();
        Self {
            settings,
            document: Document::new(header_title.clone()),
            header_title,
            logo: None,
        }
    }

    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    /// Stamp this logo on every header opened from now on
    pub fn set_logo(&mut self, logo: Arc<LoadedImage>) {
        self.logo = Some(self.document.add_image(logo));
    }

    pub fn logo(&self) -> Option<ImageHandle> {
        self.logo
    }

    pub fn register_image(&mut self, image: Arc<LoadedImage>) -> ImageHandle {
        self.document.add_image(image)
    }

    pub fn image(&self, handle: ImageHandle) -> Option<&Arc<LoadedImage>> {
        self.document.image(handle)
    }

    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    /// Start a content page: draws the header and moves the cursor to the body start
    pub fn open_page(&mut self, cursor: &mut LayoutCursor) {
        self.document.add_page();
        cursor.page = self.document.page_count();
        cursor.y = self.draw_header(cursor.page);
        log::debug!("Opened page {}", cursor.page);
    }

    /// Start a page without header (the catalog cover)
    pub fn open_bare_page(&mut self, cursor: &mut LayoutCursor) {
        self.document.add_page();
        cursor.page = self.document.page_count();
        cursor.y = 0.0;
    }

    /// Move to a fresh page if the cursor is past `threshold`.
    ///
    /// Returns whether a page break happened.
    pub fn advance_if_needed(&mut self, cursor: &mut LayoutCursor, threshold: f32) -> bool {
        self.ensure_room(cursor, 0.0, threshold)
    }

    /// Move to a fresh page if content `extent` mm tall starting at the
    /// cursor would pass `threshold`.
    ///
    /// Never breaks at the top of a page, so oversized content is drawn
    /// instead of looping on empty pages.
    pub fn ensure_room(&mut self, cursor: &mut LayoutCursor, extent: f32, threshold: f32) -> bool {
        if cursor.page == 0 {
            self.open_page(cursor);
            return true;
        }
        if cursor.y + extent > threshold && cursor.y > self.settings.body_start_y {
            self.open_page(cursor);
            return true;
        }
        false
    }

    pub fn text(&mut self, text: impl Into<String>, x: f32, y: f32, style: TextStyle) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.push(Element::Text(TextRun { text, x, y, style }));
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: RgbColor) {
        self.push(Element::Rect(FilledRect {
            x,
            y,
            width,
            height,
            color,
        }));
    }

    pub fn place_image(&mut self, handle: ImageHandle, x: f32, y: f32, width: f32, height: f32) {
        self.push(Element::Image(PlacedImage {
            handle,
            x,
            y,
            width,
            height,
        }));
    }

    /// Stamp `Página i de N` on every page and hand over the document
    pub fn finish(mut self) -> Document {
        let total = self.document.page_count();
        let style = TextStyle::regular(self.settings.footer_font_size)
            .color(FOOTER_GRAY)
            .centered();
        let labels = &self.settings.labels;

        for (index, page) in self.document.pages.iter_mut().enumerate() {
            page.push(Element::Text(TextRun {
                text: format!("{} {} {} {}", labels.page, index + 1, labels.page_of, total),
                x: self.settings.center_x(),
                y: self.settings.footer_y,
                style,
            }));
        }

        log::debug!("Stamped footers on {} pages", total);
        self.document
    }

    fn push(&mut self, element: Element) {
        if self.document.pages.is_empty() {
            self.document.add_page();
        }
        if let Some(page) = self.document.pages.last_mut() {
            page.push(element);
        }
    }

    /// Draw the header band on the current page and return the body start y
    fn draw_header(&mut self, page_number: usize) -> f32 {
        let band_height = self.settings.header_band_height;
        self.fill_rect(0.0, 0.0, self.settings.page_width, band_height, PRIMARY);

        if let Some(handle) = self.logo {
            let fit = self.document.image(handle).map(|logo| {
                fit_within(
                    logo.width as f32,
                    logo.height as f32,
                    LOGO_WIDTH,
                    LOGO_HEIGHT,
                )
            });
            if let Some(fit) = fit {
                let x = LOGO_X + (LOGO_WIDTH - fit.width) / 2.0;
                let y = LOGO_Y + (LOGO_HEIGHT - fit.height) / 2.0;
                self.place_image(handle, x, y, fit.width, fit.height);
            }
        }

        let title_x = if self.logo.is_some() {
            HEADER_TITLE_X_WITH_LOGO
        } else {
            self.settings.margin_left
        };
        let title_style = TextStyle::regular(self.settings.header_font_size)
            .bold()
            .color(WHITE);
        let title = self.header_title.clone();
        for (i, line) in wrap_text(&title, HEADER_TITLE_WRAP).enumerate() {
            let y = HEADER_TITLE_FIRST_BASELINE + i as f32 * HEADER_TITLE_LINE_HEIGHT;
            self.text(line, title_x, y, title_style);
        }

        let page_label = format!("{} {}", self.settings.labels.page, page_number);
        self.text(
            page_label,
            HEADER_PAGE_X,
            HEADER_PAGE_Y,
            TextStyle::regular(self.settings.footer_font_size).color(WHITE),
        );

        self.settings.body_start_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logo() -> Arc<LoadedImage> {
        Arc::new(LoadedImage {
            width: 200,
            height: 100,
            rgb: vec![0; 200 * 100 * 3],
        })
    }

    #[test]
    fn test_open_page_draws_header() {
        let settings = Settings::default();
        let mut pages = PageManager::new(&settings, "Ficha de Planta Medicinal");
        let mut cursor = LayoutCursor::new();

        pages.open_page(&mut cursor);
        assert_eq!(cursor.page, 1);
        assert_eq!(cursor.y, 30.0);

        let doc = pages.finish();
        let page = &doc.pages[0];
        let band = page.rects().next().unwrap();
        assert_eq!((band.x, band.y, band.width, band.height), (0.0, 0.0, 210.0, 20.0));
        assert_eq!(band.color, PRIMARY);

        let title = page.texts().find(|t| t.text == "Ficha de Planta Medicinal").unwrap();
        assert_eq!((title.x, title.y), (20.0, 8.0));
        assert!(page.has_text("Página 1"));
        assert!(page.has_text("Página 1 de 1"));
    }

    #[test]
    fn test_header_with_logo_shifts_title() {
        let settings = Settings::default();
        let mut pages = PageManager::new(&settings, "Catálogo de Plantas Medicinais");
        pages.set_logo(logo());
        let mut cursor = LayoutCursor::new();
        pages.open_page(&mut cursor);
        pages.open_page(&mut cursor);

        let doc = pages.finish();
        assert_eq!(doc.images().len(), 1);
        for page in &doc.pages {
            let placed = page.images().next().unwrap();
            assert!(placed.width <= LOGO_WIDTH && placed.height <= LOGO_HEIGHT);
            let title = page.texts().find(|t| t.style.is_bold()).unwrap();
            assert_eq!(title.x, 40.0);
        }
    }

    #[test]
    fn test_long_header_title_wraps() {
        let settings = Settings::default();
        let mut pages = PageManager::new(&settings, "Catálogo de Plantas Anti-inflamatórias e Cicatrizantess");
        let mut cursor = LayoutCursor::new();
        pages.open_page(&mut cursor);
        let doc = pages.finish();

        let title_lines: Vec<f32> = doc.pages[0]
            .texts()
            .filter(|t| t.style.is_bold())
            .map(|t| t.y)
            .collect();
        assert_eq!(title_lines, vec![8.0, 14.0]);
    }

    #[test]
    fn test_advance_if_needed() {
        let settings = Settings::default();
        let mut pages = PageManager::new(&settings, "Teste");
        let mut cursor = LayoutCursor::new();
        pages.open_page(&mut cursor);

        cursor.y = 250.0;
        assert!(!pages.advance_if_needed(&mut cursor, 250.0));
        assert_eq!(cursor.page, 1);

        cursor.y = 250.5;
        assert!(pages.advance_if_needed(&mut cursor, 250.0));
        assert_eq!(cursor.page, 2);
        assert_eq!(cursor.y, 30.0);
    }

    #[test]
    fn test_ensure_room_never_breaks_at_page_top() {
        let settings = Settings::default();
        let mut pages = PageManager::new(&settings, "Teste");
        let mut cursor = LayoutCursor::new();
        pages.open_page(&mut cursor);

        assert!(!pages.ensure_room(&mut cursor, 500.0, 270.0));
        cursor.y = 200.0;
        assert!(pages.ensure_room(&mut cursor, 80.0, 270.0));
        assert_eq!(pages.page_count(), 2);
    }

    #[test]
    fn test_footers_count_all_pages() {
        let settings = Settings::default();
        let mut pages = PageManager::new(&settings, "Teste");
        let mut cursor = LayoutCursor::new();
        pages.open_bare_page(&mut cursor);
        pages.open_page(&mut cursor);
        pages.open_page(&mut cursor);

        let doc = pages.finish();
        for (i, page) in doc.pages.iter().enumerate() {
            let footer = page.texts().last().unwrap();
            assert_eq!(footer.text, format!("Página {} de 3", i + 1));
            assert_eq!((footer.x, footer.y), (105.0, 290.0));
            assert_eq!(footer.style.color, FOOTER_GRAY);
        }
        // the cover has no header
        assert!(!doc.pages[0].has_text("Página 1"));
    }
}
