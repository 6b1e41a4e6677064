//! Image blocks: the fact sheet's captioned grid and the catalog's framed lead image
//!
//! Loads are awaited in source order. A source that fails to load is
//! replaced by a gray placeholder and layout continues.

use crate::config::Labels;
use crate::model::ImageSource;
use crate::render::helpers::colors::{
    FOOTER_GRAY, FRAME_GRAY, PANEL_GRAY, PRIMARY, TEXT_MUTED, WHITE,
};
use crate::render::helpers::fonts::TextStyle;
use crate::render::helpers::image_fit::{fit_within, FittedSize};
use crate::render::images::ImageLoader;
use crate::render::page::{LayoutCursor, PageManager};

const GRID_LEFT: f32 = 25.0;
const GRID_RIGHT: f32 = 190.0;
const CELL_WIDTH: f32 = 75.0;
const CELL_HEIGHT: f32 = 90.0;
const CELL_GAP: f32 = 10.0;
/// Vertical room under a row for its captions
const ROW_GAP: f32 = 15.0;
const CAPTION_DROP: f32 = 5.0;
const CAPTION_SIZE: f32 = 8.0;
const PLACEHOLDER_SIZE: f32 = 10.0;
const BAR_X: f32 = 20.0;
const BAR_WIDTH: f32 = 170.0;
const BAR_HEIGHT: f32 = 8.0;
const BAR_TITLE_SIZE: f32 = 14.0;
const BAR_ADVANCE: f32 = 15.0;
const GRID_GAP_AFTER: f32 = 25.0;

const FRAME_X: f32 = 20.0;
const FRAME_TOP_OFFSET: f32 = 5.0;
const FRAME_WIDTH: f32 = 90.0;
const FRAME_HEIGHT: f32 = 70.0;
const FRAMED_LEFT: f32 = 25.0;
const FRAMED_MAX_WIDTH: f32 = 80.0;
const FRAMED_MAX_HEIGHT: f32 = 60.0;
const FRAMED_CAPTION_SIZE: f32 = 10.0;
const FRAMED_ADVANCE: f32 = 75.0;

/// Where one grid image ended up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSlot {
    /// Position in the record's image list
    pub index: usize,
    /// 1-based page number
    pub page: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub placeholder: bool,
}

fn placeholder_style() -> TextStyle {
    TextStyle::regular(PLACEHOLDER_SIZE)
        .color(FOOTER_GRAY)
        .centered()
}

/// Fact sheet image grid
pub struct ImageGrid<'a> {
    labels: &'a Labels,
}

impl<'a> ImageGrid<'a> {
    pub fn new(labels: &'a Labels) -> Self {
        Self { labels }
    }

    /// Lay out every source left to right, wrapping rows and pages.
    ///
    /// Draws nothing for an empty source list.
    pub async fn render<L: ImageLoader>(
        &self,
        pages: &mut PageManager<'_>,
        cursor: &mut LayoutCursor,
        loader: &L,
        sources: &[ImageSource],
    ) -> Vec<ImageSlot> {
        if sources.is_empty() {
            return Vec::new();
        }
        let settings = pages.settings();

        pages.advance_if_needed(cursor, settings.sheet_images_break_y);
        pages.fill_rect(BAR_X, cursor.y, BAR_WIDTH, BAR_HEIGHT, PRIMARY);
        pages.text(
            self.labels.images.as_str(),
            GRID_LEFT,
            cursor.y + 6.0,
            TextStyle::regular(BAR_TITLE_SIZE).bold().color(WHITE),
        );
        cursor.y += BAR_ADVANCE;

        let mut slots = Vec::with_capacity(sources.len());
        let mut x = GRID_LEFT;
        let mut row_height: f32 = 0.0;

        for (index, source) in sources.iter().enumerate() {
            let loaded = match loader.load(source).await {
                Ok(image) => Some(image),
                Err(e) => {
                    log::warn!("Image {} ({}) unavailable: {}", index + 1, source, e);
                    None
                }
            };
            let size = match &loaded {
                Some(image) => fit_within(
                    image.width as f32,
                    image.height as f32,
                    CELL_WIDTH,
                    CELL_HEIGHT,
                ),
                None => FittedSize {
                    width: CELL_WIDTH,
                    height: CELL_HEIGHT,
                },
            };

            if x + size.width > GRID_RIGHT && x > GRID_LEFT {
                x = GRID_LEFT;
                cursor.y += row_height + ROW_GAP;
                row_height = 0.0;
            }
            if pages.ensure_room(cursor, size.height, settings.image_bottom_y) {
                x = GRID_LEFT;
                row_height = 0.0;
            }
            let top = cursor.y;
            let placeholder = loaded.is_none();

            match loaded {
                Some(image) => {
                    let handle = pages.register_image(image);
                    pages.place_image(handle, x, top, size.width, size.height);
                    pages.text(
                        format!("{} {}", self.labels.image_caption, index + 1),
                        x + size.width / 2.0,
                        top + size.height + CAPTION_DROP,
                        TextStyle::regular(CAPTION_SIZE)
                            .italic()
                            .color(TEXT_MUTED)
                            .centered(),
                    );
                }
                None => {
                    pages.fill_rect(x, top, size.width, size.height, PANEL_GRAY);
                    pages.text(
                        self.labels.image_unavailable.as_str(),
                        x + size.width / 2.0,
                        top + size.height / 2.0,
                        placeholder_style(),
                    );
                }
            }

            slots.push(ImageSlot {
                index,
                page: cursor.page,
                x,
                y: top,
                width: size.width,
                height: size.height,
                placeholder,
            });

            x += size.width + CELL_GAP;
            row_height = row_height.max(size.height);
        }

        cursor.y += row_height + GRID_GAP_AFTER;
        slots
    }
}

/// The catalog's single framed illustration
pub struct FramedImage<'a> {
    labels: &'a Labels,
}

impl<'a> FramedImage<'a> {
    pub fn new(labels: &'a Labels) -> Self {
        Self { labels }
    }

    /// Draw the frame with the fitted image, or the placeholder text when
    /// the source fails to load. Returns whether the image was drawn.
    pub async fn render<L: ImageLoader>(
        &self,
        pages: &mut PageManager<'_>,
        cursor: &mut LayoutCursor,
        loader: &L,
        source: &ImageSource,
    ) -> bool {
        let break_y = pages.settings().catalog_image_break_y;
        pages.advance_if_needed(cursor, break_y);

        let top = cursor.y;
        let center_x = FRAMED_LEFT + FRAMED_MAX_WIDTH / 2.0;
        pages.fill_rect(
            FRAME_X,
            top - FRAME_TOP_OFFSET,
            FRAME_WIDTH,
            FRAME_HEIGHT,
            FRAME_GRAY,
        );

        let drawn = match loader.load(source).await {
            Ok(image) => {
                let fit = fit_within(
                    image.width as f32,
                    image.height as f32,
                    FRAMED_MAX_WIDTH,
                    FRAMED_MAX_HEIGHT,
                );
                let x = FRAMED_LEFT + (FRAMED_MAX_WIDTH - fit.width) / 2.0;
                let y = top + (FRAMED_MAX_HEIGHT - fit.height) / 2.0;
                let handle = pages.register_image(image);
                pages.place_image(handle, x, y, fit.width, fit.height);
                pages.text(
                    self.labels.illustrative_image.as_str(),
                    center_x,
                    top + FRAMED_MAX_HEIGHT + CAPTION_DROP,
                    TextStyle::regular(FRAMED_CAPTION_SIZE)
                        .italic()
                        .color(TEXT_MUTED)
                        .centered(),
                );
                true
            }
            Err(e) => {
                log::warn!("Catalog image ({}) unavailable: {}", source, e);
                pages.text(
                    self.labels.image_unavailable.as_str(),
                    center_x,
                    top + FRAMED_MAX_HEIGHT / 2.0,
                    placeholder_style(),
                );
                false
            }
        };

        cursor.y += FRAMED_ADVANCE;
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::render::images::test_support::{png_data_url, GARBAGE_DATA_URL};
    use crate::render::images::SourceLoader;

    fn start(settings: &Settings) -> (PageManager<'_>, LayoutCursor) {
        let mut pages = PageManager::new(settings, "Ficha de Planta Medicinal");
        let mut cursor = LayoutCursor::new();
        pages.open_page(&mut cursor);
        (pages, cursor)
    }

    #[tokio::test]
    async fn test_empty_sources_draw_nothing() {
        let settings = Settings::default();
        let labels = Labels::default();
        let (mut pages, mut cursor) = start(&settings);
        let before = cursor;

        let slots = ImageGrid::new(&labels)
            .render(&mut pages, &mut cursor, &SourceLoader::default(), &[])
            .await;
        assert!(slots.is_empty());
        assert_eq!(cursor, before);
        assert!(!pages.finish().pages[0].has_text("Imagens"));
    }

    #[tokio::test]
    async fn test_grid_keeps_aspect_and_wraps_rows() {
        let settings = Settings::default();
        let labels = Labels::default();
        let (mut pages, mut cursor) = start(&settings);

        let sources: Vec<ImageSource> = vec![
            png_data_url(40, 20).into(),
            png_data_url(10, 30).into(),
            png_data_url(20, 20).into(),
        ];
        let slots = ImageGrid::new(&labels)
            .render(&mut pages, &mut cursor, &SourceLoader::default(), &sources)
            .await;

        assert_eq!(slots.len(), 3);
        // landscape 2:1 fills the width
        assert_eq!((slots[0].width, slots[0].height), (75.0, 37.5));
        // portrait 1:3 fills the height
        assert!((slots[1].width - 30.0).abs() < 1e-3);
        assert_eq!(slots[1].height, 90.0);
        assert_eq!(slots[1].x, 25.0 + 75.0 + 10.0);
        assert_eq!(slots[0].y, slots[1].y);
        // 150 + 75 > 190: next row below the tallest image plus caption room
        assert_eq!(slots[2].x, 25.0);
        assert_eq!(slots[2].y, slots[0].y + 90.0 + 15.0);
        for slot in &slots {
            assert!(slot.width <= 75.0 && slot.height <= 90.0);
            assert!(!slot.placeholder);
        }

        let doc = pages.finish();
        assert!(doc.texts().any(|t| t.text == "Imagem 3"));
    }

    #[tokio::test]
    async fn test_failed_image_becomes_placeholder() {
        let settings = Settings::default();
        let labels = Labels::default();
        let (mut pages, mut cursor) = start(&settings);

        let sources: Vec<ImageSource> =
            vec![GARBAGE_DATA_URL.into(), png_data_url(8, 8).into()];
        let slots = ImageGrid::new(&labels)
            .render(&mut pages, &mut cursor, &SourceLoader::default(), &sources)
            .await;

        assert!(slots[0].placeholder);
        assert_eq!((slots[0].width, slots[0].height), (75.0, 90.0));
        assert!(!slots[1].placeholder);

        let doc = pages.finish();
        let page = &doc.pages[0];
        assert!(page.has_text("Imagem não disponível"));
        assert!(!page.has_text("Imagem 1"));
        assert!(page.has_text("Imagem 2"));
        assert_eq!(page.images().count(), 1);
    }

    #[tokio::test]
    async fn test_grid_breaks_page_instead_of_overflowing() {
        let settings = Settings::default();
        let labels = Labels::default();
        let (mut pages, mut cursor) = start(&settings);

        let sources: Vec<ImageSource> = (0..10).map(|_| png_data_url(10, 30).into()).collect();
        let slots = ImageGrid::new(&labels)
            .render(&mut pages, &mut cursor, &SourceLoader::default(), &sources)
            .await;

        assert!(slots.iter().any(|s| s.page > 1));
        for slot in &slots {
            assert!(slot.y + slot.height <= 270.0 || slot.y == 30.0);
        }
    }

    #[tokio::test]
    async fn test_framed_image_fits_frame() {
        let settings = Settings::default();
        let labels = Labels::default();
        let (mut pages, mut cursor) = start(&settings);
        cursor.y = 100.0;

        let source: ImageSource = png_data_url(30, 10).into();
        let drawn = FramedImage::new(&labels)
            .render(&mut pages, &mut cursor, &SourceLoader::default(), &source)
            .await;
        assert!(drawn);
        assert_eq!(cursor.y, 175.0);

        let doc = pages.finish();
        let page = &doc.pages[0];
        let placed = page.images().next().unwrap();
        assert_eq!(placed.width, 80.0);
        assert!((placed.height - 80.0 / 3.0).abs() < 1e-3);
        assert_eq!(placed.x, 25.0);
        assert!(page.has_text("Imagem ilustrativa"));
    }

    #[tokio::test]
    async fn test_framed_image_placeholder() {
        let settings = Settings::default();
        let labels = Labels::default();
        let (mut pages, mut cursor) = start(&settings);
        cursor.y = 230.0;

        let source: ImageSource = GARBAGE_DATA_URL.into();
        let drawn = FramedImage::new(&labels)
            .render(&mut pages, &mut cursor, &SourceLoader::default(), &source)
            .await;
        assert!(!drawn);

        let doc = pages.finish();
        // past the break threshold: the frame moved to a new page
        assert_eq!(doc.find_page_with("Imagem não disponível"), Some(1));
        assert!(!doc.pages[1].has_text("Imagem ilustrativa"));
    }
}
