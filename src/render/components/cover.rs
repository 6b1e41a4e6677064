//! Catalog cover page

use crate::render::helpers::colors::{PRIMARY, WHITE};
use crate::render::helpers::fonts::TextStyle;
use crate::render::helpers::image_fit::fit_within;
use crate::render::helpers::wrap::wrap_text;
use crate::render::page::{LayoutCursor, PageManager};

const LOGO_X: f32 = 70.0;
const LOGO_Y: f32 = 50.0;
const LOGO_WIDTH: f32 = 70.0;
const LOGO_HEIGHT: f32 = 40.0;
const TITLE_Y_WITH_LOGO: f32 = 120.0;
const TITLE_Y: f32 = 100.0;
const TITLE_WRAP: usize = 20;
const TITLE_SIZE: f32 = 36.0;
const TITLE_LINE_HEIGHT: f32 = 20.0;
const DATE_SIZE: f32 = 14.0;
const DATE_GAP: f32 = 20.0;

/// Full-bleed cover: logo, two-part title and generation date
pub struct CoverPage<'a> {
    subtitle: &'a str,
}

impl<'a> CoverPage<'a> {
    pub fn new(subtitle: &'a str) -> Self {
        Self { subtitle }
    }

    pub fn render(&self, pages: &mut PageManager, cursor: &mut LayoutCursor) {
        let settings = pages.settings();
        pages.open_bare_page(cursor);
        pages.fill_rect(0.0, 0.0, settings.page_width, settings.page_height, PRIMARY);

        let logo = pages.logo().and_then(|handle| {
            pages.image(handle).map(|image| {
                let fit = fit_within(
                    image.width as f32,
                    image.height as f32,
                    LOGO_WIDTH,
                    LOGO_HEIGHT,
                );
                (handle, fit)
            })
        });
        if let Some((handle, fit)) = logo {
            let x = LOGO_X + (LOGO_WIDTH - fit.width) / 2.0;
            let y = LOGO_Y + (LOGO_HEIGHT - fit.height) / 2.0;
            pages.place_image(handle, x, y, fit.width, fit.height);
        }

        let center = settings.center_x();
        let title_style = TextStyle::regular(TITLE_SIZE).bold().color(WHITE).centered();
        let mut y = if logo.is_some() {
            TITLE_Y_WITH_LOGO
        } else {
            TITLE_Y
        };
        for part in [settings.labels.catalog_prefix.as_str(), self.subtitle] {
            for line in wrap_text(part, TITLE_WRAP) {
                pages.text(line, center, y, title_style);
                y += TITLE_LINE_HEIGHT;
            }
        }

        pages.text(
            format!(
                "{} {}",
                settings.labels.generated_on,
                settings.formatted_date()
            ),
            center,
            y + DATE_GAP,
            TextStyle::regular(DATE_SIZE).color(WHITE).centered(),
        );

        cursor.y = settings.page_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::render::images::LoadedImage;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn settings() -> Settings {
        Settings::default().with_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
    }

    #[test]
    fn test_cover_without_logo() {
        let settings = settings();
        let mut pages = PageManager::new(&settings, "Catálogo de Plantas Medicinais");
        let mut cursor = LayoutCursor::new();
        CoverPage::new("Plantas Medicinais").render(&mut pages, &mut cursor);

        let doc = pages.finish();
        let page = &doc.pages[0];
        let background = page.rects().next().unwrap();
        assert_eq!((background.width, background.height), (210.0, 297.0));
        assert_eq!(background.color, PRIMARY);

        let first = page.texts().find(|t| t.text == "Catálogo de").unwrap();
        assert_eq!(first.y, 100.0);
        let second = page.texts().find(|t| t.text == "Plantas Medicinais").unwrap();
        assert_eq!(second.y, 120.0);
        let date = page.texts().find(|t| t.text == "Gerado em 05/03/2024").unwrap();
        assert_eq!(date.y, 160.0);
        assert_eq!(page.images().count(), 0);
    }

    #[test]
    fn test_cover_logo_fits_box() {
        let settings = settings();
        let mut pages = PageManager::new(&settings, "Catálogo");
        pages.set_logo(Arc::new(LoadedImage {
            width: 100,
            height: 100,
            rgb: vec![255; 100 * 100 * 3],
        }));
        let mut cursor = LayoutCursor::new();
        CoverPage::new("Plantas Digestivas").render(&mut pages, &mut cursor);

        let doc = pages.finish();
        let page = &doc.pages[0];
        let logo = page.images().next().unwrap();
        assert_eq!((logo.width, logo.height), (40.0, 40.0));
        assert_eq!((logo.x, logo.y), (85.0, 50.0));
        let first = page.texts().find(|t| t.text == "Catálogo de").unwrap();
        assert_eq!(first.y, 120.0);
        let date = page.texts().find(|t| t.text == "Gerado em 05/03/2024").unwrap();
        assert_eq!(date.y, 180.0);
        // no header band on the cover
        assert!(!page.has_text("Página 1"));
    }
}
