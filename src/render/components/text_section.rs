//! Titled free-text section: colored title bar followed by flowed body text

use printpdf::BuiltinFont;

use crate::render::helpers::colors::{PRIMARY, TEXT_DARK, WHITE};
use crate::render::helpers::fonts::TextStyle;
use crate::render::helpers::wrap::{wrap_measured, wrap_text};
use crate::render::page::{LayoutCursor, PageManager};

const BAR_X: f32 = 20.0;
const BAR_WIDTH: f32 = 170.0;
const BAR_MIN_HEIGHT: f32 = 8.0;
const TITLE_X: f32 = 25.0;
const TITLE_WRAP: usize = 35;
const TITLE_LINE_HEIGHT: f32 = 6.0;
/// Gap between the bar's bottom and the first body baseline
const BODY_GAP: f32 = 7.0;
const BODY_X: f32 = 25.0;
const BODY_WIDTH: f32 = 160.0;
const SECTION_GAP: f32 = 10.0;

pub struct TextSection<'a> {
    title: &'a str,
    body: &'a str,
    title_size: f32,
}

impl<'a> TextSection<'a> {
    pub fn new(title: &'a str, body: &'a str, title_size: f32) -> Self {
        Self {
            title,
            body,
            title_size,
        }
    }

    pub fn bar_height(&self) -> f32 {
        let lines = wrap_text(self.title, TITLE_WRAP).count();
        (lines as f32 * TITLE_LINE_HEIGHT).max(BAR_MIN_HEIGHT)
    }

    pub fn render(&self, pages: &mut PageManager, cursor: &mut LayoutCursor) {
        let settings = pages.settings();
        let section_limit = settings.section_break_y;
        let line_limit = settings.line_break_y;
        let body_size = settings.body_font_size;
        let line_height = settings.body_line_height;

        pages.advance_if_needed(cursor, section_limit);

        let bar_height = self.bar_height();
        pages.fill_rect(BAR_X, cursor.y, BAR_WIDTH, bar_height, PRIMARY);

        let title_style = TextStyle::regular(self.title_size).bold().color(WHITE);
        for (i, line) in wrap_text(self.title, TITLE_WRAP).enumerate() {
            let y = cursor.y + TITLE_LINE_HEIGHT + i as f32 * TITLE_LINE_HEIGHT;
            pages.text(line, TITLE_X, y, title_style);
        }
        cursor.y += bar_height + BODY_GAP;

        let body_style = TextStyle::regular(body_size).color(TEXT_DARK);
        for line in wrap_measured(self.body, BODY_WIDTH, BuiltinFont::Helvetica, body_size) {
            pages.advance_if_needed(cursor, line_limit);
            pages.text(line, BODY_X, cursor.y, body_style);
            cursor.y += line_height;
        }

        cursor.y += SECTION_GAP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_short_section_layout() {
        let settings = Settings::default();
        let mut pages = PageManager::new(&settings, "Teste");
        let mut cursor = LayoutCursor::new();
        pages.open_page(&mut cursor);
        cursor.y = 100.0;

        TextSection::new("Utilização", "Chá das folhas.", 14.0).render(&mut pages, &mut cursor);
        // bar 8 + gap 7, one body line, section gap
        assert_eq!(cursor.y, 100.0 + 15.0 + 6.0 + 10.0);

        let doc = pages.finish();
        let page = &doc.pages[0];
        let title = page.texts().find(|t| t.text == "Utilização").unwrap();
        assert_eq!((title.x, title.y), (25.0, 106.0));
        assert_eq!(title.style.color, WHITE);
        let body = page.texts().find(|t| t.text == "Chá das folhas.").unwrap();
        assert_eq!(body.y, 115.0);
    }

    #[test]
    fn test_section_starts_new_page_past_threshold() {
        let settings = Settings::default();
        let mut pages = PageManager::new(&settings, "Teste");
        let mut cursor = LayoutCursor::new();
        pages.open_page(&mut cursor);
        cursor.y = 255.0;

        TextSection::new("Observações", "Colher pela manhã.", 12.0).render(&mut pages, &mut cursor);
        let doc = pages.finish();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.find_page_with("Observações"), Some(1));
    }

    #[test]
    fn test_long_body_flows_across_pages() {
        let settings = Settings::default();
        let mut pages = PageManager::new(&settings, "Teste");
        let mut cursor = LayoutCursor::new();
        pages.open_page(&mut cursor);

        let body = "Infusão de folhas secas tomada após as refeições. ".repeat(200);
        TextSection::new("Utilização", &body, 14.0).render(&mut pages, &mut cursor);

        let doc = pages.finish();
        assert!(doc.page_count() > 2);
        for page in &doc.pages {
            for run in page.texts().filter(|t| t.x == BODY_X) {
                assert!(run.y <= 276.0, "body line at {}", run.y);
            }
        }
    }
}
