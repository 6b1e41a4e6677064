//! Record title blocks: the centered fact sheet title and the catalog title card

use crate::model::PlantRecord;
use crate::render::helpers::colors::{CARD_GREEN, PRIMARY, SCIENTIFIC_GRAY, TEXT_MUTED};
use crate::render::helpers::fonts::TextStyle;
use crate::render::helpers::wrap::wrap_text;
use crate::render::page::{LayoutCursor, PageManager};

const SHEET_NAME_WRAP: usize = 40;
const SHEET_NAME_SIZE: f32 = 20.0;
const SHEET_NAME_LINE_HEIGHT: f32 = 10.0;
const SHEET_SCIENTIFIC_WRAP: usize = 45;
const SHEET_SCIENTIFIC_SIZE: f32 = 16.0;
const SHEET_SCIENTIFIC_LINE_HEIGHT: f32 = 8.0;
/// Scientific lines sit this far below the running cursor
const SHEET_SCIENTIFIC_DROP: f32 = 5.0;
const SHEET_TITLE_GAP: f32 = 15.0;

const CARD_X: f32 = 20.0;
const CARD_WIDTH: f32 = 170.0;
const CARD_MIN_HEIGHT: f32 = 50.0;
/// The card starts this far above the cursor
const CARD_TOP_OFFSET: f32 = 5.0;
const CARD_TEXT_X: f32 = 25.0;
const CARD_NAME_WRAP: usize = 45;
const CARD_NAME_SIZE: f32 = 18.0;
const CARD_NAME_LINE_HEIGHT: f32 = 8.0;
const CARD_SCIENTIFIC_WRAP: usize = 50;
const CARD_SCIENTIFIC_SIZE: f32 = 14.0;
const CARD_SCIENTIFIC_LINE_HEIGHT: f32 = 6.0;
const CARD_GAP_AFTER: f32 = 10.0;

/// Common name over parenthesised scientific name, centered on the page
pub struct SheetTitle<'a> {
    record: &'a PlantRecord,
}

impl<'a> SheetTitle<'a> {
    pub fn new(record: &'a PlantRecord) -> Self {
        Self { record }
    }

    pub fn render(&self, pages: &mut PageManager, cursor: &mut LayoutCursor) {
        let center = pages.settings().center_x();

        let name_style = TextStyle::regular(SHEET_NAME_SIZE)
            .bold()
            .color(PRIMARY)
            .centered();
        for line in wrap_text(&self.record.common_name, SHEET_NAME_WRAP) {
            pages.text(line, center, cursor.y, name_style);
            cursor.y += SHEET_NAME_LINE_HEIGHT;
        }

        let scientific_style = TextStyle::regular(SHEET_SCIENTIFIC_SIZE)
            .italic()
            .color(TEXT_MUTED)
            .centered();
        let scientific = format!("({})", self.record.scientific_name);
        for line in wrap_text(&scientific, SHEET_SCIENTIFIC_WRAP) {
            pages.text(line, center, cursor.y + SHEET_SCIENTIFIC_DROP, scientific_style);
            cursor.y += SHEET_SCIENTIFIC_LINE_HEIGHT;
        }

        cursor.y += SHEET_TITLE_GAP;
    }
}

/// Numbered title card opening each catalog entry
pub struct CatalogTitleCard<'a> {
    number: usize,
    record: &'a PlantRecord,
}

impl<'a> CatalogTitleCard<'a> {
    pub fn new(number: usize, record: &'a PlantRecord) -> Self {
        Self { number, record }
    }

    fn heading(&self) -> String {
        format!("{}. {}", self.number, self.record.common_name)
    }

    /// Card height for the wrapped name and scientific name
    pub fn height(&self) -> f32 {
        let lines = wrap_text(&self.heading(), CARD_NAME_WRAP).count()
            + wrap_text(&self.record.scientific_name, CARD_SCIENTIFIC_WRAP).count();
        (lines as f32 * CARD_NAME_LINE_HEIGHT + 20.0).max(CARD_MIN_HEIGHT)
    }

    pub fn render(&self, pages: &mut PageManager, cursor: &mut LayoutCursor) {
        let card_top = cursor.y - CARD_TOP_OFFSET;
        let height = self.height();
        pages.fill_rect(CARD_X, card_top, CARD_WIDTH, height, CARD_GREEN);

        let mut line_y = cursor.y + CARD_TOP_OFFSET;

        let name_style = TextStyle::regular(CARD_NAME_SIZE).bold().color(PRIMARY);
        for line in wrap_text(&self.heading(), CARD_NAME_WRAP) {
            pages.text(line, CARD_TEXT_X, line_y, name_style);
            line_y += CARD_NAME_LINE_HEIGHT;
        }

        let scientific_style = TextStyle::regular(CARD_SCIENTIFIC_SIZE)
            .italic()
            .color(SCIENTIFIC_GRAY);
        for line in wrap_text(&self.record.scientific_name, CARD_SCIENTIFIC_WRAP) {
            pages.text(line, CARD_TEXT_X, line_y, scientific_style);
            line_y += CARD_SCIENTIFIC_LINE_HEIGHT;
        }

        // Continue below the card, not below the last line
        cursor.y = card_top + height + CARD_GAP_AFTER;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn record(name: &str, scientific: &str) -> PlantRecord {
        PlantRecord {
            common_name: name.to_string(),
            scientific_name: scientific.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sheet_title_advance() {
        let settings = Settings::default();
        let mut pages = PageManager::new(&settings, "Ficha");
        let mut cursor = LayoutCursor::new();
        pages.open_page(&mut cursor);
        cursor.y = 45.0;

        let plant = record("Boldo", "Plectranthus barbatus");
        SheetTitle::new(&plant).render(&mut pages, &mut cursor);
        // one name line, one scientific line, gap
        assert_eq!(cursor.y, 45.0 + 10.0 + 8.0 + 15.0);

        let doc = pages.finish();
        let sci = doc.pages[0]
            .texts()
            .find(|t| t.text == "(Plectranthus barbatus)")
            .unwrap();
        assert_eq!(sci.y, 60.0);
        assert!(sci.style.is_italic());
    }

    #[test]
    fn test_card_contains_text_and_cursor_clears_it() {
        let settings = Settings::default();
        let mut pages = PageManager::new(&settings, "Catálogo");
        let mut cursor = LayoutCursor::new();
        pages.open_page(&mut cursor);

        let plant = record(
            "Erva-de-são-joão das montanhas do sul com nome muito comprido",
            "Hypericum perforatum subsp. veronense var. angustifolium",
        );
        let card = CatalogTitleCard::new(12, &plant);
        let height = card.height();
        card.render(&mut pages, &mut cursor);

        let doc = pages.finish();
        let page = &doc.pages[0];
        let rect = page.rects().find(|r| r.color == CARD_GREEN).unwrap();
        assert_eq!(rect.height, height);
        let last_line = page
            .texts()
            .filter(|t| t.x == CARD_TEXT_X)
            .map(|t| t.y)
            .fold(0.0f32, f32::max);
        assert!(last_line < rect.bottom());
        assert!(cursor.y > rect.bottom());
    }

    #[test]
    fn test_card_min_height() {
        let plant = record("Boldo", "Plectranthus barbatus");
        assert_eq!(CatalogTitleCard::new(1, &plant).height(), 50.0);
    }
}
