//! Catalog table of contents

use crate::model::PlantRecord;
use crate::render::helpers::colors::{PRIMARY, TEXT_DARK};
use crate::render::helpers::fonts::TextStyle;
use crate::render::helpers::wrap::wrap_text;
use crate::render::page::{LayoutCursor, PageManager};

const HEADING_SIZE: f32 = 18.0;
const HEADING_GAP: f32 = 20.0;
const ENTRY_SIZE: f32 = 12.0;
const ENTRY_LINE_HEIGHT: f32 = 6.0;
const NAME_X: f32 = 30.0;
const NAME_WRAP: usize = 50;
const SCIENTIFIC_X: f32 = 140.0;
const SCIENTIFIC_WRAP: usize = 40;

/// Numbered list of entries in catalog order
pub struct SummaryPage<'a> {
    records: &'a [&'a PlantRecord],
}

impl<'a> SummaryPage<'a> {
    pub fn new(records: &'a [&'a PlantRecord]) -> Self {
        Self { records }
    }

    pub fn render(&self, pages: &mut PageManager, cursor: &mut LayoutCursor) {
        let settings = pages.settings();
        pages.open_page(cursor);

        pages.text(
            settings.labels.summary.as_str(),
            settings.center_x(),
            cursor.y,
            TextStyle::regular(HEADING_SIZE)
                .bold()
                .color(PRIMARY)
                .centered(),
        );
        cursor.y += HEADING_GAP;

        let name_style = TextStyle::regular(ENTRY_SIZE).color(TEXT_DARK);
        let scientific_style = name_style.italic();

        for (index, record) in self.records.iter().enumerate() {
            let name = format!("{}. {}", index + 1, record.common_name);
            let scientific = format!("({})", record.scientific_name);
            let name_lines: Vec<String> = wrap_text(&name, NAME_WRAP).collect();
            let scientific_lines: Vec<String> =
                wrap_text(&scientific, SCIENTIFIC_WRAP).collect();
            let rows = name_lines.len().max(scientific_lines.len()).max(1);

            // an entry never straddles a page break
            let extent = (rows - 1) as f32 * ENTRY_LINE_HEIGHT;
            pages.ensure_room(cursor, extent, settings.line_break_y);

            for (i, line) in name_lines.into_iter().enumerate() {
                let y = cursor.y + i as f32 * ENTRY_LINE_HEIGHT;
                pages.text(line, NAME_X, y, name_style);
            }
            for (i, line) in scientific_lines.into_iter().enumerate() {
                let y = cursor.y + i as f32 * ENTRY_LINE_HEIGHT;
                pages.text(line, SCIENTIFIC_X, y, scientific_style);
            }
            cursor.y += rows as f32 * ENTRY_LINE_HEIGHT;
        }
    }
}
