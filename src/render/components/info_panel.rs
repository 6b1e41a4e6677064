//! Shaded "general information" panel with five label/value pairs, two per row

use crate::config::Labels;
use crate::model::PlantRecord;
use crate::render::document::FilledRect;
use crate::render::helpers::colors::{PANEL_GRAY, PRIMARY, TEXT_DARK};
use crate::render::helpers::fonts::TextStyle;
use crate::render::helpers::wrap::wrap_text;
use crate::render::page::{LayoutCursor, PageManager};

const PANEL_X: f32 = 20.0;
const PANEL_WIDTH: f32 = 170.0;
const PANEL_MIN_HEIGHT: f32 = 60.0;
const TEXT_X: f32 = 25.0;
const COLUMN_OFFSET: f32 = 85.0;
const TITLE_BASELINE: f32 = 10.0;
/// Offset of the first row's labels from the panel top
const FIRST_ROW_OFFSET: f32 = 20.0;
const MIN_ROW_PITCH: f32 = 20.0;
const VALUE_WRAP: usize = 30;
const VALUE_LINE_HEIGHT: f32 = 5.0;
const GAP_AFTER: f32 = 10.0;

struct InfoItem {
    label: String,
    value: String,
    italic: bool,
}

/// Panel contents and typography
pub struct InfoPanel {
    title: String,
    items: Vec<InfoItem>,
    title_size: f32,
    label_size: f32,
    value_size: f32,
}

impl InfoPanel {
    fn new(record: &PlantRecord, labels: &Labels, italic_species: bool) -> Self {
        let item = |label: &str, value: &str, italic: bool| InfoItem {
            label: label.to_string(),
            value: value.to_string(),
            italic,
        };
        Self {
            title: labels.general_info.clone(),
            items: vec![
                item(&labels.family, &record.family, false),
                item(&labels.species, &record.species, italic_species),
                item(&labels.bed_number, &record.bed_number, false),
                item(&labels.classification, &record.classification, false),
                item(&labels.active_principle, &record.active_principle, false),
            ],
            title_size: 14.0,
            label_size: 11.0,
            value_size: 11.0,
        }
    }

    /// Panel as drawn on a fact sheet
    pub fn for_sheet(record: &PlantRecord, labels: &Labels) -> Self {
        Self::new(record, labels, false)
    }

    /// Panel as drawn in the catalog: smaller type, species in italics
    pub fn for_catalog(record: &PlantRecord, labels: &Labels) -> Self {
        Self {
            title_size: 11.0,
            label_size: 10.0,
            value_size: 10.0,
            ..Self::new(record, labels, true)
        }
    }

    fn rows(&self) -> usize {
        self.items.len().div_ceil(2)
    }

    /// Most wrapped lines over every value
    pub fn max_value_lines(&self) -> usize {
        self.items
            .iter()
            .map(|item| wrap_text(&item.value, VALUE_WRAP).count())
            .max()
            .unwrap_or(0)
    }

    /// Vertical distance between rows, tall enough for the longest value
    pub fn row_pitch(&self) -> f32 {
        (10.0 + VALUE_LINE_HEIGHT * self.max_value_lines() as f32).max(MIN_ROW_PITCH)
    }

    pub fn height(&self) -> f32 {
        (FIRST_ROW_OFFSET + self.rows() as f32 * self.row_pitch()).max(PANEL_MIN_HEIGHT)
    }

    /// Draw at the cursor and return the panel bounds
    pub fn render(&self, pages: &mut PageManager, cursor: &mut LayoutCursor) -> FilledRect {
        let height = self.height();
        let line_limit = pages.settings().line_break_y;
        pages.ensure_room(cursor, height, line_limit);

        let top = cursor.y;
        pages.fill_rect(PANEL_X, top, PANEL_WIDTH, height, PANEL_GRAY);
        pages.text(
            self.title.as_str(),
            TEXT_X,
            top + TITLE_BASELINE,
            TextStyle::regular(self.title_size).bold().color(PRIMARY),
        );

        let pitch = self.row_pitch();
        let label_style = TextStyle::regular(self.label_size).bold().color(PRIMARY);

        for (index, item) in self.items.iter().enumerate() {
            let row_y = top + FIRST_ROW_OFFSET + (index / 2) as f32 * pitch;
            let x = TEXT_X + (index % 2) as f32 * COLUMN_OFFSET;

            pages.text(item.label.as_str(), x, row_y, label_style);

            let mut value_style = TextStyle::regular(self.value_size).color(TEXT_DARK);
            if item.italic {
                value_style = value_style.italic();
            }
            for (line_index, line) in wrap_text(&item.value, VALUE_WRAP).enumerate() {
                let y = row_y + VALUE_LINE_HEIGHT + line_index as f32 * VALUE_LINE_HEIGHT;
                pages.text(line, x, y, value_style);
            }
        }

        cursor.y = top + height + GAP_AFTER;

        FilledRect {
            x: PANEL_X,
            y: top,
            width: PANEL_WIDTH,
            height,
            color: PANEL_GRAY,
        }
    }
}
