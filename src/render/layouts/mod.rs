//! Layout renderers - one per output mode

pub mod catalog;
pub mod fact_sheet;

pub use catalog::CatalogRenderer;
pub use fact_sheet::FactSheetRenderer;

use crate::config::Labels;
use crate::model::{ImageSource, PlantRecord};

use super::images::ImageLoader;
use super::page::PageManager;

/// Titled text sections in display order; notes only when present
fn record_sections<'r>(record: &'r PlantRecord, labels: &'r Labels) -> Vec<(&'r str, &'r str)> {
    let mut sections = vec![
        (labels.usage.as_str(), record.usage.as_str()),
        (labels.cultivation.as_str(), record.cultivation.as_str()),
        (labels.usage_forms.as_str(), record.usage_forms.as_str()),
    ];
    if let Some(notes) = record.notes() {
        sections.push((labels.notes.as_str(), notes));
    }
    sections
}

/// Load the header logo; a failed load drops the logo with a warning
async fn install_logo<L: ImageLoader>(
    pages: &mut PageManager<'_>,
    loader: &L,
    logo: Option<&ImageSource>,
) {
    let Some(source) = logo else {
        return;
    };
    match loader.load(source).await {
        Ok(image) => pages.set_logo(image),
        Err(e) => log::warn!("Logo ({}) unavailable, continuing without it: {}", source, e),
    }
}
