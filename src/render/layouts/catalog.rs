//! Catalog Layout Renderer
//!
//! Cover, numbered summary, then one entry per record sorted by common
//! name with pt-BR collation. Each entry starts on a new page and carries
//! at most one framed image.

use crate::config::{Labels, Settings};
use crate::error::RenderError;
use crate::model::{sort_by_common_name, ImageSource, PlantRecord, ALL_CLASSIFICATIONS};
use crate::render::components::{
    CatalogTitleCard, CoverPage, FramedImage, InfoPanel, SummaryPage, TextSection,
};
use crate::render::document::Document;
use crate::render::images::ImageLoader;
use crate::render::page::{LayoutCursor, PageManager};
use crate::render::writer::PdfWriter;

use super::{install_logo, record_sections};

const SECTION_TITLE_SIZE: f32 = 12.0;

/// Subtitle for a classification filter: the generic title for every
/// classification, `Plantas <label>s` otherwise
pub fn catalog_subtitle(filter_label: &str, labels: &Labels) -> String {
    if filter_label == ALL_CLASSIFICATIONS {
        labels.all_plants.clone()
    } else {
        format!("{} {}s", labels.plants_prefix, filter_label)
    }
}

/// Catalog renderer
pub struct CatalogRenderer<L: ImageLoader> {
    settings: Settings,
    loader: L,
}

impl<L: ImageLoader> CatalogRenderer<L> {
    pub fn new(settings: Settings, loader: L) -> Self {
        Self { settings, loader }
    }

    /// Lay out the catalog without serializing it.
    ///
    /// `records` are taken as already filtered; `filter_label` only names
    /// the catalog.
    pub async fn layout(
        &self,
        records: &[PlantRecord],
        filter_label: &str,
        logo: Option<&ImageSource>,
    ) -> Document {
        let labels = &self.settings.labels;
        let subtitle = catalog_subtitle(filter_label, labels);
        let title = format!("{} {}", labels.catalog_prefix, subtitle);

        let mut pages = PageManager::new(&self.settings, title);
        install_logo(&mut pages, &self.loader, logo).await;

        let sorted = sort_by_common_name(records);
        let mut cursor = LayoutCursor::new();

        CoverPage::new(&subtitle).render(&mut pages, &mut cursor);
        SummaryPage::new(&sorted).render(&mut pages, &mut cursor);

        let mut missing_images = 0;
        for (index, record) in sorted.iter().enumerate() {
            pages.open_page(&mut cursor);
            log::debug!("Catalog entry {} ({}) on page {}", index + 1, record.common_name, cursor.page);

            CatalogTitleCard::new(index + 1, record).render(&mut pages, &mut cursor);
            InfoPanel::for_catalog(record, labels).render(&mut pages, &mut cursor);

            for (section_title, body) in record_sections(record, labels) {
                TextSection::new(section_title, body, SECTION_TITLE_SIZE)
                    .render(&mut pages, &mut cursor);
            }

            if let Some(first) = record.images.first() {
                let drawn = FramedImage::new(labels)
                    .render(&mut pages, &mut cursor, &self.loader, first)
                    .await;
                if !drawn {
                    missing_images += 1;
                }
            }
        }

        let document = pages.finish();
        log::info!(
            "Laid out catalog \"{}\": {} entries, {} pages, {} images unavailable",
            subtitle,
            sorted.len(),
            document.page_count(),
            missing_images
        );
        document
    }

    /// Generate the catalog PDF
    pub async fn render(
        &self,
        records: &[PlantRecord],
        filter_label: &str,
        logo: Option<&ImageSource>,
    ) -> Result<Vec<u8>, RenderError> {
        let document = self.layout(records, filter_label, logo).await;
        PdfWriter::new(&self.settings).write(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::images::test_support::{png_data_url, GARBAGE_DATA_URL};
    use crate::render::images::SourceLoader;

    fn plant(id: &str, name: &str, classification: &str) -> PlantRecord {
        PlantRecord {
            id: id.to_string(),
            common_name: name.to_string(),
            family: "Lamiaceae".to_string(),
            species: "sp.".to_string(),
            scientific_name: format!("Genus {}", id),
            bed_number: "1".to_string(),
            classification: classification.to_string(),
            active_principle: "Óleo essencial".to_string(),
            usage: "Chá.".to_string(),
            cultivation: "Mudas.".to_string(),
            usage_forms: "Infusão.".to_string(),
            ..Default::default()
        }
    }

    fn renderer() -> CatalogRenderer<SourceLoader> {
        CatalogRenderer::new(Settings::default(), SourceLoader::default())
    }

    #[test]
    fn test_catalog_subtitle() {
        let labels = Labels::default();
        assert_eq!(catalog_subtitle(ALL_CLASSIFICATIONS, &labels), "Plantas Medicinais");
        assert_eq!(catalog_subtitle("Digestiva", &labels), "Plantas Digestivas");
    }

    #[tokio::test]
    async fn test_empty_catalog_has_cover_and_summary() {
        let doc = renderer().layout(&[], ALL_CLASSIFICATIONS, None).await;
        assert_eq!(doc.page_count(), 2);
        assert!(doc.pages[0].has_text("Catálogo de"));
        assert!(doc.pages[1].has_text("Sumário"));
        assert!(doc.pages[1].has_text("Página 2 de 2"));
    }

    #[tokio::test]
    async fn test_entries_sorted_and_start_new_pages() {
        let records = vec![
            plant("c", "Camomila", "Calmante"),
            plant("a", "alecrim", "Aromática"),
            plant("b", "Boldo", "Digestiva"),
        ];
        let doc = renderer().layout(&records, ALL_CLASSIFICATIONS, None).await;

        assert_eq!(doc.page_count(), 5);
        assert_eq!(doc.find_page_with("1. alecrim"), Some(1));
        assert_eq!(doc.find_page_with("2. Boldo"), Some(1));
        assert_eq!(doc.find_page_with("3. Camomila"), Some(1));
        // summary numbering matches the entry cards
        assert!(doc.pages[2].has_text("1. alecrim"));
        assert!(doc.pages[3].has_text("2. Boldo"));
        assert!(doc.pages[4].has_text("3. Camomila"));

        let header = doc.pages[2].texts().find(|t| t.style.is_bold()).unwrap();
        assert_eq!(header.text, "Catálogo de Plantas Medicinais");
    }

    #[tokio::test]
    async fn test_only_first_image_is_used() {
        let mut record = plant("a", "Alecrim", "Aromática");
        record.images = vec![
            png_data_url(40, 30).into(),
            png_data_url(10, 10).into(),
            png_data_url(10, 10).into(),
        ];
        let doc = renderer().layout(&[record], "Aromática", None).await;

        assert_eq!(doc.images().len(), 1);
        let image_page = doc.find_page_with("Imagem ilustrativa").unwrap();
        let placed = doc.pages[image_page].images().next().unwrap();
        assert!(placed.width <= 80.0 && placed.height <= 60.0);
        assert!((placed.width / placed.height - 40.0 / 30.0).abs() < 1e-3);
        assert!(doc.pages[0].has_text("Plantas Aromáticas"));
    }

    #[tokio::test]
    async fn test_broken_image_and_logo_degrade() {
        let mut record = plant("a", "Alecrim", "Aromática");
        record.images = vec![GARBAGE_DATA_URL.into()];
        let logo: ImageSource = GARBAGE_DATA_URL.into();

        let bytes = renderer()
            .render(&[record], ALL_CLASSIFICATIONS, Some(&logo))
            .await
            .unwrap();
        let parsed = lopdf::Document::load_mem(&bytes).unwrap();
        // cover, summary, entry, and the frame pushed past the image threshold
        assert_eq!(parsed.get_pages().len(), 4);

        let doc = renderer()
            .layout(&[plant("a", "Alecrim", "Aromática")], ALL_CLASSIFICATIONS, Some(&logo))
            .await;
        assert!(doc.images().is_empty());
    }
}
