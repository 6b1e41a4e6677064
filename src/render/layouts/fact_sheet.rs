//! Fact Sheet Layout Renderer
//!
//! One record per document: date line, centered title, information panel,
//! the text sections and a captioned grid of every image.

use crate::config::Settings;
use crate::error::RenderError;
use crate::model::{ImageSource, PlantRecord};
use crate::render::components::{ImageGrid, InfoPanel, SheetTitle, TextSection};
use crate::render::document::Document;
use crate::render::helpers::colors::TEXT_MUTED;
use crate::render::helpers::fonts::TextStyle;
use crate::render::images::ImageLoader;
use crate::render::page::{LayoutCursor, PageManager};
use crate::render::writer::PdfWriter;

use super::{install_logo, record_sections};

const DATE_SIZE: f32 = 10.0;
/// Space between the date line and the title
const DATE_GAP: f32 = 15.0;
const SECTION_TITLE_SIZE: f32 = 14.0;

/// Fact sheet renderer
pub struct FactSheetRenderer<L: ImageLoader> {
    settings: Settings,
    loader: L,
}

impl<L: ImageLoader> FactSheetRenderer<L> {
    pub fn new(settings: Settings, loader: L) -> Self {
        Self { settings, loader }
    }

    /// Lay out the sheet without serializing it
    pub async fn layout(&self, record: &PlantRecord, logo: Option<&ImageSource>) -> Document {
        let labels = &self.settings.labels;
        let mut pages = PageManager::new(&self.settings, labels.sheet_title.as_str());
        install_logo(&mut pages, &self.loader, logo).await;

        let mut cursor = LayoutCursor::new();
        pages.open_page(&mut cursor);

        pages.text(
            format!("{} {}", labels.date_prefix, self.settings.formatted_date()),
            self.settings.margin_left,
            cursor.y,
            TextStyle::regular(DATE_SIZE).color(TEXT_MUTED),
        );
        cursor.y += DATE_GAP;

        SheetTitle::new(record).render(&mut pages, &mut cursor);
        InfoPanel::for_sheet(record, labels).render(&mut pages, &mut cursor);

        for (title, body) in record_sections(record, labels) {
            TextSection::new(title, body, SECTION_TITLE_SIZE).render(&mut pages, &mut cursor);
        }

        let slots = ImageGrid::new(labels)
            .render(&mut pages, &mut cursor, &self.loader, &record.images)
            .await;

        let document = pages.finish();
        log::info!(
            "Laid out fact sheet for {}: {} pages, {} images ({} unavailable)",
            record.common_name,
            document.page_count(),
            slots.len(),
            slots.iter().filter(|s| s.placeholder).count()
        );
        document
    }

    /// Generate the fact sheet PDF
    pub async fn render(
        &self,
        record: &PlantRecord,
        logo: Option<&ImageSource>,
    ) -> Result<Vec<u8>, RenderError> {
        let document = self.layout(record, logo).await;
        PdfWriter::new(&self.settings).write(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::images::test_support::{png_data_url, GARBAGE_DATA_URL};
    use crate::render::images::SourceLoader;
    use chrono::NaiveDate;

    fn boldo() -> PlantRecord {
        PlantRecord {
            id: "p1".to_string(),
            common_name: "Boldo".to_string(),
            family: "Lamiaceae".to_string(),
            species: "barbatus".to_string(),
            scientific_name: "Plectranthus barbatus".to_string(),
            bed_number: "3".to_string(),
            classification: "Digestiva".to_string(),
            active_principle: "Barbatusina".to_string(),
            usage: "Má digestão e azia.".to_string(),
            cultivation: "Estacas em solo bem drenado.".to_string(),
            usage_forms: "Chá das folhas.".to_string(),
            notes: None,
            images: vec![png_data_url(20, 10).into()],
            registered_at: String::new(),
        }
    }

    fn renderer() -> FactSheetRenderer<SourceLoader> {
        let settings =
            Settings::default().with_date(NaiveDate::from_ymd_opt(2024, 11, 2).unwrap());
        FactSheetRenderer::new(settings, SourceLoader::default())
    }

    #[tokio::test]
    async fn test_single_page_sheet() {
        let mut record = boldo();
        record.images.clear();
        let doc = renderer().layout(&record, None).await;
        assert_eq!(doc.page_count(), 1);

        let page = &doc.pages[0];
        let date = page.texts().find(|t| t.text == "Data: 02/11/2024").unwrap();
        assert_eq!((date.x, date.y), (20.0, 30.0));
        assert!(page.has_text("Boldo"));
        assert!(page.has_text("(Plectranthus barbatus)"));
        assert!(page.has_text("Informações Gerais"));
        assert!(page.has_text("Forma de Cultivo"));
        assert!(!page.has_text("Observações"));
        assert!(!page.has_text("Imagens"));
        assert!(page.has_text("Página 1 de 1"));
    }

    #[tokio::test]
    async fn test_images_move_past_threshold() {
        // the third section ends below the image block threshold
        let doc = renderer().layout(&boldo(), None).await;
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.find_page_with("Imagens"), Some(1));
        assert_eq!(doc.find_page_with("Imagem 1"), Some(1));
        assert_eq!(doc.pages[1].images().count(), 1);
    }

    #[tokio::test]
    async fn test_failed_logo_is_dropped() {
        let logo: ImageSource = GARBAGE_DATA_URL.into();
        let doc = renderer().layout(&boldo(), Some(&logo)).await;
        let header = doc.pages[0]
            .texts()
            .find(|t| t.text == "Ficha de Planta Medicinal")
            .unwrap();
        assert_eq!(header.x, 20.0);
        // only the record image was embedded
        assert_eq!(doc.images().len(), 1);
    }

    #[tokio::test]
    async fn test_long_text_paginates_with_footers() {
        let mut record = boldo();
        record.usage = "Usado tradicionalmente contra má digestão. ".repeat(150);
        record.notes = Some("Não usar durante a gravidez.".to_string());

        let doc = renderer().layout(&record, None).await;
        let total = doc.page_count();
        assert!(total >= 2);
        for (i, page) in doc.pages.iter().enumerate() {
            assert!(page.has_text(&format!("Página {} de {}", i + 1, total)));
            assert!(page.has_text(&format!("Página {}", i + 1)));
        }
        assert!(doc.find_page_with("Observações").unwrap() >= 1);
    }

    #[tokio::test]
    async fn test_render_produces_pdf() {
        let bytes = renderer().render(&boldo(), None).await.unwrap();
        let parsed = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), 2);
    }
}
