use chrono::{Local, NaiveDate};

use crate::cli::OutputArgs;
use crate::error::ConfigError;

use super::defaults::*;

/// Fixed wording printed in the documents (pt-BR)
#[derive(Debug, Clone)]
pub struct Labels {
    pub sheet_title: String,
    pub date_prefix: String,
    pub general_info: String,
    pub family: String,
    pub species: String,
    pub bed_number: String,
    pub classification: String,
    pub active_principle: String,
    pub usage: String,
    pub cultivation: String,
    pub usage_forms: String,
    pub notes: String,
    pub images: String,
    pub image_caption: String,
    pub illustrative_image: String,
    pub image_unavailable: String,
    pub page: String,
    pub page_of: String,
    pub catalog_prefix: String,
    pub all_plants: String,
    pub plants_prefix: String,
    pub summary: String,
    pub generated_on: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            sheet_title: "Ficha de Planta Medicinal".to_string(),
            date_prefix: "Data:".to_string(),
            general_info: "Informações Gerais".to_string(),
            family: "Família:".to_string(),
            species: "Espécie:".to_string(),
            bed_number: "Canteiro:".to_string(),
            classification: "Classificação:".to_string(),
            active_principle: "Princípio Ativo:".to_string(),
            usage: "Utilização".to_string(),
            cultivation: "Forma de Cultivo".to_string(),
            usage_forms: "Formas de Utilização".to_string(),
            notes: "Observações".to_string(),
            images: "Imagens".to_string(),
            image_caption: "Imagem".to_string(),
            illustrative_image: "Imagem ilustrativa".to_string(),
            image_unavailable: "Imagem não disponível".to_string(),
            page: "Página".to_string(),
            page_of: "de".to_string(),
            catalog_prefix: "Catálogo de".to_string(),
            all_plants: "Plantas Medicinais".to_string(),
            plants_prefix: "Plantas".to_string(),
            summary: "Sumário".to_string(),
            generated_on: "Gerado em".to_string(),
        }
    }
}

/// Runtime settings for PDF generation
#[derive(Debug, Clone)]
pub struct Settings {
    // Page geometry (mm)
    pub page_width: f32,
    pub page_height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub header_band_height: f32,
    pub body_start_y: f32,
    pub footer_y: f32,

    // Page-break thresholds (mm from the top edge)
    pub section_break_y: f32,
    pub line_break_y: f32,
    pub sheet_images_break_y: f32,
    pub catalog_image_break_y: f32,
    pub image_bottom_y: f32,

    // Typography
    pub header_font_size: f32,
    pub body_font_size: f32,
    pub footer_font_size: f32,
    pub body_line_height: f32,

    /// Date stamped on fact sheets and catalog covers
    pub generated_on: NaiveDate,

    /// Compress content streams after generation
    pub compress: bool,

    pub labels: Labels,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_width: PAGE_WIDTH,
            page_height: PAGE_HEIGHT,
            margin_left: SIDE_MARGIN,
            margin_right: SIDE_MARGIN,
            header_band_height: HEADER_BAND_HEIGHT,
            body_start_y: BODY_START_Y,
            footer_y: FOOTER_Y,

            section_break_y: SECTION_BREAK_Y,
            line_break_y: LINE_BREAK_Y,
            sheet_images_break_y: SHEET_IMAGES_BREAK_Y,
            catalog_image_break_y: CATALOG_IMAGE_BREAK_Y,
            image_bottom_y: IMAGE_BOTTOM_Y,

            header_font_size: HEADER_FONT_SIZE,
            body_font_size: BODY_FONT_SIZE,
            footer_font_size: FOOTER_FONT_SIZE,
            body_line_height: BODY_LINE_HEIGHT,

            generated_on: Local::now().date_naive(),
            compress: true,
            labels: Labels::default(),
        }
    }
}

impl Settings {
    /// Create settings from CLI output options
    pub fn from_args(args: &OutputArgs) -> Result<Self, ConfigError> {
        let mut settings = Self {
            compress: !args.no_compress,
            ..Default::default()
        };
        if let Some(ref date) = args.date {
            settings.generated_on = parse_date(date)?;
        }
        Ok(settings)
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.generated_on = date;
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Generation date as printed (dd/mm/yyyy)
    pub fn formatted_date(&self) -> String {
        self.generated_on.format("%d/%m/%Y").to_string()
    }

    /// Horizontal center of the page
    pub fn center_x(&self) -> f32 {
        self.page_width / 2.0
    }
}

/// Parse a dd/mm/yyyy date
pub fn parse_date(text: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(text.trim(), "%d/%m/%Y")
        .map_err(|_| ConfigError::InvalidDate(text.to_string()))
}
