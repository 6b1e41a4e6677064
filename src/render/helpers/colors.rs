use printpdf::{Color, Rgb};

/// 8-bit RGB color as used in the layout model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Convert to a printpdf fill/stroke color
    pub fn to_pdf(self) -> Color {
        Color::Rgb(Rgb {
            r: self.r as f32 / 255.0,
            g: self.g as f32 / 255.0,
            b: self.b as f32 / 255.0,
            icc_profile: None,
        })
    }
}

/// Brand green for header bands, section bars and the cover
pub const PRIMARY: RgbColor = RgbColor::new(32, 106, 79);

pub const BLACK: RgbColor = RgbColor::gray(0);

pub const WHITE: RgbColor = RgbColor::gray(255);

/// Info panel background
pub const PANEL_GRAY: RgbColor = RgbColor::gray(240);

/// Body text and summary entries
pub const TEXT_DARK: RgbColor = RgbColor::gray(60);

/// Scientific names on fact sheets, image captions
pub const TEXT_MUTED: RgbColor = RgbColor::gray(100);

/// Scientific names on catalog title cards
pub const SCIENTIFIC_GRAY: RgbColor = RgbColor::gray(80);

/// Footers and placeholder text
pub const FOOTER_GRAY: RgbColor = RgbColor::gray(150);

/// Image frames in the catalog
pub const FRAME_GRAY: RgbColor = RgbColor::gray(245);

/// Catalog title card background
pub const CARD_GREEN: RgbColor = RgbColor::new(220, 240, 230);
