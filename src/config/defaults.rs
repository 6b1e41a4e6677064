/// A4 portrait page width in mm
pub const PAGE_WIDTH: f32 = 210.0;

/// A4 portrait page height in mm
pub const PAGE_HEIGHT: f32 = 297.0;

/// Left/right content margin in mm
pub const SIDE_MARGIN: f32 = 20.0;

/// Height of the colored header band in mm
pub const HEADER_BAND_HEIGHT: f32 = 20.0;

/// First body baseline below the header band
pub const BODY_START_Y: f32 = 30.0;

/// Footer baseline (bottom of the usable page area)
pub const FOOTER_Y: f32 = 290.0;

/// A new text section starts on a fresh page past this point
pub const SECTION_BREAK_Y: f32 = 250.0;

/// Body text lines move to a fresh page past this point
pub const LINE_BREAK_Y: f32 = 270.0;

/// The fact sheet image block starts on a fresh page past this point
pub const SHEET_IMAGES_BREAK_Y: f32 = 200.0;

/// The catalog's framed image starts on a fresh page past this point
pub const CATALOG_IMAGE_BREAK_Y: f32 = 220.0;

/// Images may not extend below this point
pub const IMAGE_BOTTOM_Y: f32 = 270.0;

/// Header title font size in points
pub const HEADER_FONT_SIZE: f32 = 12.0;

/// Body text font size in points
pub const BODY_FONT_SIZE: f32 = 11.0;

/// Footer/page-number font size in points
pub const FOOTER_FONT_SIZE: f32 = 10.0;

/// Advance between body text lines in mm
pub const BODY_LINE_HEIGHT: f32 = 6.0;
