//! Per-run text styling
//!
//! Every text run carries its own style; nothing is inherited from a
//! previous run. Styles map onto the builtin Helvetica faces.

use printpdf::BuiltinFont;

use super::colors::{RgbColor, BLACK};
use super::text_metrics::get_builtin_measurer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slant {
    #[default]
    Upright,
    Italic,
}

/// Horizontal anchoring of a run relative to its x coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Size in points
    pub size: f32,
    pub weight: Weight,
    pub slant: Slant,
    pub color: RgbColor,
    pub align: Align,
}

impl TextStyle {
    pub fn regular(size: f32) -> Self {
        Self {
            size,
            weight: Weight::Regular,
            slant: Slant::Upright,
            color: BLACK,
            align: Align::Left,
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = Weight::Bold;
        self
    }

    pub fn italic(mut self) -> Self {
        self.slant = Slant::Italic;
        self
    }

    pub fn color(mut self, color: RgbColor) -> Self {
        self.color = color;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub fn is_bold(&self) -> bool {
        self.weight == Weight::Bold
    }

    pub fn is_italic(&self) -> bool {
        self.slant == Slant::Italic
    }

    /// The builtin face used to draw this style
    pub fn builtin_font(&self) -> BuiltinFont {
        match (self.weight, self.slant) {
            (Weight::Regular, Slant::Upright) => BuiltinFont::Helvetica,
            (Weight::Bold, Slant::Upright) => BuiltinFont::HelveticaBold,
            (Weight::Regular, Slant::Italic) => BuiltinFont::HelveticaOblique,
            (Weight::Bold, Slant::Italic) => BuiltinFont::HelveticaBoldOblique,
        }
    }

    /// Width of `text` in mm when drawn with this style
    pub fn measure(&self, text: &str) -> f32 {
        get_builtin_measurer(self.builtin_font()).measure_width_mm(text, self.size)
    }

    /// Left edge of `text` anchored at `x`
    pub fn left_edge(&self, text: &str, x: f32) -> f32 {
        match self.align {
            Align::Left => x,
            Align::Center => x - self.measure(text) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let style = TextStyle::regular(16.0).italic().color(RgbColor::gray(100)).centered();
        assert_eq!(style.builtin_font(), BuiltinFont::HelveticaOblique);
        assert_eq!(style.align, Align::Center);
        assert!(!style.is_bold());

        let heading = TextStyle::regular(14.0).bold();
        assert_eq!(heading.builtin_font(), BuiltinFont::HelveticaBold);
    }

    #[test]
    fn test_left_edge_alignment() {
        let centered = TextStyle::regular(10.0).centered();
        let width = centered.measure("Página 1 de 3");
        assert!((centered.left_edge("Página 1 de 3", 105.0) - (105.0 - width / 2.0)).abs() < 1e-4);

        let left = TextStyle::regular(10.0);
        assert_eq!(left.left_edge("abc", 50.0), 50.0);
    }
}
