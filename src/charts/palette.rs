//! Variant colors, passed to the renderer as an explicit value.

use crate::data::Variant;
use plotters::style::RGBColor;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    colors: [RGBColor; 5],
}

impl Default for Palette {
    /// Paul Tol's "light" scheme.
    fn default() -> Self {
        let mut colors = [RGBColor(0, 0, 0); 5];
        colors[Variant::Silverblue as usize] = RGBColor(0x99, 0xDD, 0xFF); // light blue
        colors[Variant::Kinoite as usize] = RGBColor(0xEE, 0xDD, 0x88); // light yellow
        colors[Variant::Bluefin as usize] = RGBColor(0x77, 0xAA, 0xDD); // blue
        colors[Variant::Bazzite as usize] = RGBColor(0xFF, 0xAA, 0xBB); // pink
        colors[Variant::Aurora as usize] = RGBColor(0xEE, 0x88, 0x66); // orange
        Self { colors }
    }
}

impl Palette {
    pub fn color(&self, variant: Variant) -> RGBColor {
        self.colors[variant as usize]
    }

    pub fn with_color(mut self, variant: Variant, color: RGBColor) -> Self {
        self.colors[variant as usize] = color;
        self
    }
}
