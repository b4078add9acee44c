// File: crates/chart-core/src/palette.rs
// Summary: Named colors and fixed qualitative palettes (RGB hex, alpha implied opaque).

use skia_safe as skia;

pub const SKY_BLUE: u32 = 0x87CEEB;
pub const LIGHT_GREEN: u32 = 0x90EE90;
pub const LIGHT_BLUE: u32 = 0xADD8E6;
pub const SALMON: u32 = 0xFA8072;
pub const LIGHT_CORAL: u32 = 0xF08080;
pub const PURPLE: u32 = 0x800080;
pub const GREEN: u32 = 0x008000;
pub const ORANGE: u32 = 0xFFA500;

/// ColorBrewer "Paired", 12 classes.
pub const PAIRED: [u32; 12] = [
    0xA6CEE3, 0x1F78B4, 0xB2DF8A, 0x33A02C, 0xFB9A99, 0xE31A1C,
    0xFDBF6F, 0xFF7F00, 0xCAB2D6, 0x6A3D9A, 0xFFFF99, 0xB15928,
];

/// Ten-class default cycle used when a series does not set its own colors.
pub const CATEGORY10: [u32; 10] = [
    0x1F77B4, 0xFF7F0E, 0x2CA02C, 0xD62728, 0x9467BD,
    0x8C564B, 0xE377C2, 0x7F7F7F, 0xBCBD22, 0x17BECF,
];

/// Opaque skia color from `0xRRGGBB`.
#[inline]
pub fn rgb(hex: u32) -> skia::Color {
    skia::Color::new(0xFF00_0000 | (hex & 0x00FF_FFFF))
}

/// Color `i` of `palette`, cycling. Falls back to mid grey on an empty palette.
pub fn cycle(palette: &[u32], i: usize) -> skia::Color {
    if palette.is_empty() {
        return rgb(0x808080);
    }
    rgb(palette[i % palette.len()])
}

/// Lowercase `#rrggbb` for use in markup legends.
pub fn css_hex(hex: u32) -> String {
    format!("#{:06x}", hex & 0x00FF_FFFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps() {
        assert_eq!(cycle(&PAIRED, 12), cycle(&PAIRED, 0));
        assert_eq!(css_hex(SKY_BLUE), "#87ceeb");
        assert_eq!(rgb(0x123456).a(), 255);
    }
}
