// File: crates/chart-core/src/text.rs
// Summary: Label drawing on a Skia canvas: measure, align, rotate.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    typeface: Option<skia::Typeface>,
}

impl TextShaper {
    pub fn new() -> Self {
        // Use system manager fallback; headless hosts without fonts still render shapes
        let typeface = skia::FontMgr::default().legacy_make_typeface(None, skia::FontStyle::normal());
        Self { typeface }
    }

    fn font(&self, size: f32) -> skia::Font {
        match &self.typeface {
            Some(tf) => skia::Font::from_typeface(tf.clone(), size.max(1.0)),
            None => {
                let mut f = skia::Font::default();
                f.set_size(size.max(1.0));
                f
            }
        }
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let (w, _) = self.font(size).measure_str(text, None);
        w
    }

    /// Draw `text` with its baseline at `y`, horizontally anchored at `x`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, align: Align) {
        if text.is_empty() { return; }
        let font = self.font(size);
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(color);
        let w = font.measure_str(text, Some(&paint)).0;
        let dx = match align {
            Align::Left => 0.0,
            Align::Center => -w * 0.5,
            Align::Right => -w,
        };
        canvas.draw_str(text, (x + dx, y), &font, &paint);
    }

    #[allow(clippy::too_many_arguments)]
    /// Draw `text` rotated by `degrees` (clockwise on screen) around the anchor `(x, y)`.
    pub fn draw_rotated(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        degrees: f32,
        size: f32,
        color: skia::Color,
        align: Align,
    ) {
        if degrees == 0.0 {
            self.draw(canvas, text, x, y, size, color, align);
            return;
        }
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(degrees, None);
        // centre glyphs vertically on the anchor
        self.draw(canvas, text, 0.0, size * 0.35, size, color, align);
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
