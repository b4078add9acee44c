// File: crates/chart-core/src/scale.rs
// Summary: Category band (X) and linear value (Y or X) scale transforms.

/// Evenly spaced categories across a pixel span; category `i` is centred in its band.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub left_px: f32,
    pub band_px: f32,
}

impl BandScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        let band_px = (right_px - left_px) / count.max(1) as f32;
        Self { left_px, band_px: band_px.max(0.01) }
    }
    #[inline]
    pub fn center(&self, i: usize) -> f32 {
        self.left_px + (i as f32 + 0.5) * self.band_px
    }
    /// Left/right pixel edges of a bar occupying `fraction` of band `i`.
    #[inline]
    pub fn bar_edges(&self, i: usize, fraction: f32) -> (f32, f32) {
        let half = self.band_px * fraction.clamp(0.0, 1.0) * 0.5;
        let c = self.center(i);
        (c - half, c + half)
    }
}

/// Linear mapping of a value range onto a pixel span. `start_px` receives `vmin`,
/// so Y scales pass (bottom, top) and X scales pass (left, right).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(start_px: f32, end_px: f32, vmin: f64, mut vmax: f64) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { start_px, end_px, vmin, vmax }
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.start_px + t as f32 * (self.end_px - self.start_px)
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let t = ((px - self.start_px) / (self.end_px - self.start_px)) as f64;
        self.vmin + t * (self.vmax - self.vmin)
    }
}
