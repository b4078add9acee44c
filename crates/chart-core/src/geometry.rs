// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and panel layout.

use skia_safe as skia;

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Shrink by `insets`; never inverts (collapses to zero size instead).
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as i32;
        let top = self.top + insets.top as i32;
        let right = (self.right - insets.right as i32).max(left);
        let bottom = (self.bottom - insets.bottom as i32).max(top);
        Self { left, top, right, bottom }
    }

    /// Split into `n` equal-width columns, left to right. The last column absorbs rounding.
    pub fn split_columns(&self, n: usize) -> Vec<RectI32> {
        if n == 0 { return Vec::new(); }
        let w = self.width() / n as i32;
        (0..n)
            .map(|i| {
                let l = self.left + w * i as i32;
                let r = if i + 1 == n { self.right } else { l + w };
                RectI32::from_ltrb(l, self.top, r, self.bottom)
            })
            .collect()
    }

    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_columns_covers_rect() {
        let r = RectI32::from_ltwh(0, 0, 1001, 10);
        let cols = r.split_columns(2);
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0], RectI32::from_ltrb(0, 0, 500, 10));
        assert_eq!(cols[1], RectI32::from_ltrb(500, 0, 1001, 10));
    }

    #[test]
    fn inset_never_inverts() {
        let r = RectI32::from_ltwh(0, 0, 20, 20);
        let i = r.inset(&Insets::new(15, 15, 15, 15));
        assert!(i.width() >= 0 && i.height() >= 0);
        assert_eq!(clamp(5, 0, 3), 3);
    }
}
