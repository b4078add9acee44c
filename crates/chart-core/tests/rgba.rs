// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::palette::SKY_BLUE;
use chart_core::{Chart, RenderOptions, Series};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.categories = vec!["only".into()];
    chart.add_series(Series::bars(vec![4.0]).with_color(SKY_BLUE));
    chart.autoscale_axes(0.0);

    let mut opts = RenderOptions::sized(200, 200);
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background in top-left pixel (RGBA, light theme is opaque white)
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);

    // Single bar spans the middle of the plot; sample its centre
    let insets = opts.insets;
    let cx = (insets.left as usize + (200 - insets.right as usize)) / 2;
    let cy = (insets.top as usize + (200 - insets.bottom as usize)) / 2;
    let i = cy * stride + cx * 4;
    assert_eq!(&px[i..i + 3], &[0x87, 0xCE, 0xEB]);
}
