use anyhow::Result;
use chart_core::{Chart, GridLines, RenderOptions, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_bar_chart(n: usize) -> Chart {
    let mut ch = Chart::new();
    ch.categories = (0..n).map(|i| format!("c{i}")).collect();
    ch.label_rotation_deg = 90.0;
    ch.grid = GridLines::Horizontal;
    ch.add_series(Series::bars((0..n).map(|i| ((i * 37) % 101) as f64 * 1000.0).collect()));
    ch.autoscale_axes(0.05);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[38usize, 500usize] {
        group.bench_function(format!("bars_{n}"), |b| {
            let ch = build_bar_chart(n);
            let mut opts = RenderOptions::sized(800, 500);
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
