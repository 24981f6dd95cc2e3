// File: crates/ma-chart-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNGs, plus chart construction errors.

use ma_chart_core::{ChartError, LayoutOptions, MaChart, PointerEvent, PricePoint, Theme};

fn ramp(n: usize) -> Vec<PricePoint> {
    (0..n)
        .map(|i| PricePoint::new(format!("2023-04-{:02}T00:00:00.000Z", i + 1), 120.0 + (i as f64 * 0.9).sin() * 4.0))
        .collect()
}

#[test]
fn render_smoke_png() {
    let chart = MaChart::new(&ramp(30), 5, LayoutOptions::default())
        .expect("chart")
        .with_subtitle("IBM, 2023-04-01 to 2023-04-30")
        .with_label("MA(5)");

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&out, None).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works, with a tooltip
    let bytes = chart.render_to_png_bytes(Some(PointerEvent::at(200.0, 150.0))).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn single_point_and_dark_theme_render() {
    let chart = MaChart::new(&ramp(4), 3, LayoutOptions::default().with_stroke_color("#ff8800"))
        .expect("chart")
        .with_theme(Theme::dark());
    assert_eq!(chart.points().len(), 1);
    let bytes = chart.render_to_png_bytes(None).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn decoded_png_matches_canvas_size() {
    let opts = LayoutOptions::default().with_size(320.0, 240.0).with_padding(40.0);
    let chart = MaChart::new(&ramp(12), 2, opts).expect("chart");
    let bytes = chart.render_to_png_bytes(None).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (320, 240));
}

#[test]
fn too_short_series_is_rejected() {
    let err = MaChart::new(&ramp(5), 5, LayoutOptions::default()).err().expect("error");
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn unknown_stroke_color_is_rejected() {
    let opts = LayoutOptions::default().with_stroke_color("not-a-color");
    assert!(MaChart::new(&ramp(10), 2, opts).is_err());
}

// ---- pixel checks ------------------------------------------------------------

const RED: [u8; 4] = [255, 0, 0, 255];

fn flat(n: usize, close: f64) -> Vec<PricePoint> {
    (0..n).map(|i| PricePoint::new(format!("2023-05-{:02}", i + 1), close)).collect()
}

/// 320x240 canvas with a 40 px margin, red stroke and no text.
fn red_chart(series: &[PricePoint], period: usize) -> MaChart {
    let opts = LayoutOptions::default().with_size(320.0, 240.0).with_padding(40.0).with_stroke_color("#ff0000");
    let mut chart = MaChart::new(series, period, opts).expect("chart");
    chart.draw_labels = false;
    chart
}

fn decode(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory(bytes).expect("decode").to_rgba8()
}

fn pixel(img: &image::RgbaImage, x: f64, y: f64) -> [u8; 4] {
    img.get_pixel(x.floor() as u32, y.floor() as u32).0
}

#[test]
fn every_point_gets_a_marker() {
    let chart = red_chart(&ramp(20), 4);
    let img = decode(&chart.render_to_png_bytes(None).expect("render"));
    let g = chart.geometry();
    assert_eq!(g.len(), 16);
    for i in 0..g.len() {
        let (x, y) = g.point_at(i).unwrap();
        assert_eq!(pixel(&img, x, y), RED, "marker {i} at ({x}, {y})");
    }
}

#[test]
fn polyline_joins_consecutive_points() {
    // Flat series: the line runs along the vertical midpoint.
    let chart = red_chart(&flat(8, 50.0), 3);
    let img = decode(&chart.render_to_png_bytes(None).expect("render"));
    let g = chart.geometry();
    assert!(g.draws_polyline());
    for i in 0..g.len() - 1 {
        let (x0, y) = g.point_at(i).unwrap();
        let (x1, _) = g.point_at(i + 1).unwrap();
        assert_eq!(pixel(&img, (x0 + x1) / 2.0, y), RED, "segment {i}");
    }
}

#[test]
fn single_point_has_a_marker_but_no_line() {
    let chart = red_chart(&flat(4, 50.0), 3);
    let img = decode(&chart.render_to_png_bytes(None).expect("render"));
    let g = chart.geometry();
    assert!(!g.draws_polyline());
    let (x, y) = g.point_at(0).unwrap();
    assert_eq!(pixel(&img, x, y), RED);
    // well clear of the radius-3 marker
    let beside = pixel(&img, x + 20.0, y);
    assert_ne!(beside, RED);
    assert!(beside[1] > 100, "expected background or grid, got {beside:?}");
}

#[test]
fn horizontal_gridlines_are_dashed() {
    let chart = red_chart(&flat(8, 50.0), 3);
    let img = decode(&chart.render_to_png_bytes(None).expect("render"));
    let g = chart.geometry();
    // second tick from the top; the series sits lower, on the midline
    let y = g.y_ticks()[1].y;
    let row = y.floor() as u32;
    let (x0, x1) = g.point_at(0).map(|p| p.0).zip(g.point_at(1).map(|p| p.0)).unwrap();
    let greens: Vec<u8> = ((x0 as u32 + 2)..(x1 as u32 - 1))
        .map(|x| img.get_pixel(x, row - 1).0[1].min(img.get_pixel(x, row).0[1]))
        .collect();
    assert!(greens.iter().any(|&v| v < 250), "no dash drawn on row {row}");
    assert!(greens.iter().any(|&v| v == 255), "no gap between dashes on row {row}");
}

#[test]
fn tooltip_box_is_drawn_at_the_pointer() {
    let chart = red_chart(&ramp(20), 4).with_theme(Theme::dark());
    let plain = decode(&chart.render_to_png_bytes(None).expect("render"));
    let event = PointerEvent::at(100.0, 100.0);
    let hovered = decode(&chart.render_to_png_bytes(Some(event)).expect("render"));

    let tip = chart.hover().handle(event).cloned().expect("tooltip");
    assert_eq!((tip.left, tip.top), (110.0, 110.0));
    let changed = (111..121u32)
        .flat_map(|x| (111..121u32).map(move |y| (x, y)))
        .filter(|&(x, y)| plain.get_pixel(x, y) != hovered.get_pixel(x, y))
        .count();
    assert!(changed > 0, "tooltip rect left the canvas untouched");

    // leaving the chart draws nothing extra
    let left = decode(&chart.render_to_png_bytes(Some(PointerEvent::Leave)).expect("render"));
    assert_eq!(left.as_raw(), plain.as_raw());
}

#[test]
fn series_label_does_not_cover_the_line() {
    let mut chart = red_chart(&ramp(20), 4).with_label("MA(4)");
    chart.draw_labels = true;
    let img = decode(&chart.render_to_png_bytes(None).expect("render"));
    let g = chart.geometry();
    for i in 0..g.len() {
        let (x, y) = g.point_at(i).unwrap();
        assert_eq!(pixel(&img, x, y), RED, "marker {i}");
    }
}
