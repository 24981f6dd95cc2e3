// File: crates/ma-chart-core/src/chart.rs
// Summary: Moving-average chart model and headless PNG rendering using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::error::ChartError;
use crate::geometry::{compute_chart_geometry, ChartGeometry};
use crate::hover::{HoverState, PointerEvent, Tooltip};
use crate::layout::LayoutOptions;
use crate::moving_average::compute_moving_average;
use crate::series::{MovingAveragePoint, PricePoint};
use crate::theme::{parse_color, Theme};

const TITLE_SIZE: f32 = 16.0;
const LABEL_SIZE: f32 = 12.0;
const MARKER_RADIUS: f32 = 3.0;
const LINE_WIDTH: f32 = 2.0;
const DASH: [f32; 2] = [5.0, 5.0];

/// A single moving-average series laid out on a fixed-size canvas.
///
/// Geometry is computed once in [`MaChart::new`]; the layout options are
/// read-only afterwards so drawing and hover hit-testing share it.
pub struct MaChart {
    points: Vec<MovingAveragePoint>,
    period: usize,
    options: LayoutOptions,
    stroke: skia::Color,
    geometry: ChartGeometry,
    pub title: String,
    pub subtitle: Option<String>,
    /// Series name drawn above the plot's right edge; `None` leaves the series unlabeled.
    pub label: Option<String>,
    pub theme: Theme,
    /// Draw text (title, tick and date labels). Off for pixel-exact snapshots.
    pub draw_labels: bool,
}

impl MaChart {
    pub fn new(series: &[PricePoint], period: usize, options: LayoutOptions) -> Result<Self, ChartError> {
        let points = compute_moving_average(series, period)?;
        if points.is_empty() {
            return Err(ChartError::invalid(format!(
                "{} records are not enough for a {}-day moving average",
                series.len(),
                period
            )));
        }
        Self::from_points(points, period, options)
    }

    /// Build from an already averaged series.
    pub fn from_points(points: Vec<MovingAveragePoint>, period: usize, options: LayoutOptions) -> Result<Self, ChartError> {
        let geometry = compute_chart_geometry(&points, &options)?;
        let stroke = parse_color(&options.stroke_color)?;
        Ok(Self {
            title: format!("{period} Days Moving Average(MA)"),
            subtitle: None,
            label: None,
            theme: Theme::default(),
            draw_labels: true,
            points,
            period,
            options,
            stroke,
            geometry,
        })
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn points(&self) -> &[MovingAveragePoint] { &self.points }
    pub fn period(&self) -> usize { self.period }
    pub fn options(&self) -> &LayoutOptions { &self.options }
    pub fn geometry(&self) -> &ChartGeometry { &self.geometry }

    /// Fresh hover tracker bound to this chart's geometry.
    pub fn hover(&self) -> HoverState<'_> {
        HoverState::new(&self.geometry, &self.points, self.period)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        output_png_path: impl AsRef<std::path::Path>,
        hover: Option<PointerEvent>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(hover)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to in-memory PNG bytes. `hover` draws the tooltip that pointer
    /// event would show, if any.
    pub fn render_to_png_bytes(&self, hover: Option<PointerEvent>) -> Result<Vec<u8>> {
        let (w, h) = (self.options.width.round() as i32, self.options.height.round() as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(self.theme.background);

        let g = &self.geometry;
        let font = make_font(LABEL_SIZE);

        if self.draw_labels {
            self.draw_titles(canvas);
        }
        draw_axes(canvas, g, &self.theme);
        draw_gridlines(canvas, g, &self.theme);
        if self.draw_labels {
            draw_y_labels(canvas, g, &self.theme, &font);
            draw_x_labels(canvas, g, &self.points, &self.theme, &font);
        }
        draw_line_series(canvas, g, self.stroke);
        if let (true, Some(label)) = (self.draw_labels, &self.label) {
            draw_series_label(canvas, g, label, self.stroke, &self.theme, &font);
        }

        if let Some(event) = hover {
            let mut state = self.hover();
            if let Some(tip) = state.handle(event) {
                tracing::debug!(index = tip.index, text = %tip.text, "drawing tooltip");
                draw_tooltip(canvas, tip, &self.theme, &font);
            }
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        tracing::debug!(width = w, height = h, bytes = data.as_bytes().len(), "rendered chart");
        Ok(data.as_bytes().to_vec())
    }

    fn draw_titles(&self, canvas: &skia::Canvas) {
        let paint = fill_paint(self.theme.text);
        let cx = (self.options.width / 2.0) as f32;
        let cy = (self.options.padding / 2.0) as f32;
        draw_centered(canvas, &self.title, cx, cy, &make_font(TITLE_SIZE), &paint);
        if let Some(sub) = &self.subtitle {
            draw_centered(canvas, sub, cx, cy + 20.0, &make_font(LABEL_SIZE), &paint);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn make_font(size: f32) -> skia::Font {
    let mut font = skia::FontMgr::default()
        .legacy_make_typeface(None, skia::FontStyle::normal())
        .map(|tf| skia::Font::from_typeface(tf, size))
        .unwrap_or_default();
    font.set_size(size);
    font
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

/// Text centered horizontally on `cx` and vertically (roughly) on `cy`.
fn draw_centered(canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, font: &skia::Font, paint: &skia::Paint) {
    let (width, _) = font.measure_str(text, None);
    canvas.draw_str(text, (cx - width / 2.0, cy + font.size() * 0.35), font, paint);
}

fn draw_axes(canvas: &skia::Canvas, g: &ChartGeometry, theme: &Theme) {
    let r = g.plot_rect();
    let paint = stroke_paint(theme.axis_line, 1.0);
    let (l, t, rt, b) = (r.left as f32, r.top as f32, r.right as f32, r.bottom as f32);
    canvas.draw_line((l, t), (l, b), &paint);
    canvas.draw_line((l, b), (rt, b), &paint);
}

fn draw_gridlines(canvas: &skia::Canvas, g: &ChartGeometry, theme: &Theme) {
    let r = g.plot_rect();
    let mut paint = stroke_paint(theme.grid, 1.0);
    paint.set_path_effect(skia::PathEffect::dash(&DASH, 0.0));

    // horizontals, one per y tick
    for tick in g.y_ticks() {
        let y = tick.y as f32;
        canvas.draw_line((r.left as f32, y), (r.right as f32, y), &paint);
    }
    // verticals, one per point
    for x in g.x_gridlines() {
        let x = x as f32;
        canvas.draw_line((x, r.top as f32), (x, r.bottom as f32), &paint);
    }
}

fn draw_y_labels(canvas: &skia::Canvas, g: &ChartGeometry, theme: &Theme, font: &skia::Font) {
    let paint = fill_paint(theme.text);
    let cx = (g.padding / 2.0) as f32;
    for tick in g.y_ticks() {
        draw_centered(canvas, &format!("{:.1}", tick.value), cx, tick.y as f32, font, &paint);
    }
}

/// Date labels hang below the x axis, rotated 45° clockwise.
fn draw_x_labels(
    canvas: &skia::Canvas,
    g: &ChartGeometry,
    points: &[MovingAveragePoint],
    theme: &Theme,
    font: &skia::Font,
) {
    let paint = fill_paint(theme.text);
    let y = (g.canvas_height - g.padding + 5.0) as f32;
    for (i, p) in points.iter().enumerate() {
        canvas.save();
        canvas.translate((g.x_at(i) as f32, y));
        canvas.rotate(45.0, None);
        canvas.draw_str(p.day_label(), (0.0, font.size()), font, &paint);
        canvas.restore();
    }
}

fn draw_series_label(
    canvas: &skia::Canvas,
    g: &ChartGeometry,
    label: &str,
    stroke: skia::Color,
    theme: &Theme,
    font: &skia::Font,
) {
    let r = g.plot_rect();
    let (width, _) = font.measure_str(label, None);
    let baseline = (r.top - 8.0) as f32;
    let text_x = r.right as f32 - width;
    let swatch = stroke_paint(stroke, LINE_WIDTH);
    let mid = baseline - font.size() * 0.35;
    canvas.draw_line((text_x - 22.0, mid), (text_x - 6.0, mid), &swatch);
    canvas.draw_str(label, (text_x, baseline), font, &fill_paint(theme.text));
}

fn draw_line_series(canvas: &skia::Canvas, g: &ChartGeometry, color: skia::Color) {
    let pts = g.points();

    if g.draws_polyline() {
        let mut path = skia::Path::new();
        let (x0, y0) = pts[0];
        path.move_to((x0 as f32, y0 as f32));
        for &(x, y) in pts.iter().skip(1) {
            path.line_to((x as f32, y as f32));
        }
        canvas.draw_path(&path, &stroke_paint(color, LINE_WIDTH));
    }

    let marker = fill_paint(color);
    for &(x, y) in pts {
        canvas.draw_circle((x as f32, y as f32), MARKER_RADIUS, &marker);
    }
}

fn draw_tooltip(canvas: &skia::Canvas, tip: &Tooltip, theme: &Theme, font: &skia::Font) {
    let (text_w, _) = font.measure_str(&tip.text, None);
    let pad = 6.0f32;
    let rect = skia::Rect::from_xywh(
        tip.left as f32,
        tip.top as f32,
        text_w + pad * 2.0,
        font.size() + pad * 2.0,
    );
    canvas.draw_rect(rect, &fill_paint(theme.tooltip_fill));
    canvas.draw_rect(rect, &stroke_paint(theme.tooltip_border, 1.0));
    canvas.draw_str(
        &tip.text,
        (rect.left + pad, rect.top + pad + font.size() * 0.85),
        font,
        &fill_paint(theme.text),
    );
}
