// File: crates/ma-chart-core/src/geometry.rs
// Summary: Pixel geometry for a moving-average series: bounds, steps, ticks, gridlines and per-point coordinates.
// Notes:
// - Computed once per chart; drawing and hover hit-testing both read the same
//   `step_x`, so the two can never disagree.
// - Degenerate inputs have defined placements: a single point sits on the
//   y axis, a flat series sits on the vertical midpoint.

use crate::error::{ChartError, Result};
use crate::layout::LayoutOptions;
use crate::series::MovingAveragePoint;

/// Axis-aligned rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn contains_x(&self, x: f64) -> bool { x >= self.left && x <= self.right }
}

/// One y-axis tick: the value it reads and where it sits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YTick {
    pub value: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub padding: f64,
    pub chart_width: f64,
    pub chart_height: f64,
    /// Horizontal distance between consecutive points; 0 for a single point.
    pub step_x: f64,
    /// Vertical distance between y ticks.
    pub step_y: f64,
    /// `floor` of the smallest value.
    pub min: f64,
    /// `ceil` of the largest value.
    pub max: f64,
    pub step_on_y_axis: u32,
    coords: Vec<(f64, f64)>,
}

/// Map a moving-average series onto the canvas described by `options`.
pub fn compute_chart_geometry(points: &[MovingAveragePoint], options: &LayoutOptions) -> Result<ChartGeometry> {
    options.validate()?;
    if points.is_empty() {
        return Err(ChartError::invalid("cannot lay out an empty series"));
    }
    if let Some(bad) = points.iter().find(|p| !p.value.is_finite()) {
        return Err(ChartError::invalid(format!("non-finite value {} on {}", bad.value, bad.date)));
    }

    let (lo, hi) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.value), hi.max(p.value)));
    let min = lo.floor();
    let max = hi.ceil();

    let chart_width = options.chart_width();
    let chart_height = options.chart_height();
    let n = points.len();
    let step_x = if n > 1 { chart_width / (n - 1) as f64 } else { 0.0 };
    let step_y = chart_height / options.step_on_y_axis as f64;

    let mut geometry = ChartGeometry {
        canvas_width: options.width,
        canvas_height: options.height,
        padding: options.padding,
        chart_width,
        chart_height,
        step_x,
        step_y,
        min,
        max,
        step_on_y_axis: options.step_on_y_axis,
        coords: Vec::with_capacity(n),
    };
    geometry.coords = points
        .iter()
        .enumerate()
        .map(|(i, p)| (geometry.x_at(i), geometry.y_for(p.value)))
        .collect();

    tracing::debug!(points = n, min, max, step_x, step_y, "computed chart geometry");
    Ok(geometry)
}

impl ChartGeometry {
    /// Number of mapped points.
    pub fn len(&self) -> usize { self.coords.len() }

    pub fn is_empty(&self) -> bool { self.coords.is_empty() }

    /// Pixel position of point `i`, if it exists.
    pub fn point_at(&self, i: usize) -> Option<(f64, f64)> {
        self.coords.get(i).copied()
    }

    /// All mapped points in series order.
    pub fn points(&self) -> &[(f64, f64)] { &self.coords }

    /// A polyline needs at least two points.
    pub fn draws_polyline(&self) -> bool { self.coords.len() >= 2 }

    pub fn plot_rect(&self) -> PlotRect {
        PlotRect::from_ltwh(self.padding, self.padding, self.chart_width, self.chart_height)
    }

    #[inline]
    pub fn x_at(&self, i: usize) -> f64 {
        self.padding + i as f64 * self.step_x
    }

    /// Higher values plot higher (smaller y). A flat range maps to the midpoint.
    #[inline]
    pub fn y_for(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            return self.padding + self.chart_height / 2.0;
        }
        self.padding + self.chart_height * (self.max - value) / span
    }

    /// Ticks from `max` at the top down to `min` at the bottom.
    pub fn y_ticks(&self) -> Vec<YTick> {
        let steps = self.step_on_y_axis as f64;
        (0..=self.step_on_y_axis)
            .map(|i| {
                let i = i as f64;
                YTick {
                    value: self.max - (self.max - self.min) * i / steps,
                    y: self.padding + i * self.step_y,
                }
            })
            .collect()
    }

    /// One vertical gridline per point.
    pub fn x_gridlines(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.x_at(i)).collect()
    }

    /// Index of the point whose column contains canvas x `x`.
    ///
    /// Columns start at each point and run one `step_x` to the right; only x
    /// inside the plot area hits, so the last point owns just the right edge.
    pub fn index_at(&self, x: f64) -> Option<usize> {
        if !x.is_finite() || !self.plot_rect().contains_x(x) {
            return None;
        }
        if self.coords.len() == 1 {
            return Some(0);
        }
        let idx = ((x - self.padding) / self.step_x).floor() as usize;
        Some(idx.min(self.coords.len() - 1))
    }
}
