// File: crates/ma-chart-core/src/layout.rs
// Summary: Layout options (canvas size, padding, y-axis steps, stroke color) and their validation.

use crate::error::{ChartError, Result};

/// Default canvas width in pixels.
pub const WIDTH: f64 = 600.0;
/// Default canvas height in pixels.
pub const HEIGHT: f64 = 400.0;
/// Default margin reserved around the plot area for titles and labels.
pub const PADDING: f64 = 60.0;
/// Default number of y-axis intervals (ticks are `STEPS + 1`).
pub const STEPS_ON_Y_AXIS: u32 = 5;
/// Largest canvas side the raster renderer accepts, in pixels.
pub const MAX_DIMENSION: f64 = 16_384.0;

/// Options for laying out one moving-average chart.
///
/// `stroke_color` only matters to the renderer; the mapper ignores it.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutOptions {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub step_on_y_axis: u32,
    pub stroke_color: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
            step_on_y_axis: STEPS_ON_Y_AXIS,
            stroke_color: "green".to_string(),
        }
    }
}

impl LayoutOptions {
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_steps(mut self, step_on_y_axis: u32) -> Self {
        self.step_on_y_axis = step_on_y_axis;
        self
    }

    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = color.into();
        self
    }

    /// Plot-area width: canvas width minus padding on both sides.
    pub fn chart_width(&self) -> f64 {
        self.width - self.padding * 2.0
    }

    /// Plot-area height: canvas height minus padding on both sides.
    pub fn chart_height(&self) -> f64 {
        self.height - self.padding * 2.0
    }

    /// Reject layouts that leave no room to plot.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::invalid(format!("width must be positive, got {}", self.width)));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ChartError::invalid(format!("height must be positive, got {}", self.height)));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ChartError::invalid(format!(
                "{}x{} canvas exceeds the {MAX_DIMENSION} px limit per side",
                self.width, self.height
            )));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ChartError::invalid(format!("padding must be non-negative, got {}", self.padding)));
        }
        if self.chart_width() <= 0.0 || self.chart_height() <= 0.0 {
            return Err(ChartError::invalid(format!(
                "padding {} leaves no plot area in a {}x{} canvas",
                self.padding, self.width, self.height
            )));
        }
        if self.step_on_y_axis == 0 {
            return Err(ChartError::invalid("step_on_y_axis must be at least 1"));
        }
        Ok(())
    }
}
