// File: crates/ma-chart-core/src/hover.rs
// Summary: Pointer events and tooltip state, renderer-agnostic.

use crate::geometry::ChartGeometry;
use crate::series::MovingAveragePoint;

/// Offset from the pointer's page position to the tooltip's top-left corner.
pub const TOOLTIP_OFFSET: f64 = 10.0;

/// Pointer input relative to the chart.
///
/// `x`/`y` are canvas pixels; `page_x`/`page_y` are wherever the host wants
/// the tooltip anchored (for a standalone canvas, the same as `x`/`y`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move { x: f64, y: f64, page_x: f64, page_y: f64 },
    Leave,
}

impl PointerEvent {
    /// Move event for a host where canvas and page coordinates coincide.
    pub fn at(x: f64, y: f64) -> Self {
        Self::Move { x, y, page_x: x, page_y: y }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub index: usize,
    pub date: String,
    pub value: f64,
    pub text: String,
    pub left: f64,
    pub top: f64,
}

/// `Date: 2023-05-12  MA(20): 126.41`
pub fn tooltip_text(point: &MovingAveragePoint, period: usize) -> String {
    format!("Date: {}  MA({}): {:.2}", point.day_label(), period, point.value)
}

/// Tracks which point (if any) the pointer is over.
pub struct HoverState<'a> {
    geometry: &'a ChartGeometry,
    points: &'a [MovingAveragePoint],
    period: usize,
    current: Option<Tooltip>,
}

impl<'a> HoverState<'a> {
    pub fn new(geometry: &'a ChartGeometry, points: &'a [MovingAveragePoint], period: usize) -> Self {
        Self { geometry, points, period, current: None }
    }

    /// Apply a pointer event; returns the tooltip to show, or `None` to hide it.
    pub fn handle(&mut self, event: PointerEvent) -> Option<&Tooltip> {
        self.current = match event {
            PointerEvent::Move { x, page_x, page_y, .. } => self
                .geometry
                .index_at(x)
                .and_then(|i| self.points.get(i).map(|p| (i, p)))
                .map(|(index, p)| Tooltip {
                    index,
                    date: p.day_label(),
                    value: p.value,
                    text: tooltip_text(p, self.period),
                    left: page_x + TOOLTIP_OFFSET,
                    top: page_y + TOOLTIP_OFFSET,
                }),
            PointerEvent::Leave => None,
        };
        self.current.as_ref()
    }

    pub fn current(&self) -> Option<&Tooltip> {
        self.current.as_ref()
    }
}
