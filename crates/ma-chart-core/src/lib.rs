// File: crates/ma-chart-core/src/lib.rs
// Summary: Core library entry point; exports the moving-average calculator, chart geometry, hover model and renderer.

pub mod chart;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod layout;
pub mod moving_average;
pub mod series;
pub mod theme;

pub use chart::MaChart;
pub use error::ChartError;
pub use geometry::{compute_chart_geometry, ChartGeometry, PlotRect, YTick};
pub use hover::{tooltip_text, HoverState, PointerEvent, Tooltip};
pub use layout::LayoutOptions;
pub use moving_average::{compute_moving_average, moving_average_iter, MovingAverage};
pub use series::{day_label, MovingAveragePoint, PricePoint};
pub use theme::Theme;
