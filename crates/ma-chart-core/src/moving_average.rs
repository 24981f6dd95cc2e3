// File: crates/ma-chart-core/src/moving_average.rs
// Summary: Trailing-window simple moving average over daily closes.

use crate::error::{ChartError, Result};
use crate::series::{MovingAveragePoint, PricePoint};
use std::iter::Zip;
use std::slice::{Iter, Windows};

/// Lazy trailing-window average.
///
/// Yields one point per index `i >= period`: the mean of the closes at
/// `i - period ..= i - 1`, dated with `series[i]`. The point at `i` itself is
/// never part of its own window.
pub struct MovingAverage<'a> {
    inner: Zip<Windows<'a, PricePoint>, Iter<'a, PricePoint>>,
    period: usize,
}

impl<'a> Iterator for MovingAverage<'a> {
    type Item = MovingAveragePoint;

    fn next(&mut self) -> Option<Self::Item> {
        let (window, as_of) = self.inner.next()?;
        // Sum each window from scratch so a flat series averages back to
        // exactly its own value.
        let sum: f64 = window.iter().map(|p| p.close).sum();
        Some(MovingAveragePoint::new(as_of.date.clone(), sum / self.period as f64))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for MovingAverage<'_> {}

/// Iterator form of [`compute_moving_average`].
pub fn moving_average_iter(series: &[PricePoint], period: usize) -> Result<MovingAverage<'_>> {
    if period == 0 {
        return Err(ChartError::invalid("moving-average period must be positive"));
    }
    // `windows` yields len - period + 1 slices; zipping with the dates from
    // `period` onwards drops the last one, whose "as of" day is not in the data.
    let dates = series.get(period..).unwrap_or(&[]);
    Ok(MovingAverage { inner: series.windows(period).zip(dates.iter()), period })
}

/// Materialized moving average; `len = max(0, series.len() - period)`.
pub fn compute_moving_average(series: &[PricePoint], period: usize) -> Result<Vec<MovingAveragePoint>> {
    let out: Vec<_> = moving_average_iter(series, period)?.collect();
    tracing::trace!(input = series.len(), period, output = out.len(), "computed moving average");
    Ok(out)
}
