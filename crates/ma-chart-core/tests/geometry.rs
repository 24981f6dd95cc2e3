// File: crates/ma-chart-core/tests/geometry.rs
// Purpose: Pixel mapping of moving-average points, ticks and degenerate layouts.

use ma_chart_core::{compute_chart_geometry, ChartError, LayoutOptions, MovingAveragePoint};

fn points(values: &[f64]) -> Vec<MovingAveragePoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| MovingAveragePoint::new(format!("2023-05-{:02}", i + 10), v))
        .collect()
}

fn square() -> LayoutOptions {
    LayoutOptions::default().with_size(220.0, 220.0).with_padding(60.0).with_steps(5)
}

#[test]
fn three_point_example() {
    let g = compute_chart_geometry(&points(&[10.0, 20.0, 30.0]), &square()).expect("geometry");
    assert_eq!((g.min, g.max), (10.0, 30.0));
    assert_eq!((g.chart_width, g.chart_height), (100.0, 100.0));
    assert_eq!(g.step_x, 50.0);
    assert_eq!(g.step_y, 20.0);
    assert_eq!(g.point_at(0), Some((60.0, 160.0)));
    assert_eq!(g.point_at(1), Some((110.0, 110.0)));
    assert_eq!(g.point_at(2), Some((160.0, 60.0)));
    assert_eq!(g.point_at(3), None);
    assert!(g.draws_polyline());
}

#[test]
fn bounds_round_outwards() {
    let g = compute_chart_geometry(&points(&[125.4, 128.9, 126.2]), &LayoutOptions::default()).unwrap();
    assert_eq!(g.min, 125.0);
    assert_eq!(g.max, 129.0);
    // every point stays inside the plot area
    let r = g.plot_rect();
    for &(x, y) in g.points() {
        assert!(x >= r.left && x <= r.right);
        assert!(y >= r.top && y <= r.bottom);
    }
}

#[test]
fn flat_series_sits_on_the_midline() {
    let g = compute_chart_geometry(&points(&[5.0, 5.0, 5.0]), &square()).unwrap();
    assert_eq!(g.min, g.max);
    for &(_, y) in g.points() {
        assert_eq!(y, g.padding + g.chart_height / 2.0);
    }
    // ticks stay finite too
    assert!(g.y_ticks().iter().all(|t| t.value == 5.0));
}

#[test]
fn single_point_sits_on_the_y_axis() {
    let g = compute_chart_geometry(&points(&[42.3]), &square()).unwrap();
    assert_eq!(g.len(), 1);
    assert_eq!(g.step_x, 0.0);
    let (x, y) = g.point_at(0).unwrap();
    assert_eq!(x, 60.0);
    assert!(y.is_finite());
    assert!(!g.draws_polyline());
}

#[test]
fn y_ticks_run_from_max_down_to_min() {
    let g = compute_chart_geometry(&points(&[10.0, 20.0, 30.0]), &square()).unwrap();
    let ticks = g.y_ticks();
    assert_eq!(ticks.len(), 6);
    let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![30.0, 26.0, 22.0, 18.0, 14.0, 10.0]);
    let ys: Vec<f64> = ticks.iter().map(|t| t.y).collect();
    assert_eq!(ys, vec![60.0, 80.0, 100.0, 120.0, 140.0, 160.0]);
}

#[test]
fn tick_count_follows_step_option() {
    let opts = square().with_steps(4);
    let g = compute_chart_geometry(&points(&[0.0, 8.0]), &opts).unwrap();
    let values: Vec<f64> = g.y_ticks().iter().map(|t| t.value).collect();
    assert_eq!(values, vec![8.0, 6.0, 4.0, 2.0, 0.0]);
}

#[test]
fn vertical_gridlines_match_point_columns() {
    let g = compute_chart_geometry(&points(&[1.0, 2.0, 3.0, 4.0, 5.0]), &square()).unwrap();
    let xs: Vec<f64> = g.points().iter().map(|p| p.0).collect();
    assert_eq!(g.x_gridlines(), xs);
    assert_eq!(xs, vec![60.0, 85.0, 110.0, 135.0, 160.0]);
}

#[test]
fn empty_series_is_invalid() {
    let err = compute_chart_geometry(&[], &square()).unwrap_err();
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn non_finite_values_are_invalid() {
    assert!(compute_chart_geometry(&points(&[1.0, f64::NAN]), &square()).is_err());
    assert!(compute_chart_geometry(&points(&[f64::INFINITY]), &square()).is_err());
}

#[test]
fn index_at_follows_point_columns() {
    let g = compute_chart_geometry(&points(&[10.0, 20.0, 30.0]), &square()).unwrap();
    assert_eq!(g.index_at(59.9), None);
    assert_eq!(g.index_at(60.0), Some(0));
    assert_eq!(g.index_at(109.9), Some(0));
    assert_eq!(g.index_at(110.0), Some(1));
    assert_eq!(g.index_at(159.0), Some(1));
    assert_eq!(g.index_at(160.0), Some(2));
    assert_eq!(g.index_at(160.1), None);
    assert_eq!(g.index_at(f64::NAN), None);
}

#[test]
fn single_point_hit_spans_the_plot() {
    let g = compute_chart_geometry(&points(&[7.0]), &square()).unwrap();
    assert_eq!(g.index_at(60.0), Some(0));
    assert_eq!(g.index_at(155.0), Some(0));
    assert_eq!(g.index_at(10.0), None);
}
