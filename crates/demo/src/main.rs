// File: crates/demo/src/main.rs
// Summary: Demo loads a daily price fixture, computes its moving average and renders the chart (optionally with a tooltip) to PNG.

mod config;
mod loader;

use anyhow::{Context, Result};
use config::{DemoConfig, USAGE};
use ma_chart_core::{day_label, MaChart};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let Some(cfg) = DemoConfig::from_args(std::env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };

    if !cfg.input.exists() {
        anyhow::bail!("file not found: {}", cfg.input.display());
    }
    info!("Using input file: {}", cfg.input.display());

    let series = loader::load_series(&cfg.input)
        .with_context(|| format!("failed to load '{}'", cfg.input.display()))?;
    info!("Loaded {} daily records", series.len());

    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        anyhow::bail!("no records loaded; check headers/format.");
    };
    let subtitle = cfg.subtitle.clone().unwrap_or_else(|| {
        format!("{}, {} to {}", cfg.symbol(), day_label(&first.date), day_label(&last.date))
    });

    let mut chart = MaChart::new(&series, cfg.period, cfg.layout.clone())
        .context("cannot build chart")?
        .with_subtitle(subtitle)
        .with_theme(cfg.theme);
    if let Some(label) = &cfg.label {
        chart = chart.with_label(label.as_str());
    }

    let g = chart.geometry();
    info!(
        "MA({}) over {} points, value range [{:.1}, {:.1}]",
        cfg.period,
        chart.points().len(),
        g.min,
        g.max
    );

    if let Some(event) = cfg.hover {
        match chart.hover().handle(event) {
            Some(tip) => info!("Tooltip: {}", tip.text),
            None => info!("Pointer is not over any point; no tooltip"),
        }
    }

    chart.render_to_png(&cfg.output, cfg.hover)?;
    info!("Wrote {}", cfg.output.display());
    Ok(())
}
