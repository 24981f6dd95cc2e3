// File: crates/demo/src/config.rs
// Summary: Command-line options for the demo and their mapping onto chart layout options.

use anyhow::{bail, Context, Result};
use ma_chart_core::{theme, LayoutOptions, PointerEvent, Theme};
use std::path::PathBuf;

pub const USAGE: &str = "usage: ma-chart [INPUT.json|INPUT.csv] [--period N] [--width W] [--height H] \
[--padding P] [--steps S] [--color C] [--theme light|dark] [--label TEXT] [--symbol SYM] \
[--subtitle TEXT] [--hover X,Y] [--out PATH]";

#[derive(Debug)]
pub struct DemoConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub period: usize,
    pub layout: LayoutOptions,
    pub theme: Theme,
    pub label: Option<String>,
    pub symbol: Option<String>,
    pub subtitle: Option<String>,
    pub hover: Option<PointerEvent>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data/ibm_daily.json")),
            output: PathBuf::from("target/out/ma_chart.png"),
            period: 20,
            layout: LayoutOptions::default(),
            theme: Theme::default(),
            label: None,
            symbol: None,
            subtitle: None,
            hover: None,
        }
    }
}

impl DemoConfig {
    /// Parse arguments (without the program name). Returns `None` for `--help`.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Option<Self>> {
        let mut cfg = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value = |flag: &str| args.next().with_context(|| format!("{flag} needs a value"));
            match arg.as_str() {
                "-h" | "--help" => return Ok(None),
                "--period" => cfg.period = parse_num(&value("--period")?, "--period")?,
                "--width" => cfg.layout.width = parse_num(&value("--width")?, "--width")?,
                "--height" => cfg.layout.height = parse_num(&value("--height")?, "--height")?,
                "--padding" => cfg.layout.padding = parse_num(&value("--padding")?, "--padding")?,
                "--steps" => cfg.layout.step_on_y_axis = parse_num(&value("--steps")?, "--steps")?,
                "--color" => cfg.layout.stroke_color = value("--color")?,
                "--theme" => cfg.theme = theme::find(&value("--theme")?)?,
                "--label" => cfg.label = Some(value("--label")?),
                "--symbol" => cfg.symbol = Some(value("--symbol")?),
                "--subtitle" => cfg.subtitle = Some(value("--subtitle")?),
                "--hover" => cfg.hover = Some(parse_hover(&value("--hover")?)?),
                "--out" => cfg.output = PathBuf::from(value("--out")?),
                flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
                path => cfg.input = PathBuf::from(path),
            }
        }
        Ok(Some(cfg))
    }

    /// Ticker shown in the subtitle: `--symbol`, else the input's stem up to
    /// the first `_` (`ibm_daily.json` -> `IBM`).
    pub fn symbol(&self) -> String {
        if let Some(s) = &self.symbol {
            return s.clone();
        }
        self.input
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.split('_').next())
            .filter(|s| !s.is_empty())
            .unwrap_or("series")
            .to_uppercase()
    }
}

fn parse_num<T: std::str::FromStr>(raw: &str, flag: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim().parse::<T>().with_context(|| format!("{flag}: cannot parse '{raw}'"))
}

/// `X,Y` in canvas pixels.
fn parse_hover(raw: &str) -> Result<PointerEvent> {
    let (x, y) = raw.split_once(',').with_context(|| format!("--hover expects X,Y, got '{raw}'"))?;
    Ok(PointerEvent::at(parse_num(x, "--hover")?, parse_num(y, "--hover")?))
}
