// File: crates/demo/src/loader.rs
// Summary: Load daily price records from a JSON array or a CSV file, keeping date and close only.

use anyhow::{Context, Result};
use ma_chart_core::PricePoint;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// One element of the JSON fixture; other OHLCV fields are ignored.
#[derive(Debug, Deserialize)]
struct JsonRecord {
    date: String,
    close: f64,
}

/// Pick the loader by file extension (`.json`, otherwise CSV).
pub fn load_series(path: &Path) -> Result<Vec<PricePoint>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let is_json = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        load_json(file).with_context(|| format!("parsing JSON {}", path.display()))
    } else {
        load_csv(file).with_context(|| format!("parsing CSV {}", path.display()))
    }
}

pub fn load_json<R: Read>(reader: R) -> Result<Vec<PricePoint>> {
    let records: Vec<JsonRecord> = serde_json::from_reader(reader)?;
    Ok(records.into_iter().map(|r| PricePoint::new(r.date, r.close)).collect())
}

/// CSV with a header row. Rows whose close does not parse are skipped.
pub fn load_csv<R: Read>(reader: R) -> Result<Vec<PricePoint>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_date = idx(&["date", "time", "timestamp", "datetime"])
        .ok_or_else(|| anyhow::anyhow!("no date column in headers {:?}", headers))?;
    let i_close = idx(&["close", "c", "adj_close", "close_price"])
        .ok_or_else(|| anyhow::anyhow!("no close column in headers {:?}", headers))?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let date = rec.get(i_date).map(str::trim).unwrap_or_default();
        match rec.get(i_close).and_then(|s| s.trim().parse::<f64>().ok()) {
            Some(close) if !date.is_empty() => out.push(PricePoint::new(date, close)),
            _ => warn!(row = row + 1, "skipping row without a usable date/close"),
        }
    }
    Ok(out)
}
