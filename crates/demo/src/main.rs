// File: crates/demo/src/main.rs
// Summary: Demo filters a rate dataset and writes CSV/Excel/JSON/XML plus PNG/SVG/PDF charts to target/out.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rates_chart::PlotSurface;
use rates_core::{
    catalog, dates::parse_date_key, export_data, filter_data, ChartExporter, ChartFormat,
    DailyRates, DataFormat, DateRange, ExchangeRates, RateEntry,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    // Accept a dataset JSON path from the CLI or fall back to a built-in sample
    let data = match std::env::args().nth(1) {
        Some(path) => {
            println!("Using input file: {path}");
            load_rates_json(&path)?
        }
        None => {
            println!("No input file given; using the built-in sample dataset");
            sample_rates()
        }
    };
    println!("Loaded {} dated entries", data.len());

    let currencies = vec!["usd".to_string(), "eur".to_string()];
    for code in &currencies {
        println!("  {} -> {}", code, catalog::display_name(code));
    }

    let range = dataset_range(&data).context("dataset has no parseable date keys")?;
    println!("Export range: {} to {}", range.start, range.end);

    let out_dir = PathBuf::from("target/out");

    for format in [
        DataFormat::Csv,
        DataFormat::Excel,
        DataFormat::Json,
        DataFormat::Xml,
    ] {
        let payload = export_data(&data, &currencies, &range, format)?;
        let path = payload.save_to(&out_dir)?;
        println!("Wrote {} ({} bytes)", path.display(), payload.bytes.len());
    }

    // Chart exports capture a software-rendered plot of the filtered data
    let filtered = filter_data(&data, &range, Some(&currencies));
    let surface = PlotSurface::from_rates(&filtered, "usd", 1024, 640);
    println!("Plotting {} usd quotes", surface.len());

    let exporter = ChartExporter::new();
    for format in [ChartFormat::Png, ChartFormat::Svg, ChartFormat::Pdf] {
        let payload = exporter.export(&surface, format)?;
        let path = payload.save_to(&out_dir)?;
        println!("Wrote {} ({} bytes)", path.display(), payload.bytes.len());
    }

    Ok(())
}

/// Load a bare dataset document: `{ "<date>": { "<code>": { "buy": .. } } }`.
fn load_rates_json(path: &str) -> Result<ExchangeRates> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

/// Tightest range covering every parseable date key in the dataset.
fn dataset_range(data: &ExchangeRates) -> Option<DateRange> {
    let mut dates = data.keys().filter_map(|k| parse_date_key(k));
    let first = dates.next()?;
    let (start, end) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
    Some(DateRange::new(start, end))
}

/// Ninety days of drifting usd/eur quotes; eur skips every eleventh day so
/// absent quotes show up in the output.
fn sample_rates() -> ExchangeRates {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let mut data = ExchangeRates::new();
    for i in 0..90i64 {
        let date = start + chrono::Duration::days(i);
        let wave = (i as f64 / 9.0).sin();
        let usd = 42_000.0 + 140.0 * i as f64 + 600.0 * wave;
        let eur = 46_500.0 + 120.0 * i as f64 - 450.0 * wave;

        let mut day = DailyRates::new();
        day.insert(
            "usd".into(),
            RateEntry::new(Some(usd.round()), Some((usd + 350.0).round())),
        );
        if i % 11 != 0 {
            day.insert(
                "eur".into(),
                RateEntry::new(Some(eur.round()), Some((eur + 400.0).round())),
            );
        }
        data.insert(date.format("%Y-%m-%d").to_string(), day);
    }
    data
}
