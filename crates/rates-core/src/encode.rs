// File: crates/rates-core/src/encode.rs
// Summary: Tabular encoders (CSV, Excel-flavored CSV, JSON, XML) over a filtered dataset.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::{ExportError, Result};
use crate::filter::filter_data;
use crate::model::{DateRange, ExchangeRates};
use crate::payload::{content_type, data_filename, Payload};

const UTF8_BOM: &str = "\u{feff}";

/// The closed set of data export encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    /// CSV with a UTF-8 BOM and spreadsheet-style headers, delivered under
    /// an `.xlsx` name and MIME type so Excel opens it directly. Kept as-is
    /// for compatibility; this is not binary Excel.
    Excel,
    Json,
    Xml,
}

impl DataFormat {
    pub fn extension(self) -> &'static str {
        match self {
            DataFormat::Csv => "csv",
            DataFormat::Excel => "xlsx",
            DataFormat::Json => "json",
            DataFormat::Xml => "xml",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            DataFormat::Csv => content_type::CSV,
            DataFormat::Excel => content_type::EXCEL,
            DataFormat::Json => content_type::JSON,
            DataFormat::Xml => content_type::XML,
        }
    }
}

/// Provenance block embedded in JSON and XML exports.
///
/// Field names serialize in camelCase to stay byte-compatible with
/// documents produced by the original web exporter.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub export_date: String,
    pub date_range: RangeStamp,
    pub currencies: Vec<String>,
}

/// ISO-formatted range endpoints, as they appear inside metadata.
#[derive(Clone, Debug, Serialize)]
pub struct RangeStamp {
    pub start: String,
    pub end: String,
}

impl ExportMetadata {
    pub fn new(range: &DateRange, currencies: &[String], exported_at: DateTime<Utc>) -> Self {
        Self {
            export_date: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            date_range: RangeStamp {
                start: range.start.format("%Y-%m-%d").to_string(),
                end: range.end.format("%Y-%m-%d").to_string(),
            },
            currencies: currencies.to_vec(),
        }
    }
}

/// Filter, project, and encode in one call, stamped with the current time.
pub fn export_data(
    data: &ExchangeRates,
    currencies: &[String],
    range: &DateRange,
    format: DataFormat,
) -> Result<Payload> {
    export_data_at(data, currencies, range, format, Utc::now())
}

/// As [`export_data`] with an explicit timestamp, for deterministic output.
pub fn export_data_at(
    data: &ExchangeRates,
    currencies: &[String],
    range: &DateRange,
    format: DataFormat,
    exported_at: DateTime<Utc>,
) -> Result<Payload> {
    let filtered = filter_data(data, range, Some(currencies));
    let bytes = match format {
        DataFormat::Csv => encode_csv(&filtered, currencies, HeaderStyle::Underscore)?,
        DataFormat::Excel => encode_excel(&filtered, currencies)?,
        DataFormat::Json => encode_json(&filtered, currencies, range, exported_at)?,
        DataFormat::Xml => encode_xml(&filtered, currencies, range, exported_at).into_bytes(),
    };
    Ok(Payload::new(
        data_filename(range, format.extension()),
        format.content_type(),
        bytes,
    ))
}

#[derive(Clone, Copy)]
enum HeaderStyle {
    /// `USD_Buy` / `USD_Sell`
    Underscore,
    /// `USD Buy` / `USD Sell`, friendlier as spreadsheet column titles
    Space,
}

/// Stringify a rate the way the reference output does: `Display` form,
/// empty cell when absent. Whole floats print with no decimal point.
fn fmt_rate(rate: Option<f64>) -> String {
    match rate {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

fn encode_csv(
    data: &ExchangeRates,
    currencies: &[String],
    style: HeaderStyle,
) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = Vec::with_capacity(1 + currencies.len() * 2);
    header.push("Date".to_string());
    for code in currencies {
        let code = code.to_uppercase();
        match style {
            HeaderStyle::Underscore => {
                header.push(format!("{code}_Buy"));
                header.push(format!("{code}_Sell"));
            }
            HeaderStyle::Space => {
                header.push(format!("{code} Buy"));
                header.push(format!("{code} Sell"));
            }
        }
    }
    writer
        .write_record(&header)
        .map_err(|e| ExportError::Csv(e.to_string()))?;

    for (date, day) in data {
        let mut row = Vec::with_capacity(header.len());
        row.push(date.clone());
        for code in currencies {
            let entry = day.get(code);
            row.push(fmt_rate(entry.and_then(|e| e.buy)));
            row.push(fmt_rate(entry.and_then(|e| e.sell)));
        }
        writer
            .write_record(&row)
            .map_err(|e| ExportError::Csv(e.to_string()))?;
    }

    let mut bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.to_string()))?;
    // rows are newline-joined, never newline-terminated
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(bytes)
}

fn encode_excel(data: &ExchangeRates, currencies: &[String]) -> Result<Vec<u8>> {
    let mut bytes = UTF8_BOM.as_bytes().to_vec();
    bytes.extend(encode_csv(data, currencies, HeaderStyle::Space)?);
    Ok(bytes)
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    metadata: ExportMetadata,
    data: &'a ExchangeRates,
}

/// Pretty-printed (two-space) JSON document with a metadata envelope. The
/// `data` block re-imports as an [`ExchangeRates`] value equal to the
/// filtered input.
fn encode_json(
    data: &ExchangeRates,
    currencies: &[String],
    range: &DateRange,
    exported_at: DateTime<Utc>,
) -> Result<Vec<u8>> {
    let doc = ExportDocument {
        metadata: ExportMetadata::new(range, currencies, exported_at),
        data,
    };
    Ok(serde_json::to_string_pretty(&doc)?.into_bytes())
}

/// Hand-assembled XML mirroring the reference exporter's exact shape.
///
/// Text content is written as-is: every value here is a numeral, an ISO
/// date, or an uppercased code, none of which need entity escaping.
fn encode_xml(
    data: &ExchangeRates,
    currencies: &[String],
    range: &DateRange,
    exported_at: DateTime<Utc>,
) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<exchangeRates>\n");
    xml.push_str("  <metadata>\n");
    xml.push_str(&format!(
        "    <exportDate>{}</exportDate>\n",
        exported_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));
    xml.push_str("    <dateRange>\n");
    xml.push_str(&format!(
        "      <start>{}</start>\n",
        range.start.format("%Y-%m-%d")
    ));
    xml.push_str(&format!(
        "      <end>{}</end>\n",
        range.end.format("%Y-%m-%d")
    ));
    xml.push_str("    </dateRange>\n");
    xml.push_str("    <currencies>\n");
    for code in currencies {
        xml.push_str(&format!(
            "      <currency>{}</currency>\n",
            code.to_uppercase()
        ));
    }
    xml.push_str("    </currencies>\n");
    xml.push_str("  </metadata>\n");
    xml.push_str("  <data>\n");
    for (date, day) in data {
        xml.push_str(&format!("    <date value=\"{date}\">\n"));
        for code in currencies {
            if let Some(entry) = day.get(code) {
                xml.push_str(&format!(
                    "      <currency code=\"{}\">\n",
                    code.to_uppercase()
                ));
                xml.push_str(&format!("        <buy>{}</buy>\n", fmt_rate(entry.buy)));
                xml.push_str(&format!("        <sell>{}</sell>\n", fmt_rate(entry.sell)));
                xml.push_str("      </currency>\n");
            }
        }
        xml.push_str("    </date>\n");
    }
    xml.push_str("  </data>\n");
    xml.push_str("</exchangeRates>\n");
    xml
}
