// File: crates/rates-core/tests/encode.rs
// Purpose: End-to-end checks for the four data encoders.
// Behavior:
// - Pins CSV/Excel output byte-for-byte against known-good strings.
// - Verifies the JSON envelope and that its data block re-imports equal.
// - Verifies the XML document shape and ordering.
// - All exports use a fixed timestamp so output is deterministic.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rates_core::{
    export_data_at, DailyRates, DataFormat, DateRange, ExchangeRates, RateEntry,
};

fn entry(buy: Option<f64>, sell: Option<f64>) -> RateEntry {
    RateEntry::new(buy, sell)
}

/// Three January days; usd quoted on the 1st only, gbp on the 2nd.
fn dataset() -> ExchangeRates {
    let mut data = ExchangeRates::new();

    let mut day1 = DailyRates::new();
    day1.insert("usd".into(), entry(Some(42_000.0), Some(42_500.0)));
    data.insert("2024-01-01".into(), day1);

    let mut day2 = DailyRates::new();
    day2.insert("gbp".into(), entry(Some(53_000.0), None));
    data.insert("2024-01-02".into(), day2);

    data.insert("2024-01-03".into(), DailyRates::new());
    data
}

fn range(start: &str, end: &str) -> DateRange {
    let parse = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
    DateRange::new(parse(start), parse(end))
}

fn stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap()
}

fn codes(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn csv_export_matches_reference_bytes() {
    let payload = export_data_at(
        &dataset(),
        &codes(&["usd"]),
        &range("2024-01-01", "2024-01-03"),
        DataFormat::Csv,
        stamp(),
    )
    .expect("csv export");

    assert_eq!(
        payload.bytes,
        b"Date,USD_Buy,USD_Sell\n2024-01-01,42000,42500"
    );
    assert_eq!(
        payload.filename,
        "rial-exchange-rates-2024-01-01-to-2024-01-03.csv"
    );
    assert_eq!(payload.content_type, "text/csv;charset=utf-8;");
}

#[test]
fn csv_export_is_header_only_when_nothing_matches() {
    let payload = export_data_at(
        &dataset(),
        &codes(&["eur"]),
        &range("2024-01-01", "2024-01-03"),
        DataFormat::Csv,
        stamp(),
    )
    .expect("csv export");

    assert_eq!(payload.bytes, b"Date,EUR_Buy,EUR_Sell");
}

#[test]
fn csv_quotes_cells_with_embedded_commas() {
    // A legacy-format key: no hyphen, so it parses via "%b %d, %Y".
    let mut data = ExchangeRates::new();
    let mut day = DailyRates::new();
    day.insert("usd".into(), entry(Some(42_000.0), Some(42_500.0)));
    data.insert("Jan 2, 2024".into(), day);

    let payload = export_data_at(
        &data,
        &codes(&["usd"]),
        &range("2024-01-01", "2024-01-03"),
        DataFormat::Csv,
        stamp(),
    )
    .expect("csv export");

    assert_eq!(
        String::from_utf8(payload.bytes).unwrap(),
        "Date,USD_Buy,USD_Sell\n\"Jan 2, 2024\",42000,42500"
    );
}

#[test]
fn csv_leaves_missing_quotes_as_empty_cells() {
    let payload = export_data_at(
        &dataset(),
        &codes(&["usd", "gbp"]),
        &range("2024-01-01", "2024-01-02"),
        DataFormat::Csv,
        stamp(),
    )
    .expect("csv export");

    let text = String::from_utf8(payload.bytes).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "Date,USD_Buy,USD_Sell,GBP_Buy,GBP_Sell");
    assert_eq!(lines[1], "2024-01-01,42000,42500,,");
    assert_eq!(lines[2], "2024-01-02,,,53000,");
    assert_eq!(lines.len(), 3);
}

#[test]
fn excel_export_is_bom_prefixed_with_spreadsheet_headers() {
    let payload = export_data_at(
        &dataset(),
        &codes(&["usd"]),
        &range("2024-01-01", "2024-01-03"),
        DataFormat::Excel,
        stamp(),
    )
    .expect("excel export");

    assert!(payload.bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
    let text = String::from_utf8(payload.bytes[3..].to_vec()).unwrap();
    assert_eq!(text, "Date,USD Buy,USD Sell\n2024-01-01,42000,42500");
    assert_eq!(
        payload.filename,
        "rial-exchange-rates-2024-01-01-to-2024-01-03.xlsx"
    );
    assert_eq!(
        payload.content_type,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet;charset=utf-8;"
    );
}

#[test]
fn json_export_carries_metadata_and_reimports_equal() {
    let selection = codes(&["usd", "gbp"]);
    let range = range("2024-01-01", "2024-01-03");
    let payload = export_data_at(&dataset(), &selection, &range, DataFormat::Json, stamp())
        .expect("json export");

    let text = String::from_utf8(payload.bytes).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).expect("valid json");

    assert_eq!(doc["metadata"]["exportDate"], "2024-03-15T10:30:00.000Z");
    assert_eq!(doc["metadata"]["dateRange"]["start"], "2024-01-01");
    assert_eq!(doc["metadata"]["dateRange"]["end"], "2024-01-03");
    assert_eq!(
        doc["metadata"]["currencies"],
        serde_json::json!(["usd", "gbp"])
    );

    // Whole rates serialize as integers, exactly as the feed publishes them.
    assert!(text.contains("\"buy\": 42000"));
    assert!(!text.contains("42000.0"));

    let reimported: ExchangeRates = serde_json::from_value(doc["data"].clone()).expect("data block");
    let expected = rates_core::filter_data(&dataset(), &range, Some(&selection));
    assert_eq!(reimported, expected);

    // Two-space pretty printing.
    assert!(text.starts_with("{\n  \"metadata\""));
}

#[test]
fn json_export_is_deterministic_under_a_fixed_stamp() {
    let selection = codes(&["usd"]);
    let range = range("2024-01-01", "2024-01-03");
    let a = export_data_at(&dataset(), &selection, &range, DataFormat::Json, stamp()).unwrap();
    let b = export_data_at(&dataset(), &selection, &range, DataFormat::Json, stamp()).unwrap();
    assert_eq!(a.bytes, b.bytes);
    assert_eq!(a.filename, "rial-exchange-rates-2024-01-01-to-2024-01-03.json");
}

#[test]
fn xml_export_matches_reference_shape() {
    let payload = export_data_at(
        &dataset(),
        &codes(&["usd"]),
        &range("2024-01-01", "2024-01-01"),
        DataFormat::Xml,
        stamp(),
    )
    .expect("xml export");

    let expected = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<exchangeRates>\n",
        "  <metadata>\n",
        "    <exportDate>2024-03-15T10:30:00.000Z</exportDate>\n",
        "    <dateRange>\n",
        "      <start>2024-01-01</start>\n",
        "      <end>2024-01-01</end>\n",
        "    </dateRange>\n",
        "    <currencies>\n",
        "      <currency>USD</currency>\n",
        "    </currencies>\n",
        "  </metadata>\n",
        "  <data>\n",
        "    <date value=\"2024-01-01\">\n",
        "      <currency code=\"USD\">\n",
        "        <buy>42000</buy>\n",
        "        <sell>42500</sell>\n",
        "      </currency>\n",
        "    </date>\n",
        "  </data>\n",
        "</exchangeRates>\n",
    );
    assert_eq!(String::from_utf8(payload.bytes).unwrap(), expected);
    assert_eq!(payload.content_type, "application/xml;charset=utf-8;");
}

#[test]
fn xml_export_is_deterministic_and_lf_only() {
    let selection = codes(&["usd", "gbp"]);
    let range = range("2024-01-01", "2024-01-03");
    let a = export_data_at(&dataset(), &selection, &range, DataFormat::Xml, stamp()).unwrap();
    let b = export_data_at(&dataset(), &selection, &range, DataFormat::Xml, stamp()).unwrap();
    assert_eq!(a.bytes, b.bytes);
    assert!(!a.bytes.contains(&b'\r'));
}

#[test]
fn xml_export_writes_absent_sides_as_empty_elements() {
    let payload = export_data_at(
        &dataset(),
        &codes(&["gbp"]),
        &range("2024-01-02", "2024-01-02"),
        DataFormat::Xml,
        stamp(),
    )
    .expect("xml export");

    let text = String::from_utf8(payload.bytes).unwrap();
    assert!(text.contains("<buy>53000</buy>"));
    assert!(text.contains("<sell></sell>"));
}

#[test]
fn unparseable_date_keys_never_reach_any_encoder() {
    let mut data = dataset();
    let mut day = DailyRates::new();
    day.insert("usd".into(), entry(Some(99_999.0), Some(99_999.0)));
    data.insert("not-a-date".into(), day);

    for format in [
        DataFormat::Csv,
        DataFormat::Excel,
        DataFormat::Json,
        DataFormat::Xml,
    ] {
        let payload = export_data_at(
            &data,
            &codes(&["usd"]),
            &range("2024-01-01", "2024-01-03"),
            format,
            stamp(),
        )
        .expect("export succeeds despite the bad key");
        let text = String::from_utf8(payload.bytes).unwrap();
        assert!(!text.contains("not-a-date"));
        assert!(!text.contains("99999"));
    }
}

#[test]
fn dates_outside_the_range_are_excluded() {
    let payload = export_data_at(
        &dataset(),
        &codes(&["usd", "gbp"]),
        &range("2024-01-02", "2024-01-02"),
        DataFormat::Csv,
        stamp(),
    )
    .expect("csv export");

    let text = String::from_utf8(payload.bytes).unwrap();
    assert!(!text.contains("2024-01-01"));
    assert!(text.contains("2024-01-02"));
}
