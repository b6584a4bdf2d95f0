use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::bar::Candle;
use crate::constant::DataError;

#[derive(Debug, Deserialize)]
struct CsvCandleRow {
    #[serde(alias = "timestamp", alias = "time")]
    datetime: String,
    #[serde(alias = "open_price")]
    open: f64,
    #[serde(alias = "high_price")]
    high: f64,
    #[serde(alias = "low_price")]
    low: f64,
    #[serde(alias = "close_price")]
    close: f64,
    #[serde(default)]
    volume: f64,
}

/// Reads candles from a headed CSV file, oldest row first.
pub fn load_candles_csv(file_path: impl AsRef<Path>) -> Result<Vec<Candle>, DataError> {
    let reader = csv::Reader::from_path(file_path)?;
    collect_rows(reader)
}

pub fn read_candles_csv<R: Read>(input: R) -> Result<Vec<Candle>, DataError> {
    collect_rows(csv::Reader::from_reader(input))
}

fn collect_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Candle>, DataError> {
    let mut out = Vec::new();
    for row in reader.deserialize::<CsvCandleRow>() {
        let row = row?;
        out.push(Candle {
            timestamp: parse_timestamp_ms(&row.datetime)?,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        });
    }
    Ok(out)
}

/// Accepts epoch milliseconds, RFC 3339, or a few naive UTC layouts.
///
/// A bare 14-digit value is read as `%Y%m%d%H%M%S`, not as milliseconds.
pub fn parse_timestamp_ms(value: &str) -> Result<i64, DataError> {
    let value = value.trim();
    let all_digits = !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());
    if all_digits && value.len() != 14 {
        if let Ok(ms) = value.parse::<i64>() {
            return Ok(ms);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc).timestamp_millis());
    }

    let patterns = [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y/%m/%d %H:%M:%S%.f",
        "%Y%m%d%H%M%S%.f",
    ];

    for pattern in patterns {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Ok(dt.and_utc().timestamp_millis());
        }
    }

    if let Ok(ms) = value.parse::<i64>() {
        return Ok(ms);
    }

    Err(DataError::InvalidDatetime(value.to_string()))
}
