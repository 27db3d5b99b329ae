//! Spreadsheet decoding via calamine.
//!
//! The first worksheet is read; its first row supplies the keys for the
//! row objects built from every following non-empty row.

use std::io::Cursor;

use calamine::{Data, Reader};
use serde_json::{Number, Value};

use crate::core::ExportError;

use super::RowObject;

/// Decode the first worksheet of an xlsx/xls/ods workbook into row objects.
pub fn read_spreadsheet(bytes: &[u8]) -> Result<Vec<RowObject>, ExportError> {
    Ok(read_numbered_rows(bytes)?
        .into_iter()
        .map(|(_, row)| row)
        .collect())
}

/// Rows paired with their 1-based sheet row number (the header is row 1).
pub(crate) fn read_numbered_rows(bytes: &[u8]) -> Result<Vec<(usize, RowObject)>, ExportError> {
    let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| ExportError::Format(format!("cannot open workbook: {e}")))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ExportError::Format("workbook contains no worksheet".into()))?
        .map_err(|e| ExportError::Format(format!("cannot read worksheet: {e}")))?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let keys: Vec<Option<String>> = header.iter().map(header_key).collect();

    let mut out = Vec::new();
    for (idx, cells) in rows.enumerate() {
        if cells.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        let mut row = RowObject::new();
        for (key, cell) in keys.iter().zip(cells) {
            if let Some(key) = key {
                row.insert(key.clone(), cell_value(cell));
            }
        }
        out.push((idx + 2, row));
    }
    Ok(out)
}

fn header_key(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.trim().is_empty() => None,
        Data::String(s) => Some(s.trim().to_string()),
        Data::Float(f) => Some(match whole_number(*f) {
            Some(i) => i.to_string(),
            None => f.to_string(),
        }),
        other => Some(other.to_string()),
    }
}

/// xlsx and ods store every number as a float; `1910.0` means `1910`.
fn whole_number(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
        Data::Bool(b) => Value::Bool(*b),
        Data::Int(i) => Value::Number((*i).into()),
        Data::Float(f) => match whole_number(*f) {
            Some(i) => Value::Number(i.into()),
            None => Number::from_f64(*f).map_or(Value::Null, Value::Number),
        },
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| Value::String(d.format("%Y%m%d").to_string()))
            .unwrap_or(Value::Null),
    }
}
