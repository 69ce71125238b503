//! Batch input loader.
//!
//! Reads one or many businesses from JSON or CSV. Field names are the
//! camelCase names of [`RawBusinessMetrics`], with an optional `businessId`
//! used only for labelling output. Cell values go through the same lenient
//! coercion as the HTTP payload, so a bad cell never fails a load; only a
//! structurally broken file does.
//!
//! Example CSV:
//!   businessId,monthlyRevenue,costOfDelivery,fixedExpenses,cashOnHand
//!   acme,10000,9000,500,5000

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::{DiagnosticError, DiagnosticResult};
use crate::types::{BusinessRecord, RawBusinessMetrics};

/// Column / key carrying the optional business identifier.
pub const BUSINESS_ID_FIELD: &str = "businessId";

/// Load records from a JSON reader: a single object or an array of objects.
pub fn load_metrics_json<R: Read>(reader: R) -> DiagnosticResult<Vec<BusinessRecord>> {
    let value: Value = serde_json::from_reader(reader)?;
    match value {
        Value::Array(items) => items.into_iter().map(record_from_json).collect(),
        other => Ok(vec![record_from_json(other)?]),
    }
}

/// Load records from a CSV reader with a header row.
pub fn load_metrics_csv<R: Read>(reader: R) -> DiagnosticResult<Vec<BusinessRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(DiagnosticError::CsvHeader)?
        .clone();
    let id_column = headers.iter().position(|h| h == BUSINESS_ID_FIELD);

    let mut records = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        let line = idx + 2;
        let row = result.map_err(|source| DiagnosticError::Csv { line, source })?;
        let metrics: RawBusinessMetrics = row
            .deserialize(Some(&headers))
            .map_err(|source| DiagnosticError::Csv { line, source })?;
        let business_id = id_column
            .and_then(|col| row.get(col))
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        records.push(BusinessRecord {
            business_id,
            metrics,
        });
    }

    Ok(records)
}

/// Load records from a file path. `.csv` files are read as CSV, anything
/// else as JSON.
pub fn load_metrics_file<P: AsRef<Path>>(path: P) -> DiagnosticResult<Vec<BusinessRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| DiagnosticError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        load_metrics_csv(file)
    } else {
        load_metrics_json(file)
    }
}

fn record_from_json(value: Value) -> DiagnosticResult<BusinessRecord> {
    if !value.is_object() {
        return Err(DiagnosticError::UnexpectedJsonShape(json_kind(&value)));
    }
    let business_id = match value.get(BUSINESS_ID_FIELD) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };
    let metrics: RawBusinessMetrics = serde_json::from_value(value)?;
    Ok(BusinessRecord {
        business_id,
        metrics,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
