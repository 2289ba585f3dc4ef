use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, AsArray, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::{Deserialize, Serialize};

use super::model::ParameterTable;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a parameter table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` – Parquet file with one Utf8 column per label
/// * `.json`    – `{ "labels": [...], "parameters": [[...], ...] }`
/// * `.csv`     – header row holds the labels, each record is one row
///
/// Whatever the format, the result goes through [`ParameterTable::new`], so
/// a malformed table is rejected here and not at consumption time.
pub fn load_file(path: &Path) -> Result<ParameterTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// On-disk JSON document. Field names match the upstream datafile convention:
///
/// ```json
/// {
///   "labels": ["col1", "col2"],
///   "parameters": [["a", "b"], ["c", "d"]]
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonDocument {
    pub labels: Vec<String>,
    pub parameters: Vec<Vec<String>>,
}

fn load_json(path: &Path) -> Result<ParameterTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let doc: JsonDocument = serde_json::from_str(&text).context("parsing JSON")?;
    Ok(ParameterTable::new(doc.labels, doc.parameters)?)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with the labels, one record per candidate row.
///
/// The reader runs in flexible mode: a record with the wrong number of
/// fields must surface as the table's own shape error, not as a csv-crate
/// parse failure.
fn load_csv(path: &Path) -> Result<ParameterTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;

    let labels: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(|v| v.to_string()).collect());
    }

    Ok(ParameterTable::new(labels, rows)?)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing a parameter table.
///
/// Expected schema: one Utf8 (or LargeUtf8) column per label, in label
/// order. Every cell must be present; the table contract has no notion of
/// a null value.
fn load_parquet(path: &Path) -> Result<ParameterTable> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;

    let labels: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();

    let reader = builder.build().context("building parquet reader")?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let n_rows = batch.num_rows();

        let columns: Vec<Vec<String>> = batch
            .columns()
            .iter()
            .enumerate()
            .map(|(j, col)| {
                extract_string_column(col, n_rows)
                    .with_context(|| format!("column '{}'", labels[j]))
            })
            .collect::<Result<_>>()?;

        for row in 0..n_rows {
            rows.push(columns.iter().map(|col| col[row].clone()).collect());
        }
    }

    Ok(ParameterTable::new(labels, rows)?)
}

// -- Parquet / Arrow helpers --

/// Extract all values of a Utf8 / LargeUtf8 column as owned strings.
fn extract_string_column(col: &Arc<dyn Array>, n_rows: usize) -> Result<Vec<String>> {
    for row in 0..n_rows {
        if col.is_null(row) {
            bail!("null value at row {row}; all table values must be strings");
        }
    }

    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok((0..n_rows).map(|i| arr.value(i).to_string()).collect())
        }
        DataType::LargeUtf8 => {
            let arr = col.as_string::<i64>();
            Ok((0..n_rows).map(|i| arr.value(i).to_string()).collect())
        }
        other => bail!("Expected Utf8 column, got {other:?}"),
    }
}
