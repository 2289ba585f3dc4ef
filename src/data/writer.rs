use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use super::loader::JsonDocument;
use super::model::ParameterTable;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write a parameter table to a file.  Dispatch by extension, inverse of
/// [`super::loader::load_file`]: loading the written file yields an equal
/// table.
///
/// CSV and Parquet cannot represent a zero-column table, so those writers
/// reject the empty table rather than emit a file the loader could not read
/// back. JSON handles it fine.
pub fn write_file(table: &ParameterTable, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => write_parquet(table, path),
        "json" => write_json(table, path),
        "csv" => write_csv(table, path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON writer
// ---------------------------------------------------------------------------

fn write_json(table: &ParameterTable, path: &Path) -> Result<()> {
    let doc = JsonDocument {
        labels: table.labels().to_vec(),
        parameters: table.rows().to_vec(),
    };
    let text = serde_json::to_string_pretty(&doc).context("serializing JSON")?;
    std::fs::write(path, text).context("writing JSON file")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

fn write_csv(table: &ParameterTable, path: &Path) -> Result<()> {
    if table.width() == 0 {
        bail!("a zero-column table has no CSV representation");
    }

    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    writer
        .write_record(table.labels())
        .context("writing CSV header")?;
    for (row_no, row) in table.rows().iter().enumerate() {
        writer
            .write_record(row)
            .with_context(|| format!("writing CSV row {row_no}"))?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Parquet writer
// ---------------------------------------------------------------------------

fn write_parquet(table: &ParameterTable, path: &Path) -> Result<()> {
    let batch = to_record_batch(table)?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer =
        ArrowWriter::try_new(file, batch.schema(), None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

/// Convert a table to a single Arrow record batch: one Utf8 column per
/// label, in label order. Also used for pretty-printing in the inspector.
pub fn to_record_batch(table: &ParameterTable) -> Result<RecordBatch> {
    if table.width() == 0 {
        bail!("a zero-column table has no Arrow representation");
    }

    let fields: Vec<Field> = table
        .labels()
        .iter()
        .map(|label| Field::new(label, DataType::Utf8, false))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let columns: Vec<ArrayRef> = (0..table.width())
        .map(|j| {
            let values: Vec<&str> = table.rows().iter().map(|row| row[j].as_str()).collect();
            Arc::new(StringArray::from(values)) as ArrayRef
        })
        .collect();

    RecordBatch::try_new(schema, columns).context("building record batch")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParameterTable {
        ParameterTable::new(
            vec!["col1".to_string(), "col2".to_string()],
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), "d".to_string()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn record_batch_mirrors_table_shape() {
        let batch = to_record_batch(&sample()).unwrap();
        assert_eq!(batch.num_columns(), 2);
        assert_eq!(batch.num_rows(), 2);
        assert_eq!(batch.schema().field(1).name(), "col2");
    }

    #[test]
    fn empty_table_has_no_csv_or_arrow_form() {
        let empty = ParameterTable::empty();
        let dir = tempfile::tempdir().unwrap();

        assert!(to_record_batch(&empty).is_err());
        assert!(write_file(&empty, &dir.path().join("empty.csv")).is_err());
        assert!(write_file(&empty, &dir.path().join("empty.json")).is_ok());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = write_file(&sample(), Path::new("table.toml")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }
}
