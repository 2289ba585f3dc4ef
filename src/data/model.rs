use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

// ---------------------------------------------------------------------------
// TableError – the ways a parameter table can be malformed
// ---------------------------------------------------------------------------

/// Construction-time validation failure. Raised when the table is built,
/// never deferred to the consumer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A row's length differs from the label count.
    #[error("row {row} has {found} value(s) but the table declares {expected} label(s)")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Two columns share a name; positional correspondence would be ambiguous.
    #[error("duplicate label '{label}'")]
    DuplicateLabel { label: String },
}

// ---------------------------------------------------------------------------
// ParameterTable – the complete loaded table
// ---------------------------------------------------------------------------

/// The label list and parameter matrix consumed by an all-pairs generator.
///
/// `rows[i][j]` is the value of parameter `labels[j]` for candidate row `i`.
/// Immutable once constructed; [`ParameterTable::new`] is the single point
/// where the shape and duplicate-label invariants are enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterTable {
    /// Ordered column names. Order defines positional correspondence with
    /// row values.
    labels: Vec<String>,
    /// All candidate rows; every row has exactly `labels.len()` values.
    rows: Vec<Vec<String>>,
    /// For each label the sorted set of distinct values in that column.
    unique_values: BTreeMap<String, BTreeSet<String>>,
}

impl ParameterTable {
    /// Validate and build a table. Fails if any row's length differs from
    /// the label count or if two labels share a name.
    pub fn new(labels: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(TableError::DuplicateLabel {
                    label: label.clone(),
                });
            }
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != labels.len() {
                return Err(TableError::ShapeMismatch {
                    row: i,
                    expected: labels.len(),
                    found: row.len(),
                });
            }
        }

        let mut unique_values: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (j, label) in labels.iter().enumerate() {
            let values = rows.iter().map(|row| row[j].clone()).collect();
            unique_values.insert(label.clone(), values);
        }

        Ok(ParameterTable {
            labels,
            rows,
            unique_values,
        })
    }

    /// The empty table: zero labels, zero rows. Always well-formed.
    pub fn empty() -> Self {
        ParameterTable {
            labels: Vec::new(),
            rows: Vec::new(),
            unique_values: BTreeMap::new(),
        }
    }

    /// Ordered column names.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// All candidate rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of candidate rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.labels.len()
    }

    /// Value of column `col` in row `row`, if both indices are in range.
    pub fn value(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Positional index of a label, if present.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Sorted distinct values of the named column — the candidate value set
    /// an all-pairs generator draws from for that parameter.
    pub fn unique_values(&self, label: &str) -> Option<&BTreeSet<String>> {
        self.unique_values.get(label)
    }

    /// All candidate value sets, keyed by label.
    pub fn all_unique_values(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.unique_values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn two_by_two_table_preserves_labels_and_rows() {
        let table = ParameterTable::new(
            owned(&["col1", "col2"]),
            vec![owned(&["a", "b"]), owned(&["c", "d"])],
        )
        .unwrap();

        assert_eq!(table.labels(), &["col1", "col2"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.width(), 2);
        assert_eq!(table.rows()[0], owned(&["a", "b"]));
        assert_eq!(table.value(1, 1), Some("d"));
        assert_eq!(table.value(2, 0), None);
    }

    #[test]
    fn short_row_is_a_shape_mismatch() {
        let err = ParameterTable::new(owned(&["col1", "col2"]), vec![owned(&["a"])]).unwrap_err();
        assert_eq!(
            err,
            TableError::ShapeMismatch {
                row: 0,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn mismatch_reports_the_offending_row() {
        let err = ParameterTable::new(
            owned(&["col1"]),
            vec![owned(&["a"]), owned(&["b", "extra"])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            TableError::ShapeMismatch {
                row: 1,
                expected: 1,
                found: 2
            }
        );
    }

    #[test]
    fn duplicate_labels_are_rejected() {
        let err = ParameterTable::new(owned(&["col1", "col1"]), Vec::new()).unwrap_err();
        assert_eq!(
            err,
            TableError::DuplicateLabel {
                label: "col1".to_string()
            }
        );
    }

    #[test]
    fn empty_table_is_valid() {
        let table = ParameterTable::new(Vec::new(), Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.width(), 0);
        assert_eq!(table, ParameterTable::empty());
    }

    #[test]
    fn unique_values_are_sorted_and_deduplicated() {
        let table = ParameterTable::new(
            owned(&["mode"]),
            vec![owned(&["b"]), owned(&["a"]), owned(&["b"])],
        )
        .unwrap();

        let values: Vec<&str> = table
            .unique_values("mode")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(values, ["a", "b"]);
        assert!(table.unique_values("missing").is_none());
    }

    #[test]
    fn column_index_matches_label_order() {
        let table = ParameterTable::new(owned(&["col1", "col2"]), vec![owned(&["a", "b"])]).unwrap();
        assert_eq!(table.column_index("col2"), Some(1));
        assert_eq!(table.column_index("col3"), None);
    }
}
