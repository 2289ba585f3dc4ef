use super::model::ParameterTable;

// ---------------------------------------------------------------------------
// Built-in datafile – the default all-pairs input shipped with the crate
// ---------------------------------------------------------------------------

/// Column labels of the built-in datafile.
pub const LABELS: [&str; 10] = [
    "col1", "col2", "col3", "col4", "col5", "col6", "col7", "col8", "col9", "col10",
];

/// Candidate rows of the built-in datafile. `PARAMETERS[i][j]` is the value
/// of `LABELS[j]` for candidate row `i`.
pub const PARAMETERS: [[&str; 10]; 10] = [
    ["r1c1", "r1c2", "r1c3", "r1c4", "r1c5", "r1c6", "r1c7", "r1c8", "r1c9", "r1c10"],
    ["r2c1", "r2c2", "r2c3", "r2c4", "r2c5", "r2c6", "r2c7", "r2c8", "r2c9", "r2c10"],
    ["r3c1", "r3c2", "r3c3", "r3c4", "r3c5", "r3c6", "r3c7", "r3c8", "r3c9", "r3c10"],
    ["r4c1", "r4c2", "r4c3", "r4c4", "r4c5", "r4c6", "r4c7", "r4c8", "r4c9", "r4c10"],
    ["r5c1", "r5c2", "r5c3", "r5c4", "r5c5", "r5c6", "r5c7", "r5c8", "r5c9", "r5c10"],
    ["r6c1", "r6c2", "r6c3", "r6c4", "r6c5", "r6c6", "r6c7", "r6c8", "r6c9", "r6c10"],
    ["r7c1", "r7c2", "r7c3", "r7c4", "r7c5", "r7c6", "r7c7", "r7c8", "r7c9", "r7c10"],
    ["r8c1", "r8c2", "r8c3", "r8c4", "r8c5", "r8c6", "r8c7", "r8c8", "r8c9", "r8c10"],
    ["r9c1", "r9c2", "r9c3", "r9c4", "r9c5", "r9c6", "r9c7", "r9c8", "r9c9", "r9c10"],
    ["r10c1", "r10c2", "r10c3", "r10c4", "r10c5", "r10c6", "r10c7", "r10c8", "r10c9", "r10c10"],
];

/// The built-in datafile as an owned, validated [`ParameterTable`].
pub fn builtin_table() -> ParameterTable {
    let labels = LABELS.iter().map(|s| s.to_string()).collect();
    let rows = PARAMETERS
        .iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect();
    // The constants satisfy both invariants by construction.
    ParameterTable::new(labels, rows).expect("built-in datafile is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_ten_by_ten() {
        let table = builtin_table();
        assert_eq!(table.width(), 10);
        assert_eq!(table.len(), 10);
    }

    #[test]
    fn builtin_values_follow_row_column_naming() {
        let table = builtin_table();
        for i in 0..table.len() {
            for j in 0..table.width() {
                let expected = format!("r{}c{}", i + 1, j + 1);
                assert_eq!(table.value(i, j), Some(expected.as_str()));
            }
        }
    }

    #[test]
    fn builtin_column_values_are_distinct_per_label() {
        let table = builtin_table();
        for label in table.labels() {
            assert_eq!(table.unique_values(label).unwrap().len(), 10);
        }
    }
}
