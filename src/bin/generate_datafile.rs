use std::path::PathBuf;

use anyhow::{Context, Result};

use pairtable::{builtin_table, write_file};

/// Materialize the built-in datafile to disk in every supported format.
fn main() -> Result<()> {
    let out_dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_default();
    let table = builtin_table();

    for name in ["ap_datafile.csv", "ap_datafile.json", "ap_datafile.parquet"] {
        let path = out_dir.join(name);
        write_file(&table, &path).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!(
        "Built-in table: {} rows × {} columns",
        table.len(),
        table.width()
    );
    Ok(())
}
