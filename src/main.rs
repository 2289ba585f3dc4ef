use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{debug, info};

use pairtable::data::writer::to_record_batch;
use pairtable::{builtin_table, load_file};

/// Inspector: load a datafile, validate its shape, and print it.
fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let table = match args.get(1).map(String::as_str) {
        Some("--builtin") => builtin_table(),
        Some(path) => load_file(Path::new(path)).with_context(|| format!("loading {path}"))?,
        None => bail!("usage: pairtable <datafile.{{csv,json,parquet}}> | --builtin"),
    };

    info!("loaded {} row(s) × {} column(s)", table.len(), table.width());
    for label in table.labels() {
        if let Some(values) = table.unique_values(label) {
            debug!("{label}: {} candidate value(s)", values.len());
        }
    }

    if table.width() == 0 {
        println!("(empty table)");
        return Ok(());
    }

    let batch = to_record_batch(&table)?;
    println!("{}", arrow::util::pretty::pretty_format_batches(&[batch])?);
    Ok(())
}
