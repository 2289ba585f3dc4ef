//! Parameter tables for all-pairs test-case generation.
//!
//! A table is an ordered list of column labels plus a matrix of candidate
//! string values, one row per candidate, one column per label. This crate
//! ships the built-in datafile, loads and writes equivalent tables in CSV,
//! JSON, and Parquet form, and validates the shape invariant (every row as
//! wide as the label list) at load time.

pub mod data;

pub use data::builtin::builtin_table;
pub use data::loader::load_file;
pub use data::model::{ParameterTable, TableError};
pub use data::writer::write_file;
