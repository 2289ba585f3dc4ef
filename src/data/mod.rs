/// Data layer: core types, loading, and writing.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet          builtin constants
///        │                                │
///        ▼                                ▼
///   ┌──────────┐                   ┌──────────┐
///   │  loader   │────────┐         │ builtin   │
///   └──────────┘        │         └──────────┘
///                        ▼               │
///                 ┌───────────────┐      │
///                 │ ParameterTable │◀─────┘
///                 └───────────────┘   shape + duplicate-label
///                        │            checks at construction
///                        ▼
///                  ┌──────────┐
///                  │  writer   │  table → .csv / .json / .parquet
///                  └──────────┘
/// ```
pub mod builtin;
pub mod loader;
pub mod model;
pub mod writer;
