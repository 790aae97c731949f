//! Domain errors. Everything else is carried by `anyhow` with context.

use thiserror::Error;

/// Problems with the contents of a timing CSV.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LoadError {
    #[error("line {line}: expected 2 fields (block,time), found {found}")]
    Arity { line: u64, found: usize },

    #[error("line {line}: {column} value '{value}' is not an integer")]
    Field {
        line: u64,
        column: &'static str,
        value: String,
    },
}

/// Statistics that cannot be computed for the given series.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatsError {
    #[error("cannot compute statistics of an empty series")]
    EmptySeries,
}
