//! Error types for board construction and scoring.
//!
//! Configuration problems are detected when a board or a scorer is built and
//! are never retried. Missing capture data is only detected when a Japanese
//! score is requested.

/// Invalid input detected while building a board, a color map or a scorer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid grid shape: grid has no rows")]
    EmptyGrid,

    #[error("invalid grid shape: {rows} rows but row {row} has {cols} columns")]
    NonSquareGrid { rows: usize, row: usize, cols: usize },

    #[error("invalid colors in provided colors: {0:?} (Black and White are required)")]
    MissingColors(Vec<String>),

    #[error("invalid colors in provided colors: {0:?} (only Black and White are allowed)")]
    UnexpectedColors(Vec<String>),

    #[error("invalid colors in captures: {captures:?} do not match colors {colors:?}")]
    CaptureKeysMismatch {
        colors: Vec<String>,
        captures: Vec<String>,
    },

    #[error("color {name} must have an associated numeric value, got {value}")]
    NonNumericColor { name: String, value: f64 },

    #[error("Black and White share the same cell value {0}")]
    DuplicateColorValue(f64),

    #[error("cell ({row}, {col}) holds {value}, which is neither empty nor a color value")]
    UnknownCellValue { row: usize, col: usize, value: f64 },

    #[error("unknown board symbol {symbol:?} at line {line}, column {col}")]
    UnknownSymbol { line: usize, col: usize, symbol: char },

    #[error("invalid scoring system: {0:?} (expected Japanese or Chinese)")]
    UnknownScoringSystem(String),
}

/// Top-level error returned by the scoring engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error("no captured pieces provided: {0} scoring requires capture counts")]
    MissingCaptures(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
