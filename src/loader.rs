//! Text board loader.
//!
//! Stands in for the image front end: it produces the same numeric grid an
//! image loader yields (`NaN` for empty points, one value per color) together
//! with the color→value mapping that grid implies.
//!
//! Format: one row per non-blank line. `X`/`B` is a Black stone, `O`/`W` a
//! White stone, `.`/`+` an empty point. Spaces are ignored and lines starting
//! with `#` are comments.
//!
//! ```text
//! # 3x3 corner
//! . X O
//! X X O
//! O O .
//! ```

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::constants::*;
use crate::error::ConfigError;

/// A board as delivered by a loader: numeric cells plus the color mapping.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedBoard {
    pub values: Vec<Vec<f64>>,
    pub colors: BTreeMap<String, f64>,
}

impl LoadedBoard {
    /// Zero capture counters keyed like `colors`.
    pub fn zero_captures(&self) -> BTreeMap<String, u32> {
        self.colors.keys().map(|k| (k.clone(), 0)).collect()
    }
}

/// Parse a text board. The shape is not checked here; board construction
/// rejects grids that are not square.
pub fn parse_board(text: &str) -> Result<LoadedBoard, ConfigError> {
    let mut values = Vec::new();
    let mut pieces = BTreeMap::from([(BLACK, 0usize), (WHITE, 0usize)]);

    for (line_no, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.as_bytes()[0] == COMMENT {
            continue;
        }
        let mut row = Vec::new();
        for (col, ch) in line.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let value = match u8::try_from(ch).unwrap_or(0) {
                STONE_BLACK | ALT_STONE_BLACK => {
                    *pieces.entry(BLACK).or_insert(0) += 1;
                    BLACK_VALUE
                }
                STONE_WHITE | ALT_STONE_WHITE => {
                    *pieces.entry(WHITE).or_insert(0) += 1;
                    WHITE_VALUE
                }
                EMPTY | ALT_EMPTY => EMPTY_VALUE,
                _ => {
                    return Err(ConfigError::UnknownSymbol {
                        line: line_no + 1,
                        col: col + 1,
                        symbol: ch,
                    });
                }
            };
            row.push(value);
        }
        values.push(row);
    }

    let size = values.len();
    info!("Estimated dimensions of board: (x: {size}, y: {size})");
    if !BOARD_DIMS.contains(&size) {
        warn!("Board size {size} is not a standard Go board size {BOARD_DIMS:?}.");
    }
    if size > MAX_BOARD_SIZE {
        warn!("Board size {size} exceeds {MAX_BOARD_SIZE}x{MAX_BOARD_SIZE}; analysis may be slow.");
    }
    info!(
        "Placed {} pieces: {pieces:?}",
        pieces.values().sum::<usize>()
    );

    Ok(LoadedBoard {
        values,
        colors: BTreeMap::from([
            (BLACK.to_string(), BLACK_VALUE),
            (WHITE.to_string(), WHITE_VALUE),
        ]),
    })
}
