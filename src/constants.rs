//! Constants for scoring rules, board dimensions and the text board format.
//!
//! The board size itself is a runtime property of each [`Grid`](crate::grid::Grid);
//! the values here only describe the conventions around it.

// =============================================================================
// Board Geometry
// =============================================================================

/// Standard Go board sizes. Boards of other sizes are still analyzed,
/// but the loader warns about them.
pub const BOARD_DIMS: [usize; 4] = [5, 9, 13, 19];

/// Largest board size the region engine is expected to handle.
pub const MAX_BOARD_SIZE: usize = 19;

// =============================================================================
// Color Names
// =============================================================================

/// Name of the first player's color, as used in color and capture maps.
pub const BLACK: &str = "Black";

/// Name of the second player's color, as used in color and capture maps.
pub const WHITE: &str = "White";

// =============================================================================
// Komi (compensation for White)
// =============================================================================

/// Komi under Japanese (territory) scoring.
/// https://senseis.xmp.net/?Komi
pub const KOMI_JAPANESE: f64 = 6.5;

/// Komi under Chinese (area) scoring.
pub const KOMI_CHINESE: f64 = 7.5;

// =============================================================================
// Numeric Grid Contract
// =============================================================================

/// Cell value the board loader assigns to Black stones.
pub const BLACK_VALUE: f64 = 1.0;

/// Cell value the board loader assigns to White stones.
pub const WHITE_VALUE: f64 = 0.0;

/// Cell value marking an empty point (no stone detected).
pub const EMPTY_VALUE: f64 = f64::NAN;

// =============================================================================
// Text Board Symbols (as bytes for direct comparison)
// =============================================================================

/// Black stone.
pub const STONE_BLACK: u8 = b'X';

/// White stone.
pub const STONE_WHITE: u8 = b'O';

/// Empty point.
pub const EMPTY: u8 = b'.';

/// Black stone, alternative spelling accepted by the loader.
pub const ALT_STONE_BLACK: u8 = b'B';

/// White stone, alternative spelling accepted by the loader.
pub const ALT_STONE_WHITE: u8 = b'W';

/// Empty point drawn as an intersection.
pub const ALT_EMPTY: u8 = b'+';

/// Lines starting with this byte are ignored by the loader.
pub const COMMENT: u8 = b'#';
