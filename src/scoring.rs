//! Scoring a finished board under Japanese or Chinese rules.
//!
//! Both systems award empty regions the same way (see [`classify_territory`]);
//! they differ in what else counts:
//!
//! - Japanese (territory): territory minus the player's own captured stones.
//! - Chinese (area): territory plus the player's stones left on the board.
//!
//! Komi, when enabled, is added to White once after the base score.
//!
//! Sources:
//! - https://senseis.xmp.net/?JapaneseCountingExample
//! - https://senseis.xmp.net/?ChineseCountingExample

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use tracing::{info, warn};

use crate::board::Board;
use crate::colors::Captures;
use crate::constants::{KOMI_CHINESE, KOMI_JAPANESE};
use crate::error::{ConfigError, Error, Result};
use crate::grid::{Cell, Color, Grid};
use crate::region::Region;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScoringSystem {
    Japanese,
    Chinese,
}

impl ScoringSystem {
    pub const ALL: [ScoringSystem; 2] = [ScoringSystem::Japanese, ScoringSystem::Chinese];

    pub fn name(self) -> &'static str {
        match self {
            ScoringSystem::Japanese => "Japanese",
            ScoringSystem::Chinese => "Chinese",
        }
    }

    pub fn default_komi(self) -> f64 {
        match self {
            ScoringSystem::Japanese => KOMI_JAPANESE,
            ScoringSystem::Chinese => KOMI_CHINESE,
        }
    }
}

impl FromStr for ScoringSystem {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScoringSystem::ALL
            .into_iter()
            .find(|sys| sys.name() == s)
            .ok_or_else(|| ConfigError::UnknownScoringSystem(s.to_string()))
    }
}

impl fmt::Display for ScoringSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Who an empty region belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Territory {
    /// Touches no stones at all, e.g. an empty board.
    Neutral,
    /// Bordered by both colors equally often.
    Dame,
    /// Bordered by a single color.
    Owned(Color),
    /// Bordered by both colors, but more often by this one.
    Contested(Color),
}

impl Territory {
    pub fn owner(self) -> Option<Color> {
        match self {
            Territory::Owned(c) | Territory::Contested(c) => Some(c),
            Territory::Neutral | Territory::Dame => None,
        }
    }
}

/// Classify an empty region by how many adjacent points each color holds.
pub fn classify_territory(region: &Region, grid: &Grid) -> Territory {
    let by_color: BTreeMap<Color, usize> = region
        .neighbor_tally(grid)
        .into_iter()
        .filter_map(|(cell, n)| cell.color().map(|c| (c, n)))
        .collect();

    let mut counts = by_color.iter().map(|(&c, &n)| (c, n));
    let Some((first_color, first_n)) = counts.next() else {
        return Territory::Neutral;
    };
    if by_color.len() == 1 {
        return Territory::Owned(first_color);
    }
    if by_color.values().all(|&n| n == first_n) {
        return Territory::Dame;
    }
    let (leader, _) = counts.fold((first_color, first_n), |best, (c, n)| {
        if n > best.1 { (c, n) } else { best }
    });
    Territory::Contested(leader)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Color),
    Tie,
}

/// Final points per color.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Scores {
    black: f64,
    white: f64,
}

impl Scores {
    pub fn new(black: f64, white: f64) -> Self {
        Self { black, white }
    }

    pub fn get(&self, color: Color) -> f64 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    fn add(&mut self, color: Color, points: f64) {
        match color {
            Color::Black => self.black += points,
            Color::White => self.white += points,
        }
    }

    pub fn winner(&self) -> Outcome {
        if self.black > self.white {
            Outcome::Win(Color::Black)
        } else if self.white > self.black {
            Outcome::Win(Color::White)
        } else {
            Outcome::Tie
        }
    }

    /// Scores keyed by color name.
    pub fn to_named(&self) -> BTreeMap<String, f64> {
        Color::ALL
            .into_iter()
            .map(|c| (c.name().to_string(), self.get(c)))
            .collect()
    }
}

impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Black: {}, White: {}", self.black, self.white)
    }
}

/// Scoring configuration: a rule system and whether komi applies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Score {
    system: ScoringSystem,
    komi: bool,
}

impl Score {
    pub fn new(system: ScoringSystem, komi: bool) -> Self {
        Self { system, komi }
    }

    pub fn system(&self) -> ScoringSystem {
        self.system
    }

    pub fn komi(&self) -> bool {
        self.komi
    }

    /// Komi for the configured system.
    /// https://senseis.xmp.net/?Komi
    pub fn default_komi(&self) -> f64 {
        self.system.default_komi()
    }

    /// Score `board`. `captured` holds the stones each color has lost; it is
    /// required for Japanese scoring and ignored for Chinese scoring.
    ///
    /// The board is expected to be final, i.e. dead regions already cleared.
    pub fn score(&self, board: &Board, captured: Option<&Captures>) -> Result<Scores> {
        info!("Scoring board using {} scoring.", self.system);
        let mut scores = Scores::default();

        match self.system {
            ScoringSystem::Japanese => {
                let captured = captured.ok_or(Error::MissingCaptures(self.system.name()))?;
                for color in Color::ALL {
                    let lost = captured.get(color);
                    scores.add(color, -f64::from(lost));
                    info!(
                        "{color} ({}) has lost {lost} pieces. Removed {lost} from {color}'s score.",
                        board.colors().value(color)
                    );
                }
            }
            ScoringSystem::Chinese => {
                for color in Color::ALL {
                    let on_board = board.grid().count(Cell::Stone(color));
                    scores.add(color, on_board as f64);
                    info!(
                        "{color} ({}) has {on_board} pieces on board. \
                         Added {on_board} to {color}'s score.",
                        board.colors().value(color)
                    );
                }
            }
        }

        for region in board.regions().iter().filter(|r| r.is_vacant()) {
            let size = region.size() as f64;
            match classify_territory(region, board.grid()) {
                Territory::Neutral => {
                    info!(
                        "Territory touches no stones. Ignored.\n{}",
                        region.describe(board.grid())
                    );
                }
                Territory::Dame => {
                    info!("Dame territory. Ignored.\n{}", region.describe(board.grid()));
                }
                Territory::Owned(color) => {
                    scores.add(color, size);
                    info!(
                        "Added territory of {size} pieces to {color}'s score.\n{}",
                        region.describe(board.grid())
                    );
                }
                Territory::Contested(color) => {
                    warn!("Uneven number of shared adjacencies in territory.");
                    warn!("Awarding points to whichever group has more adjacencies.");
                    scores.add(color, size);
                    info!(
                        "Added territory of {size} pieces to {color}'s score.\n{}",
                        region.describe(board.grid())
                    );
                }
            }
        }

        let counts = board.region_counts();
        info!(
            "Iterated through {} regions. {counts:?}",
            counts.values().sum::<usize>()
        );
        info!("{scores}");

        if self.komi {
            let komi = self.default_komi();
            scores.add(Color::White, komi);
            info!("Added komi of {komi} to White's score.");
        }

        declare_winner(&scores);
        Ok(scores)
    }
}

fn declare_winner(scores: &Scores) -> Outcome {
    let outcome = scores.winner();
    match outcome {
        Outcome::Tie => info!("Tie game. {scores}"),
        Outcome::Win(color) => info!("{color} wins. {scores}"),
    }
    outcome
}
