//! Color↔cell-value mapping and per-color capture counters.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::ConfigError;
use crate::grid::Color;

/// Bidirectional mapping between the two stone colors and their numeric
/// cell values in the loader's grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorMap {
    black: f64,
    white: f64,
}

impl ColorMap {
    pub fn new(black: f64, white: f64) -> Result<Self, ConfigError> {
        for (color, value) in [(Color::Black, black), (Color::White, white)] {
            if !value.is_finite() {
                return Err(ConfigError::NonNumericColor {
                    name: color.name().to_string(),
                    value,
                });
            }
        }
        if black == white {
            return Err(ConfigError::DuplicateColorValue(black));
        }
        Ok(Self { black, white })
    }

    /// Build from a name→value map, which must hold exactly `Black` and `White`.
    pub fn from_named(colors: &BTreeMap<String, f64>) -> Result<Self, ConfigError> {
        let (black, white) = match (
            colors.get(crate::constants::BLACK),
            colors.get(crate::constants::WHITE),
        ) {
            (Some(&b), Some(&w)) => (b, w),
            _ => return Err(ConfigError::MissingColors(colors.keys().cloned().collect())),
        };
        if colors.len() != Color::ALL.len() {
            return Err(ConfigError::UnexpectedColors(colors.keys().cloned().collect()));
        }
        Self::new(black, white)
    }

    pub fn value(&self, color: Color) -> f64 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub fn color_of(&self, value: f64) -> Option<Color> {
        Color::ALL.into_iter().find(|&c| self.value(c) == value)
    }
}

impl fmt::Display for ColorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Black: {}, White: {}}}", self.black, self.white)
    }
}

/// Number of stones of each color that were captured, i.e. removed from the
/// board. `get(Color::Black)` is how many Black stones Black has lost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Captures {
    counts: BTreeMap<Color, u32>,
}

impl Captures {
    pub fn new(black: u32, white: u32) -> Self {
        Self {
            counts: BTreeMap::from([(Color::Black, black), (Color::White, white)]),
        }
    }

    /// Build from a name→count map. Its keys must be exactly the color names
    /// of `colors`.
    pub fn from_named(
        captures: &BTreeMap<String, u32>,
        colors: &BTreeMap<String, f64>,
    ) -> Result<Self, ConfigError> {
        let capture_keys: BTreeSet<&String> = captures.keys().collect();
        let color_keys: BTreeSet<&String> = colors.keys().collect();
        if capture_keys != color_keys {
            return Err(ConfigError::CaptureKeysMismatch {
                colors: colors.keys().cloned().collect(),
                captures: captures.keys().cloned().collect(),
            });
        }
        let mut counts = Captures::default();
        for (name, &n) in captures {
            let color = Color::from_name(name)
                .ok_or_else(|| ConfigError::UnexpectedColors(captures.keys().cloned().collect()))?;
            counts.add(color, n);
        }
        Ok(counts)
    }

    pub fn get(&self, color: Color) -> u32 {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// Count `n` more captured stones of `color`, saturating at `u32::MAX`.
    pub fn add(&mut self, color: Color, n: u32) {
        let count = self.counts.entry(color).or_insert(0);
        *count = count.saturating_add(n);
    }

    pub fn total(&self) -> u32 {
        self.counts.values().fold(0, |acc, &n| acc.saturating_add(n))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Color, u32)> + '_ {
        Color::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

impl Default for Captures {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl fmt::Display for Captures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Black: {}, White: {}}}",
            self.get(Color::Black),
            self.get(Color::White)
        )
    }
}
