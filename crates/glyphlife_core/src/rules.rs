//! Life-like transition rules in `B/S` notation.
//!
//! A rule is two sets of neighbour counts (0..=8): a Dead cell with a count
//! in the birth set becomes Alive, an Alive cell with a count in the survival
//! set stays Alive, every other cell ends up Dead.

use crate::cell::Cell;
use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MAX_NEIGHBOURS: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LifeRule {
    birth: u16,
    survive: u16,
}

impl LifeRule {
    /// Conway's Game of Life (B3/S23).
    pub const CONWAY: LifeRule = LifeRule {
        birth: 1 << 3,
        survive: (1 << 2) | (1 << 3),
    };
    /// HighLife (B36/S23).
    pub const HIGH_LIFE: LifeRule = LifeRule {
        birth: (1 << 3) | (1 << 6),
        survive: (1 << 2) | (1 << 3),
    };
    /// Seeds (B2/S).
    pub const SEEDS: LifeRule = LifeRule {
        birth: 1 << 2,
        survive: 0,
    };
    /// Day & Night (B3678/S34678).
    pub const DAY_AND_NIGHT: LifeRule = LifeRule {
        birth: (1 << 3) | (1 << 6) | (1 << 7) | (1 << 8),
        survive: (1 << 3) | (1 << 4) | (1 << 6) | (1 << 7) | (1 << 8),
    };
    /// Maze (B3/S12345).
    pub const MAZE: LifeRule = LifeRule {
        birth: 1 << 3,
        survive: 0b11_1110,
    };

    pub fn new(birth: &[u8], survive: &[u8]) -> Result<Self> {
        Ok(Self {
            birth: mask_of(birth)?,
            survive: mask_of(survive)?,
        })
    }

    /// Looks up a preset by its common name.
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().replace([' ', '_', '-', '&'], "").as_str() {
            "conway" | "life" => Some(Self::CONWAY),
            "highlife" => Some(Self::HIGH_LIFE),
            "seeds" => Some(Self::SEEDS),
            "daynight" | "dayandnight" => Some(Self::DAY_AND_NIGHT),
            "maze" => Some(Self::MAZE),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn births_on(&self, neighbours: u8) -> bool {
        self.birth & (1 << neighbours) != 0
    }

    #[inline(always)]
    pub fn survives_on(&self, neighbours: u8) -> bool {
        self.survive & (1 << neighbours) != 0
    }

    #[inline(always)]
    pub fn next_state(&self, cell: Cell, neighbours: u8) -> Cell {
        match cell {
            Cell::Alive => Cell::from(self.survives_on(neighbours)),
            Cell::Dead => Cell::from(self.births_on(neighbours)),
        }
    }
}

impl Default for LifeRule {
    fn default() -> Self {
        Self::CONWAY
    }
}

fn mask_of(counts: &[u8]) -> Result<u16> {
    counts.iter().try_fold(0u16, |mask, &n| {
        if n > MAX_NEIGHBOURS {
            Err(EngineError::invalid_rule(format!(
                "neighbour count {n} is above {MAX_NEIGHBOURS}"
            )))
        } else {
            Ok(mask | (1 << n))
        }
    })
}

fn digits_of(mask: u16) -> String {
    (0..=MAX_NEIGHBOURS)
        .filter(|n| mask & (1 << n) != 0)
        .map(|n| char::from(b'0' + n))
        .collect()
}

impl fmt::Display for LifeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", digits_of(self.birth), digits_of(self.survive))
    }
}

impl FromStr for LifeRule {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(rule) = Self::preset(s) {
            return Ok(rule);
        }

        let mut birth = None;
        let mut survive = None;
        for part in s.trim().split('/') {
            let mut chars = part.trim().chars();
            let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut birth,
                Some('S') => &mut survive,
                _ => return Err(EngineError::invalid_rule(format!("malformed rule '{s}'"))),
            };
            if slot.is_some() {
                return Err(EngineError::invalid_rule(format!("duplicate section in '{s}'")));
            }
            let counts = chars
                .map(|c| {
                    c.to_digit(10)
                        .map(|d| d as u8)
                        .ok_or_else(|| EngineError::invalid_rule(format!("bad digit '{c}' in '{s}'")))
                })
                .collect::<Result<Vec<u8>>>()?;
            *slot = Some(mask_of(&counts)?);
        }

        match (birth, survive) {
            (Some(birth), Some(survive)) => Ok(Self { birth, survive }),
            _ => Err(EngineError::invalid_rule(format!(
                "'{s}' needs both a B and an S section"
            ))),
        }
    }
}

impl TryFrom<String> for LifeRule {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<LifeRule> for String {
    fn from(rule: LifeRule) -> Self {
        rule.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_transitions() {
        let rule = LifeRule::CONWAY;
        assert_eq!(rule.next_state(Cell::Alive, 1), Cell::Dead);
        assert_eq!(rule.next_state(Cell::Alive, 2), Cell::Alive);
        assert_eq!(rule.next_state(Cell::Alive, 3), Cell::Alive);
        assert_eq!(rule.next_state(Cell::Alive, 4), Cell::Dead);
        assert_eq!(rule.next_state(Cell::Dead, 3), Cell::Alive);
        assert_eq!(rule.next_state(Cell::Dead, 2), Cell::Dead);
    }

    #[test]
    fn test_parse_and_display() {
        let rule: LifeRule = "B36/S23".parse().unwrap();
        assert_eq!(rule, LifeRule::HIGH_LIFE);
        assert_eq!(rule.to_string(), "B36/S23");
        assert_eq!("s23/b3".parse::<LifeRule>().unwrap(), LifeRule::CONWAY);
        assert_eq!("B2/S".parse::<LifeRule>().unwrap(), LifeRule::SEEDS);
        assert_eq!(LifeRule::MAZE.to_string(), "B3/S12345");
    }

    #[test]
    fn test_parse_presets() {
        assert_eq!("HighLife".parse::<LifeRule>().unwrap(), LifeRule::HIGH_LIFE);
        assert_eq!("day & night".parse::<LifeRule>().unwrap(), LifeRule::DAY_AND_NIGHT);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "B3", "B9/S23", "X3/S23", "B3/S2x", "B3/B3", "B3/S23/S2"] {
            assert!(bad.parse::<LifeRule>().is_err(), "accepted '{bad}'");
        }
    }

    #[test]
    fn test_new_rejects_large_counts() {
        assert!(LifeRule::new(&[3], &[2, 9]).is_err());
        assert_eq!(LifeRule::new(&[3], &[2, 3]).unwrap(), LifeRule::CONWAY);
    }
}
