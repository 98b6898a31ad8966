use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::CoreError;

pub const HOLES_PER_ROUND: u8 = 18;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TeeDistance {
    pub color: String,
    pub yards: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Hole {
    pub number: u8,
    pub par: i32,
    /// Men's stroke index, 1 hardest through 18 easiest.
    pub rank: Option<u8>,
    #[serde(default)]
    pub tees: Vec<TeeDistance>,
}

impl Hole {
    #[must_use]
    pub fn yards(&self, color: &str) -> Option<i32> {
        self.tees.iter().find(|t| t.color == color).map(|t| t.yards)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub slope: Option<f64>,
    pub rating: Option<f64>,
    pub holes: Vec<Hole>,
}

impl Course {
    #[must_use]
    pub fn hole(&self, number: u8) -> Option<&Hole> {
        self.holes.iter().find(|h| h.number == number)
    }

    #[must_use]
    pub fn par(&self, number: u8) -> Option<i32> {
        self.hole(number).map(|h| h.par)
    }

    #[must_use]
    pub fn rank(&self, number: u8) -> Option<u8> {
        self.hole(number).and_then(|h| h.rank)
    }

    #[must_use]
    pub fn par_total(&self) -> i32 {
        self.holes.iter().map(|h| h.par).sum()
    }

    #[must_use]
    pub fn front_nine_par(&self) -> i32 {
        self.holes.iter().filter(|h| h.number <= 9).map(|h| h.par).sum()
    }

    #[must_use]
    pub fn back_nine_par(&self) -> i32 {
        self.holes.iter().filter(|h| h.number > 9).map(|h| h.par).sum()
    }

    /// Total length from a tee. `None` if any hole lacks that tee.
    #[must_use]
    pub fn yardage(&self, color: &str) -> Option<i32> {
        self.holes.iter().map(|h| h.yards(color)).sum()
    }

    /// Tee colors in the order they first appear, scanning from hole 1.
    #[must_use]
    pub fn tee_colors(&self) -> Vec<String> {
        let mut holes: Vec<&Hole> = self.holes.iter().collect();
        holes.sort_by_key(|h| h.number);
        let mut colors: Vec<String> = Vec::new();
        for tee in holes.iter().flat_map(|h| h.tees.iter()) {
            if !colors.contains(&tee.color) {
                colors.push(tee.color.clone());
            }
        }
        colors
    }

    #[must_use]
    pub fn offers_tee(&self, color: &str) -> bool {
        self.holes.iter().any(|h| h.yards(color).is_some())
    }

    /// # Errors
    ///
    /// Will return `Err` if the course does not have holes 1 through 18 exactly once,
    /// if the stroke ranks are not a permutation of 1 through 18, or if a hole lists
    /// the same tee color twice.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.holes.len() != usize::from(HOLES_PER_ROUND) {
            return Err(CoreError::InvalidCourse(format!(
                "{} has {} holes, expected {HOLES_PER_ROUND}",
                self.name,
                self.holes.len()
            )));
        }

        let all: BTreeSet<u8> = (1..=HOLES_PER_ROUND).collect();
        let numbers: BTreeSet<u8> = self.holes.iter().map(|h| h.number).collect();
        if numbers != all {
            return Err(CoreError::InvalidCourse(format!(
                "{} hole numbers must be 1 through {HOLES_PER_ROUND}",
                self.name
            )));
        }

        let ranks: BTreeSet<u8> = self.holes.iter().filter_map(|h| h.rank).collect();
        if ranks.len() != self.holes.len() || ranks != all {
            return Err(CoreError::InvalidCourse(format!(
                "{} stroke ranks must use 1 through {HOLES_PER_ROUND} once each",
                self.name
            )));
        }

        for hole in &self.holes {
            let colors: BTreeSet<&str> = hole.tees.iter().map(|t| t.color.as_str()).collect();
            if colors.len() != hole.tees.len() {
                return Err(CoreError::InvalidCourse(format!(
                    "hole {} lists a tee color twice",
                    hole.number
                )));
            }
        }

        Ok(())
    }
}
