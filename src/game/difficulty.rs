// src/game/difficulty.rs
use super::error::{QuizError, QuizResult};
use bevy::prelude::Reflect;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Feste Tabelle: Akzeptanzradius (Chord auf der Einheitskugel) und Regionenanzahl
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                acceptance_radius: 0.45,
                region_count: 4,
            },
            Difficulty::Medium => DifficultyProfile {
                acceptance_radius: 0.30,
                region_count: 6,
            },
            Difficulty::Hard => DifficultyProfile {
                acceptance_radius: 0.18,
                region_count: 8,
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(QuizError::config(format!(
                "unknown difficulty '{}', expected easy, medium or hard",
                other
            ))),
        }
    }
}

/// Parameter einer Runde
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Maximale Schnurlänge zwischen Tipp und Ziel, die als Treffer zählt
    pub acceptance_radius: f32,
    pub region_count: usize,
}

impl DifficultyProfile {
    pub fn validate(&self) -> QuizResult<()> {
        if !(self.acceptance_radius.is_finite() && self.acceptance_radius > 0.0) {
            return Err(QuizError::config(format!(
                "acceptance radius must be positive, got {}",
                self.acceptance_radius
            )));
        }
        if self.region_count == 0 {
            return Err(QuizError::config("region count must be at least 1"));
        }
        Ok(())
    }
}
