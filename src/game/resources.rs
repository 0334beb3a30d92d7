// src/game/resources.rs
use super::difficulty::Difficulty;
use bevy::prelude::*;
use std::path::PathBuf;

pub const ENV_CATALOG: &str = "HOTSPOT_QUIZ_CATALOG";
pub const ENV_DIFFICULTY: &str = "HOTSPOT_QUIZ_DIFFICULTY";
pub const ENV_SEED: &str = "HOTSPOT_QUIZ_SEED";

#[derive(Resource, Reflect, Debug, Clone, PartialEq)]
#[reflect(Resource)]
pub struct QuizSettings {
    // --- Globus & Marker ---
    pub globe_radius: f32,
    /// Marker schweben um diesen Wert über der Oberfläche
    pub marker_altitude: f32,
    pub marker_size: f32,

    // --- Spiel ---
    pub difficulty: Difficulty,
    /// Eigener Katalog statt des eingebetteten
    pub catalog_path: Option<PathBuf>,
    pub seed: Option<u64>,

    // --- Darstellung ---
    pub toast_seconds: f32,
    pub blend_seconds: f32,
    pub show_grid: bool,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            globe_radius: 2.0,
            marker_altitude: 0.1,
            marker_size: 0.06,

            difficulty: Difficulty::Medium,
            catalog_path: None,
            seed: None,

            toast_seconds: 1.5,
            blend_seconds: 1.0,
            show_grid: true,
        }
    }
}

impl QuizSettings {
    /// Radius, auf dem die Marker platziert werden
    pub fn marker_radius(&self) -> f32 {
        self.globe_radius + self.marker_altitude
    }

    /// Ungültige Werte werden geloggt und ignoriert
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(ENV_CATALOG).filter(|p| !p.trim().is_empty()) {
            self.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(label) = lookup(ENV_DIFFICULTY) {
            match label.parse::<Difficulty>() {
                Ok(difficulty) => self.difficulty = difficulty,
                Err(e) => warn!("{}: {}", ENV_DIFFICULTY, e),
            }
        }
        if let Some(seed) = lookup(ENV_SEED) {
            match seed.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(e) => warn!("{}: invalid seed '{}': {}", ENV_SEED, seed, e),
            }
        }
        self
    }
}
