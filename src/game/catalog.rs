// src/game/catalog.rs
use super::error::{QuizError, QuizResult};
use crate::math::geometry::sphere::GeographicCoordinates;
use crate::math::types::Point3D;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Eingebetteter Standardkatalog (Wasserverschmutzungs-Hotspots)
const BUILTIN_CATALOG: &str = include_str!("../../assets/data/hotspots.json");

/// Eine benannte Region auf dem Globus.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Region {
    /// Anzeigename, eindeutig im Katalog
    #[serde(default)]
    pub name: String,
    /// Breitengrad in Grad
    #[serde(alias = "lat")]
    pub latitude: f32,
    /// Längengrad in Grad, roh übernommen
    #[serde(alias = "lon")]
    pub longitude: f32,
    /// Text für die Infokarte nach dem Finden
    #[serde(alias = "info", default)]
    pub description: String,
    /// Hinweis vor dem Finden. Ohne Hinweis ist die Region nicht spielbar.
    #[serde(default)]
    pub clue: Option<String>,
}

impl Region {
    pub fn new(name: impl Into<String>, latitude: f32, longitude: f32) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            description: String::new(),
            clue: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_clue(mut self, clue: impl Into<String>) -> Self {
        self.clue = Some(clue.into());
        self
    }

    pub fn coordinates(&self) -> GeographicCoordinates {
        GeographicCoordinates::new(self.latitude, self.longitude)
    }

    /// Zielpunkt auf der Einheitskugel
    pub fn surface_point(&self) -> Point3D {
        self.coordinates().to_surface_point()
    }

    pub fn is_playable(&self) -> bool {
        self.clue.is_some()
    }

    fn validate(&self, index: usize) -> QuizResult<()> {
        if self.name.trim().is_empty() {
            return Err(QuizError::data(index, "missing name"));
        }
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(QuizError::data(
                index,
                format!(
                    "latitude {} of '{}' is outside [-90, 90]",
                    self.latitude, self.name
                ),
            ));
        }
        if !self.longitude.is_finite() {
            return Err(QuizError::data(
                index,
                format!("longitude of '{}' is not a finite number", self.name),
            ));
        }
        Ok(())
    }
}

/// Unveränderlicher Katalog aller Regionen. Wird einmal beim Start geladen.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionCatalog {
    regions: Vec<Region>,
}

impl RegionCatalog {
    /// Prüft alle Einträge und baut den Katalog. Reihenfolge bleibt erhalten.
    pub fn from_regions(regions: Vec<Region>) -> QuizResult<Self> {
        {
            let mut names = HashSet::with_capacity(regions.len());
            for (index, region) in regions.iter().enumerate() {
                region.validate(index)?;
                if !names.insert(region.name.as_str()) {
                    return Err(QuizError::data(
                        index,
                        format!("duplicate region name '{}'", region.name),
                    ));
                }
            }
        }
        Ok(Self { regions })
    }

    pub fn from_json_str(json: &str) -> QuizResult<Self> {
        let regions: Vec<Region> =
            serde_json::from_str(json).map_err(|e| QuizError::CatalogUnreadable {
                reason: e.to_string(),
            })?;
        Self::from_regions(regions)
    }

    /// Lädt einen Katalog aus einer JSON-Datei
    pub fn load(path: &Path) -> QuizResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| QuizError::CatalogUnreadable {
            reason: format!("{}: {}", path.display(), e),
        })?;
        Self::from_json_str(&json)
    }

    pub fn builtin() -> QuizResult<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn all(&self) -> &[Region] {
        &self.regions
    }

    /// Regionen mit Hinweis, in Katalogreihenfolge
    pub fn playable(&self) -> impl Iterator<Item = &Region> + '_ {
        self.all().iter().filter(|r| r.is_playable())
    }

    pub fn playable_count(&self) -> usize {
        self.playable().count()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
