// src/game/controller.rs
use super::catalog::RegionCatalog;
use super::difficulty::Difficulty;
use super::error::QuizResult;
use super::session::{GuessOutcome, Progress, RegionInfo, Session};
use crate::math::geometry::sphere::chord_to_angle;
use crate::math::types::Point3D;
use crate::math::utils::angles;
use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Eingaben an den Spielcontroller
#[derive(Debug, Clone, PartialEq)]
pub enum QuizInput {
    /// Strahl hat die Globusoberfläche getroffen (Punkt auf der Einheitskugel)
    SurfaceGuess(Point3D),
    /// Strahl hat einen sichtbaren, bereits gefundenen Marker getroffen
    MarkerClicked(usize),
    Restart,
    SelectDifficulty(Difficulty),
}

/// Antworten des Controllers an die Darstellung
#[derive(Debug, Clone, PartialEq)]
pub enum QuizOutcome {
    Guess(GuessOutcome),
    MarkerInfo { index: usize, info: RegionInfo },
    SessionStarted {
        difficulty: Difficulty,
        clue: String,
        progress: Progress,
    },
    /// Tipp auf eine beendete Runde
    Ignored,
}

/// Besitzt Katalog und genau eine aktive Runde.
///
/// Neue Runden werden vollständig aufgebaut und erst dann ausgetauscht,
/// ein Fehler beim Aufbau lässt die alte Runde unverändert.
#[derive(Resource, Debug)]
pub struct GameController {
    catalog: RegionCatalog,
    difficulty: Difficulty,
    session: Session,
    rng: StdRng,
    /// Zählt gestartete Runden, damit die Darstellung Marker neu aufbauen kann
    generation: u64,
}

impl GameController {
    pub fn new(
        catalog: RegionCatalog,
        difficulty: Difficulty,
        seed: Option<u64>,
    ) -> QuizResult<Self> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let session = Session::start_with_rng(&catalog, difficulty.profile(), &mut rng)?;
        info!(
            "Quiz started: difficulty {}, {} of {} regions",
            difficulty,
            session.progress().total,
            catalog.len()
        );

        Ok(Self {
            catalog,
            difficulty,
            session,
            rng,
            generation: 0,
        })
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Einziger Einstiegspunkt für Spielereingaben
    pub fn dispatch(&mut self, input: QuizInput) -> QuizResult<QuizOutcome> {
        match input {
            QuizInput::SurfaceGuess(point) => Ok(self.guess(point)),
            QuizInput::MarkerClicked(index) => {
                let info = self.session.inspect_discovered_marker(index)?;
                Ok(QuizOutcome::MarkerInfo { index, info })
            }
            QuizInput::Restart => self.start_session(self.difficulty),
            QuizInput::SelectDifficulty(difficulty) => self.start_session(difficulty),
        }
    }

    fn guess(&mut self, point: Point3D) -> QuizOutcome {
        if !self.session.is_active() {
            debug!("Guess ignored, round already complete");
            return QuizOutcome::Ignored;
        }
        let Some(outcome) = self.session.submit_guess(point) else {
            return QuizOutcome::Ignored;
        };

        match &outcome {
            GuessOutcome::Hit { found, progress, .. } => info!(
                "Hit: {} ({}/{})",
                found.name, progress.discovered, progress.total
            ),
            GuessOutcome::Completed { found, progress } => info!(
                "Hit: {}, round complete with {} regions",
                found.name, progress.total
            ),
            GuessOutcome::Miss { distance } => debug!(
                "Miss: chord {:.3} (~{:.1}°) from target",
                distance,
                angles::rad_to_deg(chord_to_angle(*distance))
            ),
        }
        QuizOutcome::Guess(outcome)
    }

    fn start_session(&mut self, difficulty: Difficulty) -> QuizResult<QuizOutcome> {
        let session = Session::start_with_rng(&self.catalog, difficulty.profile(), &mut self.rng)?;
        let clue = session.current_clue()?.to_string();
        let progress = session.progress();

        self.session = session;
        self.difficulty = difficulty;
        self.generation += 1;
        info!(
            "New round #{}: difficulty {}, {} regions",
            self.generation, difficulty, progress.total
        );

        Ok(QuizOutcome::SessionStarted {
            difficulty,
            clue,
            progress,
        })
    }
}
