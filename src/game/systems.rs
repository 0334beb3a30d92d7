// src/game/systems.rs
use super::catalog::RegionCatalog;
use super::controller::{GameController, QuizOutcome};
use super::events::{QuizInputEvent, QuizOutcomeEvent};
use super::resources::QuizSettings;
use super::session::GuessOutcome;
use super::state::QuizState;
use bevy::app::AppExit;
use bevy::prelude::*;

/// Überschreibt die Standardeinstellungen mit Umgebungsvariablen
pub fn apply_env_overrides_system(mut settings: ResMut<QuizSettings>) {
    let updated = settings
        .clone()
        .with_overrides(|key| std::env::var(key).ok());
    if *settings != updated {
        info!("Quiz settings overridden from environment: {:?}", updated);
        *settings = updated;
    }
}

/// Lädt den Katalog und startet die erste Runde. Ein Datenfehler beendet die App.
pub fn init_game_controller_system(
    mut commands: Commands,
    settings: Res<QuizSettings>,
    mut next_state: ResMut<NextState<QuizState>>,
    mut outcomes: EventWriter<QuizOutcomeEvent>,
    mut exit: EventWriter<AppExit>,
) {
    let catalog = match &settings.catalog_path {
        Some(path) => {
            info!("Loading region catalog from {}", path.display());
            RegionCatalog::load(path)
        }
        None => RegionCatalog::builtin(),
    };

    let controller = catalog.and_then(|catalog| {
        info!(
            "Region catalog ready: {} regions, {} playable",
            catalog.len(),
            catalog.playable_count()
        );
        GameController::new(catalog, settings.difficulty, settings.seed)
    });

    match controller {
        Ok(controller) => {
            let session = controller.session();
            if let Ok(clue) = session.current_clue() {
                outcomes.send(QuizOutcomeEvent(QuizOutcome::SessionStarted {
                    difficulty: controller.difficulty(),
                    clue: clue.to_string(),
                    progress: session.progress(),
                }));
            }
            commands.insert_resource(controller);
            next_state.set(QuizState::Playing);
        }
        Err(e) => {
            error!("Quiz could not be started: {}", e);
            exit.send(AppExit);
        }
    }
}

/// Reicht alle Eingaben dieses Frames an den Controller weiter
pub fn dispatch_quiz_input_system(
    mut inputs: EventReader<QuizInputEvent>,
    mut controller: ResMut<GameController>,
    mut outcomes: EventWriter<QuizOutcomeEvent>,
    mut next_state: ResMut<NextState<QuizState>>,
) {
    for QuizInputEvent(input) in inputs.read() {
        match controller.dispatch(input.clone()) {
            Ok(outcome) => {
                match &outcome {
                    QuizOutcome::Guess(GuessOutcome::Completed { .. }) => {
                        next_state.set(QuizState::Complete)
                    }
                    QuizOutcome::SessionStarted { .. } => next_state.set(QuizState::Playing),
                    _ => {}
                }
                outcomes.send(QuizOutcomeEvent(outcome));
            }
            Err(e) if e.is_recoverable() => debug!("Input ignored: {}", e),
            Err(e) => warn!("Input rejected: {}", e),
        }
    }
}
