//! Bevy `Plugin`, das die Quiz-Engine in die App einhängt.

use super::{
    controller::GameController,
    events::{QuizInputEvent, QuizOutcomeEvent},
    resources::QuizSettings,
    state::QuizState,
    systems::{apply_env_overrides_system, dispatch_quiz_input_system, init_game_controller_system},
};
use bevy::prelude::*;

/// Registriert Einstellungen, Zustand und Events und startet die erste Runde.
///
/// Eine vorher eingefügte `QuizSettings`-Ressource wird nicht überschrieben.
pub struct QuizPlugin;

impl Plugin for QuizPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<QuizSettings>()
            .register_type::<QuizSettings>()
            .init_state::<QuizState>()
            .add_event::<QuizInputEvent>()
            .add_event::<QuizOutcomeEvent>()
            .add_systems(
                Startup,
                (apply_env_overrides_system, init_game_controller_system).chain(),
            )
            .add_systems(
                Update,
                dispatch_quiz_input_system.run_if(resource_exists::<GameController>),
            );
    }
}
