// ./src/main.rs
use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

// Eigene Module deklarieren
pub mod game;
pub mod input;
pub mod math;
pub mod presentation;
pub mod setup; // Kamera, Licht und Globus

use game::{GameController, QuizPlugin, QuizState, systems::dispatch_quiz_input_system};
use input::{
    HoveredMarker,
    systems::{marker_hover_system, pointer_input_system},
};
use presentation::{
    feedback::{FeedbackState, apply_outcome_feedback_system, tick_toast_system},
    ui::{feedback_overlay_system, quiz_panel_system},
    visualization::{
        blend::{GlobeBlend, globe_blend_system, reset_blend_system, start_clean_blend_system},
        markers::{rebuild_markers_system, sync_marker_visuals_system},
        sphere_grid::draw_sphere_grid_gizmos,
    },
};
use setup::setup_scene;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Pollution Hotspot Quiz".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_plugins(PanOrbitCameraPlugin)
        // World Inspector mit F1 ein-/ausblenden
        .add_plugins(WorldInspectorPlugin::new().run_if(input_toggle_active(false, KeyCode::F1)))
        .add_plugins(QuizPlugin)
        .init_resource::<HoveredMarker>()
        .init_resource::<FeedbackState>()
        .init_resource::<GlobeBlend>()
        .add_systems(Startup, setup_scene)
        .add_systems(OnEnter(QuizState::Playing), reset_blend_system)
        .add_systems(OnEnter(QuizState::Complete), start_clean_blend_system)
        .add_systems(
            Update,
            (
                // Block 1: Zeiger -> Quiz-Eingaben, vor dem Dispatch
                (marker_hover_system, pointer_input_system)
                    .chain()
                    .before(dispatch_quiz_input_system),
                // Block 2: Ergebnisse des Dispatch darstellen
                (
                    apply_outcome_feedback_system,
                    (rebuild_markers_system, sync_marker_visuals_system).chain(),
                )
                    .after(dispatch_quiz_input_system),
                tick_toast_system,
                // Block 3: egui
                (quiz_panel_system, feedback_overlay_system),
            )
                .run_if(resource_exists::<GameController>),
        )
        .add_systems(Update, (globe_blend_system, draw_sphere_grid_gizmos))
        .run();
}
