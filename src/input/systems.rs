// src/input/systems.rs
use super::picking::{GlobePicker, PickResult};
use crate::game::{GameController, QuizInput, QuizInputEvent, QuizSettings};
use crate::math::geometry::sphere::GeographicCoordinates;
use crate::setup::QuizCamera;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

/// Index des sichtbaren Markers unter dem Zeiger
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct HoveredMarker(pub Option<usize>);

fn picker(settings: &QuizSettings) -> GlobePicker {
    GlobePicker {
        globe_radius: settings.globe_radius,
        marker_radius: settings.marker_radius(),
        marker_size: settings.marker_size,
    }
}

/// Klicks und Touch-Starts werden zu Strahlen und dann zu Quiz-Eingaben.
pub fn pointer_input_system(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<QuizCamera>>,
    controller: Res<GameController>,
    settings: Res<QuizSettings>,
    mut contexts: EguiContexts,
    mut inputs: EventWriter<QuizInputEvent>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };

    // Touch wird wie ein Klick behandelt
    let mut presses: Vec<Vec2> = touches.iter_just_pressed().map(|t| t.position()).collect();
    if mouse.just_pressed(MouseButton::Left) {
        presses.extend(window.cursor_position());
    }
    if presses.is_empty() {
        return;
    }
    // Klicks auf egui-Fenster gehören nicht dem Globus
    if contexts.ctx_mut().is_pointer_over_area() {
        return;
    }

    let picker = picker(&settings);
    let markers = controller.session().markers();
    for position in presses {
        let Some(ray) = camera.viewport_to_world(camera_transform, position) else {
            continue;
        };
        let input = match picker.pick(ray.origin, *ray.direction, markers) {
            Some(PickResult::Marker(index)) => QuizInput::MarkerClicked(index),
            Some(PickResult::Surface(point)) => {
                let coords = GeographicCoordinates::from_surface_point(point);
                debug!(
                    "Guess at lat {:.1}, lon {:.1}",
                    coords.latitude, coords.longitude
                );
                QuizInput::SurfaceGuess(point)
            }
            None => continue,
        };
        inputs.send(QuizInputEvent(input));
    }
}

/// Hover über Maus oder laufende Touch-Bewegung
pub fn marker_hover_system(
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<QuizCamera>>,
    controller: Res<GameController>,
    settings: Res<QuizSettings>,
    mut hovered: ResMut<HoveredMarker>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };

    let pointer = touches
        .iter()
        .next()
        .map(|t| t.position())
        .or_else(|| window.cursor_position());

    let markers = controller.session().markers();
    let next = pointer
        .and_then(|position| camera.viewport_to_world(camera_transform, position))
        .and_then(|ray| picker(&settings).hovered_marker(ray.origin, *ray.direction, markers));

    if hovered.0 != next {
        hovered.0 = next;
    }
}
