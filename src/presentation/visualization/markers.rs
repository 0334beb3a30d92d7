use crate::game::{GameController, QuizSettings};
use crate::input::HoveredMarker;
use bevy::prelude::*;

const VISITED_COLOR: Color = Color::rgb(0.0, 0.2, 0.4); // #003366
const HOVER_COLOR: Color = Color::rgb(1.0, 0.97, 0.88); // #FFF7E1

/// Marker-Entität für die Region `index` der aktiven Runde.
#[derive(Component, Debug)]
pub struct HotspotMarker {
    pub index: usize,
}

/// Baut alle Marker neu auf, sobald der Controller eine neue Runde gestartet hat.
pub fn rebuild_markers_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    controller: Res<GameController>,
    settings: Res<QuizSettings>,
    existing: Query<Entity, With<HotspotMarker>>,
    mut built_generation: Local<Option<u64>>,
) {
    if *built_generation == Some(controller.generation()) {
        return;
    }

    for entity in existing.iter() {
        commands.entity(entity).despawn_recursive();
    }

    let mesh = meshes.add(Sphere::new(settings.marker_size).mesh().uv(16, 16));
    for (index, marker) in controller.session().markers().iter().enumerate() {
        commands.spawn((
            PbrBundle {
                mesh: mesh.clone(),
                material: materials.add(StandardMaterial {
                    base_color: VISITED_COLOR,
                    unlit: true,
                    ..default()
                }),
                transform: Transform::from_translation(marker.position * settings.marker_radius()),
                visibility: Visibility::Hidden,
                ..default()
            },
            HotspotMarker { index },
            Name::new(format!("HotspotMarker_{}", index)),
        ));
    }

    info!(
        "Spawned {} hidden markers for round #{}",
        controller.session().markers().len(),
        controller.generation()
    );
    *built_generation = Some(controller.generation());
}

/// Sichtbarkeit und Farbe folgen dem Rundenzustand: erst sichtbar, wenn gefunden.
pub fn sync_marker_visuals_system(
    controller: Res<GameController>,
    hovered: Res<HoveredMarker>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut markers: Query<(&HotspotMarker, &mut Visibility, &Handle<StandardMaterial>)>,
) {
    let states = controller.session().markers();
    for (marker, mut visibility, material) in markers.iter_mut() {
        let Some(state) = states.get(marker.index) else {
            continue;
        };

        let wanted = if state.visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        if *visibility != wanted {
            *visibility = wanted;
        }

        let color = if hovered.0 == Some(marker.index) {
            HOVER_COLOR
        } else {
            VISITED_COLOR
        };
        if materials.get(material).is_some_and(|m| m.base_color != color) {
            if let Some(material) = materials.get_mut(material) {
                material.base_color = color;
            }
        }
    }
}
