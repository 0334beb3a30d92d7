// ./src/setup.rs
use crate::game::QuizSettings;
use crate::presentation::visualization::blend::GlobeBlend;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

/// Der Globus, auf den getippt wird
#[derive(Component, Debug)]
pub struct Globe;

/// Kamera, deren Strahlen für das Picking verwendet werden
#[derive(Component, Debug)]
pub struct QuizCamera;

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<QuizSettings>,
    blend: Res<GlobeBlend>,
) {
    // Globus im Ursprung, Nordpol auf +Y
    commands.spawn((
        PbrBundle {
            mesh: meshes.add(Sphere::new(settings.globe_radius).mesh().uv(64, 32)),
            material: materials.add(StandardMaterial {
                base_color: blend.color(),
                metallic: 0.1,
                perceptual_roughness: 0.8,
                ..default()
            }),
            transform: Transform::from_xyz(0.0, 0.0, 0.0),
            ..default()
        },
        Globe,
        Name::new("Globe"),
    ));

    // Licht
    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 8_000.0,
            ..default()
        },
        transform: Transform::from_xyz(4.0, 6.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
    });

    // Kamera
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(0.0, 0.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        globe_camera(),
        QuizCamera,
    ));
}

/// Orbit mit rechter Maustaste, Zoom zwischen 3 und 10, gedämpft
pub fn globe_camera() -> PanOrbitCamera {
    PanOrbitCamera {
        button_orbit: MouseButton::Right,
        button_pan: MouseButton::Middle,
        pan_sensitivity: 0.0, // Globus bleibt zentriert
        radius: Some(5.0),    // Start Entfernung
        zoom_lower_limit: Some(3.0),
        zoom_upper_limit: Some(10.0),
        orbit_smoothness: 0.8,
        zoom_smoothness: 0.8,
        ..default()
    }
}
