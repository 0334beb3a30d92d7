// src/presentation/visualization/sphere_grid.rs
use crate::game::QuizSettings;
use crate::math::geometry::sphere::to_surface_point;
use bevy::prelude::*;

const GRID_STEP_DEG: i32 = 30;
const SEGMENTS_PER_MERIDIAN: usize = 32;

/// Breiten- und Längengrade knapp über der Globusoberfläche
pub fn draw_sphere_grid_gizmos(mut gizmos: Gizmos, settings: Res<QuizSettings>) {
    if !settings.show_grid || settings.globe_radius <= 0.0 {
        return;
    }
    // Leicht über der Oberfläche, damit die Linien nicht im Mesh verschwinden
    let radius = settings.globe_radius * 1.003;

    let lat_color = Color::rgba(1.0, 1.0, 1.0, 0.15);
    let lon_color = Color::rgba(1.0, 1.0, 1.0, 0.15);
    let equator_color = Color::rgba(1.0, 0.77, 0.0, 0.35);

    // --- Breitenkreise, parallel zur XZ-Ebene ---
    for lat in (-90 + GRID_STEP_DEG..90).step_by(GRID_STEP_DEG as usize) {
        let point = to_surface_point(lat as f32, 0.0) * radius;
        let circle_radius_in_xz_plane = Vec2::new(point.x, point.z).length();
        let color = if lat == 0 { equator_color } else { lat_color };
        gizmos.circle(
            Vec3::new(0.0, point.y, 0.0),
            Direction3d::Y,
            circle_radius_in_xz_plane,
            color,
        );
    }

    // --- Längengrade, Halbkreise von Pol zu Pol ---
    for lon in (-180..180).step_by(GRID_STEP_DEG as usize) {
        let points = (0..=SEGMENTS_PER_MERIDIAN).map(|j| {
            let lat = -90.0 + 180.0 * j as f32 / SEGMENTS_PER_MERIDIAN as f32;
            to_surface_point(lat, lon as f32) * radius
        });
        gizmos.linestrip(points, lon_color);
    }
}
