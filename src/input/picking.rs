// src/input/picking.rs
use crate::game::MarkerState;
use crate::math::geometry::sphere::CoordinateConverter;
use crate::math::types::Point3D;
use crate::math::utils::constants;

/// Was ein Zeigerstrahl getroffen hat
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickResult {
    /// Sichtbarer Marker (Index in die aktiven Regionen)
    Marker(usize),
    /// Globusoberfläche, normiert auf die Einheitskugel
    Surface(Point3D),
}

/// Strahlparameter `t >= 0` des ersten Schnittpunkts mit einer Kugel.
/// Liegt der Ursprung in der Kugel, wird der Austrittspunkt geliefert.
pub fn ray_sphere_intersection(
    origin: Point3D,
    direction: Point3D,
    center: Point3D,
    radius: f32,
) -> Option<f32> {
    if direction.length_squared() < constants::EPSILON_SQUARED {
        return None;
    }
    let direction = direction.normalize();
    let oc = origin - center;
    let b = oc.dot(direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let near = -b - sqrt_d;
    let far = -b + sqrt_d;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}

/// Trefferprüfung gegen Globus und Marker in Weltkoordinaten (Globus im Ursprung).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobePicker {
    pub globe_radius: f32,
    /// Abstand der Markermittelpunkte vom Ursprung
    pub marker_radius: f32,
    /// Radius der Markerkugeln
    pub marker_size: f32,
}

impl GlobePicker {
    /// Sichtbare Marker haben Vorrang vor der Oberfläche, solange der Globus sie nicht verdeckt.
    pub fn pick(
        &self,
        origin: Point3D,
        direction: Point3D,
        markers: &[MarkerState],
    ) -> Option<PickResult> {
        let globe_hit =
            ray_sphere_intersection(origin, direction, Point3D::ZERO, self.globe_radius);

        let marker_hit = markers
            .iter()
            .enumerate()
            .filter(|(_, marker)| marker.visible)
            .filter_map(|(index, marker)| {
                let center = marker.position * self.marker_radius;
                ray_sphere_intersection(origin, direction, center, self.marker_size)
                    .map(|t| (index, t))
            })
            .filter(|(_, t)| globe_hit.is_none_or(|globe_t| *t <= globe_t))
            .min_by(|(_, a), (_, b)| a.total_cmp(b));

        if let Some((index, _)) = marker_hit {
            return Some(PickResult::Marker(index));
        }

        globe_hit.map(|t| {
            let point = origin + direction.normalize() * t;
            PickResult::Surface(CoordinateConverter::project_to_sphere(point, 1.0))
        })
    }

    /// Marker unter dem Zeiger, für die Hover-Hervorhebung
    pub fn hovered_marker(
        &self,
        origin: Point3D,
        direction: Point3D,
        markers: &[MarkerState],
    ) -> Option<usize> {
        match self.pick(origin, direction, markers) {
            Some(PickResult::Marker(index)) => Some(index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::sphere::to_surface_point;
    use approx::assert_abs_diff_eq;

    fn picker() -> GlobePicker {
        GlobePicker {
            globe_radius: 2.0,
            marker_radius: 2.1,
            marker_size: 0.06,
        }
    }

    fn marker(position: Point3D, visible: bool) -> MarkerState {
        MarkerState {
            position,
            visited: visible,
            visible,
        }
    }

    #[test]
    fn test_ray_sphere_hit_and_miss() {
        let origin = Point3D::new(0.0, 0.0, 5.0);
        let t = ray_sphere_intersection(origin, -Point3D::Z, Point3D::ZERO, 2.0).unwrap();
        assert_abs_diff_eq!(t, 3.0, epsilon = 1e-5);

        assert!(ray_sphere_intersection(origin, Point3D::Z, Point3D::ZERO, 2.0).is_none());
        assert!(
            ray_sphere_intersection(Point3D::new(3.0, 0.0, 5.0), -Point3D::Z, Point3D::ZERO, 2.0)
                .is_none()
        );
    }

    #[test]
    fn test_ray_from_inside_returns_exit() {
        let t = ray_sphere_intersection(Point3D::ZERO, Point3D::X, Point3D::ZERO, 2.0).unwrap();
        assert_abs_diff_eq!(t, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_surface_pick_is_unit_point() {
        let target = to_surface_point(20.0, 45.0);
        let origin = target * 5.0;
        match picker().pick(origin, -target, &[]) {
            Some(PickResult::Surface(point)) => {
                assert_abs_diff_eq!(point.length(), 1.0, epsilon = 1e-5);
                assert!(point.distance(target) < 1e-4);
            }
            other => panic!("expected surface hit, got {:?}", other),
        }
    }

    #[test]
    fn test_visible_marker_wins_over_surface() {
        let target = to_surface_point(-10.0, 60.0);
        let markers = [marker(to_surface_point(50.0, 0.0), true), marker(target, true)];
        assert_eq!(
            picker().pick(target * 5.0, -target, &markers),
            Some(PickResult::Marker(1))
        );
    }

    #[test]
    fn test_hidden_marker_is_not_pickable() {
        let target = to_surface_point(-10.0, 60.0);
        let markers = [marker(target, false)];
        assert!(matches!(
            picker().pick(target * 5.0, -target, &markers),
            Some(PickResult::Surface(_))
        ));
        assert_eq!(picker().hovered_marker(target * 5.0, -target, &markers), None);
    }

    #[test]
    fn test_marker_behind_globe_is_occluded() {
        let target = to_surface_point(0.0, 0.0);
        // Marker auf der Rückseite, Strahl geht durch den Globus
        let markers = [marker(-target, true)];
        assert!(matches!(
            picker().pick(target * 5.0, -target, &markers),
            Some(PickResult::Surface(_))
        ));
    }

    #[test]
    fn test_ray_past_globe_hits_nothing() {
        let origin = Point3D::new(0.0, 3.0, 5.0);
        assert_eq!(picker().pick(origin, -Point3D::Z, &[]), None);
    }
}
