// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f32 = 1e-6;
    pub const EPSILON_SQUARED: f32 = EPSILON * EPSILON; // Für Vergleiche mit Längen
    pub const PI: f32 = std::f32::consts::PI;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Lineare Interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Smoothstep interpolation (hermite interpolation)
    pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
        let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
        t * t * (3.0 - 2.0 * t)
    }
}

/// Winkel-Hilfsfunktionen
pub mod angles {
    use super::constants::PI;

    /// Konvertiert Grad zu Radiant
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * PI / 180.0
    }

    /// Konvertiert Radiant zu Grad
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * 180.0 / PI
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_conversion() {
        assert!(comparison::nearly_equal(angles::deg_to_rad(180.0), constants::PI));
        assert!((angles::rad_to_deg(constants::PI * 0.5) - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_smoothstep_is_clamped() {
        assert_eq!(comparison::smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(comparison::smoothstep(0.0, 1.0, 2.0), 1.0);
        assert!(comparison::nearly_equal(comparison::smoothstep(0.0, 1.0, 0.5), 0.5));
    }

    #[test]
    fn test_lerp() {
        assert!(comparison::nearly_equal(comparison::lerp(2.0, 4.0, 0.25), 2.5));
    }
}
