// src/math/geometry/sphere/coordinates.rs

use crate::math::{types::*, utils::*};

/// Geografische Koordinaten in Grad.
///
/// Der Längengrad wird nicht normalisiert: Katalogdaten mit Werten außerhalb von
/// [-180, 180] bleiben unverändert, die Umrechnung behandelt sie implizit modulo 360°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicCoordinates {
    /// Breitengrad in Grad (-90 bis 90)
    pub latitude: f32,
    /// Längengrad in Grad (roh)
    pub longitude: f32,
}

impl GeographicCoordinates {
    pub fn new(latitude: f32, longitude: f32) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Punkt auf der Einheitskugel, siehe [`to_surface_point`]
    pub fn to_surface_point(&self) -> Point3D {
        to_surface_point(self.latitude, self.longitude)
    }

    /// Umkehrung von [`to_surface_point`]. Der Längengrad liegt danach in (-180, 180].
    pub fn from_surface_point(point: Point3D) -> Self {
        let radius = point.length();
        if radius < constants::EPSILON {
            return Self::new(0.0, 0.0);
        }

        let normalized = point / radius;
        // phi = Polarwinkel von +Y, theta = Azimut mit Naht bei lon = -180
        let phi = normalized.y.clamp(-1.0, 1.0).acos();
        let theta = normalized.z.atan2(normalized.x);

        let latitude = 90.0 - angles::rad_to_deg(phi);
        let mut longitude = angles::rad_to_deg(theta) - 180.0;
        if longitude <= -180.0 {
            longitude += 360.0;
        }

        Self::new(latitude, longitude)
    }
}

/// Konvertiert Breiten-/Längengrad (Grad) in einen Punkt auf der Einheitskugel.
///
/// Die Y-Achse zeigt zum Nordpol, die Naht liegt bei Längengrad -180:
/// `phi = (90 - lat)`, `theta = (lon + 180)`,
/// `(sin(phi) * cos(theta), cos(phi), sin(phi) * sin(theta))`.
pub fn to_surface_point(latitude: f32, longitude: f32) -> Point3D {
    let phi = angles::deg_to_rad(90.0 - latitude);
    let theta = angles::deg_to_rad(longitude + 180.0);
    let sin_phi = phi.sin();

    Point3D::new(sin_phi * theta.cos(), phi.cos(), sin_phi * theta.sin())
}

/// Gerade Schnurlänge (Chord) zwischen zwei Punkten.
/// Auf derselben Kugel monoton zum Winkelabstand.
pub fn chord_distance(a: Point3D, b: Point3D) -> f32 {
    a.distance(b)
}

/// Winkel (Radiant) zu einer Schnurlänge auf der Einheitskugel
pub fn chord_to_angle(chord: f32) -> f32 {
    2.0 * (chord * 0.5).clamp(-1.0, 1.0).asin()
}

/// Koordinaten-Konvertierungs-Utilities
pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Projiziert einen Punkt auf eine Kugel
    pub fn project_to_sphere(point: Point3D, radius: f32) -> Point3D {
        let distance = point.length();
        if distance < constants::EPSILON {
            return Point3D::new(radius, 0.0, 0.0);
        }
        point * (radius / distance)
    }
}
