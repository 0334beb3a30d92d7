// src/math/geometry/sphere/mod.rs

// Kugel-spezifische Funktionalität
pub mod coordinates;

pub use self::coordinates::{
    CoordinateConverter, GeographicCoordinates, chord_distance, chord_to_angle, to_surface_point,
};
