// src/math/geometry/mod.rs

pub mod sphere;

pub use self::sphere::{CoordinateConverter, GeographicCoordinates};
