pub mod blend;
pub mod markers;
pub mod sphere_grid;
