pub mod feedback;
pub mod ui;
pub mod visualization;
