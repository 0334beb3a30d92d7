pub mod picking;
pub mod systems;

pub use picking::{GlobePicker, PickResult};
pub use systems::HoveredMarker;
