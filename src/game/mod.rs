pub mod catalog;
pub mod controller;
pub mod difficulty;
pub mod error;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod session;
pub mod state;
pub mod systems;

// Re-exports für einfache Verwendung
pub use catalog::{Region, RegionCatalog};
pub use controller::{GameController, QuizInput, QuizOutcome};
pub use difficulty::{Difficulty, DifficultyProfile};
pub use error::{QuizError, QuizResult};
pub use events::{QuizInputEvent, QuizOutcomeEvent};
pub use plugin::QuizPlugin;
pub use resources::QuizSettings;
pub use session::{GuessOutcome, MarkerState, Progress, RegionInfo, Session};
pub use state::QuizState;
