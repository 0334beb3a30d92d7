use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum QuizState {
    #[default] // Startzustand, bis der Katalog geladen ist
    Loading,
    Playing,
    Complete,
}
