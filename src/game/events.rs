// src/game/events.rs
use super::controller::{QuizInput, QuizOutcome};
use bevy::prelude::*;

/// Eingabe-Adapter und UI senden hierüber an den Controller
#[derive(Event, Debug, Clone)]
pub struct QuizInputEvent(pub QuizInput);

/// Ergebnis jedes `dispatch`, für die Darstellung
#[derive(Event, Debug, Clone)]
pub struct QuizOutcomeEvent(pub QuizOutcome);
