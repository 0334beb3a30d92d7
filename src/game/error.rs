// src/game/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuizError {
    #[error("Invalid catalog entry #{index}: {reason}")]
    Data { index: usize, reason: String },

    #[error("Region catalog could not be read: {reason}")]
    CatalogUnreadable { reason: String },

    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("Marker {index} has not been discovered yet")]
    NotDiscovered { index: usize },

    #[error("Round is complete, no clue left")]
    RoundComplete,
}

impl QuizError {
    pub fn data(index: usize, reason: impl Into<String>) -> Self {
        Self::Data {
            index,
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Fehler, die die UI ohne Meldung verwerfen darf
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotDiscovered { .. } | Self::RoundComplete)
    }
}

pub type QuizResult<T> = Result<T, QuizError>;
