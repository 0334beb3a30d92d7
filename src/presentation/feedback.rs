// src/presentation/feedback.rs
use crate::game::{GuessOutcome, QuizOutcome, QuizOutcomeEvent, QuizSettings, RegionInfo};
use crate::math::geometry::sphere::chord_to_angle;
use crate::math::utils::angles;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
    Info,
}

/// Kurzlebige Rückmeldung nach einem Tipp
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    /// Restzeit in Sekunden
    pub remaining: f32,
}

/// Was die UI gerade zusätzlich zum Quiz-Panel anzeigt.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct FeedbackState {
    pub toast: Option<Toast>,
    /// Infokarte mit Name und Beschreibung, per Knopf schließbar
    pub info_card: Option<RegionInfo>,
}

impl FeedbackState {
    pub fn show_toast(&mut self, text: impl Into<String>, kind: ToastKind, seconds: f32) {
        self.toast = Some(Toast {
            text: text.into(),
            kind,
            remaining: seconds,
        });
    }

    pub fn apply(&mut self, outcome: &QuizOutcome, toast_seconds: f32) {
        match outcome {
            QuizOutcome::Guess(GuessOutcome::Hit { found, .. }) => {
                self.show_toast(
                    format!("Found: {}!", found.name),
                    ToastKind::Success,
                    toast_seconds,
                );
                self.info_card = Some(found.clone());
            }
            QuizOutcome::Guess(GuessOutcome::Completed { found, .. }) => {
                self.show_toast(
                    "All hotspots found!",
                    ToastKind::Success,
                    toast_seconds,
                );
                self.info_card = Some(found.clone());
            }
            QuizOutcome::Guess(GuessOutcome::Miss { distance }) => {
                let degrees = angles::rad_to_deg(chord_to_angle(*distance));
                self.show_toast(
                    format!("Not quite, about {:.0}° off. Try again!", degrees),
                    ToastKind::Failure,
                    toast_seconds,
                );
            }
            QuizOutcome::MarkerInfo { info, .. } => {
                self.info_card = Some(info.clone());
            }
            QuizOutcome::SessionStarted { difficulty, .. } => {
                self.info_card = None;
                self.show_toast(
                    format!("New round ({})", difficulty),
                    ToastKind::Info,
                    toast_seconds,
                );
            }
            QuizOutcome::Ignored => {}
        }
    }

    pub fn tick(&mut self, delta_seconds: f32) {
        if let Some(toast) = self.toast.as_mut() {
            toast.remaining -= delta_seconds;
            if toast.remaining <= 0.0 {
                self.toast = None;
            }
        }
    }

    pub fn close_info_card(&mut self) {
        self.info_card = None;
    }
}

pub fn apply_outcome_feedback_system(
    mut outcomes: EventReader<QuizOutcomeEvent>,
    settings: Res<QuizSettings>,
    mut feedback: ResMut<FeedbackState>,
) {
    for QuizOutcomeEvent(outcome) in outcomes.read() {
        feedback.apply(outcome, settings.toast_seconds);
    }
}

pub fn tick_toast_system(time: Res<Time>, mut feedback: ResMut<FeedbackState>) {
    if feedback.toast.is_some() {
        feedback.tick(time.delta_seconds());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Difficulty, Progress};

    fn info(name: &str) -> RegionInfo {
        RegionInfo {
            name: name.to_string(),
            description: format!("{} description", name),
        }
    }

    #[test]
    fn test_hit_opens_info_card() {
        let mut feedback = FeedbackState::default();
        feedback.apply(
            &QuizOutcome::Guess(GuessOutcome::Hit {
                found: info("Aral Sea"),
                next_clue: "next".to_string(),
                progress: Progress {
                    discovered: 1,
                    total: 4,
                },
            }),
            1.5,
        );
        assert_eq!(feedback.info_card, Some(info("Aral Sea")));
        assert_eq!(feedback.toast.as_ref().map(|t| t.kind), Some(ToastKind::Success));
    }

    #[test]
    fn test_miss_reports_angle_and_expires() {
        let mut feedback = FeedbackState::default();
        feedback.apply(&QuizOutcome::Guess(GuessOutcome::Miss { distance: 2.0 }), 1.0);
        let toast = feedback.toast.clone().unwrap();
        assert_eq!(toast.kind, ToastKind::Failure);
        assert!(toast.text.contains("180°"));
        assert!(feedback.info_card.is_none());

        feedback.tick(0.6);
        assert!(feedback.toast.is_some());
        feedback.tick(0.6);
        assert!(feedback.toast.is_none());
    }

    #[test]
    fn test_new_session_closes_info_card() {
        let mut feedback = FeedbackState {
            toast: None,
            info_card: Some(info("Baltic Sea")),
        };
        feedback.apply(
            &QuizOutcome::SessionStarted {
                difficulty: Difficulty::Hard,
                clue: "clue".to_string(),
                progress: Progress {
                    discovered: 0,
                    total: 8,
                },
            },
            1.0,
        );
        assert!(feedback.info_card.is_none());
        assert!(feedback.toast.unwrap().text.contains("hard"));
    }

    #[test]
    fn test_ignored_changes_nothing() {
        let mut feedback = FeedbackState::default();
        feedback.apply(&QuizOutcome::Ignored, 1.0);
        assert_eq!(feedback, FeedbackState::default());
    }
}
