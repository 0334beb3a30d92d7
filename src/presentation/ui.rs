// ./src/presentation/ui.rs
use super::feedback::{FeedbackState, ToastKind};
use crate::game::{Difficulty, GameController, QuizInput, QuizInputEvent, QuizSettings};
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{self, Align2, Color32, ComboBox, ProgressBar, RichText, Window},
};

/// Hinweis, Fortschritt, Schwierigkeitswahl und Neustart
pub fn quiz_panel_system(
    mut contexts: EguiContexts,
    controller: Res<GameController>,
    mut settings: ResMut<QuizSettings>,
    mut inputs: EventWriter<QuizInputEvent>,
) {
    let session = controller.session();
    let progress = session.progress();

    Window::new("Pollution Hotspots")
        .default_width(320.0)
        .anchor(Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            match session.current_clue() {
                Ok(clue) => {
                    ui.label(RichText::new("Where is this?").strong());
                    ui.label(clue);
                }
                Err(_) => {
                    ui.label(RichText::new("Round complete!").strong());
                    ui.label("Click a marker to read about it again, or start a new round.");
                }
            }

            ui.separator();
            ui.add(
                ProgressBar::new(progress.fraction())
                    .text(format!("{:.0}%", progress.percent())),
            );
            ui.label(format!(
                "{} / {} regions found",
                progress.discovered, progress.total
            ));

            ui.separator();
            let mut selected = controller.difficulty();
            ui.horizontal(|ui| {
                ComboBox::from_label("Difficulty")
                    .selected_text(selected.label())
                    .show_ui(ui, |ui| {
                        for difficulty in Difficulty::ALL {
                            ui.selectable_value(&mut selected, difficulty, difficulty.label());
                        }
                    });
                if ui.button("↺ Restart").clicked() {
                    inputs.send(QuizInputEvent(QuizInput::Restart));
                }
            });
            if selected != controller.difficulty() {
                // Fortschritt der laufenden Runde wird verworfen
                inputs.send(QuizInputEvent(QuizInput::SelectDifficulty(selected)));
            }

            ui.collapsing("Camera", |ui| {
                ui.label("Left click: guess / open a found marker");
                ui.label("Right mouse + drag: orbit");
                ui.label("Mouse wheel: zoom");
                grid_checkbox(ui, &mut settings);
            });
        });
}

/// Schreibt nur bei echter Änderung, sonst gilt `QuizSettings` jeden Frame als geändert
fn grid_checkbox(ui: &mut egui::Ui, settings: &mut ResMut<QuizSettings>) {
    let mut show_grid = settings.show_grid;
    if ui.checkbox(&mut show_grid, "Show lat/lon grid").changed() {
        settings.show_grid = show_grid;
    }
}

/// Toast oben mittig und die schließbare Infokarte
pub fn feedback_overlay_system(mut contexts: EguiContexts, mut feedback: ResMut<FeedbackState>) {
    let ctx = contexts.ctx_mut();

    if let Some(toast) = &feedback.toast {
        let color = match toast.kind {
            ToastKind::Success => Color32::from_rgb(0x4c, 0xaf, 0x50),
            ToastKind::Failure => Color32::from_rgb(0xe5, 0x39, 0x35),
            ToastKind::Info => Color32::from_rgb(0xff, 0xc4, 0x00),
        };
        egui::Area::new(egui::Id::new("quiz_toast"))
            .anchor(Align2::CENTER_TOP, [0.0, 16.0])
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(RichText::new(&toast.text).color(color).size(18.0));
                });
            });
    }

    let mut close = false;
    if let Some(info) = &feedback.info_card {
        Window::new(info.name.as_str())
            .id(egui::Id::new("quiz_info_card"))
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| {
                ui.label(info.description.as_str());
                ui.add_space(8.0);
                if ui.button("Close").clicked() {
                    close = true;
                }
            });
    }
    if close {
        feedback.close_info_card();
    }
}
