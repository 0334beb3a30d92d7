use crate::game::QuizSettings;
use crate::math::utils::comparison;
use crate::setup::Globe;
use bevy::prelude::*;

/// Globusfarbe während der Runde
const POLLUTED_RGB: [f32; 3] = [0.36, 0.42, 0.30];
/// Globusfarbe nach dem Finden aller Hotspots
const CLEAN_RGB: [f32; 3] = [0.20, 0.50, 0.80];

/// Überblendfaktor 0..1 zwischen "verschmutzt" und "sauber".
///
/// Reine Darstellung, die Spiellogik liest den Wert nie.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GlobeBlend {
    pub value: f32,
    start: f32,
    target: f32,
    elapsed: f32,
    duration: f32,
}

impl Default for GlobeBlend {
    fn default() -> Self {
        Self {
            value: 0.0,
            start: 0.0,
            target: 0.0,
            elapsed: 0.0,
            duration: 0.0,
        }
    }
}

impl GlobeBlend {
    /// Startet eine neue Überblendung vom aktuellen Wert aus
    pub fn retarget(&mut self, target: f32, duration: f32) {
        self.start = self.value;
        self.target = target.clamp(0.0, 1.0);
        self.elapsed = 0.0;
        self.duration = duration.max(0.0);
    }

    pub fn is_finished(&self) -> bool {
        comparison::nearly_equal(self.value, self.target)
    }

    pub fn advance(&mut self, delta_seconds: f32) -> f32 {
        if self.duration <= 0.0 {
            self.value = self.target;
            return self.value;
        }
        self.elapsed = (self.elapsed + delta_seconds).min(self.duration);
        let t = comparison::smoothstep(0.0, self.duration, self.elapsed);
        self.value = comparison::lerp(self.start, self.target, t);
        self.value
    }

    pub fn color(&self) -> Color {
        Color::rgb(
            comparison::lerp(POLLUTED_RGB[0], CLEAN_RGB[0], self.value),
            comparison::lerp(POLLUTED_RGB[1], CLEAN_RGB[1], self.value),
            comparison::lerp(POLLUTED_RGB[2], CLEAN_RGB[2], self.value),
        )
    }
}

pub fn start_clean_blend_system(settings: Res<QuizSettings>, mut blend: ResMut<GlobeBlend>) {
    blend.retarget(1.0, settings.blend_seconds);
}

pub fn reset_blend_system(settings: Res<QuizSettings>, mut blend: ResMut<GlobeBlend>) {
    blend.retarget(0.0, settings.blend_seconds);
}

pub fn globe_blend_system(
    time: Res<Time>,
    mut blend: ResMut<GlobeBlend>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    globes: Query<&Handle<StandardMaterial>, With<Globe>>,
) {
    if blend.is_finished() {
        return;
    }
    blend.advance(time.delta_seconds());
    for handle in globes.iter() {
        if let Some(material) = materials.get_mut(handle) {
            material.base_color = blend.color();
        }
    }
}
