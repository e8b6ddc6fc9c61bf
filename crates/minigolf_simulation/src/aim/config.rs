//! Aim конфигурация: глобальный `AimConfig` + per-body `AimProfile`

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::DEFAULT_REST_SPEED_THRESHOLD;
use crate::shot::ShotDirection;

/// Глобальные параметры aim pipeline
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
#[serde(default)]
pub struct AimConfig {
    /// |linvel| ниже порога → Resting
    pub rest_speed_threshold: f32,
}

impl Default for AimConfig {
    fn default() -> Self {
        Self {
            rest_speed_threshold: DEFAULT_REST_SPEED_THRESHOLD,
        }
    }
}

impl AimConfig {
    /// Загрузка из JSON (отсутствующие поля → default)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Параметры одного aimable тела ("feel" константы)
///
/// Impulse scale не выводится из физики: это tunable. Пресеты:
/// - `cue()`: power * 10, толстая стрелка (0.25)
/// - `golf_ball()`: power / 25, тонкая стрелка (0.01) под мяч scale 0.1
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct AimProfile {
    pub impulse_scale: f32,
    pub shot_direction: ShotDirection,
    /// Clamp power (None = без ограничения)
    pub max_power: Option<f32>,
    /// X/Z scale стрелки-индикатора
    pub indicator_thickness: f32,
}

impl AimProfile {
    pub const CUE_IMPULSE_SCALE: f32 = 10.0;
    pub const GOLF_BALL_IMPULSE_SCALE: f32 = 1.0 / 25.0;

    pub fn cue() -> Self {
        Self {
            impulse_scale: Self::CUE_IMPULSE_SCALE,
            shot_direction: ShotDirection::TowardPointer,
            max_power: None,
            indicator_thickness: 0.25,
        }
    }

    pub fn golf_ball() -> Self {
        Self {
            impulse_scale: Self::GOLF_BALL_IMPULSE_SCALE,
            shot_direction: ShotDirection::TowardPointer,
            max_power: None,
            indicator_thickness: 0.01,
        }
    }

    pub fn with_impulse_scale(mut self, scale: f32) -> Self {
        self.impulse_scale = scale;
        self
    }

    pub fn with_shot_direction(mut self, direction: ShotDirection) -> Self {
        self.shot_direction = direction;
        self
    }

    pub fn with_max_power(mut self, max_power: f32) -> Self {
        self.max_power = Some(max_power);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for AimProfile {
    fn default() -> Self {
        Self::cue()
    }
}
