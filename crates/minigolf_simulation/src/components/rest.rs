//! Rest state: можно ли сейчас прицеливаться в тело

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Порог скорости покоя (units/sec), как в прототипах сцен
pub const DEFAULT_REST_SPEED_THRESHOLD: f32 = 0.05;

/// Resting / Moving: пересчитывается каждый frame из |linvel|
///
/// Hover и pointer-down учитываются только в Resting.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub enum RestState {
    #[default]
    Resting,
    Moving,
}

impl RestState {
    pub fn from_speed(speed: f32, threshold: f32) -> Self {
        if speed < threshold {
            RestState::Resting
        } else {
            RestState::Moving
        }
    }

    pub fn is_resting(&self) -> bool {
        matches!(self, RestState::Resting)
    }
}
