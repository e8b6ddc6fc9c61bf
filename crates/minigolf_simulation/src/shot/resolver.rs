//! Shot Resolver: (aim origin, target) → direction + power → ровно один impulse
//!
//! - `power = |target − origin|`, `direction = delta / power`
//! - zero-length drag (power ≤ EPSILON) → no-op, без деления на ноль
//! - impulse = direction * power * impulse_scale (scale: конфигурация, см. AimProfile)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::aim::AimProfile;
use crate::components::AimableBody;

/// Куда летит тело относительно pointer'а
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum ShotDirection {
    /// direction = normalize(pointer − origin)
    #[default]
    TowardPointer,
    /// Slingshot: тянем назад, тело летит от pointer'а (power тот же)
    AwayFromPointer,
}

/// Производный вектор выстрела (не хранится)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotVector {
    /// Unit vector
    pub direction: Vec3,
    pub power: f32,
}

impl ShotVector {
    pub fn impulse(&self, scale: f32) -> Vec3 {
        self.direction * (self.power * scale)
    }
}

/// direction/power из drag вектора. None для нулевой (или не-finite) длины.
pub fn resolve_shot(origin: Vec3, target: Vec3) -> Option<ShotVector> {
    let delta = target - origin;
    let power = delta.length();

    if !power.is_finite() || power <= f32::EPSILON {
        return None;
    }

    Some(ShotVector {
        direction: delta / power,
        power,
    })
}

/// `resolve_shot` + настройки профиля (направление, clamp power)
pub fn resolve_profile_shot(origin: Vec3, target: Vec3, profile: &AimProfile) -> Option<ShotVector> {
    let mut shot = resolve_shot(origin, target)?;

    if profile.shot_direction == ShotDirection::AwayFromPointer {
        shot.direction = -shot.direction;
    }
    if let Some(max_power) = profile.max_power {
        shot.power = shot.power.min(max_power.max(0.0));
    }

    Some(shot)
}

/// Применить выстрел к телу: ровно один impulse, либо ничего
pub fn shoot(
    body: &mut impl AimableBody,
    origin: Vec3,
    target: Vec3,
    profile: &AimProfile,
) -> Option<ShotVector> {
    let shot = resolve_profile_shot(origin, target, profile)?;
    body.apply_impulse(shot.impulse(profile.impulse_scale));
    Some(shot)
}

/// Event: тело запущено (один на завершённый aim gesture)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ShotFired {
    pub entity: Entity,
    pub origin: Vec3,
    pub target: Vec3,
    pub direction: Vec3,
    pub power: f32,
    pub impulse: Vec3,
}
