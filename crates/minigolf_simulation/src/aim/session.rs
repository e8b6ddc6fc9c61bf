//! Aim Session: state machine одного aimable тела
//!
//! ```text
//! Idle ──Over(resting)──▶ Hovered ──Down(resting)──▶ Aiming ──Up──▶ Idle
//!   ▲                        │
//!   └─────────Out────────────┘
//! ```
//!
//! Инварианты:
//! - `aim_origin.is_some()` ⇔ `status == Aiming`
//! - в Aiming попадаем только из Hovered при RestState::Resting
//! - shoot вызывается максимум один раз на переход Aiming → Idle

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::aim::AimProfile;
use crate::components::{AimableBody, RestState};
use crate::shot::{shoot, ShotVector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum AimStatus {
    #[default]
    Idle,
    Hovered,
    Aiming,
}

/// Результат pointer-up
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AimRelease {
    /// Up без активного aim: no-op
    NotAiming,
    /// Aim завершён, но drag нулевой длины: impulse не применялся
    NoShot { origin: Vec3 },
    /// Ровно один impulse применён
    Fired {
        origin: Vec3,
        target: Vec3,
        shot: ShotVector,
    },
}

/// Aim session component (ephemeral, по одному на aimable тело)
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct AimSession {
    status: AimStatus,
    aim_origin: Option<Vec3>,
    /// Последняя проекция pointer'а, пока идёт прицеливание
    live_target: Option<Vec3>,
}

impl AimSession {
    pub fn status(&self) -> AimStatus {
        self.status
    }

    pub fn is_aiming(&self) -> bool {
        self.status == AimStatus::Aiming
    }

    pub fn aim_origin(&self) -> Option<Vec3> {
        self.aim_origin
    }

    pub fn live_target(&self) -> Option<Vec3> {
        self.live_target
    }

    /// Pointer вошёл на тело. Hover учитывается только в покое.
    pub fn pointer_over(&mut self, rest: RestState) -> bool {
        if self.status == AimStatus::Idle && rest.is_resting() {
            self.status = AimStatus::Hovered;
            return true;
        }
        false
    }

    pub fn pointer_out(&mut self) -> bool {
        if self.status == AimStatus::Hovered {
            self.status = AimStatus::Idle;
            return true;
        }
        false
    }

    /// Hovered + Resting → Aiming: freeze тела, захват origin.
    ///
    /// Возвращает захваченный origin, либо None если переход запрещён.
    pub fn pointer_down(&mut self, rest: RestState, body: &mut impl AimableBody) -> Option<Vec3> {
        if self.status != AimStatus::Hovered || !rest.is_resting() {
            return None;
        }

        // Freeze до захвата origin: движущееся тело нельзя перенаправить mid-aim
        body.freeze();
        let origin = body.position();

        self.status = AimStatus::Aiming;
        self.aim_origin = Some(origin);
        self.live_target = Some(origin);
        Some(origin)
    }

    /// Обновить live target (только в Aiming)
    pub fn track(&mut self, target: Vec3) {
        if self.is_aiming() && self.live_target != Some(target) {
            self.live_target = Some(target);
        }
    }

    /// Aiming → Idle: Shot Resolver с финальной парой (origin, live target)
    pub fn pointer_up(&mut self, body: &mut impl AimableBody, profile: &AimProfile) -> AimRelease {
        let (AimStatus::Aiming, Some(origin)) = (self.status, self.aim_origin) else {
            return AimRelease::NotAiming;
        };
        let target = self.live_target.unwrap_or(origin);

        self.reset();

        match shoot(body, origin, target, profile) {
            Some(shot) => AimRelease::Fired { origin, target, shot },
            None => AimRelease::NoShot { origin },
        }
    }

    /// Сбросить активный aim без выстрела (тело отозвано). true если aim был.
    pub fn cancel(&mut self) -> bool {
        if !self.is_aiming() {
            return false;
        }
        self.reset();
        true
    }

    fn reset(&mut self) {
        self.status = AimStatus::Idle;
        self.aim_origin = None;
        self.live_target = None;
    }
}
