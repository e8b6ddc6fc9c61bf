//! Aimable body: marker component + capability set, которым пользуется aim/shot логика.
//!
//! Physics engine (Rapier) владеет transform/velocity. Aim session только читает их,
//! кроме двух явных записей: freeze при старте прицеливания и impulse при выстреле.

use bevy::prelude::*;
use bevy_rapier3d::prelude::{ExternalImpulse, Velocity};

use crate::aim::{AimIndicator, AimProfile, AimSession};
use crate::components::RestState;
use crate::pointer::PointerProjector;

/// Marker: динамическое тело, которое игрок может прицелить и запустить (cue ball, golf ball)
///
/// Required Components добавляют всё, что нужно aim pipeline'у:
/// session, rest state, profile, projector, indicator, Rapier velocity/impulse.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(
    AimSession,
    RestState,
    AimProfile,
    PointerProjector,
    AimIndicator,
    Velocity,
    ExternalImpulse,
    Transform
)]
pub struct Aimable;

/// Capability set тела для aim/shot логики
///
/// {read position, read velocity, zero velocity, apply impulse}.
/// Один AimSession работает с любым телом, реализующим этот trait.
pub trait AimableBody {
    /// World position (read-only, владелец: physics engine)
    fn position(&self) -> Vec3;

    fn linear_velocity(&self) -> Vec3;

    /// Обнулить linear + angular velocity
    fn freeze(&mut self);

    fn apply_impulse(&mut self, impulse: Vec3);

    /// Resting: |linvel| строго меньше порога
    fn is_resting(&self, threshold: f32) -> bool {
        self.linear_velocity().length() < threshold
    }
}

/// Адаптер Rapier-тела (bevy_rapier3d компоненты одного entity)
pub struct RapierBody<'a> {
    pub transform: &'a GlobalTransform,
    pub velocity: Mut<'a, Velocity>,
    pub impulse: Mut<'a, ExternalImpulse>,
}

impl AimableBody for RapierBody<'_> {
    fn position(&self) -> Vec3 {
        self.transform.translation()
    }

    fn linear_velocity(&self) -> Vec3 {
        self.velocity.linvel
    }

    fn freeze(&mut self) {
        *self.velocity = Velocity::zero();
    }

    fn apply_impulse(&mut self, impulse: Vec3) {
        // ExternalImpulse сбрасывается Rapier'ом после шага: накапливаем в пределах кадра
        self.impulse.impulse += impulse;
    }
}
