//! Pointer input: события и per-frame состояние от клиента (renderer)
//!
//! Клиент пишет `PointerState` + `ActiveCameraView` каждый frame и шлёт
//! `PointerInput` события между кадрами. Headless тесты делают то же самое вручную.

use bevy::prelude::*;

use crate::pointer::CameraView;

/// Pointer событие
///
/// - Over / Out: pointer вошёл / вышел с renderable shape конкретного тела
/// - Down / Up: глобальные (как window-level mouse listeners): каждый aim session
///   сам решает, относится ли событие к нему
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    Over(Entity),
    Out(Entity),
    Down,
    Up,
}

/// Текущие координаты pointer'а в normalized device space ([-1, 1] по обеим осям)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
}

/// Активная камера (None до первого кадра клиента → все проекции = sentinel)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ActiveCameraView(pub Option<CameraView>);
