//! Pointer компоненты: projector, последняя проекция, hover raycast, marker

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::pointer::ReferencePlane;

/// Pointer Projector одного aimable тела
///
/// Каждый frame (безусловно) пересчитывает `PointerProjection` по своей plane.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[require(PointerProjection)]
pub struct PointerProjector {
    pub plane: ReferencePlane,
    /// Добавляется к y компоненте результата
    pub vertical_offset: f32,
}

impl PointerProjector {
    pub fn new(plane: ReferencePlane) -> Self {
        Self {
            plane,
            vertical_offset: 0.0,
        }
    }

    pub fn with_vertical_offset(mut self, offset: f32) -> Self {
        self.vertical_offset = offset;
        self
    }
}

/// Последняя world-space проекция pointer'а. `Vec3::ZERO` при промахе.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct PointerProjection {
    pub world_point: Vec3,
}

/// Hover raycast: ray vs bounding sphere тела
///
/// Заменяет pointer-enter/leave callbacks renderer'а: при смене hovered
/// шлётся `PointerInput::Over/Out`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct HoverTarget {
    pub radius: f32,
    hovered: bool,
}

impl HoverTarget {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            hovered: false,
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Возвращает true если состояние изменилось
    pub(crate) fn set_hovered(&mut self, hovered: bool) -> bool {
        let changed = self.hovered != hovered;
        self.hovered = hovered;
        changed
    }
}

/// Marker entity, transform которого повторяет проекцию `source`
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct PointerMarker {
    pub source: Entity,
}
