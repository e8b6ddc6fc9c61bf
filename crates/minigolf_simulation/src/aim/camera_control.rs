//! Camera-control capability: пока кто-то держит lock, orbit камера не реагирует на drag
//!
//! Вместо общего mutable флага `enabled`: набор владельцев lock'а.
//! Камера включена ⇔ владельцев нет. Освобождение гарантируется на всех путях выхода
//! из Aiming: pointer up, despawn тела, снятие `Aimable` (см. release_orphaned_camera_locks).

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct CameraControl {
    holders: Vec<Entity>,
}

impl CameraControl {
    /// Ambient camera manipulation разрешена
    pub fn is_enabled(&self) -> bool {
        self.holders.is_empty()
    }

    /// Взять lock (идемпотентно). true если lock новый.
    pub fn acquire(&mut self, owner: Entity) -> bool {
        if self.holders.contains(&owner) {
            return false;
        }
        self.holders.push(owner);
        true
    }

    /// Отпустить lock. true если owner его держал.
    pub fn release(&mut self, owner: Entity) -> bool {
        let before = self.holders.len();
        self.holders.retain(|&holder| holder != owner);
        self.holders.len() != before
    }

    pub fn holders(&self) -> &[Entity] {
        &self.holders
    }
}
