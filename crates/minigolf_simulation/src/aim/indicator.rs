//! Arrow indicator: визуализация aim от origin до live target
//!
//! Стрелка: единичный цилиндр вдоль +Y. Позиция = середина отрезка,
//! rotation = shortest arc +Y → direction, scale = (thickness, length, thickness).

use bevy::prelude::*;

/// Описание стрелки для renderer'а (считается каждый frame)
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct AimIndicator {
    pub visible: bool,
    pub transform: Transform,
}

/// None для нулевой длины (нечего рисовать, направление не определено)
pub fn arrow_transform(origin: Vec3, target: Vec3, thickness: f32) -> Option<Transform> {
    let delta = target - origin;
    let length = delta.length();
    if !length.is_finite() || length <= f32::EPSILON {
        return None;
    }

    Some(Transform {
        translation: (origin + target) * 0.5,
        rotation: Quat::from_rotation_arc(Vec3::Y, delta / length),
        scale: Vec3::new(thickness, length, thickness),
    })
}
