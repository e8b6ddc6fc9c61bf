//! Pointer Projector: 2D pointer (NDC) + camera → 3D точка на reference plane.
//!
//! Ray строится как в screen-ray хелперах Bevy: unproject NDC на near plane (depth 1,
//! reverse-Z) и почти на бесконечности (depth EPSILON), направление = far − near.
//! Промах (ray параллелен плоскости, плоскость за камерой, вне extents, нет камеры)
//! → sentinel `Vec3::ZERO`, не ошибка.

use bevy::math::primitives::InfinitePlane3d;
use bevy::math::Ray3d;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Snapshot активной камеры: world transform + projection matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub world_from_view: Mat4,
    pub clip_from_view: Mat4,
}

impl CameraView {
    pub fn new(transform: &GlobalTransform, clip_from_view: Mat4) -> Self {
        Self {
            world_from_view: transform.compute_matrix(),
            clip_from_view,
        }
    }

    /// Perspective камера с той же проекцией, что у Bevy (infinite reverse-Z)
    pub fn perspective(transform: Transform, fov_y: f32, aspect_ratio: f32, near: f32) -> Self {
        Self {
            world_from_view: transform.compute_matrix(),
            clip_from_view: Mat4::perspective_infinite_reverse_rh(fov_y, aspect_ratio, near),
        }
    }

    /// Ray из камеры через pointer (NDC в [-1, 1])
    ///
    /// Origin на near plane. None для вырожденной матрицы.
    pub fn pointer_ray(&self, ndc: Vec2) -> Option<Ray3d> {
        let ndc_to_world = self.world_from_view * self.clip_from_view.inverse();
        let near = ndc_to_world.project_point3(ndc.extend(1.0));
        let far = ndc_to_world.project_point3(ndc.extend(f32::EPSILON));

        if !near.is_finite() || !far.is_finite() {
            return None;
        }

        let direction = Dir3::new(far - near).ok()?;
        Some(Ray3d::new(near, direction))
    }

    /// Обратная операция: world point → NDC. None если точка за камерой.
    pub fn world_to_ndc(&self, point: Vec3) -> Option<Vec2> {
        let view_point = self.world_from_view.inverse().transform_point3(point);
        // Камера смотрит вдоль −Z
        if view_point.z >= 0.0 {
            return None;
        }

        let ndc = self.clip_from_view.project_point3(view_point);
        ndc.is_finite().then(|| ndc.truncate())
    }
}

/// Высота reference plane
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub enum PlaneHeight {
    /// Статическая горизонтальная поверхность на заданной высоте
    Fixed(f32),
    /// Плоскость перепривязывается каждый frame к высоте самого aimable тела
    FollowOwner,
    /// Плоскость перепривязывается каждый frame к высоте другого entity
    Follow(Entity),
}

impl Default for PlaneHeight {
    fn default() -> Self {
        Self::Fixed(0.0)
    }
}

/// Горизонтальная reference plane (нормаль +Y)
///
/// `half_extents`: конечная поверхность вокруг origin по XZ (например пол 50×50);
/// None = бесконечная плоскость.
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect, Serialize, Deserialize)]
pub struct ReferencePlane {
    pub height: PlaneHeight,
    pub half_extents: Option<Vec2>,
}

impl ReferencePlane {
    pub fn fixed(height: f32) -> Self {
        Self {
            height: PlaneHeight::Fixed(height),
            half_extents: None,
        }
    }

    pub fn follow_owner() -> Self {
        Self {
            height: PlaneHeight::FollowOwner,
            half_extents: None,
        }
    }

    pub fn with_half_extents(mut self, half_extents: Vec2) -> Self {
        self.half_extents = Some(half_extents);
        self
    }

    /// Пересечение ray с плоскостью на высоте `height`
    pub fn intersect(&self, ray: Ray3d, height: f32) -> Option<Vec3> {
        let distance = ray.intersect_plane(Vec3::Y * height, InfinitePlane3d { normal: Dir3::Y })?;
        let point = ray.get_point(distance);

        if let Some(half) = self.half_extents {
            if point.x.abs() > half.x || point.z.abs() > half.y {
                return None;
            }
        }

        Some(point)
    }
}

/// Проекция pointer'а на plane (+ vertical offset к y результата)
///
/// Промах → `Vec3::ZERO` (offset не применяется).
pub fn project_pointer(
    view: Option<&CameraView>,
    ndc: Vec2,
    plane: &ReferencePlane,
    plane_height: f32,
    vertical_offset: f32,
) -> Vec3 {
    let hit = view
        .and_then(|view| view.pointer_ray(ndc))
        .and_then(|ray| plane.intersect(ray, plane_height));

    match hit {
        Some(point) => point + Vec3::Y * vertical_offset,
        None => Vec3::ZERO,
    }
}

/// Cursor (logical px, origin top-left) → NDC ([-1, 1], +Y вверх)
pub fn cursor_to_ndc(cursor: Vec2, viewport_size: Vec2) -> Option<Vec2> {
    if viewport_size.x <= 0.0 || viewport_size.y <= 0.0 {
        return None;
    }

    Some(Vec2::new(
        cursor.x / viewport_size.x * 2.0 - 1.0,
        1.0 - cursor.y / viewport_size.y * 2.0,
    ))
}
