//! Pointer системы: проекция, hover raycast, marker sync

use bevy::math::bounding::{BoundingSphere, RayCast3d};
use bevy::prelude::*;

use crate::pointer::{
    project_pointer, ActiveCameraView, HoverTarget, PlaneHeight, PointerInput, PointerMarker,
    PointerProjection, PointerProjector, PointerState,
};

/// Система: пересчёт `PointerProjection` для всех projectors
///
/// Работает каждый frame без gating по aim status.
/// Follow-плоскость без валидного target entity → промах (sentinel).
pub fn project_pointer_system(
    pointer: Res<PointerState>,
    camera: Res<ActiveCameraView>,
    heights: Query<&GlobalTransform>,
    mut projectors: Query<(Entity, &PointerProjector, &mut PointerProjection)>,
) {
    for (entity, projector, mut projection) in projectors.iter_mut() {
        let height = match projector.plane.height {
            PlaneHeight::Fixed(height) => Some(height),
            PlaneHeight::FollowOwner => heights.get(entity).ok().map(|t| t.translation().y),
            PlaneHeight::Follow(target) => heights.get(target).ok().map(|t| t.translation().y),
        };

        let world_point = match height {
            Some(height) => project_pointer(
                camera.0.as_ref(),
                pointer.ndc,
                &projector.plane,
                height,
                projector.vertical_offset,
            ),
            None => Vec3::ZERO,
        };

        // Не трогаем Changed<> без необходимости
        if projection.world_point != world_point {
            projection.world_point = world_point;
        }
    }
}

/// Система: hover raycast (ray vs sphere), ближайшее тело получает hover
///
/// Шлёт Over/Out только при смене состояния.
pub fn detect_pointer_hover(
    pointer: Res<PointerState>,
    camera: Res<ActiveCameraView>,
    mut targets: Query<(Entity, &mut HoverTarget, &GlobalTransform)>,
    mut inputs: EventWriter<PointerInput>,
) {
    let ray = camera.0.as_ref().and_then(|view| view.pointer_ray(pointer.ndc));

    let nearest = ray.and_then(|ray| {
        let cast = RayCast3d::from_ray(ray, f32::MAX);
        targets
            .iter()
            .filter_map(|(entity, target, transform)| {
                let sphere = BoundingSphere::new(transform.translation(), target.radius);
                cast.sphere_intersection_at(&sphere).map(|distance| (entity, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(entity, _)| entity)
    });

    for (entity, mut target, _) in targets.iter_mut() {
        let hovered = nearest == Some(entity);
        if target.set_hovered(hovered) {
            inputs.write(if hovered {
                PointerInput::Over(entity)
            } else {
                PointerInput::Out(entity)
            });
        }
    }
}

/// Система: marker entities повторяют проекцию своего source
pub fn sync_pointer_markers(
    projections: Query<&PointerProjection>,
    mut markers: Query<(&PointerMarker, &mut Transform)>,
) {
    for (marker, mut transform) in markers.iter_mut() {
        let Ok(projection) = projections.get(marker.source) else {
            continue;
        };
        transform.translation = projection.world_point;
    }
}
