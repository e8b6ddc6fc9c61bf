//! Tests for pointer projection.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::pointer::{cursor_to_ndc, project_pointer, CameraView, ReferencePlane};

    const EPS: f32 = 1e-3;

    /// Камера над столом, смотрит на origin под углом
    fn table_camera() -> CameraView {
        CameraView::perspective(
            Transform::from_xyz(0.0, 12.0, 16.0).looking_at(Vec3::ZERO, Vec3::Y),
            std::f32::consts::FRAC_PI_4,
            16.0 / 9.0,
            0.1,
        )
    }

    /// Камера смотрит горизонтально вдоль −Z на высоте 5
    fn horizon_camera() -> CameraView {
        CameraView::perspective(
            Transform::from_xyz(0.0, 5.0, 0.0).looking_at(Vec3::new(0.0, 5.0, -10.0), Vec3::Y),
            std::f32::consts::FRAC_PI_4,
            1.0,
            0.1,
        )
    }

    #[test]
    fn test_projection_round_trips_world_point() {
        let view = table_camera();
        let target = Vec3::new(3.0, 0.0, 4.0);

        let ndc = view.world_to_ndc(target).expect("target in front of camera");
        let point = project_pointer(Some(&view), ndc, &ReferencePlane::fixed(0.0), 0.0, 0.0);

        assert!(point.distance(target) < EPS, "projected {:?}, expected {:?}", point, target);
    }

    #[test]
    fn test_hits_report_plane_height() {
        let view = table_camera();
        let plane = ReferencePlane::fixed(2.0);
        let mut hits = 0;

        for ix in -4..=4 {
            for iy in -4..=4 {
                let ndc = Vec2::new(ix as f32 * 0.25, iy as f32 * 0.25);
                let point = project_pointer(Some(&view), ndc, &plane, 2.0, 0.0);
                if point != Vec3::ZERO {
                    hits += 1;
                    assert!((point.y - 2.0).abs() < EPS, "ndc {:?} hit at height {}", ndc, point.y);
                }
            }
        }

        assert!(hits > 0);
    }

    #[test]
    fn test_vertical_offset_added_to_height() {
        let view = table_camera();
        let point = project_pointer(Some(&view), Vec2::ZERO, &ReferencePlane::fixed(0.5), 0.5, 0.25);
        assert!((point.y - 0.75).abs() < EPS);
    }

    #[test]
    fn test_ray_above_horizon_is_exact_zero() {
        let view = horizon_camera();
        let plane = ReferencePlane::fixed(0.0);

        // Вверх от горизонта: плоскость не пересекается
        assert_eq!(project_pointer(Some(&view), Vec2::new(0.0, 0.5), &plane, 0.0, 0.0), Vec3::ZERO);
        // Offset не применяется к промаху
        assert_eq!(project_pointer(Some(&view), Vec2::new(0.3, 0.9), &plane, 0.0, 1.5), Vec3::ZERO);
        // Ray ровно параллелен плоскости
        assert_eq!(project_pointer(Some(&view), Vec2::ZERO, &plane, 0.0, 0.0), Vec3::ZERO);
    }

    #[test]
    fn test_plane_above_downward_camera_misses() {
        let view = table_camera();
        let point = project_pointer(Some(&view), Vec2::ZERO, &ReferencePlane::fixed(20.0), 20.0, 0.0);
        assert_eq!(point, Vec3::ZERO);
    }

    #[test]
    fn test_finite_surface_rejects_far_hits() {
        let view = horizon_camera();
        // Чуть ниже горизонта → пересечение далеко впереди
        let ndc = Vec2::new(0.0, -0.05);

        let infinite = project_pointer(Some(&view), ndc, &ReferencePlane::fixed(0.0), 0.0, 0.0);
        assert_ne!(infinite, Vec3::ZERO);
        assert!(infinite.z < -25.0);

        let finite = ReferencePlane::fixed(0.0).with_half_extents(Vec2::splat(25.0));
        assert_eq!(project_pointer(Some(&view), ndc, &finite, 0.0, 0.0), Vec3::ZERO);
    }

    #[test]
    fn test_missing_camera_is_sentinel() {
        let point = project_pointer(None, Vec2::ZERO, &ReferencePlane::fixed(0.0), 0.0, 0.0);
        assert_eq!(point, Vec3::ZERO);
    }

    #[test]
    fn test_world_to_ndc_behind_camera() {
        let view = horizon_camera();
        assert!(view.world_to_ndc(Vec3::new(0.0, 5.0, 10.0)).is_none());
        assert!(view.world_to_ndc(Vec3::new(0.0, 5.0, -10.0)).is_some());
    }

    #[test]
    fn test_cursor_to_ndc() {
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(cursor_to_ndc(Vec2::ZERO, viewport), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(cursor_to_ndc(Vec2::new(400.0, 300.0), viewport), Some(Vec2::ZERO));
        assert_eq!(cursor_to_ndc(viewport, viewport), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(cursor_to_ndc(Vec2::ZERO, Vec2::ZERO), None);
    }
}
