//! Tests for the aim arrow transform.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::aim::arrow_transform;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_arrow_spans_origin_to_target() {
        let origin = Vec3::new(1.0, 0.0, 1.0);
        let target = Vec3::new(4.0, 0.0, 5.0);

        let transform = arrow_transform(origin, target, 0.25).unwrap();

        assert!((transform.translation - Vec3::new(2.5, 0.0, 3.0)).length() < EPS);
        assert!((transform.scale - Vec3::new(0.25, 5.0, 0.25)).length() < EPS);

        // Локальная +Y ось цилиндра смотрит на target
        let axis = transform.rotation * Vec3::Y;
        assert!((axis - Vec3::new(0.6, 0.0, 0.8)).length() < EPS);

        // Концы цилиндра (±0.5 по Y) попадают в origin / target
        let tip = transform.transform_point(Vec3::new(0.0, 0.5, 0.0));
        let tail = transform.transform_point(Vec3::new(0.0, -0.5, 0.0));
        assert!((tip - target).length() < 1e-4);
        assert!((tail - origin).length() < 1e-4);
    }

    #[test]
    fn test_arrow_pointing_down() {
        let transform = arrow_transform(Vec3::ZERO, Vec3::new(0.0, -2.0, 0.0), 0.01).unwrap();
        let axis = transform.rotation * Vec3::Y;
        assert!((axis - Vec3::NEG_Y).length() < EPS);
    }

    #[test]
    fn test_zero_length_arrow_is_hidden() {
        assert!(arrow_transform(Vec3::ONE, Vec3::ONE, 0.25).is_none());
    }
}
