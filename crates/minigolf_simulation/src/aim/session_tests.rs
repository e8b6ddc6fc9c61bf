//! Tests for the aim session state machine.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::aim::{AimProfile, AimRelease, AimSession, AimStatus};
    use crate::components::{AimableBody, RestState};
    use crate::shot::ShotDirection;

    /// Тело без physics engine: позиция + velocity + журнал impulse'ов
    #[derive(Default)]
    struct SimpleBody {
        position: Vec3,
        linvel: Vec3,
        frozen: u32,
        impulses: Vec<Vec3>,
    }

    impl SimpleBody {
        fn at(position: Vec3) -> Self {
            Self {
                position,
                ..default()
            }
        }
    }

    impl AimableBody for SimpleBody {
        fn position(&self) -> Vec3 {
            self.position
        }

        fn linear_velocity(&self) -> Vec3 {
            self.linvel
        }

        fn freeze(&mut self) {
            self.frozen += 1;
            self.linvel = Vec3::ZERO;
        }

        fn apply_impulse(&mut self, impulse: Vec3) {
            self.impulses.push(impulse);
        }
    }

    fn aiming_session(body: &mut SimpleBody) -> AimSession {
        let mut session = AimSession::default();
        assert!(session.pointer_over(RestState::Resting));
        assert!(session.pointer_down(RestState::Resting, body).is_some());
        session
    }

    #[test]
    fn test_session_starts_idle() {
        let session = AimSession::default();
        assert_eq!(session.status(), AimStatus::Idle);
        assert_eq!(session.aim_origin(), None);
        assert_eq!(session.live_target(), None);
    }

    #[test]
    fn test_hover_requires_rest() {
        let mut session = AimSession::default();

        assert!(!session.pointer_over(RestState::Moving));
        assert_eq!(session.status(), AimStatus::Idle);

        assert!(session.pointer_over(RestState::Resting));
        assert_eq!(session.status(), AimStatus::Hovered);

        assert!(session.pointer_out());
        assert_eq!(session.status(), AimStatus::Idle);
    }

    #[test]
    fn test_out_while_idle_is_noop() {
        let mut session = AimSession::default();
        assert!(!session.pointer_out());
        assert_eq!(session.status(), AimStatus::Idle);
    }

    #[test]
    fn test_pointer_down_freezes_and_captures_origin() {
        let mut body = SimpleBody::at(Vec3::new(1.0, 0.5, -2.0));
        body.linvel = Vec3::new(0.01, 0.0, 0.0);

        let mut session = AimSession::default();
        session.pointer_over(RestState::Resting);
        let origin = session.pointer_down(RestState::Resting, &mut body);

        assert_eq!(origin, Some(Vec3::new(1.0, 0.5, -2.0)));
        assert_eq!(session.status(), AimStatus::Aiming);
        assert_eq!(session.aim_origin(), origin);
        assert_eq!(session.live_target(), origin);
        assert_eq!(body.frozen, 1);
        assert_eq!(body.linvel, Vec3::ZERO);
    }

    #[test]
    fn test_pointer_down_while_moving_is_ignored() {
        let mut body = SimpleBody::at(Vec3::ZERO);
        let mut session = AimSession::default();
        session.pointer_over(RestState::Resting);

        // Тело сдвинулось между hover и down
        assert_eq!(session.pointer_down(RestState::Moving, &mut body), None);
        assert_eq!(session.status(), AimStatus::Hovered);
        assert_eq!(body.frozen, 0);
    }

    #[test]
    fn test_pointer_down_without_hover_is_ignored() {
        let mut body = SimpleBody::at(Vec3::ZERO);
        let mut session = AimSession::default();

        assert_eq!(session.pointer_down(RestState::Resting, &mut body), None);
        assert_eq!(session.status(), AimStatus::Idle);
    }

    #[test]
    fn test_hover_events_ignored_while_aiming() {
        let mut body = SimpleBody::at(Vec3::ZERO);
        let mut session = aiming_session(&mut body);

        assert!(!session.pointer_out());
        assert!(!session.pointer_over(RestState::Resting));
        assert!(session.is_aiming());
    }

    #[test]
    fn test_track_only_while_aiming() {
        let mut session = AimSession::default();
        session.track(Vec3::ONE);
        assert_eq!(session.live_target(), None);

        let mut body = SimpleBody::at(Vec3::ZERO);
        let mut session = aiming_session(&mut body);
        session.track(Vec3::new(3.0, 0.0, 4.0));
        assert_eq!(session.live_target(), Some(Vec3::new(3.0, 0.0, 4.0)));
    }

    #[test]
    fn test_pointer_up_fires_once() {
        let mut body = SimpleBody::at(Vec3::ZERO);
        let mut session = aiming_session(&mut body);
        session.track(Vec3::new(3.0, 0.0, 4.0));

        let profile = AimProfile::cue().with_impulse_scale(1.0);
        let release = session.pointer_up(&mut body, &profile);

        let AimRelease::Fired { origin, target, shot } = release else {
            panic!("expected a shot, got {:?}", release);
        };
        assert_eq!(origin, Vec3::ZERO);
        assert_eq!(target, Vec3::new(3.0, 0.0, 4.0));
        assert!((shot.power - 5.0).abs() < 1e-5);
        assert_eq!(body.impulses.len(), 1);
        assert!((body.impulses[0] - Vec3::new(3.0, 0.0, 4.0)).length() < 1e-5);

        assert_eq!(session.status(), AimStatus::Idle);
        assert_eq!(session.aim_origin(), None);
        assert_eq!(session.live_target(), None);

        // Повторный Up: уже не aiming
        assert_eq!(session.pointer_up(&mut body, &profile), AimRelease::NotAiming);
        assert_eq!(body.impulses.len(), 1);
    }

    #[test]
    fn test_zero_length_release_applies_nothing() {
        let mut body = SimpleBody::at(Vec3::new(2.0, 0.0, 2.0));
        let mut session = aiming_session(&mut body);

        let release = session.pointer_up(&mut body, &AimProfile::cue());

        assert_eq!(
            release,
            AimRelease::NoShot {
                origin: Vec3::new(2.0, 0.0, 2.0)
            }
        );
        assert!(body.impulses.is_empty());
        assert_eq!(session.status(), AimStatus::Idle);
    }

    #[test]
    fn test_slingshot_profile_reverses_impulse() {
        let mut body = SimpleBody::at(Vec3::ZERO);
        let mut session = aiming_session(&mut body);
        session.track(Vec3::new(0.0, 0.0, 2.0));

        let profile = AimProfile::golf_ball()
            .with_impulse_scale(1.0)
            .with_shot_direction(ShotDirection::AwayFromPointer);
        session.pointer_up(&mut body, &profile);

        assert_eq!(body.impulses.len(), 1);
        assert!((body.impulses[0] - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5);
    }

    #[test]
    fn test_cancel_drops_pending_shot() {
        let mut body = SimpleBody::at(Vec3::ZERO);
        let mut session = aiming_session(&mut body);
        session.track(Vec3::X);

        assert!(session.cancel());
        assert_eq!(session.status(), AimStatus::Idle);
        assert_eq!(session.aim_origin(), None);
        assert!(!session.cancel());
        assert!(body.impulses.is_empty());
    }
}
