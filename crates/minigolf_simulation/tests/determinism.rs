//! Тесты детерминизма
//!
//! Один seed → одинаковая сцена и одинаковые impulse'ы после scripted выстрелов

use bevy::prelude::*;
use bevy_rapier3d::prelude::ExternalImpulse;
use minigolf_simulation::scene::{scatter_positions, TARGET_BALL_COUNT};
use minigolf_simulation::{
    create_headless_app, world_snapshot, ActiveCameraView, AimPlugin, AimProfile, AimSession,
    Aimable, CameraView, DeterministicRng, HoverTarget, PointerInput, PointerProjector,
    PointerState, ReferencePlane,
};

fn camera() -> CameraView {
    CameraView::perspective(
        Transform::from_xyz(0.0, 20.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
        std::f32::consts::FRAC_PI_4,
        16.0 / 9.0,
        0.1,
    )
}

/// Шары на scatter позициях (y = 0), каждому scripted выстрел
fn run_simulation(seed: u64) -> Vec<u8> {
    let mut app = create_headless_app(seed);
    app.add_plugins(AimPlugin::default());
    app.insert_resource(ActiveCameraView(Some(camera())));

    let positions = {
        let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
        scatter_positions(&mut rng, TARGET_BALL_COUNT)
    };

    for position in &positions {
        let position = Vec3::new(position.x, 0.0, position.z);
        app.world_mut().spawn((
            Aimable,
            AimProfile::cue(),
            PointerProjector::new(ReferencePlane::fixed(0.0)),
            HoverTarget::new(0.5),
            Transform::from_translation(position),
        ));
    }
    app.update();

    for position in &positions {
        let ball = Vec3::new(position.x, 0.0, position.z);
        for (world, input) in [
            (ball, PointerInput::Down),
            (ball + Vec3::new(1.0, 0.0, 2.0), PointerInput::Up),
        ] {
            if let Some(ndc) = camera().world_to_ndc(world) {
                app.world_mut().resource_mut::<PointerState>().ndc = ndc;
            }
            app.update();
            app.world_mut().send_event(input);
            app.update();
        }
    }

    let mut snapshot = world_snapshot::<ExternalImpulse>(app.world_mut());
    snapshot.extend(world_snapshot::<AimSession>(app.world_mut()));
    snapshot
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;

    let snapshot1 = run_simulation(SEED);
    let snapshot2 = run_simulation(SEED);

    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;

    let snapshots: Vec<_> = (0..3).map(|_| run_simulation(SEED)).collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}

#[test]
fn test_different_seeds_scatter_differently() {
    let mut a = DeterministicRng::new(1);
    let mut b = DeterministicRng::new(2);

    assert_ne!(
        scatter_positions(&mut a, TARGET_BALL_COUNT),
        scatter_positions(&mut b, TARGET_BALL_COUNT)
    );
}
