//! Headless симуляция minigolf
//!
//! Прогоняет один scripted aim gesture без рендера и physics:
//! hover → down → drag (3, 0, 4) по плоскости → up, печатает выстрел (power 5).

use bevy::prelude::*;
use minigolf_simulation::scene::{aimable_ball_bundle, GROUND_TOP};
use minigolf_simulation::{
    create_headless_app, log_info, ActiveCameraView, AimPlugin, AimSession, CameraView,
    PointerInput, PointerState, SceneVariant, ShotFired,
};

fn main() {
    let seed = 42;
    let variant = std::env::args()
        .nth(1)
        .and_then(|name| SceneVariant::from_name(&name))
        .unwrap_or_default();
    println!("Starting minigolf headless simulation (seed: {}, scene: {:?})", seed, variant);

    let mut app = create_headless_app(seed);
    app.add_plugins(AimPlugin::default());

    let view = CameraView::perspective(
        Transform::from_xyz(10.0, 15.0, 30.0).looking_at(Vec3::ZERO, Vec3::Y),
        std::f32::consts::FRAC_PI_4,
        16.0 / 9.0,
        0.1,
    );
    app.insert_resource(ActiveCameraView(Some(view)));

    // Шар уже лежит на полу: центр на высоте reference plane (physics здесь нет)
    let resting = Vec3::new(0.0, GROUND_TOP + variant.ball_radius(), 0.0);
    let ball = app
        .world_mut()
        .spawn(aimable_ball_bundle(variant))
        .insert(Transform::from_translation(resting))
        .id();
    app.update(); // GlobalTransform propagation

    let Some(ball_position) = app.world().get::<GlobalTransform>(ball).map(|t| t.translation()) else {
        println!("Ball has no transform, aborting");
        return;
    };
    let target = ball_position + Vec3::new(3.0, 0.0, 4.0);

    let script = [
        ("hover", view.world_to_ndc(ball_position), None),
        ("down", None, Some(PointerInput::Down)),
        ("drag", view.world_to_ndc(target), None),
        ("up", None, Some(PointerInput::Up)),
    ];

    for (step, ndc, input) in script {
        if let Some(ndc) = ndc {
            app.world_mut().resource_mut::<PointerState>().ndc = ndc;
        }
        if let Some(input) = input {
            app.world_mut().send_event(input);
        }
        app.update();

        let status = app.world().get::<AimSession>(ball).map(|session| session.status());
        println!("Step {}: {:?}", step, status);
    }

    let shots: Vec<ShotFired> = app
        .world_mut()
        .resource_mut::<Events<ShotFired>>()
        .drain()
        .collect();
    for shot in &shots {
        log_info(&format!(
            "Fired {:?}: power {:.3}, impulse {:?}",
            shot.entity, shot.power, shot.impulse
        ));
    }

    println!("Simulation complete! ({} shot(s))", shots.len());
}
