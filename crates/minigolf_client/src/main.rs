use bevy::prelude::*;
use bevy_rapier3d::prelude::{NoUserData, RapierPhysicsPlugin};
use minigolf_simulation::scene::spawn_scene;
use minigolf_simulation::{log_warning, SceneVariant, SimulationPlugin};

mod camera;
mod input;
mod rendering;

use camera::CameraPlugin;
use input::PointerInputPlugin;
use rendering::RenderingSyncPlugin;

fn main() {
    // `minigolf_client [cue|golf]`
    let variant = match std::env::args().nth(1) {
        Some(name) => SceneVariant::from_name(&name).unwrap_or_else(|| {
            log_warning(&format!("Unknown scene '{}', falling back to cue", name));
            SceneVariant::Cue
        }),
        None => SceneVariant::Cue,
    };

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Minigolf".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Physics (Rapier шагает в FixedUpdate 60Hz от SimulationPlugin)
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
        // Aim-and-shoot logic (headless ECS)
        .add_plugins(SimulationPlugin::default())
        // Window input → pointer events
        .add_plugins(PointerInputPlugin)
        // Rendering sync (simulation → visuals)
        .add_plugins(RenderingSyncPlugin)
        // Camera controls
        .add_plugins(CameraPlugin)
        .insert_resource(variant)
        .add_systems(Startup, (setup_lights_and_camera, spawn_scene))
        .run();
}

/// Lights + orbit camera (physics bodies спавнит spawn_scene)
fn setup_lights_and_camera(mut commands: Commands) {
    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4)),
    ));

    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.3,
        affects_lightmapped_meshes: false,
    });

    // Camera (orbit around origin)
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(10.0, 15.0, 30.0).looking_at(Vec3::ZERO, Vec3::Y),
        camera::OrbitCamera::default(),
    ));
}
