use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use minigolf_simulation::{ActiveCameraView, AimSystems, CameraControl, CameraView};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, publish_camera_view.before(AimSystems))
            .add_systems(
                Update,
                (orbit_camera_controls, update_camera_transform)
                    .chain()
                    .after(AimSystems), // Lock от pointer down уже взят в этом кадре
            );
    }
}

#[derive(Component)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub distance: f32,
    pub yaw: f32,   // Horizontal rotation (radians)
    pub pitch: f32, // Vertical rotation (radians)
    pub sensitivity: f32,
    pub zoom_speed: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            distance: 35.0,
            yaw: 0.32,   // ~ (10, 15, 30) как в исходной сцене
            pitch: 0.45,
            sensitivity: 0.005,
            zoom_speed: 1.0,
        }
    }
}

/// Left drag: orbit (пока никто не держит CameraControl), wheel: zoom
fn orbit_camera_controls(
    mut query: Query<&mut OrbitCamera>,
    camera_control: Res<CameraControl>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut mouse_wheel: EventReader<MouseWheel>,
) {
    let mut camera = match query.single_mut() {
        Ok(cam) => cam,
        Err(_) => return,
    };

    if camera_control.is_enabled() && mouse_buttons.pressed(MouseButton::Left) {
        for motion in mouse_motion.read() {
            camera.yaw -= motion.delta.x * camera.sensitivity;
            camera.pitch += motion.delta.y * camera.sensitivity;

            // Камера не уходит под пол
            camera.pitch = camera.pitch.clamp(0.05, std::f32::consts::FRAC_PI_2 - 0.1);
        }
    } else {
        // Drag во время aim: не копим motion на потом
        mouse_motion.clear();
    }

    if !camera_control.is_enabled() {
        mouse_wheel.clear();
        return;
    }

    for wheel in mouse_wheel.read() {
        camera.distance -= wheel.y * camera.zoom_speed;
        camera.distance = camera.distance.clamp(3.0, 80.0);
    }
}

/// Update camera transform based on orbit parameters
fn update_camera_transform(mut query: Query<(&OrbitCamera, &mut Transform), Changed<OrbitCamera>>) {
    for (camera, mut transform) in query.iter_mut() {
        let x = camera.distance * camera.pitch.cos() * camera.yaw.sin();
        let y = camera.distance * camera.pitch.sin();
        let z = camera.distance * camera.pitch.cos() * camera.yaw.cos();

        let position = camera.focus + Vec3::new(x, y, z);

        *transform = Transform::from_translation(position).looking_at(camera.focus, Vec3::Y);
    }
}

/// Snapshot активной камеры для pointer projector'а
fn publish_camera_view(
    query: Query<(&Camera, &GlobalTransform), With<OrbitCamera>>,
    mut view: ResMut<ActiveCameraView>,
) {
    let next = query
        .single()
        .ok()
        .map(|(camera, transform)| CameraView::new(transform, camera.clip_from_view()));

    if view.0 != next {
        view.0 = next;
    }
}
