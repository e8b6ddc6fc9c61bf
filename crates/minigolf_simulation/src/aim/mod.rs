//! Aim-and-shoot pipeline
//!
//! Содержит:
//! - config: AimConfig (глобально), AimProfile (per-body feel)
//! - session: AimSession state machine (Idle / Hovered / Aiming)
//! - camera_control: lock holders для orbit камеры
//! - indicator: arrow transform от origin до live target
//! - systems: ECS системы, собранные в `AimSystems`

use bevy::prelude::*;

use crate::components::{Aimable, RestState};
use crate::pointer::{
    detect_pointer_hover, project_pointer_system, sync_pointer_markers, ActiveCameraView,
    HoverTarget, PointerInput, PointerMarker, PointerProjection, PointerProjector, PointerState,
};
use crate::shot::ShotFired;

pub mod camera_control;
pub mod config;
pub mod indicator;
pub mod session;
pub mod systems;

#[cfg(test)]
mod indicator_tests;
#[cfg(test)]
mod session_tests;

pub use camera_control::*;
pub use config::*;
pub use indicator::*;
pub use session::*;
pub use systems::*;

/// Label всей aim цепочки. Клиентский input пишет PointerState / PointerInput `.before(AimSystems)`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AimSystems;

/// Aim Plugin
///
/// Регистрирует aim системы в Update (pointer input приходит per-frame).
/// Порядок выполнения:
/// 1. update_rest_state: RestState из velocity
/// 2. project_pointer_system: pointer → world point
/// 3. detect_pointer_hover: Over/Out от hover raycast
/// 4. track_live_target: live target активных aim'ов
/// 5. handle_pointer_input: переходы AimSession, выстрел
/// 6. refresh_hovered_sessions: Idle + hovered + resting → Hovered
/// 7. update_aim_indicator: стрелка
/// 8. sync_pointer_markers: debug markers
/// 9. release_orphaned_camera_locks: camera lock без живого aim
#[derive(Default)]
pub struct AimPlugin {
    pub config: AimConfig,
}

impl AimPlugin {
    pub fn with_config(config: AimConfig) -> Self {
        Self { config }
    }
}

impl Plugin for AimPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config)
            .init_resource::<PointerState>()
            .init_resource::<ActiveCameraView>()
            .init_resource::<CameraControl>()
            .add_event::<PointerInput>()
            .add_event::<ShotFired>()
            .register_type::<Aimable>()
            .register_type::<RestState>()
            .register_type::<AimSession>()
            .register_type::<AimProfile>()
            .register_type::<AimIndicator>()
            .register_type::<PointerProjector>()
            .register_type::<PointerProjection>()
            .register_type::<HoverTarget>()
            .register_type::<PointerMarker>()
            .add_systems(
                Update,
                (
                    update_rest_state,
                    project_pointer_system,
                    detect_pointer_hover,
                    track_live_target,
                    handle_pointer_input,
                    refresh_hovered_sessions,
                    update_aim_indicator,
                    sync_pointer_markers,
                    release_orphaned_camera_locks,
                )
                    .chain() // Один frame: hover → track → input видят результаты друг друга
                    .in_set(AimSystems),
            );
    }
}
