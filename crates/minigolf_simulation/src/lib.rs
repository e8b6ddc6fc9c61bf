//! Minigolf Simulation Core
//!
//! ECS-логика aim-and-shoot на Bevy 0.16 (headless, без renderer'а)
//!
//! Архитектура:
//! - pointer: 2D pointer → 3D точка на reference plane (ray/plane)
//! - aim: AimSession state machine, rest gating, camera lock, arrow indicator
//! - shot: (origin, target) → direction + power → один impulse
//! - scene: cue / golf ball сцены (Rapier компоненты)
//!
//! Physics (Rapier) и рендер живут в клиенте, здесь только компоненты и системы.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod aim;
pub mod components;
pub mod logger;
pub mod pointer;
pub mod scene;
pub mod shot;

// Re-export базовых типов для удобства
pub use aim::{
    AimConfig, AimIndicator, AimPlugin, AimProfile, AimRelease, AimSession, AimStatus, AimSystems,
    CameraControl,
};
pub use components::*;
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, log_with_level, set_log_level, set_logger,
    set_logger_if_needed, LogLevel, LogPrinter,
};
pub use pointer::{
    ActiveCameraView, CameraView, HoverTarget, PlaneHeight, PointerInput, PointerMarker,
    PointerProjection, PointerProjector, PointerState, ReferencePlane,
};
pub use scene::SceneVariant;
pub use shot::{resolve_shot, shoot, ShotDirection, ShotFired, ShotVector};

/// Главный plugin симуляции (объединяет все подсистемы)
#[derive(Default)]
pub struct SimulationPlugin {
    pub aim: AimConfig,
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz (Rapier в клиенте шагает в FixedUpdate)
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Детерминистичный RNG (seed по умолчанию)
            .insert_resource(DeterministicRng::new(42))
            .add_plugins(AimPlugin::with_config(self.aim));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// TransformPlugin нужен: aim origin читается из GlobalTransform.
/// AimPlugin не добавляется (тесты подключают его сами, иногда с custom config).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins((MinimalPlugins, TransformPlugin))
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
