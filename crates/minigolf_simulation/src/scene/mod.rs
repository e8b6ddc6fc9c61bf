//! Scene helpers: aimable ball, target balls, ground
//!
//! Два варианта сцены:
//! - `Cue`: бильярдный cue ball (radius 1, старт (0, 5, 0)), 8 target balls, пол 50×1×50
//! - `GolfBall`: мяч radius 0.1 с angular damping 2.5, пол 500×500 следует за мячом
//!
//! Здесь только ECS компоненты (physics + aim). Меши/материалы добавляет клиент.

use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, Damping, RigidBody};
use rand::Rng;

use crate::aim::AimProfile;
use crate::components::Aimable;
use crate::pointer::{HoverTarget, PointerProjector, ReferencePlane};
use crate::DeterministicRng;

/// Число target balls в cue сцене
pub const TARGET_BALL_COUNT: usize = 8;
/// Target balls падают с этой высоты
pub const TARGET_DROP_HEIGHT: f32 = 10.0;
/// x/z target balls ∈ [-SCATTER_RANGE, SCATTER_RANGE]
pub const SCATTER_RANGE: f32 = 5.0;

/// Верх ground slab'а (центр на y = -1, толщина 1)
pub const GROUND_TOP: f32 = -0.5;

/// Вариант сцены (resource: клиент / demo выбирают его до Startup)
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneVariant {
    #[default]
    Cue,
    GolfBall,
}

impl SceneVariant {
    /// "cue" / "golf" (CLI аргумент клиента и headless demo)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "cue" => Some(SceneVariant::Cue),
            "golf" | "golf_ball" => Some(SceneVariant::GolfBall),
            _ => None,
        }
    }

    pub fn profile(&self) -> AimProfile {
        match self {
            SceneVariant::Cue => AimProfile::cue(),
            SceneVariant::GolfBall => AimProfile::golf_ball(),
        }
    }

    /// Cue: плоскость на уровне центра шара над полом. Golf: плоскость следует за мячом.
    pub fn projector(&self) -> PointerProjector {
        match self {
            SceneVariant::Cue => PointerProjector::new(
                ReferencePlane::fixed(GROUND_TOP + self.ball_radius())
                    .with_half_extents(Vec2::new(25.0, 25.0)),
            ),
            SceneVariant::GolfBall => PointerProjector::new(
                ReferencePlane::follow_owner().with_half_extents(Vec2::new(250.0, 250.0)),
            ),
        }
    }

    pub fn ball_radius(&self) -> f32 {
        match self {
            SceneVariant::Cue => 1.0,
            SceneVariant::GolfBall => 0.1,
        }
    }

    pub fn ball_spawn(&self) -> Vec3 {
        match self {
            SceneVariant::Cue => Vec3::new(0.0, 5.0, 0.0),
            SceneVariant::GolfBall => Vec3::new(0.0, GROUND_TOP + 0.1, 0.0),
        }
    }

    pub fn angular_damping(&self) -> f32 {
        match self {
            SceneVariant::Cue => 0.0,
            SceneVariant::GolfBall => 2.5,
        }
    }

    /// Половина стороны ground slab'а
    pub fn ground_half_size(&self) -> f32 {
        match self {
            SceneVariant::Cue => 25.0,
            SceneVariant::GolfBall => 250.0,
        }
    }

    pub fn target_ball_count(&self) -> usize {
        match self {
            SceneVariant::Cue => TARGET_BALL_COUNT,
            SceneVariant::GolfBall => 0,
        }
    }
}

/// Динамический шар, который игрок прицеливает
///
/// `Aimable` сам добавляет session/rest/projection компоненты (required components),
/// здесь только то, что зависит от варианта сцены.
pub fn aimable_ball_bundle(variant: SceneVariant) -> impl Bundle {
    let radius = variant.ball_radius();
    (
        Name::new("AimableBall"),
        Aimable,
        variant.profile(),
        variant.projector(),
        HoverTarget::new(radius),
        RigidBody::Dynamic,
        Collider::ball(radius),
        Damping {
            linear_damping: 0.0,
            angular_damping: variant.angular_damping(),
        },
        Transform::from_translation(variant.ball_spawn()),
    )
}

/// Обычный шар без aim (цели для cue ball)
pub fn target_ball_bundle(position: Vec3) -> impl Bundle {
    (
        Name::new("TargetBall"),
        RigidBody::Dynamic,
        Collider::ball(1.0),
        Transform::from_translation(position),
    )
}

/// Статичный пол: толщина 1, центр на y = -1
pub fn ground_bundle(variant: SceneVariant) -> impl Bundle {
    let half = variant.ground_half_size();
    (
        Name::new("Ground"),
        RigidBody::Fixed,
        Collider::cuboid(half, 0.5, half),
        Transform::from_xyz(0.0, -1.0, 0.0),
    )
}

/// Случайные стартовые позиции target balls (детерминированы seed'ом)
pub fn scatter_positions(rng: &mut DeterministicRng, count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.rng.gen_range(-SCATTER_RANGE..=SCATTER_RANGE),
                TARGET_DROP_HEIGHT,
                rng.rng.gen_range(-SCATTER_RANGE..=SCATTER_RANGE),
            )
        })
        .collect()
}

/// Заспавнить aimable шар. Возвращает его Entity.
pub fn spawn_aimable_ball(commands: &mut Commands, variant: SceneVariant) -> Entity {
    let entity = commands.spawn(aimable_ball_bundle(variant)).id();
    crate::log(&format!("Scene: aimable ball {:?} ({:?})", entity, variant));
    entity
}

/// Заспавнить target balls вокруг центра
pub fn scatter_target_balls(
    commands: &mut Commands,
    rng: &mut DeterministicRng,
    count: usize,
) -> Vec<Entity> {
    scatter_positions(rng, count)
        .into_iter()
        .map(|position| commands.spawn(target_ball_bundle(position)).id())
        .collect()
}

/// Startup система: вся сцена текущего `SceneVariant`
pub fn spawn_scene(
    mut commands: Commands,
    variant: Res<SceneVariant>,
    mut rng: ResMut<DeterministicRng>,
) {
    let variant = *variant;
    commands.spawn(ground_bundle(variant));
    spawn_aimable_ball(&mut commands, variant);
    let targets = scatter_target_balls(&mut commands, &mut rng, variant.target_ball_count());
    crate::log_info(&format!(
        "Scene: {:?} spawned ({} target balls)",
        variant,
        targets.len()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_variant_from_name() {
        assert_eq!(SceneVariant::from_name("cue"), Some(SceneVariant::Cue));
        assert_eq!(SceneVariant::from_name("golf"), Some(SceneVariant::GolfBall));
        assert_eq!(SceneVariant::from_name("snooker"), None);
    }

    #[test]
    fn test_scatter_positions_in_range_and_deterministic() {
        let mut a = DeterministicRng::new(7);
        let mut b = DeterministicRng::new(7);

        let first = scatter_positions(&mut a, TARGET_BALL_COUNT);
        let second = scatter_positions(&mut b, TARGET_BALL_COUNT);

        assert_eq!(first.len(), TARGET_BALL_COUNT);
        assert_eq!(first, second);
        for position in first {
            assert!(position.x.abs() <= SCATTER_RANGE);
            assert!(position.z.abs() <= SCATTER_RANGE);
            assert_eq!(position.y, TARGET_DROP_HEIGHT);
        }
    }

    #[test]
    fn test_cue_plane_sits_at_ball_center() {
        let projector = SceneVariant::Cue.projector();
        let plane = projector.plane;
        assert_eq!(plane.half_extents, Some(Vec2::new(25.0, 25.0)));
        assert_eq!(plane.height, crate::pointer::PlaneHeight::Fixed(0.5));
    }
}
