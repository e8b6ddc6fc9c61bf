use bevy::color::palettes::css::{BLUE, HOT_PINK, WHITE};
use bevy::prelude::*;
use bevy_rapier3d::prelude::Collider;
use minigolf_simulation::{AimIndicator, AimSession, AimStatus, Aimable, PointerMarker, RestState};

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ball_materials).add_systems(
            PostUpdate,
            (
                spawn_visuals_for_new_bodies,
                spawn_aim_visuals,
                update_ball_colors,
                sync_aim_arrows,
            )
                .chain(),
        );
    }
}

/// Link: arrow visual → aimable body
#[derive(Component)]
pub struct AimArrow {
    pub owner: Entity,
}

/// Общие материалы шаров (меняем handle, не цвет материала)
#[derive(Resource)]
pub struct BallMaterials {
    pub hovered: Handle<StandardMaterial>,
    pub resting: Handle<StandardMaterial>,
    pub moving: Handle<StandardMaterial>,
    pub ground: Handle<StandardMaterial>,
    pub arrow: Handle<StandardMaterial>,
}

fn setup_ball_materials(mut commands: Commands, mut materials: ResMut<Assets<StandardMaterial>>) {
    commands.insert_resource(BallMaterials {
        hovered: materials.add(Color::from(BLUE)),
        resting: materials.add(Color::from(HOT_PINK)),
        moving: materials.add(Color::from(WHITE)),
        ground: materials.add(Color::srgb(0.3, 0.5, 0.3)),
        arrow: materials.add(Color::srgb(0.95, 0.85, 0.2)),
    });
}

/// Меш по форме коллайдера (ball → sphere, cuboid → box), на тот же entity
fn spawn_visuals_for_new_bodies(
    mut commands: Commands,
    query: Query<(Entity, &Collider, Has<Aimable>), Added<Collider>>,
    mut meshes: ResMut<Assets<Mesh>>,
    materials: Res<BallMaterials>,
) {
    for (entity, collider, aimable) in query.iter() {
        if let Some(ball) = collider.as_ball() {
            let material = if aimable {
                materials.resting.clone()
            } else {
                materials.moving.clone()
            };
            commands.entity(entity).insert((
                Mesh3d(meshes.add(Sphere::new(ball.radius()))),
                MeshMaterial3d(material),
            ));
        } else if let Some(cuboid) = collider.as_cuboid() {
            commands.entity(entity).insert((
                Mesh3d(meshes.add(Cuboid::from_size(cuboid.half_extents() * 2.0))),
                MeshMaterial3d(materials.ground.clone()),
            ));
        }
    }
}

/// Arrow (единичный цилиндр вдоль +Y) + debug marker проекции для каждого нового aimable тела
fn spawn_aim_visuals(
    mut commands: Commands,
    query: Query<Entity, Added<Aimable>>,
    mut meshes: ResMut<Assets<Mesh>>,
    materials: Res<BallMaterials>,
) {
    for owner in query.iter() {
        commands.spawn((
            AimArrow { owner },
            Mesh3d(meshes.add(Cylinder::new(0.5, 1.0))),
            MeshMaterial3d(materials.arrow.clone()),
            Transform::default(),
            Visibility::Hidden,
        ));

        commands.spawn((
            PointerMarker { source: owner },
            Mesh3d(meshes.add(Sphere::new(0.05))),
            MeshMaterial3d(materials.arrow.clone()),
            Transform::default(),
        ));
    }
}

/// Hovered / aiming → blue, resting → hotpink, moving → white
fn ball_material(materials: &BallMaterials, status: AimStatus, rest: RestState) -> Handle<StandardMaterial> {
    match (status, rest) {
        (AimStatus::Hovered | AimStatus::Aiming, _) => materials.hovered.clone(),
        (_, RestState::Resting) => materials.resting.clone(),
        (_, RestState::Moving) => materials.moving.clone(),
    }
}

fn update_ball_colors(
    materials: Res<BallMaterials>,
    mut query: Query<
        (&AimSession, &RestState, &mut MeshMaterial3d<StandardMaterial>),
        Or<(Changed<AimSession>, Changed<RestState>)>,
    >,
) {
    for (session, rest, mut material) in query.iter_mut() {
        let next = ball_material(&materials, session.status(), *rest);
        if material.0 != next {
            material.0 = next;
        }
    }
}

/// AimIndicator → transform / visibility стрелки. Тело исчезло → стрелка тоже.
fn sync_aim_arrows(
    mut commands: Commands,
    indicators: Query<&AimIndicator>,
    mut arrows: Query<(Entity, &AimArrow, &mut Transform, &mut Visibility)>,
) {
    for (entity, arrow, mut transform, mut visibility) in arrows.iter_mut() {
        let Ok(indicator) = indicators.get(arrow.owner) else {
            commands.entity(entity).despawn();
            continue;
        };

        if indicator.visible {
            *transform = indicator.transform;
            *visibility = Visibility::Visible;
        } else {
            *visibility = Visibility::Hidden;
        }
    }
}
