//! Aim системы (rest state, live target, pointer input, indicator, camera locks)

use bevy::prelude::*;
use bevy_rapier3d::prelude::{ExternalImpulse, Velocity};

use crate::aim::{
    arrow_transform, AimConfig, AimIndicator, AimProfile, AimRelease, AimSession, AimStatus,
    CameraControl,
};
use crate::components::{Aimable, RapierBody, RestState};
use crate::pointer::{HoverTarget, PointerInput, PointerProjection};
use crate::shot::ShotFired;

/// Система: RestState из |linvel| каждый frame, независимо от aim status
pub fn update_rest_state(
    config: Res<AimConfig>,
    mut bodies: Query<(&Velocity, &mut RestState), With<Aimable>>,
) {
    for (velocity, mut rest) in bodies.iter_mut() {
        let next = RestState::from_speed(velocity.linvel.length(), config.rest_speed_threshold);
        if *rest != next {
            *rest = next;
        }
    }
}

/// Система: aiming sessions берут последнюю проекцию pointer'а как live target
pub fn track_live_target(mut sessions: Query<(&mut AimSession, &PointerProjection)>) {
    for (mut session, projection) in sessions.iter_mut() {
        if session.is_aiming() {
            session.track(projection.world_point);
        }
    }
}

/// Система: PointerInput → переходы AimSession
///
/// - Over/Out адресные: неизвестный / despawned entity → игнор
/// - Down/Up глобальные: Down стартует aim у hovered тел в покое,
///   Up завершает все активные aim'ы (один impulse на каждый)
pub fn handle_pointer_input(
    mut inputs: EventReader<PointerInput>,
    mut bodies: Query<
        (
            Entity,
            &mut AimSession,
            &RestState,
            &AimProfile,
            &GlobalTransform,
            &mut Velocity,
            &mut ExternalImpulse,
        ),
        With<Aimable>,
    >,
    mut camera_control: ResMut<CameraControl>,
    mut shots: EventWriter<ShotFired>,
) {
    for input in inputs.read() {
        match *input {
            PointerInput::Over(entity) => {
                let Ok((_, mut session, rest, ..)) = bodies.get_mut(entity) else {
                    crate::log(&format!("Aim: Over for non-aimable {:?} ignored", entity));
                    continue;
                };
                if session.pointer_over(*rest) {
                    crate::log(&format!("Aim: {:?} Idle → Hovered", entity));
                }
            }

            PointerInput::Out(entity) => {
                let Ok((_, mut session, ..)) = bodies.get_mut(entity) else {
                    continue;
                };
                if session.pointer_out() {
                    crate::log(&format!("Aim: {:?} Hovered → Idle", entity));
                }
            }

            PointerInput::Down => {
                for (entity, mut session, rest, _, transform, velocity, impulse) in bodies.iter_mut() {
                    if session.status() != AimStatus::Hovered {
                        continue;
                    }

                    let mut body = RapierBody {
                        transform,
                        velocity,
                        impulse,
                    };
                    match session.pointer_down(*rest, &mut body) {
                        Some(origin) => {
                            camera_control.acquire(entity);
                            crate::log(&format!(
                                "Aim: {:?} Hovered → Aiming (origin {:?})",
                                entity, origin
                            ));
                        }
                        None => {
                            crate::log(&format!("Aim: {:?} pointer down while moving, ignored", entity));
                        }
                    }
                }
            }

            PointerInput::Up => {
                for (entity, mut session, _, profile, transform, velocity, impulse) in bodies.iter_mut() {
                    if !session.is_aiming() {
                        continue;
                    }

                    let mut body = RapierBody {
                        transform,
                        velocity,
                        impulse,
                    };
                    match session.pointer_up(&mut body, profile) {
                        AimRelease::Fired { origin, target, shot } => {
                            let impulse = shot.impulse(profile.impulse_scale);
                            crate::log_info(&format!(
                                "Shot: {:?} power {:.3} direction {:?} impulse {:?}",
                                entity, shot.power, shot.direction, impulse
                            ));
                            shots.write(ShotFired {
                                entity,
                                origin,
                                target,
                                direction: shot.direction,
                                power: shot.power,
                                impulse,
                            });
                        }
                        AimRelease::NoShot { origin } => {
                            crate::log(&format!(
                                "Shot: {:?} zero-length drag at {:?}, no impulse",
                                entity, origin
                            ));
                        }
                        AimRelease::NotAiming => {}
                    }

                    camera_control.release(entity);
                }
            }
        }
    }
}

/// Система: Idle тело под pointer'ом снова Hovered, как только оно в покое
///
/// Over шлётся только при смене hover. После pointer up над шаром
/// (или когда шар остановился под курсором) нового Over не будет.
pub fn refresh_hovered_sessions(
    mut bodies: Query<(Entity, &mut AimSession, &RestState, &HoverTarget), With<Aimable>>,
) {
    for (entity, mut session, rest, hover) in bodies.iter_mut() {
        if session.status() != AimStatus::Idle || !hover.is_hovered() || !rest.is_resting() {
            continue;
        }
        if session.pointer_over(*rest) {
            crate::log(&format!("Aim: {:?} Idle → Hovered (pointer still over)", entity));
        }
    }
}

/// Система: AimIndicator из (origin, live target)
pub fn update_aim_indicator(mut bodies: Query<(&AimSession, &AimProfile, &mut AimIndicator)>) {
    for (session, profile, mut indicator) in bodies.iter_mut() {
        let arrow = match (session.aim_origin(), session.live_target()) {
            (Some(origin), Some(target)) => arrow_transform(origin, target, profile.indicator_thickness),
            _ => None,
        };

        let next = match arrow {
            Some(transform) => AimIndicator {
                visible: true,
                transform,
            },
            None => AimIndicator {
                visible: false,
                transform: indicator.transform,
            },
        };

        if *indicator != next {
            *indicator = next;
        }
    }
}

/// Система: вернуть camera control, если aim оборвался не через pointer up
///
/// Lock держит entity, который:
/// - despawned → pending shot потерян, lock снимаем
/// - потерял `Aimable` / `AimSession` → aim отменяем, lock снимаем
/// - уже не в Aiming → lock снимаем
pub fn release_orphaned_camera_locks(
    mut camera_control: ResMut<CameraControl>,
    mut sessions: Query<(&mut AimSession, Has<Aimable>)>,
) {
    if camera_control.is_enabled() {
        return;
    }

    let holders = camera_control.holders().to_vec();
    for holder in holders {
        match sessions.get_mut(holder) {
            Ok((session, true)) if session.is_aiming() => continue,
            Ok((mut session, _)) => {
                if session.cancel() {
                    crate::log(&format!("Aim: {:?} reclaimed while aiming, shot dropped", holder));
                }
            }
            Err(_) => {
                crate::log(&format!("Aim: {:?} gone while aiming, shot dropped", holder));
            }
        }

        camera_control.release(holder);
    }
}
