//! Window input → PointerState / PointerInput

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use minigolf_simulation::pointer::cursor_to_ndc;
use minigolf_simulation::{AimSystems, PointerInput, PointerState};

pub struct PointerInputPlugin;

impl Plugin for PointerInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (track_cursor, forward_mouse_buttons).before(AimSystems),
        );
    }
}

/// Курсор вне окна → pointer остаётся на последней позиции
fn track_cursor(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<PointerState>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(ndc) = window
        .cursor_position()
        .and_then(|cursor| cursor_to_ndc(cursor, window.size()))
    else {
        return;
    };

    if pointer.ndc != ndc {
        pointer.ndc = ndc;
    }
}

/// Left mouse = глобальные Down / Up (как window listeners)
fn forward_mouse_buttons(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut inputs: EventWriter<PointerInput>,
) {
    if mouse_buttons.just_pressed(MouseButton::Left) {
        inputs.write(PointerInput::Down);
    }
    if mouse_buttons.just_released(MouseButton::Left) {
        inputs.write(PointerInput::Up);
    }
}
