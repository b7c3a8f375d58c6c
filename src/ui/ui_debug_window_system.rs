use bevy::{
    input::Input,
    prelude::{KeyCode, Res, ResMut},
};
use bevy_egui::EguiContexts;

use crate::resources::UiStateDebugWindows;

pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("Left click", "Select the nearest hit target"),
    ("H", "Toggle this help"),
    ("T", "Toggle hit target list"),
    ("S", "Toggle diagnostics"),
    ("F", "Toggle fullscreen"),
];

pub fn toggle_debug_windows(keyboard: &Input<KeyCode>, ui_state: &mut UiStateDebugWindows) {
    if keyboard.just_pressed(KeyCode::H) {
        ui_state.help_open = !ui_state.help_open;
    }

    if keyboard.just_pressed(KeyCode::T) {
        ui_state.hit_target_list_open = !ui_state.hit_target_list_open;
    }

    if keyboard.just_pressed(KeyCode::S) {
        ui_state.diagnostics_open = !ui_state.diagnostics_open;
    }
}

pub fn ui_debug_window_system(
    mut egui_context: EguiContexts,
    keyboard: Res<Input<KeyCode>>,
    mut ui_state_debug_windows: ResMut<UiStateDebugWindows>,
) {
    if egui_context.ctx_mut().wants_keyboard_input() {
        return;
    }

    toggle_debug_windows(&keyboard, &mut ui_state_debug_windows);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_toggle_their_windows() {
        let mut ui_state = UiStateDebugWindows::default();
        assert!(!ui_state.help_open);
        assert!(ui_state.hit_target_list_open);

        let mut keyboard = Input::<KeyCode>::default();
        keyboard.press(KeyCode::H);
        keyboard.press(KeyCode::T);
        toggle_debug_windows(&keyboard, &mut ui_state);
        assert!(ui_state.help_open);
        assert!(!ui_state.hit_target_list_open);
        assert!(!ui_state.diagnostics_open);

        // Held keys do not toggle again
        keyboard.clear();
        toggle_debug_windows(&keyboard, &mut ui_state);
        assert!(ui_state.help_open);

        keyboard.release(KeyCode::H);
        keyboard.clear();
        keyboard.press(KeyCode::H);
        keyboard.press(KeyCode::S);
        toggle_debug_windows(&keyboard, &mut ui_state);
        assert!(!ui_state.help_open);
        assert!(ui_state.diagnostics_open);
    }

    #[test]
    fn help_lists_every_toggle_key() {
        for key in ["H", "T", "S", "F"] {
            assert!(KEY_BINDINGS.iter().any(|(binding, _)| *binding == key));
        }
    }
}
