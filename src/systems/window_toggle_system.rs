use bevy::{
    input::Input,
    prelude::{KeyCode, Query, Res, With},
    window::{PrimaryWindow, Window, WindowMode},
};
use bevy_egui::EguiContexts;

pub fn window_toggle_system(
    keyboard: Res<Input<KeyCode>>,
    mut egui_ctx: EguiContexts,
    mut query_window: Query<&mut Window, With<PrimaryWindow>>,
) {
    if egui_ctx.ctx_mut().wants_keyboard_input() || !keyboard.just_pressed(KeyCode::F) {
        return;
    }

    let Ok(mut window) = query_window.get_single_mut() else {
        return;
    };

    window.mode = match window.mode {
        WindowMode::Windowed => WindowMode::BorderlessFullscreen,
        _ => WindowMode::Windowed,
    };
    log::info!("Window mode set to {:?}", window.mode);
}
