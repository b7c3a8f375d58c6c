use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};

use crate::{resources::UiStateDebugWindows, ui::KEY_BINDINGS};

pub fn ui_help_system(
    mut egui_context: EguiContexts,
    mut ui_state_debug_windows: ResMut<UiStateDebugWindows>,
) {
    if !ui_state_debug_windows.help_open {
        return;
    }

    egui::Window::new("Help")
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .open(&mut ui_state_debug_windows.help_open)
        .show(egui_context.ctx_mut(), |ui| {
            egui::Grid::new("help_grid")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for (binding, description) in KEY_BINDINGS {
                        ui.label(*binding);
                        ui.label(*description);
                        ui.end_row();
                    }
                });
        });
}
