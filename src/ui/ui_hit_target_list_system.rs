use bevy::prelude::{Res, ResMut};
use bevy_egui::{egui, EguiContexts};

use crate::resources::{DummyTracker, DummyVideo, HitTargetList, UiStateDebugWindows};

pub fn ui_hit_target_list_system(
    mut egui_context: EguiContexts,
    mut ui_state_debug_windows: ResMut<UiStateDebugWindows>,
    hit_target_list: Res<HitTargetList>,
    tracker: Res<DummyTracker>,
    video: Res<DummyVideo>,
) {
    if !ui_state_debug_windows.hit_target_list_open {
        return;
    }

    egui::Window::new("Hit Targets")
        .vscroll(true)
        .resizable(true)
        .default_height(300.0)
        .open(&mut ui_state_debug_windows.hit_target_list_open)
        .show(egui_context.ctx_mut(), |ui| {
            egui::Grid::new("ar_session_grid")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("video");
                    ui.label(format!("{:?}", video.state()));
                    ui.end_row();

                    if let Some(frame_size) = video.frame_size() {
                        ui.label("frame");
                        ui.label(format!("{}x{}", frame_size.x, frame_size.y));
                        ui.end_row();
                    }

                    ui.label("tracker");
                    ui.label(format!("{:?} {:?}", tracker.state(), tracker.mode));
                    ui.end_row();

                    for target in tracker.targets() {
                        ui.label(&target.name);
                        ui.label(if target.visible { "visible" } else { "hidden" });
                        ui.end_row();
                    }

                    ui.label("selected");
                    match hit_target_list.selected() {
                        Some(id) => ui.label(format!("{}", id.get())),
                        None => ui.label("none"),
                    };
                    ui.end_row();
                });

            ui.separator();

            egui::Grid::new("hit_target_grid")
                .num_columns(3)
                .striped(true)
                .show(ui, |ui| {
                    ui.label("id");
                    ui.label("position");
                    ui.label("selected");
                    ui.end_row();

                    for (id, target) in hit_target_list.iter() {
                        ui.label(format!("{}", id.get()));
                        ui.label(format!(
                            "{:.1} {:.1} {:.1}",
                            target.position.x, target.position.y, target.position.z
                        ));
                        if target.is_selected() {
                            ui.colored_label(egui::Color32::RED, "yes");
                        } else {
                            ui.label("");
                        }
                        ui.end_row();
                    }
                });
        });
}
