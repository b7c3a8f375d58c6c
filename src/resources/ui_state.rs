use bevy::prelude::Resource;

#[derive(Resource)]
pub struct UiStateDebugWindows {
    pub help_open: bool,
    pub hit_target_list_open: bool,
    pub diagnostics_open: bool,
}

impl Default for UiStateDebugWindows {
    fn default() -> Self {
        Self {
            help_open: false,
            hit_target_list_open: true,
            diagnostics_open: false,
        }
    }
}
