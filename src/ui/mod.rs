mod ui_debug_diagnostics_system;
mod ui_debug_window_system;
mod ui_help_system;
mod ui_hit_target_list_system;

pub use ui_debug_diagnostics_system::ui_debug_diagnostics_system;
pub use ui_debug_window_system::{toggle_debug_windows, ui_debug_window_system, KEY_BINDINGS};
pub use ui_help_system::ui_help_system;
pub use ui_hit_target_list_system::ui_hit_target_list_system;
