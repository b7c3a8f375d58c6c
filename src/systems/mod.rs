mod ar_scene_setup_system;
mod ar_session_system;
mod hit_target_selection_system;
mod mouse_picking_system;
mod tracker_update_system;
mod video_background_system;
mod window_toggle_system;

pub use ar_scene_setup_system::ar_scene_setup_system;
pub use ar_session_system::{
    ar_session_exit_system, ar_session_start_system, shutdown_ar_devices, start_ar_devices,
};
pub use hit_target_selection_system::{hit_target_color_system, hit_target_selection_system};
pub use mouse_picking_system::mouse_picking_system;
pub use tracker_update_system::tracker_update_system;
pub use video_background_system::{video_background_scale, video_background_system};
pub use window_toggle_system::window_toggle_system;
