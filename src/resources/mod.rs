mod ar_device_state;
mod ar_scene_config;
mod dummy_tracker;
mod dummy_video;
mod hit_target_list;
mod ui_state;

pub use ar_device_state::ArDeviceState;
pub use ar_scene_config::ArSceneConfig;
pub use dummy_tracker::{
    parse_target_description, parse_tracker_config, DummyTracker, TrackerCalibration,
    TrackerMode, TrackerTarget,
};
pub use dummy_video::{generate_checkerboard_frame, DummyVideo, DUMMY_VIDEO_FRAME_SIZE};
pub use hit_target_list::{HitTarget, HitTargetId, HitTargetList, PickingHit};
pub use ui_state::UiStateDebugWindows;
