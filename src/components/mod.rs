mod collision;
mod hit_target_model;
mod tracked_transform;
mod video_background;

pub use collision::{
    COLLISION_FILTER_CLICKABLE, COLLISION_GROUP_HIT_TARGET, COLLISION_GROUP_MARKER_BOARD,
};
pub use hit_target_model::HitTargetModel;
pub use tracked_transform::TrackedTransform;
pub use video_background::VideoBackground;
