use bevy::prelude::Component;

/// Quad showing the video frame, placed `distance` in front of a camera with
/// a vertical field of view of `fov_y` radians.
#[derive(Component)]
pub struct VideoBackground {
    pub distance: f32,
    pub fov_y: f32,
}
