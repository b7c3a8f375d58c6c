use bevy::prelude::Component;

/// Entity whose transform and visibility are driven by a tracker target.
#[derive(Component)]
pub struct TrackedTransform {
    pub target_index: usize,
}

impl TrackedTransform {
    pub fn new(target_index: usize) -> Self {
        Self { target_index }
    }
}
