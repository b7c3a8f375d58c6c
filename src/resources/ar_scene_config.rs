use bevy::prelude::Resource;

use crate::GridConfig;

#[derive(Clone, Resource)]
pub struct ArSceneConfig {
    pub grid: GridConfig,
    pub tracked_target: usize,
}
