use bevy::prelude::Component;

use crate::resources::HitTargetId;

#[derive(Component)]
pub struct HitTargetModel {
    pub id: HitTargetId,
}

impl HitTargetModel {
    pub fn new(id: HitTargetId) -> Self {
        Self { id }
    }
}
