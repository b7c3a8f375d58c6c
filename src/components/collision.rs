use bevy_rapier3d::prelude::Group;

pub const COLLISION_GROUP_HIT_TARGET: Group = Group::GROUP_1;
pub const COLLISION_GROUP_MARKER_BOARD: Group = Group::GROUP_2;

pub const COLLISION_FILTER_CLICKABLE: Group = Group::GROUP_19;
