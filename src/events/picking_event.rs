use bevy::{
    math::{Vec2, Vec3},
    prelude::{Entity, Event},
};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PickingIntersection {
    pub entity: Entity,
    pub distance: f32,
    pub position: Vec3,
}

/// Sent on a pointer press, `intersections` is ordered nearest first.
#[derive(Clone, Debug, Event)]
pub struct PickingEvent {
    pub cursor_position: Vec2,
    pub intersections: Vec<PickingIntersection>,
}

impl PickingEvent {
    pub fn new(cursor_position: Vec2, mut intersections: Vec<PickingIntersection>) -> Self {
        intersections.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Self {
            cursor_position,
            intersections,
        }
    }
}
