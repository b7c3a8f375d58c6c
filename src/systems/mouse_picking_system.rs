use bevy::{
    input::Input,
    math::Ray,
    prelude::{
        Camera, Camera3d, Entity, EventWriter, GlobalTransform, MouseButton, Parent, Query, Res,
        Visibility, With,
    },
    window::{PrimaryWindow, Window},
};
use bevy_egui::EguiContexts;
use bevy_rapier3d::prelude::{CollisionGroups, Group, QueryFilter, RapierContext};

use crate::{
    components::COLLISION_FILTER_CLICKABLE,
    events::{PickingEvent, PickingIntersection},
};

const MAX_PICKING_DISTANCE: f32 = 10000000.0;

/// Whether `entity` and all of its ancestors are visible according to their
/// `Visibility` components. Unlike `ComputedVisibility` this reflects changes
/// made earlier in the same frame.
pub fn is_visible_in_hierarchy(
    entity: Entity,
    query_visibility: &Query<(&Visibility, Option<&Parent>)>,
) -> bool {
    let mut current = entity;
    loop {
        let Ok((visibility, parent)) = query_visibility.get(current) else {
            return true;
        };

        match visibility {
            Visibility::Hidden => return false,
            Visibility::Visible => return true,
            Visibility::Inherited => match parent {
                Some(parent) => current = parent.get(),
                None => return true,
            },
        }
    }
}

/// Every clickable collider along `ray` for which `is_pickable` holds, ordered
/// nearest first.
pub fn picking_intersections(
    rapier_context: &RapierContext,
    ray: Ray,
    is_pickable: impl Fn(Entity) -> bool,
) -> Vec<PickingIntersection> {
    let mut intersections = Vec::new();
    rapier_context.intersections_with_ray(
        ray.origin,
        ray.direction,
        MAX_PICKING_DISTANCE,
        true,
        QueryFilter::new().groups(CollisionGroups::new(
            Group::all(),
            COLLISION_FILTER_CLICKABLE,
        )),
        |entity, intersection| {
            if is_pickable(entity) {
                intersections.push(PickingIntersection {
                    entity,
                    distance: intersection.toi,
                    position: intersection.point,
                });
            }
            true
        },
    );

    intersections.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    intersections
}

pub fn mouse_picking_system(
    mouse_button_input: Res<Input<MouseButton>>,
    mut egui_ctx: EguiContexts,
    rapier_context: Res<RapierContext>,
    query_window: Query<&Window, With<PrimaryWindow>>,
    query_camera: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    query_visibility: Query<(&Visibility, Option<&Parent>)>,
    mut picking_events: EventWriter<PickingEvent>,
) {
    if !mouse_button_input.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = query_window.get_single() else {
        return;
    };

    let Some(cursor_position) = window.cursor_position() else {
        // Mouse not in window
        return;
    };

    if egui_ctx.ctx_mut().wants_pointer_input() {
        // Mouse is over UI
        return;
    }

    for (camera, camera_transform) in query_camera.iter() {
        let Some(ray) = camera.viewport_to_world(camera_transform, cursor_position) else {
            continue;
        };

        // Hidden AR content cannot be picked
        let intersections = picking_intersections(&rapier_context, ray, |entity| {
            is_visible_in_hierarchy(entity, &query_visibility)
        });

        picking_events.send(PickingEvent::new(cursor_position, intersections));
    }
}
