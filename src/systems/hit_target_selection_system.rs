use bevy::{
    pbr::StandardMaterial,
    prelude::{Assets, DetectChanges, EventReader, Handle, Query, Res, ResMut},
};

use crate::{
    components::HitTargetModel,
    events::PickingEvent,
    resources::{HitTargetList, PickingHit},
};

pub fn hit_target_selection_system(
    mut picking_events: EventReader<PickingEvent>,
    mut hit_target_list: ResMut<HitTargetList>,
) {
    for event in picking_events.iter() {
        let hits: Vec<PickingHit> = event
            .intersections
            .iter()
            .map(|intersection| hit_target_list.resolve(intersection.entity))
            .collect();

        match hit_target_list.select_nearest(hits) {
            Some(id) => {
                if let Some(target) = hit_target_list.get(id) {
                    log::info!(
                        "Hit target {} at {} selected by click at {}",
                        id.get(),
                        target.position,
                        event.cursor_position
                    );
                }
            }
            None => {
                log::debug!(
                    "No hit target under click at {}, {} intersections",
                    event.cursor_position,
                    event.intersections.len()
                );
            }
        }
    }
}

pub fn hit_target_color_system(
    hit_target_list: Res<HitTargetList>,
    query_models: Query<(&HitTargetModel, &Handle<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !hit_target_list.is_changed() {
        return;
    }

    for (model, material_handle) in query_models.iter() {
        let Some(target) = hit_target_list.get(model.id) else {
            continue;
        };

        let color = target.color();
        if materials
            .get(material_handle)
            .map_or(false, |material| material.base_color != color)
        {
            if let Some(material) = materials.get_mut(material_handle) {
                material.base_color = color;
            }
        }
    }
}
