use bevy::{
    math::Vec3,
    prelude::{Color, Entity, Resource},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HitTargetId(usize);

impl HitTargetId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct HitTarget {
    pub entity: Entity,
    pub position: Vec3,
    pub size: f32,
    selected: bool,
}

impl HitTarget {
    pub const SELECTED_COLOR: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);
    pub const DESELECTED_COLOR: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub fn new(entity: Entity, position: Vec3, size: f32) -> Self {
        Self {
            entity,
            position,
            size,
            selected: false,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn color(&self) -> Color {
        if self.selected {
            Self::SELECTED_COLOR
        } else {
            Self::DESELECTED_COLOR
        }
    }
}

/// What a single intersection along the picking ray struck.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PickingHit {
    HitTarget(HitTargetId),
    Other(Entity),
}

/// Insertion ordered registry of every pickable target in the scene.
///
/// At most one target is selected at any time.
#[derive(Default, Resource)]
pub struct HitTargetList {
    targets: Vec<HitTarget>,
}

impl HitTargetList {
    pub fn push(&mut self, target: HitTarget) -> HitTargetId {
        let id = HitTargetId::new(self.targets.len());
        self.targets.push(target);
        id
    }

    pub fn get(&self, id: HitTargetId) -> Option<&HitTarget> {
        self.targets.get(id.get())
    }

    pub fn iter(&self) -> impl Iterator<Item = (HitTargetId, &HitTarget)> {
        self.targets
            .iter()
            .enumerate()
            .map(|(index, target)| (HitTargetId::new(index), target))
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn find_entity(&self, entity: Entity) -> Option<HitTargetId> {
        self.targets
            .iter()
            .position(|target| target.entity == entity)
            .map(HitTargetId::new)
    }

    pub fn resolve(&self, entity: Entity) -> PickingHit {
        match self.find_entity(entity) {
            Some(id) => PickingHit::HitTarget(id),
            None => PickingHit::Other(entity),
        }
    }

    pub fn selected(&self) -> Option<HitTargetId> {
        self.iter()
            .find(|(_, target)| target.selected)
            .map(|(id, _)| id)
    }

    pub fn clear_selection(&mut self) {
        for target in self.targets.iter_mut() {
            target.selected = false;
        }
    }

    /// Deselects everything then selects the first hit target in `hits`, which
    /// must be ordered nearest first. Returns the newly selected target.
    pub fn select_nearest<I>(&mut self, hits: I) -> Option<HitTargetId>
    where
        I: IntoIterator<Item = PickingHit>,
    {
        self.clear_selection();

        for hit in hits {
            if let PickingHit::HitTarget(id) = hit {
                if let Some(target) = self.targets.get_mut(id.get()) {
                    target.selected = true;
                    return Some(id);
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_list(count: usize) -> HitTargetList {
        let mut list = HitTargetList::default();
        for i in 0..count {
            list.push(HitTarget::new(
                Entity::from_raw(100 + i as u32),
                Vec3::new(i as f32, 0.0, 0.0),
                4.0,
            ));
        }
        list
    }

    fn hit(list: &HitTargetList, index: usize) -> PickingHit {
        list.resolve(list.get(HitTargetId::new(index)).unwrap().entity)
    }

    fn selected_indices(list: &HitTargetList) -> Vec<usize> {
        list.iter()
            .filter(|(_, target)| target.is_selected())
            .map(|(id, _)| id.get())
            .collect()
    }

    #[test]
    fn resolve_distinguishes_targets_from_other_entities() {
        let list = grid_list(3);
        assert_eq!(
            list.resolve(Entity::from_raw(101)),
            PickingHit::HitTarget(HitTargetId::new(1))
        );
        assert_eq!(
            list.resolve(Entity::from_raw(7)),
            PickingHit::Other(Entity::from_raw(7))
        );
    }

    #[test]
    fn miss_deselects_everything() {
        let mut list = grid_list(25);
        let first = hit(&list, 3);
        list.select_nearest([first]);
        assert_eq!(list.selected(), Some(HitTargetId::new(3)));

        let result = list.select_nearest([
            PickingHit::Other(Entity::from_raw(1)),
            PickingHit::Other(Entity::from_raw(2)),
        ]);
        assert_eq!(result, None);
        assert!(selected_indices(&list).is_empty());

        list.select_nearest([first]);
        list.select_nearest(std::iter::empty());
        assert!(selected_indices(&list).is_empty());
    }

    #[test]
    fn nearest_target_is_selected_in_five_by_five_grid() {
        let mut list = grid_list(25);
        let hits = [hit(&list, 7), hit(&list, 12)];

        let result = list.select_nearest(hits);

        assert_eq!(result, Some(HitTargetId::new(7)));
        assert_eq!(selected_indices(&list), vec![7]);
        assert_eq!(
            list.get(HitTargetId::new(12)).unwrap().color(),
            HitTarget::DESELECTED_COLOR
        );
        assert_eq!(
            list.get(HitTargetId::new(7)).unwrap().color(),
            HitTarget::SELECTED_COLOR
        );
    }

    #[test]
    fn non_target_hits_in_front_are_skipped() {
        let mut list = grid_list(25);
        let hits = [
            PickingHit::Other(Entity::from_raw(5)),
            hit(&list, 20),
            PickingHit::Other(Entity::from_raw(6)),
            hit(&list, 4),
        ];

        assert_eq!(list.select_nearest(hits), Some(HitTargetId::new(20)));
        assert_eq!(selected_indices(&list), vec![20]);
    }

    #[test]
    fn previous_selection_is_replaced() {
        let mut list = grid_list(25);
        list.select_nearest([hit(&list, 0)]);
        list.select_nearest([hit(&list, 24), hit(&list, 0)]);
        assert_eq!(selected_indices(&list), vec![24]);
    }

    #[test]
    fn selecting_twice_is_idempotent() {
        let mut list = grid_list(25);
        let hits = vec![hit(&list, 9), hit(&list, 2)];

        let first = list.select_nearest(hits.clone());
        let second = list.select_nearest(hits);

        assert_eq!(first, second);
        assert_eq!(selected_indices(&list), vec![9]);
    }

    #[test]
    fn stale_target_id_is_ignored() {
        let mut list = grid_list(2);
        let result = list.select_nearest([PickingHit::HitTarget(HitTargetId::new(10))]);
        assert_eq!(result, None);
        assert!(selected_indices(&list).is_empty());
    }
}
