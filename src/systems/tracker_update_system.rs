use bevy::prelude::{Query, Res, ResMut, Time, Transform, Visibility};

use crate::{components::TrackedTransform, resources::DummyTracker};

pub fn tracker_update_system(
    time: Res<Time>,
    mut tracker: ResMut<DummyTracker>,
    mut query_tracked: Query<(&TrackedTransform, &mut Transform, &mut Visibility)>,
) {
    tracker.update(time.elapsed_seconds());

    for (tracked, mut transform, mut visibility) in query_tracked.iter_mut() {
        let target_visible = if let Some(target) = tracker.target(tracked.target_index) {
            if target.visible && *transform != target.pose {
                *transform = target.pose;
            }
            target.visible
        } else {
            false
        };

        let target_visibility = if target_visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        if *visibility != target_visibility {
            *visibility = target_visibility;
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::{
        math::Vec3,
        prelude::{App, Update},
        time::TimePlugin,
    };

    use super::*;
    use crate::TrackerConfig;

    fn tracker_app(active: bool) -> (App, bevy::prelude::Entity) {
        let mut tracker = DummyTracker::new(&TrackerConfig::default()).unwrap();
        let target = tracker.add_target("test.pattern;35.2;22.0;0.3").unwrap();
        tracker.set_target_active(target, active).unwrap();
        tracker.set_video_source();
        tracker.init().unwrap();
        tracker.start().unwrap();

        let mut app = App::new();
        app.add_plugins(TimePlugin)
            .insert_resource(tracker)
            .add_systems(Update, tracker_update_system);

        let entity = app
            .world
            .spawn((
                TrackedTransform::new(target),
                Transform::IDENTITY,
                Visibility::Hidden,
            ))
            .id();

        (app, entity)
    }

    #[test]
    fn active_target_moves_and_shows_tracked_entity() {
        let (mut app, entity) = tracker_app(true);
        app.update();

        let transform = app.world.get::<Transform>(entity).unwrap();
        assert_eq!(transform.translation, Vec3::new(0.0, 0.0, -60.0));
        assert_eq!(
            *app.world.get::<Visibility>(entity).unwrap(),
            Visibility::Inherited
        );
    }

    #[test]
    fn inactive_target_hides_tracked_entity() {
        let (mut app, entity) = tracker_app(false);
        app.update();

        assert_eq!(
            *app.world.get::<Visibility>(entity).unwrap(),
            Visibility::Hidden
        );
        assert_eq!(
            *app.world.get::<Transform>(entity).unwrap(),
            Transform::IDENTITY
        );
    }
}
