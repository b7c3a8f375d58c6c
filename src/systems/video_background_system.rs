use bevy::{
    asset::LoadState,
    math::{UVec2, Vec3},
    pbr::StandardMaterial,
    prelude::{AssetServer, Assets, Handle, Image, Query, Res, ResMut, Transform, Visibility},
};

use crate::{
    components::VideoBackground,
    resources::{generate_checkerboard_frame, DummyVideo, DUMMY_VIDEO_FRAME_SIZE},
};

/// Scale of a unit quad `distance` in front of the camera so that it fills the
/// vertical field of view.
pub fn video_background_scale(distance: f32, fov_y: f32, aspect: f32, flip_vertical: bool) -> Vec3 {
    let height = 2.0 * distance * (fov_y * 0.5).tan();
    let width = height * aspect;

    Vec3::new(width, if flip_vertical { -height } else { height }, 1.0)
}

pub fn video_background_system(
    mut video: ResMut<DummyVideo>,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query_background: Query<(
        &VideoBackground,
        &Handle<StandardMaterial>,
        &mut Transform,
        &mut Visibility,
    )>,
) {
    let frame_failed = video.image_path.is_some()
        && video
            .frame
            .as_ref()
            .map_or(false, |handle| asset_server.get_load_state(handle) == LoadState::Failed);

    let mut replaced_frame = None;
    if frame_failed {
        log::warn!(
            "Failed to load dummy video frame {}, using generated frame",
            video.image_path.as_deref().unwrap_or_default()
        );
        let frame = images.add(generate_checkerboard_frame(
            DUMMY_VIDEO_FRAME_SIZE.x,
            DUMMY_VIDEO_FRAME_SIZE.y,
        ));
        video.use_generated_frame(frame.clone());
        replaced_frame = Some(frame);
    }

    let loaded_size = video
        .frame
        .as_ref()
        .and_then(|handle| images.get(handle))
        .map(|image| {
            let size = image.size();
            UVec2::new(size.x as u32, size.y as u32)
        });

    if let Some(loaded_size) = loaded_size {
        if video.frame_size() != Some(loaded_size) && video.frame_size().is_some() {
            log::info!(
                "Dummy video frame size {}x{}",
                loaded_size.x,
                loaded_size.y
            );
            video.set_frame_size(loaded_size);
        }
    }

    let running = video.state().is_running();
    for (background, material_handle, mut transform, mut visibility) in query_background.iter_mut()
    {
        if let Some(frame) = replaced_frame.as_ref() {
            if let Some(material) = materials.get_mut(material_handle) {
                material.base_color_texture = Some(frame.clone());
            }
        }

        let scale = video_background_scale(
            background.distance,
            background.fov_y,
            video.aspect_ratio(),
            video.flip_vertical,
        );
        if transform.scale != scale {
            transform.scale = scale;
        }

        let target_visibility = if running {
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
        asset::{AddAsset, AssetPlugin},
        prelude::{App, Entity, MinimalPlugins, Update},
    };

    use super::*;
    use crate::VideoConfig;

    fn background_app(image_path: &str) -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .add_asset::<Image>()
            .add_asset::<StandardMaterial>()
            .add_systems(Update, video_background_system);

        let mut video = DummyVideo::new(&VideoConfig {
            config: image_path.into(),
            ..Default::default()
        });
        video.open().unwrap();
        video.start().unwrap();

        let frame: Handle<Image> = app.world.resource::<AssetServer>().load(image_path);
        video.frame = Some(frame.clone());
        app.insert_resource(video);

        let material = app
            .world
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial {
                base_color_texture: Some(frame),
                unlit: true,
                ..Default::default()
            });
        let background = app
            .world
            .spawn((
                VideoBackground {
                    distance: 900.0,
                    fov_y: 40f32.to_radians(),
                },
                material,
                Transform::IDENTITY,
                Visibility::Hidden,
            ))
            .id();

        (app, background)
    }

    #[test]
    fn missing_frame_falls_back_to_generated_frame() {
        let (mut app, background) = background_app("missing/dummyvideo.png");

        // Asset loading happens on the io task pool
        for _ in 0..200 {
            app.update();
            if app.world.resource::<DummyVideo>().image_path.is_none() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        let video = app.world.resource::<DummyVideo>();
        assert_eq!(video.image_path, None);
        let frame = video.frame.clone().unwrap();
        assert!(app.world.resource::<Assets<Image>>().get(&frame).is_some());
        assert_eq!(video.frame_size(), Some(DUMMY_VIDEO_FRAME_SIZE));

        let material_handle = app
            .world
            .get::<Handle<StandardMaterial>>(background)
            .unwrap()
            .clone();
        let material = app
            .world
            .resource::<Assets<StandardMaterial>>()
            .get(&material_handle)
            .unwrap();
        assert_eq!(material.base_color_texture, Some(frame));
        assert_eq!(
            *app.world.get::<Visibility>(background).unwrap(),
            Visibility::Inherited
        );
    }

    #[test]
    fn background_fills_field_of_view() {
        let scale = video_background_scale(10.0, 90f32.to_radians(), 2.0, false);
        assert!((scale.y - 20.0).abs() < 1e-4);
        assert!((scale.x - 40.0).abs() < 1e-4);
        assert_eq!(scale.z, 1.0);
    }

    #[test]
    fn flip_vertical_mirrors_height() {
        let scale = video_background_scale(10.0, 90f32.to_radians(), 1.0, true);
        assert!((scale.y + 20.0).abs() < 1e-4);
        assert!(scale.x > 0.0);
    }
}
