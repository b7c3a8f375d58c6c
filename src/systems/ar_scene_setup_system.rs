use bevy::{
    math::{Quat, Vec2, Vec3},
    pbr::{AmbientLight, DirectionalLight, DirectionalLightBundle, PbrBundle, StandardMaterial},
    prelude::{
        shape, AssetServer, Assets, BuildChildren, Camera3dBundle, Color, Commands, Image, Mesh,
        PerspectiveProjection, Res, ResMut, SpatialBundle, Transform, Visibility,
    },
};
use bevy_rapier3d::prelude::{Collider, CollisionGroups, Group};

use crate::{
    components::{
        HitTargetModel, TrackedTransform, VideoBackground, COLLISION_FILTER_CLICKABLE,
        COLLISION_GROUP_HIT_TARGET, COLLISION_GROUP_MARKER_BOARD,
    },
    hit_target_grid::hit_target_grid,
    resources::{
        generate_checkerboard_frame, ArSceneConfig, DummyTracker, DummyVideo, HitTarget,
        HitTargetList, DUMMY_VIDEO_FRAME_SIZE,
    },
    systems::video_background_scale,
};

const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 1000.0;
const VIDEO_BACKGROUND_DISTANCE: f32 = CAMERA_FAR * 0.9;
const MARKER_BOARD_THICKNESS: f32 = 0.2;

#[allow(clippy::too_many_arguments)]
pub fn ar_scene_setup_system(
    mut commands: Commands,
    scene_config: Res<ArSceneConfig>,
    tracker: Res<DummyTracker>,
    mut video: ResMut<DummyVideo>,
    mut hit_target_list: ResMut<HitTargetList>,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let fov_y = tracker.calibration.fov_y_degrees.to_radians();

    // Virtual camera with the video background behind all AR content
    let video_frame = if let Some(image_path) = video.image_path.as_ref() {
        log::info!("Loading dummy video frame from {}", image_path);
        asset_server.load(image_path.as_str())
    } else {
        log::info!("Using generated dummy video frame");
        images.add(generate_checkerboard_frame(
            DUMMY_VIDEO_FRAME_SIZE.x,
            DUMMY_VIDEO_FRAME_SIZE.y,
        ))
    };
    video.frame = Some(video_frame.clone());

    commands
        .spawn(Camera3dBundle {
            projection: PerspectiveProjection {
                fov: fov_y,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                ..Default::default()
            }
            .into(),
            ..Default::default()
        })
        .with_children(|parent| {
            parent.spawn((
                PbrBundle {
                    mesh: meshes.add(Mesh::from(shape::Quad::new(Vec2::ONE))),
                    material: materials.add(StandardMaterial {
                        base_color_texture: Some(video_frame),
                        unlit: true,
                        cull_mode: None,
                        ..Default::default()
                    }),
                    transform: Transform::from_translation(Vec3::new(
                        0.0,
                        0.0,
                        -VIDEO_BACKGROUND_DISTANCE,
                    ))
                    .with_scale(video_background_scale(
                        VIDEO_BACKGROUND_DISTANCE,
                        fov_y,
                        video.aspect_ratio(),
                        video.flip_vertical,
                    )),
                    ..Default::default()
                },
                VideoBackground {
                    distance: VIDEO_BACKGROUND_DISTANCE,
                    fov_y,
                },
            ));
        });

    commands.insert_resource(AmbientLight {
        color: Color::rgb(1.0, 1.0, 1.0),
        brightness: 0.6,
    });
    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 10000.0,
            ..Default::default()
        },
        transform: Transform::from_rotation(Quat::from_euler(
            bevy::math::EulerRot::XYZ,
            -0.6,
            0.4,
            0.0,
        )),
        ..Default::default()
    });

    // Transform driven by the tracked marker, hidden until the tracker sees it
    let ar_transform = commands
        .spawn((
            SpatialBundle {
                visibility: Visibility::Hidden,
                ..Default::default()
            },
            TrackedTransform::new(scene_config.tracked_target),
        ))
        .id();

    let grid = &scene_config.grid;
    let board_size = Vec3::new(
        grid.width as f32 * grid.space,
        grid.height as f32 * grid.space,
        MARKER_BOARD_THICKNESS,
    );
    let board = commands
        .spawn((
            PbrBundle {
                mesh: meshes.add(Mesh::from(shape::Box::new(
                    board_size.x,
                    board_size.y,
                    board_size.z,
                ))),
                material: materials.add(StandardMaterial {
                    base_color: Color::rgb(0.15, 0.15, 0.18),
                    ..Default::default()
                }),
                transform: Transform::from_translation(Vec3::new(
                    -grid.space * 0.5,
                    -grid.space * 0.5,
                    -MARKER_BOARD_THICKNESS * 0.5,
                )),
                ..Default::default()
            },
            Collider::cuboid(board_size.x * 0.5, board_size.y * 0.5, board_size.z * 0.5),
            CollisionGroups::new(
                COLLISION_GROUP_MARKER_BOARD | COLLISION_FILTER_CLICKABLE,
                Group::all(),
            ),
        ))
        .id();
    commands.entity(ar_transform).add_child(board);

    let hit_target_mesh = meshes.add(Mesh::from(shape::Cube { size: grid.size }));
    let half_size = grid.size * 0.5;

    for cell in hit_target_grid(grid) {
        let entity = commands.spawn_empty().id();
        let hit_target = HitTarget::new(entity, cell.position, grid.size);
        let material = materials.add(StandardMaterial {
            base_color: hit_target.color(),
            ..Default::default()
        });
        let id = hit_target_list.push(hit_target);

        commands.entity(entity).insert((
            PbrBundle {
                mesh: hit_target_mesh.clone(),
                material,
                transform: Transform::from_translation(cell.position),
                ..Default::default()
            },
            HitTargetModel::new(id),
            Collider::cuboid(half_size, half_size, half_size),
            CollisionGroups::new(
                COLLISION_GROUP_HIT_TARGET | COLLISION_FILTER_CLICKABLE,
                Group::all(),
            ),
        ));
        commands.entity(ar_transform).add_child(entity);
    }

    log::info!(
        "Created {}x{} grid of {} hit targets",
        grid.width,
        grid.height,
        hit_target_list.len()
    );
}
