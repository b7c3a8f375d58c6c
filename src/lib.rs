#![allow(clippy::type_complexity)]
#![allow(clippy::too_many_arguments)]

use bevy::{
    app::{Last, PostStartup, Startup, Update},
    log::{Level, LogPlugin},
    prelude::{App, ClearColor, Color, DefaultPlugins, IntoSystemConfigs, Msaa, PluginGroup},
    window::{PresentMode, Window, WindowMode, WindowPlugin, WindowResolution},
};
use serde::Deserialize;
use std::{path::Path, time::Duration};

pub mod ar_error;
pub mod components;
pub mod events;
pub mod hit_target_grid;
pub mod resources;
pub mod systems;
pub mod ui;

pub use ar_error::ArError;

use events::PickingEvent;
use resources::{ArSceneConfig, DummyTracker, DummyVideo, HitTargetList, UiStateDebugWindows};
use systems::{
    ar_scene_setup_system, ar_session_exit_system, ar_session_start_system,
    hit_target_color_system, hit_target_selection_system, mouse_picking_system,
    tracker_update_system, video_background_system, window_toggle_system,
};
use ui::{
    ui_debug_diagnostics_system, ui_debug_window_system, ui_help_system, ui_hit_target_list_system,
};

pub const DUMMY_VIDEO_PLUGIN: &str = "dummyvideo";
pub const DUMMY_TRACKER_PLUGIN: &str = "dummytracker";

#[derive(Deserialize)]
#[serde(tag = "type")]
pub enum GraphicsModeConfig {
    #[serde(rename = "window")]
    Window { width: f32, height: f32 },
    #[serde(rename = "fullscreen")]
    Fullscreen,
}

#[derive(Deserialize)]
#[serde(default)]
pub struct GraphicsConfig {
    pub mode: GraphicsModeConfig,
    pub disable_vsync: bool,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            mode: GraphicsModeConfig::Window {
                width: 1280.0,
                height: 960.0,
            },
            disable_vsync: false,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub plugin: String,
    pub config: String,
    pub flip_vertical: bool,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            plugin: DUMMY_VIDEO_PLUGIN.into(),
            config: "Data/dummyvideo/dummyvideo.png".into(),
            flip_vertical: false,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub plugin: String,
    pub config: String,
    pub target: String,
    pub calibration: String,
    pub calibration_fov_degrees: f32,
    pub distance: f32,
    pub tilt_degrees: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            plugin: DUMMY_TRACKER_PLUGIN.into(),
            config: "mode=0;".into(),
            target: "test.pattern;35.2;22.0;0.3".into(),
            calibration: String::new(),
            calibration_fov_degrees: 40.0,
            distance: 60.0,
            tilt_degrees: -35.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: u32,
    pub height: u32,
    pub size: f32,
    pub space: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            size: 4.0,
            space: 5.0,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub graphics: GraphicsConfig,
    pub video: VideoConfig,
    pub tracker: TrackerConfig,
    pub grid: GridConfig,
}

pub fn load_config(path: &Path) -> Config {
    let toml_str = match std::fs::read_to_string(path) {
        Ok(toml_str) => toml_str,
        Err(error) => {
            println!(
                "Failed to load configuration from {} with error: {}",
                path.to_string_lossy(),
                error
            );
            return Config::default();
        }
    };

    match toml::from_str(&toml_str) {
        Ok(config) => {
            println!("Read configuration from {}", path.to_string_lossy());
            config
        }
        Err(error) => {
            println!(
                "Failed to load configuration from {} with error: {}",
                path.to_string_lossy(),
                error
            );
            Config::default()
        }
    }
}

/// Looks up the configured video and tracker plugins, checks the grid fits,
/// opens the video, then connects and initialises the tracker with its single
/// active target.
pub fn create_ar_devices(config: &Config) -> Result<(DummyVideo, DummyTracker, usize), ArError> {
    let mut video = match config.video.plugin.as_str() {
        DUMMY_VIDEO_PLUGIN => DummyVideo::new(&config.video),
        unknown => return Err(ArError::UnknownVideoPlugin(unknown.into())),
    };

    let mut tracker = match config.tracker.plugin.as_str() {
        DUMMY_TRACKER_PLUGIN => DummyTracker::new(&config.tracker)?,
        unknown => return Err(ArError::UnknownTrackerPlugin(unknown.into())),
    };

    hit_target_grid::validate_grid(&config.grid)?;

    video.open()?;

    let target = tracker.add_target(&config.tracker.target)?;
    tracker.set_target_active(target, true)?;
    tracker.set_video_source();
    tracker.init()?;

    Ok((video, tracker, target))
}

pub fn run_viewer(config: &Config) -> Result<(), ArError> {
    let (video, tracker, tracked_target) = match create_ar_devices(config) {
        Ok(devices) => devices,
        Err(error) => {
            log::error!("Failed to initialise AR devices: {}", error);
            return Err(error);
        }
    };

    let (window_width, window_height) =
        if let GraphicsModeConfig::Window { width, height } = config.graphics.mode {
            (width, height)
        } else {
            (1280.0, 960.0)
        };

    let mut app = App::new();

    // Initialise bevy engine
    app.insert_resource(Msaa::Sample4)
        .insert_resource(ClearColor(Color::rgb(0.0, 0.0, 0.0)))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "ar-picking-viewer".to_string(),
                        present_mode: if config.graphics.disable_vsync {
                            PresentMode::Immediate
                        } else {
                            PresentMode::Fifo
                        },
                        resolution: WindowResolution::new(window_width, window_height),
                        mode: if matches!(config.graphics.mode, GraphicsModeConfig::Fullscreen) {
                            WindowMode::BorderlessFullscreen
                        } else {
                            WindowMode::Windowed
                        },
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                .set(LogPlugin {
                    level: Level::INFO,
                    filter: "wgpu=error,naga=warn,ar_picking_viewer=debug".to_string(),
                }),
        )
        .add_plugins((
            bevy::diagnostic::FrameTimeDiagnosticsPlugin,
            bevy::diagnostic::EntityCountDiagnosticsPlugin,
            bevy::diagnostic::LogDiagnosticsPlugin {
                wait_duration: Duration::from_secs(30),
                ..Default::default()
            },
        ));

    // Initialise 3rd party bevy plugins
    app.add_plugins(bevy_egui::EguiPlugin)
        .add_plugins(bevy_rapier3d::prelude::RapierPhysicsPlugin::<
            bevy_rapier3d::prelude::NoUserData,
        >::default())
        .insert_resource(bevy_rapier3d::prelude::RapierConfiguration {
            physics_pipeline_active: false,
            query_pipeline_active: true,
            ..Default::default()
        });

    // Initialise AR session
    app.insert_resource(video)
        .insert_resource(tracker)
        .insert_resource(ArSceneConfig {
            grid: config.grid,
            tracked_target,
        })
        .init_resource::<HitTargetList>()
        .init_resource::<UiStateDebugWindows>()
        .add_event::<PickingEvent>();

    app.add_systems(Startup, ar_scene_setup_system)
        .add_systems(PostStartup, ar_session_start_system)
        .add_systems(
            Update,
            (
                tracker_update_system,
                video_background_system,
                ui_debug_window_system,
                ui_hit_target_list_system.after(ui_debug_window_system),
                ui_debug_diagnostics_system.after(ui_debug_window_system),
                ui_help_system.after(ui_debug_window_system),
                window_toggle_system,
                mouse_picking_system
                    .after(tracker_update_system)
                    .after(ui_hit_target_list_system)
                    .after(ui_debug_diagnostics_system)
                    .after(ui_help_system),
                hit_target_selection_system.after(mouse_picking_system),
                hit_target_color_system.after(hit_target_selection_system),
            ),
        )
        .add_systems(Last, ar_session_exit_system);

    app.run();

    Ok(())
}
