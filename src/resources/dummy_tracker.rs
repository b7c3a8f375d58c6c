use bevy::{
    math::{Quat, Vec3},
    prelude::{Resource, Transform},
};

use crate::{ar_error::ArError, resources::ArDeviceState, TrackerConfig};

const DEVICE_NAME: &str = "tracker";

const SWAY_SPEED: f32 = 0.5;
const SWAY_ANGLE: f32 = 0.35;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrackerMode {
    Static,
    Sway,
}

/// Parses a tracker configuration string of the form `key=value;key=value;`.
pub fn parse_tracker_config(config: &str) -> Result<TrackerMode, ArError> {
    let mut mode = TrackerMode::Static;

    for entry in config.split(';').map(str::trim).filter(|x| !x.is_empty()) {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| ArError::InvalidTrackerConfig(config.into()))?;

        match key.trim() {
            "mode" => {
                mode = match value.trim() {
                    "0" => TrackerMode::Static,
                    "1" => TrackerMode::Sway,
                    _ => return Err(ArError::InvalidTrackerConfig(config.into())),
                };
            }
            unknown => {
                log::warn!("Ignoring unknown tracker configuration key {}", unknown);
            }
        }
    }

    Ok(mode)
}

/// Parses a target description of the form `name;param;param;...`.
pub fn parse_target_description(description: &str) -> Result<(String, Vec<f32>), ArError> {
    let mut fields = description.split(';').map(str::trim);
    let name = fields
        .next()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ArError::InvalidTargetDescription(description.into()))?;

    let parameters = fields
        .filter(|x| !x.is_empty())
        .map(|x| x.parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ArError::InvalidTargetDescription(description.into()))?;

    Ok((name.to_string(), parameters))
}

#[derive(Clone, Debug)]
pub struct TrackerCalibration {
    pub fov_y_degrees: f32,
}

impl TrackerCalibration {
    /// The dummy tracker has no calibration files, every path loads the
    /// default calibration.
    pub fn load(path: &str, default_fov_y_degrees: f32) -> Self {
        if !path.is_empty() {
            log::warn!(
                "Dummy tracker ignores calibration file {}, using default calibration",
                path
            );
        }

        Self {
            fov_y_degrees: default_fov_y_degrees,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TrackerTarget {
    pub name: String,
    pub parameters: Vec<f32>,
    pub active: bool,
    pub visible: bool,
    pub pose: Transform,
}

/// Tracker which reports a configured pose for every active target instead of
/// estimating one from the video.
#[derive(Resource)]
pub struct DummyTracker {
    pub mode: TrackerMode,
    pub calibration: TrackerCalibration,
    distance: f32,
    tilt_degrees: f32,
    has_video_source: bool,
    targets: Vec<TrackerTarget>,
    state: ArDeviceState,
}

impl DummyTracker {
    pub fn new(config: &TrackerConfig) -> Result<Self, ArError> {
        Ok(Self {
            mode: parse_tracker_config(&config.config)?,
            calibration: TrackerCalibration::load(
                &config.calibration,
                config.calibration_fov_degrees,
            ),
            distance: config.distance,
            tilt_degrees: config.tilt_degrees,
            has_video_source: false,
            targets: Vec::new(),
            state: ArDeviceState::Closed,
        })
    }

    pub fn state(&self) -> ArDeviceState {
        self.state
    }

    pub fn add_target(&mut self, description: &str) -> Result<usize, ArError> {
        let (name, parameters) = parse_target_description(description)?;
        self.targets.push(TrackerTarget {
            name,
            parameters,
            active: false,
            visible: false,
            pose: Transform::IDENTITY,
        });
        Ok(self.targets.len() - 1)
    }

    pub fn set_target_active(&mut self, index: usize, active: bool) -> Result<(), ArError> {
        let target = self
            .targets
            .get_mut(index)
            .ok_or(ArError::NoSuchTarget(index))?;
        target.active = active;
        if !active {
            target.visible = false;
        }
        Ok(())
    }

    pub fn target(&self, index: usize) -> Option<&TrackerTarget> {
        self.targets.get(index)
    }

    pub fn targets(&self) -> &[TrackerTarget] {
        &self.targets
    }

    pub fn set_video_source(&mut self) {
        self.has_video_source = true;
    }

    pub fn init(&mut self) -> Result<(), ArError> {
        if !self.has_video_source {
            return Err(ArError::MissingVideoSource);
        }
        self.state = self.state.open(DEVICE_NAME)?;
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), ArError> {
        self.state = self.state.start(DEVICE_NAME)?;
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), ArError> {
        self.state = self.state.stop(DEVICE_NAME)?;
        for target in self.targets.iter_mut() {
            target.visible = false;
        }
        Ok(())
    }

    pub fn close(&mut self) {
        self.state = self.state.close();
        for target in self.targets.iter_mut() {
            target.visible = false;
        }
    }

    pub fn pose_at(&self, elapsed_seconds: f32) -> Transform {
        let mut rotation = Quat::from_rotation_x(self.tilt_degrees.to_radians());
        if self.mode == TrackerMode::Sway {
            rotation *= Quat::from_rotation_z((elapsed_seconds * SWAY_SPEED).sin() * SWAY_ANGLE);
        }

        Transform::from_translation(Vec3::new(0.0, 0.0, -self.distance)).with_rotation(rotation)
    }

    /// Updates the pose and visibility of every target, only active targets
    /// of a running tracker are visible.
    pub fn update(&mut self, elapsed_seconds: f32) {
        let running = self.state.is_running();
        let pose = self.pose_at(elapsed_seconds);

        for target in self.targets.iter_mut() {
            target.visible = running && target.active;
            if target.visible {
                target.pose = pose;
            }
        }
    }
}
