use bevy::{
    app::AppExit,
    prelude::{EventReader, ResMut},
};

use crate::{
    ar_error::ArError,
    resources::{ArDeviceState, DummyTracker, DummyVideo},
};

/// Video must be streaming before the tracker can start consuming it.
pub fn start_ar_devices(video: &mut DummyVideo, tracker: &mut DummyTracker) -> Result<(), ArError> {
    video.start()?;
    tracker.start()?;
    Ok(())
}

pub fn shutdown_ar_devices(video: &mut DummyVideo, tracker: &mut DummyTracker) {
    if tracker.state() == ArDeviceState::Started {
        if let Err(error) = tracker.stop() {
            log::warn!("Failed to stop tracker: {}", error);
        }
    }

    if video.state() == ArDeviceState::Started {
        if let Err(error) = video.stop() {
            log::warn!("Failed to stop video: {}", error);
        }
    }

    tracker.close();
    video.close();
}

pub fn ar_session_start_system(mut video: ResMut<DummyVideo>, mut tracker: ResMut<DummyTracker>) {
    match start_ar_devices(&mut video, &mut tracker) {
        Ok(()) => log::info!("Started dummy video and dummy tracker"),
        Err(error) => log::error!("Failed to start AR session: {}", error),
    }
}

pub fn ar_session_exit_system(
    mut app_exit_events: EventReader<AppExit>,
    mut video: ResMut<DummyVideo>,
    mut tracker: ResMut<DummyTracker>,
) {
    if app_exit_events.iter().next().is_none() {
        return;
    }

    shutdown_ar_devices(&mut video, &mut tracker);
    log::info!("Stopped and closed dummy tracker and dummy video");
}
