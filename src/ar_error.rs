use thiserror::Error;

use crate::resources::ArDeviceState;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArError {
    #[error("Unknown video plugin {0}")]
    UnknownVideoPlugin(String),

    #[error("Unknown tracker plugin {0}")]
    UnknownTrackerPlugin(String),

    #[error("Invalid tracker configuration {0:?}")]
    InvalidTrackerConfig(String),

    #[error("Invalid target description {0:?}")]
    InvalidTargetDescription(String),

    #[error("Grid of {width}x{height} hit targets exceeds {max} targets")]
    GridTooLarge { width: u32, height: u32, max: usize },

    #[error("Tracker target {0} does not exist")]
    NoSuchTarget(usize),

    #[error("Tracker has no video source")]
    MissingVideoSource,

    #[error("Cannot {action} {device} while it is {state:?}")]
    InvalidTransition {
        device: &'static str,
        action: &'static str,
        state: ArDeviceState,
    },
}
