use crate::ar_error::ArError;

/// Lifecycle shared by the video source and the tracker.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ArDeviceState {
    #[default]
    Closed,
    Opened,
    Started,
    Stopped,
}

impl ArDeviceState {
    fn invalid(self, device: &'static str, action: &'static str) -> ArError {
        ArError::InvalidTransition {
            device,
            action,
            state: self,
        }
    }

    pub fn open(self, device: &'static str) -> Result<Self, ArError> {
        match self {
            ArDeviceState::Closed => Ok(ArDeviceState::Opened),
            _ => Err(self.invalid(device, "open")),
        }
    }

    pub fn start(self, device: &'static str) -> Result<Self, ArError> {
        match self {
            ArDeviceState::Opened | ArDeviceState::Stopped => Ok(ArDeviceState::Started),
            _ => Err(self.invalid(device, "start")),
        }
    }

    pub fn stop(self, device: &'static str) -> Result<Self, ArError> {
        match self {
            ArDeviceState::Started => Ok(ArDeviceState::Stopped),
            _ => Err(self.invalid(device, "stop")),
        }
    }

    pub fn close(self) -> Self {
        ArDeviceState::Closed
    }

    pub fn is_running(self) -> bool {
        matches!(self, ArDeviceState::Started)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_lifecycle() {
        let state = ArDeviceState::default();
        let state = state.open("video").unwrap();
        let state = state.start("video").unwrap();
        assert!(state.is_running());
        let state = state.stop("video").unwrap();
        assert!(!state.is_running());
        let state = state.start("video").unwrap();
        assert_eq!(state.close(), ArDeviceState::Closed);
    }

    #[test]
    fn start_requires_open() {
        assert_eq!(
            ArDeviceState::Closed.start("tracker"),
            Err(ArError::InvalidTransition {
                device: "tracker",
                action: "start",
                state: ArDeviceState::Closed,
            })
        );
    }

    #[test]
    fn cannot_open_twice_or_stop_when_idle() {
        assert!(ArDeviceState::Opened.open("video").is_err());
        assert!(ArDeviceState::Started.open("video").is_err());
        assert!(ArDeviceState::Opened.stop("video").is_err());
        assert!(ArDeviceState::Closed.stop("video").is_err());
    }
}
