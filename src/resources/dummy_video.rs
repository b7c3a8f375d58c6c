use bevy::{
    math::UVec2,
    prelude::{Handle, Image, Resource},
    render::render_resource::{Extent3d, TextureDimension, TextureFormat},
};

use crate::{ar_error::ArError, resources::ArDeviceState, VideoConfig};

const DEVICE_NAME: &str = "video";

pub const DUMMY_VIDEO_FRAME_SIZE: UVec2 = UVec2::new(640, 480);
const CHECKERBOARD_CELL_SIZE: u32 = 40;

/// Video source which always shows the same frame, either an image asset or a
/// generated checkerboard.
#[derive(Resource)]
pub struct DummyVideo {
    pub image_path: Option<String>,
    pub flip_vertical: bool,
    pub frame: Option<Handle<Image>>,
    frame_size: Option<UVec2>,
    state: ArDeviceState,
}

impl DummyVideo {
    pub fn new(config: &VideoConfig) -> Self {
        let image_path = if config.config.is_empty() {
            None
        } else {
            Some(config.config.clone())
        };

        Self {
            image_path,
            flip_vertical: config.flip_vertical,
            frame: None,
            frame_size: None,
            state: ArDeviceState::Closed,
        }
    }

    pub fn state(&self) -> ArDeviceState {
        self.state
    }

    /// Size of the video frame, only known once the video has been opened.
    pub fn frame_size(&self) -> Option<UVec2> {
        self.frame_size
    }

    pub fn set_frame_size(&mut self, frame_size: UVec2) {
        if self.state != ArDeviceState::Closed {
            self.frame_size = Some(frame_size);
        }
    }

    /// Replaces the configured image with a generated frame, used when the
    /// image asset could not be loaded.
    pub fn use_generated_frame(&mut self, frame: Handle<Image>) {
        self.image_path = None;
        self.frame = Some(frame);
        self.set_frame_size(DUMMY_VIDEO_FRAME_SIZE);
    }

    pub fn open(&mut self) -> Result<(), ArError> {
        self.state = self.state.open(DEVICE_NAME)?;
        // The real size of an image asset is picked up once it has loaded
        self.frame_size = Some(DUMMY_VIDEO_FRAME_SIZE);
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), ArError> {
        self.state = self.state.start(DEVICE_NAME)?;
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), ArError> {
        self.state = self.state.stop(DEVICE_NAME)?;
        Ok(())
    }

    pub fn close(&mut self) {
        self.state = self.state.close();
        self.frame_size = None;
    }

    pub fn aspect_ratio(&self) -> f32 {
        let size = self.frame_size.unwrap_or(DUMMY_VIDEO_FRAME_SIZE);
        size.x as f32 / size.y.max(1) as f32
    }
}

pub fn generate_checkerboard_frame(width: u32, height: u32) -> Image {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let dark = ((x / CHECKERBOARD_CELL_SIZE) + (y / CHECKERBOARD_CELL_SIZE)) % 2 == 0;
            let value = if dark { 48 } else { 160 };
            data.extend_from_slice(&[value, value, value, 255]);
        }
    }

    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_config(config: &str) -> VideoConfig {
        VideoConfig {
            config: config.into(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_config_uses_generated_frame() {
        let video = DummyVideo::new(&video_config(""));
        assert_eq!(video.image_path, None);

        let video = DummyVideo::new(&video_config("Data/dummyvideo/dummyvideo.png"));
        assert_eq!(
            video.image_path.as_deref(),
            Some("Data/dummyvideo/dummyvideo.png")
        );
    }

    #[test]
    fn frame_size_known_after_open() {
        let mut video = DummyVideo::new(&video_config(""));
        assert_eq!(video.frame_size(), None);

        video.set_frame_size(UVec2::new(10, 10));
        assert_eq!(video.frame_size(), None);

        video.open().unwrap();
        assert_eq!(video.frame_size(), Some(DUMMY_VIDEO_FRAME_SIZE));
        assert!((video.aspect_ratio() - 640.0 / 480.0).abs() < 1e-6);

        video.set_frame_size(UVec2::new(800, 400));
        assert!((video.aspect_ratio() - 2.0).abs() < 1e-6);

        video.close();
        assert_eq!(video.frame_size(), None);
        assert_eq!(video.state(), ArDeviceState::Closed);
    }

    #[test]
    fn generated_frame_replaces_image_path() {
        let mut video = DummyVideo::new(&video_config("missing/frame.png"));
        video.open().unwrap();
        video.set_frame_size(UVec2::new(1920, 1080));

        video.use_generated_frame(Handle::default());

        assert_eq!(video.image_path, None);
        assert!(video.frame.is_some());
        assert_eq!(video.frame_size(), Some(DUMMY_VIDEO_FRAME_SIZE));
    }

    #[test]
    fn cannot_start_before_open() {
        let mut video = DummyVideo::new(&video_config(""));
        assert!(video.start().is_err());
        video.open().unwrap();
        video.start().unwrap();
        assert!(video.state().is_running());
        video.stop().unwrap();
        assert!(video.stop().is_err());
    }

    #[test]
    fn checkerboard_alternates_cells() {
        let image = generate_checkerboard_frame(80, 40);
        assert_eq!(image.data.len(), 80 * 40 * 4);

        let pixel = |x: usize, y: usize| image.data[(y * 80 + x) * 4];
        assert_eq!(pixel(0, 0), 48);
        assert_eq!(pixel(39, 39), 48);
        assert_eq!(pixel(40, 0), 160);
        assert_eq!(image.data[3], 255);
    }
}
