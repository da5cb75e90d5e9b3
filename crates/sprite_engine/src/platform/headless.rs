//! Headless platform backend
//!
//! A render-free [`Platform`] implementation for tests, CI, and bounded
//! smoke runs. Images are tracked by size only, draws and sound plays are
//! recorded instead of performed, and input is driven from a scripted queue
//! of per-tick event batches. Once the script is exhausted the backend can
//! emit a single `Quit`, so a scripted run winds down through the same path
//! as a user closing the window.

use crate::assets::{AssetError, ImageData, SoundData};
use crate::foundation::collections::{HandleMap, ImageHandle, SoundHandle};
use crate::foundation::math::{Extent, Vec2};
use crate::input::{InputEvent, InputState};
use crate::platform::{Platform, TextStyle};
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;

/// A single recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlitRecord {
    /// Image that was drawn
    pub image: ImageHandle,
    /// Top-left position
    pub position: Vec2,
    /// Rotation in degrees
    pub rotation_deg: f32,
}

#[derive(Debug, Clone)]
struct StoredImage {
    size: Extent,
}

/// Render-free platform backend
pub struct HeadlessPlatform {
    viewport: Extent,
    assets_dir: Option<PathBuf>,
    images: HandleMap<ImageHandle, StoredImage>,
    sounds: HandleMap<SoundHandle, String>,
    preset_sizes: HashMap<String, Extent>,
    default_image_size: Extent,
    script: VecDeque<Vec<InputEvent>>,
    quit_when_drained: bool,
    quit_sent: bool,
    input: InputState,
    frame: Vec<BlitRecord>,
    presented: Vec<Vec<BlitRecord>>,
    played: Vec<String>,
}

impl HeadlessPlatform {
    /// Create a headless platform with the given viewport
    pub fn new(viewport: Extent) -> Self {
        Self {
            viewport,
            assets_dir: None,
            images: HandleMap::with_key(),
            sounds: HandleMap::with_key(),
            preset_sizes: HashMap::new(),
            default_image_size: Extent::new(32, 24),
            script: VecDeque::new(),
            quit_when_drained: false,
            quit_sent: false,
            input: InputState::new(),
            frame: Vec::new(),
            presented: Vec::new(),
            played: Vec::new(),
        }
    }

    /// Read image files from disk under `dir` instead of synthesizing sizes
    pub fn with_assets_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.assets_dir = Some(dir.into());
        self
    }

    /// Declare the size a named image will have when loaded
    pub fn with_image(mut self, name: &str, width: u32, height: u32) -> Self {
        self.preset_sizes
            .insert(name.to_string(), Extent::new(width, height));
        self
    }

    /// Emit a single `Quit` event once the script runs dry
    pub fn quit_when_drained(mut self) -> Self {
        self.quit_when_drained = true;
        self
    }

    /// Queue one tick's worth of input events
    pub fn push_batch(&mut self, events: Vec<InputEvent>) {
        self.script.push_back(events);
    }

    /// Queue `ticks` empty input batches
    pub fn push_idle(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.script.push_back(Vec::new());
        }
    }

    /// Sounds played so far, in order
    pub fn played_sounds(&self) -> &[String] {
        &self.played
    }

    /// Draw calls recorded for the most recently presented frame
    pub fn last_frame(&self) -> Option<&[BlitRecord]> {
        self.presented.last().map(Vec::as_slice)
    }

    /// Number of frames presented so far
    pub fn frames_presented(&self) -> usize {
        self.presented.len()
    }

    fn insert_image(&mut self, size: Extent) -> ImageHandle {
        self.images.insert(StoredImage { size })
    }
}

impl Platform for HeadlessPlatform {
    fn viewport(&self) -> Extent {
        self.viewport
    }

    fn load_image(&mut self, name: &str) -> Result<ImageHandle, AssetError> {
        if let Some(dir) = &self.assets_dir {
            let data = ImageData::from_file(dir.join(name))?;
            let size = data.extent();
            return Ok(self.insert_image(size));
        }
        let size = self
            .preset_sizes
            .get(name)
            .copied()
            .unwrap_or(self.default_image_size);
        log::debug!("headless image {:?} sized {}x{}", name, size.width, size.height);
        Ok(self.insert_image(size))
    }

    fn sub_image(
        &mut self,
        source: ImageHandle,
        offset: (u32, u32),
        size: (u32, u32),
    ) -> Result<ImageHandle, AssetError> {
        if !self.images.contains_key(source) {
            return Err(AssetError::InvalidData("dead sheet handle".to_string()));
        }
        // synthetic sheets carry no pixels, so the strip is size-only here;
        // disk-backed pipelines validate bounds in ImageData::sub_image
        let _ = offset;
        Ok(self.insert_image(Extent::new(size.0, size.1)))
    }

    fn solid_image(&mut self, size: (u32, u32), color: [u8; 4]) -> ImageHandle {
        let _ = color;
        self.insert_image(Extent::new(size.0, size.1))
    }

    fn render_text(&mut self, text: &str, style: &TextStyle, size: (u32, u32)) -> ImageHandle {
        let _ = (text, style);
        self.insert_image(Extent::new(size.0, size.1))
    }

    fn image_size(&self, image: ImageHandle) -> Extent {
        self.images
            .get(image)
            .map(|stored| stored.size)
            .unwrap_or(Extent::empty())
    }

    fn load_sound(&mut self, name: &str) -> Result<SoundHandle, AssetError> {
        if let Some(dir) = &self.assets_dir {
            SoundData::from_file(dir.join(name))?;
        }
        Ok(self.sounds.insert(name.to_string()))
    }

    fn play_sound(&mut self, sound: SoundHandle) {
        if let Some(name) = self.sounds.get(sound) {
            self.played.push(name.clone());
        }
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        let events = match self.script.pop_front() {
            Some(batch) => batch,
            None if self.quit_when_drained && !self.quit_sent => {
                self.quit_sent = true;
                vec![InputEvent::Quit]
            }
            None => Vec::new(),
        };
        for event in &events {
            self.input.apply(event);
        }
        events
    }

    fn input(&self) -> &InputState {
        &self.input
    }

    fn clear(&mut self) {
        self.frame.clear();
    }

    fn blit(&mut self, image: ImageHandle, position: Vec2, rotation_deg: f32) {
        self.frame.push(BlitRecord {
            image,
            position,
            rotation_deg,
        });
    }

    fn present(&mut self) {
        self.presented.push(std::mem::take(&mut self.frame));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    #[test]
    fn test_preset_image_sizes() {
        let mut platform = HeadlessPlatform::new(Extent::new(640, 480))
            .with_image("ship.png", 48, 32);

        let ship = platform.load_image("ship.png").unwrap();
        assert_eq!(platform.image_size(ship), Extent::new(48, 32));

        let other = platform.load_image("anything-else.png").unwrap();
        assert_eq!(platform.image_size(other), Extent::new(32, 24));
    }

    #[test]
    fn test_sub_image_takes_requested_size() {
        let mut platform = HeadlessPlatform::new(Extent::new(640, 480))
            .with_image("sheet.png", 1024, 256);
        let sheet = platform.load_image("sheet.png").unwrap();
        let frame = platform.sub_image(sheet, (128, 0), (64, 64)).unwrap();
        assert_eq!(platform.image_size(frame), Extent::new(64, 64));
    }

    #[test]
    fn test_script_drains_then_quits() {
        let mut platform = HeadlessPlatform::new(Extent::new(640, 480)).quit_when_drained();
        platform.push_batch(vec![InputEvent::KeyDown(Key::W)]);

        assert_eq!(platform.poll_events(), vec![InputEvent::KeyDown(Key::W)]);
        assert!(platform.input().is_pressed(Key::W));

        assert_eq!(platform.poll_events(), vec![InputEvent::Quit]);
        // quit is sent exactly once
        assert!(platform.poll_events().is_empty());
    }

    #[test]
    fn test_draws_are_recorded_per_frame() {
        let mut platform = HeadlessPlatform::new(Extent::new(640, 480));
        let disc = platform.solid_image((4, 4), [0, 255, 255, 255]);

        platform.clear();
        platform.blit(disc, Vec2::new(10.0, 20.0), 0.0);
        platform.present();

        assert_eq!(platform.frames_presented(), 1);
        let frame = platform.last_frame().unwrap();
        assert_eq!(frame.len(), 1);
        assert_eq!(frame[0].position, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_sounds_are_recorded() {
        let mut platform = HeadlessPlatform::new(Extent::new(640, 480));
        let boom = platform.load_sound("explode.ogg").unwrap();
        platform.play_sound(boom);
        platform.play_sound(boom);
        assert_eq!(platform.played_sounds(), ["explode.ogg", "explode.ogg"]);
    }
}
