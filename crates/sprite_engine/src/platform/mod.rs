//! Platform abstraction
//!
//! The engine core never talks to a window, GPU, or audio device directly.
//! Everything it needs from the outside world goes through the [`Platform`]
//! trait: load an image or sound by name, cut frames out of a sheet, render
//! text, poll input, and draw. A windowed backend implements this trait out
//! of tree; [`headless::HeadlessPlatform`] is the in-tree backend used by
//! tests and bounded smoke runs.
//!
//! The platform object is constructed explicitly at startup and passed to
//! the scene director; there is no process-global subsystem state.

pub mod headless;

use crate::assets::AssetError;
use crate::foundation::collections::{ImageHandle, SoundHandle};
use crate::foundation::math::{Extent, Vec2};
use crate::input::{InputEvent, InputState};

/// Text rendering parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_px: u32,
    /// Foreground (glyph) color, RGBA
    pub fg: [u8; 4],
    /// Background fill color, RGBA
    pub bg: [u8; 4],
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_px: 20,
            fg: [0x00, 0x00, 0x00, 0xFF],
            bg: [0xFF, 0xFF, 0xFF, 0xFF],
        }
    }
}

/// The narrow boundary between the simulation core and the outside world
pub trait Platform {
    /// Viewport size in pixels
    fn viewport(&self) -> Extent;

    /// Load a named image; missing or corrupt assets are fatal at load time
    fn load_image(&mut self, name: &str) -> Result<ImageHandle, AssetError>;

    /// Cut a sub-rectangle out of a loaded sheet as a new image
    fn sub_image(
        &mut self,
        source: ImageHandle,
        offset: (u32, u32),
        size: (u32, u32),
    ) -> Result<ImageHandle, AssetError>;

    /// Create a solid-color image of the given size
    fn solid_image(&mut self, size: (u32, u32), color: [u8; 4]) -> ImageHandle;

    /// Render text centered in a surface of exactly `size`
    fn render_text(&mut self, text: &str, style: &TextStyle, size: (u32, u32)) -> ImageHandle;

    /// Size of a previously created image; zero extent for dead handles
    fn image_size(&self, image: ImageHandle) -> Extent;

    /// Load a named sound; missing or corrupt assets are fatal at load time
    fn load_sound(&mut self, name: &str) -> Result<SoundHandle, AssetError>;

    /// Fire-and-forget playback of a loaded sound
    fn play_sound(&mut self, sound: SoundHandle);

    /// Drain this tick's ordered input events, folding them into the
    /// continuous input state as they are returned
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Continuous input state (pressed keys, mouse position and buttons)
    fn input(&self) -> &InputState;

    /// Clear the frame to the background
    fn clear(&mut self);

    /// Draw an image with its top-left corner at `position`, rotated by
    /// `rotation_deg` degrees counter-clockwise about its center
    fn blit(&mut self, image: ImageHandle, position: Vec2, rotation_deg: f32);

    /// Present the completed frame
    fn present(&mut self);
}
