//! # sprite_engine
//!
//! A small fixed-tick 2D sprite engine. The simulation core — kinematics,
//! boundary policies, animation state machines, the sprite arena, and the
//! scene loop — is self-contained and single-threaded; everything that
//! touches a window, GPU, audio device, or input queue goes through the
//! [`platform::Platform`] trait. A headless backend ships in-tree for tests
//! and bounded runs.
//!
//! ## Quick start
//!
//! ```no_run
//! use sprite_engine::prelude::*;
//! use sprite_engine::platform::headless::HeadlessPlatform;
//!
//! struct Demo {
//!     stage: Stage,
//!     ticks: u32,
//! }
//!
//! impl Scene for Demo {
//!     fn handle_event(&mut self, _event: &InputEvent, _platform: &mut dyn Platform) {}
//!     fn update(&mut self, _platform: &mut dyn Platform) {
//!         self.ticks += 1;
//!     }
//!     fn stage(&self) -> &Stage {
//!         &self.stage
//!     }
//!     fn stage_mut(&mut self) -> &mut Stage {
//!         &mut self.stage
//!     }
//!     fn finished(&self) -> bool {
//!         self.ticks >= 300
//!     }
//! }
//!
//! let config = EngineConfig::default();
//! let mut platform = HeadlessPlatform::new(config.window.extent());
//! let mut demo = Demo { stage: Stage::new(), ticks: 0 };
//! SceneDirector::new(config.tick_rate).run(&mut demo, &mut platform);
//! ```

pub mod assets;
pub mod core;
pub mod foundation;
pub mod input;
pub mod platform;
pub mod scene;
pub mod sprite;
pub mod stage;
pub mod ui;

/// Common imports for engine users
pub mod prelude {
    pub use crate::assets::AssetError;
    pub use crate::core::config::{ConfigError, EngineConfig};
    pub use crate::foundation::collections::{ImageHandle, SoundHandle, SpriteKey};
    pub use crate::foundation::math::{Extent, Rect, Vec2};
    pub use crate::input::{InputEvent, InputState, Key, MouseButton};
    pub use crate::platform::{Platform, TextStyle};
    pub use crate::scene::{Scene, SceneDirector, SceneOutcome};
    pub use crate::sprite::animation::{Explosion, Flicker, FlickerFrame, FrameTicker};
    pub use crate::sprite::{Anchor, BoundsPolicy, Kinematics, Sprite};
    pub use crate::stage::{Group, GroupId, Stage};
    pub use crate::ui::{Button, Label, MultiLabel, Scroller};
}
