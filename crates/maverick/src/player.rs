//! The player ship
//!
//! The player's render state machine has two live modes gated by one shared
//! animation counter: the normal mode (static image, or invincibility
//! flicker after a respawn) and the explosion mode entered when a life is
//! lost. Finishing the explosion either respawns the ship at its initial
//! position with invincibility running, or — when no lives remain — freezes
//! it as an empty image for good.

use crate::assets::GameAssets;
use sprite_engine::prelude::*;
use sprite_engine::sprite::bounds;

/// Initial x position of the ship
pub const INITIAL_X: f32 = 50.0;

/// A live player ship
pub struct Player {
    key: SpriteKey,
    initial: Vec2,
    anim: FrameTicker,
    flicker: Flicker,
    frame: usize,
    /// False while the explosion sequence is running ("swapping" the normal
    /// image). Input and collision checks are disabled while false.
    pub swapping: bool,
    /// Set when the terminal explosion has finished; the state machine stops
    pub stop_animation: bool,
    /// Set by the session when the last life is lost
    pub lost_game: bool,
}

impl Player {
    /// Create the player at its spawn point, vertically centered
    pub fn new(
        stage: &mut Stage,
        assets: &GameAssets,
        viewport: Extent,
        animation_delay: u32,
    ) -> Self {
        let initial = Vec2::new(INITIAL_X, viewport.height as f32 / 2.0);
        let sprite = Sprite::new(assets.player_image, assets.player_size)
            .with_bounds(BoundsPolicy::Continue)
            .at(initial.x, initial.y)
            .scripted();
        let key = stage.insert(sprite);

        Self {
            key,
            initial,
            anim: FrameTicker::new(animation_delay),
            flicker: Flicker::new(animation_delay),
            frame: 0,
            swapping: true,
            stop_animation: false,
            lost_game: false,
        }
    }

    /// Key of the backing sprite
    pub fn key(&self) -> SpriteKey {
        self.key
    }

    /// Whether the post-respawn invincibility window is running
    pub fn invincible(&self) -> bool {
        self.flicker.active
    }

    /// Begin the death sequence; the explosion starts on the next tick
    pub fn begin_death(&mut self) {
        self.swapping = false;
        self.frame = 0;
        self.anim.reset();
    }

    /// Per-tick update: render-state machine, then the default kinematics
    /// and boundary sequence
    pub fn update(&mut self, stage: &mut Stage, assets: &GameAssets, viewport: Extent) {
        self.anim.advance();

        let Some(sprite) = stage.get_mut(self.key) else {
            return;
        };

        if self.anim.ready() && self.swapping {
            if !self.flicker.active {
                sprite.set_image(assets.player_image, assets.player_size);
            } else {
                match self.flicker.tick() {
                    FlickerFrame::Hidden => sprite.set_image(assets.empty_image, Extent::empty()),
                    FlickerFrame::Visible => {
                        sprite.set_image(assets.player_image, assets.player_size)
                    }
                }
            }
        } else if self.anim.ready() && !self.stop_animation {
            // exploding: hold position while the frames play out
            sprite.kinematics.set_dx(0.0);
            sprite.kinematics.set_dy(0.0);

            sprite.set_image(assets.explosion_frames[self.frame], assets.explosion_size);
            self.anim.reset();
            self.frame += 1;

            if self.frame >= assets.explosion_frames.len() {
                if self.lost_game {
                    self.stop_animation = true;
                    sprite.set_image(assets.empty_image, Extent::empty());
                } else {
                    self.swapping = true;
                    self.flicker.start();
                    sprite
                        .kinematics
                        .set_position(self.initial.x, self.initial.y);
                }
            }
        }

        sprite.kinematics.calc_vector();
        sprite.kinematics.calc_position();
        let rect = sprite.rect();
        bounds::apply(sprite.bounds, &mut sprite.kinematics, rect, viewport);
    }
}
