//! Enemies
//!
//! Enemies spawn at the right edge and march left under the Continue policy,
//! jittering vertically at random intervals. A `stop` flag freezes movement
//! independently of the explosion sequence: a stopped enemy can still finish
//! exploding. When the sequence completes, the `remove` flag hands the enemy
//! to the session's dead-sweep pass for eviction.

use crate::assets::GameAssets;
use rand::rngs::StdRng;
use rand::Rng;
use sprite_engine::prelude::*;

/// Vertical jitter speed in pixels per tick
const JITTER_SPEED: f32 = 2.0;

/// Enemy kinds, each with its own speed, fire rate, and score tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    /// Slower ship with a lazy trigger
    Scout,
    /// Faster ship that fires nearly twice as often and is worth more
    Raider,
}

impl EnemyKind {
    /// Leftward travel speed in pixels per tick
    pub fn speed(self) -> f32 {
        match self {
            EnemyKind::Scout => -6.0,
            EnemyKind::Raider => -8.0,
        }
    }

    /// Ticks between shots
    pub fn fire_rate(self) -> u32 {
        match self {
            EnemyKind::Scout => 45,
            EnemyKind::Raider => 25,
        }
    }

    /// Points awarded when destroyed
    pub fn score(self) -> u32 {
        match self {
            EnemyKind::Scout => 50,
            EnemyKind::Raider => 75,
        }
    }

    /// Index of this kind's frame on the enemy sheet
    pub fn frame_index(self) -> usize {
        match self {
            EnemyKind::Scout => 0,
            EnemyKind::Raider => 1,
        }
    }

    /// Pick a kind uniformly at random
    pub fn roll(rng: &mut StdRng) -> Self {
        if rng.gen_range(0..2) == 0 {
            EnemyKind::Scout
        } else {
            EnemyKind::Raider
        }
    }
}

/// A live enemy ship
pub struct Enemy {
    key: SpriteKey,
    /// This enemy's kind
    pub kind: EnemyKind,
    /// Freeze all movement (explosions still run)
    pub stop: bool,
    /// Whether the explosion sequence is running
    pub exploding: bool,
    /// Set once the explosion finishes; consumed by the dead-sweep pass
    pub remove: bool,
    fire_pause: u32,
    move_pause: u32,
    move_rate: u32,
    explosion: Explosion,
}

impl Enemy {
    /// Spawn an enemy of `kind` just past the right edge at a random height
    pub fn spawn(
        stage: &mut Stage,
        assets: &GameAssets,
        viewport: Extent,
        kind: EnemyKind,
        animation_delay: u32,
        rng: &mut StdRng,
    ) -> Self {
        let width = assets.enemy_size.width as f32;
        let height = assets.enemy_size.height;
        let x = viewport.width as f32 + width;
        let y = rng.gen_range(height..viewport.height - height) as f32;

        let mut sprite = Sprite::new(assets.enemy_frames[kind.frame_index()], assets.enemy_size)
            .with_anchor(Anchor::Center)
            .with_bounds(BoundsPolicy::Continue)
            .at(x, y)
            .scripted();
        sprite.kinematics.set_dx(kind.speed());

        let key = stage.insert(sprite);
        log::debug!("spawned {:?} at ({}, {})", kind, x, y);

        Self {
            key,
            kind,
            stop: false,
            exploding: false,
            remove: false,
            fire_pause: 0,
            move_pause: 0,
            // forces a jitter decision on the first tick
            move_rate: 1,
            explosion: Explosion::new(animation_delay, assets.explosion_frames.len()),
        }
    }

    /// Key of the backing sprite
    pub fn key(&self) -> SpriteKey {
        self.key
    }

    /// Per-tick update: movement, fire timer, jitter, explosion
    pub fn update(&mut self, stage: &mut Stage, assets: &GameAssets, rng: &mut StdRng) {
        self.fire_pause += 1;
        self.move_pause += 1;

        let Some(sprite) = stage.get_mut(self.key) else {
            return;
        };

        if !self.stop {
            let velocity = sprite.kinematics.velocity;
            sprite.kinematics.move_by(velocity);

            if self.fire_pause > self.kind.fire_rate() {
                self.fire_pause = 0;
            }

            if self.move_pause == self.move_rate {
                match rng.gen_range(0..3) {
                    0 => sprite.kinematics.set_dy(-JITTER_SPEED),
                    1 => sprite.kinematics.set_dy(JITTER_SPEED),
                    _ => sprite.kinematics.set_dy(0.0),
                }
                self.move_rate = rng.gen_range(20..30);
                self.move_pause = 0;
            }
        }

        if self.exploding {
            if let Some(frame) = self.explosion.step() {
                sprite.set_image(assets.explosion_frames[frame], assets.explosion_size);
                sprite.kinematics.set_dx(0.0);
                sprite.kinematics.set_dy(0.0);

                if self.explosion.finished() {
                    sprite.set_image(assets.empty_image, Extent::empty());
                    self.remove = true;
                    self.exploding = false;
                }
            }
        }
    }

    /// Whether the fire timer is exactly at the threshold this tick
    pub fn wants_to_fire(&self) -> bool {
        self.fire_pause == self.kind.fire_rate()
    }

    /// Begin the explosion sequence
    pub fn start_exploding(&mut self) {
        self.exploding = true;
        self.explosion.restart();
    }

    /// Muzzle position for a new bullet: the enemy's left edge, vertically
    /// centered
    pub fn fire_position(&self, stage: &Stage) -> Option<(f32, f32)> {
        stage.get(self.key).map(|sprite| {
            let rect = sprite.rect();
            (rect.left, rect.center_y())
        })
    }

    /// Whether the enemy has fully left the stage to the left
    pub fn out_of_bounds(&self, stage: &Stage) -> bool {
        match stage.get(self.key) {
            Some(sprite) => {
                sprite.kinematics.position.x + sprite.size.width as f32 <= 0.0
            }
            None => true,
        }
    }
}
