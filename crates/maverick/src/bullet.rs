//! Bullets
//!
//! The one projectile type, fired by both sides; only color and travel
//! direction differ. Bullets fly under the Continue policy and are evicted
//! by the session's out-of-bounds pass rather than by any edge behavior.

use sprite_engine::prelude::*;

/// Bullet footprint in pixels
pub const BULLET_SIZE: (u32, u32) = (4, 4);

const PLAYER_BULLET_COLOR: [u8; 4] = [0, 255, 255, 255];
const ENEMY_BULLET_COLOR: [u8; 4] = [255, 0, 0, 255];

/// Who fired a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletOwner {
    /// Fired by the player, travels right
    Player,
    /// Fired by an enemy, travels left
    Enemy,
}

/// A live projectile
pub struct Bullet {
    key: SpriteKey,
    /// Which side fired it
    pub owner: BulletOwner,
}

impl Bullet {
    /// Spawn a bullet at `(x, y)` moving at `speed` pixels per tick in the
    /// owner's travel direction
    pub fn spawn(
        stage: &mut Stage,
        platform: &mut dyn Platform,
        x: f32,
        y: f32,
        owner: BulletOwner,
        speed: f32,
    ) -> Self {
        let color = match owner {
            BulletOwner::Player => PLAYER_BULLET_COLOR,
            BulletOwner::Enemy => ENEMY_BULLET_COLOR,
        };
        let image = platform.solid_image(BULLET_SIZE, color);

        let mut sprite = Sprite::new(image, BULLET_SIZE.into())
            .with_bounds(BoundsPolicy::Continue)
            .at(x, y);
        let dx = match owner {
            BulletOwner::Player => speed,
            BulletOwner::Enemy => -speed,
        };
        sprite.kinematics.set_dx(dx);

        let key = stage.insert(sprite);
        Self { key, owner }
    }

    /// Key of the backing sprite
    pub fn key(&self) -> SpriteKey {
        self.key
    }

    /// Whether the bullet has left the play field. The left cutoff is zero;
    /// the right cutoff compares x against the viewport height.
    pub fn out_of_bounds(&self, stage: &Stage, viewport: Extent) -> bool {
        match stage.get(self.key) {
            Some(sprite) => {
                let x = sprite.kinematics.position.x;
                x <= 0.0 || x >= viewport.height as f32
            }
            None => true,
        }
    }
}
