//! The moving-object abstraction
//!
//! A [`Sprite`] is a positioned, moving, drawable, collidable object. There
//! is a single sprite type; what used to be an inheritance chain is here a
//! set of independently attachable capabilities: kinematics, a boundary
//! policy, an anchor convention, and animation state machines owned by game
//! code. The per-tick update order is fixed: velocity derivation, position
//! update, boundary check — render state is only ever read afterwards.

pub mod animation;
pub mod bounds;
pub mod kinematics;

pub use bounds::BoundsPolicy;
pub use kinematics::Kinematics;

use crate::foundation::collections::ImageHandle;
use crate::foundation::math::{Extent, Rect, Vec2};

/// Which point of the bounding box `kinematics.position` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Position is the bottom-left corner of the box
    #[default]
    BottomLeft,
    /// Position is the center of the box
    Center,
}

/// A positioned, moving, drawable, collidable game object
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Motion state
    pub kinematics: Kinematics,
    /// Edge-of-screen behavior
    pub bounds: BoundsPolicy,
    /// Anchor convention for the bounding box
    pub anchor: Anchor,
    /// Image currently displayed
    pub image: ImageHandle,
    /// Size of the current image; the bounding box derives from it
    pub size: Extent,
    /// Whether the sprite is drawn
    pub visible: bool,
    /// Whether the stage advances this sprite automatically each tick.
    /// Sprites with scripted updates (driven by game code) set this false.
    pub auto_update: bool,
}

impl Sprite {
    /// Create a sprite showing `image` of the given size
    pub fn new(image: ImageHandle, size: Extent) -> Self {
        Self {
            kinematics: Kinematics::default(),
            bounds: BoundsPolicy::default(),
            anchor: Anchor::default(),
            image,
            size,
            visible: true,
            auto_update: true,
        }
    }

    /// Builder: set the boundary policy
    pub fn with_bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }

    /// Builder: set the anchor convention
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Builder: place the sprite
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.kinematics.set_position(x, y);
        self
    }

    /// Builder: mark the sprite as driven by game code
    pub fn scripted(mut self) -> Self {
        self.auto_update = false;
        self
    }

    /// Swap the displayed image; the bounding box follows the new size
    pub fn set_image(&mut self, image: ImageHandle, size: Extent) {
        self.image = image;
        self.size = size;
    }

    /// Current bounding box
    pub fn rect(&self) -> Rect {
        let pos = self.kinematics.position;
        match self.anchor {
            Anchor::BottomLeft => Rect::from_bottom_left(pos.x, pos.y, self.size),
            Anchor::Center => Rect::from_center(pos.x, pos.y, self.size),
        }
    }

    /// Top-left corner to draw the image at
    pub fn draw_position(&self) -> Vec2 {
        let rect = self.rect();
        Vec2::new(rect.left, rect.top)
    }

    /// Default per-tick advance: derive velocity from speed and direction,
    /// move, then resolve the boundary policy
    pub fn update(&mut self, viewport: Extent) {
        self.kinematics.calc_vector();
        self.kinematics.calc_position();
        let rect = self.rect();
        bounds::apply(self.bounds, &mut self.kinematics, rect, viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> ImageHandle {
        let mut arena: crate::foundation::collections::HandleMap<ImageHandle, ()> =
            crate::foundation::collections::HandleMap::with_key();
        arena.insert(())
    }

    #[test]
    fn test_update_order_moves_then_bounds() {
        let viewport = Extent::new(640, 480);
        let mut sprite = Sprite::new(handle(), Extent::new(20, 10))
            .with_bounds(BoundsPolicy::Wrap)
            .at(635.0, 100.0);
        sprite.kinematics.set_speed(10.0);
        sprite.kinematics.set_angle(0.0);

        sprite.update(viewport);

        // moved to 645, overflowed on the right, wrapped to 0 in the same tick
        assert_eq!(sprite.kinematics.position.x, 0.0);
    }

    #[test]
    fn test_anchor_conventions() {
        let sprite = Sprite::new(handle(), Extent::new(10, 10)).at(50.0, 50.0);
        let rect = sprite.rect();
        assert_eq!(rect.left, 50.0);
        assert_eq!(rect.bottom(), 50.0);

        let centered = Sprite::new(handle(), Extent::new(10, 10))
            .with_anchor(Anchor::Center)
            .at(50.0, 50.0);
        let rect = centered.rect();
        assert_eq!(rect.center(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_set_image_resizes_box() {
        let mut sprite = Sprite::new(handle(), Extent::new(10, 10));
        sprite.set_image(handle(), Extent::empty());
        assert_eq!(sprite.rect().width, 0.0);
    }
}
