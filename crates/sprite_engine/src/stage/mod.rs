//! Stage: the live-sprite arena and draw groups
//!
//! Sprites live in a slot-map arena addressed by stable [`SpriteKey`]s;
//! insert and remove are O(1) and a removed key can never alias a newer
//! sprite. Draw order comes from [`Group`]s: ordered key lists advanced and
//! drawn in insertion order. Groups drop dead keys during the per-frame
//! sweep, so stale membership is never advanced, drawn, or collided against.

use crate::foundation::collections::{HandleMap, SpriteKey};
use crate::foundation::math::Extent;
use crate::sprite::Sprite;

/// Index of a draw group within a stage
pub type GroupId = usize;

/// An ordered set of sprites advanced and drawn together
#[derive(Debug, Default)]
pub struct Group {
    keys: Vec<SpriteKey>,
}

impl Group {
    /// Keys currently in the group, in draw order
    pub fn keys(&self) -> &[SpriteKey] {
        &self.keys
    }
}

/// Arena of live sprites plus ordered draw groups
pub struct Stage {
    sprites: HandleMap<SpriteKey, Sprite>,
    groups: Vec<Group>,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage {
    /// Create a stage with a single default group
    pub fn new() -> Self {
        Self {
            sprites: HandleMap::with_key(),
            groups: vec![Group::default()],
        }
    }

    /// Append a new, empty group drawn after the existing ones
    pub fn add_group(&mut self) -> GroupId {
        self.groups.push(Group::default());
        self.groups.len() - 1
    }

    /// Insert a sprite into the default group
    pub fn insert(&mut self, sprite: Sprite) -> SpriteKey {
        self.insert_in(0, sprite)
    }

    /// Insert a sprite at the end of the given group's draw order
    pub fn insert_in(&mut self, group: GroupId, sprite: Sprite) -> SpriteKey {
        let key = self.sprites.insert(sprite);
        self.groups[group].keys.push(key);
        key
    }

    /// Remove a sprite from the arena. Its key disappears from all groups at
    /// the next sweep.
    pub fn remove(&mut self, key: SpriteKey) -> Option<Sprite> {
        self.sprites.remove(key)
    }

    /// Whether the key still refers to a live sprite
    pub fn contains(&self, key: SpriteKey) -> bool {
        self.sprites.contains_key(key)
    }

    /// Borrow a sprite
    pub fn get(&self, key: SpriteKey) -> Option<&Sprite> {
        self.sprites.get(key)
    }

    /// Mutably borrow a sprite
    pub fn get_mut(&mut self, key: SpriteKey) -> Option<&mut Sprite> {
        self.sprites.get_mut(key)
    }

    /// Number of live sprites
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Whether the arena is empty
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Advance every auto-updating sprite through the default update order
    pub fn advance(&mut self, viewport: Extent) {
        for (_, sprite) in self.sprites.iter_mut() {
            if sprite.auto_update {
                sprite.update(viewport);
            }
        }
    }

    /// Drop keys of removed sprites from every group, preserving the
    /// relative order of the survivors
    pub fn sweep(&mut self) {
        let sprites = &self.sprites;
        for group in &mut self.groups {
            group.keys.retain(|key| sprites.contains_key(*key));
        }
    }

    /// Group membership in draw order (call [`Stage::sweep`] first)
    pub fn group(&self, group: GroupId) -> &Group {
        &self.groups[group]
    }

    /// Iterate live sprites in draw order across all groups
    pub fn draw_order(&self) -> impl Iterator<Item = &Sprite> + '_ {
        self.groups
            .iter()
            .flat_map(|group| group.keys.iter())
            .filter_map(|key| self.sprites.get(*key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::collections::ImageHandle;
    use crate::sprite::BoundsPolicy;

    fn sprite(size: Extent) -> Sprite {
        let mut arena: HandleMap<ImageHandle, ()> = HandleMap::with_key();
        Sprite::new(arena.insert(()), size)
    }

    #[test]
    fn test_insert_and_draw_order() {
        let mut stage = Stage::new();
        let first = stage.insert(sprite(Extent::new(1, 1)).at(1.0, 0.0));
        let second = stage.insert(sprite(Extent::new(1, 1)).at(2.0, 0.0));

        let order: Vec<f32> = stage
            .draw_order()
            .map(|s| s.kinematics.position.x)
            .collect();
        assert_eq!(order, [1.0, 2.0]);
        assert!(stage.contains(first));
        assert!(stage.contains(second));
    }

    #[test]
    fn test_removed_sprite_leaves_draw_order() {
        let mut stage = Stage::new();
        let first = stage.insert(sprite(Extent::new(1, 1)).at(1.0, 0.0));
        stage.insert(sprite(Extent::new(1, 1)).at(2.0, 0.0));

        stage.remove(first);
        stage.sweep();

        let order: Vec<f32> = stage
            .draw_order()
            .map(|s| s.kinematics.position.x)
            .collect();
        assert_eq!(order, [2.0]);
        assert_eq!(stage.group(0).keys().len(), 1);
    }

    #[test]
    fn test_wrap_keeps_group_membership() {
        let viewport = Extent::new(640, 480);
        let mut stage = Stage::new();
        let key = stage.insert(
            sprite(Extent::new(20, 10))
                .with_bounds(BoundsPolicy::Wrap)
                .at(700.0, 100.0),
        );

        stage.advance(viewport);
        stage.sweep();

        assert!(stage.contains(key));
        assert_eq!(stage.get(key).unwrap().kinematics.position.x, 0.0);
        assert_eq!(stage.group(0).keys().len(), 1);
    }

    #[test]
    fn test_scripted_sprites_are_not_auto_advanced() {
        let viewport = Extent::new(640, 480);
        let mut stage = Stage::new();
        let mut scripted = sprite(Extent::new(1, 1)).scripted().at(10.0, 10.0);
        scripted.kinematics.set_speed(5.0);
        let key = stage.insert(scripted);

        stage.advance(viewport);

        assert_eq!(stage.get(key).unwrap().kinematics.position.x, 10.0);
    }

    #[test]
    fn test_multiple_groups_draw_in_order() {
        let mut stage = Stage::new();
        let hud = stage.add_group();
        stage.insert_in(hud, sprite(Extent::new(1, 1)).at(9.0, 0.0));
        stage.insert(sprite(Extent::new(1, 1)).at(1.0, 0.0));

        let order: Vec<f32> = stage
            .draw_order()
            .map(|s| s.kinematics.position.x)
            .collect();
        // group 0 draws before the hud group regardless of insertion time
        assert_eq!(order, [1.0, 9.0]);
    }
}
