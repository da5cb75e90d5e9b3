//! Specialized collection types
//!
//! Sprites, images, and sounds are kept in slot-map arenas and referenced by
//! generational keys, so a stale handle can never resolve to a recycled slot.

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a sprite in a [`crate::stage::Stage`] arena
    pub struct SpriteKey;

    /// Stable handle to an image owned by the platform layer
    pub struct ImageHandle;

    /// Stable handle to a loaded sound owned by the platform layer
    pub struct SoundHandle;
}

/// Handle-based map using a slot map for stable references
pub type HandleMap<K, V> = SlotMap<K, V>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_key_does_not_resolve() {
        let mut map: HandleMap<SpriteKey, u32> = HandleMap::with_key();
        let key = map.insert(7);
        assert_eq!(map.remove(key), Some(7));

        let replacement = map.insert(9);
        assert!(map.get(key).is_none());
        assert_eq!(map.get(replacement), Some(&9));
    }
}
