//! Game asset definitions
//!
//! Central table of named assets and the sheet offsets used to strip enemy
//! and explosion frames. Everything is loaded once at session start; a
//! missing or corrupt asset fails construction.

use sprite_engine::prelude::*;

/// Player ship image
pub const PLAYER_IMAGE: &str = "maverick.png";
/// Sheet holding both enemy ship frames
pub const ENEMY_SHEET: &str = "enemy_sheet.png";
/// Sheet holding the explosion sequence
pub const EXPLOSION_SHEET: &str = "explosion_sheet.png";
/// Explosion sound cue
pub const EXPLODE_SOUND: &str = "explode.ogg";

/// Sheet offsets of the two enemy frames, indexed by kind
pub const ENEMY_FRAME_OFFSETS: [(u32, u32); 2] = [(275, 300), (200, 75)];
/// Size of one enemy frame on the sheet
pub const ENEMY_FRAME_SIZE: (u32, u32) = (85, 50);

/// Number of frames in the explosion sequence
pub const EXPLOSION_FRAME_COUNT: usize = 16;
/// Size of one explosion frame on the sheet
pub const EXPLOSION_FRAME_SIZE: (u32, u32) = (64, 64);
/// Row of the sheet the explosion frames are stripped from
pub const EXPLOSION_SHEET_ROW: u32 = 128;

/// All images and sounds a game session needs, loaded up front
pub struct GameAssets {
    /// Player ship image
    pub player_image: ImageHandle,
    /// Player ship size
    pub player_size: Extent,
    /// One frame per enemy kind
    pub enemy_frames: [ImageHandle; 2],
    /// Enemy frame size
    pub enemy_size: Extent,
    /// Explosion sequence, in display order
    pub explosion_frames: Vec<ImageHandle>,
    /// Explosion frame size
    pub explosion_size: Extent,
    /// Zero-size image shown by hidden or spent sprites
    pub empty_image: ImageHandle,
    /// Explosion cue, shared by enemy kills and player deaths
    pub explode_sound: SoundHandle,
}

impl GameAssets {
    /// Load every session asset through the platform
    pub fn load(platform: &mut dyn Platform) -> Result<Self, AssetError> {
        let player_image = platform.load_image(PLAYER_IMAGE)?;
        let player_size = platform.image_size(player_image);

        let enemy_sheet = platform.load_image(ENEMY_SHEET)?;
        let enemy_frames = [
            platform.sub_image(enemy_sheet, ENEMY_FRAME_OFFSETS[0], ENEMY_FRAME_SIZE)?,
            platform.sub_image(enemy_sheet, ENEMY_FRAME_OFFSETS[1], ENEMY_FRAME_SIZE)?,
        ];

        let explosion_sheet = platform.load_image(EXPLOSION_SHEET)?;
        let mut explosion_frames = Vec::with_capacity(EXPLOSION_FRAME_COUNT);
        for i in 0..EXPLOSION_FRAME_COUNT {
            let offset = (i as u32 * EXPLOSION_FRAME_SIZE.0, EXPLOSION_SHEET_ROW);
            explosion_frames.push(platform.sub_image(
                explosion_sheet,
                offset,
                EXPLOSION_FRAME_SIZE,
            )?);
        }

        let empty_image = platform.solid_image((0, 0), [0, 0, 0, 0]);
        let explode_sound = platform.load_sound(EXPLODE_SOUND)?;

        log::info!(
            "loaded session assets: player {}x{}, {} explosion frames",
            player_size.width,
            player_size.height,
            explosion_frames.len()
        );

        Ok(Self {
            player_image,
            player_size,
            enemy_frames,
            enemy_size: ENEMY_FRAME_SIZE.into(),
            explosion_frames,
            explosion_size: EXPLOSION_FRAME_SIZE.into(),
            empty_image,
            explode_sound,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprite_engine::platform::headless::HeadlessPlatform;

    #[test]
    fn test_load_strips_all_frames() {
        let mut platform = HeadlessPlatform::new(Extent::new(640, 480));
        let assets = GameAssets::load(&mut platform).unwrap();

        assert_eq!(assets.explosion_frames.len(), EXPLOSION_FRAME_COUNT);
        assert_eq!(assets.enemy_size, Extent::new(85, 50));
        assert_eq!(
            platform.image_size(assets.explosion_frames[0]),
            Extent::new(64, 64)
        );
        assert!(platform.image_size(assets.empty_image).is_empty());
    }
}
