//! Game configuration
//!
//! Gameplay tuning loaded from RON, with defaults matching the shipped
//! balance. The difficulty value itself is not configured here; it is chosen
//! in the settings scene and carried in memory across menu transitions.

use serde::{Deserialize, Serialize};
use sprite_engine::core::config::ConfigError;
use std::path::Path;

/// Top-level game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    /// Gameplay tuning
    pub gameplay: GameplayConfig,
}

/// Gameplay tuning values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameplayConfig {
    /// Lives at session start
    pub starting_lives: u32,

    /// Horizontal speed applied while A/D is held, pixels per tick
    pub player_horizontal_speed: f32,

    /// Vertical speed applied while W/S is held, pixels per tick
    pub player_vertical_speed: f32,

    /// Player bullet speed, pixels per tick rightward
    pub player_bullet_speed: f32,

    /// Enemy bullet speed, pixels per tick leftward
    pub enemy_bullet_speed: f32,

    /// Ticks before the first enemy spawns
    pub initial_spawn_delay: u64,

    /// Numerator of the spawn-interval curve: interval ≈ n / (difficulty + 1)
    pub spawn_curve_numerator: f32,

    /// Half-width of the randomized band around the spawn interval, in ticks
    pub spawn_interval_band: i64,

    /// Amount difficulty grows per period
    pub difficulty_increment: f32,

    /// Ticks between difficulty increments
    pub difficulty_period: u64,

    /// Animation gate in ticks for flicker and explosion sequences
    pub animation_delay: u32,

    /// Seed for the session RNG; `None` seeds from entropy
    pub rng_seed: Option<u64>,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            starting_lives: 5,
            player_horizontal_speed: 5.0,
            player_vertical_speed: 4.0,
            player_bullet_speed: 8.0,
            enemy_bullet_speed: 9.0,
            initial_spawn_delay: 15,
            spawn_curve_numerator: 37.0,
            spawn_interval_band: 5,
            difficulty_increment: 0.0625,
            difficulty_period: 250,
            animation_delay: 3,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a RON file, falling back to defaults when the
    /// file does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no game config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Ok(ron::from_str(&text)?)
    }
}
