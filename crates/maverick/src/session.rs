//! The game session
//!
//! Owns every live entity and runs the per-frame collision and game-state
//! passes, in order: destroy, dead-sweep, enemy fire, lose-check,
//! out-of-bounds, spawn. Entities move between the session's lists by
//! ownership transfer — an enemy is in exactly one of `enemies` or `dead`
//! at any time, and eviction removes its sprite from the stage so the next
//! sweep drops it from the draw order.

use crate::assets::GameAssets;
use crate::bullet::{Bullet, BulletOwner};
use crate::config::{GameConfig, GameplayConfig};
use crate::enemy::{Enemy, EnemyKind};
use crate::player::Player;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sprite_engine::prelude::*;

/// HUD text colors: foreground, background
pub const HUD_STYLE: TextStyle = TextStyle {
    font_px: 20,
    fg: [205, 133, 63, 255],
    bg: [0, 0, 0, 255],
};

/// One playthrough from reset state to loss or exit
pub struct GameSession {
    stage: Stage,
    assets: GameAssets,
    config: GameplayConfig,
    player: Player,
    enemies: Vec<Enemy>,
    dead: Vec<Enemy>,
    enemy_bullets: Vec<Bullet>,
    player_bullets: Vec<Bullet>,
    hud: Label,
    score: u32,
    lives: u32,
    spawn_timer: u64,
    spawn_delay: u64,
    session_ticks: u64,
    difficulty: f32,
    lost: bool,
    exit: bool,
    rng: StdRng,
}

impl GameSession {
    /// Build a session, loading assets through the platform. `difficulty`
    /// is the starting value chosen in the settings scene.
    pub fn new(
        platform: &mut dyn Platform,
        config: &GameConfig,
        difficulty: f32,
    ) -> Result<Self, AssetError> {
        let gameplay = config.gameplay.clone();
        let viewport = platform.viewport();

        let mut stage = Stage::new();
        let assets = GameAssets::load(platform)?;
        let player = Player::new(&mut stage, &assets, viewport, gameplay.animation_delay);

        let hud_group = stage.add_group();
        let mut hud = Label::new(&mut stage, hud_group, platform, HUD_STYLE);
        hud.size = (250, 40);
        hud.center = Vec2::new(viewport.width as f32 / 2.0, viewport.height as f32 - 15.0);

        let rng = match gameplay.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        log::info!("session starting at difficulty {:.4}", difficulty);

        Ok(Self {
            stage,
            assets,
            player,
            enemies: Vec::new(),
            dead: Vec::new(),
            enemy_bullets: Vec::new(),
            player_bullets: Vec::new(),
            hud,
            score: 0,
            lives: gameplay.starting_lives,
            spawn_timer: 0,
            spawn_delay: gameplay.initial_spawn_delay,
            session_ticks: 0,
            difficulty,
            lost: false,
            exit: false,
            rng,
            config: gameplay,
        })
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Lives remaining
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Whether the session has been lost
    pub fn lost(&self) -> bool {
        self.lost
    }

    /// Current difficulty value
    pub fn difficulty(&self) -> f32 {
        self.difficulty
    }

    /// Live enemies (excludes those mid-explosion)
    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    /// Player bullets in flight
    pub fn player_bullet_count(&self) -> usize {
        self.player_bullets.len()
    }

    /// Enemy bullets in flight
    pub fn enemy_bullet_count(&self) -> usize {
        self.enemy_bullets.len()
    }

    fn rect_of(&self, key: SpriteKey) -> Option<Rect> {
        self.stage.get(key).map(Sprite::rect)
    }

    /// Destroy pass: player bullets against live enemies
    fn check_destroy(&mut self, platform: &mut dyn Platform) {
        let mut bullet_index = 0;
        while bullet_index < self.player_bullets.len() {
            let Some(bullet_rect) = self.rect_of(self.player_bullets[bullet_index].key()) else {
                bullet_index += 1;
                continue;
            };

            let hit = self.enemies.iter().position(|enemy| {
                !enemy.exploding
                    && self
                        .rect_of(enemy.key())
                        .is_some_and(|rect| bullet_rect.intersects(&rect))
            });

            match hit {
                Some(enemy_index) => {
                    let mut enemy = self.enemies.remove(enemy_index);
                    self.score += enemy.kind.score();

                    let bullet = self.player_bullets.remove(bullet_index);
                    self.stage.remove(bullet.key());

                    enemy.start_exploding();
                    platform.play_sound(self.assets.explode_sound);
                    log::debug!(
                        "destroyed {:?} (+{}), score {}",
                        enemy.kind,
                        enemy.kind.score(),
                        self.score
                    );
                    self.dead.push(enemy);
                }
                None => bullet_index += 1,
            }
        }
    }

    /// Dead-sweep pass: evict enemies whose explosion has finished
    fn check_dead_sweep(&mut self) {
        let stage = &mut self.stage;
        self.dead.retain(|enemy| {
            if enemy.remove {
                stage.remove(enemy.key());
                false
            } else {
                true
            }
        });
    }

    /// Enemy-fire pass: spawn bullets for enemies at their fire threshold
    fn check_enemy_fire(&mut self, platform: &mut dyn Platform) {
        let muzzles: Vec<(f32, f32)> = self
            .enemies
            .iter()
            .filter(|enemy| enemy.wants_to_fire())
            .filter_map(|enemy| enemy.fire_position(&self.stage))
            .collect();

        for (x, y) in muzzles {
            let bullet = Bullet::spawn(
                &mut self.stage,
                platform,
                x,
                y,
                BulletOwner::Enemy,
                self.config.enemy_bullet_speed,
            );
            self.enemy_bullets.push(bullet);
        }
    }

    /// Lose-check pass: the player against enemies and enemy bullets.
    /// Suppressed while the player is exploding or invincible.
    fn check_lose(&mut self, platform: &mut dyn Platform) {
        if !self.player.swapping || self.player.invincible() {
            return;
        }
        let Some(player_rect) = self.rect_of(self.player.key()) else {
            return;
        };

        let mut losses = 0;

        {
            let stage = &mut self.stage;
            self.enemies.retain(|enemy| {
                let overlap = stage
                    .get(enemy.key())
                    .is_some_and(|sprite| player_rect.intersects(&sprite.rect()));
                if overlap {
                    stage.remove(enemy.key());
                    losses += 1;
                }
                !overlap
            });
            self.enemy_bullets.retain(|bullet| {
                let overlap = stage
                    .get(bullet.key())
                    .is_some_and(|sprite| player_rect.intersects(&sprite.rect()));
                if overlap {
                    stage.remove(bullet.key());
                    losses += 1;
                }
                !overlap
            });
        }

        for _ in 0..losses {
            self.lose(platform);
        }
    }

    /// A life is lost: play the cue, start the death sequence, and end the
    /// session if no lives remain
    fn lose(&mut self, platform: &mut dyn Platform) {
        platform.play_sound(self.assets.explode_sound);

        self.lives = self.lives.saturating_sub(1);
        self.hud.text = format!("Lives: {}  Score: {}", self.lives, self.score);
        self.player.begin_death();

        log::info!("life lost, {} remaining", self.lives);

        if self.lives == 0 {
            self.player.lost_game = true;
            self.lost = true;
            self.stop_movement();
        }
    }

    /// Freeze every entity's motion at the end of the session
    fn stop_movement(&mut self) {
        if let Some(sprite) = self.stage.get_mut(self.player.key()) {
            sprite.kinematics.set_speed(0.0);
        }
        for enemy in &mut self.enemies {
            enemy.stop = true;
        }
        for bullet in self.player_bullets.iter().chain(self.enemy_bullets.iter()) {
            if let Some(sprite) = self.stage.get_mut(bullet.key()) {
                sprite.kinematics.set_speed(0.0);
            }
        }
        self.player.begin_death();
    }

    /// Out-of-bounds pass: evict Continue-policy entities that left the
    /// field, then hard-clamp the player onto the screen
    fn check_out_of_bounds(&mut self, platform: &mut dyn Platform) {
        let viewport = platform.viewport();

        {
            let stage = &mut self.stage;
            self.enemies.retain(|enemy| {
                if enemy.out_of_bounds(stage) {
                    stage.remove(enemy.key());
                    false
                } else {
                    true
                }
            });
            self.player_bullets.retain(|bullet| {
                if bullet.out_of_bounds(stage, viewport) {
                    stage.remove(bullet.key());
                    false
                } else {
                    true
                }
            });
            self.enemy_bullets.retain(|bullet| {
                if bullet.out_of_bounds(stage, viewport) {
                    stage.remove(bullet.key());
                    false
                } else {
                    true
                }
            });
        }

        // the player never leaves the screen, regardless of boundary policy
        if let Some(sprite) = self.stage.get_mut(self.player.key()) {
            let width = viewport.width as f32;
            let height = viewport.height as f32;
            let w = sprite.size.width as f32;
            let h = sprite.size.height as f32;
            let position = &mut sprite.kinematics.position;

            if position.x <= 0.0 {
                position.x = 0.0;
            }
            if position.x >= width - w {
                position.x = width - w;
            }
            if position.y <= h {
                position.y = h;
            }
            if position.y >= height {
                position.y = height;
            }
        }
    }

    /// Spawn pass: time-driven enemy generation plus the difficulty ramp
    fn check_spawn(&mut self, platform: &mut dyn Platform) {
        if self.spawn_timer % self.spawn_delay == 0 {
            self.spawn_timer = 0;
            self.generate_enemy(platform);

            let curve = (self.config.spawn_curve_numerator / (self.difficulty + 1.0)) as i64;
            let band = self.config.spawn_interval_band;
            let low = (curve - band).max(1);
            let high = (curve + band).max(low + 1);
            self.spawn_delay = self.rng.gen_range(low..high) as u64;
            log::debug!("next spawn in {} ticks", self.spawn_delay);
        }

        if self.session_ticks % self.config.difficulty_period == 0 {
            self.difficulty += self.config.difficulty_increment;
            log::debug!("difficulty now {:.4}", self.difficulty);
        }
    }

    fn generate_enemy(&mut self, platform: &mut dyn Platform) {
        let kind = EnemyKind::roll(&mut self.rng);
        let enemy = Enemy::spawn(
            &mut self.stage,
            &self.assets,
            platform.viewport(),
            kind,
            self.config.animation_delay,
            &mut self.rng,
        );
        self.enemies.push(enemy);
    }

    /// Fire a player bullet from just ahead of the ship's center
    fn fire(&mut self, platform: &mut dyn Platform) {
        let Some(rect) = self.rect_of(self.player.key()) else {
            return;
        };
        let bullet = Bullet::spawn(
            &mut self.stage,
            platform,
            rect.center_x() + 10.0,
            rect.center_y() + 10.0,
            BulletOwner::Player,
            self.config.player_bullet_speed,
        );
        self.player_bullets.push(bullet);
    }

    fn set_player_dx(&mut self, dx: f32) {
        if let Some(sprite) = self.stage.get_mut(self.player.key()) {
            sprite.kinematics.set_dx(dx);
        }
    }

    fn set_player_dy(&mut self, dy: f32) {
        if let Some(sprite) = self.stage.get_mut(self.player.key()) {
            sprite.kinematics.set_dy(dy);
        }
    }
}

impl Scene for GameSession {
    fn handle_event(&mut self, event: &InputEvent, platform: &mut dyn Platform) {
        match *event {
            InputEvent::KeyDown(key) if self.player.swapping => match key {
                Key::W => self.set_player_dy(-self.config.player_vertical_speed),
                Key::S => self.set_player_dy(self.config.player_vertical_speed),
                Key::A => self.set_player_dx(-self.config.player_horizontal_speed),
                Key::D => self.set_player_dx(self.config.player_horizontal_speed),
                _ => {}
            },
            InputEvent::KeyUp(key) => match key {
                Key::Space if self.player.swapping => self.fire(platform),
                Key::Escape => self.exit = true,
                Key::W | Key::S => self.set_player_dy(0.0),
                Key::A | Key::D => self.set_player_dx(0.0),
                _ => {}
            },
            _ => {}
        }
    }

    fn advance(&mut self, platform: &mut dyn Platform) {
        let viewport = platform.viewport();
        self.player.update(&mut self.stage, &self.assets, viewport);
        for enemy in self.enemies.iter_mut().chain(self.dead.iter_mut()) {
            enemy.update(&mut self.stage, &self.assets, &mut self.rng);
        }
        // bullets and other auto sprites
        self.stage.advance(viewport);
    }

    fn update(&mut self, platform: &mut dyn Platform) {
        if !self.lost {
            self.hud.text = format!("Lives: {}  Score: {}", self.lives, self.score);

            self.session_ticks += 1;
            self.spawn_timer += 1;

            self.check_destroy(platform);
            self.check_dead_sweep();
            self.check_enemy_fire(platform);
            self.check_lose(platform);
            self.check_out_of_bounds(platform);
            self.check_spawn(platform);
        }

        self.hud.sync(&mut self.stage, platform);
    }

    fn stage(&self) -> &Stage {
        &self.stage
    }

    fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    fn finished(&self) -> bool {
        self.exit
    }
}
