//! Maverick entry point
//!
//! Wires configuration, logging, a platform backend, and the top-level
//! menu → game loop. Difficulty is chosen in the settings scene and carried
//! in memory across transitions for the rest of the run.
//!
//! Only the headless backend ships in-tree, so the binary performs a
//! bounded, scripted run: click through the menu, play a stretch of the
//! session, leave via Escape, and quit. A windowed backend slots in behind
//! the same `Platform` trait without touching this flow.

use maverick::config::GameConfig;
use maverick::menu::{AboutScene, MenuChoice, MenuScene, SettingsScene};
use maverick::session::GameSession;
use sprite_engine::platform::headless::HeadlessPlatform;
use sprite_engine::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine_config = EngineConfig::load_or_default("engine.ron")?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(engine_config.log_level.as_str()),
    )
    .init();

    let game_config = GameConfig::load_or_default("maverick.ron")?;

    let mut platform = HeadlessPlatform::new(engine_config.window.extent()).quit_when_drained();
    if std::path::Path::new(&engine_config.assets_dir).exists() {
        platform = platform.with_assets_dir(&engine_config.assets_dir);
    }
    script_demo_input(&mut platform, engine_config.window.extent());

    let mut director = SceneDirector::new(engine_config.tick_rate);
    let mut difficulty = 0.0;
    let mut final_score = 0;

    loop {
        let mut menu = MenuScene::new(&mut platform);
        if director.run(&mut menu, &mut platform).quit_requested {
            break;
        }

        match menu.choice() {
            Some(MenuChoice::Start) => {
                let mut session = GameSession::new(&mut platform, &game_config, difficulty)?;
                let outcome = director.run(&mut session, &mut platform);
                final_score = session.score();
                log::info!(
                    "session over: score {}, lives {}, lost: {}",
                    session.score(),
                    session.lives(),
                    session.lost()
                );
                if outcome.quit_requested {
                    break;
                }
            }
            Some(MenuChoice::Settings) => {
                let mut settings = SettingsScene::new(&mut platform, difficulty);
                let outcome = director.run(&mut settings, &mut platform);
                difficulty = settings.difficulty();
                log::info!("difficulty set to {:.4}", difficulty);
                if outcome.quit_requested {
                    break;
                }
            }
            Some(MenuChoice::About) => {
                let mut about = AboutScene::new(&mut platform);
                if director.run(&mut about, &mut platform).quit_requested {
                    break;
                }
            }
            None => break,
        }
    }

    log::info!("exiting with final score {}", final_score);
    Ok(())
}

/// Queue the input for a short self-driving run: start a session, move and
/// shoot for a few seconds, then leave through Escape. The platform emits a
/// quit once the script drains, which unwinds the menu loop.
fn script_demo_input(platform: &mut HeadlessPlatform, viewport: Extent) {
    let center_x = viewport.width as f32 / 2.0;
    let center_y = viewport.height as f32 / 2.0;

    // click Start on the menu
    platform.push_batch(vec![
        InputEvent::MouseMoved(center_x, center_y - 30.0),
        InputEvent::MouseDown(MouseButton::Left),
    ]);
    platform.push_batch(vec![InputEvent::MouseUp(MouseButton::Left)]);

    // drift up and fire a burst while enemies roll in
    platform.push_batch(vec![InputEvent::KeyDown(Key::W)]);
    platform.push_idle(10);
    platform.push_batch(vec![InputEvent::KeyUp(Key::W)]);
    for _ in 0..6 {
        platform.push_batch(vec![InputEvent::KeyUp(Key::Space)]);
        platform.push_idle(12);
    }

    // leave the session; the drained script then quits the program
    platform.push_batch(vec![InputEvent::KeyUp(Key::Escape)]);
}
