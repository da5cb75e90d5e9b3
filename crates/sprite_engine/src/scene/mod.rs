//! Scene trait and fixed-tick loop driver
//!
//! A scene owns a [`Stage`] and reacts to input; the [`SceneDirector`] runs
//! the frame loop around it. Each tick is strictly sequential: poll input,
//! dispatch events to the scene hook, advance entities, run the scene's
//! per-frame logic (collision and bookkeeping), then draw. Exit is
//! cooperative: a quit request or a finished scene is noted during the tick
//! and acted on at the top of the next one, so the current tick always
//! completes.

use crate::foundation::time::{FrameClock, Stopwatch};
use crate::input::InputEvent;
use crate::platform::Platform;
use crate::stage::Stage;

/// How a scene run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneOutcome {
    /// The platform asked the whole program to close (as opposed to the
    /// scene finishing on its own)
    pub quit_requested: bool,
}

/// A screenful of simulation: menu, settings, or a game session
pub trait Scene {
    /// React to one discrete input event
    fn handle_event(&mut self, event: &InputEvent, platform: &mut dyn Platform);

    /// Advance entities for this tick. The default advances every
    /// auto-updating sprite; scenes with scripted entities run those here
    /// too, before any collision logic.
    fn advance(&mut self, platform: &mut dyn Platform) {
        let viewport = platform.viewport();
        self.stage_mut().advance(viewport);
    }

    /// Per-frame logic after entities have advanced: collision passes,
    /// spawning, widget updates
    fn update(&mut self, platform: &mut dyn Platform);

    /// The scene's stage
    fn stage(&self) -> &Stage;

    /// Mutable access to the scene's stage
    fn stage_mut(&mut self) -> &mut Stage;

    /// Whether the scene has finished and control should return to the
    /// caller
    fn finished(&self) -> bool;
}

/// Fixed-tick loop driver
pub struct SceneDirector {
    clock: FrameClock,
}

impl SceneDirector {
    /// Create a director pacing at `tick_rate` ticks per second
    pub fn new(tick_rate: u32) -> Self {
        Self {
            clock: FrameClock::new(tick_rate),
        }
    }

    /// Create a director that runs as fast as possible (tests, smoke runs)
    pub fn uncapped() -> Self {
        Self {
            clock: FrameClock::uncapped(),
        }
    }

    /// Run `scene` to completion against `platform`
    pub fn run(&mut self, scene: &mut dyn Scene, platform: &mut dyn Platform) -> SceneOutcome {
        let mut quit_requested = false;
        let mut exit = false;
        let mut frame_watch = Stopwatch::new();

        log::debug!("scene loop starting");

        while !exit {
            self.clock.tick();
            frame_watch.restart();

            for event in platform.poll_events() {
                if matches!(event, InputEvent::Quit) {
                    quit_requested = true;
                }
                scene.handle_event(&event, platform);
            }

            scene.advance(platform);
            scene.update(platform);

            Self::draw(scene, platform);

            log::trace!(
                "tick {} took {:.3}ms",
                self.clock.ticks(),
                frame_watch.elapsed_millis()
            );

            // exit requests take effect here, after the tick completed
            exit = quit_requested || scene.finished();
        }

        log::debug!(
            "scene loop finished after {} ticks (quit: {})",
            self.clock.ticks(),
            quit_requested
        );

        SceneOutcome { quit_requested }
    }

    /// Run one complete tick without input, for tests that step a scene
    /// manually
    pub fn step(scene: &mut dyn Scene, platform: &mut dyn Platform) {
        for event in platform.poll_events() {
            scene.handle_event(&event, platform);
        }
        scene.advance(platform);
        scene.update(platform);
        Self::draw(scene, platform);
    }

    fn draw(scene: &mut dyn Scene, platform: &mut dyn Platform) {
        scene.stage_mut().sweep();
        platform.clear();
        for sprite in scene.stage().draw_order() {
            if sprite.visible && !sprite.size.is_empty() {
                platform.blit(sprite.image, sprite.draw_position(), sprite.kinematics.rotation);
            }
        }
        platform.present();
    }
}
