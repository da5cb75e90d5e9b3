//! UI widgets
//!
//! Text widgets built by composition: a [`Button`] has a [`Label`], a
//! [`Scroller`] has a [`Button`]. Each widget owns one sprite in the stage
//! and re-renders its text through the platform every tick. Buttons read the
//! platform's continuous mouse state; `clicked` is an edge that holds for
//! exactly one tick after a press is released over the widget.

use crate::foundation::collections::SpriteKey;
use crate::foundation::math::{Extent, Rect, Vec2};
use crate::input::MouseButton;
use crate::platform::{Platform, TextStyle};
use crate::sprite::animation::FrameTicker;
use crate::sprite::{Anchor, BoundsPolicy, Sprite};
use crate::stage::{GroupId, Stage};

/// Background shade while the cursor hovers a button
const HOVER_BG: [u8; 4] = [105, 105, 105, 255];
/// Background shade while a button is held down
const PRESSED_BG: [u8; 4] = [50, 50, 50, 255];

/// A single-line text widget centered on a point
pub struct Label {
    /// Text to display
    pub text: String,
    /// Rendering style; `bg` may be rewritten by button states
    pub style: TextStyle,
    /// Center position on screen
    pub center: Vec2,
    /// Fixed surface size; text is centered inside it
    pub size: (u32, u32),
    key: SpriteKey,
}

impl Label {
    /// Create a label and its backing sprite in the given group
    pub fn new(
        stage: &mut Stage,
        group: GroupId,
        platform: &mut dyn Platform,
        style: TextStyle,
    ) -> Self {
        let size = (150, 30);
        let image = platform.render_text("", &style, size);
        let sprite = Sprite::new(image, size.into())
            .with_anchor(Anchor::Center)
            .with_bounds(BoundsPolicy::Continue)
            .at(100.0, 100.0)
            .scripted();
        let key = stage.insert_in(group, sprite);
        Self {
            text: String::new(),
            style,
            center: Vec2::new(100.0, 100.0),
            size,
            key,
        }
    }

    /// Key of the backing sprite
    pub fn key(&self) -> SpriteKey {
        self.key
    }

    /// The widget's screen rectangle
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.center.x, self.center.y, self.size.into())
    }

    /// Re-render the text and sync the backing sprite
    pub fn sync(&self, stage: &mut Stage, platform: &mut dyn Platform) {
        let image = platform.render_text(&self.text, &self.style, self.size);
        if let Some(sprite) = stage.get_mut(self.key) {
            sprite.set_image(image, self.size.into());
            sprite.kinematics.set_position(self.center.x, self.center.y);
        }
    }
}

/// A multi-line text widget; lines are stacked and centered horizontally
pub struct MultiLabel {
    /// Lines of text to display
    pub lines: Vec<String>,
    /// Rendering style
    pub style: TextStyle,
    /// Center position on screen
    pub center: Vec2,
    /// Fixed surface size
    pub size: (u32, u32),
    key: SpriteKey,
}

impl MultiLabel {
    /// Create a multi-line label and its backing sprite
    pub fn new(
        stage: &mut Stage,
        group: GroupId,
        platform: &mut dyn Platform,
        style: TextStyle,
    ) -> Self {
        let size = (400, 300);
        let image = platform.render_text("", &style, size);
        let sprite = Sprite::new(image, size.into())
            .with_anchor(Anchor::Center)
            .with_bounds(BoundsPolicy::Continue)
            .at(100.0, 100.0)
            .scripted();
        let key = stage.insert_in(group, sprite);
        Self {
            lines: Vec::new(),
            style,
            center: Vec2::new(100.0, 100.0),
            size,
            key,
        }
    }

    /// Re-render the lines and sync the backing sprite
    pub fn sync(&self, stage: &mut Stage, platform: &mut dyn Platform) {
        let text = self.lines.join("\n");
        let image = platform.render_text(&text, &self.style, self.size);
        if let Some(sprite) = stage.get_mut(self.key) {
            sprite.set_image(image, self.size.into());
            sprite.kinematics.set_position(self.center.x, self.center.y);
        }
    }
}

/// A clickable button; press and release over the widget to trigger it
pub struct Button {
    /// The button's face
    pub label: Label,
    active: bool,
    clicked: bool,
    mouse_down: bool,
    allow_active: bool,
    scroller: bool,
    base_bg: [u8; 4],
}

impl Button {
    /// Create a regular button
    pub fn new(
        stage: &mut Stage,
        group: GroupId,
        platform: &mut dyn Platform,
        style: TextStyle,
    ) -> Self {
        Self::with_mode(stage, group, platform, style, false)
    }

    fn with_mode(
        stage: &mut Stage,
        group: GroupId,
        platform: &mut dyn Platform,
        style: TextStyle,
        scroller: bool,
    ) -> Self {
        let base_bg = style.bg;
        Self {
            label: Label::new(stage, group, platform, style),
            active: false,
            clicked: false,
            mouse_down: false,
            allow_active: true,
            scroller,
            base_bg,
        }
    }

    /// Whether the button is currently held active
    pub fn active(&self) -> bool {
        self.active
    }

    /// Whether the button fired this tick
    pub fn clicked(&self) -> bool {
        self.clicked
    }

    /// Advance the button state machine for one tick
    pub fn update(&mut self, stage: &mut Stage, platform: &mut dyn Platform) {
        self.label.sync(stage, platform);

        let mouse = platform.input().mouse_position();
        let left_down = platform.input().button_down(MouseButton::Left);
        let none_down = platform.input().no_buttons_down();
        let over = self.label.rect().contains(mouse);

        self.clicked = false;

        if none_down && !self.scroller {
            // hover shade, reverted when the cursor leaves
            self.label.style.bg = if over { HOVER_BG } else { self.base_bg };
        } else if left_down {
            self.mouse_down = true;
        }

        if self.mouse_down && self.allow_active {
            if over {
                self.active = true;
                if !self.scroller {
                    self.label.style.bg = PRESSED_BG;
                }
            }
            // one activation attempt per press, hit or miss
            self.allow_active = false;
        }

        // a scroller deactivates the moment the cursor slides off it
        if self.mouse_down && self.scroller && !over {
            self.active = false;
        }

        if none_down {
            self.allow_active = true;
            self.mouse_down = false;

            if self.active {
                self.active = false;
                self.label.style.bg = self.base_bg;
                if over {
                    self.clicked = true;
                }
            }
        }
    }
}

/// A button with a numeric value: clicking the left half decrements, the
/// right half increments, stepped at a fixed cadence while held
pub struct Scroller {
    /// The underlying button, in scroller mode
    pub button: Button,
    /// Current value
    pub value: f32,
    /// Lower bound
    pub min_value: f32,
    /// Upper bound
    pub max_value: f32,
    /// Step applied per cadence tick
    pub increment: f32,
    ticker: FrameTicker,
}

impl Scroller {
    /// Create a scroller over `[min_value, max_value]` stepping by
    /// `increment`
    pub fn new(
        stage: &mut Stage,
        group: GroupId,
        platform: &mut dyn Platform,
        style: TextStyle,
        min_value: f32,
        max_value: f32,
        increment: f32,
    ) -> Self {
        Self {
            button: Button::with_mode(stage, group, platform, style, true),
            value: 5.0,
            min_value,
            max_value,
            increment,
            ticker: FrameTicker::new(3),
        }
    }

    /// Advance the scroller for one tick
    pub fn update(&mut self, stage: &mut Stage, platform: &mut dyn Platform) {
        self.button.update(stage, platform);

        if self.ticker.step() && self.button.active() {
            let mouse_x = platform.input().mouse_position().x;
            if mouse_x < self.button.label.rect().center_x() {
                self.value -= self.increment;
                if self.value < self.min_value {
                    self.value = self.min_value;
                }
            } else {
                self.value += self.increment;
                if self.value > self.max_value {
                    self.value = self.max_value;
                }
            }
        }

        self.button.label.text = format!("<<  {:.2}  >>", self.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;
    use crate::platform::headless::HeadlessPlatform;

    fn setup() -> (Stage, HeadlessPlatform) {
        (Stage::new(), HeadlessPlatform::new(Extent::new(640, 480)))
    }

    fn press_at(platform: &mut HeadlessPlatform, x: f32, y: f32) {
        platform.push_batch(vec![
            InputEvent::MouseMoved(x, y),
            InputEvent::MouseDown(MouseButton::Left),
        ]);
        platform.poll_events();
    }

    fn release(platform: &mut HeadlessPlatform) {
        platform.push_batch(vec![InputEvent::MouseUp(MouseButton::Left)]);
        platform.poll_events();
    }

    #[test]
    fn test_button_click_requires_press_and_release_over_widget() {
        let (mut stage, mut platform) = setup();
        let mut button = Button::new(&mut stage, 0, &mut platform, TextStyle::default());
        button.label.center = Vec2::new(100.0, 100.0);

        press_at(&mut platform, 100.0, 100.0);
        button.update(&mut stage, &mut platform);
        assert!(button.active());
        assert!(!button.clicked());

        release(&mut platform);
        button.update(&mut stage, &mut platform);
        assert!(button.clicked());

        // edge lasts exactly one tick
        button.update(&mut stage, &mut platform);
        assert!(!button.clicked());
    }

    #[test]
    fn test_button_release_off_widget_does_not_click() {
        let (mut stage, mut platform) = setup();
        let mut button = Button::new(&mut stage, 0, &mut platform, TextStyle::default());
        button.label.center = Vec2::new(100.0, 100.0);

        press_at(&mut platform, 100.0, 100.0);
        button.update(&mut stage, &mut platform);

        platform.push_batch(vec![
            InputEvent::MouseMoved(500.0, 400.0),
            InputEvent::MouseUp(MouseButton::Left),
        ]);
        platform.poll_events();
        button.update(&mut stage, &mut platform);
        assert!(!button.clicked());
    }

    #[test]
    fn test_scroller_steps_on_cadence() {
        let (mut stage, mut platform) = setup();
        let mut scroller = Scroller::new(
            &mut stage,
            0,
            &mut platform,
            TextStyle::default(),
            0.0,
            16.0,
            1.0,
        );
        scroller.button.label.center = Vec2::new(100.0, 100.0);
        scroller.value = 5.0;

        // hold on the right half of the widget
        press_at(&mut platform, 160.0, 100.0);
        for _ in 0..9 {
            scroller.update(&mut stage, &mut platform);
        }

        // cadence of 3 ticks -> three increments in nine ticks
        assert_eq!(scroller.value, 8.0);
    }

    #[test]
    fn test_scroller_clamps_at_bounds() {
        let (mut stage, mut platform) = setup();
        let mut scroller = Scroller::new(
            &mut stage,
            0,
            &mut platform,
            TextStyle::default(),
            0.0,
            16.0,
            1.0,
        );
        scroller.button.label.center = Vec2::new(100.0, 100.0);
        scroller.value = 1.0;

        // hold on the left half
        press_at(&mut platform, 40.0, 100.0);
        for _ in 0..30 {
            scroller.update(&mut stage, &mut platform);
        }

        assert_eq!(scroller.value, 0.0);
    }
}
