//! Menu, settings, and about scenes
//!
//! The pre-game flow: a main menu that routes to the session, a settings
//! scene whose scroller picks the starting difficulty (sixteenths, carried
//! in memory across transitions), and an about scene. All mouse-driven
//! through the widget layer.

use sprite_engine::prelude::*;

/// Menu text palette
pub const MENU_STYLE: TextStyle = TextStyle {
    font_px: 20,
    fg: [205, 133, 63, 255],
    bg: [0, 0, 0, 255],
};

/// Title palette
pub const TITLE_STYLE: TextStyle = TextStyle {
    font_px: 35,
    fg: [178, 34, 34, 255],
    bg: [0, 0, 0, 255],
};

/// Divisor mapping the settings scroller's value to a difficulty float
pub const DIFFICULTY_STEPS: f32 = 16.0;

/// Where the main menu routes next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Start a game session
    Start,
    /// Open the settings scene
    Settings,
    /// Open the about scene
    About,
}

/// The main menu
pub struct MenuScene {
    stage: Stage,
    title: Label,
    buttons: Vec<Button>,
    choice: Option<MenuChoice>,
}

impl MenuScene {
    /// Build the menu for the platform's viewport
    pub fn new(platform: &mut dyn Platform) -> Self {
        let viewport = platform.viewport();
        let center_x = viewport.width as f32 / 2.0;
        let center_y = viewport.height as f32 / 2.0;

        let mut stage = Stage::new();

        let mut title = Label::new(&mut stage, 0, platform, TITLE_STYLE);
        title.text = "Maverick".to_string();
        title.size = (200, 30);
        title.center = Vec2::new(center_x, 85.0);

        let captions = ["Start", "Settings", "About"];
        let offsets = [-30.0, 0.0, 30.0];
        let mut buttons = Vec::with_capacity(captions.len());
        for (caption, offset) in captions.iter().zip(offsets) {
            let mut button = Button::new(&mut stage, 0, platform, MENU_STYLE);
            button.label.text = (*caption).to_string();
            button.label.center = Vec2::new(center_x, center_y + offset);
            buttons.push(button);
        }

        Self {
            stage,
            title,
            buttons,
            choice: None,
        }
    }

    /// The routing decision, once a button has been clicked
    pub fn choice(&self) -> Option<MenuChoice> {
        self.choice
    }

    /// Screen position of a button's center, for scripted runs
    pub fn button_center(&self, choice: MenuChoice) -> Vec2 {
        let index = match choice {
            MenuChoice::Start => 0,
            MenuChoice::Settings => 1,
            MenuChoice::About => 2,
        };
        self.buttons[index].label.center
    }
}

impl Scene for MenuScene {
    fn handle_event(&mut self, _event: &InputEvent, _platform: &mut dyn Platform) {}

    fn update(&mut self, platform: &mut dyn Platform) {
        self.title.sync(&mut self.stage, platform);
        for button in &mut self.buttons {
            button.update(&mut self.stage, platform);
        }

        if self.buttons[0].clicked() {
            self.choice = Some(MenuChoice::Start);
        } else if self.buttons[1].clicked() {
            self.choice = Some(MenuChoice::Settings);
        } else if self.buttons[2].clicked() {
            self.choice = Some(MenuChoice::About);
        }
    }

    fn stage(&self) -> &Stage {
        &self.stage
    }

    fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    fn finished(&self) -> bool {
        self.choice.is_some()
    }
}

/// The settings scene: difficulty selection
pub struct SettingsScene {
    stage: Stage,
    title: Label,
    caption: Label,
    scroller: Scroller,
    back: Button,
    done: bool,
}

impl SettingsScene {
    /// Build the settings scene, pre-setting the scroller from the current
    /// difficulty
    pub fn new(platform: &mut dyn Platform, difficulty: f32) -> Self {
        let viewport = platform.viewport();
        let center_x = viewport.width as f32 / 2.0;
        let center_y = viewport.height as f32 / 2.0;

        let mut stage = Stage::new();

        let mut title = Label::new(&mut stage, 0, platform, TITLE_STYLE);
        title.text = "Settings".to_string();
        title.size = (200, 60);
        title.center = Vec2::new(center_x, 85.0);

        let mut caption = Label::new(&mut stage, 0, platform, MENU_STYLE);
        caption.text = "Difficulty".to_string();
        caption.center = Vec2::new(center_x, center_y - 15.0);

        let mut scroller = Scroller::new(
            &mut stage,
            0,
            platform,
            MENU_STYLE,
            0.0,
            DIFFICULTY_STEPS,
            1.0,
        );
        scroller.value = difficulty * DIFFICULTY_STEPS;
        scroller.button.label.center = Vec2::new(center_x, center_y + 15.0);

        let mut back = Button::new(&mut stage, 0, platform, MENU_STYLE);
        back.label.text = "Back".to_string();
        back.label.center = Vec2::new(center_x, center_y + 110.0);

        Self {
            stage,
            title,
            caption,
            scroller,
            back,
            done: false,
        }
    }

    /// The chosen difficulty, in sixteenth steps
    pub fn difficulty(&self) -> f32 {
        self.scroller.value / DIFFICULTY_STEPS
    }
}

impl Scene for SettingsScene {
    fn handle_event(&mut self, _event: &InputEvent, _platform: &mut dyn Platform) {}

    fn update(&mut self, platform: &mut dyn Platform) {
        self.title.sync(&mut self.stage, platform);
        self.caption.sync(&mut self.stage, platform);
        self.scroller.update(&mut self.stage, platform);
        self.back.update(&mut self.stage, platform);

        if self.back.clicked() {
            self.done = true;
        }
    }

    fn stage(&self) -> &Stage {
        &self.stage
    }

    fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    fn finished(&self) -> bool {
        self.done
    }
}

/// The about scene
pub struct AboutScene {
    stage: Stage,
    title: Label,
    body: MultiLabel,
    back: Button,
    done: bool,
}

impl AboutScene {
    /// Build the about scene
    pub fn new(platform: &mut dyn Platform) -> Self {
        let viewport = platform.viewport();
        let center_x = viewport.width as f32 / 2.0;
        let center_y = viewport.height as f32 / 2.0;

        let mut stage = Stage::new();

        let mut title = Label::new(&mut stage, 0, platform, TITLE_STYLE);
        title.text = "About".to_string();
        title.size = (200, 60);
        title.center = Vec2::new(center_x, 85.0);

        let mut body = MultiLabel::new(&mut stage, 0, platform, MENU_STYLE);
        body.style.font_px = 15;
        body.lines = vec![
            "Maverick is a simple side-scrolling shooter.".to_string(),
            "Use WASD to move, SPACE to fire, and ESC to leave.".to_string(),
            "Your ship is invincible for a moment after each death.".to_string(),
        ];
        body.size = (500, 175);
        body.center = Vec2::new(center_x, center_y);

        let mut back = Button::new(&mut stage, 0, platform, MENU_STYLE);
        back.label.text = "Back".to_string();
        back.label.center = Vec2::new(center_x, center_y + 175.0 / 2.0 + 40.0);

        Self {
            stage,
            title,
            body,
            back,
            done: false,
        }
    }
}

impl Scene for AboutScene {
    fn handle_event(&mut self, _event: &InputEvent, _platform: &mut dyn Platform) {}

    fn update(&mut self, platform: &mut dyn Platform) {
        self.title.sync(&mut self.stage, platform);
        self.body.sync(&mut self.stage, platform);
        self.back.update(&mut self.stage, platform);

        if self.back.clicked() {
            self.done = true;
        }
    }

    fn stage(&self) -> &Stage {
        &self.stage
    }

    fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    fn finished(&self) -> bool {
        self.done
    }
}
