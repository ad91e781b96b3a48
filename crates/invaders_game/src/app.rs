use crate::config::GameConfig;
use crate::game::Game;
use crate::input::{Action, InputState};
use crate::SCREEN_SCALE;
use invaders_common::app::App;
use invaders_common::color::Color;
use invaders_common::key::Key;
use invaders_common::PixelBuffer;
use std::collections::HashSet;

/// Presenter-facing wrapper around [`Game`].
///
/// Implements the shared `App` trait: key events are latched into an
/// [`InputState`], and each `update` draws one frame and then advances the
/// simulation one tick.
pub struct InvadersApp {
    paused: bool,
    pub game: Game,
    input: InputState,
    /// Steering keys currently down; several keys can share one action.
    held_keys: HashSet<Key>,
    /// Direction the player is steered in while in demo mode.
    demo_dir: i32,
}

impl InvadersApp {
    pub fn new(config: GameConfig) -> Self {
        Self {
            paused: false,
            game: Game::with_config(config),
            input: InputState::new(),
            held_keys: HashSet::new(),
            demo_dir: 1,
        }
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Bounce between the edges, as the attract screen does.
    fn drive_demo(&mut self) {
        let x = self.game.player().x;
        let right_edge = self.game.width() as i32 - self.game.player_sprite().width() as i32;
        if x >= right_edge {
            self.demo_dir = -1;
        } else if x <= 0 {
            self.demo_dir = 1;
        }
        self.input.apply(Action::MoveRight, self.demo_dir > 0);
        self.input.apply(Action::MoveLeft, self.demo_dir < 0);
    }
}

impl Default for InvadersApp {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl App for InvadersApp {
    fn init(&mut self) {
        log::info!(
            "Space Invaders init ({} aliens, demo: {})",
            self.game.aliens_remaining(),
            self.game.config().demo
        );
    }

    fn update(&mut self, frame: &mut PixelBuffer) {
        if self.paused {
            // Keep whatever was drawn last.
            overlay_pause_banner(frame);
            return;
        }

        if self.game.config().demo {
            self.drive_demo();
        }
        self.game.draw(frame);
        self.game.step(&mut self.input);
    }

    fn handle_key_event(&mut self, key: Key, is_pressed: bool) {
        if is_pressed {
            match key {
                Key::P => {
                    self.paused = !self.paused;
                    let state = if self.paused { "paused" } else { "resumed" };
                    log::info!("Space Invaders {}", state);
                    return;
                }
                // Any other key will unpause if the game is currently paused.
                _ if self.paused => {
                    self.paused = false;
                    log::info!("Space Invaders resumed");
                }
                _ => {}
            }
        }

        let Some(action) = action_for(key) else {
            return;
        };
        let steering = matches!(action, Action::MoveLeft | Action::MoveRight);
        if !steering {
            self.input.apply(action, is_pressed);
            return;
        }
        if self.game.config().demo {
            return;
        }
        if is_pressed {
            self.held_keys.insert(key);
        } else {
            self.held_keys.remove(&key);
        }
        let held = self
            .held_keys
            .iter()
            .any(|&held| action_for(held) == Some(action));
        self.input.apply(action, held);
    }

    fn should_exit(&self) -> bool {
        self.input.quit_requested()
    }

    fn exit(&mut self) {
        log::info!(
            "Space Invaders exit, {} aliens left",
            self.game.aliens_remaining()
        );
    }

    fn width(&self) -> u32 {
        self.game.width() as u32
    }

    fn height(&self) -> u32 {
        self.game.height() as u32
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        "Space Invaders".to_string()
    }
}

/// Key bindings: arrows or A/D steer, Space/W/Up fire, Escape/Q quit.
pub fn action_for(key: Key) -> Option<Action> {
    match key {
        Key::Left | Key::A => Some(Action::MoveLeft),
        Key::Right | Key::D => Some(Action::MoveRight),
        Key::Space | Key::W | Key::Up => Some(Action::Fire),
        Key::Escape | Key::Q => Some(Action::Quit),
        _ => None,
    }
}

/// Draw a striped band across the top of the frame so it is obvious the
/// game is paused.
fn overlay_pause_banner(frame: &mut PixelBuffer) {
    let banner_height = 12usize.min(frame.height());

    for i in 0..banner_height {
        let color = if i % 2 == 0 {
            Color::WHITE
        } else {
            Color::BLACK
        };
        frame.fill_row(frame.height() - 1 - i, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

    fn frame() -> PixelBuffer {
        PixelBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    #[test]
    fn arrow_keys_steer_the_player() {
        let mut app = InvadersApp::default();
        let mut frame = frame();
        app.handle_key_event(Key::Right, true);
        app.update(&mut frame);
        assert_eq!(app.game.player().x, 109);

        app.handle_key_event(Key::Right, false);
        app.handle_key_event(Key::A, true);
        app.update(&mut frame);
        assert_eq!(app.game.player().x, 107);
    }

    #[test]
    fn releasing_one_alias_keeps_the_other_steering() {
        let mut app = InvadersApp::default();
        let mut frame = frame();
        app.handle_key_event(Key::Left, true);
        app.handle_key_event(Key::A, true);
        app.handle_key_event(Key::A, false);
        app.update(&mut frame);
        assert_eq!(app.game.player().x, 105);

        app.handle_key_event(Key::Left, false);
        app.update(&mut frame);
        assert_eq!(app.game.player().x, 105);
    }

    #[test]
    fn opposite_keys_cancel_until_one_is_released() {
        let mut app = InvadersApp::default();
        let mut frame = frame();
        app.handle_key_event(Key::D, true);
        app.handle_key_event(Key::Left, true);
        app.update(&mut frame);
        assert_eq!(app.game.player().x, 107);

        app.handle_key_event(Key::D, false);
        app.update(&mut frame);
        assert_eq!(app.game.player().x, 105);
    }

    #[test]
    fn space_fires_once_per_press() {
        let mut app = InvadersApp::default();
        let mut frame = frame();
        app.handle_key_event(Key::Space, true);
        app.update(&mut frame);
        app.update(&mut frame);
        assert_eq!(app.game.bullets().len(), 1);
    }

    #[test]
    fn escape_requests_exit() {
        let mut app = InvadersApp::default();
        assert!(!app.should_exit());
        app.handle_key_event(Key::Escape, true);
        assert!(app.should_exit());
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut app = InvadersApp::default();
        app.handle_key_event(Key::None, true);
        assert!(!app.should_exit());
        assert_eq!(action_for(Key::None), None);
    }

    #[test]
    fn pause_freezes_the_game_and_draws_a_banner() {
        let mut app = InvadersApp::default();
        let mut frame = frame();
        app.handle_key_event(Key::Right, true);
        app.update(&mut frame);
        let x = app.game.player().x;

        app.handle_key_event(Key::P, true);
        assert!(app.is_paused());
        app.update(&mut frame);
        app.update(&mut frame);
        assert_eq!(app.game.player().x, x);

        let top = SCREEN_HEIGHT - 1;
        assert_eq!(frame.pixel(0, top), Some(Color::WHITE.to_rgba_u32()));
        assert_eq!(frame.pixel(0, top - 1), Some(Color::BLACK.to_rgba_u32()));
        assert_eq!(frame.pixel(0, 0), Some(Color::DARK_GREEN.to_rgba_u32()));

        // Any other key resumes.
        app.handle_key_event(Key::Right, true);
        assert!(!app.is_paused());
        app.update(&mut frame);
        assert_eq!(app.game.player().x, x + 2);
    }

    #[test]
    fn demo_mode_bounces_between_edges() {
        let mut app = InvadersApp::new(GameConfig::builder().demo(true).build());
        let mut frame = frame();
        let right_edge = (SCREEN_WIDTH - 11) as i32;

        let mut reached_right = false;
        let mut reached_left = false;
        for _ in 0..400 {
            app.update(&mut frame);
            let x = app.game.player().x;
            assert!((0..=right_edge).contains(&x));
            reached_right |= x == right_edge;
            reached_left |= reached_right && x == 0;
        }
        assert!(reached_right);
        assert!(reached_left);
    }

    #[test]
    fn demo_mode_survives_a_screen_narrower_than_the_player() {
        let config = GameConfig::builder().width(8).height(8).demo(true).build();
        let mut app = InvadersApp::new(config);
        let mut frame = PixelBuffer::new(8, 8);
        for _ in 0..5 {
            app.update(&mut frame);
        }
        // Clamping alternates between the two edges; nothing underflows.
        assert!((8 - 11..=0).contains(&app.game.player().x));
    }

    #[test]
    fn demo_mode_ignores_steering_keys() {
        let mut app = InvadersApp::new(GameConfig::builder().demo(true).build());
        let mut frame = frame();
        app.handle_key_event(Key::Left, true);
        app.update(&mut frame);
        assert_eq!(app.game.player().x, 109);
    }
}
