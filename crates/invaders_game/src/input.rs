/// Game-level actions a frontend key can be bound to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Fire,
    Quit,
}

/// Latched input, read once per simulation tick.
///
/// Key events only flip flags here; the simulation samples them in
/// [`Game::step`](crate::Game::step). The latest state wins.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    left_held: bool,
    right_held: bool,
    fire: bool,
    quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: Action, pressed: bool) {
        match action {
            Action::MoveLeft => self.left_held = pressed,
            Action::MoveRight => self.right_held = pressed,
            Action::Fire if pressed => self.fire = true,
            Action::Fire => {}
            Action::Quit if pressed => self.quit = true,
            Action::Quit => {}
        }
    }

    /// Net horizontal direction: `1` right, `-1` left, `0` both or neither.
    pub fn direction(&self) -> i32 {
        i32::from(self.right_held) - i32::from(self.left_held)
    }

    /// Whether fire was pressed since the last call. Clears the latch.
    pub fn take_fire(&mut self) -> bool {
        std::mem::take(&mut self.fire)
    }

    #[inline]
    pub fn fire_pending(&self) -> bool {
        self.fire
    }

    #[inline]
    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, InputState};

    #[test]
    fn releasing_one_side_restores_the_other() {
        let mut input = InputState::new();
        input.apply(Action::MoveRight, true);
        assert_eq!(input.direction(), 1);
        input.apply(Action::MoveLeft, true);
        assert_eq!(input.direction(), 0);
        input.apply(Action::MoveRight, false);
        assert_eq!(input.direction(), -1);
        input.apply(Action::MoveLeft, false);
        assert_eq!(input.direction(), 0);
    }

    #[test]
    fn repeated_presses_do_not_accumulate() {
        let mut input = InputState::new();
        input.apply(Action::MoveRight, true);
        input.apply(Action::MoveRight, true);
        input.apply(Action::MoveRight, false);
        assert_eq!(input.direction(), 0);
    }

    #[test]
    fn fire_latches_until_taken() {
        let mut input = InputState::new();
        input.apply(Action::Fire, true);
        input.apply(Action::Fire, false);
        assert!(input.fire_pending());
        assert!(input.take_fire());
        assert!(!input.take_fire());
    }

    #[test]
    fn quit_is_sticky() {
        let mut input = InputState::new();
        assert!(!input.quit_requested());
        input.apply(Action::Quit, true);
        input.apply(Action::Quit, false);
        assert!(input.quit_requested());
    }
}
