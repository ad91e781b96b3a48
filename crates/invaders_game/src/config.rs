use invaders_common::Color;
use typed_builder::TypedBuilder;

/// Tunables for a game session.
///
/// Defaults match the arcade layout: green playfield, maroon sprites, three
/// lives.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GameConfig {
    #[builder(default = crate::SCREEN_WIDTH)]
    pub width: usize,
    #[builder(default = crate::SCREEN_HEIGHT)]
    pub height: usize,
    #[builder(default = Color::DARK_GREEN)]
    pub background: Color,
    #[builder(default = Color::MAROON)]
    pub alien_color: Color,
    #[builder(default = Color::MAROON)]
    pub player_color: Color,
    #[builder(default = Color::MAROON)]
    pub bullet_color: Color,
    #[builder(default = 3)]
    pub player_lives: u32,
    /// Ticks each alien animation frame is held.
    #[builder(default = 10)]
    pub alien_frame_duration: usize,
    /// Let the player bounce between the edges on its own.
    #[builder(default = false)]
    pub demo: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
