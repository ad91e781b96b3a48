pub mod animation;
pub mod app;
pub mod collision;
pub mod config;
pub mod entities;
pub mod game;
pub mod input;
pub mod sprites;

pub use app::InvadersApp;
pub use config::GameConfig;
pub use game::Game;

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: usize = 224;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 256;
/// Default integer scaling factor for the SDL2 frontend.
pub const SCREEN_SCALE: u32 = 3;

/// Aliens in the formation: 5 rows of 11.
pub const ALIEN_ROWS: usize = 5;
pub const ALIEN_COLUMNS: usize = 11;
pub const NUM_ALIENS: usize = ALIEN_ROWS * ALIEN_COLUMNS;

/// Upper bound on bullets alive at once.
pub const MAX_BULLETS: usize = 128;
/// Ticks the death sprite stays on screen after an alien is hit.
pub const DEATH_TICKS: u8 = 10;
