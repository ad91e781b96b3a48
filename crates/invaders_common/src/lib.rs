pub mod app;
pub mod buffer;
pub mod color;
pub mod key;
pub mod sprite;

pub use app::App;
pub use buffer::PixelBuffer;
pub use color::Color;
pub use key::Key;
pub use sprite::Sprite;
