use crate::buffer::PixelBuffer;
use crate::key::Key;

/// A program driven frame by frame by a presenter.
///
/// The presenter owns the [`PixelBuffer`] (sized `width() x height()`), hands
/// it to `update` once per frame and uploads the result.
pub trait App {
    fn init(&mut self);
    fn update(&mut self, frame: &mut PixelBuffer);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
