use crate::color::Color;
use crate::sprite::Sprite;

/// An owned grid of packed RGBA pixels (see [`Color::to_rgba_u32`]).
///
/// The origin is the bottom-left corner: row 0 is the bottom row of the
/// picture, so `y` grows upward.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u32>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![Color::TRANSPARENT.to_rgba_u32(); width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw pixels, bottom row first.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Pixel at (`x`, `y`), or `None` outside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.width + x])
    }

    /// Iterate rows from the top of the picture down, as most texture APIs
    /// expect them.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[u32]> {
        self.data.chunks_exact(self.width.max(1)).rev()
    }

    pub fn clear(&mut self, color: Color) {
        self.data.fill(color.to_rgba_u32());
    }

    /// Set every pixel of row `y` to `color`. Rows outside the buffer are ignored.
    pub fn fill_row(&mut self, y: usize, color: Color) {
        if y >= self.height {
            return;
        }
        let start = y * self.width;
        self.data[start..start + self.width].fill(color.to_rgba_u32());
    }

    /// Paint every set cell of `sprite` in `color`.
    ///
    /// The sprite's bottom row lands on buffer row `y` and its top row on
    /// `y + height - 1`. Cells that fall outside the buffer are dropped; unset
    /// cells leave the buffer untouched.
    pub fn draw_sprite(&mut self, sprite: &Sprite, x: i32, y: i32, color: Color) {
        let packed = color.to_rgba_u32();
        let top = y + sprite.height() as i32 - 1;
        for yi in 0..sprite.height() {
            let sy = top - yi as i32;
            if sy < 0 || sy as usize >= self.height {
                continue;
            }
            for xi in 0..sprite.width() {
                let sx = x + xi as i32;
                if sx < 0 || sx as usize >= self.width {
                    continue;
                }
                if sprite.is_set(yi, xi) {
                    self.data[sy as usize * self.width + sx as usize] = packed;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PixelBuffer;
    use crate::{Color, Sprite};

    const BG: Color = Color::DARK_GREEN;
    const FG: Color = Color::MAROON;

    fn cleared(width: usize, height: usize) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(width, height);
        buffer.clear(BG);
        buffer
    }

    fn painted(buffer: &PixelBuffer) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                if buffer.pixel(x, y) == Some(FG.to_rgba_u32()) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn new_buffer_has_one_cell_per_pixel() {
        let buffer = PixelBuffer::new(224, 256);
        assert_eq!(buffer.data().len(), 224 * 256);
    }

    #[test]
    fn clear_sets_every_pixel() {
        let buffer = cleared(224, 256);
        assert!(buffer.data().iter().all(|&p| p == BG.to_rgba_u32()));
    }

    #[test]
    fn fill_row_touches_only_that_row() {
        let mut buffer = cleared(3, 3);
        buffer.fill_row(1, FG);
        assert_eq!(painted(&buffer), vec![(0, 1), (1, 1), (2, 1)]);

        let before = buffer.data().to_vec();
        buffer.fill_row(3, BG);
        assert_eq!(buffer.data(), &before[..]);
    }

    #[test]
    fn empty_mask_never_changes_the_buffer() {
        let mut buffer = cleared(16, 16);
        let before = buffer.data().to_vec();
        let blank = Sprite::new(4, 3, &[0; 12]);
        buffer.draw_sprite(&blank, 2, 2, FG);
        buffer.draw_sprite(&blank, -2, 14, FG);
        assert_eq!(buffer.data(), &before[..]);
    }

    #[test]
    fn single_pixel_lands_at_its_coordinates() {
        let dot = Sprite::solid(1, 1);
        for &(x, y) in &[(0, 0), (5, 9), (15, 0), (0, 15), (15, 15)] {
            let mut buffer = cleared(16, 16);
            buffer.draw_sprite(&dot, x as i32, y as i32, FG);
            assert_eq!(painted(&buffer), vec![(x, y)]);
        }
    }

    #[test]
    fn top_row_of_sprite_is_drawn_highest() {
        // Only the top-left cell is set.
        let sprite = Sprite::new(2, 3, &[1, 0, 0, 0, 0, 0]);
        let mut buffer = cleared(8, 8);
        buffer.draw_sprite(&sprite, 3, 1, FG);
        assert_eq!(painted(&buffer), vec![(3, 3)]);
    }

    #[test]
    fn partially_outside_sprite_is_clipped() {
        let block = Sprite::solid(3, 3);
        let mut buffer = cleared(4, 4);
        buffer.draw_sprite(&block, 2, 2, FG);
        assert_eq!(painted(&buffer), vec![(2, 2), (3, 2), (2, 3), (3, 3)]);

        let mut buffer = cleared(4, 4);
        buffer.draw_sprite(&block, -2, -2, FG);
        assert_eq!(painted(&buffer), vec![(0, 0)]);
    }

    #[test]
    fn fully_outside_sprite_draws_nothing() {
        let block = Sprite::solid(3, 3);
        let mut buffer = cleared(4, 4);
        buffer.draw_sprite(&block, 10, 0, FG);
        buffer.draw_sprite(&block, 0, -3, FG);
        assert!(painted(&buffer).is_empty());
    }

    #[test]
    fn rows_top_down_starts_at_the_top_row() {
        let mut buffer = cleared(2, 3);
        buffer.draw_sprite(&Sprite::solid(1, 1), 1, 2, FG);
        let first = buffer.rows_top_down().next().unwrap();
        assert_eq!(first, &[BG.to_rgba_u32(), FG.to_rgba_u32()]);
        assert_eq!(buffer.rows_top_down().count(), 3);
    }
}
