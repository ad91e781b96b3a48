/// A fixed-size on/off bitmap, drawn as a single solid color.
///
/// The mask is row-major with row 0 being the sprite's top row, which is how
/// sprite art reads in source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    width: usize,
    height: usize,
    mask: Vec<bool>,
}

impl Sprite {
    /// Build a sprite from a row-major `0`/`1` mask.
    ///
    /// Panics if `mask.len() != width * height`.
    pub fn new(width: usize, height: usize, mask: &[u8]) -> Self {
        assert_eq!(
            mask.len(),
            width * height,
            "sprite mask has {} cells, expected {}x{}",
            mask.len(),
            width,
            height
        );
        Self {
            width,
            height,
            mask: mask.iter().map(|&cell| cell != 0).collect(),
        }
    }

    /// A sprite with every cell set.
    pub fn solid(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            mask: vec![true; width * height],
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

    /// Whether the cell at (`row`, `col`) is set. Out-of-range cells are unset.
    #[inline]
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.mask[row * self.width + col]
    }
}

#[cfg(test)]
mod tests {
    use super::Sprite;

    #[test]
    fn reads_mask_row_major() {
        let sprite = Sprite::new(3, 2, &[1, 0, 0, 0, 0, 1]);
        assert!(sprite.is_set(0, 0));
        assert!(!sprite.is_set(0, 1));
        assert!(sprite.is_set(1, 2));
        assert!(!sprite.is_set(2, 0));
        assert!(!sprite.is_set(0, 3));
    }

    #[test]
    #[should_panic(expected = "sprite mask has 3 cells")]
    fn rejects_short_mask() {
        Sprite::new(2, 2, &[1, 1, 1]);
    }
}
