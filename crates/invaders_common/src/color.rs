#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);
    pub const RED: Color = Color::new_rgb(255, 0, 0);
    pub const GREEN: Color = Color::new_rgb(0, 255, 0);
    pub const BLUE: Color = Color::new_rgb(0, 0, 255);
    pub const TRANSPARENT: Color = Color::new_rgba(0, 0, 0, 0);

    /// Playfield green used by the arcade cabinet overlay.
    pub const DARK_GREEN: Color = Color::new_rgb(0, 128, 0);
    pub const MAROON: Color = Color::new_rgb(128, 0, 0);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    #[inline]
    pub const fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Pack as `0xRRGGBBAA`, the layout stored in a [`PixelBuffer`](crate::PixelBuffer).
    #[inline]
    pub const fn to_rgba_u32(&self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }
}
