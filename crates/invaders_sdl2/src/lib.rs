use anyhow::{anyhow, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use std::time::{Duration, Instant};
use typed_builder::TypedBuilder;

pub use invaders_common;
pub use invaders_common::app::App;
pub use sdl2;

use invaders_common::key::Key;
use invaders_common::PixelBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// One packed `0xRRGGBBAA` word per pixel, as stored in a `PixelBuffer`.
    RGBA8888,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub title: String,
    #[builder(default = PixelFormat::RGBA8888)]
    pub pixel_format: PixelFormat,
}

/// Presents an [`App`]'s pixel buffer in an SDL2 window.
pub struct SdlContext;

impl SdlContext {
    /// Open the window and drive `app` until it asks to exit or the window is
    /// closed.
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            pixel_format,
        } = sdl_init_info;

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().present_vsync().build()?;

        let texture_creator = canvas.texture_creator();
        let mut texture = texture_creator.create_texture_streaming(
            map_pixel_format(pixel_format),
            width,
            height,
        )?;

        let color_size = map_pixel_format_size(pixel_format);
        let mut frame = PixelBuffer::new(width as usize, height as usize);
        let mut screen_state = vec![0u8; (width * color_size * height) as usize];

        log::info!("Presenting {}x{} at {}x scale", width, height, scale);
        app.init();
        let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        // ~16.67ms per frame on top of vsync, for displays that do not pace us.
        let target_frame = Duration::from_micros(16_667);
        let mut last_frame = Instant::now();

        loop {
            if app.should_exit() {
                app.exit();
                break;
            }

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => {
                        app.exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        repeat: false,
                        ..
                    } => {
                        let key = map_keycode(keycode);
                        app.handle_key_event(key, true);
                    }
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => {
                        let key = map_keycode(keycode);
                        app.handle_key_event(key, false);
                    }
                    _ => {}
                }
            }

            app.update(&mut frame);
            copy_frame(&frame, &mut screen_state);

            texture.update(None, &screen_state, (width * color_size) as usize)?;
            canvas.clear();
            canvas.copy(&texture, None, None).map_err(|e| anyhow!(e))?;
            canvas.present();

            let elapsed = last_frame.elapsed();
            if elapsed < target_frame {
                std::thread::sleep(target_frame - elapsed);
            }
            log::trace!("Frame took {:?}", last_frame.elapsed());
            last_frame = Instant::now();
        }

        Ok(())
    }
}

/// Write `frame` into `out` as texture rows, top row first.
///
/// SDL's packed formats are read as native-endian words, so each pixel is
/// written with its native byte order.
pub fn copy_frame(frame: &PixelBuffer, out: &mut [u8]) {
    let pixels = frame.rows_top_down().flatten();
    for (dst, pixel) in out.chunks_exact_mut(4).zip(pixels) {
        dst.copy_from_slice(&pixel.to_ne_bytes());
    }
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGBA8888 => PixelFormatEnum::RGBA8888,
    }
}

pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGBA8888 => 4,
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::A => Key::A,
        Keycode::D => Key::D,
        Keycode::P => Key::P,
        Keycode::Q => Key::Q,
        Keycode::W => Key::W,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Up => Key::Up,
        Keycode::Space => Key::Space,
        Keycode::Escape => Key::Escape,
        _ => Key::None,
    }
}
