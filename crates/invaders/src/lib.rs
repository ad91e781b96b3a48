use anyhow::Result;
use invaders_game::{GameConfig, InvadersApp};
use invaders_sdl2::App;
use invaders_sdl2::{SdlContext, SdlInitInfo};

/// Command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub scale: u32,
    pub demo: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            scale: invaders_game::SCREEN_SCALE,
            demo: false,
        }
    }
}

impl Options {
    /// Parse `[--scale N] [--demo]`. Returns a message on bad input.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut options = Options::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--demo" => options.demo = true,
                "--scale" => {
                    let value = args
                        .next()
                        .ok_or_else(|| "--scale needs a value".to_string())?;
                    options.scale = match value.parse::<u32>() {
                        Ok(scale) if scale > 0 => scale,
                        _ => return Err(format!("Invalid scale '{}'", value)),
                    };
                }
                other => return Err(format!("Unknown argument '{}'", other)),
            }
        }
        Ok(options)
    }
}

pub fn run(options: &Options) -> Result<()> {
    let config = GameConfig::builder().demo(options.demo).build();
    let app = InvadersApp::new(config);
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(options.scale)
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}
