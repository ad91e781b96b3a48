use invaders_common::{PixelBuffer, Sprite};

use crate::animation::SpriteAnimation;
use crate::collision::overlaps;
use crate::config::GameConfig;
use crate::entities::{Alien, AlienType, AnimationId, Bullet, Bullets, Player};
use crate::input::InputState;
use crate::{sprites, ALIEN_COLUMNS, ALIEN_ROWS, DEATH_TICKS};

/// Pixels the player moves per tick while a direction is held.
const PLAYER_SPEED: i32 = 2;
/// Vertical speed of a player shot, upward.
const PLAYER_BULLET_DIR: i32 = 2;

/// Full game state: formation, player, bullets and the sprites they are
/// drawn with.
///
/// One frame is `draw` followed by `step`.
pub struct Game {
    config: GameConfig,
    width: usize,
    height: usize,
    aliens: Vec<Alien>,
    player: Player,
    bullets: Bullets,
    /// Indexed by [`AnimationId::index`].
    animations: [SpriteAnimation; 3],
    death_sprite: Sprite,
    player_sprite: Sprite,
    bullet_sprite: Sprite,
}

impl Game {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let duration = config.alien_frame_duration;
        let animations = [
            SpriteAnimation::looping(sprites::alien_a().to_vec(), duration),
            SpriteAnimation::looping(sprites::alien_b().to_vec(), duration),
            SpriteAnimation::looping(sprites::alien_c().to_vec(), duration),
        ];
        let death_sprite = sprites::alien_death();

        let mut aliens = Vec::with_capacity(ALIEN_ROWS * ALIEN_COLUMNS);
        for yi in 0..ALIEN_ROWS {
            let kind = AlienType::for_row(yi);
            // Living aliens are centred on the slot the wider death sprite
            // will take.
            let width = kind
                .animation()
                .map_or(0, |id| animations[id.index()].first_frame().width());
            let pad = (death_sprite.width() - width) as i32 / 2;
            for xi in 0..ALIEN_COLUMNS {
                let x = 16 * xi as i32 + 20 + pad;
                let y = 17 * yi as i32 + 128;
                aliens.push(Alien::new(x, y, kind));
            }
        }

        let player = Player {
            x: 112 - 5,
            y: 32,
            lives: config.player_lives,
        };

        log::debug!(
            "New game: {}x{} buffer, {} aliens",
            config.width,
            config.height,
            aliens.len()
        );

        Self {
            width: config.width,
            height: config.height,
            config,
            aliens,
            player,
            bullets: Bullets::default(),
            animations,
            death_sprite,
            player_sprite: sprites::player(),
            bullet_sprite: sprites::player_bullet(),
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

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    #[inline]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[inline]
    pub fn bullets(&self) -> &Bullets {
        &self.bullets
    }

    #[inline]
    pub fn player_sprite(&self) -> &Sprite {
        &self.player_sprite
    }

    pub fn animation(&self, id: AnimationId) -> &SpriteAnimation {
        &self.animations[id.index()]
    }

    /// Aliens not yet shot.
    pub fn aliens_remaining(&self) -> usize {
        self.aliens.iter().filter(|alien| !alien.is_dead()).count()
    }

    /// Rasterize the current state into `buffer`, then advance the alien
    /// animations by one tick.
    pub fn draw(&mut self, buffer: &mut PixelBuffer) {
        buffer.clear(self.config.background);

        for alien in self.aliens.iter().filter(|alien| alien.is_visible()) {
            let sprite = match alien.kind.animation() {
                None => &self.death_sprite,
                Some(id) => match self.animations[id.index()].current_frame() {
                    Some(frame) => frame,
                    None => continue,
                },
            };
            buffer.draw_sprite(sprite, alien.x, alien.y, self.config.alien_color);
        }

        for bullet in self.bullets.iter() {
            buffer.draw_sprite(
                &self.bullet_sprite,
                bullet.x,
                bullet.y,
                self.config.bullet_color,
            );
        }

        buffer.draw_sprite(
            &self.player_sprite,
            self.player.x,
            self.player.y,
            self.config.player_color,
        );

        for animation in &mut self.animations {
            animation.advance();
        }
    }

    /// Advance the simulation one tick using the latched `input`.
    ///
    /// The fire latch is consumed whether or not a shot could be spawned.
    pub fn step(&mut self, input: &mut InputState) {
        self.tick_death_counters();
        self.advance_bullets();
        self.resolve_hits();
        self.move_player(input.direction());
        if input.take_fire() {
            self.fire();
        }
    }

    fn tick_death_counters(&mut self) {
        for alien in &mut self.aliens {
            if alien.is_dead() && alien.death_counter > 0 {
                alien.death_counter -= 1;
            }
        }
    }

    fn advance_bullets(&mut self) {
        let height = self.height as i32;
        let floor = self.bullet_sprite.height() as i32;
        let mut bi = 0;
        while let Some(bullet) = self.bullets.get_mut(bi) {
            bullet.y += bullet.dir;
            if bullet.y >= height || bullet.y < floor {
                self.bullets.swap_remove(bi);
            } else {
                bi += 1;
            }
        }
    }

    fn resolve_hits(&mut self) {
        let mut bi = 0;
        while let Some(&bullet) = self.bullets.get(bi) {
            match self.first_alien_hit(&bullet) {
                Some(ai) => {
                    self.kill_alien(ai);
                    // The swapped-in bullet is checked on the next pass.
                    self.bullets.swap_remove(bi);
                }
                None => bi += 1,
            }
        }
    }

    /// Index of the first living alien whose current frame overlaps `bullet`.
    fn first_alien_hit(&self, bullet: &Bullet) -> Option<usize> {
        self.aliens.iter().position(|alien| {
            let Some(id) = alien.kind.animation() else {
                return false;
            };
            self.animations[id.index()]
                .current_frame()
                .is_some_and(|frame| {
                    overlaps(
                        &self.bullet_sprite,
                        bullet.x,
                        bullet.y,
                        frame,
                        alien.x,
                        alien.y,
                    )
                })
        })
    }

    fn kill_alien(&mut self, index: usize) {
        let alien = &mut self.aliens[index];
        let Some(id) = alien.kind.animation() else {
            return;
        };
        let width = self.animations[id.index()].first_frame().width();
        alien.kind = AlienType::Dead;
        alien.x -= (self.death_sprite.width() - width) as i32 / 2;
        alien.death_counter = DEATH_TICKS;
        log::debug!("Alien {} hit at ({}, {})", index, alien.x, alien.y);

        if self.aliens_remaining() == 0 {
            log::info!("Every alien destroyed");
        }
    }

    fn move_player(&mut self, direction: i32) {
        let dx = PLAYER_SPEED * direction;
        if dx == 0 {
            return;
        }
        let player_width = self.player_sprite.width() as i32;
        let width = self.width as i32;
        if self.player.x + player_width + dx >= width {
            self.player.x = width - player_width;
        } else if self.player.x + dx <= 0 {
            self.player.x = 0;
        } else {
            self.player.x += dx;
        }
    }

    fn fire(&mut self) {
        let bullet = Bullet {
            x: self.player.x + self.player_sprite.width() as i32 / 2,
            y: self.player.y + self.player_sprite.height() as i32,
            dir: PLAYER_BULLET_DIR,
        };
        if self.bullets.push(bullet) {
            log::trace!("Bullet spawned at ({}, {})", bullet.x, bullet.y);
        } else {
            log::trace!("Bullet limit reached, shot dropped");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
