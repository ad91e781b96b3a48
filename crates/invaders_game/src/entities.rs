use crate::{DEATH_TICKS, MAX_BULLETS};

/// Alien variant. Positions are in pixels from the bottom-left corner.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AlienType {
    Dead,
    A,
    B,
    C,
}

/// Which of the game's alien animations a living alien uses.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AnimationId {
    A,
    B,
    C,
}

impl AnimationId {
    pub const ALL: [AnimationId; 3] = [AnimationId::A, AnimationId::B, AnimationId::C];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            AnimationId::A => 0,
            AnimationId::B => 1,
            AnimationId::C => 2,
        }
    }
}

impl AlienType {
    /// The animation to draw this alien with, `None` for the dead.
    pub fn animation(self) -> Option<AnimationId> {
        match self {
            AlienType::Dead => None,
            AlienType::A => Some(AnimationId::A),
            AlienType::B => Some(AnimationId::B),
            AlienType::C => Some(AnimationId::C),
        }
    }

    /// Formation row `row` (0 = bottom) carries C, C, B, B, A.
    pub fn for_row(row: usize) -> Self {
        match row {
            0 | 1 => AlienType::C,
            2 | 3 => AlienType::B,
            _ => AlienType::A,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Alien {
    pub x: i32,
    pub y: i32,
    pub kind: AlienType,
    /// Ticks left to show the death sprite once dead. Drawn while non-zero.
    pub death_counter: u8,
}

impl Alien {
    pub fn new(x: i32, y: i32, kind: AlienType) -> Self {
        Self {
            x,
            y,
            kind,
            death_counter: DEATH_TICKS,
        }
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.kind == AlienType::Dead
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.death_counter > 0
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub lives: u32,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    /// Vertical displacement per tick; positive is up.
    pub dir: i32,
}

/// Live bullets, at most [`MAX_BULLETS`] of them.
///
/// Removal swaps the last bullet into the freed slot, so order is not kept.
#[derive(Clone, Debug)]
pub struct Bullets {
    items: Vec<Bullet>,
}

impl Default for Bullets {
    fn default() -> Self {
        Self {
            items: Vec::with_capacity(MAX_BULLETS),
        }
    }
}

impl Bullets {
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_BULLETS
    }

    /// Add a bullet. Returns `false` and drops it when full.
    pub fn push(&mut self, bullet: Bullet) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(bullet);
        true
    }

    /// Remove the bullet at `index`, moving the last bullet into its slot.
    pub fn swap_remove(&mut self, index: usize) -> Bullet {
        self.items.swap_remove(index)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Bullet> {
        self.items.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Bullet> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bullet> {
        self.items.iter()
    }
}
