use invaders_common::Sprite;

/// Cycles through a list of frames, holding each for `frame_duration` ticks.
#[derive(Clone, Debug)]
pub struct SpriteAnimation {
    frames: Vec<Sprite>,
    frame_duration: usize,
    looping: bool,
    time: usize,
    expired: bool,
}

impl SpriteAnimation {
    /// Panics if `frames` is empty or `frame_duration` is zero.
    pub fn new(frames: Vec<Sprite>, frame_duration: usize, looping: bool) -> Self {
        assert!(!frames.is_empty(), "animation needs at least one frame");
        assert!(frame_duration > 0, "frame duration must be positive");
        Self {
            frames,
            frame_duration,
            looping,
            time: 0,
            expired: false,
        }
    }

    pub fn looping(frames: Vec<Sprite>, frame_duration: usize) -> Self {
        Self::new(frames, frame_duration, true)
    }

    #[inline]
    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn time(&self) -> usize {
        self.time
    }

    /// Length of one full cycle in ticks.
    #[inline]
    pub fn period(&self) -> usize {
        self.num_frames() * self.frame_duration
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Step one tick. A looping animation wraps to its first frame at the end
    /// of the cycle; a one-shot animation expires there.
    pub fn advance(&mut self) {
        if self.expired {
            return;
        }
        self.time += 1;
        if self.time == self.period() {
            if self.looping {
                self.time = 0;
            } else {
                self.expired = true;
            }
        }
    }

    /// The frame for the current time, or `None` once expired.
    pub fn current_frame(&self) -> Option<&Sprite> {
        if self.expired {
            return None;
        }
        self.frames.get(self.time / self.frame_duration)
    }

    /// Any frame works for layout; all frames of an animation share a size.
    pub fn first_frame(&self) -> &Sprite {
        &self.frames[0]
    }
}
