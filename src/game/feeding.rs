//! The feeding window opened by an energizer.

/// Timer, eaten-ghost counter and score multiplier of the feeding window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedingWindow {
    active: bool,
    elapsed_ticks: u64,
    ghosts_eaten: usize,
    multiplier: u32,
}

impl Default for FeedingWindow {
    fn default() -> Self {
        Self {
            active: false,
            elapsed_ticks: 0,
            ghosts_eaten: 0,
            multiplier: 1,
        }
    }
}

impl FeedingWindow {
    /// Opens (or reopens) the window; counters and multiplier start over.
    pub fn start(&mut self) {
        *self = Self {
            active: true,
            ..Self::default()
        };
    }

    /// Closes the window. The multiplier is kept until the next energizer.
    pub fn end(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the window still runs: fewer than `ghost_count` ghosts eaten and fewer than
    /// `duration_ticks` ticks spent.
    pub fn is_running(&self, ghost_count: usize, duration_ticks: u64) -> bool {
        self.active && self.ghosts_eaten < ghost_count && self.elapsed_ticks < duration_ticks
    }

    /// Counts one more tick spent in the window.
    pub fn tick(&mut self) {
        self.elapsed_ticks += 1;
    }

    /// Counts an eaten ghost and returns its score; later ghosts of the same window score double.
    pub fn award_ghost(&mut self, base: u32) -> u32 {
        let points = base.saturating_mul(self.multiplier);
        self.multiplier = self.multiplier.saturating_mul(2);
        self.ghosts_eaten += 1;
        points
    }

    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    pub fn ghosts_eaten(&self) -> usize {
        self.ghosts_eaten
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }
}
