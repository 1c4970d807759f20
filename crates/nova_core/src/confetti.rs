//! Decorative particle burst shown when a checkout is confirmed.
use std::time::Duration;

/// Particles per volley at the very start of a burst.
pub const MAX_PARTICLES: u32 = 50;

/// Horizontal launch band of a volley, as a fraction of the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginBand {
    Left,
    Right,
}

impl OriginBand {
    pub fn range(self) -> (f32, f32) {
        match self {
            OriginBand::Left => (0.1, 0.3),
            OriginBand::Right => (0.7, 0.9),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleVolley {
    pub particles: u32,
    pub origin: OriginBand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfettiBurst {
    duration: Duration,
    interval: Duration,
    elapsed: Duration,
}

impl ConfettiBurst {
    pub fn new(duration: Duration, interval: Duration) -> Self {
        Self {
            duration,
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advances by one interval. Returns the volleys to launch, or `None` once
    /// no time is left and the interval should be cancelled.
    pub fn tick(&mut self) -> Option<[ParticleVolley; 2]> {
        self.elapsed = self.elapsed.saturating_add(self.interval);
        let left = self.duration.saturating_sub(self.elapsed);
        if left.is_zero() {
            self.elapsed = self.duration;
            return None;
        }
        let particles =
            (u128::from(MAX_PARTICLES) * left.as_nanos() / self.duration.as_nanos()) as u32;
        Some([
            ParticleVolley {
                particles,
                origin: OriginBand::Left,
            },
            ParticleVolley {
                particles,
                origin: OriginBand::Right,
            },
        ])
    }
}
