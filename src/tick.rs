//! Tick source abstraction and tick-rate arithmetic.

/// Trait for the periodic scheduler that drives the intervalometer.
///
/// While active, the scheduler must call `Intervalometer::on_tick` once per
/// tick at the configured rate. Ticks are assumed non-reentrant.
pub trait TickSource {
    /// Registers for periodic ticks.
    fn activate(&mut self);

    /// Deregisters from periodic ticks.
    fn deactivate(&mut self);
}

/// Fixed number of ticks per second shared by the sequencer and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickRate(u32);

impl TickRate {
    /// Creates a tick rate, returns `None` for zero.
    pub const fn new(ticks_per_second: u32) -> Option<Self> {
        if ticks_per_second == 0 {
            None
        } else {
            Some(Self(ticks_per_second))
        }
    }

    /// Ticks delivered per second.
    #[inline]
    pub const fn ticks_per_second(self) -> u32 {
        self.0
    }

    /// Number of ticks spanning `seconds`, saturating on overflow.
    #[inline]
    pub const fn ticks_for(self, seconds: u32) -> u32 {
        seconds.saturating_mul(self.0)
    }

    /// Whole seconds covered by `ticks`.
    #[inline]
    pub const fn whole_seconds(self, ticks: u32) -> u32 {
        ticks / self.0
    }
}

impl Default for TickRate {
    fn default() -> Self {
        Self(crate::DEFAULT_TICKS_PER_SECOND)
    }
}
