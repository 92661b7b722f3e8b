//! Shot countdown and sequencing state machine.
//!
//! The tick handler is a pure transition function returning the next state and
//! an ordered list of [`Effect`]s. The [`Intervalometer`](crate::Intervalometer)
//! performs the effects against the hardware ports.

use heapless::Vec;

/// The current state of a shot sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencerState {
    /// Not shooting. Ticks are ignored.
    #[default]
    Idle,
    /// Shooting.
    Shooting {
        /// Shots fired so far in this run.
        shot_number: u32,
        /// Ticks left until the next shot; zero fires on the next tick.
        countdown_ticks: u32,
    },
}

impl SequencerState {
    /// State right after starting: no shots yet, first tick fires.
    pub const STARTED: Self = SequencerState::Shooting {
        shot_number: 0,
        countdown_ticks: 0,
    };

    /// Returns true while shooting.
    pub fn is_shooting(&self) -> bool {
        matches!(self, SequencerState::Shooting { .. })
    }

    /// Shots fired so far, zero when idle.
    pub fn shot_number(&self) -> u32 {
        match self {
            SequencerState::Idle => 0,
            SequencerState::Shooting { shot_number, .. } => *shot_number,
        }
    }

    /// Ticks left until the next shot, zero when idle.
    pub fn countdown_ticks(&self) -> u32 {
        match self {
            SequencerState::Idle => 0,
            SequencerState::Shooting {
                countdown_ticks, ..
            } => *countdown_ticks,
        }
    }
}

/// Side effect requested by a tick, in the order it must be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Fire the focus-then-shutter sequence.
    TriggerShutter,
    /// Redraw the display showing this state. On a firing tick the
    /// countdown shown is zero, before it is reloaded or decremented.
    Redraw(SequencerState),
    /// The target count is reached; stop shooting.
    Stop,
}

/// Effects produced by one tick. At most trigger, redraw and stop.
pub type Effects = Vec<Effect, 3>;

/// Settings a tick needs to decide what to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Schedule {
    /// Ticks between shots, `shot_interval * ticks_per_second`.
    pub interval_ticks: u32,
    /// Shots to take, zero for unlimited.
    pub number_of_shots: u32,
}

/// Advances the sequencer by one tick.
///
/// When the countdown is zero a shot fires: the shot number is incremented,
/// the shutter triggered and the display redrawn with the countdown still at
/// zero. The run then either stops (target count reached) or reloads the
/// countdown to a full interval.
/// Otherwise the display is only redrawn. Finally a non-zero countdown is
/// decremented, so shots land exactly `interval_ticks` ticks apart.
///
/// On [`Effect::Stop`] the caller moves to `Idle` when it performs the stop.
pub fn transition(state: SequencerState, schedule: Schedule) -> (SequencerState, Effects) {
    let mut effects = Effects::new();

    let SequencerState::Shooting {
        mut shot_number,
        mut countdown_ticks,
    } = state
    else {
        return (state, effects);
    };

    // Capacity is three and at most three effects are pushed per tick.
    if countdown_ticks == 0 {
        shot_number = shot_number.saturating_add(1);
        let _ = effects.push(Effect::TriggerShutter);
        let _ = effects.push(Effect::Redraw(SequencerState::Shooting {
            shot_number,
            countdown_ticks: 0,
        }));

        if schedule.number_of_shots > 0 && shot_number >= schedule.number_of_shots {
            let _ = effects.push(Effect::Stop);
        } else {
            countdown_ticks = schedule.interval_ticks;
        }
    } else {
        let _ = effects.push(Effect::Redraw(state));
    }

    countdown_ticks = countdown_ticks.saturating_sub(1);

    (
        SequencerState::Shooting {
            shot_number,
            countdown_ticks,
        },
        effects,
    )
}

/// Holds the sequencer state between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShotSequencer {
    state: SequencerState,
}

impl ShotSequencer {
    /// Creates an idle sequencer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Returns true while shooting.
    pub fn is_shooting(&self) -> bool {
        self.state.is_shooting()
    }

    /// Starts a run from shot zero with the countdown expired.
    pub fn start(&mut self) {
        self.state = SequencerState::STARTED;
    }

    /// Returns to `Idle`, discarding the shot number. Idempotent.
    pub fn stop(&mut self) {
        self.state = SequencerState::Idle;
    }

    /// Applies one tick and returns the effects to perform.
    pub fn tick(&mut self, schedule: Schedule) -> Effects {
        let (state, effects) = transition(self.state, schedule);
        self.state = state;
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_SECOND: Schedule = Schedule {
        interval_ticks: 10,
        number_of_shots: 0,
    };

    #[test]
    fn idle_ignores_ticks() {
        let (state, effects) = transition(SequencerState::Idle, ONE_SECOND);
        assert_eq!(state, SequencerState::Idle);
        assert!(effects.is_empty());
    }

    #[test]
    fn first_tick_fires_and_reloads_countdown() {
        let (state, effects) = transition(SequencerState::STARTED, ONE_SECOND);
        let shown = SequencerState::Shooting {
            shot_number: 1,
            countdown_ticks: 0,
        };
        assert_eq!(&effects[..], &[Effect::TriggerShutter, Effect::Redraw(shown)]);
        assert_eq!(
            state,
            SequencerState::Shooting {
                shot_number: 1,
                countdown_ticks: 9,
            }
        );
    }

    #[test]
    fn counting_down_only_redraws() {
        let state = SequencerState::Shooting {
            shot_number: 1,
            countdown_ticks: 5,
        };
        let (next, effects) = transition(state, ONE_SECOND);
        assert_eq!(&effects[..], &[Effect::Redraw(state)]);
        let state = next;
        assert_eq!(state.countdown_ticks(), 4);
        assert_eq!(state.shot_number(), 1);
    }

    #[test]
    fn reaching_target_count_requests_stop() {
        let schedule = Schedule {
            interval_ticks: 10,
            number_of_shots: 2,
        };
        let state = SequencerState::Shooting {
            shot_number: 1,
            countdown_ticks: 0,
        };
        let (state, effects) = transition(state, schedule);
        let shown = SequencerState::Shooting {
            shot_number: 2,
            countdown_ticks: 0,
        };
        assert_eq!(
            &effects[..],
            &[Effect::TriggerShutter, Effect::Redraw(shown), Effect::Stop]
        );
        assert_eq!(state.shot_number(), 2);
        assert_eq!(state.countdown_ticks(), 0);
    }

    #[test]
    fn shots_land_interval_ticks_apart() {
        let mut sequencer = ShotSequencer::new();
        sequencer.start();

        let mut fired_on = [0u32; 3];
        let mut fired = 0;
        for tick in 1..=21 {
            if sequencer.tick(ONE_SECOND).contains(&Effect::TriggerShutter) {
                fired_on[fired] = tick;
                fired += 1;
            }
        }
        assert_eq!(fired_on, [1, 11, 21]);
    }

    #[test]
    fn countdown_stays_below_a_full_interval() {
        let mut sequencer = ShotSequencer::new();
        sequencer.start();
        for _ in 0..100 {
            sequencer.tick(ONE_SECOND);
            assert!(sequencer.state().countdown_ticks() < ONE_SECOND.interval_ticks);
        }
    }

    #[test]
    fn redraws_never_show_a_full_interval() {
        let mut sequencer = ShotSequencer::new();
        sequencer.start();
        for _ in 0..100 {
            for effect in sequencer.tick(ONE_SECOND).iter() {
                if let Effect::Redraw(shown) = effect {
                    assert!(shown.countdown_ticks() < ONE_SECOND.interval_ticks);
                }
            }
        }
    }

    #[test]
    fn stop_is_idempotent() {
        let mut sequencer = ShotSequencer::new();
        sequencer.stop();
        assert_eq!(sequencer.state(), SequencerState::Idle);
        sequencer.start();
        sequencer.stop();
        sequencer.stop();
        assert!(!sequencer.is_shooting());
        assert_eq!(sequencer.state().shot_number(), 0);
    }
}
