//! Editable settings, their stepping rules, and startup configuration.

use crate::ports::{Backlight, ShutterTrigger};
use crate::quantizer;
use crate::tick::TickRate;
use crate::types::{ConfigError, MenuField};

/// Largest focus/shoot delay the shutter collaborator accepts.
pub const MAX_FOCUS_SHOOT_DELAY_MS: u16 = 999;

/// Backlight change per step.
pub const BACKLIGHT_STEP: u8 = 15;

/// Next focus/shoot delay: steps of 1, 10 and 100 ms by decade.
pub fn next_delay(delay_ms: u16) -> u16 {
    let next = if delay_ms < 10 {
        delay_ms + 1
    } else if delay_ms < 100 {
        delay_ms + 10
    } else {
        delay_ms.saturating_add(100)
    };
    next.min(MAX_FOCUS_SHOOT_DELAY_MS)
}

/// Previous focus/shoot delay, undoing [`next_delay`] below the cap.
pub fn previous_delay(delay_ms: u16) -> u16 {
    if delay_ms > 100 {
        delay_ms - 100
    } else if delay_ms > 10 {
        delay_ms - 10
    } else {
        delay_ms.saturating_sub(1)
    }
}

/// Next shot count: steps of 1, 10, 100, then 1000 from 1000 upwards.
pub fn next_shot_count(shots: u32) -> u32 {
    let step = if shots < 10 {
        1
    } else if shots < 100 {
        10
    } else if shots < 1000 {
        100
    } else {
        1000
    };
    shots.saturating_add(step)
}

/// Previous shot count, saturating at zero (unlimited).
pub fn previous_shot_count(shots: u32) -> u32 {
    let step = if shots > 1000 {
        1000
    } else if shots > 100 {
        100
    } else if shots > 10 {
        10
    } else {
        1
    };
    shots.saturating_sub(step)
}

/// One backlight step brighter, saturating at 255.
pub fn brighter(level: u8) -> u8 {
    level.saturating_add(BACKLIGHT_STEP)
}

/// One backlight step dimmer, saturating at 0.
pub fn dimmer(level: u8) -> u8 {
    level.saturating_sub(BACKLIGHT_STEP)
}

/// Settings the intervalometer owns for the session.
///
/// The focus/shoot delay is not stored here; it lives in the
/// [`ShutterTrigger`] and is edited through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Seconds between shots, always a quantized value.
    pub shot_interval: u32,

    /// Shots to take before stopping, zero for unlimited.
    pub number_of_shots: u32,

    /// Backlight PWM level.
    pub backlight: u8,
}

/// Holds the settings and the selected menu field, and mediates all edits.
///
/// While locked (shooting), only the backlight can change.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    settings: Settings,
    selected: MenuField,
    locked: bool,
}

impl ParameterStore {
    /// Creates an unlocked store with `Interval` selected.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            selected: MenuField::Interval,
            locked: false,
        }
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Currently selected menu field.
    pub fn selected(&self) -> MenuField {
        self.selected
    }

    /// Returns true while edits other than backlight are refused.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Refuses edits other than backlight until [`unlock`](Self::unlock).
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Accepts all edits again.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Selects the next menu field. No-op while locked.
    pub fn select_next(&mut self) {
        if !self.locked {
            self.selected = self.selected.next();
        }
    }

    /// Selects the previous menu field. No-op while locked.
    pub fn select_previous(&mut self) {
        if !self.locked {
            self.selected = self.selected.previous();
        }
    }

    /// Steps the selected field up.
    pub fn increment_selected<S: ShutterTrigger, B: Backlight>(
        &mut self,
        shutter: &mut S,
        backlight: &mut B,
    ) {
        self.step_selected(Direction::Up, shutter, backlight);
    }

    /// Steps the selected field down.
    pub fn decrement_selected<S: ShutterTrigger, B: Backlight>(
        &mut self,
        shutter: &mut S,
        backlight: &mut B,
    ) {
        self.step_selected(Direction::Down, shutter, backlight);
    }

    fn step_selected<S: ShutterTrigger, B: Backlight>(
        &mut self,
        direction: Direction,
        shutter: &mut S,
        backlight: &mut B,
    ) {
        if self.selected == MenuField::Backlight {
            match direction {
                Direction::Up => self.increment_backlight(backlight),
                Direction::Down => self.decrement_backlight(backlight),
            }
            return;
        }

        if self.locked {
            return;
        }

        let settings = &mut self.settings;
        match (self.selected, direction) {
            (MenuField::Interval, Direction::Up) => {
                settings.shot_interval = quantizer::next_interval(settings.shot_interval);
            }
            (MenuField::Interval, Direction::Down) => {
                settings.shot_interval = quantizer::previous_interval(settings.shot_interval);
            }
            (MenuField::FocusShootDelay, Direction::Up) => {
                shutter.set_delay_ms(next_delay(shutter.delay_ms()));
            }
            (MenuField::FocusShootDelay, Direction::Down) => {
                shutter.set_delay_ms(previous_delay(shutter.delay_ms()));
            }
            (MenuField::NumberOfShots, Direction::Up) => {
                settings.number_of_shots = next_shot_count(settings.number_of_shots);
            }
            (MenuField::NumberOfShots, Direction::Down) => {
                settings.number_of_shots = previous_shot_count(settings.number_of_shots);
            }
            (MenuField::Backlight, _) => {}
        }
    }

    /// Raises the backlight one step and writes it out. Allowed while locked.
    pub fn increment_backlight<B: Backlight>(&mut self, backlight: &mut B) {
        self.settings.backlight = brighter(self.settings.backlight);
        backlight.set_level(self.settings.backlight);
    }

    /// Lowers the backlight one step and writes it out. Allowed while locked.
    pub fn decrement_backlight<B: Backlight>(&mut self, backlight: &mut B) {
        self.settings.backlight = dimmer(self.settings.backlight);
        backlight.set_level(self.settings.backlight);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// Validated startup configuration.
///
/// Build with [`IntervalometerConfig::builder`]; `Default` gives a one-second
/// interval, unlimited shots, full backlight and ten ticks per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntervalometerConfig {
    settings: Settings,
    focus_shoot_delay_ms: Option<u16>,
    tick_rate: TickRate,
}

impl IntervalometerConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Initial settings.
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Delay pushed to the shutter collaborator at startup, if any.
    pub fn focus_shoot_delay_ms(&self) -> Option<u16> {
        self.focus_shoot_delay_ms
    }

    /// Tick rate of the driving scheduler.
    pub fn tick_rate(&self) -> TickRate {
        self.tick_rate
    }
}

impl Default for IntervalometerConfig {
    fn default() -> Self {
        Self {
            settings: Settings {
                shot_interval: crate::DEFAULT_SHOT_INTERVAL,
                number_of_shots: 0,
                backlight: u8::MAX,
            },
            focus_shoot_delay_ms: None,
            tick_rate: TickRate::default(),
        }
    }
}

/// Builder for [`IntervalometerConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    shot_interval: u32,
    number_of_shots: u32,
    backlight: u8,
    focus_shoot_delay_ms: Option<u16>,
    ticks_per_second: u32,
}

impl ConfigBuilder {
    /// Creates a builder holding the defaults.
    pub fn new() -> Self {
        Self {
            shot_interval: crate::DEFAULT_SHOT_INTERVAL,
            number_of_shots: 0,
            backlight: u8::MAX,
            focus_shoot_delay_ms: None,
            ticks_per_second: crate::DEFAULT_TICKS_PER_SECOND,
        }
    }

    /// Sets the shot interval in seconds.
    pub fn shot_interval(mut self, seconds: u32) -> Self {
        self.shot_interval = seconds;
        self
    }

    /// Sets the number of shots, zero for unlimited.
    pub fn number_of_shots(mut self, shots: u32) -> Self {
        self.number_of_shots = shots;
        self
    }

    /// Sets the initial backlight level.
    pub fn backlight(mut self, level: u8) -> Self {
        self.backlight = level;
        self
    }

    /// Sets the focus/shoot delay written to the shutter at startup.
    pub fn focus_shoot_delay_ms(mut self, delay_ms: u16) -> Self {
        self.focus_shoot_delay_ms = Some(delay_ms);
        self
    }

    /// Sets the rate at which the tick source calls `on_tick`.
    pub fn ticks_per_second(mut self, ticks: u32) -> Self {
        self.ticks_per_second = ticks;
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    /// * `UnquantizedInterval` - Interval is neither a canonical seconds value
    ///   nor a canonical number of whole minutes
    /// * `DelayOutOfRange` - Delay above 999 ms
    /// * `ZeroTickRate` - Tick rate of zero
    pub fn build(self) -> Result<IntervalometerConfig, ConfigError> {
        if !quantizer::is_valid_interval(self.shot_interval) {
            return Err(ConfigError::UnquantizedInterval(self.shot_interval));
        }

        if let Some(delay_ms) = self.focus_shoot_delay_ms {
            if delay_ms > MAX_FOCUS_SHOOT_DELAY_MS {
                return Err(ConfigError::DelayOutOfRange(delay_ms));
            }
        }

        let tick_rate = TickRate::new(self.ticks_per_second).ok_or(ConfigError::ZeroTickRate)?;

        Ok(IntervalometerConfig {
            settings: Settings {
                shot_interval: self.shot_interval,
                number_of_shots: self.number_of_shots,
                backlight: self.backlight,
            },
            focus_shoot_delay_ms: self.focus_shoot_delay_ms,
            tick_rate,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
