//! Core types for menu navigation and configuration.

/// A user-editable setting selectable with up/down while idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuField {
    /// Seconds (or minutes) between shots.
    #[default]
    Interval,

    /// Delay between focus and shutter release.
    FocusShootDelay,

    /// Number of shots to take, zero meaning unlimited.
    NumberOfShots,

    /// Display backlight level.
    Backlight,
}

impl MenuField {
    /// All fields in menu order.
    pub const ALL: [MenuField; 4] = [
        MenuField::Interval,
        MenuField::FocusShootDelay,
        MenuField::NumberOfShots,
        MenuField::Backlight,
    ];

    fn position(self) -> usize {
        match self {
            MenuField::Interval => 0,
            MenuField::FocusShootDelay => 1,
            MenuField::NumberOfShots => 2,
            MenuField::Backlight => 3,
        }
    }

    /// The field after this one, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// The field before this one, wrapping around.
    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// How the time to the next shot is shown while shooting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountdownStyle {
    /// `MM:SS` text.
    #[default]
    Numeric,

    /// Proportional bar.
    Graphic,
}

impl CountdownStyle {
    /// Returns the other style.
    pub fn toggled(self) -> Self {
        match self {
            CountdownStyle::Numeric => CountdownStyle::Graphic,
            CountdownStyle::Graphic => CountdownStyle::Numeric,
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Interval (in seconds) is not a quantized value.
    UnquantizedInterval(u32),

    /// Focus/shoot delay exceeds 999 ms.
    DelayOutOfRange(u16),

    /// Tick rate of zero.
    ZeroTickRate,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::UnquantizedInterval(seconds) => {
                write!(
                    f,
                    "shot interval of {} s is not in the quantized interval set",
                    seconds
                )
            }
            ConfigError::DelayOutOfRange(delay_ms) => {
                write!(f, "focus/shoot delay of {} ms exceeds 999 ms", delay_ms)
            }
            ConfigError::ZeroTickRate => {
                write!(f, "tick rate must be at least one tick per second")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_are_inverse() {
        for field in MenuField::ALL {
            assert_eq!(field.next().previous(), field);
            assert_eq!(field.previous().next(), field);
        }
    }

    #[test]
    fn next_cycles_through_all_fields() {
        let mut field = MenuField::Interval;
        let mut visited = [MenuField::Interval; 4];
        for slot in visited.iter_mut() {
            *slot = field;
            field = field.next();
        }
        assert_eq!(visited, MenuField::ALL);
        assert_eq!(field, MenuField::Interval);
    }

    #[test]
    fn previous_from_interval_wraps_to_backlight() {
        assert_eq!(MenuField::Interval.previous(), MenuField::Backlight);
    }

    #[test]
    fn countdown_style_toggles_back_and_forth() {
        let style = CountdownStyle::Numeric;
        assert_eq!(style.toggled(), CountdownStyle::Graphic);
        assert_eq!(style.toggled().toggled(), style);
    }
}
