//! Logical input events.

/// One of the five buttons of the intervalometer keypad.
///
/// Debouncing and key repeat are the caller's concern; each value is one
/// press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    /// Previous menu field, or toggle countdown style while shooting.
    Up,
    /// Next menu field, or toggle countdown style while shooting.
    Down,
    /// Decrement the selected field, or dim the backlight while shooting.
    Left,
    /// Increment the selected field, or brighten the backlight while shooting.
    Right,
    /// Start or stop shooting.
    Select,
}

impl Input {
    /// All inputs, in keypad order.
    pub const ALL: [Input; 5] = [Input::Up, Input::Down, Input::Left, Input::Right, Input::Select];
}
