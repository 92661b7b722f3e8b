//! Hardware capability traits.
//!
//! Implement these for your display, PWM output and shutter circuitry to let
//! the [`Intervalometer`](crate::Intervalometer) drive them. None of the
//! operations can fail: handle hardware errors inside the implementation.

use core::fmt::Write as _;

/// Trait for abstracting a character display (e.g. an HD44780 LCD).
pub trait CharDisplay {
    /// Moves the cursor to `column` of `row`.
    fn set_cursor(&mut self, column: u8, row: u8);

    /// Writes a single character at the cursor and advances it.
    fn write_char(&mut self, c: char);

    /// Writes a string at the cursor.
    fn write_str(&mut self, s: &str) {
        for c in s.chars() {
            self.write_char(c);
        }
    }

    /// Writes an unsigned integer in decimal, without padding.
    fn write_u32(&mut self, value: u32) {
        let mut digits: heapless::String<10> = heapless::String::new();
        // u32::MAX has ten digits, the write cannot overflow the buffer.
        let _ = write!(digits, "{}", value);
        self.write_str(&digits);
    }
}

/// Trait for a horizontal bar graph drawn on part of a display row.
///
/// The graph draws onto the display it is handed, so it never needs to own or
/// share the display itself.
pub trait BarGraph {
    /// Sets the inclusive column span the bar occupies.
    fn set_columns(&mut self, start: u8, end: u8);

    /// Sets the value range mapped onto the column span.
    fn set_range(&mut self, min: u32, max: u32);

    /// Draws `value` as a proportional fill across the span.
    fn render<D: CharDisplay + ?Sized>(&mut self, display: &mut D, value: u32);
}

/// Trait for the PWM output behind the display backlight.
pub trait Backlight {
    /// Writes an 8-bit intensity.
    fn set_level(&mut self, level: u8);
}

/// Trait for the focus-then-shutter pulse sequencer.
pub trait ShutterTrigger {
    /// Fires the focus-then-shutter sequence.
    fn trigger(&mut self);

    /// Returns the delay between focus and shutter in milliseconds.
    fn delay_ms(&self) -> u16;

    /// Sets the delay between focus and shutter in milliseconds.
    ///
    /// Callers in this crate only pass values in `0..=999`.
    fn set_delay_ms(&mut self, delay_ms: u16);
}
