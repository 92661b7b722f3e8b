//! Two-row status rendering.
//!
//! [`render`] draws a [`Frame`] onto a 16x2 character display. The top row
//! shows the menu while idle, or the countdown and shots fired while shooting.
//! The bottom row always shows the interval and the configured shot count.

use core::fmt::Write as _;

use heapless::String;

use crate::ports::{BarGraph, CharDisplay};
use crate::sequencer::SequencerState;
use crate::settings::Settings;
use crate::tick::TickRate;
use crate::types::{CountdownStyle, MenuField};

/// Display width in characters.
pub const COLUMNS: u8 = 16;

/// Width of the shot counter fields.
pub const COUNTER_WIDTH: usize = 5;

/// Largest value a counter field can show.
const COUNTER_MAX: u32 = 99_999;

/// Columns of the countdown on the top row while shooting.
const COUNTDOWN_COLUMNS: (u8, u8) = (0, 4);

/// Columns of the backlight bar on the top row while idle.
const BACKLIGHT_COLUMNS: (u8, u8) = (9, 15);

/// Everything the renderer needs, captured at the time of drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Interval, shot count and backlight level.
    pub settings: Settings,
    /// Focus to shutter delay read back from the shutter.
    pub focus_shoot_delay_ms: u16,
    /// Menu field shown on the top row while idle.
    pub selected: MenuField,
    /// Shot number and countdown to show while shooting.
    pub sequencer: SequencerState,
    /// How the countdown is drawn.
    pub countdown_style: CountdownStyle,
    /// Converts countdown ticks to seconds.
    pub tick_rate: TickRate,
}

/// Formats a shot counter right-justified over five columns, or `-----` for
/// zero. Values beyond five digits show as `99999`.
pub fn counter_field(value: u32) -> String<COUNTER_WIDTH> {
    let mut field = String::new();
    if value == 0 {
        let _ = field.push_str("-----");
    } else {
        let _ = write!(field, "{:>5}", value.min(COUNTER_MAX));
    }
    field
}

/// Formats a countdown as `MM:SS`.
pub fn countdown_field(seconds: u32) -> String<5> {
    let mut field = String::new();
    // Intervals top out at 60 minutes, so minutes never exceed two digits.
    let _ = write!(field, "{:02}:{:02}", (seconds / 60).min(99), seconds % 60);
    field
}

/// Formats the shot interval as two right-justified digits plus `M` or `S`.
pub fn interval_field(seconds: u32) -> String<3> {
    let mut field = String::new();
    if seconds >= 60 {
        let _ = write!(field, "{:>2}M", seconds / 60);
    } else {
        let _ = write!(field, "{:>2}S", seconds);
    }
    field
}

/// Formats the focus/shoot delay line, e.g. `FS Delay:  50 ms`.
pub fn delay_line(delay_ms: u16) -> String<{ COLUMNS as usize }> {
    let mut line = String::new();
    let _ = write!(line, "FS Delay: {:>3} ms", delay_ms);
    line
}

/// Returns true if the numeric countdown is shown.
///
/// One-second intervals always use the bar: a whole-second countdown would
/// read `00:00` throughout.
pub fn shows_numeric_countdown(style: CountdownStyle, shot_interval: u32) -> bool {
    style == CountdownStyle::Numeric && shot_interval > 1
}

/// Draws `frame` onto the display.
pub fn render<D, G>(display: &mut D, graph: &mut G, frame: &Frame)
where
    D: CharDisplay + ?Sized,
    G: BarGraph,
{
    render_top_row(display, graph, frame);
    render_bottom_row(display, &frame.settings);
}

fn render_top_row<D, G>(display: &mut D, graph: &mut G, frame: &Frame)
where
    D: CharDisplay + ?Sized,
    G: BarGraph,
{
    display.set_cursor(0, 0);

    if let SequencerState::Shooting {
        shot_number,
        countdown_ticks,
    } = frame.sequencer
    {
        let interval = frame.settings.shot_interval;
        if shows_numeric_countdown(frame.countdown_style, interval) {
            let seconds = frame.tick_rate.whole_seconds(countdown_ticks);
            display.write_str(&countdown_field(seconds));
        } else {
            graph.set_columns(COUNTDOWN_COLUMNS.0, COUNTDOWN_COLUMNS.1);
            graph.set_range(0, frame.tick_rate.ticks_for(interval).saturating_sub(1));
            graph.render(display, countdown_ticks);
        }

        display.set_cursor(COUNTDOWN_COLUMNS.1 + 1, 0);
        display.write_str(" shot:");
        display.write_str(&counter_field(shot_number % 10_000));
        return;
    }

    match frame.selected {
        MenuField::Interval => display.write_str("shot interval   "),
        MenuField::FocusShootDelay => display.write_str(&delay_line(frame.focus_shoot_delay_ms)),
        MenuField::NumberOfShots => display.write_str("number of shots "),
        MenuField::Backlight => {
            display.write_str("backlight");
            graph.set_columns(BACKLIGHT_COLUMNS.0, BACKLIGHT_COLUMNS.1);
            graph.set_range(0, u8::MAX as u32);
            graph.render(display, frame.settings.backlight as u32);
        }
    }
}

fn render_bottom_row<D>(display: &mut D, settings: &Settings)
where
    D: CharDisplay + ?Sized,
{
    display.set_cursor(0, 1);
    display.write_str(&interval_field(settings.shot_interval));
    display.write_str("  shots:");
    display.write_str(&counter_field(settings.number_of_shots));
}

/// A [`BarGraph`] drawing with one full-cell character on a single row.
///
/// Filled cells use `fill`, the rest of the span is cleared with spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharBarGraph {
    row: u8,
    fill: char,
    start: u8,
    end: u8,
    min: u32,
    max: u32,
}

impl CharBarGraph {
    /// Creates a graph on `row` drawing filled cells with `fill`.
    pub fn new(row: u8, fill: char) -> Self {
        Self {
            row,
            fill,
            start: 0,
            end: 0,
            min: 0,
            max: 0,
        }
    }

    /// Number of filled cells for `value`, rounded to the nearest cell.
    pub fn filled_cells(&self, value: u32) -> u8 {
        let width = self.width() as u64;
        if self.max <= self.min {
            return if value >= self.max { width as u8 } else { 0 };
        }

        let span = (self.max - self.min) as u64;
        let offset = (value.clamp(self.min, self.max) - self.min) as u64;
        ((offset * width * 2 + span) / (span * 2)) as u8
    }

    fn width(&self) -> u8 {
        self.end.saturating_sub(self.start) + 1
    }
}

impl BarGraph for CharBarGraph {
    fn set_columns(&mut self, start: u8, end: u8) {
        self.start = start.min(end);
        self.end = start.max(end);
    }

    fn set_range(&mut self, min: u32, max: u32) {
        self.min = min;
        self.max = max;
    }

    fn render<D: CharDisplay + ?Sized>(&mut self, display: &mut D, value: u32) {
        let filled = self.filled_cells(value);
        display.set_cursor(self.start, self.row);
        for cell in 0..self.width() {
            display.write_char(if cell < filled { self.fill } else { ' ' });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_counters_render_as_dashes() {
        assert_eq!(counter_field(0).as_str(), "-----");
    }

    #[test]
    fn counters_are_right_justified() {
        assert_eq!(counter_field(1).as_str(), "    1");
        assert_eq!(counter_field(42).as_str(), "   42");
        assert_eq!(counter_field(9999).as_str(), " 9999");
        assert_eq!(counter_field(12345).as_str(), "12345");
        assert_eq!(counter_field(1_000_000).as_str(), "99999");
    }

    #[test]
    fn countdown_pads_minutes_and_seconds() {
        assert_eq!(countdown_field(0).as_str(), "00:00");
        assert_eq!(countdown_field(9).as_str(), "00:09");
        assert_eq!(countdown_field(125).as_str(), "02:05");
        assert_eq!(countdown_field(3599).as_str(), "59:59");
    }

    #[test]
    fn interval_switches_unit_at_one_minute() {
        assert_eq!(interval_field(1).as_str(), " 1S");
        assert_eq!(interval_field(40).as_str(), "40S");
        assert_eq!(interval_field(60).as_str(), " 1M");
        assert_eq!(interval_field(3600).as_str(), "60M");
    }

    #[test]
    fn delay_line_fills_the_row() {
        assert_eq!(delay_line(0).as_str(), "FS Delay:   0 ms");
        assert_eq!(delay_line(50).as_str(), "FS Delay:  50 ms");
        assert_eq!(delay_line(999).as_str(), "FS Delay: 999 ms");
    }

    #[test]
    fn one_second_interval_forces_graphic_countdown() {
        assert!(!shows_numeric_countdown(CountdownStyle::Numeric, 1));
        assert!(shows_numeric_countdown(CountdownStyle::Numeric, 2));
        assert!(!shows_numeric_countdown(CountdownStyle::Graphic, 60));
    }

    #[test]
    fn bar_fill_is_proportional() {
        let mut graph = CharBarGraph::new(0, '#');
        graph.set_columns(9, 15);
        graph.set_range(0, 255);
        assert_eq!(graph.filled_cells(0), 0);
        assert_eq!(graph.filled_cells(255), 7);
        assert_eq!(graph.filled_cells(128), 4);
        assert_eq!(graph.filled_cells(1000), 7);
    }

    #[test]
    fn bar_with_empty_range_is_full_at_max() {
        let mut graph = CharBarGraph::new(0, '#');
        graph.set_columns(0, 4);
        graph.set_range(0, 0);
        assert_eq!(graph.filled_cells(0), 5);
    }
}
