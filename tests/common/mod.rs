//! Shared test infrastructure for intervalometer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use intervalometer::{
    Backlight, CharBarGraph, CharDisplay, Intervalometer, IntervalometerConfig, Peripherals,
    ShutterTrigger, TickSource,
};

// ============================================================================
// Mock Display
// ============================================================================

/// Mock 16x2 character display keeping a grid of what is shown
pub struct MockDisplay {
    grid: [[char; 16]; 2],
    column: usize,
    row: usize,
    out_of_bounds_writes: usize,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            grid: [[' '; 16]; 2],
            column: 0,
            row: 0,
            out_of_bounds_writes: 0,
        }
    }

    /// Returns the given row as a string
    pub fn row(&self, row: usize) -> heapless::String<64> {
        self.grid[row].iter().copied().collect()
    }

    /// Number of characters written past the right or bottom edge
    pub fn out_of_bounds_writes(&self) -> usize {
        self.out_of_bounds_writes
    }
}

impl CharDisplay for MockDisplay {
    fn set_cursor(&mut self, column: u8, row: u8) {
        self.column = column as usize;
        self.row = row as usize;
    }

    fn write_char(&mut self, c: char) {
        if self.row < 2 && self.column < 16 {
            self.grid[self.row][self.column] = c;
        } else {
            self.out_of_bounds_writes += 1;
        }
        self.column += 1;
    }
}

// ============================================================================
// Mock Backlight
// ============================================================================

/// Mock backlight that records every level written
pub struct MockBacklight {
    history: heapless::Vec<u8, 64>,
}

impl MockBacklight {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
        }
    }

    pub fn last_level(&self) -> Option<u8> {
        self.history.last().copied()
    }

    pub fn history(&self) -> &[u8] {
        &self.history
    }
}

impl Backlight for MockBacklight {
    fn set_level(&mut self, level: u8) {
        let _ = self.history.push(level);
    }
}

// ============================================================================
// Mock Shutter
// ============================================================================

/// Mock focus/shoot sequencer counting triggers
pub struct MockShutter {
    delay_ms: u16,
    triggers: u32,
}

impl MockShutter {
    pub fn new(delay_ms: u16) -> Self {
        Self {
            delay_ms,
            triggers: 0,
        }
    }

    pub fn triggers(&self) -> u32 {
        self.triggers
    }
}

impl ShutterTrigger for MockShutter {
    fn trigger(&mut self) {
        self.triggers += 1;
    }

    fn delay_ms(&self) -> u16 {
        self.delay_ms
    }

    fn set_delay_ms(&mut self, delay_ms: u16) {
        self.delay_ms = delay_ms;
    }
}

// ============================================================================
// Mock Tick Source
// ============================================================================

/// Mock tick scheduler tracking registration
pub struct MockTicks {
    active: bool,
    activations: u32,
    deactivations: u32,
}

impl MockTicks {
    pub fn new() -> Self {
        Self {
            active: false,
            activations: 0,
            deactivations: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activations(&self) -> u32 {
        self.activations
    }

    pub fn deactivations(&self) -> u32 {
        self.deactivations
    }
}

impl TickSource for MockTicks {
    fn activate(&mut self) {
        self.active = true;
        self.activations += 1;
    }

    fn deactivate(&mut self) {
        self.active = false;
        self.deactivations += 1;
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestIntervalometer =
    Intervalometer<MockDisplay, CharBarGraph, MockBacklight, MockShutter, MockTicks>;

/// Default focus/shoot delay of the mock shutter
pub const MOCK_DELAY_MS: u16 = 50;

/// Ticks per second used by the test configurations
pub const TICKS_PER_SECOND: u32 = 10;

pub fn mock_peripherals() -> Peripherals<MockDisplay, CharBarGraph, MockBacklight, MockShutter, MockTicks>
{
    Peripherals {
        display: MockDisplay::new(),
        bar_graph: CharBarGraph::new(0, '#'),
        backlight: MockBacklight::new(),
        shutter: MockShutter::new(MOCK_DELAY_MS),
        ticks: MockTicks::new(),
    }
}

/// Builds and begins an intervalometer on mock hardware
pub fn intervalometer(shot_interval: u32, number_of_shots: u32) -> TestIntervalometer {
    let config = IntervalometerConfig::builder()
        .shot_interval(shot_interval)
        .number_of_shots(number_of_shots)
        .ticks_per_second(TICKS_PER_SECOND)
        .build()
        .unwrap();

    let mut intervalometer = Intervalometer::new(config, mock_peripherals());
    intervalometer.begin();
    intervalometer
}

/// Delivers `count` ticks
pub fn tick_n(intervalometer: &mut TestIntervalometer, count: u32) {
    for _ in 0..count {
        intervalometer.on_tick();
    }
}

pub fn top_row(intervalometer: &TestIntervalometer) -> heapless::String<64> {
    intervalometer.peripherals().display.row(0)
}

pub fn bottom_row(intervalometer: &TestIntervalometer) -> heapless::String<64> {
    intervalometer.peripherals().display.row(1)
}
