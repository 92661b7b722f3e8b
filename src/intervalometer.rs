//! Intervalometer device controller.
//!
//! Provides [`Intervalometer`], which owns the hardware ports, dispatches the
//! five keypad inputs, drives the shot sequencer from the periodic tick and
//! redraws the display after every change.

use crate::display::{self, Frame};
use crate::fmt::{debug, trace};
use crate::input::Input;
use crate::ports::{Backlight, BarGraph, CharDisplay, ShutterTrigger};
use crate::sequencer::{Effect, Schedule, SequencerState, ShotSequencer};
use crate::settings::{IntervalometerConfig, ParameterStore, Settings};
use crate::tick::{TickRate, TickSource};
use crate::types::{CountdownStyle, MenuField};

/// The hardware an [`Intervalometer`] drives.
#[derive(Debug)]
pub struct Peripherals<D, G, B, S, T> {
    /// Character display.
    pub display: D,
    /// Bar graph drawn on the display.
    pub bar_graph: G,
    /// Backlight PWM output.
    pub backlight: B,
    /// Focus-then-shutter sequencer.
    pub shutter: S,
    /// Periodic tick scheduler.
    pub ticks: T,
}

/// Controls one camera through a menu-configured shot schedule.
///
/// Call [`on_tick`](Self::on_tick) from the tick source while it is active and
/// [`handle_input`](Self::handle_input) for each debounced key press, from the
/// same execution context.
///
/// # Type Parameters
/// * `D` - Character display
/// * `G` - Bar graph
/// * `B` - Backlight output
/// * `S` - Shutter trigger
/// * `T` - Tick source
pub struct Intervalometer<D, G, B, S, T>
where
    D: CharDisplay,
    G: BarGraph,
    B: Backlight,
    S: ShutterTrigger,
    T: TickSource,
{
    hw: Peripherals<D, G, B, S, T>,
    store: ParameterStore,
    sequencer: ShotSequencer,
    countdown_style: CountdownStyle,
    tick_rate: TickRate,
    initial_delay_ms: Option<u16>,
}

impl<D, G, B, S, T> Intervalometer<D, G, B, S, T>
where
    D: CharDisplay,
    G: BarGraph,
    B: Backlight,
    S: ShutterTrigger,
    T: TickSource,
{
    /// Creates an idle intervalometer. Hardware is untouched until
    /// [`begin`](Self::begin).
    pub fn new(config: IntervalometerConfig, hw: Peripherals<D, G, B, S, T>) -> Self {
        Self {
            hw,
            store: ParameterStore::new(config.settings()),
            sequencer: ShotSequencer::new(),
            countdown_style: CountdownStyle::default(),
            tick_rate: config.tick_rate(),
            initial_delay_ms: config.focus_shoot_delay_ms(),
        }
    }

    /// Applies the configured backlight and delay, then draws the first frame.
    pub fn begin(&mut self) {
        let level = self.store.settings().backlight;
        self.hw.backlight.set_level(level);

        if let Some(delay_ms) = self.initial_delay_ms {
            self.hw.shutter.set_delay_ms(delay_ms);
        }

        debug!(
            "intervalometer ready: interval {}s, backlight {}",
            self.store.settings().shot_interval,
            level
        );
        self.redraw();
    }

    /// Dispatches a key press.
    pub fn handle_input(&mut self, input: Input) {
        match input {
            Input::Up => self.up(),
            Input::Down => self.down(),
            Input::Left => self.left(),
            Input::Right => self.right(),
            Input::Select => self.select(),
        }
    }

    /// Selects the previous menu field, or toggles the countdown style while
    /// shooting.
    pub fn up(&mut self) {
        if self.is_shooting() {
            self.toggle_countdown_style();
        } else {
            self.store.select_previous();
        }
        self.redraw();
    }

    /// Selects the next menu field, or toggles the countdown style while
    /// shooting.
    pub fn down(&mut self) {
        if self.is_shooting() {
            self.toggle_countdown_style();
        } else {
            self.store.select_next();
        }
        self.redraw();
    }

    /// Decrements the selected field, or dims the backlight while shooting.
    pub fn left(&mut self) {
        if self.is_shooting() {
            self.store.decrement_backlight(&mut self.hw.backlight);
        } else {
            self.store
                .decrement_selected(&mut self.hw.shutter, &mut self.hw.backlight);
            self.redraw();
        }
    }

    /// Increments the selected field, or brightens the backlight while
    /// shooting.
    pub fn right(&mut self) {
        if self.is_shooting() {
            self.store.increment_backlight(&mut self.hw.backlight);
        } else {
            self.store
                .increment_selected(&mut self.hw.shutter, &mut self.hw.backlight);
            self.redraw();
        }
    }

    /// Starts or stops shooting.
    pub fn select(&mut self) {
        if self.is_shooting() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Starts a run. The first shot fires on the next tick. No-op while
    /// already shooting.
    pub fn start(&mut self) {
        if self.is_shooting() {
            return;
        }

        self.hw.ticks.activate();
        self.sequencer.start();
        self.store.lock();
        debug!(
            "shooting started: every {}s, {} shots",
            self.store.settings().shot_interval,
            self.store.settings().number_of_shots
        );
        self.redraw();
    }

    /// Stops the run and returns to the menu. No-op when idle.
    pub fn stop(&mut self) {
        if !self.is_shooting() {
            return;
        }

        debug!("shooting stopped after {} shots", self.shot_number());
        self.hw.ticks.deactivate();
        self.sequencer.stop();
        self.store.unlock();
        self.redraw();
    }

    /// Advances the countdown by one tick, firing a shot when it expires.
    pub fn on_tick(&mut self) {
        let effects = self.sequencer.tick(self.schedule());

        for effect in effects {
            match effect {
                Effect::TriggerShutter => {
                    trace!("shot {}", self.shot_number());
                    self.hw.shutter.trigger();
                }
                Effect::Redraw(shown) => self.redraw_showing(shown),
                Effect::Stop => {
                    debug!("target of {} shots reached", self.shot_number());
                    self.stop();
                }
            }
        }
    }

    /// Captures what the display should currently show.
    pub fn frame(&self) -> Frame {
        self.frame_showing(self.sequencer.state())
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &Settings {
        self.store.settings()
    }

    /// Returns the selected menu field.
    pub fn selected_field(&self) -> MenuField {
        self.store.selected()
    }

    /// Returns the countdown display style.
    pub fn countdown_style(&self) -> CountdownStyle {
        self.countdown_style
    }

    /// Returns the sequencer state.
    pub fn state(&self) -> SequencerState {
        self.sequencer.state()
    }

    /// Returns true while shooting.
    pub fn is_shooting(&self) -> bool {
        self.sequencer.is_shooting()
    }

    /// Returns the shots fired in the current run.
    pub fn shot_number(&self) -> u32 {
        self.sequencer.state().shot_number()
    }

    /// Returns the ticks left until the next shot.
    pub fn countdown_ticks(&self) -> u32 {
        self.sequencer.state().countdown_ticks()
    }

    /// Returns the tick rate.
    pub fn tick_rate(&self) -> TickRate {
        self.tick_rate
    }

    /// Returns a reference to the hardware.
    pub fn peripherals(&self) -> &Peripherals<D, G, B, S, T> {
        &self.hw
    }

    /// Stops shooting and gives the hardware back.
    pub fn release(mut self) -> Peripherals<D, G, B, S, T> {
        self.stop();
        self.hw
    }

    fn schedule(&self) -> Schedule {
        let settings = self.store.settings();
        Schedule {
            interval_ticks: self.tick_rate.ticks_for(settings.shot_interval),
            number_of_shots: settings.number_of_shots,
        }
    }

    fn toggle_countdown_style(&mut self) {
        self.countdown_style = self.countdown_style.toggled();
    }

    fn frame_showing(&self, sequencer: SequencerState) -> Frame {
        Frame {
            settings: *self.store.settings(),
            focus_shoot_delay_ms: self.hw.shutter.delay_ms(),
            selected: self.store.selected(),
            sequencer,
            countdown_style: self.countdown_style,
            tick_rate: self.tick_rate,
        }
    }

    fn redraw(&mut self) {
        self.redraw_showing(self.sequencer.state());
    }

    fn redraw_showing(&mut self, sequencer: SequencerState) {
        let frame = self.frame_showing(sequencer);
        display::render(&mut self.hw.display, &mut self.hw.bar_graph, &frame);
    }
}
