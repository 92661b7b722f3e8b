#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Intervalometer`**: Owns the hardware, dispatches key presses and drives shots from the tick
//! - **`Input`**: The five keypad events (`Up`, `Down`, `Left`, `Right`, `Select`)
//! - **`IntervalometerConfig`**: Validated startup settings, built with `IntervalometerConfig::builder()`
//! - **`ParameterStore`**: The editable settings and selected `MenuField`, with their stepping rules
//! - **`ShotSequencer`**: Countdown state machine; `transition` is the pure tick function
//! - **`Frame`** / **`render`**: Snapshot of everything shown and the two-row renderer
//! - **`CharDisplay`**, **`BarGraph`**, **`Backlight`**, **`ShutterTrigger`**: Traits to implement for your hardware
//! - **`TickSource`**: Trait to implement for your periodic scheduler
//!
//! Shot intervals are whole seconds restricted to the quantized set in
//! [`quantizer::INTERVALS`], applied to minutes from one minute upwards.

mod fmt;

pub mod tick;
pub mod types;
pub mod quantizer;
pub mod ports;
pub mod settings;
pub mod sequencer;
pub mod display;
pub mod input;
pub mod intervalometer;

pub use display::{CharBarGraph, Frame, render};
pub use input::Input;
pub use intervalometer::{Intervalometer, Peripherals};
pub use ports::{Backlight, BarGraph, CharDisplay, ShutterTrigger};
pub use sequencer::{Effect, Effects, Schedule, SequencerState, ShotSequencer, transition};
pub use settings::{ConfigBuilder, IntervalometerConfig, ParameterStore, Settings};
pub use tick::{TickRate, TickSource};
pub use types::{ConfigError, CountdownStyle, MenuField};

/// Shot interval in seconds used when none is configured.
pub const DEFAULT_SHOT_INTERVAL: u32 = 1;

/// Tick rate used when none is configured.
pub const DEFAULT_TICKS_PER_SECOND: u32 = 10;
