//! 4-digit 7-segment stopwatch / voltmeter logic.
//!
//! Everything here is hardware-independent so it can be unit tested on the
//! host; `main.rs` wires it to the RP2040.

#![cfg_attr(not(test), no_std)]

pub mod analog;
pub mod clock;
pub mod config;
pub mod controller;
pub mod display;
pub mod input;
pub mod segment;
pub mod shift_register;

pub use analog::{Millivolts, Potentiometer, VoltageSource};
pub use clock::{ClockState, RefreshFlag};
pub use controller::{Controller, Pass};
pub use display::{DigitIndex, Frame, Multiplexer, Reading};
pub use input::{Buttons, FallingEdge, InputSample, Mode};
pub use shift_register::ShiftRegister;
