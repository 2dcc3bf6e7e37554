//! Digit multiplexing: which pattern goes to which position on each refresh.

use crate::analog::Millivolts;
use crate::clock::ClockState;
use crate::segment::{digit, with_dot, BLANK, DIGIT_SELECT};

pub const DIGIT_COUNT: u8 = 4;

/// Position of the digit being drawn, 0 (leftmost) to 3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(not(test), derive(defmt::Format))]
pub struct DigitIndex(u8);

impl DigitIndex {
    pub fn new(index: u8) -> Self {
        Self(index % DIGIT_COUNT)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn advance(&mut self) {
        self.0 = (self.0 + 1) % DIGIT_COUNT;
    }

    fn select(self) -> u8 {
        DIGIT_SELECT[self.0 as usize]
    }
}

/// The two bytes latched into the shift registers for one digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(test), derive(defmt::Format))]
pub struct Frame {
    pub segments: u8,
    pub select: u8,
}

impl Frame {
    /// Nothing lit, no digit selected.
    pub const BLANK: Frame = Frame {
        segments: BLANK,
        select: BLANK,
    };
}

/// What to show, already sampled for this refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    Time(ClockState),
    Voltage(Millivolts),
}

/// MM:SS with the colon lit on position 1.
pub fn time_frame(clock: &ClockState, index: DigitIndex) -> Frame {
    let minutes = clock.minutes();
    let seconds = clock.secs();
    let segments = match index.get() {
        0 => digit(minutes / 10),
        1 => with_dot(digit(minutes % 10)),
        2 => digit(seconds / 10),
        _ => digit(seconds % 10),
    };
    Frame {
        segments,
        select: index.select(),
    }
}

/// D.DDD with the decimal point lit on position 0.
pub fn voltage_frame(millivolts: Millivolts, index: DigitIndex) -> Frame {
    let fraction = millivolts.fraction();
    let segments = match index.get() {
        0 => with_dot(digit(millivolts.whole())),
        1 => digit((fraction / 100) as u8),
        2 => digit((fraction % 100 / 10) as u8),
        _ => digit((fraction % 10) as u8),
    };
    Frame {
        segments,
        select: index.select(),
    }
}

/// Round-robin over the four digits, one per refresh.
#[derive(Debug, Default)]
pub struct Multiplexer {
    index: DigitIndex,
}

impl Multiplexer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> DigitIndex {
        self.index
    }

    /// Frame for the current position. The position advances whatever the
    /// mode, so switching modes never skips or repeats a digit.
    pub fn next_frame(&mut self, reading: Reading) -> Frame {
        let frame = match reading {
            Reading::Time(clock) => time_frame(&clock, self.index),
            Reading::Voltage(millivolts) => voltage_frame(millivolts, self.index),
        };
        self.index.advance();
        frame
    }
}
