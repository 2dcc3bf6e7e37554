//! Bit-banged driver for two daisy-chained 74HC595 shift registers.

use embedded_hal::digital::v2::OutputPin;

use crate::display::Frame;

/// Three-wire (data/clock/latch) bus feeding the segment and digit-select
/// registers.
pub struct ShiftRegister<Data, Clock, Latch> {
    data: Data,
    clock: Clock,
    latch: Latch,
}

impl<Data, Clock, Latch, E> ShiftRegister<Data, Clock, Latch>
where
    Data: OutputPin<Error = E>,
    Clock: OutputPin<Error = E>,
    Latch: OutputPin<Error = E>,
{
    /// Takes the pins and parks the bus with clock and latch high.
    pub fn new(data: Data, clock: Clock, latch: Latch) -> Result<Self, E> {
        let mut bus = Self { data, clock, latch };
        bus.clock.set_high()?;
        bus.latch.set_high()?;
        Ok(bus)
    }

    /// Shift out `segments` then `select`, MSB first, and latch both bytes at
    /// once.
    pub fn emit(&mut self, segments: u8, select: u8) -> Result<(), E> {
        self.latch.set_low()?;
        self.shift_byte(segments)?;
        self.shift_byte(select)?;
        self.latch.set_high()
    }

    pub fn emit_frame(&mut self, frame: Frame) -> Result<(), E> {
        self.emit(frame.segments, frame.select)
    }

    /// Give the pins back.
    pub fn release(self) -> (Data, Clock, Latch) {
        (self.data, self.clock, self.latch)
    }

    fn shift_byte(&mut self, byte: u8) -> Result<(), E> {
        for bit in (0..8).rev() {
            if (byte >> bit) & 1 == 1 {
                self.data.set_high()?;
            } else {
                self.data.set_low()?;
            }
            // registers sample data on the rising edge
            self.clock.set_low()?;
            self.clock.set_high()?;
        }
        Ok(())
    }
}
