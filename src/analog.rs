//! Potentiometer voltage, scaled for a D.DDD readout.

use embedded_hal::adc::{Channel, OneShot};

use crate::config::{ADC_FULL_SCALE, MILLIVOLT_LIMIT, REFERENCE_VOLTS};

/// A voltage in millivolts, never above 9999.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(not(test), derive(defmt::Format))]
pub struct Millivolts(u16);

impl Millivolts {
    /// Scale a normalized reading by the reference voltage.
    ///
    /// Truncates to whole millivolts. Anything needing a fifth digit is
    /// clamped to 9999 and negative inputs read as zero.
    pub fn from_ratio(ratio: f32) -> Self {
        let volts = ratio * REFERENCE_VOLTS;
        // float -> int `as` saturates, so negatives and NaN become 0
        let millivolts = (volts * 1000.0) as u32;
        Self(millivolts.min(MILLIVOLT_LIMIT as u32) as u16)
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// Whole volts, `0..=9`.
    pub fn whole(self) -> u8 {
        (self.0 / 1000) as u8
    }

    /// Millivolts past the whole volt, `0..=999`.
    pub fn fraction(self) -> u16 {
        self.0 % 1000
    }
}

/// Something that can report the potentiometer voltage.
pub trait VoltageSource {
    type Error;

    fn read(&mut self) -> Result<Millivolts, Self::Error>;
}

/// Potentiometer wiper on an ADC channel.
pub struct Potentiometer<Adc, Pin> {
    adc: Adc,
    pin: Pin,
}

impl<Adc, Pin, E> Potentiometer<Adc, Pin>
where
    Adc: OneShot<Adc, u16, Pin, Error = E>,
    Pin: Channel<Adc>,
{
    pub fn new(adc: Adc, pin: Pin) -> Self {
        Self { adc, pin }
    }

    /// Wiper position in `0.0..=1.0` (blocks for one conversion).
    pub fn read_ratio(&mut self) -> Result<f32, E> {
        let raw: u16 = nb::block!(self.adc.read(&mut self.pin))?;
        Ok(raw as f32 / ADC_FULL_SCALE as f32)
    }
}

impl<Adc, Pin, E> VoltageSource for Potentiometer<Adc, Pin>
where
    Adc: OneShot<Adc, u16, Pin, Error = E>,
    Pin: Channel<Adc>,
{
    type Error = E;

    fn read(&mut self) -> Result<Millivolts, E> {
        self.read_ratio().map(Millivolts::from_ratio)
    }
}
