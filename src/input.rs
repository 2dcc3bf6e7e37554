//! Button sampling. Both buttons pull up, so a pressed button reads low.

use embedded_hal::digital::v2::InputPin;

/// What the display shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(not(test), derive(defmt::Format))]
pub enum Mode {
    /// MM:SS
    #[default]
    Time,
    /// D.DDD volts
    Voltage,
}

impl Mode {
    /// Voltage while the mode button is held.
    pub fn from_level(is_low: bool) -> Self {
        if is_low {
            Mode::Voltage
        } else {
            Mode::Time
        }
    }
}

/// Fires once per press: on the released -> pressed transition only.
#[derive(Debug)]
pub struct FallingEdge {
    was_low: bool,
}

impl Default for FallingEdge {
    fn default() -> Self {
        Self::new()
    }
}

impl FallingEdge {
    /// Starts as released.
    pub fn new() -> Self {
        Self { was_low: false }
    }

    pub fn update(&mut self, is_low: bool) -> bool {
        let fired = is_low && !self.was_low;
        self.was_low = is_low;
        fired
    }
}

/// One pass over both buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(test), derive(defmt::Format))]
pub struct InputSample {
    /// Reset was just pressed.
    pub reset: bool,
    pub mode: Mode,
}

/// Reset (edge-triggered) and mode (level-triggered) buttons.
pub struct Buttons<Reset, ModePin> {
    reset_pin: Reset,
    mode_pin: ModePin,
    reset_edge: FallingEdge,
}

impl<Reset, ModePin, E> Buttons<Reset, ModePin>
where
    Reset: InputPin<Error = E>,
    ModePin: InputPin<Error = E>,
{
    pub fn new(reset_pin: Reset, mode_pin: ModePin) -> Self {
        Self {
            reset_pin,
            mode_pin,
            reset_edge: FallingEdge::new(),
        }
    }

    pub fn sample(&mut self) -> Result<InputSample, E> {
        let reset = self.reset_edge.update(self.reset_pin.is_low()?);
        let mode = Mode::from_level(self.mode_pin.is_low()?);
        Ok(InputSample { reset, mode })
    }
}
