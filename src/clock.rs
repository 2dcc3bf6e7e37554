use crate::config::CLOCK_WRAP_SECONDS;

/// Elapsed time shown as MM:SS, counting up to 99:59.
///
/// Written by the one-second timer task (`tick`) and by the reset button
/// (`reset`); read by the display loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(not(test), derive(defmt::Format))]
pub struct ClockState {
    seconds: u16,
}

impl ClockState {
    pub fn new(seconds: u16) -> Self {
        Self {
            seconds: seconds % CLOCK_WRAP_SECONDS,
        }
    }

    /// Increments the second. Wraps to 00:00 after 99:59.
    pub fn tick(&mut self) {
        self.seconds += 1;
        if self.seconds >= CLOCK_WRAP_SECONDS {
            self.seconds = 0;
        }
    }

    pub fn reset(&mut self) {
        self.seconds = 0;
    }

    pub fn total_seconds(&self) -> u16 {
        self.seconds
    }

    /// Always in `0..=99`.
    pub fn minutes(&self) -> u8 {
        (self.seconds / 60) as u8
    }

    /// Always in `0..=59`.
    pub fn secs(&self) -> u8 {
        (self.seconds % 60) as u8
    }
}

/// "Draw the next digit" request raised by the refresh timer.
///
/// Requests made while one is already pending collapse into one.
#[derive(Debug)]
pub struct RefreshFlag {
    pending: bool,
}

impl Default for RefreshFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshFlag {
    /// Starts pending so the first loop pass draws immediately.
    pub fn new() -> Self {
        Self { pending: true }
    }

    pub fn request(&mut self) {
        self.pending = true;
    }

    /// Returns whether a refresh was pending and clears it.
    pub fn take(&mut self) -> bool {
        core::mem::replace(&mut self.pending, false)
    }
}
