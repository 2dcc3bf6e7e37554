//! Fixed board wiring and timing constants.
//!
//! Pin numbers refer to Raspberry Pi Pico GPIOs:
//!
//! | Signal          | GPIO |
//! |-----------------|------|
//! | shift data      | GP2  |
//! | shift clock     | GP3  |
//! | shift latch     | GP4  |
//! | reset button    | GP14 |
//! | mode button     | GP15 |
//! | potentiometer   | GP26 (ADC0) |

/// Pico crystal frequency.
pub const XTAL_FREQ_HZ: u32 = 12_000_000;

/// Period of the timekeeping alarm.
pub const SECOND_TICK_US: u32 = 1_000_000;

/// Period of the display refresh alarm. One digit is drawn per tick.
pub const REFRESH_TICK_US: u32 = 2_000;

/// The elapsed-seconds counter wraps here (99:59 -> 00:00).
pub const CLOCK_WRAP_SECONDS: u16 = 6000;

/// Full-scale voltage of the potentiometer.
pub const REFERENCE_VOLTS: f32 = 3.3;

/// Largest raw value reported by the 12-bit converter.
pub const ADC_FULL_SCALE: u16 = 4095;

/// Four display digits can show at most 9.999.
pub const MILLIVOLT_LIMIT: u16 = 9999;
