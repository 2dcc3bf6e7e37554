//! 7-segment patterns for a common-anode display driven through 74HC595s.
//!
//! Bits are active low: a `0` lights the segment. Bit 7 is the decimal
//! point, which on the middle digit doubles as the colon.

/// Patterns for digits 0-9.
pub const SEGMENT_MAP: [u8; 10] = [0xC0, 0xF9, 0xA4, 0xB0, 0x99, 0x92, 0x82, 0xF8, 0x80, 0x90];

/// Digit-select patterns for positions 0-3 (left to right).
pub const DIGIT_SELECT: [u8; 4] = [0xF1, 0xF2, 0xF4, 0xF8];

/// Clearing bit 7 lights the decimal point / colon.
pub const DOT_MASK: u8 = 0x7F;

/// All segments off.
pub const BLANK: u8 = 0xFF;

/// Segment pattern for a decimal digit.
///
/// Callers derive `value` with `% 10` or `/ 10` on bounded quantities, so it
/// is always in `0..=9`.
pub fn digit(value: u8) -> u8 {
    debug_assert!(value < 10, "digit out of range: {}", value);
    SEGMENT_MAP[value as usize]
}

/// Force the decimal point / colon on.
pub const fn with_dot(pattern: u8) -> u8 {
    pattern & DOT_MASK
}
