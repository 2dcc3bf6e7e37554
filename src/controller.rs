//! One pass of the main loop.
//!
//! Buttons are sampled on every pass. Drawing happens only when the refresh
//! timer has asked for it, one digit per request.

use embedded_hal::digital::v2::InputPin;
use rtic::Mutex;

use crate::analog::VoltageSource;
use crate::clock::{ClockState, RefreshFlag};
use crate::display::{Frame, Multiplexer, Reading};
use crate::input::{Buttons, Mode};

/// Outcome of a pass, for the caller to act on and log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pass {
    pub reset: bool,
    /// Set when the mode differs from the previous pass.
    pub mode_changed: Option<Mode>,
    /// Digit to latch, if a refresh was pending.
    pub frame: Option<Frame>,
}

/// Main-loop state: owned by the idle task only.
#[derive(Debug, Default)]
pub struct Controller {
    mode: Mode,
    mux: Multiplexer,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn poll<R, M, E, C, F, V>(
        &mut self,
        buttons: &mut Buttons<R, M>,
        clock: &mut C,
        refresh: &mut F,
        probe: &mut V,
    ) -> Result<Pass, E>
    where
        R: InputPin<Error = E>,
        M: InputPin<Error = E>,
        C: Mutex<T = ClockState>,
        F: Mutex<T = RefreshFlag>,
        V: VoltageSource,
    {
        let input = buttons.sample()?;
        if input.reset {
            clock.lock(|c| c.reset());
        }

        let mode_changed = (input.mode != self.mode).then_some(input.mode);
        self.mode = input.mode;

        let frame = if refresh.lock(|r| r.take()) {
            let reading = match self.mode {
                Mode::Time => Reading::Time(clock.lock(|c| *c)),
                // a failed conversion shows 0.000 for this digit
                Mode::Voltage => Reading::Voltage(probe.read().unwrap_or_default()),
            };
            Some(self.mux.next_frame(reading))
        } else {
            None
        };

        Ok(Pass {
            reset: input.reset,
            mode_changed,
            frame,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analog::Millivolts;
    use crate::segment::{DIGIT_SELECT, SEGMENT_MAP};
    use core::cell::Cell;
    use core::convert::Infallible;
    use rtic::Exclusive;
    use std::rc::Rc;

    #[derive(Clone)]
    struct MockPin {
        high: Rc<Cell<bool>>,
    }

    impl MockPin {
        fn released() -> Self {
            Self {
                high: Rc::new(Cell::new(true)),
            }
        }

        fn set_pressed(&self, pressed: bool) {
            self.high.set(!pressed);
        }
    }

    impl InputPin for MockPin {
        type Error = Infallible;

        fn is_high(&self) -> Result<bool, Infallible> {
            Ok(self.high.get())
        }

        fn is_low(&self) -> Result<bool, Infallible> {
            Ok(!self.high.get())
        }
    }

    /// Mock probe counting how often it was read
    struct MockProbe {
        reading: Result<Millivolts, ()>,
        reads: usize,
    }

    impl MockProbe {
        fn at(ratio: f32) -> Self {
            Self {
                reading: Ok(Millivolts::from_ratio(ratio)),
                reads: 0,
            }
        }
    }

    impl VoltageSource for MockProbe {
        type Error = ();

        fn read(&mut self) -> Result<Millivolts, ()> {
            self.reads += 1;
            self.reading
        }
    }

    struct Rig {
        controller: Controller,
        reset: MockPin,
        mode: MockPin,
        buttons: Buttons<MockPin, MockPin>,
        clock: ClockState,
        refresh: RefreshFlag,
        probe: MockProbe,
    }

    impl Rig {
        fn new() -> Self {
            let reset = MockPin::released();
            let mode = MockPin::released();
            let buttons = Buttons::new(reset.clone(), mode.clone());
            let mut refresh = RefreshFlag::new();
            refresh.take();
            Self {
                controller: Controller::new(),
                reset,
                mode,
                buttons,
                clock: ClockState::default(),
                refresh,
                probe: MockProbe::at(0.0),
            }
        }

        fn poll(&mut self) -> Pass {
            self.controller
                .poll(
                    &mut self.buttons,
                    &mut Exclusive(&mut self.clock),
                    &mut Exclusive(&mut self.refresh),
                    &mut self.probe,
                )
                .unwrap()
        }

        /// Refresh timer fires, then one loop pass
        fn refresh(&mut self) -> Frame {
            self.refresh.request();
            self.poll().frame.unwrap()
        }
    }

    #[test]
    fn test_no_frame_without_request() {
        let mut rig = Rig::new();
        for _ in 0..10 {
            assert_eq!(rig.poll().frame, None);
        }
    }

    #[test]
    fn test_first_pass_draws_immediately() {
        let mut rig = Rig::new();
        rig.refresh = RefreshFlag::new();
        let frame = rig.poll().frame.unwrap();
        assert_eq!(frame.segments, SEGMENT_MAP[0]);
        assert_eq!(frame.select, DIGIT_SELECT[0]);
    }

    #[test]
    fn test_one_digit_per_request() {
        let mut rig = Rig::new();
        rig.refresh.request();
        rig.refresh.request();
        assert!(rig.poll().frame.is_some());
        assert!(rig.poll().frame.is_none());
    }

    #[test]
    fn test_reset_without_refresh_pending() {
        let mut rig = Rig::new();
        rig.clock = ClockState::new(125);

        rig.reset.set_pressed(true);
        let pass = rig.poll();
        assert!(pass.reset);
        assert_eq!(pass.frame, None);
        assert_eq!(rig.clock.total_seconds(), 0);
    }

    #[test]
    fn test_reset_held_does_not_rezero() {
        let mut rig = Rig::new();
        rig.reset.set_pressed(true);
        assert!(rig.poll().reset);

        for _ in 0..5 {
            rig.clock.tick();
        }
        assert!(!rig.poll().reset);
        assert_eq!(rig.clock.total_seconds(), 5);
    }

    #[test]
    fn test_time_mode_shows_clock() {
        let mut rig = Rig::new();
        rig.clock = ClockState::new(125);
        rig.refresh(); // position 0
        let frame = rig.refresh();
        assert_eq!(frame.segments, SEGMENT_MAP[2] & 0x7F);
        assert_eq!(frame.select, DIGIT_SELECT[1]);
        assert_eq!(rig.probe.reads, 0);
    }

    #[test]
    fn test_voltage_mode_while_held() {
        let mut rig = Rig::new();
        rig.probe = MockProbe::at(1.0);
        rig.mode.set_pressed(true);

        let pass = rig.poll();
        assert_eq!(pass.mode_changed, Some(Mode::Voltage));
        assert_eq!(rig.controller.mode(), Mode::Voltage);

        let frame = rig.refresh();
        assert_eq!(frame.segments, SEGMENT_MAP[3] & 0x7F);
        assert_eq!(rig.probe.reads, 1);

        rig.mode.set_pressed(false);
        assert_eq!(rig.poll().mode_changed, Some(Mode::Time));
        assert_eq!(rig.poll().mode_changed, None);
    }

    #[test]
    fn test_mode_switch_keeps_rotation() {
        let mut rig = Rig::new();
        assert_eq!(rig.refresh().select, DIGIT_SELECT[0]);
        rig.mode.set_pressed(true);
        assert_eq!(rig.refresh().select, DIGIT_SELECT[1]);
        rig.mode.set_pressed(false);
        assert_eq!(rig.refresh().select, DIGIT_SELECT[2]);
        assert_eq!(rig.refresh().select, DIGIT_SELECT[3]);
        assert_eq!(rig.refresh().select, DIGIT_SELECT[0]);
    }

    #[test]
    fn test_failed_conversion_reads_zero() {
        let mut rig = Rig::new();
        rig.probe.reading = Err(());
        rig.mode.set_pressed(true);
        let frame = rig.refresh();
        assert_eq!(frame.segments, SEGMENT_MAP[0] & 0x7F);
        assert_eq!(rig.controller.mode(), Mode::Voltage);
    }

    #[test]
    fn test_clock_ticks_between_refreshes() {
        let mut rig = Rig::new();
        rig.clock = ClockState::new(59);
        // 00:59 -> 01:00 between positions 2 and 3
        rig.refresh();
        rig.refresh();
        assert_eq!(rig.refresh().segments, SEGMENT_MAP[5]);
        rig.clock.tick();
        assert_eq!(rig.refresh().segments, SEGMENT_MAP[0]);
    }
}
