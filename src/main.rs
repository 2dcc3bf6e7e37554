#![no_std]
#![no_main]

use {defmt_rtt as _, panic_probe as _};

use rtic::app;

#[app(device = rp_pico::hal::pac, peripherals = true)]
mod app {
    use defmt::info;
    use rp_pico::hal::{
        adc::{Adc, AdcPin},
        clocks::init_clocks_and_plls,
        fugit::ExtU32,
        gpio::{
            bank0::{Gpio14, Gpio15, Gpio2, Gpio26, Gpio3, Gpio4},
            FunctionSio, Pin, PullDown, PullNone, PullUp, SioInput, SioOutput,
        },
        sio::Sio,
        timer::{Alarm, Alarm0, Alarm1, Timer},
        watchdog::Watchdog,
    };

    use segclock::config::{REFRESH_TICK_US, SECOND_TICK_US, XTAL_FREQ_HZ};
    use segclock::{
        Buttons, ClockState, Controller, Frame, Mode, Potentiometer, RefreshFlag, ShiftRegister,
    };

    type OutPin<G> = Pin<G, FunctionSio<SioOutput>, PullDown>;
    type ButtonPin<G> = Pin<G, FunctionSio<SioInput>, PullUp>;
    type Display = ShiftRegister<OutPin<Gpio2>, OutPin<Gpio3>, OutPin<Gpio4>>;
    type Pot = Potentiometer<Adc, AdcPin<Pin<Gpio26, FunctionSio<SioInput>, PullNone>>>;

    // Shared resources: each has one timer task writing it and idle reading it
    #[shared]
    struct Shared {
        clock: ClockState,
        refresh: RefreshFlag,
    }

    // Local resources (accessed by single tasks)
    #[local]
    struct Local {
        second_alarm: Alarm0,
        refresh_alarm: Alarm1,
        display: Display,
        buttons: Buttons<ButtonPin<Gpio14>, ButtonPin<Gpio15>>,
        pot: Pot,
        controller: Controller,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let clocks = init_clocks_and_plls(
            XTAL_FREQ_HZ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let mut second_alarm = timer.alarm_0().unwrap();
        second_alarm.schedule(SECOND_TICK_US.micros()).unwrap();
        second_alarm.enable_interrupt();

        let mut refresh_alarm = timer.alarm_1().unwrap();
        refresh_alarm.schedule(REFRESH_TICK_US.micros()).unwrap();
        refresh_alarm.enable_interrupt();

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let Ok(mut display) = ShiftRegister::new(
            pins.gpio2.into_push_pull_output(),
            pins.gpio3.into_push_pull_output(),
            pins.gpio4.into_push_pull_output(),
        );
        let Ok(()) = display.emit_frame(Frame::BLANK);

        let buttons = Buttons::new(
            pins.gpio14.into_pull_up_input(),
            pins.gpio15.into_pull_up_input(),
        );

        let adc = Adc::new(pac.ADC, &mut pac.RESETS);
        let wiper = AdcPin::new(pins.gpio26.into_floating_input()).ok().unwrap();
        let pot = Potentiometer::new(adc, wiper);

        info!(
            "segclock: shift data=GP2 clock=GP3 latch=GP4, reset=GP14 mode=GP15, pot=GP26"
        );
        info!(
            "segclock: tick every {=u32} us, refresh every {=u32} us",
            SECOND_TICK_US,
            REFRESH_TICK_US
        );

        (
            Shared {
                clock: ClockState::default(),
                refresh: RefreshFlag::new(),
            },
            Local {
                second_alarm,
                refresh_alarm,
                display,
                buttons,
                pot,
                controller: Controller::new(),
            },
            init::Monotonics(),
        )
    }

    // Main loop: poll buttons every pass, draw one digit per refresh request
    #[idle(shared = [clock, refresh], local = [display, buttons, pot, controller])]
    fn idle(mut ctx: idle::Context) -> ! {
        let display = ctx.local.display;
        let buttons = ctx.local.buttons;
        let pot = ctx.local.pot;
        let controller = ctx.local.controller;

        loop {
            let Ok(pass) =
                controller.poll(buttons, &mut ctx.shared.clock, &mut ctx.shared.refresh, pot);

            if pass.reset {
                info!("reset pressed, clock cleared");
            }
            match pass.mode_changed {
                Some(Mode::Voltage) => info!("mode: voltage"),
                Some(Mode::Time) => info!("mode: time"),
                None => {}
            }
            if let Some(frame) = pass.frame {
                let Ok(()) = display.emit_frame(frame);
            }
        }
    }

    // Hardware Task: Timer Interrupt (1Hz)
    #[task(binds = TIMER_IRQ_0, priority = 1, shared = [clock], local = [second_alarm])]
    fn second_tick(mut ctx: second_tick::Context) {
        let alarm = ctx.local.second_alarm;
        alarm.clear_interrupt();
        alarm.schedule(SECOND_TICK_US.micros()).ok();

        ctx.shared.clock.lock(|c| c.tick());
    }

    // Hardware Task: Timer Interrupt (500Hz)
    #[task(binds = TIMER_IRQ_1, priority = 1, shared = [refresh], local = [refresh_alarm])]
    fn refresh_tick(mut ctx: refresh_tick::Context) {
        let alarm = ctx.local.refresh_alarm;
        alarm.clear_interrupt();
        alarm.schedule(REFRESH_TICK_US.micros()).ok();

        ctx.shared.refresh.lock(|r| r.request());
    }
}
