#![no_std]
#![no_main]

use bsp::entry;
use core::cell::RefCell;
use critical_section::Mutex;
use defmt::*;
use defmt_rtt as _;
use embedded_hal::delay::DelayNs;
use panic_probe as _;
use rp_pico::hal::Timer;

// Provide an alias for our BSP so we can switch targets quickly.
// Uncomment the BSP you included in Cargo.toml, the rest of the code does not need to change.
use rp_pico as bsp;

use beesense::board::adc::Potentiometers;
use beesense::board::buzzer::PwmBuzzer;
use beesense::board::display::OledDisplay;
use beesense::board::status_led::PwmStatusLed;
use beesense::board::{DefmtTelemetry, I2C_FREQ_KHZ, OLED_ADDRESS};
use beesense::input::{ButtonLine, BUTTONS};
use beesense::matrix::LedChain;
use beesense::monitor::Monitor;
use beesense::ports::LedMatrix;
use beesense::preferences::Preferences;
use beesense::timer::LOOP_PERIOD_MS;
use bsp::hal::{
    clocks::{init_clocks_and_plls, Clock},
    pac,
    pac::interrupt,
    watchdog::Watchdog,
};
use rp_pico::hal;
use rp_pico::hal::adc::AdcPin;
use rp_pico::hal::fugit::RateExtU32;
use rp_pico::hal::gpio::bank0::{Gpio5, Gpio6};
use rp_pico::hal::gpio::{FunctionI2C, FunctionSio, Interrupt, Pin, PullUp, SioInput};
use rp_pico::hal::pio::PIOExt;
use ssd1306::I2CDisplayInterface;
use ws2812_pio::Ws2812Direct;

type ButtonA = Pin<Gpio5, FunctionSio<SioInput>, PullUp>;
type ButtonB = Pin<Gpio6, FunctionSio<SioInput>, PullUp>;

/// Owned by the GPIO interrupt once the main loop starts
struct ButtonPins {
    button_a: ButtonA,
    button_b: ButtonB,
    timer: Timer,
}

static BUTTON_PINS: Mutex<RefCell<Option<ButtonPins>>> = Mutex::new(RefCell::new(None));

#[entry]
fn main() -> ! {
    info!("BeeSense Starting");
    // Grab our singleton objects
    let mut pac = pac::Peripherals::take().unwrap();
    let _core = pac::CorePeripherals::take().unwrap();

    // Set up the watchdog driver - needed by the clock setup code
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure the clocks
    //
    // The default is to generate a 125 MHz system clock
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // The single-cycle I/O block controls our GPIO pins
    let sio = hal::Sio::new(pac.SIO);

    // Set the pins up according to their function on this particular board
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let mut delay = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    // Set up OLED
    let sda: Pin<_, FunctionI2C, PullUp> = pins.gpio14.reconfigure();
    let scl: Pin<_, FunctionI2C, PullUp> = pins.gpio15.reconfigure();
    let i2c = hal::I2C::i2c1(
        pac.I2C1,
        sda,
        scl,
        I2C_FREQ_KHZ.kHz(),
        &mut pac.RESETS,
        &clocks.system_clock,
    );
    let interface = I2CDisplayInterface::new_custom_address(i2c, OLED_ADDRESS);
    let mut display = OledDisplay::new(interface).ok().unwrap();

    // Set up potentiometers
    let adc = hal::Adc::new(pac.ADC, &mut pac.RESETS);
    let temperature = AdcPin::new(pins.gpio26.into_floating_input()).ok().unwrap();
    let humidity = AdcPin::new(pins.gpio27.into_floating_input()).ok().unwrap();
    let mut potentiometers = Potentiometers::new(adc, temperature, humidity);

    // Set up PWM outputs
    let pwm_slices = hal::pwm::Slices::new(pac.PWM, &mut pac.RESETS);

    let mut pwm2 = pwm_slices.pwm2;
    pwm2.channel_b.output_to(pins.gpio21);
    let mut buzzer = PwmBuzzer::new(pwm2, clocks.system_clock.freq().to_Hz(), delay);

    let mut pwm5 = pwm_slices.pwm5;
    let mut pwm6 = pwm_slices.pwm6;
    pwm5.channel_b.output_to(pins.gpio11);
    pwm6.channel_a.output_to(pins.gpio12);
    pwm6.channel_b.output_to(pins.gpio13);
    let mut status_led = PwmStatusLed::new(pwm5, pwm6);

    // Set up LED matrix
    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
    let ws2812 = Ws2812Direct::new(
        pins.gpio7.into_function(),
        &mut pio,
        sm0,
        clocks.peripheral_clock.freq(),
    );
    let mut led_matrix = LedChain::new(ws2812);
    if led_matrix.clear().is_err() {
        warn!("LED matrix did not clear");
    }

    // Set up buttons
    let button_a: ButtonA = pins.gpio5.into_pull_up_input();
    let button_b: ButtonB = pins.gpio6.into_pull_up_input();
    button_a.set_interrupt_enabled(Interrupt::EdgeLow, true);
    button_b.set_interrupt_enabled(Interrupt::EdgeLow, true);

    critical_section::with(|cs| {
        BUTTON_PINS.borrow(cs).replace(Some(ButtonPins {
            button_a,
            button_b,
            timer: delay,
        }));
    });

    // Safety: BUTTON_PINS is populated before the first interrupt can fire
    unsafe {
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
    }

    let mut monitor = Monitor::new(Preferences::default());
    let mut telemetry = DefmtTelemetry;

    info!("BeeSense Ready");

    loop {
        let presses = BUTTONS.drain();
        monitor.run_cycle(
            &presses,
            &mut potentiometers,
            &mut display,
            &mut led_matrix,
            &mut buzzer,
            &mut status_led,
            &mut telemetry,
        );

        delay.delay_ms(LOOP_PERIOD_MS);
    }
}

#[interrupt]
fn IO_IRQ_BANK0() {
    critical_section::with(|cs| {
        let mut pins = BUTTON_PINS.borrow_ref_mut(cs);
        let Some(pins) = pins.as_mut() else {
            return;
        };
        let now_ms = (pins.timer.get_counter().ticks() / 1000) as u32;

        if pins.button_a.interrupt_status(Interrupt::EdgeLow) {
            BUTTONS.on_falling_edge(ButtonLine::A, now_ms);
            pins.button_a.clear_interrupt(Interrupt::EdgeLow);
        }
        if pins.button_b.interrupt_status(Interrupt::EdgeLow) {
            BUTTONS.on_falling_edge(ButtonLine::B, now_ms);
            pins.button_b.clear_interrupt(Interrupt::EdgeLow);
        }
    });
}
