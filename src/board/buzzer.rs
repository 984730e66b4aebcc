use embedded_hal::delay::DelayNs;
use embedded_hal::pwm::SetDutyCycle;
use rp_pico::hal::pwm::{FreeRunning, Pwm2, Slice};
use rp_pico::hal::Timer;

use crate::menu::ToneRequest;
use crate::ports::Buzzer;

/// Passive piezo on GPIO21 (PWM slice 2, channel B)
pub struct PwmBuzzer {
    slice: Slice<Pwm2, FreeRunning>,
    sys_clock_hz: u32,
    delay: Timer,
}

impl PwmBuzzer {
    pub fn new(mut slice: Slice<Pwm2, FreeRunning>, sys_clock_hz: u32, delay: Timer) -> Self {
        let _ = slice.channel_b.set_duty_cycle(0);
        slice.disable();
        Self {
            slice,
            sys_clock_hz,
            delay,
        }
    }
}

/// Integer divider and wrap value for a square wave
/// returns (divider, top)
pub fn pwm_settings(sys_clock_hz: u32, frequency_hz: u32) -> (u8, u16) {
    let frequency_hz = frequency_hz.max(1);
    let divider = (sys_clock_hz / frequency_hz.saturating_mul(65536) + 1).clamp(1, 255);
    let top = (sys_clock_hz / divider.saturating_mul(frequency_hz)).saturating_sub(1);
    (divider as u8, top.min(u16::MAX as u32) as u16)
}

impl Buzzer for PwmBuzzer {
    /// Blocks for the whole tone; button edges are still latched by the IRQ
    fn play(&mut self, tone: ToneRequest) {
        let (divider, top) = pwm_settings(self.sys_clock_hz, tone.frequency_hz);
        self.slice.set_div_int(divider);
        self.slice.set_div_frac(0);
        self.slice.set_top(top);
        let _ = self.slice.channel_b.set_duty_cycle(top / 2);
        self.slice.enable();

        self.delay.delay_ms(tone.duration_ms);

        self.slice.disable();
        let _ = self.slice.channel_b.set_duty_cycle(0);
    }
}
