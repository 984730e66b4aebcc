use embedded_hal::pwm::SetDutyCycle;
use rp_pico::hal::pwm::{FreeRunning, Pwm5, Pwm6, Slice};

use crate::ports::StatusLed;

/// Common-cathode RGB LED
/// green: GPIO11 (slice 5, B)
/// blue: GPIO12 (slice 6, A)
/// red: GPIO13 (slice 6, B)
pub struct PwmStatusLed {
    green: Slice<Pwm5, FreeRunning>,
    red_blue: Slice<Pwm6, FreeRunning>,
}

impl PwmStatusLed {
    pub fn new(mut green: Slice<Pwm5, FreeRunning>, mut red_blue: Slice<Pwm6, FreeRunning>) -> Self {
        green.set_top(u16::MAX);
        red_blue.set_top(u16::MAX);
        green.enable();
        red_blue.enable();
        let mut led = Self { green, red_blue };
        led.set_levels([0; 3]);
        led
    }
}

impl StatusLed for PwmStatusLed {
    fn set_levels(&mut self, levels: [u16; 3]) {
        let [red, green, blue] = levels;
        let _ = self.red_blue.channel_b.set_duty_cycle(red);
        let _ = self.green.channel_b.set_duty_cycle(green);
        let _ = self.red_blue.channel_a.set_duty_cycle(blue);
    }
}
