//! Raspberry Pi Pico adapters for the monitor ports.
//!
//! | Function            | GPIO        |
//! |---------------------|-------------|
//! | Button A / B        | 5 / 6       |
//! | LED matrix (WS2812) | 7           |
//! | Status LED R/G/B    | 13 / 11 / 12|
//! | OLED SDA / SCL      | 14 / 15     |
//! | Buzzer              | 21          |
//! | ADC temp / humidity | 26 / 27     |

pub mod adc;
pub mod buzzer;
pub mod display;
pub mod status_led;

use crate::ports::TelemetrySink;

pub const OLED_ADDRESS: u8 = 0x3C;
pub const I2C_FREQ_KHZ: u32 = 400;

/// Telemetry over the defmt RTT channel
pub struct DefmtTelemetry;

impl TelemetrySink for DefmtTelemetry {
    fn emit(&mut self, line: &str) {
        defmt::println!("{=str}", line);
    }
}
