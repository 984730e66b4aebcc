use embedded_hal_0_2::adc::OneShot;
use rp_pico::hal::adc::{Adc, AdcPin};
use rp_pico::hal::gpio::bank0::{Gpio26, Gpio27};
use rp_pico::hal::gpio::{FunctionSio, Pin, PullNone, SioInput};

use crate::ports::AnalogInput;
use crate::sensors::RawSamples;

pub type TemperaturePin = AdcPin<Pin<Gpio26, FunctionSio<SioInput>, PullNone>>;
pub type HumidityPin = AdcPin<Pin<Gpio27, FunctionSio<SioInput>, PullNone>>;

/// The two potentiometer channels standing in for the hive probes
pub struct Potentiometers {
    adc: Adc,
    temperature: TemperaturePin,
    humidity: HumidityPin,
}

impl Potentiometers {
    pub fn new(adc: Adc, temperature: TemperaturePin, humidity: HumidityPin) -> Self {
        Self {
            adc,
            temperature,
            humidity,
        }
    }
}

impl AnalogInput for Potentiometers {
    fn sample(&mut self) -> RawSamples {
        // One-shot conversions on the RP2040 cannot fail
        let temperature: u16 = self.adc.read(&mut self.temperature).unwrap_or(0);
        let humidity: u16 = self.adc.read(&mut self.humidity).unwrap_or(0);
        RawSamples {
            temperature,
            humidity,
        }
    }
}
