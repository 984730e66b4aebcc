use crate::matrix::{Grid, CLEAR};
use crate::menu::ToneRequest;
use crate::sensors::RawSamples;

/// Both analog channels, sampled once per cycle
pub trait AnalogInput {
    fn sample(&mut self) -> RawSamples;
}

/// A monochrome framebuffer. Nothing reaches the panel until `flush`.
pub trait Display {
    type Error;

    fn fill(&mut self, on: bool);
    fn draw_text(&mut self, text: &str, x: u8, y: u8);
    fn draw_pixel(&mut self, x: u8, y: u8, on: bool);
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// The 5x5 addressable matrix
pub trait LedMatrix {
    type Error;

    /// Transmits the whole grid in chain order
    fn show(&mut self, grid: &Grid) -> Result<(), Self::Error>;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.show(&CLEAR)
    }
}

/// Plays a tone, returning only once it has finished
pub trait Buzzer {
    fn play(&mut self, tone: ToneRequest);
}

/// RGB status LED, one PWM level (0..=65535) per channel
pub trait StatusLed {
    fn set_levels(&mut self, levels: [u16; 3]);
}

/// Receives one telemetry line at a time
pub trait TelemetrySink {
    fn emit(&mut self, line: &str);
}
