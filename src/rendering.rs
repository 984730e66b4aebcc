use heapless::{String, Vec};
use num_traits::float::FloatCore;
use ufmt::{uDisplay, uWrite, uwrite, Formatter};

use crate::matrix::{self, Pattern};
use crate::menu::{ControlState, SystemState};
use crate::ports::Display;
use crate::preferences::Variant;
use crate::sensors::{AuxSensors, Readings, LIGHT, VOC, WEIGHT};
use crate::species::species;

pub const LINE_LEN: usize = 24;
pub const MAX_LINES: usize = 8;

/// Top-left corner of the on-screen pattern and its cell pitch
pub const PATTERN_ORIGIN: (u8, u8) = (90, 30);
const CELL_PITCH: u8 = 5;
const CELL_SIZE: u8 = 4;

/// A line of text at a pixel position
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String<LINE_LEN>,
    pub x: u8,
    pub y: u8,
}

impl TextLine {
    pub fn new(x: u8, y: u8) -> Self {
        Self {
            text: String::new(),
            x,
            y,
        }
    }
}

/// Everything drawn on the display for one cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub lines: Vec<TextLine, MAX_LINES>,
    pub pattern: Option<Pattern>,
}

impl Frame {
    fn push(&mut self, line: TextLine) {
        let y = line.y;
        if self.lines.push(line).is_err() {
            log_warn!("frame full, dropped line at y={}", y);
        }
    }

    /// Adds a static line, truncated to LINE_LEN
    fn text(&mut self, text: &str, x: u8, y: u8) {
        let mut line = TextLine::new(x, y);
        for c in text.chars() {
            if line.text.push(c).is_err() {
                break;
            }
        }
        self.push(line);
    }
}

/// Formats a line into the frame. Text that overflows LINE_LEN is cut short.
macro_rules! text_line {
    ($frame:expr, ($x:expr, $y:expr), $($fmt:tt)*) => {{
        let mut line = TextLine::new($x, $y);
        let _ = uwrite!(line.text, $($fmt)*);
        $frame.push(line);
    }};
}

/// Formats a value with one decimal place, rounding half away from zero
pub struct OneDecimal(pub f32);

impl uDisplay for OneDecimal {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        let tenths = FloatCore::round(self.0 * 10.0) as i32;
        // Small negatives print as "-0.0", like printf
        if self.0 < 0.0 {
            f.write_str("-")?;
        }
        let tenths = tenths.unsigned_abs();
        uwrite!(f, "{}.{}", tenths / 10, tenths % 10)
    }
}

/// Builds the frame for the current state
/// param control: menu state
/// param readings: this cycle's converted readings
/// param sensors: auxiliary sensor table (after any commit)
/// param blink_on: phase of the blinking pattern
pub fn render_screen(
    control: &ControlState,
    readings: &Readings,
    sensors: &AuxSensors,
    blink_on: bool,
) -> Frame {
    let mut frame = Frame::default();
    match control.state {
        SystemState::Welcome => render_welcome(&mut frame),
        SystemState::Menu => {
            frame.text("Especie:", 0, 0);
            let record = species(control.species_index);
            text_line!(frame, (0, 20), "{}: {}", control.species_index + 1, record.name);
            render_hints(&mut frame);
        }
        SystemState::Config => {
            let sensor = sensors.get(control.sensor_index);
            text_line!(frame, (0, 0), "Sensor: {}", OneDecimal(readings.aux));
            text_line!(frame, (0, 20), "{}: {}", control.sensor_index + 1, sensor.name);
            render_hints(&mut frame);
        }
        SystemState::Confirm if control.simulation_mode == 1 => {
            render_species_details(&mut frame, control.species_index);
        }
        SystemState::Confirm => match control.variant() {
            Variant::SensorConfig => render_readings(&mut frame, control, readings, sensors),
            Variant::SimulationToggle => {
                render_summary(&mut frame, control, readings);
                frame.pattern = Some(if control.alarm_active {
                    matrix::filled(blink_on)
                } else {
                    matrix::diagonal()
                });
            }
        },
    }
    frame
}

fn render_welcome(frame: &mut Frame) {
    frame.text("   Bem-vindo   ", 3, 10);
    frame.text("-", 0, 15);
    frame.text("-", 119, 15);
    frame.text("   Bee Sense    ", 3, 20);
    frame.text("  Pressione A", 3, 40);
}

fn render_hints(frame: &mut Frame) {
    frame.text("A: Proximo", 0, 40);
    frame.text("B: Selecionar", 0, 50);
}

fn render_alarm(frame: &mut Frame, control: &ControlState, y: u8) {
    let state = if control.alarm_active { "ON" } else { "OFF" };
    text_line!(frame, (0, y), "Alarm: {}", state);
}

/// Live readings plus the committed auxiliary values
fn render_readings(frame: &mut Frame, control: &ControlState, readings: &Readings, sensors: &AuxSensors) {
    text_line!(frame, (0, 0), "Temp : {} C", OneDecimal(readings.temperature));
    text_line!(frame, (0, 10), "Umid : {} %", OneDecimal(readings.humidity));
    text_line!(frame, (0, 20), "Luz  : {} %", OneDecimal(sensors.value(LIGHT)));
    text_line!(frame, (0, 30), "VOC  : {} ppm", OneDecimal(sensors.value(VOC)));
    text_line!(frame, (0, 40), "Peso : {} Kg", OneDecimal(sensors.value(WEIGHT)));
    render_alarm(frame, control, 55);
}

fn render_summary(frame: &mut Frame, control: &ControlState, readings: &Readings) {
    text_line!(frame, (0, 0), "Temp: {} C", OneDecimal(readings.temperature));
    text_line!(frame, (0, 10), "Umid: {} %", OneDecimal(readings.humidity));
    render_alarm(frame, control, 20);
    text_line!(frame, (0, 30), "Mode : {}", control.simulation_mode);
}

fn render_species_details(frame: &mut Frame, index: usize) {
    let record = species(index);
    frame.text(">", 0, 0);
    frame.text(record.name, 15, 0);
    frame.text(record.genus, 0, 10);
    text_line!(frame, (0, 30), "Max: {} C", OneDecimal(record.max_temp));
    text_line!(frame, (0, 40), "Min: {} C", OneDecimal(record.min_temp));
    text_line!(frame, (0, 50), "Peso: {}", OneDecimal(record.annual_yield));
}

/// Draws a frame into the display buffer. Does not flush.
pub fn draw_frame<D: Display>(frame: &Frame, display: &mut D) {
    display.fill(false);
    for line in &frame.lines {
        display.draw_text(&line.text, line.x, line.y);
    }
    if let Some(pattern) = &frame.pattern {
        draw_pattern(pattern, PATTERN_ORIGIN, display);
    }
}

/// Each cell is a 4x4 block on a 5 pixel pitch
fn draw_pattern<D: Display>(pattern: &Pattern, origin: (u8, u8), display: &mut D) {
    for (row, cells) in pattern.iter().enumerate() {
        for (column, lit) in cells.iter().enumerate() {
            let cell_x = origin.0 + column as u8 * CELL_PITCH;
            let cell_y = origin.1 + row as u8 * CELL_PITCH;
            for dx in 0..CELL_SIZE {
                for dy in 0..CELL_SIZE {
                    display.draw_pixel(cell_x + dx, cell_y + dy, *lit);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::Preferences;
    use crate::sensors::RawSamples;

    impl Frame {
        fn contains(&self, text: &str) -> bool {
            self.lines.iter().any(|line| line.text.as_str() == text)
        }

        fn line_at(&self, y: u8) -> Option<&str> {
            self.lines
                .iter()
                .find(|line| line.y == y)
                .map(|line| line.text.as_str())
        }
    }

    fn one_decimal(value: f32) -> String<16> {
        let mut out = String::new();
        uwrite!(out, "{}", OneDecimal(value)).unwrap();
        out
    }

    fn setup(variant: Variant) -> (ControlState, Readings, AuxSensors) {
        let control = ControlState::new(&Preferences {
            variant,
            ..Preferences::default()
        });
        let sensors = AuxSensors::default();
        let raw = RawSamples {
            temperature: 4095,
            humidity: 0,
        };
        let readings = Readings::convert(raw, sensors.get(0));
        (control, readings, sensors)
    }

    /// Records every call so tests can inspect what reached the panel
    #[derive(Default)]
    struct FakeDisplay {
        fills: usize,
        texts: std::vec::Vec<(std::string::String, u8, u8)>,
        lit: std::vec::Vec<(u8, u8)>,
    }

    impl Display for FakeDisplay {
        type Error = ();

        fn fill(&mut self, _on: bool) {
            self.fills += 1;
            self.texts.clear();
            self.lit.clear();
        }

        fn draw_text(&mut self, text: &str, x: u8, y: u8) {
            self.texts.push((text.into(), x, y));
        }

        fn draw_pixel(&mut self, x: u8, y: u8, on: bool) {
            if on {
                self.lit.push((x, y));
            }
        }

        fn flush(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    #[test]
    fn one_decimal_rounds() {
        assert_eq!(one_decimal(45.0).as_str(), "45.0");
        assert_eq!(one_decimal(2.25).as_str(), "2.3");
        assert_eq!(one_decimal(0.04).as_str(), "0.0");
        assert_eq!(one_decimal(-6.0).as_str(), "-6.0");
        assert_eq!(one_decimal(-0.5).as_str(), "-0.5");
        assert_eq!(one_decimal(-0.04).as_str(), "-0.0");
    }

    #[test]
    fn welcome_screen() {
        let (control, readings, sensors) = setup(Variant::SensorConfig);
        let frame = render_screen(&control, &readings, &sensors, false);
        assert!(frame.contains("   Bee Sense    "));
        assert!(frame.contains("  Pressione A"));
        assert_eq!(frame.pattern, None);
    }

    #[test]
    fn menu_shows_one_based_species() {
        let (mut control, readings, sensors) = setup(Variant::SensorConfig);
        control.state = SystemState::Menu;
        control.species_index = 4;
        let frame = render_screen(&control, &readings, &sensors, false);
        assert_eq!(frame.line_at(0), Some("Especie:"));
        assert_eq!(frame.line_at(20), Some("5: Mandacaia"));
        assert_eq!(frame.line_at(50), Some("B: Selecionar"));
    }

    #[test]
    fn config_shows_live_aux_reading() {
        let (mut control, _, sensors) = setup(Variant::SensorConfig);
        control.state = SystemState::Config;
        control.sensor_index = 3;
        let raw = RawSamples {
            temperature: 0,
            humidity: 0,
        };
        let readings = Readings::convert(raw, sensors.get(3));
        let frame = render_screen(&control, &readings, &sensors, false);
        assert_eq!(frame.line_at(0), Some("Sensor: 0.0"));
        assert_eq!(frame.line_at(20), Some("4: Vibracao"));
    }

    #[test]
    fn confirm_shows_readings_and_alarm() {
        let (mut control, readings, sensors) = setup(Variant::SensorConfig);
        control.state = SystemState::Confirm;
        let frame = render_screen(&control, &readings, &sensors, false);
        assert_eq!(frame.line_at(0), Some("Temp : 45.0 C"));
        assert_eq!(frame.line_at(10), Some("Umid : 0.0 %"));
        assert_eq!(frame.line_at(40), Some("Peso : 2.0 Kg"));
        assert_eq!(frame.line_at(55), Some("Alarm: ON"));
        assert_eq!(frame.pattern, None);
    }

    #[test]
    fn simulation_mode_one_shows_species_details() {
        let (mut control, readings, sensors) = setup(Variant::SimulationToggle);
        control.state = SystemState::Confirm;
        control.simulation_mode = 1;
        let frame = render_screen(&control, &readings, &sensors, false);
        assert!(frame.contains("Africana"));
        assert_eq!(frame.line_at(10), Some("Apis Mellifera"));
        assert_eq!(frame.line_at(30), Some("Max: 36.0 C"));
        assert_eq!(frame.line_at(40), Some("Min: 30.0 C"));
        assert_eq!(frame.line_at(50), Some("Peso: 50.0"));
    }

    #[test]
    fn summary_pattern_follows_alarm() {
        let (mut control, readings, sensors) = setup(Variant::SimulationToggle);
        control.state = SystemState::Confirm;

        let frame = render_screen(&control, &readings, &sensors, true);
        assert_eq!(frame.pattern, Some(matrix::filled(true)));
        let frame = render_screen(&control, &readings, &sensors, false);
        assert_eq!(frame.pattern, Some(matrix::filled(false)));
        assert_eq!(frame.line_at(30), Some("Mode : 0"));

        control.alarm_active = false;
        let frame = render_screen(&control, &readings, &sensors, true);
        assert_eq!(frame.pattern, Some(matrix::diagonal()));
        assert_eq!(frame.line_at(20), Some("Alarm: OFF"));
    }

    #[test]
    fn long_text_is_truncated() {
        let mut frame = Frame::default();
        frame.text("abcdefghijklmnopqrstuvwxyz0123", 0, 0);
        assert_eq!(frame.line_at(0).map(str::len), Some(LINE_LEN));
    }

    #[test]
    fn draw_frame_clears_then_draws_pattern_cells() {
        let (mut control, readings, sensors) = setup(Variant::SimulationToggle);
        control.state = SystemState::Confirm;
        control.alarm_active = false;
        let frame = render_screen(&control, &readings, &sensors, false);

        let mut display = FakeDisplay::default();
        draw_frame(&frame, &mut display);
        assert_eq!(display.fills, 1);
        assert_eq!(display.texts.len(), frame.lines.len());
        // five diagonal cells of 4x4 pixels
        assert_eq!(display.lit.len(), 5 * 16);
        assert!(display.lit.contains(&(90, 30)));
        assert!(display.lit.contains(&(113, 53)));
        assert!(!display.lit.contains(&(95, 30)));
    }
}
