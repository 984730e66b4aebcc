use heapless::String;
use ufmt::uwrite;

use crate::rendering::OneDecimal;
use crate::sensors::{AuxSensors, Readings, LIGHT, NUM_AUX_SENSORS, VIBRATION, VOC, WEIGHT};

pub const TELEMETRY_LEN: usize = 128;

/// Readings and committed auxiliary values at one point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub temperature: f32,
    pub humidity: f32,
    pub aux: [f32; NUM_AUX_SENSORS],
}

impl Snapshot {
    pub fn new(readings: &Readings, sensors: &AuxSensors) -> Self {
        Self {
            temperature: readings.temperature,
            humidity: readings.humidity,
            aux: sensors.values(),
        }
    }

    /// Formats the snapshot as one key:value line
    /// returns: `{ "temp": 33.0, "umid": 70.0, "peso": 2.0, "luz": 3.0, "voc": 0.5, "vibra": 50.0 }`
    pub fn format(&self) -> String<TELEMETRY_LEN> {
        let mut line: String<TELEMETRY_LEN> = String::new();
        // Keys take 61 bytes, leaving room for six signed values
        let _ = line.push_str("{ ");
        let _ = uwrite!(
            line,
            "\"temp\": {}, \"umid\": {}, \"peso\": {}, \"luz\": {}, \"voc\": {}, \"vibra\": {}",
            OneDecimal(self.temperature),
            OneDecimal(self.humidity),
            OneDecimal(self.aux[WEIGHT]),
            OneDecimal(self.aux[LIGHT]),
            OneDecimal(self.aux[VOC]),
            OneDecimal(self.aux[VIBRATION])
        );
        let _ = line.push_str(" }");
        line
    }
}
