/// Largest value of a 12-bit ADC conversion
pub const ADC_MAX: u16 = 4095;

pub const TEMP_MIN_C: f32 = -6.0;
pub const TEMP_MAX_C: f32 = 45.0;

/// Raw samples taken at the start of a cycle
/// temperature: ADC0 (potentiometer standing in for the hive probe)
/// humidity: ADC1
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSamples {
    pub temperature: u16,
    pub humidity: u16,
}

/// Engineering values derived from [`RawSamples`]
/// aux: the temperature channel mapped onto the selected auxiliary sensor range
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Readings {
    pub temperature: f32,
    pub humidity: f32,
    pub aux: f32,
}

impl Readings {
    /// Converts both channels; `aux` uses the calibration bounds of `sensor`
    pub fn convert(raw: RawSamples, sensor: &AuxSensorRecord) -> Self {
        Self {
            temperature: get_temperature(raw.temperature),
            humidity: get_humidity(raw.humidity),
            aux: sensor.convert(raw.temperature),
        }
    }
}

/// Gets temperature in Celsius
/// param sample: 12-bit ADC value
/// returns a value in -6.0..=45.0
pub fn get_temperature(sample: u16) -> f32 {
    let sample = sample.min(ADC_MAX) as f32;
    TEMP_MIN_C + sample * (TEMP_MAX_C - TEMP_MIN_C) / ADC_MAX as f32
}

/// Gets percent relative humidity
/// param sample: 12-bit ADC value
/// returns a value in 0.0..=100.0
pub fn get_humidity(sample: u16) -> f32 {
    sample.min(ADC_MAX) as f32 * (100.0 / ADC_MAX as f32)
}

pub const NUM_AUX_SENSORS: usize = 4;

pub const WEIGHT: usize = 0;
pub const LIGHT: usize = 1;
pub const VOC: usize = 2;
pub const VIBRATION: usize = 3;

/// An auxiliary hive sensor calibrated by hand from the Config screen
/// min/max: calibration bounds
/// value: the last committed reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuxSensorRecord {
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    pub value: f32,
}

impl AuxSensorRecord {
    pub const fn new(name: &'static str, min: f32, max: f32, value: f32) -> Self {
        Self { name, min, max, value }
    }

    /// Maps a raw sample onto this sensor's range.
    /// NOTE: the span is `max + min`, not `max - min`. Every stock sensor has
    /// min == 0 so both agree; a non-zero min would overshoot.
    pub fn convert(&self, sample: u16) -> f32 {
        self.min + sample.min(ADC_MAX) as f32 * (self.max + self.min) / ADC_MAX as f32
    }
}

/// The auxiliary sensor table shown on the Config screen
#[derive(Debug, Clone, PartialEq)]
pub struct AuxSensors {
    records: [AuxSensorRecord; NUM_AUX_SENSORS],
}

impl Default for AuxSensors {
    fn default() -> Self {
        AuxSensors {
            records: [
                AuxSensorRecord::new("Peso", 0.0, 60.0, 2.0),
                AuxSensorRecord::new("Luminosidade", 0.0, 100.0, 3.0),
                AuxSensorRecord::new("Gas VOC", 0.0, 15.0, 0.5),
                AuxSensorRecord::new("Vibracao", 0.0, 100.0, 50.0),
            ],
        }
    }
}

impl AuxSensors {
    pub fn get(&self, index: usize) -> &AuxSensorRecord {
        &self.records[index % NUM_AUX_SENSORS]
    }

    /// Committed value of a sensor
    pub fn value(&self, index: usize) -> f32 {
        self.get(index).value
    }

    /// Overwrites the committed value of a sensor
    pub fn commit(&mut self, index: usize, value: f32) {
        self.records[index % NUM_AUX_SENSORS].value = value;
    }

    pub fn values(&self) -> [f32; NUM_AUX_SENSORS] {
        self.records.map(|r| r.value)
    }
}
