use num_traits::float::FloatCore;

use crate::sensors::Readings;
use crate::species::SpeciesRecord;

pub const IDEAL_HUMIDITY: f32 = 70.0;
pub const HUMIDITY_TOLERANCE: f32 = 25.0;
pub const COLD_TOLERANCE: f32 = 15.0;
pub const HEAT_TOLERANCE: f32 = 3.0;

pub const TEMPERATURE_WEIGHT: f32 = 0.85;
pub const HUMIDITY_WEIGHT: f32 = 0.15;

/// Clamps into `0.0..=1.0`; NaN collapses to 0
fn unit(ratio: f32) -> f32 {
    if ratio > 1.0 {
        1.0
    } else if ratio > 0.0 {
        ratio
    } else {
        0.0
    }
}

/// Temperature ratio relative to a species' ideal temperature
/// falls to 0 at 15C below the ideal but 3C above it
pub fn temperature_ratio(temperature: f32, ideal: f32) -> f32 {
    let ratio = if temperature <= ideal {
        1.0 + (temperature - ideal) / COLD_TOLERANCE
    } else {
        1.0 - (temperature - ideal) / HEAT_TOLERANCE
    };
    unit(ratio)
}

/// Humidity ratio, symmetric around 70 %
pub fn humidity_ratio(humidity: f32) -> f32 {
    unit(1.0 - FloatCore::abs(humidity - IDEAL_HUMIDITY) / HUMIDITY_TOLERANCE)
}

/// Weighted blend of both ratios
pub fn combined_ratio(temperature_ratio: f32, humidity_ratio: f32) -> f32 {
    unit(
        (TEMPERATURE_WEIGHT * temperature_ratio + HUMIDITY_WEIGHT * humidity_ratio)
            / (TEMPERATURE_WEIGHT + HUMIDITY_WEIGHT),
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HealthReport {
    pub ideal_temp: f32,
    pub temperature: f32,
    pub humidity: f32,
    pub combined: f32,
}

/// Scores the current readings against a species
pub fn assess(species: &SpeciesRecord, readings: &Readings) -> HealthReport {
    let ideal_temp = species.ideal_temp();
    let temperature = temperature_ratio(readings.temperature, ideal_temp);
    let humidity = humidity_ratio(readings.humidity);
    HealthReport {
        ideal_temp,
        temperature,
        humidity,
        combined: combined_ratio(temperature, humidity),
    }
}

/// Status LED colour on a 0..=255 scale per channel
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatusColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl StatusColor {
    pub const OFF: StatusColor = StatusColor {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };

    /// Red to yellow to green gradient; `brightness` is the full-scale level
    pub fn from_ratio(ratio: f32, brightness: f32) -> Self {
        let ratio = unit(ratio);
        StatusColor {
            red: (1.0 - ratio) * brightness,
            green: ratio * brightness,
            blue: 0.0,
        }
    }

    /// PWM levels (0..=65535) for red, green and blue
    pub fn duty_levels(&self) -> [u16; 3] {
        [self.red, self.green, self.blue].map(duty)
    }
}

fn duty(level: f32) -> u16 {
    let level = if level > 255.0 {
        255.0
    } else if level > 0.0 {
        level
    } else {
        0.0
    };
    (level * 65535.0 / 255.0) as u16
}
