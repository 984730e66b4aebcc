use crate::timer::TELEMETRY_PERIOD;

/// Which build of the hive monitor is running
/// SensorConfig: B in Confirm opens the auxiliary sensor Config screen and
/// health indicators go to the WS2812 matrix
/// SimulationToggle: no Config screen; B in Confirm flips the simulation
/// mode and a small 5x5 pattern is drawn on the display instead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    SensorConfig,
    SimulationToggle,
}

/// Preferences defines the deployment settings of the monitor.
/// variant: see [`Variant`]
/// alarm_active: whether health scoring is on at boot
/// status_brightness: full-scale status LED level, out of 255
/// telemetry_period: main loop cycles between telemetry lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub variant: Variant,
    pub alarm_active: bool,
    pub status_brightness: f32,
    pub telemetry_period: u8,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            variant: Variant::SensorConfig,
            alarm_active: true,
            status_brightness: 10.0, // Dim; the LED sits next to the display
            telemetry_period: TELEMETRY_PERIOD,
        }
    }
}

impl Preferences {
    /// Whether health indicators go to the LED matrix
    pub fn uses_led_matrix(&self) -> bool {
        self.variant == Variant::SensorConfig
    }
}
