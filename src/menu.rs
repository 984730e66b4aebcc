use crate::input::{ButtonLine, ButtonPress};
use crate::preferences::{Preferences, Variant};
use crate::sensors::NUM_AUX_SENSORS;
use crate::species::{next_index, NUM_SPECIES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemState {
    Welcome,
    Menu,
    Confirm,
    Config,
}

/// A buzzer tone to play on the next cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneRequest {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

impl ToneRequest {
    pub const fn new(frequency_hz: u32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }
}

const CLICK_HZ: u32 = 500;
const SELECT_HZ: u32 = 800;
const CONFIRM_HZ: u32 = 1000;
const SHORT_MS: u32 = 5;
const LONG_MS: u32 = 200;
const GREETING_MS: u32 = 100;

/// Everything the buttons control
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    pub state: SystemState,
    pub alarm_active: bool,
    pub simulation_mode: u8,
    pub species_index: usize,
    pub sensor_index: usize,
    /// Set when Config is left; the next Confirm render stores the live
    /// auxiliary reading and clears it
    pub commit_pending: bool,
    pub pending_tone: Option<ToneRequest>,
    variant: Variant,
}

impl ControlState {
    pub fn new(preferences: &Preferences) -> Self {
        Self {
            state: SystemState::Welcome,
            alarm_active: preferences.alarm_active,
            simulation_mode: 0,
            species_index: 0,
            sensor_index: 0,
            commit_pending: false,
            pending_tone: None,
            variant: preferences.variant,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Applies one debounced press
    pub fn apply(&mut self, press: ButtonPress) {
        let from = self.state;
        match press.line {
            ButtonLine::A => self.press_a(),
            ButtonLine::B => self.press_b(),
        }
        if from != self.state {
            log_info!("state {} -> {} ({})", from, self.state, press.line);
        }
    }

    /// Takes the scheduled tone, if any
    pub fn take_tone(&mut self) -> Option<ToneRequest> {
        self.pending_tone.take()
    }

    fn press_a(&mut self) {
        match self.state {
            SystemState::Welcome => {
                self.state = SystemState::Menu;
                self.schedule(CLICK_HZ, GREETING_MS);
            }
            SystemState::Menu => {
                self.species_index = next_index(self.species_index, NUM_SPECIES);
                log_debug!("species {}", self.species_index);
                self.schedule(CLICK_HZ, SHORT_MS);
            }
            SystemState::Config => {
                self.sensor_index = next_index(self.sensor_index, NUM_AUX_SENSORS);
                log_debug!("sensor {}", self.sensor_index);
                self.schedule(CLICK_HZ, SHORT_MS);
            }
            SystemState::Confirm => {
                self.alarm_active = !self.alarm_active;
                log_info!("alarm {}", self.alarm_active);
            }
        }
    }

    /// Tone is 800Hz when pressed in Menu, 1000Hz otherwise
    fn press_b(&mut self) {
        let from = self.state;
        let duration_ms = match (from, self.variant) {
            (SystemState::Menu, _) => {
                self.state = SystemState::Confirm;
                LONG_MS
            }
            (SystemState::Confirm, Variant::SensorConfig) => {
                self.state = SystemState::Config;
                LONG_MS
            }
            (SystemState::Confirm, Variant::SimulationToggle) => {
                self.simulation_mode = (self.simulation_mode + 1) % 2;
                log_info!("simulation mode {}", self.simulation_mode);
                SHORT_MS
            }
            (SystemState::Config, _) => {
                self.state = SystemState::Confirm;
                self.commit_pending = true;
                LONG_MS
            }
            (SystemState::Welcome, _) => SHORT_MS,
        };
        let frequency_hz = if from == SystemState::Menu {
            SELECT_HZ
        } else {
            CONFIRM_HZ
        };
        self.schedule(frequency_hz, duration_ms);
    }

    fn schedule(&mut self, frequency_hz: u32, duration_ms: u32) {
        self.pending_tone = Some(ToneRequest::new(frequency_hz, duration_ms));
    }
}
