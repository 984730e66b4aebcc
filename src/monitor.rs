use crate::health::{assess, HealthReport, StatusColor};
use crate::input::ButtonPress;
use crate::matrix::{self, Grid};
use crate::menu::{ControlState, SystemState, ToneRequest};
use crate::ports::{AnalogInput, Buzzer, Display, LedMatrix, StatusLed, TelemetrySink};
use crate::preferences::Preferences;
use crate::rendering::{draw_frame, render_screen, Frame};
use crate::sensors::{AuxSensors, RawSamples, Readings};
use crate::species::species;
use crate::telemetry::Snapshot;
use crate::timer::CycleCounter;

/// What to do with the LED matrix this cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatrixUpdate {
    /// Leave whatever was sent last
    Keep,
    Clear,
    Show(Grid),
}

/// Everything one cycle produced, before any of it reaches the hardware
#[derive(Debug, Clone, PartialEq)]
pub struct CycleOutput {
    pub readings: Readings,
    pub health: Option<HealthReport>,
    pub frame: Frame,
    pub status: StatusColor,
    pub matrix: MatrixUpdate,
    pub tone: Option<ToneRequest>,
    pub telemetry: Option<Snapshot>,
}

pub struct Monitor {
    preferences: Preferences,
    control: ControlState,
    sensors: AuxSensors,
    cycle: CycleCounter,
}

impl Monitor {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            control: ControlState::new(&preferences),
            sensors: AuxSensors::default(),
            cycle: CycleCounter::new(preferences.telemetry_period),
            preferences,
        }
    }

    pub fn control(&self) -> &ControlState {
        &self.control
    }

    pub fn sensors(&self) -> &AuxSensors {
        &self.sensors
    }

    /// Runs the hardware independent part of a cycle:
    /// presses, conversion, one-shot commit, health, render, tone, telemetry
    pub fn step(&mut self, presses: &[ButtonPress], raw: RawSamples) -> CycleOutput {
        self.cycle.tick();

        for press in presses {
            self.control.apply(*press);
        }

        let control = &mut self.control;
        let readings = Readings::convert(raw, self.sensors.get(control.sensor_index));
        let in_confirm = control.state == SystemState::Confirm;

        if in_confirm && control.commit_pending {
            control.commit_pending = false;
            self.sensors.commit(control.sensor_index, readings.aux);
            log_info!("sensor {} committed", control.sensor_index);
        }

        let record = species(control.species_index);
        let health = (in_confirm && control.alarm_active).then(|| assess(record, &readings));
        let status = match &health {
            Some(report) => StatusColor::from_ratio(report.combined, self.preferences.status_brightness),
            None => StatusColor::OFF,
        };

        let matrix = if in_confirm && control.simulation_mode == 0 && self.preferences.uses_led_matrix() {
            match &health {
                Some(report) => {
                    let indices = matrix::health_indices(record, &self.sensors, report.combined);
                    MatrixUpdate::Show(matrix::colorize(&matrix::indicator_pattern(&indices)))
                }
                None => MatrixUpdate::Clear,
            }
        } else {
            MatrixUpdate::Keep
        };

        let frame = render_screen(control, &readings, &self.sensors, self.cycle.second_half());
        let tone = control.take_tone();
        let telemetry = self
            .cycle
            .is_finished()
            .then(|| Snapshot::new(&readings, &self.sensors));

        CycleOutput {
            readings,
            health,
            frame,
            status,
            matrix,
            tone,
            telemetry,
        }
    }

    /// Runs one full cycle against the hardware
    #[allow(clippy::too_many_arguments)]
    pub fn run_cycle<A, D, M, B, L, T>(
        &mut self,
        presses: &[ButtonPress],
        adc: &mut A,
        display: &mut D,
        led_matrix: &mut M,
        buzzer: &mut B,
        status_led: &mut L,
        telemetry: &mut T,
    ) -> CycleOutput
    where
        A: AnalogInput,
        D: Display,
        M: LedMatrix,
        B: Buzzer,
        L: StatusLed,
        T: TelemetrySink,
    {
        let raw = adc.sample();
        let output = self.step(presses, raw);

        draw_frame(&output.frame, display);

        if let Some(tone) = output.tone {
            buzzer.play(tone);
        }

        if let Some(snapshot) = &output.telemetry {
            let line = snapshot.format();
            log_debug!("telemetry {}", line.as_str());
            telemetry.emit(&line);
        }

        status_led.set_levels(output.status.duty_levels());
        let sent = match &output.matrix {
            MatrixUpdate::Keep => Ok(()),
            MatrixUpdate::Clear => led_matrix.clear(),
            MatrixUpdate::Show(grid) => led_matrix.show(grid),
        };
        if sent.is_err() {
            log_warn!("led matrix write failed");
        }
        if display.flush().is_err() {
            log_warn!("display flush failed");
        }

        output
    }
}
