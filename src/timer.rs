pub const DEBOUNCE_MS: u32 = 200; // Per button line
pub const LOOP_PERIOD_MS: u32 = 100; // ~10Hz main loop
pub const TELEMETRY_PERIOD: u8 = 10; // Cycles; 1Hz at LOOP_PERIOD_MS

/// Counts main loop iterations modulo a fixed period.
/// Telemetry and the blinking matrix run off the phase of this counter
/// rather than the wall clock.
pub struct CycleCounter {
    phase: u8,
    period: u8,
}

impl CycleCounter {
    pub fn new(period: u8) -> CycleCounter {
        Self {
            phase: 0,
            period: period.max(1),
        }
    }

    /// Advances one iteration; the phase rolls over to 0 after `period - 1`
    pub fn tick(&mut self) {
        self.phase += 1;
        if self.phase >= self.period {
            self.phase = 0;
        }
    }

    /// True on the iteration that completed a period
    pub fn is_finished(&self) -> bool {
        self.phase == 0
    }

    /// True for the second half of the period
    pub fn second_half(&self) -> bool {
        self.phase >= self.period / 2
    }
}

/// Milliseconds elapsed between two readings of a wrapping millisecond clock
pub fn elapsed_ms(since: u32, now: u32) -> u32 {
    now.wrapping_sub(since)
}
