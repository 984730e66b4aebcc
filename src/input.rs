use core::cell::RefCell;

use critical_section::Mutex;
use heapless::{Deque, Vec};

use crate::timer::{elapsed_ms, DEBOUNCE_MS};

/// Presses held between two main loop cycles. A cycle with a 200ms tone runs
/// ~300ms, so two debounced edges per line can arrive before the next drain.
pub const QUEUE_CAPACITY: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonLine {
    A,
    B,
}

/// A debounced press, stamped with the millisecond clock at the edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonPress {
    pub line: ButtonLine,
    pub at_ms: u32,
}

/// Per-line debounce. An edge is accepted when no edge was accepted on the
/// same line within the window; rejected edges are forgotten.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window_ms: u32,
    last_a: Option<u32>,
    last_b: Option<u32>,
}

impl Debouncer {
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            last_a: None,
            last_b: None,
        }
    }

    /// Returns whether the edge counts as a press, and records it if so
    pub fn accept(&mut self, line: ButtonLine, now_ms: u32) -> bool {
        if self.is_bounce(line, now_ms) {
            return false;
        }
        self.record(line, now_ms);
        true
    }

    /// True when an edge on `line` was accepted less than a window ago
    pub fn is_bounce(&self, line: ButtonLine, now_ms: u32) -> bool {
        let last = match line {
            ButtonLine::A => self.last_a,
            ButtonLine::B => self.last_b,
        };
        matches!(last, Some(since) if elapsed_ms(since, now_ms) < self.window_ms)
    }

    /// Starts a new window on `line`
    pub fn record(&mut self, line: ButtonLine, now_ms: u32) {
        match line {
            ButtonLine::A => self.last_a = Some(now_ms),
            ButtonLine::B => self.last_b = Some(now_ms),
        }
    }
}

struct Pending {
    debouncer: Debouncer,
    presses: Deque<ButtonPress, QUEUE_CAPACITY>,
}

/// Hand-off point between the GPIO interrupt and the main loop.
/// The handler only debounces and queues; presses are applied by the loop.
pub struct ButtonChannel {
    pending: Mutex<RefCell<Pending>>,
}

impl ButtonChannel {
    pub const fn new(window_ms: u32) -> Self {
        Self {
            pending: Mutex::new(RefCell::new(Pending {
                debouncer: Debouncer::new(window_ms),
                presses: Deque::new(),
            })),
        }
    }

    /// Called from the interrupt handler for every falling edge.
    /// Never blocks; returns whether a press was queued.
    pub fn on_falling_edge(&self, line: ButtonLine, now_ms: u32) -> bool {
        let press = ButtonPress { line, at_ms: now_ms };
        let (accepted, queued) = critical_section::with(|cs| {
            let mut pending = self.pending.borrow_ref_mut(cs);
            if pending.debouncer.is_bounce(line, now_ms) {
                return (false, false);
            }
            // A dropped press must not arm the window
            let queued = pending.presses.push_back(press).is_ok();
            if queued {
                pending.debouncer.record(line, now_ms);
            }
            (true, queued)
        });

        if queued {
            log_debug!("press {}", press);
        } else if accepted {
            log_warn!("button queue full, dropped {}", press);
        }
        queued
    }

    /// Takes every queued press, oldest first
    pub fn drain(&self) -> Vec<ButtonPress, QUEUE_CAPACITY> {
        critical_section::with(|cs| {
            let mut pending = self.pending.borrow_ref_mut(cs);
            let mut presses = Vec::new();
            while let Some(press) = pending.presses.pop_front() {
                // Same capacity on both sides
                let _ = presses.push(press);
            }
            presses
        })
    }
}

/// The channel shared with `IO_IRQ_BANK0`
pub static BUTTONS: ButtonChannel = ButtonChannel::new(DEBOUNCE_MS);
