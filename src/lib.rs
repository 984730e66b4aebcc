#![cfg_attr(not(test), no_std)]

//! # BeeSense-rs
//! ## A beehive monitoring system solution in Rust
//!
//! Features:
//! - Bee species catalog with ideal temperature and humidity ranges
//! - Two-button menu (species selection, auxiliary sensor calibration)
//! - Hive health ratio with a red to green status LED gradient
//! - 5x5 addressable LED matrix with per-sensor health indicators
//! - Buzzer feedback tones
//! - Periodic telemetry line
//!
//! The hardware independent parts (state machine, scoring, rendering) are
//! host testable. The Pico adapters live in [`board`] behind the `rp2040`
//! feature.

#[macro_use]
mod logging;

pub mod health;
pub mod input;
pub mod matrix;
pub mod menu;
pub mod monitor;
pub mod ports;
pub mod preferences;
pub mod rendering;
pub mod sensors;
pub mod species;
pub mod telemetry;
pub mod timer;

#[cfg(feature = "rp2040")]
pub mod board;
