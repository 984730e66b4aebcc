use num_traits::float::FloatCore;
use smart_leds::{SmartLedsWrite, RGB8};

use crate::ports::LedMatrix;
use crate::sensors::{AuxSensors, LIGHT, VIBRATION, VOC, WEIGHT};
use crate::species::SpeciesRecord;

pub const SIZE: usize = 5;

const LEVELS: f32 = (SIZE - 1) as f32;
const VOC_LIMIT_PPM: f32 = 8.0;
const VIBRATION_FULL_SCALE: f32 = 100.0;

/// One LED, each channel normalised to 0.0..=1.0
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// 8-bit channels for the LED chain
    pub fn to_rgb8(self) -> RGB8 {
        // `as` saturates, so out of range channels clip instead of wrapping
        RGB8::new(
            (self.red * 255.0) as u8,
            (self.green * 255.0) as u8,
            (self.blue * 255.0) as u8,
        )
    }
}

pub type Grid = [[Color; SIZE]; SIZE];
pub type Pattern = [[bool; SIZE]; SIZE];

pub const CLEAR: Grid = [[Color::BLACK; SIZE]; SIZE];

/// Colour of a lit cell per row, green at the top to red at the bottom
const ROW_PALETTE: [Color; SIZE] = [
    Color::new(0.0, 0.4, 0.0),
    Color::new(0.1, 0.3, 0.0),
    Color::new(0.3, 0.2, 0.0),
    Color::new(0.2, 0.1, 0.0),
    Color::new(0.1, 0.0, 0.0),
];

/// Row that lights up for a health index; 1.0 and above is row 0,
/// 0.0 and below (or NaN) is row 4
pub fn indicator_row(index: f32) -> usize {
    let level = FloatCore::floor(index * LEVELS);
    if level >= LEVELS {
        0
    } else if level >= 0.0 {
        SIZE - 1 - level as usize
    } else {
        SIZE - 1
    }
}

/// Health index per column, 1.0 best
/// returns [weight/yield, light headroom, VOC under 8ppm, vibration, combined]
pub fn health_indices(species: &SpeciesRecord, sensors: &AuxSensors, combined: f32) -> [f32; SIZE] {
    let light = sensors.get(LIGHT);
    [
        sensors.value(WEIGHT) / species.annual_yield,
        // Uses the species limit, not the measured light
        (light.max - species.max_light) / (light.max - light.min),
        (VOC_LIMIT_PPM - sensors.value(VOC)) / VOC_LIMIT_PPM,
        sensors.value(VIBRATION) / VIBRATION_FULL_SCALE,
        combined,
    ]
}

/// One lit cell per column
pub fn indicator_pattern(indices: &[f32; SIZE]) -> Pattern {
    let mut pattern = [[false; SIZE]; SIZE];
    for (column, index) in indices.iter().enumerate() {
        pattern[indicator_row(*index)][column] = true;
    }
    pattern
}

/// Paints lit cells with their row colour
pub fn colorize(pattern: &Pattern) -> Grid {
    let mut grid = CLEAR;
    for (row, cells) in pattern.iter().enumerate() {
        for (column, lit) in cells.iter().enumerate() {
            if *lit {
                grid[row][column] = ROW_PALETTE[row];
            }
        }
    }
    grid
}

/// Diagonal shown while the alarm is off on the display-only variant
pub fn diagonal() -> Pattern {
    let mut pattern = [[false; SIZE]; SIZE];
    for (i, row) in pattern.iter_mut().enumerate() {
        row[i] = true;
    }
    pattern
}

pub fn filled(on: bool) -> Pattern {
    [[on; SIZE]; SIZE]
}

/// (row, column) in chain order: bottom row first, odd rows left to right,
/// even rows right to left
pub fn serpentine_order() -> impl Iterator<Item = (usize, usize)> {
    (0..SIZE).rev().flat_map(|row| {
        (0..SIZE).map(move |i| {
            let column = if row % 2 == 1 { i } else { SIZE - 1 - i };
            (row, column)
        })
    })
}

/// The grid in chain order, ready for a `SmartLedsWrite`
pub fn serpentine(grid: &Grid) -> impl Iterator<Item = RGB8> + '_ {
    serpentine_order().map(move |(row, column)| grid[row][column].to_rgb8())
}

/// Any WS2812 style chain wired as the 5x5 serpentine
pub struct LedChain<W> {
    chain: W,
}

impl<W> LedChain<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    pub fn new(chain: W) -> Self {
        Self { chain }
    }
}

impl<W> LedMatrix for LedChain<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    type Error = W::Error;

    fn show(&mut self, grid: &Grid) -> Result<(), Self::Error> {
        self.chain.write(serpentine(grid))
    }
}
