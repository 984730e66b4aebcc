/// A bee species and the hive conditions it thrives in.
/// min_temp/max_temp: tolerated brood temperature range in Celsius
/// ideal_humidity: ideal relative humidity percentage
/// annual_yield: expected honey production per hive per year in kg
/// max_light: highest comfortable light level at the hive entrance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesRecord {
    pub name: &'static str,
    pub min_temp: f32,
    pub max_temp: f32,
    pub ideal_humidity: u8,
    pub annual_yield: f32,
    pub max_light: f32,
    pub genus: &'static str,
}

impl SpeciesRecord {
    const fn new(
        name: &'static str,
        temp: (f32, f32),
        ideal_humidity: u8,
        annual_yield: f32,
        max_light: f32,
        genus: &'static str,
    ) -> Self {
        Self {
            name,
            min_temp: temp.0,
            max_temp: temp.1,
            ideal_humidity,
            annual_yield,
            max_light,
            genus,
        }
    }

    /// Midpoint of the tolerated temperature range
    pub fn ideal_temp(&self) -> f32 {
        (self.min_temp + self.max_temp) / 2.0
    }
}

pub const NUM_SPECIES: usize = 12;

pub static SPECIES: [SpeciesRecord; NUM_SPECIES] = [
    SpeciesRecord::new("Africana", (30.0, 36.0), 65, 50.0, 5.0, "Apis Mellifera"),
    SpeciesRecord::new("Irai", (26.0, 34.0), 70, 3.5, 2.8, "Frieseomelitta"),
    SpeciesRecord::new("Limao", (26.0, 34.0), 70, 0.7, 1.4, "Lestrimelitta"),
    SpeciesRecord::new("Tiuba", (26.0, 34.0), 70, 2.8, 2.8, "Melipona"),
    SpeciesRecord::new("Mandacaia", (22.0, 32.0), 70, 3.5, 4.2, "Melipona"),
    SpeciesRecord::new("Urucu", (26.0, 34.0), 70, 7.0, 4.2, "Melipona"),
    SpeciesRecord::new("Tataira", (22.0, 32.0), 70, 1.4, 2.8, "Oxytrigona"),
    SpeciesRecord::new("Mirim", (22.0, 32.0), 70, 0.7, 1.4, "Plebeia"),
    SpeciesRecord::new("Jandaira", (26.0, 34.0), 70, 2.8, 4.2, "Scaptotrigona"),
    SpeciesRecord::new("Bora", (26.0, 34.0), 70, 4.2, 4.2, "Tetragona"),
    SpeciesRecord::new("Jatai", (22.0, 32.0), 70, 1.4, 2.8, "Tetragonisca"),
    SpeciesRecord::new("Mandaguari", (22.0, 32.0), 70, 1.4, 2.8, "Trigona"),
];

/// Looks up a species, wrapping out of range indexes back into the catalog
pub fn species(index: usize) -> &'static SpeciesRecord {
    &SPECIES[index % NUM_SPECIES]
}

/// Iterates forwards through a catalog of `len` entries, wrapping to 0
pub fn next_index(index: usize, len: usize) -> usize {
    (index + 1) % len
}
