// File: crates/census-core/src/municipalities.rs
// Summary: Literal column constants for the 38 municipalities of Kosovo.

/// Parallel input columns. Lengths are checked by `DatasetBuilder::build`.
#[derive(Clone, Copy, Debug)]
pub struct MunicipalityColumns<'a> {
    pub names: &'a [&'a str],
    pub populations: &'a [u32],
    pub areas_km2: &'a [f64],
    pub zones: &'a [&'a str],
}

impl MunicipalityColumns<'static> {
    /// The built-in Kosovo dataset.
    pub const fn kosovo() -> Self {
        Self {
            names: &NAMES,
            populations: &POPULATIONS,
            areas_km2: &AREAS_KM2,
            zones: &ZONES,
        }
    }
}

pub const NAMES: [&str; 38] = [
    "Prishtinë", "Prizren", "Ferizaj", "Gjilan", "Pejë", "Gjakovë", "Podujevë", "Mitrovicë", "Vushtrri", "Suharekë",
    "Drenas (Gllogoc)", "Rahovec", "Fushë Kosovë", "Klinë", "Malishevë", "Lipjan", "Deçan", "Istog", "Shtime", "Obiliq",
    "Skenderaj", "Kaçanik", "Kamenicë", "Dragash", "Viti", "Shtërpcë", "Novobërdë", "Hani i Elezit", "Junik", "Mamusha",
    "Parteš (Partesh)", "Kllokot", "Ranillug", "Graçanicë", "Mitrovicë e Veriut", "Leposaviq", "Zubin Potok", "Zveçan",
];

pub const POPULATIONS: [u32; 38] = [
    227466, 178000, 109345, 95000, 96450, 94557, 88499, 71909, 69870, 59722,
    54974, 48054, 45713, 43871, 41777, 40632, 35549, 33066, 30574, 28908,
    25000, 23000, 21000, 19000, 17000, 15000, 13000, 11000, 9000, 7000,
    5000, 4000, 3000, 2000, 1000, 800, 600, 400,
];

pub const AREAS_KM2: [f64; 38] = [
    572.0, 392.0, 587.0, 633.0, 345.0, 603.0, 350.0, 626.0, 83.0, 344.0,
    422.0, 290.0, 387.0, 312.0, 276.0, 276.0, 378.0, 267.0, 454.0, 308.0,
    454.0, 295.0, 131.0, 105.0, 134.0, 306.0, 83.0, 86.0, 12.0, 18.0,
    34.0, 78.0, 750.0, 335.0, 104.0, 204.0, 15.0, 15.0,
];

pub const ZONES: [&str; 38] = [
    "Urbane", "Urbane", "Urbane", "Urbane", "Urbane", "Urbane", "Rurale", "Urbane", "Rurale", "Rurale",
    "Rurale", "Rurale", "Rurale", "Rurale", "Rurale", "Rurale", "Rurale", "Rurale", "Rurale", "Rurale",
    "Rurale", "Rurale", "Rurale", "Rurale", "Rurale", "Rurale", "Rurale", "Rurale", "Rurale", "Rurale",
    "Rurale", "Rurale", "Rurale", "Rurale", "Rurale", "Rurale", "Rurale", "Rurale",
];
