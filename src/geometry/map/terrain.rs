/// Can a searcher enter this map cell, and at what cost?
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// Blocked cells can never be entered.
    Blocked,
    /// Open cells are entered by paying the given cost.
    ///
    /// The cost is charged on entry, never on departure, and must be at
    /// least 1.
    Open(u32),
}

/// Conversion from a map tile to its terrain classification.
///
/// Implemented for the crate's tile types and for bare unsigned integers,
/// where 0 marks an impassable cell and any other value is the cost of
/// entering it.
pub trait IntoTerrain {
    fn into_terrain(self) -> Terrain;
}

impl IntoTerrain for u8 {
    fn into_terrain(self) -> Terrain {
        u32::from(self).into_terrain()
    }
}

impl IntoTerrain for u32 {
    fn into_terrain(self) -> Terrain {
        match self {
            0 => Terrain::Blocked,
            cost => Terrain::Open(cost),
        }
    }
}
