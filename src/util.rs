//! General-purpose helpers that don't fit anywhere else.

/// Serializes a [`crate::CellMap`] as a flat sequence of cells instead of a
/// map. Cube-coordinate keys don't make useful JSON object keys, and each
/// cell already carries its own coordinates, so the map structure is
/// redundant on the wire and rebuilt on the way in.
pub mod cell_map_to_vec_serde {
    use crate::grid::{Cell, CellMap};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(map: &CellMap, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(map.values())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<CellMap, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cells: Vec<Cell> = Vec::deserialize(deserializer)?;
        Ok(cells
            .into_iter()
            .map(|cell| (cell.coordinates(), cell))
            .collect())
    }
}
