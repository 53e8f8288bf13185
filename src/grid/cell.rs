use crate::{
    attribute::AttributeMap,
    coords::{CubeCoordinates, Rotation},
};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// One hex on a grid: a position plus its gameplay properties. The
/// coordinates are fixed at construction; the flags, cost, and attributes are
/// plain public state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cell {
    coordinates: CubeCoordinates,
    /// Impassable for movement searches
    #[serde(default)]
    pub is_blocked: bool,
    /// Blocks line of sight
    #[serde(default)]
    pub is_opaque: bool,
    /// Extra cost of entering this cell during pathfinding
    #[serde(default)]
    pub cost: f64,
    #[serde(default, skip_serializing_if = "AttributeMap::is_empty")]
    pub attributes: AttributeMap,
}

impl Cell {
    pub fn new(coordinates: CubeCoordinates) -> Self {
        Self {
            coordinates,
            is_blocked: false,
            is_opaque: false,
            cost: 0.0,
            attributes: AttributeMap::new(),
        }
    }

    pub fn coordinates(&self) -> CubeCoordinates {
        self.coordinates
    }

    /// A copy of this cell moved one sixth of a turn about the grid origin.
    /// Returns a new cell rather than mutating, since a cell's position is
    /// its identity.
    pub fn rotated(&self, rotation: Rotation) -> Self {
        let mut cell = self.clone();
        cell.coordinates = self.coordinates.rotated(rotation);
        cell
    }

    pub fn distance_to(&self, coordinates: CubeCoordinates) -> i32 {
        self.coordinates.distance_to(coordinates)
    }
}

// A cell is identified by its coordinates alone. Two cells at the same
// position compare equal even when their properties differ, which is what
// lets set and map operations treat "cell" and "position" interchangeably.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinates.hash(state);
    }
}
