//! Coordinate systems for hexagonal lattices.
//!
//! The canonical system is cube coordinates: three integers constrained to
//! sum to zero. Axial and offset coordinates are alternate projections that
//! convert losslessly to and from cube form. Everything that computes
//! (distances, neighbors, rotations, searches) works on cube coordinates;
//! the other systems exist for storage and interop.

mod axial;
mod cube;
mod offset;

pub use self::{axial::*, cube::*, offset::*};

use fnv::FnvBuildHasher;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A set of cube coordinates, keyed with the Fowler-Noll-Vo hasher since the
/// keys are tiny.
pub type CoordinateSet = HashSet<CubeCoordinates, FnvBuildHasher>;

/// A map keyed by cube coordinates. See [`CoordinateSet`] for hasher choice.
pub type CoordinateMap<T> = HashMap<CubeCoordinates, T, FnvBuildHasher>;

/// Which way the hexes point. Pointy-top hexes have a vertex at the top of
/// the screen, flat-top hexes have an edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    PointyOnTop,
    FlatOnTop,
}

/// Which rows (pointy) or columns (flat) get shoved over in an offset
/// layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetLayout {
    Even,
    Odd,
}

impl OffsetLayout {
    /// Sign applied to the parity correction term in offset conversions.
    pub(crate) fn parity_sign(self) -> i32 {
        match self {
            Self::Even => 1,
            Self::Odd => -1,
        }
    }
}

/// A sixth-of-a-turn rotation about the grid origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    Left,
    Right,
}
