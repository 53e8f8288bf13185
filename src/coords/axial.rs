use crate::coords::CubeCoordinates;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Two-component (column/row) coordinates. A compact storage form of
/// [`CubeCoordinates`] with the derived component dropped; conversion in both
/// directions is lossless and cannot fail.
#[derive(
    Copy, Clone, Debug, Default, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[display(fmt = "({}, {})", q, r)]
pub struct AxialCoordinates {
    pub q: i32,
    pub r: i32,
}

impl AxialCoordinates {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub const fn to_cube(self) -> CubeCoordinates {
        CubeCoordinates::new_xz(self.q, self.r)
    }
}

impl From<AxialCoordinates> for CubeCoordinates {
    fn from(axial: AxialCoordinates) -> Self {
        axial.to_cube()
    }
}

impl From<CubeCoordinates> for AxialCoordinates {
    fn from(cube: CubeCoordinates) -> Self {
        cube.to_axial()
    }
}
