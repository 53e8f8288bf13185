use crate::coords::{CubeCoordinates, OffsetLayout, Orientation};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Column/row coordinates for rectangular storage, where alternating rows
/// (pointy-top) or columns (flat-top) are shifted by half a hex. Unlike
/// [`crate::coords::AxialCoordinates`] the mapping to cube space depends on
/// the orientation and layout, so both are carried along.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display(fmt = "({}, {})", column, row)]
pub struct OffsetCoordinates {
    pub column: i32,
    pub row: i32,
    pub orientation: Orientation,
    pub offset_layout: OffsetLayout,
}

impl OffsetCoordinates {
    pub const fn new(
        column: i32,
        row: i32,
        orientation: Orientation,
        offset_layout: OffsetLayout,
    ) -> Self {
        Self {
            column,
            row,
            orientation,
            offset_layout,
        }
    }

    /// Converts back to cube coordinates. The derived component is computed
    /// from the other two, so the result always satisfies the zero-sum
    /// invariant.
    pub fn to_cube(self) -> CubeCoordinates {
        let sign = self.offset_layout.parity_sign();
        match self.orientation {
            Orientation::PointyOnTop => {
                let x = self.column
                    - (self.row + sign * (self.row.abs() & 1)) / 2;
                CubeCoordinates::new_xz(x, self.row)
            }
            Orientation::FlatOnTop => {
                let z = self.row
                    - (self.column + sign * (self.column.abs() & 1)) / 2;
                CubeCoordinates::new_xz(self.column, z)
            }
        }
    }
}

impl From<OffsetCoordinates> for CubeCoordinates {
    fn from(offset: OffsetCoordinates) -> Self {
        offset.to_cube()
    }
}
