//! Geometry and search kernel for hexagonal tile grids.
//!
//! The heart of the crate is [`CubeCoordinates`], a three-component integer
//! position with cube algebra (distances, neighbors, rotations, lines) built
//! on top. [`HexGrid`] stores [`Cell`]s keyed by those coordinates and layers
//! on grid-aware operations: rings, reachability, field of view, A*
//! pathfinding, and pixel-space projection for drawing. The search
//! algorithms themselves run against the [`GridView`] trait, so they also
//! work over custom cell storage.
//!
//! ```
//! use hexgrid::{
//!     CubeCoordinates, GridShape, HexGrid, OffsetLayout, Orientation,
//! };
//!
//! let mut grid = HexGrid::from_shape(
//!     GridShape::Hexagon(2),
//!     Orientation::PointyOnTop,
//!     OffsetLayout::Even,
//! );
//!
//! // Wall off a hex, then route around it
//! let wall = CubeCoordinates::new(1, 0, -1).unwrap();
//! grid.cell_at_mut(wall).unwrap().is_blocked = true;
//! let path = grid
//!     .find_path_coordinates(
//!         CubeCoordinates::ORIGIN,
//!         CubeCoordinates::new(2, 0, -2).unwrap(),
//!     )
//!     .unwrap();
//! assert_eq!(path.len(), 4);
//! assert!(!path.contains(&wall));
//! ```

mod attribute;
mod coords;
mod error;
mod geom;
mod grid;
pub mod search;
mod util;

pub use crate::{
    attribute::{Attribute, AttributeMap},
    coords::{
        AxialCoordinates, CoordinateMap, CoordinateSet, CubeCoordinates,
        CubeFractionalCoordinates, FlatDirection, OffsetCoordinates, OffsetLayout,
        Orientation, PointyDirection, Rotation,
    },
    error::HexError,
    geom::{HexSize, Point},
    grid::{Cell, CellMap, GridShape, HexGrid},
    search::{queue::PriorityQueue, GridView},
};
