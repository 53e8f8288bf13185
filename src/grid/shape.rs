//! Canned grid outlines and the coordinate generators behind them.

use crate::{
    coords::{AxialCoordinates, CoordinateSet, CubeCoordinates, OffsetLayout, Orientation},
    error::HexError,
};
use serde::{Deserialize, Serialize};

/// A parametric outline for generating a whole grid at once. Rectangles and
/// triangles lean on the grid's orientation (and, for rectangles, its offset
/// layout) to decide which rows get shifted; the other shapes are
/// orientation-independent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridShape {
    /// Regular hexagon of the given radius: the origin plus all hexes within
    /// `radius` steps of it. Radius 1 is the smallest, a 7-cell flower.
    Hexagon(i32),
    /// Hexagon with alternating side lengths `side1` and `side2`. Equal
    /// sides degrade to a regular hexagon with that many hexes per side.
    IrregularHexagon(i32, i32),
    /// `width` columns by `height` rows, each row shifted a whole hex
    /// further, giving a slanted rhombus.
    Parallelogram(i32, i32),
    /// `width` columns by `height` rows with alternating rows (or columns,
    /// flat-top) shifted back, giving straight pixel-space edges.
    Rectangle(i32, i32),
    /// Equilateral triangle with `side` hexes along each edge.
    Triangle(i32),
}

/// Produces the coordinate set for a shape. All shape parameters must be
/// positive.
pub(crate) fn generate(
    shape: GridShape,
    orientation: Orientation,
    offset_layout: OffsetLayout,
) -> Result<CoordinateSet, HexError> {
    match shape {
        GridShape::Hexagon(radius) => hexagon(radius),
        GridShape::IrregularHexagon(side1, side2) => {
            irregular_hexagon(side1, side2)
        }
        GridShape::Parallelogram(width, height) => parallelogram(width, height),
        GridShape::Rectangle(width, height) => {
            rectangle(width, height, orientation, offset_layout)
        }
        GridShape::Triangle(side) => triangle(side, orientation),
    }
}

fn hexagon(radius: i32) -> Result<CoordinateSet, HexError> {
    if radius <= 0 {
        return Err(HexError::InvalidArguments(format!(
            "hexagon radius must be greater than zero, got {}",
            radius
        )));
    }
    Ok(hexagon_coordinates(radius))
}

/// Hexagon generator without the positivity check, since the degenerate
/// radius-zero case (a single hex) is a legitimate internal fallback.
fn hexagon_coordinates(radius: i32) -> CoordinateSet {
    let mut tiles = CoordinateSet::default();
    for x in -radius..=radius {
        let y_min = i32::max(-radius, -x - radius);
        let y_max = i32::min(radius, -x + radius);
        for y in y_min..=y_max {
            tiles.insert(CubeCoordinates::new_xy(x, y));
        }
    }
    tiles
}

fn irregular_hexagon(side1: i32, side2: i32) -> Result<CoordinateSet, HexError> {
    if side1 <= 0 || side2 <= 0 {
        return Err(HexError::InvalidArguments(format!(
            "irregular hexagon sides must be greater than zero, got {} and {}",
            side1, side2
        )));
    }
    if side1 == side2 {
        // Equal sides make a regular hexagon with side1 hexes per side
        return Ok(hexagon_coordinates(side1 - 1));
    }

    let total = side1 + side2 - 1;
    let mut tiles = CoordinateSet::default();
    // Upper half: rows grow toward full width
    for r in 0..side1 {
        let start = total - side2 - r;
        for q in start..total {
            tiles.insert(AxialCoordinates::new(q, r).to_cube());
        }
    }
    // Lower half: rows shrink back down
    for r_index in 0..(total - side1) {
        let r = side1 + r_index;
        let end = total - r_index - 1;
        for q in 0..end {
            tiles.insert(AxialCoordinates::new(q, r).to_cube());
        }
    }
    Ok(tiles)
}

fn parallelogram(width: i32, height: i32) -> Result<CoordinateSet, HexError> {
    if width <= 0 || height <= 0 {
        return Err(HexError::InvalidArguments(format!(
            "parallelogram width and height must be greater than zero, got {}x{}",
            width, height
        )));
    }
    let mut tiles = CoordinateSet::default();
    for row in 0..height {
        for column in 0..width {
            tiles.insert(AxialCoordinates::new(row, column).to_cube());
        }
    }
    Ok(tiles)
}

fn rectangle(
    width: i32,
    height: i32,
    orientation: Orientation,
    offset_layout: OffsetLayout,
) -> Result<CoordinateSet, HexError> {
    if width <= 0 || height <= 0 {
        return Err(HexError::InvalidArguments(format!(
            "rectangle width and height must be greater than zero, got {}x{}",
            width, height
        )));
    }
    let mut tiles = CoordinateSet::default();
    match orientation {
        Orientation::PointyOnTop => {
            for r in 0..height {
                let offset = match offset_layout {
                    OffsetLayout::Even => (r + 1) >> 1,
                    OffsetLayout::Odd => r >> 1,
                };
                for q in -offset..(width - offset) {
                    tiles.insert(AxialCoordinates::new(q, r).to_cube());
                }
            }
        }
        Orientation::FlatOnTop => {
            for q in 0..width {
                let offset = match offset_layout {
                    OffsetLayout::Even => (q + 1) >> 1,
                    OffsetLayout::Odd => q >> 1,
                };
                for r in -offset..(height - offset) {
                    tiles.insert(AxialCoordinates::new(q, r).to_cube());
                }
            }
        }
    }
    Ok(tiles)
}

fn triangle(side: i32, orientation: Orientation) -> Result<CoordinateSet, HexError> {
    if side <= 0 {
        return Err(HexError::InvalidArguments(format!(
            "triangle side must be greater than zero, got {}",
            side
        )));
    }
    let mut tiles = CoordinateSet::default();
    let side = side - 1;
    match orientation {
        Orientation::PointyOnTop => {
            for x in 0..=side {
                for y in 0..=(side - x) {
                    tiles.insert(CubeCoordinates::new_xy(x, y));
                }
            }
        }
        Orientation::FlatOnTop => {
            for x in 0..=side {
                for y in (side - x)..=side {
                    tiles.insert(CubeCoordinates::new_xy(x, y));
                }
            }
        }
    }
    Ok(tiles)
}
