//! Screen-space primitives used when projecting hexes onto a pixel plane.

use crate::coords::Orientation;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A position in pixel space.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Serialize, Deserialize)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Half-extents of a single hex in pixel space. Also doubles as a generic
/// width/height pair for whole-grid pixel dimensions.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Serialize, Deserialize)]
#[display(fmt = "{}x{}", width, height)]
pub struct HexSize {
    pub width: f64,
    pub height: f64,
}

impl HexSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The 2x2 forward/backward matrices and corner phase for one grid
/// orientation. Forward maps axial coordinates to pixels, backward does the
/// inverse.
pub(crate) struct OrientationMatrix {
    pub f00: f64,
    pub f01: f64,
    pub f10: f64,
    pub f11: f64,
    pub b00: f64,
    pub b01: f64,
    pub b10: f64,
    pub b11: f64,
    /// Corner offset in units of 60 degrees. Pointy-top hexes have their
    /// first corner rotated half a step off the x axis.
    pub start_angle: f64,
}

impl OrientationMatrix {
    pub fn new(orientation: Orientation) -> Self {
        let sqrt3 = 3.0_f64.sqrt();
        match orientation {
            Orientation::PointyOnTop => Self {
                f00: sqrt3,
                f01: sqrt3 / 2.0,
                f10: 0.0,
                f11: 3.0 / 2.0,
                b00: sqrt3 / 3.0,
                b01: -1.0 / 3.0,
                b10: 0.0,
                b11: 2.0 / 3.0,
                start_angle: 0.5,
            },
            Orientation::FlatOnTop => Self {
                f00: 3.0 / 2.0,
                f01: 0.0,
                f10: sqrt3 / 2.0,
                f11: sqrt3,
                b00: 2.0 / 3.0,
                b01: 0.0,
                b10: -1.0 / 3.0,
                b11: sqrt3 / 3.0,
                start_angle: 0.0,
            },
        }
    }
}

/// Computes the six corner points of a hex centered at `center`, in corner
/// order starting from the orientation's first corner.
pub(crate) fn polygon_corners(
    center: Point,
    hex_size: HexSize,
    orientation: Orientation,
) -> [Point; 6] {
    let matrix = OrientationMatrix::new(orientation);
    let mut corners = [Point::ORIGIN; 6];
    for (index, corner) in corners.iter_mut().enumerate() {
        let angle =
            2.0 * std::f64::consts::PI * (matrix.start_angle + index as f64) / 6.0;
        *corner = Point::new(
            center.x + hex_size.width * angle.cos(),
            center.y + hex_size.height * angle.sin(),
        );
    }
    corners
}
