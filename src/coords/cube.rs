use crate::{
    coords::{AxialCoordinates, OffsetCoordinates, OffsetLayout, Orientation, Rotation},
    error::HexError,
    geom::{HexSize, OrientationMatrix, Point},
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use strum::{EnumIter, IntoEnumIterator};

/// Unit vectors to the six edge-adjacent hexes, in direction-index order.
/// Index 0 points toward positive x along the y=0 plane and subsequent
/// indices walk clockwise on a pointy-top screen.
const DIRECTIONS: [CubeCoordinates; 6] = [
    CubeCoordinates { x: 1, y: 0, z: -1 },
    CubeCoordinates { x: 1, y: -1, z: 0 },
    CubeCoordinates { x: 0, y: -1, z: 1 },
    CubeCoordinates { x: -1, y: 0, z: 1 },
    CubeCoordinates { x: -1, y: 1, z: 0 },
    CubeCoordinates { x: 0, y: 1, z: -1 },
];

/// Vectors to the six diagonal hexes, those sharing only a corner with the
/// origin. Indexed in the same rotational order as [`DIRECTIONS`].
const DIAGONAL_DIRECTIONS: [CubeCoordinates; 6] = [
    CubeCoordinates { x: 2, y: -1, z: -1 },
    CubeCoordinates { x: 1, y: 1, z: -2 },
    CubeCoordinates { x: -1, y: 2, z: -1 },
    CubeCoordinates { x: -2, y: 1, z: 1 },
    CubeCoordinates { x: -1, y: -1, z: 2 },
    CubeCoordinates { x: 1, y: -2, z: 1 },
];

/// A position on the hex lattice, expressed as three integer components that
/// always sum to zero. The zero-sum invariant is what makes distance,
/// rotation, and neighbor math plain component arithmetic, so the fields are
/// private and every public constructor upholds it.
///
/// Every hex in the lattice has exactly one cube representation, which makes
/// this the key type for sets and maps throughout the crate.
#[derive(
    Copy, Clone, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", x, y, z)]
#[serde(try_from = "RawCubeCoordinates")]
pub struct CubeCoordinates {
    x: i32,
    y: i32,
    z: i32,
}

/// Unvalidated mirror of [`CubeCoordinates`], used to funnel deserialization
/// through the zero-sum check.
#[derive(Deserialize)]
struct RawCubeCoordinates {
    x: i32,
    y: i32,
    z: i32,
}

impl TryFrom<RawCubeCoordinates> for CubeCoordinates {
    type Error = HexError;

    fn try_from(raw: RawCubeCoordinates) -> Result<Self, Self::Error> {
        Self::new(raw.x, raw.y, raw.z)
    }
}

impl CubeCoordinates {
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    /// Constructs coordinates from all three components, validating the
    /// zero-sum invariant.
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self, HexError> {
        if x + y + z == 0 {
            Ok(Self { x, y, z })
        } else {
            Err(HexError::InvalidCoordinates { x, y, z })
        }
    }

    /// Constructs coordinates from the first two components, deriving the
    /// third. Cannot fail.
    pub const fn new_xy(x: i32, y: i32) -> Self {
        Self { x, y, z: -x - y }
    }

    /// Constructs coordinates from the outer two components, deriving the
    /// middle one. Cannot fail.
    pub const fn new_xz(x: i32, z: i32) -> Self {
        Self { x, y: -x - z, z }
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    pub const fn z(&self) -> i32 {
        self.z
    }

    /// The unit vector for a direction index. Indices wrap, so `-1` is the
    /// same direction as `5`.
    pub fn direction(index: i32) -> Self {
        DIRECTIONS[index.rem_euclid(6) as usize]
    }

    /// The diagonal vector for a direction index. Indices wrap like
    /// [`Self::direction`].
    pub fn diagonal_direction(index: i32) -> Self {
        DIAGONAL_DIRECTIONS[index.rem_euclid(6) as usize]
    }

    /// Number of steps between this hex and the origin.
    pub fn length(self) -> i32 {
        (self.x.abs() + self.y.abs() + self.z.abs()) / 2
    }

    /// Number of steps on the shortest hex-to-hex walk between two hexes.
    pub fn distance_to(self, other: Self) -> i32 {
        (self - other).length()
    }

    /// Multiplies all components by a factor. Scaling a direction vector
    /// jumps straight to the hex that many steps away.
    pub fn scale(self, factor: i32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// The edge-adjacent hex in the given direction.
    pub fn neighbor(self, direction: i32) -> Self {
        self + Self::direction(direction)
    }

    /// All six edge-adjacent hexes, in direction-index order.
    pub fn neighbors(self) -> [Self; 6] {
        DIRECTIONS.map(|direction| self + direction)
    }

    /// The corner-adjacent hex in the given direction.
    pub fn diagonal_neighbor(self, direction: i32) -> Self {
        self + Self::diagonal_direction(direction)
    }

    /// All six corner-adjacent hexes, in direction-index order.
    pub fn diagonal_neighbors(self) -> [Self; 6] {
        DIAGONAL_DIRECTIONS.map(|direction| self + direction)
    }

    /// This hex rotated one sixth of a turn about the origin.
    pub fn rotated(self, rotation: Rotation) -> Self {
        match rotation {
            Rotation::Left => Self {
                x: -self.y,
                y: -self.z,
                z: -self.x,
            },
            Rotation::Right => Self {
                x: -self.z,
                y: -self.x,
                z: -self.y,
            },
        }
    }

    /// Projects onto axial coordinates by dropping the derived component.
    pub fn to_axial(self) -> AxialCoordinates {
        AxialCoordinates::new(self.x, self.z)
    }

    /// Projects onto offset (column/row) coordinates under the given
    /// orientation and layout.
    pub fn to_offset(
        self,
        orientation: Orientation,
        offset_layout: OffsetLayout,
    ) -> OffsetCoordinates {
        let sign = offset_layout.parity_sign();
        let (column, row) = match orientation {
            Orientation::PointyOnTop => {
                (self.x + (self.z + sign * (self.z.abs() & 1)) / 2, self.z)
            }
            Orientation::FlatOnTop => {
                (self.x, self.z + (self.x + sign * (self.x.abs() & 1)) / 2)
            }
        };
        OffsetCoordinates::new(column, row, orientation, offset_layout)
    }

    /// Center of this hex in pixel space.
    pub fn to_pixel(
        self,
        orientation: Orientation,
        hex_size: HexSize,
        origin: Point,
    ) -> Point {
        let matrix = OrientationMatrix::new(orientation);
        let q = self.x as f64;
        let r = self.z as f64;
        Point::new(
            (matrix.f00 * q + matrix.f01 * r) * hex_size.width + origin.x,
            (matrix.f10 * q + matrix.f11 * r) * hex_size.height + origin.y,
        )
    }

    /// The hex containing a pixel-space point.
    pub fn from_pixel(
        point: Point,
        orientation: Orientation,
        hex_size: HexSize,
        origin: Point,
    ) -> Self {
        let matrix = OrientationMatrix::new(orientation);
        let px = (point.x - origin.x) / hex_size.width;
        let py = (point.y - origin.y) / hex_size.height;
        let x = matrix.b00 * px + matrix.b01 * py;
        let z = matrix.b10 * px + matrix.b11 * py;
        CubeFractionalCoordinates {
            x,
            y: -x - z,
            z,
        }
        .round()
    }
}

impl Add for CubeCoordinates {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        // Sums of zero-sum vectors stay zero-sum
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for CubeCoordinates {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

/// A point in continuous cube space, used as an intermediate for pixel
/// conversion and line drawing. Carries the same zero-sum invariant as
/// [`CubeCoordinates`], checked with rounding tolerance.
#[derive(Copy, Clone, Debug, Display, PartialEq)]
#[display(fmt = "({}, {}, {})", x, y, z)]
pub struct CubeFractionalCoordinates {
    x: f64,
    y: f64,
    z: f64,
}

impl CubeFractionalCoordinates {
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, HexError> {
        if (x + y + z).round() == 0.0 {
            Ok(Self { x, y, z })
        } else {
            Err(HexError::InvalidFractionalCoordinates { x, y, z })
        }
    }

    pub const fn x(&self) -> f64 {
        self.x
    }

    pub const fn y(&self) -> f64 {
        self.y
    }

    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Rounds to the nearest lattice hex. Rounding each component
    /// independently can break the zero-sum invariant, so the component with
    /// the largest rounding error is recomputed from the other two.
    pub fn round(self) -> CubeCoordinates {
        let mut rx = self.x.round();
        let mut ry = self.y.round();
        let mut rz = self.z.round();

        let dx = (rx - self.x).abs();
        let dy = (ry - self.y).abs();
        let dz = (rz - self.z).abs();

        if dx > dy && dx > dz {
            rx = -ry - rz;
        } else if dy > dz {
            ry = -rx - rz;
        } else {
            rz = -rx - ry;
        }

        CubeCoordinates {
            x: rx as i32,
            y: ry as i32,
            z: rz as i32,
        }
    }

    /// Linear interpolation between two fractional points, rounded to the
    /// lattice. `t` runs from 0 (self) to 1 (other).
    pub fn lerp(self, other: Self, t: f64) -> CubeCoordinates {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
        .round()
    }

    /// Shifts the point by a tiny zero-sum epsilon so that interpolated
    /// samples never land exactly on an edge between two hexes.
    pub(crate) fn nudged(self) -> Self {
        Self {
            x: self.x + 1e-6,
            y: self.y + 1e-6,
            z: self.z - 2e-6,
        }
    }
}

impl From<CubeCoordinates> for CubeFractionalCoordinates {
    fn from(coordinates: CubeCoordinates) -> Self {
        Self {
            x: coordinates.x as f64,
            y: coordinates.y as f64,
            z: coordinates.z as f64,
        }
    }
}

/// Compass names for the six directions on a pointy-top grid. Discriminants
/// match the direction-index order used by [`CubeCoordinates::direction`].
#[derive(
    Copy, Clone, Debug, Display, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PointyDirection {
    NorthEast,
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
}

impl PointyDirection {
    pub const fn index(self) -> i32 {
        self as i32
    }

    pub fn vector(self) -> CubeCoordinates {
        CubeCoordinates::direction(self.index())
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// Compass names for the six directions on a flat-top grid.
#[derive(
    Copy, Clone, Debug, Display, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FlatDirection {
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
    North,
}

impl FlatDirection {
    pub const fn index(self) -> i32 {
        self as i32
    }

    pub fn vector(self) -> CubeCoordinates {
        CubeCoordinates::direction(self.index())
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(x: i32, y: i32, z: i32) -> CubeCoordinates {
        CubeCoordinates::new(x, y, z).unwrap()
    }

    #[test]
    fn test_new_validates_sum() {
        assert!(CubeCoordinates::new(1, 1, -2).is_ok());
        assert_eq!(
            CubeCoordinates::new(1, 1, -1),
            Err(HexError::InvalidCoordinates { x: 1, y: 1, z: -1 })
        );
    }

    #[test]
    fn test_derived_constructors() {
        assert_eq!(CubeCoordinates::new_xy(2, -3), cube(2, -3, 1));
        assert_eq!(CubeCoordinates::new_xz(2, 1), cube(2, -3, 1));
    }

    #[test]
    fn test_add_subtract_scale() {
        assert_eq!(cube(1, 1, -2) + cube(2, -1, -1), cube(3, 0, -3));
        assert_eq!(cube(1, 1, -2) - cube(2, -1, -1), cube(-1, 2, -1));
        assert_eq!(cube(1, 1, -2).scale(2), cube(2, 2, -4));
    }

    #[test]
    fn test_length_and_distance() {
        assert_eq!(cube(0, 0, 0).length(), 0);
        assert_eq!(cube(1, 1, -2).length(), 2);
        assert_eq!(cube(1, 1, -2).distance_to(cube(2, -1, -1)), 2);
        assert_eq!(cube(3, -3, 0).distance_to(cube(3, -3, 0)), 0);
    }

    #[test]
    fn test_distance_is_a_metric() {
        let a = cube(2, -3, 1);
        let b = cube(-1, 1, 0);
        let c = cube(0, 2, -2);
        assert_eq!(a.distance_to(b), b.distance_to(a));
        assert_eq!(a.distance_to(a), 0);
        assert!(a.distance_to(c) <= a.distance_to(b) + b.distance_to(c));
    }

    #[test]
    fn test_direction_wrapping() {
        assert_eq!(CubeCoordinates::direction(0), cube(1, 0, -1));
        assert_eq!(CubeCoordinates::direction(6), cube(1, 0, -1));
        assert_eq!(CubeCoordinates::direction(-1), cube(0, 1, -1));
        assert_eq!(CubeCoordinates::direction(-7), cube(0, 1, -1));
        assert_eq!(CubeCoordinates::diagonal_direction(7), cube(1, 1, -2));
    }

    #[test]
    fn test_neighbors() {
        assert_eq!(cube(1, -1, 0).neighbor(2), cube(1, -2, 1));
        assert_eq!(cube(1, -1, 0).diagonal_neighbor(1), cube(2, 0, -2));

        let neighbors = CubeCoordinates::ORIGIN.neighbors();
        assert_eq!(neighbors.len(), 6);
        assert_eq!(neighbors[4], cube(-1, 1, 0));
        for (index, neighbor) in CubeCoordinates::ORIGIN
            .diagonal_neighbors()
            .into_iter()
            .enumerate()
        {
            assert_eq!(neighbor.length(), 2, "diagonal {} length", index);
        }
    }

    #[test]
    fn test_rotation() {
        let coordinates = cube(1, 1, -2);
        assert_eq!(coordinates.rotated(Rotation::Left), cube(-1, 2, -1));
        assert_eq!(coordinates.rotated(Rotation::Right), cube(2, -1, -1));
        // Six rotations in one direction come back home
        let mut rotated = coordinates;
        for _ in 0..6 {
            rotated = rotated.rotated(Rotation::Left);
        }
        assert_eq!(rotated, coordinates);
    }

    #[test]
    fn test_fractional_round() {
        let rounded = CubeFractionalCoordinates::new(1.2, 1.3, -2.5)
            .unwrap()
            .round();
        assert_eq!(rounded, cube(1, 1, -2));
        assert!(CubeFractionalCoordinates::new(1.2, 1.3, -1.0).is_err());
    }

    #[test]
    fn test_lerp() {
        let from = CubeFractionalCoordinates::from(CubeCoordinates::ORIGIN);
        let to = CubeFractionalCoordinates::from(cube(2, 0, -2));
        assert_eq!(from.lerp(to, 0.0), CubeCoordinates::ORIGIN);
        assert_eq!(from.lerp(to, 0.5), cube(1, 0, -1));
        assert_eq!(from.lerp(to, 1.0), cube(2, 0, -2));
    }

    #[test]
    fn test_direction_enums_match_indices() {
        assert_eq!(PointyDirection::East.index(), 1);
        assert_eq!(PointyDirection::West.vector(), cube(-1, 1, 0));
        assert_eq!(FlatDirection::North.index(), 5);
        assert_eq!(FlatDirection::North.vector(), cube(0, 1, -1));
        assert_eq!(PointyDirection::all().count(), 6);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let ok: CubeCoordinates =
            serde_json::from_str(r#"{"x":1,"y":-1,"z":0}"#).unwrap();
        assert_eq!(ok, cube(1, -1, 0));
        let bad: Result<CubeCoordinates, _> =
            serde_json::from_str(r#"{"x":1,"y":1,"z":1}"#);
        assert!(bad.is_err());
    }
}
