//! Grid-independent search and traversal algorithms.
//!
//! Everything here works against the [`GridView`] trait rather than a
//! concrete grid type, so pathfinding and visibility can run over any cell
//! storage that can answer four questions about a coordinate. Pure geometry
//! (rings, lines) needs no grid at all.

mod fov;
mod path;
pub mod queue;

pub use self::{fov::field_of_view, path::find_path};

use crate::{
    coords::{CoordinateSet, CubeCoordinates, CubeFractionalCoordinates},
    error::HexError,
};

/// Read-only questions a search algorithm asks about a grid. Implemented by
/// [`crate::HexGrid`], but any map-like structure can provide its own view.
pub trait GridView {
    /// Does a cell exist at these coordinates?
    fn is_valid(&self, coordinates: CubeCoordinates) -> bool;

    /// Is the cell impassable for movement? Missing cells report `false`;
    /// validity is checked separately.
    fn is_blocked(&self, coordinates: CubeCoordinates) -> bool;

    /// Does the cell block line of sight? Independent of [`Self::is_blocked`];
    /// a wall can be see-through and a fog bank walkable.
    fn is_opaque(&self, coordinates: CubeCoordinates) -> bool;

    /// Extra traversal cost of entering the cell, on top of the uniform
    /// per-step cost. Missing cells report zero.
    fn cost(&self, coordinates: CubeCoordinates) -> f64;
}

/// All coordinates exactly `radius` steps from `origin`. Radius zero yields
/// just the origin; a negative radius is an error.
///
/// Walks the ring perimeter: jump `radius` steps out in direction 4, then
/// take `radius` steps along each of the six sides.
pub fn ring(
    origin: CubeCoordinates,
    radius: i32,
) -> Result<CoordinateSet, HexError> {
    if radius < 0 {
        return Err(HexError::InvalidArguments(format!(
            "ring radius must be non-negative, got {}",
            radius
        )));
    }

    let mut results = CoordinateSet::default();
    if radius == 0 {
        results.insert(origin);
        return Ok(results);
    }

    let mut hex = origin + CubeCoordinates::direction(4).scale(radius);
    for side in 0..6 {
        for _ in 0..radius {
            results.insert(hex);
            hex = hex.neighbor(side);
        }
    }
    Ok(results)
}

/// All coordinates at most `radius` steps from `origin`, i.e. the union of
/// rings 0 through `radius`.
pub fn filled_ring(
    origin: CubeCoordinates,
    radius: i32,
) -> Result<CoordinateSet, HexError> {
    if radius < 0 {
        return Err(HexError::InvalidArguments(format!(
            "filled ring radius must be non-negative, got {}",
            radius
        )));
    }

    let mut results = CoordinateSet::default();
    results.insert(origin);
    for ring_radius in 1..=radius {
        results.extend(ring(origin, ring_radius)?);
    }
    Ok(results)
}

/// The hexes crossed by a straight segment between two coordinates, endpoints
/// included. Both endpoints are nudged off exact edge midpoints so sampling
/// is deterministic when the segment runs along a hex boundary.
pub fn line(from: CubeCoordinates, to: CubeCoordinates) -> CoordinateSet {
    let distance = from.distance_to(to);
    let start = CubeFractionalCoordinates::from(from).nudged();
    let end = CubeFractionalCoordinates::from(to).nudged();
    let step = 1.0 / f64::max(distance as f64, 1.0);

    let mut results = CoordinateSet::default();
    for sample in 0..=distance {
        results.insert(start.lerp(end, step * sample as f64));
    }
    results
}

/// All coordinates reachable from `origin` in at most `steps` moves between
/// edge-adjacent, non-blocked cells. The origin itself is always included,
/// even when blocked; blocked cells elsewhere are neither entered nor crossed.
pub fn breadth_first_search(
    origin: CubeCoordinates,
    steps: i32,
    grid: &impl GridView,
) -> Result<CoordinateSet, HexError> {
    if steps < 0 {
        return Err(HexError::InvalidArguments(format!(
            "step count must be non-negative, got {}",
            steps
        )));
    }

    let mut results = CoordinateSet::default();
    results.insert(origin);
    let mut fringe = vec![origin];

    for _ in 0..steps {
        let mut next_fringe = Vec::new();
        for coordinates in fringe {
            for direction in 0..6 {
                let neighbor = coordinates.neighbor(direction);
                if grid.is_valid(neighbor)
                    && !grid.is_blocked(neighbor)
                    && !results.contains(&neighbor)
                {
                    results.insert(neighbor);
                    next_fringe.push(neighbor);
                }
            }
        }
        fringe = next_fringe;
    }
    Ok(results)
}
