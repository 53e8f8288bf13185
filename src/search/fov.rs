//! Field-of-view computation via ring-by-ring shadowcasting.
//!
//! Visibility is resolved in angular space around the viewer. Each cell on a
//! ring subtends an arc of the viewer's horizon; opaque cells contribute
//! their arcs to a growing shadow line, and cells on later rings are hidden
//! when their own arc falls inside it. Arcs from one ring only take effect on
//! the rings behind it, so cells never occlude their ring-mates.

use crate::{
    coords::{CoordinateSet, CubeCoordinates, Orientation},
    error::HexError,
    geom::{HexSize, Point},
    search::{ring, GridView},
};

/// Tolerance for angular comparisons, soaking up float error so cells whose
/// arc boundary exactly touches a shadow boundary resolve consistently.
const ANGLE_EPSILON: f64 = 1e-9;

/// Accumulated shadow arcs, kept as sorted disjoint `[start, end]` intervals
/// in degrees within `[0, 360]`. Arcs crossing the zero mark are stored
/// split.
#[derive(Default)]
struct ShadowLine {
    arcs: Vec<(f64, f64)>,
}

impl ShadowLine {
    /// Adds an arc to the shadow, merging overlapping intervals.
    fn add(&mut self, start: f64, end: f64) {
        for segment in split_arc(start, end) {
            self.insert(segment);
        }
    }

    fn insert(&mut self, segment: (f64, f64)) {
        self.arcs.push(segment);
        self.arcs.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mut merged: Vec<(f64, f64)> = Vec::new();
        for (start, end) in self.arcs.drain(..) {
            match merged.last_mut() {
                Some(last) if start <= last.1 + ANGLE_EPSILON => {
                    last.1 = last.1.max(end);
                }
                _ => merged.push((start, end)),
            }
        }
        self.arcs = merged;
    }

    /// Is a single angle inside the shadow? Boundaries count as shadowed.
    fn covers_angle(&self, angle: f64) -> bool {
        let angle = angle.rem_euclid(360.0);
        self.arcs.iter().any(|&(start, end)| {
            angle >= start - ANGLE_EPSILON && angle <= end + ANGLE_EPSILON
        })
    }

    /// Is an entire arc inside the shadow? Since stored arcs are merged, a
    /// fully covered segment must sit inside one interval.
    fn covers_arc(&self, start: f64, end: f64) -> bool {
        split_arc(start, end).into_iter().all(|(s, e)| {
            self.arcs.iter().any(|&(shadow_start, shadow_end)| {
                s >= shadow_start - ANGLE_EPSILON && e <= shadow_end + ANGLE_EPSILON
            })
        })
    }
}

/// Normalizes an arc into `[0, 360]`, splitting it in two when it wraps past
/// the zero mark. The input span must be under a full turn.
fn split_arc(start: f64, end: f64) -> Vec<(f64, f64)> {
    let span = end - start;
    let start = start.rem_euclid(360.0);
    let end = start + span;
    if end > 360.0 {
        vec![(start, 360.0), (0.0, end - 360.0)]
    } else {
        vec![(start, end)]
    }
}

/// Bearing of `coordinates` as seen from `origin`, in degrees within
/// `[0, 360)`. Computed in a unit pixel projection; the choice of projection
/// only rotates the frame, which cancels out of every angle comparison.
fn bearing(origin: CubeCoordinates, coordinates: CubeCoordinates) -> f64 {
    let pixel = (coordinates - origin).to_pixel(
        Orientation::PointyOnTop,
        HexSize::new(1.0, 1.0),
        Point::ORIGIN,
    );
    pixel.y.atan2(pixel.x).to_degrees().rem_euclid(360.0)
}

/// All grid coordinates visible from `origin` within `radius` steps.
///
/// The origin always sees itself. Opaque cells are visible but hide what lies
/// behind them; blocked-yet-transparent cells hide nothing. Coordinates with
/// no cell on the grid are skipped and cast no shadow.
///
/// With `include_partially_visible` false, a cell is visible when the ray
/// through its center is unshadowed; when true, it is visible as long as any
/// part of its arc is.
pub fn field_of_view(
    origin: CubeCoordinates,
    radius: i32,
    grid: &impl GridView,
    include_partially_visible: bool,
) -> Result<CoordinateSet, HexError> {
    if radius < 0 {
        return Err(HexError::InvalidArguments(format!(
            "field of view radius must be non-negative, got {}",
            radius
        )));
    }

    let mut visible = CoordinateSet::default();
    visible.insert(origin);

    let mut shadows = ShadowLine::default();
    for ring_radius in 1..=radius {
        // A ring of radius r holds 6r cells, so each one spans a 360/(6r)
        // degree arc of the horizon
        let half_arc = 180.0 / (6 * ring_radius) as f64;
        let mut cast: Vec<(f64, f64)> = Vec::new();

        for coordinates in ring(origin, ring_radius)? {
            if !grid.is_valid(coordinates) {
                continue;
            }
            let center = bearing(origin, coordinates);
            let (start, end) = (center - half_arc, center + half_arc);

            let hidden = if include_partially_visible {
                shadows.covers_arc(start, end)
            } else {
                shadows.covers_angle(center)
            };
            if !hidden {
                visible.insert(coordinates);
            }
            if grid.is_opaque(coordinates) {
                cast.push((start, end));
            }
        }

        // Merge this ring's shadows only after the whole ring is resolved
        for (start, end) in cast {
            shadows.add(start, end);
        }
    }
    Ok(visible)
}
