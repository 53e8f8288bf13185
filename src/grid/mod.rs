//! The grid container: cell storage plus the orientation, layout, and pixel
//! parameters that give coordinates a place on screen.

mod cell;
mod shape;

pub use self::{cell::Cell, shape::GridShape};

use crate::{
    attribute::AttributeMap,
    coords::{
        CoordinateMap, CoordinateSet, CubeCoordinates, OffsetLayout, Orientation,
    },
    error::HexError,
    geom::{self, HexSize, Point},
    search::{self, GridView},
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Cell storage keyed by position. See [`crate::coords::CoordinateMap`].
pub type CellMap = CoordinateMap<Cell>;

/// Default pixel half-extents of a single hex.
const DEFAULT_HEX_SIZE: HexSize = HexSize::new(10.0, 10.0);

/// A hexagonal grid: a set of [`Cell`]s addressed by cube coordinates,
/// together with everything needed to draw them and search across them.
///
/// Cells are stored in a map keyed by their coordinates, and a cell's
/// coordinates are immutable, so the key and the cell can never disagree.
/// Cell properties (blocked, opaque, cost, attributes) are freely mutable
/// through [`Self::cell_at_mut`].
///
/// The grid keeps a derived `pixel_size`, the bounding box of all cells in
/// pixel space, refreshed whenever the cell set or hex size changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HexGrid {
    #[serde(with = "crate::util::cell_map_to_vec_serde")]
    cells: CellMap,
    orientation: Orientation,
    offset_layout: OffsetLayout,
    hex_size: HexSize,
    pub origin: Point,
    #[serde(default, skip_serializing_if = "AttributeMap::is_empty")]
    pub attributes: AttributeMap,
    /// Derived bounding box, serialized for convenience and recomputed on
    /// every mutation that can move it
    pixel_size: HexSize,
}

impl HexGrid {
    /// Builds a grid from an explicit cell collection. Later duplicates at
    /// the same coordinates replace earlier ones.
    pub fn new(
        cells: impl IntoIterator<Item = Cell>,
        orientation: Orientation,
        offset_layout: OffsetLayout,
    ) -> Self {
        let cells: CellMap = cells
            .into_iter()
            .map(|cell| (cell.coordinates(), cell))
            .collect();
        let mut grid = Self {
            cells,
            orientation,
            offset_layout,
            hex_size: DEFAULT_HEX_SIZE,
            origin: Point::ORIGIN,
            attributes: AttributeMap::new(),
            pixel_size: HexSize::default(),
        };
        grid.update_pixel_size();
        debug!("initialized {:?} grid with {} cells", orientation, grid.len());
        grid
    }

    /// Builds a grid from a generated shape. Invalid shape parameters yield
    /// an empty grid rather than an error, so a grid constructor can be
    /// chained without ceremony; the problem is logged.
    pub fn from_shape(
        shape: GridShape,
        orientation: Orientation,
        offset_layout: OffsetLayout,
    ) -> Self {
        let cells = match shape::generate(shape, orientation, offset_layout) {
            Ok(coordinates) => coordinates,
            Err(error) => {
                warn!("grid generation failed for {:?}: {}", shape, error);
                CoordinateSet::default()
            }
        };
        Self::new(cells.into_iter().map(Cell::new), orientation, offset_layout)
    }

    /// Builds a shaped grid scaled and centered so the whole thing fits
    /// inside `pixel_size`.
    pub fn with_pixel_size(
        shape: GridShape,
        orientation: Orientation,
        offset_layout: OffsetLayout,
        pixel_size: HexSize,
    ) -> Self {
        let mut grid = Self::from_shape(shape, orientation, offset_layout);
        grid.fit_in(pixel_size);
        grid
    }

    // ------------------------ Storage and lookup ------------------------

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    pub fn cell_at(&self, coordinates: CubeCoordinates) -> Option<&Cell> {
        self.cells.get(&coordinates)
    }

    /// Mutable access to a cell's properties. The coordinates themselves
    /// stay fixed, so map keys cannot be invalidated through this.
    pub fn cell_at_mut(&mut self, coordinates: CubeCoordinates) -> Option<&mut Cell> {
        self.cells.get_mut(&coordinates)
    }

    /// Inserts a cell, replacing any existing cell at the same coordinates,
    /// which is returned.
    pub fn add_cell(&mut self, cell: Cell) -> Option<Cell> {
        let previous = self.cells.insert(cell.coordinates(), cell);
        self.update_pixel_size();
        previous
    }

    pub fn remove_cell(&mut self, coordinates: CubeCoordinates) -> Option<Cell> {
        let removed = self.cells.remove(&coordinates);
        if removed.is_some() {
            self.update_pixel_size();
        }
        removed
    }

    pub fn is_valid_coordinates(&self, coordinates: CubeCoordinates) -> bool {
        self.cells.contains_key(&coordinates)
    }

    pub fn all_coordinates(&self) -> CoordinateSet {
        self.cells.keys().copied().collect()
    }

    pub fn blocked_coordinates(&self) -> CoordinateSet {
        self.filtered_coordinates(|cell| cell.is_blocked)
    }

    pub fn non_blocked_coordinates(&self) -> CoordinateSet {
        self.filtered_coordinates(|cell| !cell.is_blocked)
    }

    pub fn opaque_coordinates(&self) -> CoordinateSet {
        self.filtered_coordinates(|cell| cell.is_opaque)
    }

    fn filtered_coordinates(&self, predicate: impl Fn(&Cell) -> bool) -> CoordinateSet {
        self.cells
            .values()
            .filter(|cell| predicate(cell))
            .map(Cell::coordinates)
            .collect()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn offset_layout(&self) -> OffsetLayout {
        self.offset_layout
    }

    pub fn hex_size(&self) -> HexSize {
        self.hex_size
    }

    pub fn set_hex_size(&mut self, hex_size: HexSize) {
        self.hex_size = hex_size;
        self.update_pixel_size();
    }

    /// Pixel-space bounding box of the whole grid.
    pub fn pixel_size(&self) -> HexSize {
        self.pixel_size
    }

    // ------------------------------ Relations ------------------------------

    /// Coordinates of the neighbor in a direction, if that cell exists.
    pub fn neighbor_coordinates(
        &self,
        coordinates: CubeCoordinates,
        direction: i32,
    ) -> Option<CubeCoordinates> {
        let neighbor = coordinates.neighbor(direction);
        self.is_valid_coordinates(neighbor).then_some(neighbor)
    }

    /// The neighboring cell in a direction, if it exists.
    pub fn neighbor(&self, cell: &Cell, direction: i32) -> Option<&Cell> {
        self.cell_at(cell.coordinates().neighbor(direction))
    }

    /// Coordinates of all on-grid neighbors.
    pub fn neighbors_coordinates(&self, coordinates: CubeCoordinates) -> CoordinateSet {
        coordinates
            .neighbors()
            .into_iter()
            .filter(|neighbor| self.is_valid_coordinates(*neighbor))
            .collect()
    }

    /// All on-grid neighboring cells.
    pub fn neighbors(&self, cell: &Cell) -> Vec<&Cell> {
        cell.coordinates()
            .neighbors()
            .into_iter()
            .filter_map(|neighbor| self.cell_at(neighbor))
            .collect()
    }

    pub fn diagonal_neighbor_coordinates(
        &self,
        coordinates: CubeCoordinates,
        direction: i32,
    ) -> Option<CubeCoordinates> {
        let neighbor = coordinates.diagonal_neighbor(direction);
        self.is_valid_coordinates(neighbor).then_some(neighbor)
    }

    pub fn diagonal_neighbor(&self, cell: &Cell, direction: i32) -> Option<&Cell> {
        self.cell_at(cell.coordinates().diagonal_neighbor(direction))
    }

    pub fn diagonal_neighbors_coordinates(
        &self,
        coordinates: CubeCoordinates,
    ) -> CoordinateSet {
        coordinates
            .diagonal_neighbors()
            .into_iter()
            .filter(|neighbor| self.is_valid_coordinates(*neighbor))
            .collect()
    }

    pub fn diagonal_neighbors(&self, cell: &Cell) -> Vec<&Cell> {
        cell.coordinates()
            .diagonal_neighbors()
            .into_iter()
            .filter_map(|neighbor| self.cell_at(neighbor))
            .collect()
    }

    /// The straight line between two coordinates, or `None` when any hex on
    /// it falls off the grid.
    pub fn line_coordinates(
        &self,
        from: CubeCoordinates,
        to: CubeCoordinates,
    ) -> Option<CoordinateSet> {
        let line = search::line(from, to);
        line.iter()
            .all(|waypoint| self.is_valid_coordinates(*waypoint))
            .then_some(line)
    }

    /// Cell-level version of [`Self::line_coordinates`].
    pub fn line(&self, from: &Cell, to: &Cell) -> Option<Vec<&Cell>> {
        self.line_coordinates(from.coordinates(), to.coordinates())
            .map(|line| self.collect_cells(line))
    }

    /// On-grid coordinates exactly `radius` steps from `from`. Blocked cells
    /// are excluded unless `include_blocked` is set.
    pub fn ring_coordinates(
        &self,
        from: CubeCoordinates,
        radius: i32,
        include_blocked: bool,
    ) -> Result<CoordinateSet, HexError> {
        let ring = search::ring(from, radius)?;
        Ok(self.retained(ring, include_blocked))
    }

    pub fn ring(
        &self,
        from: &Cell,
        radius: i32,
        include_blocked: bool,
    ) -> Result<Vec<&Cell>, HexError> {
        let coordinates =
            self.ring_coordinates(from.coordinates(), radius, include_blocked)?;
        Ok(self.collect_cells(coordinates))
    }

    /// On-grid coordinates within `radius` steps of `from`. Blocked cells
    /// are excluded unless `include_blocked` is set.
    pub fn filled_ring_coordinates(
        &self,
        from: CubeCoordinates,
        radius: i32,
        include_blocked: bool,
    ) -> Result<CoordinateSet, HexError> {
        let filled = search::filled_ring(from, radius)?;
        Ok(self.retained(filled, include_blocked))
    }

    pub fn filled_ring(
        &self,
        from: &Cell,
        radius: i32,
        include_blocked: bool,
    ) -> Result<Vec<&Cell>, HexError> {
        let coordinates = self.filled_ring_coordinates(
            from.coordinates(),
            radius,
            include_blocked,
        )?;
        Ok(self.collect_cells(coordinates))
    }

    // ------------------------------ Searches ------------------------------

    /// Coordinates reachable from `from` within `steps` moves, avoiding
    /// blocked cells.
    pub fn find_reachable_coordinates(
        &self,
        from: CubeCoordinates,
        steps: i32,
    ) -> Result<CoordinateSet, HexError> {
        search::breadth_first_search(from, steps, self)
    }

    pub fn find_reachable(
        &self,
        from: &Cell,
        steps: i32,
    ) -> Result<Vec<&Cell>, HexError> {
        let coordinates =
            self.find_reachable_coordinates(from.coordinates(), steps)?;
        Ok(self.collect_cells(coordinates))
    }

    /// Coordinates visible from `from` within `radius` steps, resolved by
    /// shadowcasting against opaque cells. See
    /// [`search::field_of_view`] for the `include_partially_visible` knob.
    pub fn field_of_view_coordinates(
        &self,
        from: CubeCoordinates,
        radius: i32,
        include_partially_visible: bool,
    ) -> Result<CoordinateSet, HexError> {
        search::field_of_view(from, radius, self, include_partially_visible)
    }

    pub fn field_of_view(
        &self,
        from: &Cell,
        radius: i32,
        include_partially_visible: bool,
    ) -> Result<Vec<&Cell>, HexError> {
        let coordinates = self.field_of_view_coordinates(
            from.coordinates(),
            radius,
            include_partially_visible,
        )?;
        Ok(self.collect_cells(coordinates))
    }

    /// The cheapest path between two coordinates, or `None` when no path
    /// exists. Cell costs weigh into the route; see [`search::find_path`].
    pub fn find_path_coordinates(
        &self,
        from: CubeCoordinates,
        to: CubeCoordinates,
    ) -> Option<Vec<CubeCoordinates>> {
        search::find_path(from, to, self)
    }

    /// Cell-level version of [`Self::find_path_coordinates`]; the result
    /// preserves path order.
    pub fn find_path(&self, from: &Cell, to: &Cell) -> Option<Vec<&Cell>> {
        self.find_path_coordinates(from.coordinates(), to.coordinates())
            .map(|path| {
                path.into_iter()
                    .filter_map(|waypoint| self.cell_at(waypoint))
                    .collect()
            })
    }

    fn retained(
        &self,
        coordinates: CoordinateSet,
        include_blocked: bool,
    ) -> CoordinateSet {
        coordinates
            .into_iter()
            .filter(|c| match self.cell_at(*c) {
                Some(cell) => include_blocked || !cell.is_blocked,
                None => false,
            })
            .collect()
    }

    fn collect_cells(&self, coordinates: CoordinateSet) -> Vec<&Cell> {
        coordinates
            .into_iter()
            .filter_map(|c| self.cell_at(c))
            .collect()
    }

    // --------------------------- UI and drawing ---------------------------

    /// Pixel-space center of a cell.
    pub fn pixel_coordinates(&self, cell: &Cell) -> Point {
        cell.coordinates()
            .to_pixel(self.orientation, self.hex_size, self.origin)
    }

    /// Pixel-space corner points of a cell's hexagon, in corner order.
    pub fn polygon_corners(&self, cell: &Cell) -> [Point; 6] {
        geom::polygon_corners(
            self.pixel_coordinates(cell),
            self.hex_size,
            self.orientation,
        )
    }

    /// The cell under a pixel-space point, if any.
    pub fn cell_at_pixel(&self, point: Point) -> Option<&Cell> {
        self.cell_at(CubeCoordinates::from_pixel(
            point,
            self.orientation,
            self.hex_size,
            self.origin,
        ))
    }

    /// Scales the hexes and recenters the origin so the whole grid fits
    /// inside `size`, preserving aspect ratio.
    pub fn fit_in(&mut self, size: HexSize) {
        if size == self.pixel_size {
            return;
        }
        let width_ratio = size.width / self.pixel_size.width;
        let height_ratio = size.height / self.pixel_size.height;

        let ratio = f64::min(width_ratio, height_ratio);
        // Center along the slack axis, the one the scaled grid doesn't fill
        let mut slack = HexSize::default();
        if width_ratio <= height_ratio {
            slack.height = (size.height - self.pixel_size.height * ratio) / 2.0;
        } else {
            slack.width = (size.width - self.pixel_size.width * ratio) / 2.0;
        }
        self.hex_size =
            HexSize::new(self.hex_size.width * ratio, self.hex_size.height * ratio);
        self.update_pixel_size();
        self.center_origin(slack);
    }

    /// Moves the origin so the grid's pixel bounding box starts at zero plus
    /// the given offset.
    fn center_origin(&mut self, offset: HexSize) {
        let (min_x, min_y, _, _) = self.pixel_bounds();
        let (cell_width, cell_height) = self.cell_pixel_extents();
        self.origin = Point::new(
            self.origin.x - min_x + cell_width / 2.0 + offset.width,
            self.origin.y - min_y + cell_height / 2.0 + offset.height,
        );
    }

    /// Recomputes the derived pixel bounding box. Called after every
    /// mutation of the cell set or hex size.
    fn update_pixel_size(&mut self) {
        let (min_x, min_y, max_x, max_y) = self.pixel_bounds();
        let (cell_width, cell_height) = self.cell_pixel_extents();
        self.pixel_size =
            HexSize::new(max_x - min_x + cell_width, max_y - min_y + cell_height);
    }

    /// Min/max pixel centers over all cells. The bounds always include the
    /// pixel origin, matching how the grid is anchored when drawn.
    fn pixel_bounds(&self) -> (f64, f64, f64, f64) {
        let mut min_x: f64 = 0.0;
        let mut min_y: f64 = 0.0;
        let mut max_x: f64 = 0.0;
        let mut max_y: f64 = 0.0;
        for cell in self.cells.values() {
            let pixel = self.pixel_coordinates(cell);
            min_x = min_x.min(pixel.x);
            min_y = min_y.min(pixel.y);
            max_x = max_x.max(pixel.x);
            max_y = max_y.max(pixel.y);
        }
        (min_x, min_y, max_x, max_y)
    }

    /// Full pixel width and height of a single hex.
    fn cell_pixel_extents(&self) -> (f64, f64) {
        let sqrt3 = 3.0_f64.sqrt();
        match self.orientation {
            Orientation::PointyOnTop => {
                (sqrt3 * self.hex_size.width, 2.0 * self.hex_size.height)
            }
            Orientation::FlatOnTop => {
                (2.0 * self.hex_size.width, sqrt3 * self.hex_size.height)
            }
        }
    }
}

impl GridView for HexGrid {
    fn is_valid(&self, coordinates: CubeCoordinates) -> bool {
        self.is_valid_coordinates(coordinates)
    }

    fn is_blocked(&self, coordinates: CubeCoordinates) -> bool {
        self.cell_at(coordinates).map_or(false, |cell| cell.is_blocked)
    }

    fn is_opaque(&self, coordinates: CubeCoordinates) -> bool {
        self.cell_at(coordinates).map_or(false, |cell| cell.is_opaque)
    }

    fn cost(&self, coordinates: CubeCoordinates) -> f64 {
        self.cell_at(coordinates).map_or(0.0, |cell| cell.cost)
    }
}

// Serialization to/from specific formats, gated behind optional dependencies
#[cfg(feature = "json")]
impl HexGrid {
    /// Serializes this grid to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserializes a grid from JSON and refreshes its derived state.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut grid: Self = serde_json::from_str(json)?;
        grid.update_pixel_size();
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn cube(x: i32, y: i32, z: i32) -> CubeCoordinates {
        CubeCoordinates::new(x, y, z).unwrap()
    }

    fn hexagon_grid(radius: i32) -> HexGrid {
        HexGrid::from_shape(
            GridShape::Hexagon(radius),
            Orientation::PointyOnTop,
            OffsetLayout::Even,
        )
    }

    #[test]
    fn test_from_shape() {
        let grid = hexagon_grid(2);
        assert_eq!(grid.len(), 19);
        assert!(grid.is_valid_coordinates(cube(2, 0, -2)));
        assert!(!grid.is_valid_coordinates(cube(3, 0, -3)));
        assert!(grid.cell_at(cube(0, 0, 0)).is_some());
    }

    #[test]
    fn test_invalid_shape_yields_empty_grid() {
        let grid = HexGrid::from_shape(
            GridShape::Hexagon(-1),
            Orientation::PointyOnTop,
            OffsetLayout::Even,
        );
        assert!(grid.is_empty());
    }

    #[test]
    fn test_cell_mutation() {
        let mut grid = hexagon_grid(1);
        grid.cell_at_mut(cube(1, 0, -1)).unwrap().is_blocked = true;
        assert!(grid.cell_at(cube(1, 0, -1)).unwrap().is_blocked);
        assert_eq!(grid.blocked_coordinates().len(), 1);
        assert_eq!(grid.non_blocked_coordinates().len(), 6);
    }

    #[test]
    fn test_add_and_remove_cells() {
        let mut grid = hexagon_grid(1);
        let before = grid.pixel_size();

        assert!(grid.add_cell(Cell::new(cube(5, -5, 0))).is_none());
        assert_eq!(grid.len(), 8);
        assert!(grid.pixel_size().width > before.width);

        grid.remove_cell(cube(5, -5, 0));
        assert_eq!(grid.len(), 7);
        assert_eq!(grid.pixel_size(), before);
        assert!(grid.remove_cell(cube(5, -5, 0)).is_none());

        // Re-adding an existing position replaces the cell
        let mut replacement = Cell::new(cube(0, 0, 0));
        replacement.cost = 3.0;
        let old = grid.add_cell(replacement).unwrap();
        assert_eq!(old.cost, 0.0);
        assert_eq!(grid.cell_at(cube(0, 0, 0)).unwrap().cost, 3.0);
    }

    #[test]
    fn test_neighbors_clip_to_grid() {
        let grid = hexagon_grid(1);
        let edge = cube(1, 0, -1);
        assert_eq!(grid.neighbors_coordinates(edge).len(), 3);
        assert_eq!(grid.neighbor_coordinates(edge, 3), Some(cube(0, 0, 0)));
        assert_eq!(grid.neighbor_coordinates(edge, 0), None);

        let cell = grid.cell_at(edge).unwrap();
        assert_eq!(grid.neighbors(cell).len(), 3);
        assert!(grid.neighbor(cell, 0).is_none());
    }

    #[test]
    fn test_diagonal_neighbors_clip_to_grid() {
        let grid = hexagon_grid(2);
        assert_eq!(
            grid.diagonal_neighbor_coordinates(cube(1, 0, -1), 0),
            None
        );
        assert_eq!(
            grid.diagonal_neighbor_coordinates(cube(0, 0, 0), 0),
            Some(cube(2, -1, -1))
        );
        assert_eq!(
            grid.diagonal_neighbors_coordinates(cube(0, 0, 0)).len(),
            6
        );
    }

    #[test]
    fn test_line_on_grid() {
        let grid = hexagon_grid(2);
        let line = grid.line_coordinates(cube(0, 0, 0), cube(2, 0, -2)).unwrap();
        let expected: CoordinateSet =
            [cube(0, 0, 0), cube(1, 0, -1), cube(2, 0, -2)]
                .into_iter()
                .collect();
        assert_eq!(line, expected);

        // A line leaving the grid is no line at all
        assert_eq!(grid.line_coordinates(cube(0, 0, 0), cube(3, 0, -3)), None);
    }

    #[test]
    fn test_line_none_when_waypoint_removed() {
        let mut grid = hexagon_grid(2);
        grid.remove_cell(cube(1, 0, -1));
        assert_eq!(grid.line_coordinates(cube(0, 0, 0), cube(2, 0, -2)), None);
    }

    #[test]
    fn test_ring_excludes_blocked_by_default() {
        let mut grid = hexagon_grid(2);
        grid.cell_at_mut(cube(1, 0, -1)).unwrap().is_blocked = true;

        let without = grid
            .ring_coordinates(cube(0, 0, 0), 1, false)
            .unwrap();
        assert_eq!(without.len(), 5);
        assert!(!without.contains(&cube(1, 0, -1)));

        let with = grid.ring_coordinates(cube(0, 0, 0), 1, true).unwrap();
        assert_eq!(with.len(), 6);

        // Parts of the ring off the grid are dropped silently
        let clipped = grid.ring_coordinates(cube(2, 0, -2), 1, true).unwrap();
        assert_eq!(clipped.len(), 3);

        assert!(grid.ring_coordinates(cube(0, 0, 0), -1, false).is_err());
    }

    #[test]
    fn test_filled_ring() {
        let mut grid = hexagon_grid(2);
        grid.cell_at_mut(cube(0, 1, -1)).unwrap().is_blocked = true;

        let without = grid
            .filled_ring_coordinates(cube(0, 0, 0), 2, false)
            .unwrap();
        assert_eq!(without.len(), 18);
        let with = grid
            .filled_ring_coordinates(cube(0, 0, 0), 2, true)
            .unwrap();
        assert_eq!(with.len(), 19);
    }

    #[test]
    fn test_find_reachable() {
        let mut grid = hexagon_grid(1);
        grid.cell_at_mut(cube(1, 0, -1)).unwrap().is_blocked = true;
        let reachable = grid
            .find_reachable_coordinates(cube(0, 0, 0), 1)
            .unwrap();
        assert_eq!(reachable.len(), 6);
        assert!(!reachable.contains(&cube(1, 0, -1)));
    }

    #[test]
    fn test_find_path_cells() {
        let mut grid = hexagon_grid(2);
        grid.cell_at_mut(cube(1, 0, -1)).unwrap().is_blocked = true;
        grid.cell_at_mut(cube(0, 1, -1)).unwrap().is_blocked = true;

        let from = cube(0, 0, 0);
        let to = cube(2, 0, -2);
        let path = grid.find_path_coordinates(from, to).unwrap();
        assert_eq!(
            path,
            vec![cube(0, 0, 0), cube(1, -1, 0), cube(2, -1, -1), cube(2, 0, -2)]
        );

        // Sealing the remaining approaches leaves the target unreachable
        grid.cell_at_mut(cube(1, 1, -2)).unwrap().is_blocked = true;
        grid.cell_at_mut(cube(2, -1, -1)).unwrap().is_blocked = true;
        assert_eq!(grid.find_path_coordinates(from, to), None);
    }

    #[test]
    fn test_field_of_view_on_grid() {
        let mut grid = hexagon_grid(2);
        grid.cell_at_mut(cube(1, 0, -1)).unwrap().is_opaque = true;
        let visible = grid
            .field_of_view_coordinates(cube(0, 0, 0), 2, false)
            .unwrap();
        // The wall hides the three cells directly behind it
        assert_eq!(visible.len(), 16);
        assert!(visible.contains(&cube(1, 0, -1)));
        assert!(!visible.contains(&cube(2, 0, -2)));
    }

    #[test]
    fn test_pixel_coordinates_pointy() {
        let grid = hexagon_grid(2);
        let sqrt3 = 3.0_f64.sqrt();
        let center = grid.pixel_coordinates(grid.cell_at(cube(1, 0, -1)).unwrap());
        assert_approx_eq!(center.x, sqrt3 * 5.0);
        assert_approx_eq!(center.y, -15.0);
        let east = grid.pixel_coordinates(grid.cell_at(cube(1, -1, 0)).unwrap());
        assert_approx_eq!(east.x, sqrt3 * 10.0);
        assert_approx_eq!(east.y, 0.0);
    }

    #[test]
    fn test_polygon_corners_pointy() {
        let grid = hexagon_grid(1);
        let corners =
            grid.polygon_corners(grid.cell_at(cube(0, 0, 0)).unwrap());
        // First corner of a pointy-top hex sits 30 degrees below the x axis
        assert_approx_eq!(corners[0].x, 10.0 * (3.0_f64.sqrt() / 2.0));
        assert_approx_eq!(corners[0].y, 5.0);
        // Corner 1 is the bottom point
        assert_approx_eq!(corners[1].x, 0.0);
        assert_approx_eq!(corners[1].y, 10.0);
    }

    #[test]
    fn test_polygon_corners_flat() {
        let grid = HexGrid::from_shape(
            GridShape::Hexagon(1),
            Orientation::FlatOnTop,
            OffsetLayout::Even,
        );
        let corners =
            grid.polygon_corners(grid.cell_at(cube(0, 0, 0)).unwrap());
        // Flat-top hexes start on the x axis
        assert_approx_eq!(corners[0].x, 10.0);
        assert_approx_eq!(corners[0].y, 0.0);
        assert_approx_eq!(corners[1].x, 5.0);
        assert_approx_eq!(corners[1].y, 10.0 * (3.0_f64.sqrt() / 2.0));
    }

    #[test]
    fn test_cell_at_pixel() {
        let grid = hexagon_grid(2);
        let target = grid.cell_at(cube(1, 0, -1)).unwrap();
        let center = grid.pixel_coordinates(target);
        assert_eq!(grid.cell_at_pixel(center), Some(target));
        // A point near a center still resolves to the same cell
        let nearby = Point::new(center.x + 3.0, center.y - 3.0);
        assert_eq!(grid.cell_at_pixel(nearby), Some(target));
        // Far outside the grid nothing matches
        assert_eq!(grid.cell_at_pixel(Point::new(500.0, 500.0)), None);
    }

    #[test]
    fn test_pixel_size_pointy() {
        let grid = hexagon_grid(1);
        let sqrt3 = 3.0_f64.sqrt();
        // Centers span sqrt(3) * 10 both ways, plus one full cell extent
        assert_approx_eq!(grid.pixel_size().width, 2.0 * sqrt3 * 10.0 + sqrt3 * 10.0);
        assert_approx_eq!(grid.pixel_size().height, 30.0 + 20.0);
    }

    #[test]
    fn test_set_hex_size_updates_pixel_size() {
        let mut grid = hexagon_grid(1);
        let before = grid.pixel_size();
        grid.set_hex_size(HexSize::new(20.0, 20.0));
        assert_approx_eq!(grid.pixel_size().width, before.width * 2.0);
        assert_approx_eq!(grid.pixel_size().height, before.height * 2.0);
    }

    #[test]
    fn test_fit_in() {
        let mut grid = hexagon_grid(2);
        grid.fit_in(HexSize::new(100.0, 100.0));
        assert!(grid.pixel_size().width <= 100.0 + 1e-9);
        assert!(grid.pixel_size().height <= 100.0 + 1e-9);
        // The scaled grid fills the tighter axis
        let filled = f64::max(grid.pixel_size().width, grid.pixel_size().height);
        assert_approx_eq!(filled, 100.0);
        // All cells now draw inside the box
        for cell in grid.cells() {
            for corner in grid.polygon_corners(cell) {
                assert!(corner.x >= -1e-9 && corner.x <= 100.0 + 1e-9);
                assert!(corner.y >= -1e-9 && corner.y <= 100.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_with_pixel_size() {
        let grid = HexGrid::with_pixel_size(
            GridShape::Hexagon(2),
            Orientation::FlatOnTop,
            OffsetLayout::Even,
            HexSize::new(200.0, 120.0),
        );
        assert_eq!(grid.len(), 19);
        assert!(grid.pixel_size().width <= 200.0 + 1e-9);
        assert!(grid.pixel_size().height <= 120.0 + 1e-9);
    }
}
