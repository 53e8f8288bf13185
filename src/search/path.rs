//! A* pathfinding over a [`GridView`].

use crate::{
    coords::{CoordinateMap, CubeCoordinates},
    search::{queue::PriorityQueue, GridView},
};

/// Uniform cost of moving one step, added on top of the destination cell's
/// own cost. Keeping it well above typical per-cell costs makes the
/// distance heuristic admissible without scaling.
const STEP_COST: f64 = 10.0;

/// One explored position. Nodes live in an arena and refer to their
/// predecessor by arena index, which keeps path reconstruction free of
/// shared-ownership bookkeeping.
struct SearchNode {
    coordinates: CubeCoordinates,
    predecessor: Option<usize>,
    /// Accumulated movement cost from the origin.
    cost_score: f64,
    /// Lattice distance to the target, the A* heuristic.
    heuristic_score: f64,
}

impl SearchNode {
    fn total_score(&self) -> f64 {
        self.cost_score + self.heuristic_score
    }
}

/// Finds the cheapest walkable path between two coordinates, returned in
/// origin-to-target order with both endpoints included. Returns `None` when
/// the target is missing, blocked, or walled off.
///
/// Cost of a path is the sum over its steps of [`STEP_COST`] plus the entered
/// cell's [`GridView::cost`]. With non-negative cell costs the
/// straight-line distance heuristic never overestimates, so the first time
/// the target is dequeued the path is optimal.
pub fn find_path(
    origin: CubeCoordinates,
    target: CubeCoordinates,
    grid: &impl GridView,
) -> Option<Vec<CubeCoordinates>> {
    let mut arena = vec![SearchNode {
        coordinates: origin,
        predecessor: None,
        cost_score: 0.0,
        heuristic_score: origin.distance_to(target) as f64,
    }];

    // Frontier holds (total score, arena index); cheapest total score wins.
    // Superseded entries are left in the heap and ignored when dequeued,
    // which is cheaper than digging them out.
    let mut frontier =
        PriorityQueue::new(|a: &(f64, usize), b: &(f64, usize)| a.0 < b.0);
    frontier.enqueue((arena[0].total_score(), 0));

    // Best-known arena node per coordinate
    let mut explored: CoordinateMap<usize> = CoordinateMap::default();
    explored.insert(origin, 0);

    while let Some((_, index)) = frontier.dequeue() {
        let current = arena[index].coordinates;
        if current == target {
            return Some(backtrack(&arena, index));
        }
        if explored.get(&current) != Some(&index) {
            // Superseded by a cheaper route found after this was enqueued
            continue;
        }

        for direction in 0..6 {
            let next = current.neighbor(direction);
            if !grid.is_valid(next) || grid.is_blocked(next) {
                continue;
            }

            let next_cost = arena[index].cost_score + grid.cost(next) + STEP_COST;
            if let Some(&known) = explored.get(&next) {
                if arena[known].cost_score <= next_cost {
                    continue;
                }
            }

            arena.push(SearchNode {
                coordinates: next,
                predecessor: Some(index),
                cost_score: next_cost,
                heuristic_score: next.distance_to(target) as f64,
            });
            let node_index = arena.len() - 1;
            explored.insert(next, node_index);
            frontier.enqueue((arena[node_index].total_score(), node_index));
        }
    }
    None
}

/// Walks predecessor links from the target node back to the origin and
/// reverses the result.
fn backtrack(arena: &[SearchNode], target_index: usize) -> Vec<CubeCoordinates> {
    let mut path = Vec::new();
    let mut index = Some(target_index);
    while let Some(i) = index {
        path.push(arena[i].coordinates);
        index = arena[i].predecessor;
    }
    path.reverse();
    path
}
