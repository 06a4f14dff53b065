use crate::grid::{EnergyGrid, NodeIndex};
use std::collections::VecDeque;

/// Hop distance from every node to its nearest producer.
///
/// Producers sit at distance 0; nodes with no route to any producer are `None`.
pub fn producer_distances(grid: &EnergyGrid) -> Vec<Option<usize>> {
    let mut distances = vec![None; grid.len()];
    multi_source_bfs(grid, |node, distance| distances[node] = Some(distance));
    distances
}

/// Consumers ordered farthest-first, so that popping from the tail yields the
/// consumer nearest to a producer.
///
/// Ties at equal distance keep BFS discovery order. Consumers that cannot
/// reach any producer are left out.
pub fn consumer_priorities(grid: &EnergyGrid) -> Vec<NodeIndex> {
    let mut priorities = Vec::new();
    multi_source_bfs(grid, |node, distance| {
        if distance > 0 {
            priorities.push(node);
        }
    });
    priorities.reverse();
    priorities
}

/// Breadth-first traversal seeded with every producer at distance 0.
/// `discover` is called once per reachable node, in discovery order.
fn multi_source_bfs(grid: &EnergyGrid, mut discover: impl FnMut(NodeIndex, usize)) {
    let mut visited = vec![false; grid.len()];
    let mut queue: VecDeque<(NodeIndex, usize)> =
        grid.producers().map(|producer| (producer, 0)).collect();

    while let Some((node, distance)) = queue.pop_front() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        discover(node, distance);

        for adjacent in grid.adjacent(node) {
            if !visited[adjacent.neighbor] {
                queue.push_back((adjacent.neighbor, distance + 1));
            }
        }
    }
}
