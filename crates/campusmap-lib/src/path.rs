use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::graph::{Graph, Link, NodeIndex};

/// Raw search result expressed in dense graph indices.
#[derive(Debug, Clone, PartialEq)]
pub struct PathTrace {
    /// Visited nodes from start to goal, inclusive.
    pub nodes: Vec<NodeIndex>,
    /// Walkway positions traversed, one per hop.
    pub edges: Vec<usize>,
    /// Sum of the traversed walkway distances.
    pub distance: f64,
}

impl PathTrace {
    fn single(node: NodeIndex) -> Self {
        Self {
            nodes: vec![node],
            edges: Vec::new(),
            distance: 0.0,
        }
    }
}

/// Predecessor record: the node we came from and the walkway used.
type Parent = Option<(NodeIndex, Link)>;

/// Run Dijkstra's algorithm with a binary heap, stopping once `goal` is
/// settled.
///
/// Ties are broken towards the lower node index so repeated calls on the same
/// graph return the same path.
pub fn find_route_dijkstra(graph: &Graph, start: NodeIndex, goal: NodeIndex) -> Option<PathTrace> {
    let count = graph.node_count();
    if start >= count || goal >= count {
        return None;
    }
    if start == goal {
        return Some(PathTrace::single(start));
    }

    let mut distances = vec![f64::INFINITY; count];
    let mut settled = vec![false; count];
    let mut parents: Vec<Parent> = vec![None; count];
    let mut queue = BinaryHeap::new();

    distances[start] = 0.0;
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        if settled[entry.node] {
            continue;
        }
        settled[entry.node] = true;

        if entry.node == goal {
            break;
        }

        let current_distance = distances[entry.node];
        for link in graph.links(entry.node) {
            if settled[link.target] {
                continue;
            }

            let next_cost = current_distance + link.distance;
            if next_cost < distances[link.target] {
                distances[link.target] = next_cost;
                parents[link.target] = Some((entry.node, *link));
                queue.push(QueueEntry::new(link.target, next_cost));
            }
        }
    }

    reconstruct_path(&parents, start, goal)
}

/// Run Dijkstra's algorithm with a linear scan for the next node to settle.
///
/// O(V²), which is fine for campus-sized graphs. Produces the same distances
/// as [`find_route_dijkstra`].
pub fn find_route_linear_scan(
    graph: &Graph,
    start: NodeIndex,
    goal: NodeIndex,
) -> Option<PathTrace> {
    let count = graph.node_count();
    if start >= count || goal >= count {
        return None;
    }
    if start == goal {
        return Some(PathTrace::single(start));
    }

    let mut distances = vec![f64::INFINITY; count];
    let mut settled = vec![false; count];
    let mut parents: Vec<Parent> = vec![None; count];
    distances[start] = 0.0;

    loop {
        let mut selected: Option<NodeIndex> = None;
        for candidate in 0..count {
            if settled[candidate] {
                continue;
            }
            match selected {
                Some(best) if distances[candidate] >= distances[best] => {}
                _ => selected = Some(candidate),
            }
        }

        let Some(current) = selected else {
            break;
        };
        if distances[current].is_infinite() {
            break;
        }

        settled[current] = true;
        if current == goal {
            break;
        }

        for link in graph.links(current) {
            if settled[link.target] {
                continue;
            }
            let next_cost = distances[current] + link.distance;
            if next_cost < distances[link.target] {
                distances[link.target] = next_cost;
                parents[link.target] = Some((current, *link));
            }
        }
    }

    reconstruct_path(&parents, start, goal)
}

/// Find the route with the fewest walkways using breadth-first search.
///
/// Among parallel walkways between two consecutive hops the shortest one is
/// recorded, so the reported distance is the cheapest way to walk that
/// sequence of locations.
pub fn find_route_bfs(graph: &Graph, start: NodeIndex, goal: NodeIndex) -> Option<PathTrace> {
    let count = graph.node_count();
    if start >= count || goal >= count {
        return None;
    }
    if start == goal {
        return Some(PathTrace::single(start));
    }

    let mut visited = vec![false; count];
    let mut parents: Vec<Parent> = vec![None; count];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for link in graph.links(current) {
            let next = link.target;
            if visited[next] {
                if let Some((parent, recorded)) = parents[next].as_mut() {
                    if *parent == current && link.distance < recorded.distance {
                        *recorded = *link;
                    }
                }
                continue;
            }

            visited[next] = true;
            parents[next] = Some((current, *link));
            queue.push_back(next);
        }

        // Every link out of `current` has been seen, so the goal's recorded
        // walkway is final.
        if visited[goal] {
            break;
        }
    }

    reconstruct_path(&parents, start, goal)
}

fn reconstruct_path(parents: &[Parent], start: NodeIndex, goal: NodeIndex) -> Option<PathTrace> {
    let mut nodes = vec![goal];
    let mut links = Vec::new();
    let mut current = goal;

    while current != start {
        let (parent, link) = parents[current]?;
        nodes.push(parent);
        links.push(link);
        current = parent;
    }

    nodes.reverse();
    links.reverse();
    Some(PathTrace {
        nodes,
        edges: links.iter().map(|link| link.edge).collect(),
        distance: links.iter().map(|link| link.distance).sum(),
    })
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeIndex,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeIndex, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
