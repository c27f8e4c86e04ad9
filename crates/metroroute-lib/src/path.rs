use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::{Graph, PathType};
use crate::line::StationId;

/// Run Dijkstra's algorithm to find the minimum-total-weight path between
/// two stations under the given criterion.
///
/// Returns the station sequence inclusive of both endpoints, or `None` when
/// no connecting path exists. Callers are expected to have checked that both
/// endpoints are graph vertices.
pub fn find_path(
    graph: &Graph,
    source: StationId,
    target: StationId,
    path_type: PathType,
) -> Option<Vec<StationId>> {
    if source == target {
        return Some(vec![source]);
    }

    let mut costs: HashMap<StationId, u64> = HashMap::new();
    let mut parents: HashMap<StationId, Option<StationId>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    costs.insert(source, 0);
    parents.insert(source, None);
    queue.push(QueueEntry::new(source, 0));

    while let Some(entry) = queue.pop() {
        match costs.get(&entry.station) {
            // Stale heap entry for a station already settled cheaper.
            Some(&cost) if cost < entry.cost => continue,
            Some(_) => {}
            None => continue,
        }

        if entry.station == target {
            return Some(reconstruct_path(&parents, source, target));
        }

        for edge in graph.neighbours(entry.station) {
            let next_cost = entry.cost + u64::from(path_type.weight_of(edge));
            if next_cost < costs.get(&edge.target).copied().unwrap_or(u64::MAX) {
                costs.insert(edge.target, next_cost);
                parents.insert(edge.target, Some(entry.station));
                queue.push(QueueEntry::new(edge.target, next_cost));
            }
        }
    }

    None
}

fn reconstruct_path(
    parents: &HashMap<StationId, Option<StationId>>,
    source: StationId,
    target: StationId,
) -> Vec<StationId> {
    let mut path = Vec::new();
    let mut current = Some(target);
    while let Some(station) = current {
        path.push(station);
        if station == source {
            break;
        }
        current = parents.get(&station).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    station: StationId,
    cost: u64,
}

impl QueueEntry {
    fn new(station: StationId, cost: u64) -> Self {
        Self { station, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
