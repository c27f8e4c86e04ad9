use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::line::{Anchor, LineTopology, StationId};

/// Optimization objective for a path query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PathType {
    /// Minimize the summed segment distance.
    #[default]
    Distance,
    /// Minimize the summed travel duration.
    Duration,
}

impl PathType {
    /// Weight contributed by `edge` under this criterion.
    pub fn weight_of(&self, edge: &Edge) -> u32 {
        match self {
            PathType::Distance => edge.distance,
            PathType::Duration => edge.duration,
        }
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PathType::Distance => "distance",
            PathType::Duration => "duration",
        };
        f.write_str(value)
    }
}

/// Weighted edge of the query multigraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: StationId,
    pub distance: u32,
    pub duration: u32,
}

/// Ephemeral multigraph over station identifiers, rebuilt for every query.
///
/// Parallel edges between the same pair of stations stay separate entries, so
/// when two lines connect the same stations with different weights the
/// cheaper one remains eligible independent of the other.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<StationId, Vec<Edge>>,
}

impl Graph {
    /// Return the outgoing edges of a given station.
    pub fn neighbours(&self, station: StationId) -> &[Edge] {
        self.adjacency
            .get(&station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `station` is a vertex of the graph.
    pub fn contains(&self, station: StationId) -> bool {
        self.adjacency.contains_key(&station)
    }

    /// Number of vertices.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

/// Build the query multigraph over every line's segments.
///
/// Each non-head segment is traversable in both directions: a forward and a
/// reverse edge of equal weight are added per segment. Every station seen
/// becomes a vertex, including the sole station of a single-station line.
/// Lines are walked in chain order, so construction is deterministic for a
/// fixed set of topologies.
pub fn build_graph(lines: &[LineTopology]) -> Graph {
    let mut adjacency: HashMap<StationId, Vec<Edge>> = HashMap::new();
    for line in lines {
        for (anchor, segment) in line.segments() {
            adjacency.entry(segment.to).or_default();
            if let Anchor::After(from) = anchor {
                adjacency.entry(from).or_default().push(Edge {
                    target: segment.to,
                    distance: segment.distance,
                    duration: segment.duration,
                });
                adjacency.entry(segment.to).or_default().push(Edge {
                    target: from,
                    distance: segment.distance,
                    duration: segment.duration,
                });
            }
        }
    }
    Graph { adjacency }
}
