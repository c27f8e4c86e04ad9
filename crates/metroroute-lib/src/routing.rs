//! Path planning over a set of line topologies.
//!
//! This module provides:
//! - [`PathRequest`] - One shortest-path query
//! - [`PathPlan`] - Planned path result with accumulated totals
//! - [`plan_path`] - Main entry point for computing paths
//!
//! The planner never mutates the topologies it is given; it builds an
//! ephemeral multigraph per query and discards it with the answer.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{build_graph, Graph, PathType};
use crate::line::{LineTopology, StationId};
use crate::path::find_path;

/// One shortest-path query.
#[derive(Debug, Clone)]
pub struct PathRequest {
    pub source: StationId,
    pub target: StationId,
    pub path_type: PathType,
}

impl PathRequest {
    pub fn new(source: StationId, target: StationId, path_type: PathType) -> Self {
        Self {
            source,
            target,
            path_type,
        }
    }

    /// Convenience constructor optimizing for total distance.
    pub fn by_distance(source: StationId, target: StationId) -> Self {
        Self::new(source, target, PathType::Distance)
    }

    /// Convenience constructor optimizing for total duration.
    pub fn by_duration(source: StationId, target: StationId) -> Self {
        Self::new(source, target, PathType::Duration)
    }
}

/// Planned path returned by the library.
///
/// Both totals are reported regardless of which criterion was optimized;
/// each hop is charged to the parallel edge that minimizes the active
/// criterion, the same edge the search relaxed.
#[derive(Debug, Clone, Serialize)]
pub struct PathPlan {
    pub path_type: PathType,
    pub source: StationId,
    pub target: StationId,
    pub stations: Vec<StationId>,
    pub distance: u32,
    pub duration: u32,
}

impl PathPlan {
    /// Number of hops in the path.
    pub fn hop_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }
}

/// Compute the shortest path across the union of all lines.
///
/// 1. Builds the ephemeral multigraph from every line's segments
/// 2. Validates that both endpoints are graph vertices
/// 3. Runs Dijkstra under the requested criterion
/// 4. Accumulates per-hop distance and duration totals
///
/// A query with `source == target` returns the single-station path with
/// zero totals, provided the station is part of the network.
pub fn plan_path(lines: &[LineTopology], request: &PathRequest) -> Result<PathPlan> {
    let graph = build_graph(lines);
    debug!(
        "built query graph with {} stations and {} edges",
        graph.station_count(),
        graph.edge_count()
    );

    if !graph.contains(request.source) || !graph.contains(request.target) {
        return Err(Error::PathNotFound {
            source: request.source,
            target: request.target,
        });
    }

    let stations = find_path(&graph, request.source, request.target, request.path_type).ok_or(
        Error::PathNotFound {
            source: request.source,
            target: request.target,
        },
    )?;

    let (distance, duration) = accumulate_totals(&graph, &stations, request.path_type);
    debug!(
        "planned {} path with {} hops",
        request.path_type,
        stations.len().saturating_sub(1)
    );

    Ok(PathPlan {
        path_type: request.path_type,
        source: request.source,
        target: request.target,
        stations,
        distance,
        duration,
    })
}

/// Sum distance and duration along `stations`, charging each hop to the
/// parallel edge that minimizes the active criterion.
fn accumulate_totals(graph: &Graph, stations: &[StationId], path_type: PathType) -> (u32, u32) {
    let mut distance = 0u32;
    let mut duration = 0u32;
    for pair in stations.windows(2) {
        let chosen = graph
            .neighbours(pair[0])
            .iter()
            .filter(|edge| edge.target == pair[1])
            .min_by_key(|edge| path_type.weight_of(edge));
        if let Some(edge) = chosen {
            distance += edge.distance;
            duration += edge.duration;
        }
    }
    (distance, duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_plan_hop_count() {
        let plan = PathPlan {
            path_type: PathType::Distance,
            source: 1,
            target: 3,
            stations: vec![1, 2, 3],
            distance: 20,
            duration: 10,
        };
        assert_eq!(plan.hop_count(), 2);
    }

    #[test]
    fn path_plan_empty_hop_count() {
        let plan = PathPlan {
            path_type: PathType::Duration,
            source: 1,
            target: 1,
            stations: vec![1],
            distance: 0,
            duration: 0,
        };
        assert_eq!(plan.hop_count(), 0);
    }

    #[test]
    fn request_constructors_set_criterion() {
        assert_eq!(PathRequest::by_distance(1, 2).path_type, PathType::Distance);
        assert_eq!(PathRequest::by_duration(1, 2).path_type, PathType::Duration);
    }
}
