//! Metroroute library entry points.
//!
//! This crate models a transit network as a set of lines, each line an
//! ordered chain of stations linked by weighted segments, and answers
//! shortest-path queries across the union of all lines. Higher-level
//! consumers (CLI, services) should only depend on the types exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod line;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use graph::{build_graph, Edge, Graph, PathType};
pub use line::{Anchor, LineTopology, Segment, SegmentRecord, StationId};
pub use path::find_path;
pub use routing::{plan_path, PathPlan, PathRequest};
