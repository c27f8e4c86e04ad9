//! Network description file handling.
//!
//! The core library works on station identifiers only; this module owns the
//! JSON file format and the name/identifier resolution at that boundary.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

use metroroute_lib::{LineTopology, SegmentRecord, StationId};

/// Root of the network description file.
#[derive(Debug, Deserialize)]
pub struct NetworkFile {
    pub stations: Vec<StationRecord>,
    pub lines: Vec<LineRecord>,
}

/// One station entry: identifier plus display name.
#[derive(Debug, Deserialize)]
pub struct StationRecord {
    pub id: StationId,
    pub name: String,
}

/// One line entry: display name plus its persisted segments.
#[derive(Debug, Deserialize)]
pub struct LineRecord {
    pub name: String,
    pub segments: Vec<SegmentRecord>,
}

/// Loaded network: validated topologies plus name lookup tables.
#[derive(Debug)]
pub struct Network {
    topologies: Vec<LineTopology>,
    line_index: HashMap<String, usize>,
    station_names: HashMap<StationId, String>,
    station_ids: HashMap<String, StationId>,
}

impl Network {
    /// Parse and validate a network description.
    pub fn from_json(raw: &str) -> Result<Self> {
        let file: NetworkFile = serde_json::from_str(raw).context("malformed network JSON")?;

        let mut topologies = Vec::with_capacity(file.lines.len());
        let mut line_index = HashMap::new();
        for (position, line) in file.lines.iter().enumerate() {
            let topology = LineTopology::from_segments(&line.segments)
                .with_context(|| format!("line {} has a corrupted segment chain", line.name))?;
            topologies.push(topology);
            line_index.insert(line.name.clone(), position);
        }

        let station_names = file
            .stations
            .iter()
            .map(|station| (station.id, station.name.clone()))
            .collect();
        let station_ids = file
            .stations
            .iter()
            .map(|station| (station.name.clone(), station.id))
            .collect();

        Ok(Self {
            topologies,
            line_index,
            station_names,
            station_ids,
        })
    }

    /// All line topologies, in file order.
    pub fn topologies(&self) -> &[LineTopology] {
        &self.topologies
    }

    /// Lookup one line by its case-sensitive name.
    pub fn line(&self, name: &str) -> Option<&LineTopology> {
        self.line_index
            .get(name)
            .map(|&position| &self.topologies[position])
    }

    /// Lookup a station identifier by its case-sensitive name.
    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.station_ids.get(name).copied()
    }

    /// Lookup a station name by identifier.
    pub fn station_name(&self, id: StationId) -> Option<&str> {
        self.station_names.get(&id).map(String::as_str)
    }
}
