use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Numeric identifier for a station.
pub type StationId = i64;

/// Predecessor slot a segment hangs off within one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Slot of the segment that introduces the line's first station.
    Head,
    /// Slot of the segment departing from the named station.
    After(StationId),
}

impl From<Option<StationId>> for Anchor {
    fn from(prev: Option<StationId>) -> Self {
        match prev {
            None => Anchor::Head,
            Some(station) => Anchor::After(station),
        }
    }
}

/// One directed segment of a line, keyed by its [`Anchor`] in the owning
/// [`LineTopology`]. The head segment's weights carry no meaning; it
/// contributes no edge to the query graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub to: StationId,
    pub distance: u32,
    pub duration: u32,
}

/// Flat, order-independent persisted form of one segment, as handed over by
/// the service layer. `prev = None` marks the head segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRecord {
    pub prev: Option<StationId>,
    pub station: StationId,
    pub distance: u32,
    pub duration: u32,
}

/// Ordered chain of stations on one line, stored as segments keyed by their
/// predecessor slot.
///
/// Invariant: following `to → Anchor::After(to)` from [`Anchor::Head`] visits
/// every segment exactly once and terminates. [`LineTopology::insert`] and
/// [`LineTopology::remove`] are the only mutators and reject any call that
/// would break it before touching the chain; [`LineTopology::from_segments`]
/// validates it for persisted data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTopology {
    segments: HashMap<Anchor, Segment>,
}

impl LineTopology {
    /// Create an empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstruct a line from its persisted segment records.
    ///
    /// Records may arrive in any order. The full chain invariant is checked
    /// before a topology is returned, so a corrupted persisted line is
    /// rejected here instead of corrupting in-memory state.
    pub fn from_segments(records: &[SegmentRecord]) -> Result<Self> {
        let mut segments = HashMap::with_capacity(records.len());
        for record in records {
            ensure_positive_weights(record.station, record.distance, record.duration)?;
            let anchor = Anchor::from(record.prev);
            if segments
                .insert(
                    anchor,
                    Segment {
                        to: record.station,
                        distance: record.distance,
                        duration: record.duration,
                    },
                )
                .is_some()
            {
                return Err(Error::InvalidTopology {
                    message: match anchor {
                        Anchor::Head => "two segments claim the head slot".to_string(),
                        Anchor::After(station) => {
                            format!("two segments depart from station {station}")
                        }
                    },
                });
            }
        }

        let topology = Self { segments };
        topology.validate_chain()?;
        debug!(
            "reconstructed line chain with {} segments",
            topology.segments.len()
        );
        Ok(topology)
    }

    /// Insert `station` immediately after the anchor slot.
    ///
    /// `Anchor::Head` makes it the new first station. The segment currently
    /// occupying the slot, if any, is re-keyed behind the new station with
    /// its weights untouched.
    pub fn insert(
        &mut self,
        anchor: Anchor,
        station: StationId,
        distance: u32,
        duration: u32,
    ) -> Result<()> {
        ensure_positive_weights(station, distance, duration)?;
        if self.contains(station) {
            return Err(Error::InvalidTopology {
                message: format!("station {station} is already on the line"),
            });
        }
        if let Anchor::After(existing) = anchor {
            if !self.contains(existing) {
                return Err(Error::InvalidTopology {
                    message: format!("anchor station {existing} is not on the line"),
                });
            }
        }

        if let Some(displaced) = self.segments.remove(&anchor) {
            self.segments.insert(Anchor::After(station), displaced);
        }
        self.segments.insert(
            anchor,
            Segment {
                to: station,
                distance,
                duration,
            },
        );
        Ok(())
    }

    /// Remove a head, interior, or tail station and heal the chain.
    ///
    /// Interior removal bridges the two adjacent segments, summing their
    /// distances and durations so total line length is preserved. Removing
    /// the head promotes its successor with the successor's own weights.
    pub fn remove(&mut self, station: StationId) -> Result<()> {
        let Some((&inbound_key, &inbound)) = self
            .segments
            .iter()
            .find(|(_, segment)| segment.to == station)
        else {
            return Err(Error::StationNotFound { station });
        };

        self.segments.remove(&inbound_key);
        if let Some(outbound) = self.segments.remove(&Anchor::After(station)) {
            let healed = match inbound_key {
                Anchor::Head => outbound,
                Anchor::After(_) => Segment {
                    to: outbound.to,
                    distance: inbound.distance + outbound.distance,
                    duration: inbound.duration + outbound.duration,
                },
            };
            self.segments.insert(inbound_key, healed);
        }
        Ok(())
    }

    /// Return the stations of the line in traversal order, head first.
    ///
    /// Freshly computed on every call. Panics if the walk revisits a slot,
    /// which is only possible through corrupted internal state.
    pub fn linearize(&self) -> Vec<StationId> {
        let stations: Vec<StationId> = self
            .segments()
            .take(self.segments.len() + 1)
            .map(|(_, segment)| segment.to)
            .collect();
        assert!(
            stations.len() <= self.segments.len(),
            "line chain re-entered itself"
        );
        stations
    }

    /// Iterate the chain in traversal order, head segment first.
    pub fn segments(&self) -> impl Iterator<Item = (Anchor, &Segment)> + '_ {
        let mut cursor = Some(Anchor::Head);
        std::iter::from_fn(move || {
            let anchor = cursor?;
            let segment = self.segments.get(&anchor)?;
            cursor = Some(Anchor::After(segment.to));
            Some((anchor, segment))
        })
    }

    /// Whether `station` is on this line.
    pub fn contains(&self, station: StationId) -> bool {
        self.segments.values().any(|segment| segment.to == station)
    }

    /// Number of stations on the line.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the line has no stations.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn validate_chain(&self) -> Result<()> {
        let mut visited = 0usize;
        let mut cursor = self.segments.get(&Anchor::Head);
        while let Some(segment) = cursor {
            visited += 1;
            if visited > self.segments.len() {
                return Err(Error::InvalidTopology {
                    message: "segment chain re-enters itself".to_string(),
                });
            }
            cursor = self.segments.get(&Anchor::After(segment.to));
        }
        if visited != self.segments.len() {
            return Err(Error::InvalidTopology {
                message: "not every segment is reachable from the head".to_string(),
            });
        }
        Ok(())
    }
}

fn ensure_positive_weights(station: StationId, distance: u32, duration: u32) -> Result<()> {
    if distance == 0 || duration == 0 {
        return Err(Error::InvalidTopology {
            message: format!("segment to station {station} has a zero weight"),
        });
    }
    Ok(())
}
