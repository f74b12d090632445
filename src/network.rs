use std::collections::HashMap;

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;

/// Identifier of a transit line, e.g. `"2"` or `"C-7"`. Line ids are plain strings;
/// class membership is carried by [`Line`] attributes, never parsed out of the id.
pub type LineId = String;

/// Dense station index assigned while building a [`Network`].
///
/// Station names are the public key everywhere; ids exist so the track graph and
/// the router's search states stay `Copy`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct StationId(pub(crate) u16);

pub(crate) type LineIdx = u16;

/// One transit line: an ordered station sequence plus display and class attributes.
#[derive(Clone, Debug)]
pub struct Line {
    pub(crate) id: LineId,
    pub(crate) stations: Vec<String>,
    pub(crate) labels: Option<(String, String)>,
    pub(crate) circular: bool,
    pub(crate) commuter: bool,
}

impl Line {
    /// The line identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Stations in sequence order; index 0 is the "start" end of the line.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Direction label shown when riding toward index 0.
    /// Defaults to the first station name unless overridden.
    pub fn start_label(&self) -> &str {
        match &self.labels {
            Some((start, _)) => start,
            None => self.stations.first().map(String::as_str).unwrap_or_default(),
        }
    }

    /// Direction label shown when riding toward the last index.
    /// Defaults to the last station name unless overridden.
    pub fn end_label(&self) -> &str {
        match &self.labels {
            Some((_, end)) => end,
            None => self.stations.last().map(String::as_str).unwrap_or_default(),
        }
    }

    /// Whether the line wraps past its last station back to its first.
    pub fn is_circular(&self) -> bool {
        self.circular
    }

    /// Whether this is a commuter-rail line, the class goal-mode routing excludes.
    pub fn is_commuter(&self) -> bool {
        self.commuter
    }
}

/// An adjacent station on a line, tagged with the direction a rider would follow
/// to reach it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Neighbor {
    /// The adjacent station name.
    pub station: String,
    /// The direction label, i.e. the terminus the train is signed toward.
    pub direction: String,
}

/// An immutable multi-line transit network.
///
/// Built once by a [`NetworkBuilder`](crate::builder::NetworkBuilder) and read-only
/// afterwards; every query is a pure function of the static description. Lookups
/// with unknown names return empty results rather than erroring.
pub struct Network {
    pub(crate) lines: Vec<Line>,
    // interning tables; station_names is indexed by StationId
    pub(crate) station_names: Vec<String>,
    pub(crate) station_index: HashMap<String, StationId>,
    // lines serving each station, in line declaration order
    pub(crate) station_lines: Vec<Vec<LineIdx>>,
    // one undirected edge per adjacent station pair; the weight lists every line
    // serving that track segment (circular wrap edges included)
    pub(crate) graph: UnGraphMap<StationId, Vec<LineIdx>>,
}

impl Network {
    /// All line definitions, in declaration order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// The line with identifier `id`, if declared.
    pub fn line(&self, id: &str) -> Option<&Line> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Ids of every line whose sequence contains `station`, in declaration order.
    /// Unknown station yields an empty vec.
    pub fn lines_at(&self, station: &str) -> Vec<&str> {
        match self.station_index.get(station) {
            Some(id) => self.station_lines[id.0 as usize]
                .iter()
                .map(|&l| self.lines[l as usize].id.as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    /// The 0, 1, or 2 stations adjacent to `station` on `line`, each tagged with
    /// its direction label.
    ///
    /// On a non-circular line the two termini have one neighbor each and every
    /// other station has two. On a circular line the first and last indices also
    /// wrap to each other, so every station has two neighbors; the wrap neighbor
    /// of index 0 carries the end label and the wrap neighbor of the last index
    /// the start label. Unknown line, or a station not on it, yields an empty vec.
    pub fn neighbors(&self, line: &str, station: &str) -> Vec<Neighbor> {
        let Some(line) = self.line(line) else {
            return Vec::new();
        };
        let Some(index) = line.stations.iter().position(|s| s == station) else {
            return Vec::new();
        };

        let last = line.stations.len() - 1;
        let mut found = Vec::with_capacity(2);

        // toward index 0
        if index > 0 {
            found.push(Neighbor {
                station: line.stations[index - 1].clone(),
                direction: line.start_label().to_owned(),
            });
        } else if line.circular {
            found.push(Neighbor {
                station: line.stations[last].clone(),
                direction: line.end_label().to_owned(),
            });
        }

        // toward the last index
        if index < last {
            found.push(Neighbor {
                station: line.stations[index + 1].clone(),
                direction: line.end_label().to_owned(),
            });
        } else if line.circular {
            found.push(Neighbor {
                station: line.stations[0].clone(),
                direction: line.start_label().to_owned(),
            });
        }

        found
    }

    /// Every station across all lines, deduplicated and lexicographically ordered.
    /// Intended as the search/autocomplete feed for an outer UI layer.
    pub fn stations(&self) -> Vec<&str> {
        self.station_names.iter().map(String::as_str).sorted().collect()
    }

    pub(crate) fn station_id(&self, name: &str) -> Option<StationId> {
        self.station_index.get(name).copied()
    }

    pub(crate) fn station_name(&self, id: StationId) -> &str {
        &self.station_names[id.0 as usize]
    }

    pub(crate) fn line_idx(&self, id: &str) -> Option<LineIdx> {
        self.lines.iter().position(|line| line.id == id).map(|i| i as LineIdx)
    }

    pub(crate) fn line_by_idx(&self, idx: LineIdx) -> &Line {
        &self.lines[idx as usize]
    }

    pub(crate) fn line_ids_at(&self, id: StationId) -> &[LineIdx] {
        &self.station_lines[id.0 as usize]
    }
}
