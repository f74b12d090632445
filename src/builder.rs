use std::collections::HashMap;

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;

use crate::network::{Line, LineIdx, Network, StationId};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug)]
pub enum BuilderInvalidReason {
    /// A line was declared with fewer than two stations.
    ShortLine,
    /// The same line id was declared twice.
    DuplicateLine,
    /// A label, circular, or commuter attribute named a line not declared yet.
    UnknownLine,
}

/// Builds an immutable [`Network`] from line declarations.
///
/// Declare lines first, then attach attributes to them. Builders mutate
/// themselves while building but can be [`Clone`]d to save their state at some
/// point. Once any call has invalidated the builder, subsequent calls do nothing
/// and [`build`](Self::build) reports every accumulated reason.
#[derive(Clone, Default)]
pub struct NetworkBuilder {
    lines: Vec<Line>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl NetworkBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a line: an id and its ordered station sequence.
    ///
    /// May cause the builder to enter a [`ShortLine`](BuilderInvalidReason::ShortLine)
    /// or [`DuplicateLine`](BuilderInvalidReason::DuplicateLine) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn line<S: Into<String>>(
        &mut self,
        id: impl Into<String>,
        stations: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let id = id.into();
        let stations = stations.into_iter().map(Into::into).collect_vec();
        if stations.len() < 2 {
            self.invalid_reasons.push(BuilderInvalidReason::ShortLine);
            return self;
        }
        if self.lines.iter().any(|line| line.id == id) {
            self.invalid_reasons.push(BuilderInvalidReason::DuplicateLine);
            return self;
        }

        self.lines.push(Line {
            id,
            stations,
            labels: None,
            circular: false,
            commuter: false,
        });
        self
    }

    /// Override the direction labels of a declared line. Without an override the
    /// labels default to the line's first and last station names.
    ///
    /// May cause the builder to enter an [`UnknownLine`](BuilderInvalidReason::UnknownLine)
    /// invalid state. If the builder is already in an invalid state, this function
    /// does nothing.
    pub fn labels(
        &mut self,
        id: &str,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        match self.lines.iter_mut().find(|line| line.id == id) {
            Some(line) => line.labels = Some((start.into(), end.into())),
            None => self.invalid_reasons.push(BuilderInvalidReason::UnknownLine),
        }
        self
    }

    /// Flag a declared line as circular: its last station connects back to its first.
    ///
    /// May cause the builder to enter an [`UnknownLine`](BuilderInvalidReason::UnknownLine)
    /// invalid state. If the builder is already in an invalid state, this function
    /// does nothing.
    pub fn circular(&mut self, id: &str) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        match self.lines.iter_mut().find(|line| line.id == id) {
            Some(line) => line.circular = true,
            None => self.invalid_reasons.push(BuilderInvalidReason::UnknownLine),
        }
        self
    }

    /// Flag a declared line as commuter rail, the line class goal-mode routing
    /// excludes.
    ///
    /// May cause the builder to enter an [`UnknownLine`](BuilderInvalidReason::UnknownLine)
    /// invalid state. If the builder is already in an invalid state, this function
    /// does nothing.
    pub fn commuter(&mut self, id: &str) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        match self.lines.iter_mut().find(|line| line.id == id) {
            Some(line) => line.commuter = true,
            None => self.invalid_reasons.push(BuilderInvalidReason::UnknownLine),
        }
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`]
    /// condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)`
    /// otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Intern stations, assemble the track graph, and freeze the [`Network`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of
    /// [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Network, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let mut station_names: Vec<String> = Vec::new();
        let mut station_index: HashMap<String, StationId> = HashMap::new();
        for name in self.lines.iter().flat_map(|line| line.stations.iter()) {
            if !station_index.contains_key(name) {
                station_index.insert(name.clone(), StationId(station_names.len() as u16));
                station_names.push(name.clone());
            }
        }

        let mut station_lines = vec![Vec::new(); station_names.len()];
        for (index, line) in self.lines.iter().enumerate() {
            for name in line.stations.iter().unique() {
                station_lines[station_index[name].0 as usize].push(index as LineIdx);
            }
        }

        let mut graph: UnGraphMap<StationId, Vec<LineIdx>> = UnGraphMap::with_capacity(
            station_names.len(),
            self.lines.iter().map(|line| line.stations.len()).sum(),
        );
        for (index, line) in self.lines.iter().enumerate() {
            let index = index as LineIdx;
            let ids = line
                .stations
                .iter()
                .map(|name| station_index[name])
                .collect_vec();

            let mut pairs = ids.windows(2).map(|pair| (pair[0], pair[1])).collect_vec();
            if line.circular {
                if let (Some(&first), Some(&last)) = (ids.first(), ids.last()) {
                    pairs.push((last, first));
                }
            }

            for (a, b) in pairs {
                // a line listing the same station twice in a row yields no segment
                if a == b {
                    continue;
                }
                match graph.edge_weight_mut(a, b) {
                    Some(lines) => {
                        if !lines.contains(&index) {
                            lines.push(index);
                        }
                    }
                    None => {
                        graph.add_edge(a, b, vec![index]);
                    }
                }
            }
        }

        Ok(Network {
            lines: self.lines.clone(),
            station_names,
            station_index,
            station_lines,
            graph,
        })
    }
}
