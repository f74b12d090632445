use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use unordered_pair::UnorderedPair;

use crate::network::{LineId, LineIdx, Network, StationId};
use crate::outage::Outage;

/// What a single step of a trip did.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StepKind {
    /// The starting station; carries no line.
    Origin,
    /// Boarding the first line of the trip, without moving.
    Start,
    /// Moving to an adjacent station on the boarded line.
    Travel,
    /// Changing line while staying at the same station.
    Transfer,
    /// An attempted move across a blocked segment; the station does not change.
    /// Never produced by the router, only recorded by a session layer.
    Interruption,
}

/// One node of a recorded or reconstructed route: a station together with how it
/// was reached.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathStep {
    /// Station the step ends at.
    pub station: String,
    /// Line used to arrive; `None` only for [`StepKind::Origin`].
    pub line: Option<LineId>,
    /// What the step did.
    pub kind: StepKind,
    /// Position of the step within its trip.
    pub seq: usize,
}

/// A shortest route between two stations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Route {
    /// `Origin`, then `Start`/`Travel`/`Transfer` steps in trip order.
    pub steps: Vec<PathStep>,
    /// Number of travel edges taken.
    pub hops: u32,
    /// Number of line changes.
    pub transfers: u32,
}

impl Route {
    /// The track segments this route travels, as [`Outage`]-shaped values.
    /// Level generation draws its candidate outages from here; result screens use
    /// it to highlight the best route's edges.
    pub fn segments(&self) -> Vec<Outage> {
        let mut segments = Vec::new();
        for pair in self.steps.windows(2) {
            let (prev, step) = (&pair[0], &pair[1]);
            if step.kind != StepKind::Travel {
                continue;
            }
            if let Some(line) = &step.line {
                segments.push(Outage::new(prev.station.clone(), step.station.clone(), line.clone()));
            }
        }
        segments
    }
}

// One arena slot of the search tree. Parent links are indices into the arena,
// followed backwards during reconstruction.
struct SearchNode {
    station: StationId,
    line: Option<LineIdx>,
    kind: StepKind,
    parent: Option<usize>,
    hops: u32,
    transfers: u32,
}

/// A configured shortest-route search over a [`Network`].
///
/// Obtained from [`Network::route`]; configure with
/// [`avoiding`](Self::avoiding) and [`metro_only`](Self::metro_only), then run
/// with [`between`](Self::between).
///
/// The search explores (station, line) states, so a station can be re-entered on
/// a different line to permit transfers. The frontier is ordered by
/// `(hops, transfers)`, which makes the result minimal in travel edges and, among
/// routes with that hop count, minimal in line changes.
#[derive(Clone, Copy)]
pub struct RouteQuery<'a> {
    network: &'a Network,
    outages: &'a [Outage],
    metro_only: bool,
}

impl Network {
    /// Begin a shortest-route query against this network.
    pub fn route(&self) -> RouteQuery<'_> {
        RouteQuery {
            network: self,
            outages: &[],
            metro_only: false,
        }
    }
}

impl<'a> RouteQuery<'a> {
    /// Treat the listed segments as blocked. Outages naming unknown stations or
    /// lines are ignored.
    pub fn avoiding(mut self, outages: &'a [Outage]) -> Self {
        self.outages = outages;
        self
    }

    /// Never board or transfer to a commuter-rail line.
    pub fn metro_only(mut self) -> Self {
        self.metro_only = true;
        self
    }

    /// The shortest route from `start` to `end`, or `None` when the two are
    /// disconnected under the configured outages and exclusions (or either name
    /// is unknown). Not found is an expected outcome, not an error.
    pub fn between(&self, start: &str, end: &str) -> Option<Route> {
        let network = self.network;
        let start = network.station_id(start)?;
        let end = network.station_id(end)?;

        let blocked = self.blocked_segments();

        let mut arena = vec![SearchNode {
            station: start,
            line: None,
            kind: StepKind::Origin,
            parent: None,
            hops: 0,
            transfers: 0,
        }];
        let mut frontier: BinaryHeap<Reverse<(u32, u32, usize)>> = BinaryHeap::new();
        frontier.push(Reverse((0, 0, 0)));
        // a state is settled at most once, on its first (cheapest) pop
        let mut settled: HashSet<(StationId, Option<LineIdx>)> = HashSet::new();

        fn enqueue(
            arena: &mut Vec<SearchNode>,
            frontier: &mut BinaryHeap<Reverse<(u32, u32, usize)>>,
            settled: &HashSet<(StationId, Option<LineIdx>)>,
            node: SearchNode,
        ) {
            if settled.contains(&(node.station, node.line)) {
                return;
            }
            frontier.push(Reverse((node.hops, node.transfers, arena.len())));
            arena.push(node);
        }

        while let Some(Reverse((hops, transfers, index))) = frontier.pop() {
            let (station, line) = {
                let node = &arena[index];
                (node.station, node.line)
            };
            if !settled.insert((station, line)) {
                continue;
            }
            if station == end {
                return Some(self.reconstruct(&arena, index));
            }

            match line {
                // the origin: board every eligible line here
                None => {
                    for &l in network.line_ids_at(station) {
                        if self.eligible(l) {
                            enqueue(&mut arena, &mut frontier, &settled, SearchNode {
                                station,
                                line: Some(l),
                                kind: StepKind::Start,
                                parent: Some(index),
                                hops,
                                transfers,
                            });
                        }
                    }
                }
                Some(current) => {
                    // travel along the current line over unblocked segments
                    for (a, b, lines) in network.graph.edges(station) {
                        let next = if a == station { b } else { a };
                        if !lines.contains(&current) {
                            continue;
                        }
                        if blocked.contains(&(UnorderedPair::from((station, next)), current)) {
                            continue;
                        }
                        enqueue(&mut arena, &mut frontier, &settled, SearchNode {
                            station: next,
                            line: Some(current),
                            kind: StepKind::Travel,
                            parent: Some(index),
                            hops: hops + 1,
                            transfers,
                        });
                    }
                    // change line in place
                    for &l in network.line_ids_at(station) {
                        if l != current && self.eligible(l) {
                            enqueue(&mut arena, &mut frontier, &settled, SearchNode {
                                station,
                                line: Some(l),
                                kind: StepKind::Transfer,
                                parent: Some(index),
                                hops,
                                transfers: transfers + 1,
                            });
                        }
                    }
                }
            }
        }

        None
    }

    fn eligible(&self, line: LineIdx) -> bool {
        !(self.metro_only && self.network.line_by_idx(line).is_commuter())
    }

    fn blocked_segments(&self) -> HashSet<(UnorderedPair<StationId>, LineIdx)> {
        let network = self.network;
        self.outages
            .iter()
            .filter_map(|outage| {
                let a = network.station_id(&outage.stations.0)?;
                let b = network.station_id(&outage.stations.1)?;
                let line = network.line_idx(&outage.line)?;
                Some((UnorderedPair::from((a, b)), line))
            })
            .collect()
    }

    fn reconstruct(&self, arena: &[SearchNode], goal: usize) -> Route {
        let network = self.network;

        let mut indices = Vec::new();
        let mut cursor = Some(goal);
        while let Some(index) = cursor {
            indices.push(index);
            cursor = arena[index].parent;
        }
        indices.reverse();

        let steps = indices
            .iter()
            .enumerate()
            .map(|(seq, &index)| {
                let node = &arena[index];
                PathStep {
                    station: network.station_name(node.station).to_owned(),
                    line: node.line.map(|l| network.line_by_idx(l).id().to_owned()),
                    kind: node.kind,
                    seq,
                }
            })
            .collect();

        let tail = &arena[goal];
        Route {
            steps,
            hops: tail.hops,
            transfers: tail.transfers,
        }
    }
}
