use unordered_pair::UnorderedPair;

use crate::network::LineId;

/// A service interruption on the track segment between two adjacent stations of
/// one line.
///
/// Blocking is symmetric and scoped to the named line: the same two stations stay
/// reachable over any other line serving them, so an interchange can never be cut
/// off by a single outage.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Outage {
    /// The two stations the segment connects, in no particular order.
    pub stations: UnorderedPair<String>,
    /// The line on which the segment is out of service.
    pub line: LineId,
}

impl Outage {
    /// An outage between `a` and `b` on `line`.
    pub fn new(a: impl Into<String>, b: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            stations: UnorderedPair::from((a.into(), b.into())),
            line: line.into(),
        }
    }

    /// Whether either end of the blocked segment is `station`.
    pub fn touches(&self, station: &str) -> bool {
        self.stations.0 == station || self.stations.1 == station
    }

    /// Whether this outage blocks travel between `a` and `b` on `line`, in either
    /// direction. Session layers use this to turn an attempted move across the
    /// segment into an interruption step.
    pub fn blocks(&self, a: &str, b: &str, line: &str) -> bool {
        self.line == line && self.stations == UnorderedPair::from((a.to_owned(), b.to_owned()))
    }
}
