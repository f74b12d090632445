#![warn(missing_docs)]

//! # `metroquest`
//!
//! The game core of a multi-line transit trip simulator: model a network as
//! line definitions, answer shortest-route queries over it, procedurally
//! generate goal-mode levels whose outages force detours, and score recorded
//! trips.
//! Begin by building a [`Network`] with a [`NetworkBuilder`], or take the
//! production Madrid network from [`madrid`]. Query adjacency and serving
//! lines directly on the network, run routes through [`Network::route`],
//! generate levels with a [`LevelGenerator`], and turn a recorded
//! [`PathStep`] sequence into points with [`score`] and result-screen copy
//! with [`analyze`].
//!
//! Nothing in this crate errors at query time: unknown names yield empty
//! collections, an unroutable pair yields `None`, and generation that cannot
//! hit its difficulty target within its attempt budgets degrades to a trivial
//! but valid level.
//!
//! # Internals
//! The network interns station names and keeps one undirected track graph
//! edge per adjacent station pair, weighted with the lines serving that
//! segment. The router searches (station, line) states, so a station can be
//! re-entered on a different line for a transfer without being considered
//! visited; states live in an arena and carry parent indices for path
//! reconstruction. The frontier is ordered by `(hops, transfers)`, making
//! results minimal in travel edges first and line changes second.
//!
//! Level generation is greedy route destruction: starting from a difficulty's
//! station pools, it repeatedly knocks out a random travel edge of the current
//! best route, keeping each outage only if the pair stays connected. All
//! randomness flows through a caller-supplied [`rand::Rng`], so a seeded
//! generator reproduces levels exactly.

pub use builder::{BuilderInvalidReason, NetworkBuilder};
pub use level::{Difficulty, GeneratorLimits, Level, LevelGenerator};
pub use network::{Line, LineId, Neighbor, Network};
pub use outage::Outage;
pub use router::{PathStep, Route, RouteQuery, StepKind};
pub use score::{analyze, score, ScoreMode, TripAnalysis};
pub use rarity::RarityTable;

pub mod madrid;
mod tests;
pub(crate) mod network;
pub(crate) mod builder;
pub(crate) mod outage;
pub(crate) mod router;
pub(crate) mod rarity;
pub(crate) mod level;
pub(crate) mod score;
