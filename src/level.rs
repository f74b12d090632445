use itertools::Itertools;
use rand::seq::IndexedRandom;
use rand::Rng;
use strum::VariantArray;

use crate::network::Network;
use crate::outage::Outage;
use crate::rarity::RarityTable;

/// How punishing a generated level should be.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, VariantArray)]
pub enum Difficulty {
    /// Start at a major hub, no outages.
    Easy,
    /// Start anywhere on the metro, one to three outages.
    Medium,
    /// Start at a rare station, two to five outages.
    Hard,
}

impl Difficulty {
    /// The fewest outages a generated level of this difficulty may carry.
    pub fn minimum_outages(self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }

    fn outage_target<R: Rng + ?Sized>(self, rng: &mut R) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => rng.random_range(1..=3),
            Self::Hard => rng.random_range(2..=5),
        }
    }
}

/// A generated goal-mode level, stored verbatim by the session layer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Level {
    /// Where the player starts.
    pub start: String,
    /// Where they must arrive.
    pub end: String,
    /// Track segments out of service for the whole session.
    pub outages: Vec<Outage>,
}

/// Attempt budgets bounding level generation. Generation carries nested retry
/// loops; these hard bounds are what guarantees it terminates, so tests can
/// shrink them to force the worst case deterministically.
#[derive(Clone, Copy, Debug)]
pub struct GeneratorLimits {
    /// Full restarts (fresh start/end pair) before falling back to a trivial level.
    pub attempts: usize,
    /// Tentative outage insertions per attempt.
    pub edge_tries: usize,
}

impl Default for GeneratorLimits {
    fn default() -> Self {
        Self {
            attempts: 100,
            edge_tries: 20,
        }
    }
}

/// Procedural level generation: pick a start/end pair, then greedily convert
/// travel edges of the current best route into outages while a route still
/// exists.
///
/// Outage placement is deliberately not optimal. Every tentative outage is kept
/// only after a route re-check confirms the pair stays connected, so a generated
/// level is always solvable; placement merely forces detours.
pub struct LevelGenerator<'a> {
    network: &'a Network,
    rarity: &'a RarityTable,
    limits: GeneratorLimits,
}

impl<'a> LevelGenerator<'a> {
    /// A generator over `network`, with `rarity` driving the easy and hard
    /// station pools.
    pub fn new(network: &'a Network, rarity: &'a RarityTable) -> Self {
        Self {
            network,
            rarity,
            limits: GeneratorLimits::default(),
        }
    }

    /// Replace the default attempt budgets.
    pub fn with_limits(mut self, limits: GeneratorLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Generate a level for `difficulty`, drawing all randomness from `rng`.
    ///
    /// Never fails: if no attempt satisfies the difficulty within the budgets, a
    /// trivial connected level is returned instead.
    pub fn generate<R: Rng + ?Sized>(&self, difficulty: Difficulty, rng: &mut R) -> Level {
        let metro_served = self.metro_served();
        let start_pool = self.start_pool(difficulty, &metro_served);

        for _ in 0..self.limits.attempts {
            let Some(&start) = start_pool.choose(rng) else {
                break;
            };
            let ends = metro_served
                .iter()
                .copied()
                .filter(|&station| station != start)
                .collect_vec();
            let Some(&end) = ends.choose(rng) else {
                break;
            };

            let minimum = difficulty.minimum_outages();
            let target = difficulty.outage_target(rng);
            let mut outages: Vec<Outage> = Vec::with_capacity(target);

            for _ in 0..self.limits.edge_tries {
                if outages.len() >= target {
                    break;
                }
                let Some(route) = self
                    .network
                    .route()
                    .metro_only()
                    .avoiding(&outages)
                    .between(start, end)
                else {
                    break;
                };
                // an outage on the first or last segment would strand the player
                let candidates = route
                    .segments()
                    .into_iter()
                    .filter(|segment| !segment.touches(start) && !segment.touches(end))
                    .collect_vec();
                let Some(pick) = candidates.choose(rng) else {
                    break;
                };
                outages.push(pick.clone());
                if self
                    .network
                    .route()
                    .metro_only()
                    .avoiding(&outages)
                    .between(start, end)
                    .is_none()
                {
                    // this segment was the last connection; put it back in service
                    outages.pop();
                }
            }

            if outages.len() >= minimum
                && self
                    .network
                    .route()
                    .metro_only()
                    .avoiding(&outages)
                    .between(start, end)
                    .is_some()
            {
                return Level {
                    start: start.to_owned(),
                    end: end.to_owned(),
                    outages,
                };
            }
        }

        self.fallback()
    }

    // stations served by at least one non-commuter line
    fn metro_served(&self) -> Vec<&'a str> {
        self.network
            .lines()
            .filter(|line| !line.is_commuter())
            .flat_map(|line| line.stations().iter().map(String::as_str))
            .sorted()
            .dedup()
            .collect()
    }

    fn start_pool(&self, difficulty: Difficulty, metro_served: &[&'a str]) -> Vec<&'a str> {
        let pool = match difficulty {
            Difficulty::Easy => metro_served
                .iter()
                .copied()
                .filter(|station| self.rarity.tier(station) == 1)
                .collect_vec(),
            Difficulty::Medium => metro_served.to_vec(),
            Difficulty::Hard => metro_served
                .iter()
                .copied()
                .filter(|station| self.rarity.tier(station) >= 3)
                .collect_vec(),
        };
        if pool.is_empty() {
            metro_served.to_vec()
        } else {
            pool
        }
    }

    // the guaranteed-valid level: two adjacent stations on the first metro line
    fn fallback(&self) -> Level {
        let line = self
            .network
            .lines()
            .find(|line| !line.is_commuter())
            .or_else(|| self.network.lines().next());
        match line {
            Some(line) if line.stations().len() >= 2 => Level {
                start: line.stations()[0].clone(),
                end: line.stations()[1].clone(),
                outages: Vec::new(),
            },
            _ => Level {
                start: String::new(),
                end: String::new(),
                outages: Vec::new(),
            },
        }
    }
}
