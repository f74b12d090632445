use std::collections::HashSet;

use strum::VariantArray;

use crate::rarity::RarityTable;
use crate::router::{PathStep, StepKind};

/// Scoring mode for a recorded trip.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, VariantArray)]
pub enum ScoreMode {
    /// Free roam: rarity pays, revisits do not.
    Free,
    /// Commute: travel and transfers only.
    Work,
}

/// Score a recorded step sequence under `mode`.
///
/// In [`Free`](ScoreMode::Free) mode the first visit of a station via an
/// `Origin` or `Travel` step awards by rarity tier (4 pays 50, 3 pays 25,
/// anything else the base 10) and every `Transfer` step a flat 20, repeated or
/// not. In [`Work`](ScoreMode::Work) mode the score is the travel step count
/// plus five per transfer; rarity and interruptions are irrelevant.
///
/// Extending a path by one step never lowers its score, so this can be applied
/// to every prefix for a running total.
pub fn score(path: &[PathStep], mode: ScoreMode, rarity: &RarityTable) -> u32 {
    match mode {
        ScoreMode::Free => {
            let mut total = 0;
            let mut visited: HashSet<&str> = HashSet::new();
            for step in path {
                match step.kind {
                    StepKind::Travel | StepKind::Origin => {
                        if visited.insert(step.station.as_str()) {
                            // tier 5 pays the base award too
                            total += match rarity.tier(&step.station) {
                                4 => 50,
                                3 => 25,
                                _ => 10,
                            };
                        }
                    }
                    StepKind::Transfer => total += 20,
                    StepKind::Start | StepKind::Interruption => {}
                }
            }
            total
        }
        ScoreMode::Work => {
            let travels = path.iter().filter(|step| step.kind == StepKind::Travel).count();
            let transfers = path.iter().filter(|step| step.kind == StepKind::Transfer).count();
            (travels + 5 * transfers) as u32
        }
    }
}

/// Presentation summary derived from a finished trip. Purely descriptive; the
/// numeric score comes from [`score`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TripAnalysis {
    /// Unique stations reached by travel steps.
    pub stops: usize,
    /// Accumulated bonus for travel through tier-3-or-higher stations, counted
    /// per step rather than per unique station.
    pub rarity_bonus: u32,
    /// Rank label for the result screen.
    pub rank: &'static str,
    /// One-line narrative to go with the rank.
    pub summary: &'static str,
}

/// Derive the result-screen copy for a finished trip.
///
/// Rank thresholds apply in order: more than two transfers, then more than ten
/// unique stops, then a rarity bonus above 50; otherwise a mode-specific
/// default.
pub fn analyze(
    path: &[PathStep],
    transfers: u32,
    mode: ScoreMode,
    rarity: &RarityTable,
) -> TripAnalysis {
    let stops = path
        .iter()
        .filter(|step| step.kind == StepKind::Travel)
        .map(|step| step.station.as_str())
        .collect::<HashSet<_>>()
        .len();

    let rarity_bonus = path
        .iter()
        .filter(|step| step.kind == StepKind::Travel && rarity.tier(&step.station) >= 3)
        .count() as u32
        * 25;

    let (rank, summary) = if transfers > 2 {
        ("Corredor del Laberinto", "Te encantan los transbordos.")
    } else if stops > 10 {
        ("Viajero de Largo Recorrido", "Ha sido una maratón.")
    } else if rarity_bonus > 50 {
        ("Explorador", "Has visitado los rincones más profundos.")
    } else {
        match mode {
            ScoreMode::Free => ("El Turista", "Corto y dulce."),
            ScoreMode::Work => ("Oficinista Puntual", "Un día más en la oficina."),
        }
    };

    TripAnalysis {
        stops,
        rarity_bonus,
        rank,
        summary,
    }
}
