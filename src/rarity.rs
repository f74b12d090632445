use std::collections::HashMap;

/// Station rarity tiers, 1 (a hub everyone passes through) to 5 (deep network).
///
/// Stations absent from the table sit at tier 2. Tier 1 doubles as the major-hub
/// pool for easy level starts; free-roam scoring pays a premium on tiers 3 and 4.
#[derive(Clone, Debug, Default)]
pub struct RarityTable {
    tiers: HashMap<String, u8>,
}

impl RarityTable {
    /// The tier of `station`, defaulting to 2 when the table has no entry.
    pub fn tier(&self, station: &str) -> u8 {
        self.tiers.get(station).copied().unwrap_or(2)
    }
}

impl<S: Into<String>> FromIterator<(S, u8)> for RarityTable {
    fn from_iter<T: IntoIterator<Item = (S, u8)>>(iter: T) -> Self {
        Self {
            tiers: iter
                .into_iter()
                .map(|(station, tier)| (station.into(), tier))
                .collect(),
        }
    }
}
