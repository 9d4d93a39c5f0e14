use crate::constants::TAROT_SPREAD_SIZE;
use crate::error::{CatalogError, DrawError};
use crate::structs::{TarotCard, TradingCard};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const BUNDLED_TRADING_CARDS: &str = include_str!("../resources/cards.json");
const BUNDLED_TAROT_CARDS: &str = include_str!("../resources/tavernarcana.json");

///
/// Every card the bot can hand out.
///
/// Loaded once at startup and never mutated afterwards. Draws hand out
/// clones, so callers can never reach the stored records.
///
#[derive(Debug, Clone)]
pub struct Catalog {
    trading_cards: Vec<TradingCard>,
    tarot_cards: Vec<TarotCard>,
}

impl Catalog {
    pub fn new(trading_cards: Vec<TradingCard>, tarot_cards: Vec<TarotCard>) -> Catalog {
        Catalog {
            trading_cards,
            tarot_cards,
        }
    }

    pub fn from_json(trading_json: &str, tarot_json: &str) -> Result<Catalog, CatalogError> {
        let trading_cards: Vec<TradingCard> = serde_json::from_str(trading_json)?;
        let tarot_cards: Vec<TarotCard> = serde_json::from_str(tarot_json)?;
        Ok(Catalog::new(trading_cards, tarot_cards))
    }

    /// The August deck and the Tavern Arcana shipped with the bot.
    pub fn bundled() -> Result<Catalog, CatalogError> {
        Catalog::from_json(BUNDLED_TRADING_CARDS, BUNDLED_TAROT_CARDS)
    }

    ///
    /// Load the catalog, reading each dataset from its path when one is given
    /// and falling back to the bundled data otherwise.
    ///
    pub fn load(
        trading_path: Option<&Path>,
        tarot_path: Option<&Path>,
    ) -> Result<Catalog, CatalogError> {
        let trading_json = match trading_path {
            Some(path) => read_dataset(path)?,
            None => BUNDLED_TRADING_CARDS.to_string(),
        };
        let tarot_json = match tarot_path {
            Some(path) => read_dataset(path)?,
            None => BUNDLED_TAROT_CARDS.to_string(),
        };
        let catalog = Catalog::from_json(&trading_json, &tarot_json)?;
        info!(
            "Loaded {} trading cards and {} tarot cards",
            catalog.trading_cards.len(),
            catalog.tarot_cards.len()
        );
        Ok(catalog)
    }

    pub fn trading_cards(&self) -> &[TradingCard] {
        &self.trading_cards
    }

    pub fn tarot_cards(&self) -> &[TarotCard] {
        &self.tarot_cards
    }

    pub fn cards_of_rank(&self, rank: usize) -> Vec<&TradingCard> {
        self.trading_cards
            .iter()
            .filter(|card| card.rank == rank)
            .collect()
    }

    /// Number of distinct tarot identities that can actually be drawn.
    pub fn eligible_tarot_count(&self) -> usize {
        self.tarot_cards
            .iter()
            .filter(|card| card.is_eligible())
            .map(|card| card.id)
            .collect::<HashSet<u32>>()
            .len()
    }

    ///
    /// Check that every draw can succeed.
    ///
    /// Each rank with a non-zero weight needs at least one card, and the tarot
    /// deck needs enough eligible cards for a full spread. Rank 0 also needs
    /// cards when the weights sum to less than 1, since the sampler falls back
    /// to it.
    ///
    pub fn validate(&self, weights: &[f64]) -> Result<(), DrawError> {
        if weights.is_empty() {
            return Err(DrawError::NoRankWeights);
        }
        let total: f64 = weights.iter().sum();
        if total < 1.0 && self.cards_of_rank(0).is_empty() {
            return Err(DrawError::MissingFallbackRank { total });
        }
        for (rank, weight) in weights.iter().enumerate() {
            if *weight > 0.0 && self.cards_of_rank(rank).is_empty() {
                return Err(DrawError::MissingRank {
                    rank,
                    weight: *weight,
                });
            }
        }
        let found = self.eligible_tarot_count();
        if found < TAROT_SPREAD_SIZE {
            return Err(DrawError::InsufficientTarotCards {
                found,
                needed: TAROT_SPREAD_SIZE,
            });
        }
        debug!("Catalog validated against weights {:?}", weights);
        Ok(())
    }
}

fn read_dataset(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })
}
