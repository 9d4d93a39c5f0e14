use crate::catalog::Catalog;
use crate::constants::{TAROT_SPREAD_SIZE, WORLD_CARD_ID};
use crate::error::DrawError;
use crate::sampler::choose_weighted_index;
use crate::structs::{TarotCard, TarotSpread, TradingCard};
use rand::Rng;
use tracing::trace;

///
/// Draw one trading card.
///
/// A rank is picked with `weights`, then a card of that rank uniformly. The
/// returned card is a fresh copy with its level reset to 0.
///
pub fn draw_trading_card<R: Rng + ?Sized>(
    catalog: &Catalog,
    weights: &[f64],
    rng: &mut R,
) -> Result<TradingCard, DrawError> {
    let rank = choose_weighted_index(weights, rng);
    let candidates = catalog.cards_of_rank(rank);
    if candidates.is_empty() {
        return Err(DrawError::EmptyPool { rank });
    }
    let mut card = candidates[rng.gen_range(0..candidates.len())].clone();
    card.level = 0;
    trace!("Drew trading card {} ({}) at rank {}", card.id, card.name, rank);
    Ok(card)
}

///
/// Draw a three card tarot spread for `drawer`.
///
/// Cards are sampled uniformly from the whole deck, skipping cards without an
/// image and cards already in the spread. The first card drawn is the
/// primary, then the reverse, then the advice.
///
/// Drawing The World as the primary card replaces its description with a
/// line naming the drawer.
///
pub fn draw_tarot_cards<R: Rng + ?Sized>(
    catalog: &Catalog,
    drawer: &str,
    rng: &mut R,
) -> Result<TarotSpread, DrawError> {
    let found = catalog.eligible_tarot_count();
    if found < TAROT_SPREAD_SIZE {
        return Err(DrawError::InsufficientTarotCards {
            found,
            needed: TAROT_SPREAD_SIZE,
        });
    }
    let deck = catalog.tarot_cards();
    let mut primary = pick_tarot_card(deck, &[], rng);
    let reverse = pick_tarot_card(deck, &[primary.id], rng);
    let advice = pick_tarot_card(deck, &[primary.id, reverse.id], rng);
    if primary.id == WORLD_CARD_ID {
        primary.description = format!("I, {}, have a dream!", drawer);
    }
    trace!(
        "Drew tarot spread {} / {} / {} for {}",
        primary.name,
        reverse.name,
        advice.name,
        drawer
    );
    Ok(TarotSpread {
        primary,
        reverse,
        advice,
    })
}

/// Rejection-sample one eligible card whose id is not in `taken`.
fn pick_tarot_card<R: Rng + ?Sized>(deck: &[TarotCard], taken: &[u32], rng: &mut R) -> TarotCard {
    loop {
        let card = &deck[rng.gen_range(0..deck.len())];
        if card.is_eligible() && !taken.contains(&card.id) {
            return card.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{tarot_card, trading_card};
    use crate::constants::RANK_WEIGHTS;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    fn world_catalog() -> Catalog {
        let mut tarot: Vec<TarotCard> = (19..=WORLD_CARD_ID).map(|id| tarot_card(id, "x.png")).collect();
        tarot.push(tarot_card(30, ""));
        Catalog::new(vec![trading_card(1, 0, 0)], tarot)
    }

    #[test]
    fn trading_card_level_is_reset() {
        let catalog = Catalog::new(
            vec![trading_card(1, 0, 7), trading_card(2, 1, 3)],
            vec![],
        );
        let before = catalog.trading_cards().to_vec();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let mut card = draw_trading_card(&catalog, &[0.5, 0.5], &mut rng).unwrap();
            assert_eq!(card.level, 0);
            assert!(catalog.trading_cards().iter().any(|c| c.rank == card.rank));
            card.level = 99;
        }
        assert_eq!(catalog.trading_cards(), before.as_slice());
    }

    #[test]
    fn bundled_draws_only_existing_ranks() {
        let catalog = Catalog::bundled().unwrap();
        let ranks: HashSet<usize> = catalog.trading_cards().iter().map(|c| c.rank).collect();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let card = draw_trading_card(&catalog, &RANK_WEIGHTS, &mut rng).unwrap();
            assert!(ranks.contains(&card.rank));
            assert_eq!(card.level, 0);
        }
    }

    #[test]
    fn empty_rank_fails_explicitly() {
        let catalog = Catalog::new(vec![trading_card(1, 0, 0)], vec![]);
        let mut rng = StdRng::seed_from_u64(5);
        let err = draw_trading_card(&catalog, &[0.0, 1.0], &mut rng).unwrap_err();
        assert_eq!(err, DrawError::EmptyPool { rank: 1 });
        assert!(!err.is_configuration());
    }

    #[test]
    fn validated_catalog_covers_the_fallback_rank() {
        // r just below 1.0 lands past every boundary of weights summing to 0.9.
        let weights = [0.0, 0.5, 0.4];
        let short = Catalog::new(
            vec![trading_card(1, 1, 0), trading_card(2, 2, 0)],
            (0..3).map(|id| tarot_card(id, "x.png")).collect(),
        );
        assert!(short.validate(&weights).is_err());
        let mut rng = StepRng::new(u64::MAX, 0);
        assert_eq!(
            draw_trading_card(&short, &weights, &mut rng).unwrap_err(),
            DrawError::EmptyPool { rank: 0 }
        );

        let covered = Catalog::new(
            vec![trading_card(1, 1, 0), trading_card(2, 2, 0), trading_card(3, 0, 0)],
            (0..3).map(|id| tarot_card(id, "x.png")).collect(),
        );
        covered.validate(&weights).unwrap();
        // The second value wraps to 0 and picks the only rank 0 card.
        let mut rng = StepRng::new(u64::MAX, 1);
        let card = draw_trading_card(&covered, &weights, &mut rng).unwrap();
        assert_eq!(card.id, 3);
    }

    #[test]
    fn rank_draws_are_uniform_within_rank() {
        let mut cards: Vec<TradingCard> = (1..=5).map(|id| trading_card(id, 2, 0)).collect();
        cards.extend((6..=8).map(|id| trading_card(id, 0, 0)));
        cards.push(trading_card(9, 1, 0));
        cards.push(trading_card(10, 3, 0));
        cards.push(trading_card(11, 4, 0));
        let catalog = Catalog::new(cards, vec![]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<u32, usize> = HashMap::new();
        let mut rank_two = 0;
        for _ in 0..100_000 {
            let card = draw_trading_card(&catalog, &RANK_WEIGHTS, &mut rng).unwrap();
            if card.rank == 2 {
                rank_two += 1;
                *counts.entry(card.id).or_insert(0) += 1;
            }
        }
        assert!(((rank_two as f64 / 100_000.0) - 0.40).abs() < 0.01);
        assert_eq!(counts.len(), 5);
        for (id, count) in counts {
            let share = count as f64 / rank_two as f64;
            assert!((share - 0.20).abs() < 0.02, "card {} share {}", id, share);
        }
    }

    #[test]
    fn tarot_spread_is_distinct_and_eligible() {
        let catalog = Catalog::bundled().unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..2_000 {
            let spread = draw_tarot_cards(&catalog, "Mika", &mut rng).unwrap();
            let cards = [&spread.primary, &spread.reverse, &spread.advice];
            let ids: HashSet<u32> = cards.iter().map(|c| c.id).collect();
            assert_eq!(ids.len(), 3);
            assert!(cards.iter().all(|c| c.is_eligible()));
        }
    }

    #[test]
    fn world_description_names_drawer_only_as_primary() {
        let catalog = world_catalog();
        let original = catalog
            .tarot_cards()
            .iter()
            .find(|c| c.id == WORLD_CARD_ID)
            .unwrap()
            .description
            .clone();
        let mut rng = StdRng::seed_from_u64(21);
        let mut saw_world_primary = false;
        let mut saw_world_other = false;
        for _ in 0..500 {
            let spread = draw_tarot_cards(&catalog, "Giorno", &mut rng).unwrap();
            if spread.primary.id == WORLD_CARD_ID {
                saw_world_primary = true;
                assert_eq!(spread.primary.description, "I, Giorno, have a dream!");
            } else {
                assert_eq!(
                    spread.primary.description,
                    format!("Description {}", spread.primary.id)
                );
            }
            for card in [&spread.reverse, &spread.advice] {
                if card.id == WORLD_CARD_ID {
                    saw_world_other = true;
                    assert_eq!(card.description, original);
                }
            }
        }
        assert!(saw_world_primary && saw_world_other);
        let stored = catalog
            .tarot_cards()
            .iter()
            .find(|c| c.id == WORLD_CARD_ID)
            .unwrap();
        assert_eq!(stored.description, original);
    }

    #[test]
    fn tarot_without_enough_cards_fails_fast() {
        let catalog = Catalog::new(
            vec![],
            vec![tarot_card(0, "a.png"), tarot_card(1, "b.png"), tarot_card(2, "")],
        );
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            draw_tarot_cards(&catalog, "anyone", &mut rng).unwrap_err(),
            DrawError::InsufficientTarotCards { found: 2, needed: 3 }
        );
    }
}
