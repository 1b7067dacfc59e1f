//! Sanity checks over the game's reaction pools.
//!
//! Run these after editing the catalog or the level pools. Findings are
//! logged and counted in a [`PoolReport`].

use rand::Rng;

use super::{fix_quantity_range_violation, ChallengeGenerator, ChallengeVisibility, Level};
use crate::catalog::ReactionId;
use crate::{GameConfig, QuantityRange};

/// Counts of problems found by [`check_pools`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolReport {
    /// Pool reactions with a reactant coefficient outside `[1, max_quantity]`
    pub coefficient_range_errors: usize,
    /// Pool reactions whose quantities cannot be fixed with every reactant at max
    pub unfixable_range_violations: usize,
    /// Generated challenges with a reactant quantity of 0
    pub zero_reactant_errors: usize,
    /// Generated batches without exactly one zero-products challenge
    pub zero_products_count_errors: usize,
    /// Generated challenges with a quantity outside the range
    pub quantity_range_errors: usize,
    /// Batches that failed to generate
    pub generation_errors: usize,
    /// Challenges generated and checked
    pub challenges_generated: usize,
}

impl PoolReport {
    pub fn is_clean(&self) -> bool {
        self.coefficient_range_errors == 0
            && self.unfixable_range_violations == 0
            && self.zero_reactant_errors == 0
            && self.zero_products_count_errors == 0
            && self.quantity_range_errors == 0
            && self.generation_errors == 0
    }
}

/// Reactions in `ids` with a reactant coefficient of 0 or above `max_quantity`.
pub fn coefficient_range_violations(ids: &[ReactionId], max_quantity: u32) -> Vec<ReactionId> {
    ids.iter()
        .copied()
        .filter(|id| {
            let blueprint = id.blueprint();
            blueprint.max_reactant_coefficient() > max_quantity
                || blueprint.reactants.iter().any(|&(c, _)| c == 0)
        })
        .collect()
}

/// Checks every pool reaction, then generates `rounds` batches per level and
/// checks each challenge.
pub fn check_pools<R: Rng>(config: &GameConfig, rng: R, rounds: usize) -> PoolReport {
    let max_quantity = config.max_quantity();
    let range = QuantityRange::new(0, max_quantity);
    let mut report = PoolReport::default();

    let pool = Level::One.pool();
    for id in coefficient_range_violations(&pool, max_quantity) {
        log::warn!("{:?}: coefficient out of [1, {}]", id, max_quantity);
        report.coefficient_range_errors += 1;
    }

    for id in &pool {
        let mut reaction = id.reaction();
        for index in 0..reaction.reactants().len() {
            reaction.set_reactant_quantity(index, max_quantity);
        }
        if let Err(err) = fix_quantity_range_violation(&mut reaction, max_quantity) {
            log::warn!("{:?}: {}", id, err);
            report.unfixable_range_violations += 1;
        }
    }

    let mut generator = ChallengeGenerator::new(rng);
    for level in Level::ALL {
        for _ in 0..rounds {
            let challenges = match generator.create_challenges(
                config.challenges_per_game,
                level,
                max_quantity,
                ChallengeVisibility::Both,
            ) {
                Ok(challenges) => challenges,
                Err(err) => {
                    log::warn!("level {}: {}", level, err);
                    report.generation_errors += 1;
                    continue;
                }
            };

            let zero_products = challenges
                .iter()
                .filter(|c| c.reaction().has_zero_products())
                .count();
            if zero_products != 1 {
                log::warn!("level {}: {} with zero products", level, zero_products);
                report.zero_products_count_errors += 1;
            }
            for challenge in &challenges {
                let reaction = challenge.reaction();
                if reaction.reactants().iter().any(|r| r.quantity == 0) {
                    log::warn!("level {}: zero reactant {}", level, reaction.quantities());
                    report.zero_reactant_errors += 1;
                }
                if reaction.has_range_violation(range) {
                    log::warn!("level {}: out of range {}", level, reaction.quantities());
                    report.quantity_range_errors += 1;
                }
            }
            report.challenges_generated += challenges.len();
        }
    }

    log::info!("pool check: {:?}", report);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_shipped_pools_are_clean() {
        let config = GameConfig::default();
        let report = check_pools(&config, ChaCha8Rng::seed_from_u64(42), 20);
        assert!(report.is_clean(), "{:?}", report);
        assert_eq!(report.challenges_generated, 3 * 20 * 5);
    }

    #[test]
    fn test_coefficient_range_violations() {
        let ids = [ReactionId::MakeWater, ReactionId::ChlorinatePhosphorus];
        let violations = coefficient_range_violations(&ids, 8);
        assert_eq!(violations, vec![ReactionId::ChlorinatePhosphorus]);
        assert!(coefficient_range_violations(&ids, 10).is_empty());
    }

    #[test]
    fn test_small_range_is_reported() {
        let config = GameConfig {
            quantity_range: QuantityRange::new(0, 4),
            ..GameConfig::default()
        };
        let report = check_pools(&config, ChaCha8Rng::seed_from_u64(1), 2);
        assert!(!report.is_clean());
        assert!(report.coefficient_range_errors > 0);
    }
}
