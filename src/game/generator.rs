//! Challenge batch generation.
//!
//! Reactions are drawn from the level's pool without replacement. One
//! challenge per batch, at a random position, has zero products; every other
//! challenge has at least one complete reaction event. Quantities that fall
//! out of range are then fixed by decrementing reactants.

use rand::Rng;

use super::{Challenge, ChallengeVisibility, GameError, GameResult, Level};
use crate::catalog::ReactionId;
use crate::{CoefficientPolicy, Fixed, GameConfig, QuantityRange, Reaction};

/// Builds batches of challenges from an injected random source.
///
/// Seed the source to make generation reproducible.
#[derive(Debug)]
pub struct ChallengeGenerator<R: Rng> {
    rng: R,
    play_all: bool,
}

impl<R: Rng> ChallengeGenerator<R> {
    /// Creates a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        ChallengeGenerator {
            rng,
            play_all: false,
        }
    }

    /// Developer option: guesses start filled in with the correct answer.
    pub fn with_play_all(mut self, play_all: bool) -> Self {
        self.play_all = play_all;
        self
    }

    /// Creates a batch sized and bounded by `config`.
    ///
    /// `config.play_all` prefills this batch only, on top of [`Self::with_play_all`].
    pub fn create_game(
        &mut self,
        config: &GameConfig,
        level: Level,
        visibility: ChallengeVisibility,
    ) -> GameResult<Vec<Challenge>> {
        self.create_batch(
            config.challenges_per_game,
            level,
            config.max_quantity(),
            visibility,
            config.play_all || self.play_all,
        )
    }

    /// Creates `count` challenges for `level`.
    ///
    /// Exactly one challenge has zero products. Every reactant, product and
    /// leftover quantity lies in `[0, max_quantity]`.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoChallengesRequested`] if `count` is 0
    /// - [`GameError::InvalidMaxQuantity`] if `max_quantity` is 0
    /// - [`GameError::PoolExhausted`] if the level has fewer than `count` reactions
    /// - [`GameError::NoZeroProductsCandidate`] if no reaction can yield zero products
    /// - [`GameError::CoefficientExceedsMaxQuantity`] if a drawn reaction cannot
    ///   complete one event within `max_quantity`
    /// - [`GameError::CannotFixRangeViolation`] if range fixing fails
    pub fn create_challenges(
        &mut self,
        count: usize,
        level: Level,
        max_quantity: u32,
        visibility: ChallengeVisibility,
    ) -> GameResult<Vec<Challenge>> {
        self.create_batch(count, level, max_quantity, visibility, self.play_all)
    }

    fn create_batch(
        &mut self,
        count: usize,
        level: Level,
        max_quantity: u32,
        visibility: ChallengeVisibility,
        prefilled: bool,
    ) -> GameResult<Vec<Challenge>> {
        if count == 0 {
            return Err(GameError::NoChallengesRequested);
        }
        if max_quantity == 0 {
            return Err(GameError::InvalidMaxQuantity);
        }

        let mut pool = level.pool();
        if count > pool.len() {
            return Err(GameError::PoolExhausted {
                level,
                requested: count,
                available: pool.len(),
            });
        }

        let zero_products_index = self.rng.random_range(0..count);

        // Draw the zero-products reaction first so later draws cannot use up its candidates.
        let mut zero_products = self.reaction_without_products(&mut pool, level)?;
        fix_quantity_range_violation(&mut zero_products, max_quantity)?;

        let mut reactions = Vec::with_capacity(count);
        for _ in 1..count {
            let mut reaction = self.reaction_with_products(&mut pool, max_quantity)?;
            fix_quantity_range_violation(&mut reaction, max_quantity)?;
            if reaction.has_zero_products() {
                return Err(GameError::UnexpectedZeroProducts(reaction.quantities()));
            }
            reactions.push(reaction);
        }
        reactions.insert(zero_products_index, zero_products);

        log::debug!(
            "level {}: created {} challenges, zero products at index {}",
            level,
            count,
            zero_products_index
        );

        let interactive = level.interactive_box();
        Ok(reactions
            .into_iter()
            .map(|reaction| {
                Challenge::new(reaction, interactive, visibility, prefilled)
            })
            .collect())
    }

    /// Removes a random reaction from `pool`.
    fn draw(&mut self, pool: &mut Vec<ReactionId>) -> ReactionId {
        let index = self.rng.random_range(0..pool.len());
        pool.remove(index)
    }

    /// A reaction with at least one complete event: each reactant quantity is
    /// in `[coefficient, max_quantity]`.
    fn reaction_with_products(
        &mut self,
        pool: &mut Vec<ReactionId>,
        max_quantity: u32,
    ) -> GameResult<Reaction<Fixed>> {
        let id = self.draw(pool);
        let mut reaction = id.reaction();
        for index in 0..reaction.reactants().len() {
            let reactant = &reaction.reactants()[index];
            let min = reactant.coefficient.max(1);
            if min > max_quantity {
                return Err(GameError::CoefficientExceedsMaxQuantity {
                    equation: reaction.equation(),
                    symbol: reactant.symbol.clone(),
                    max_quantity,
                });
            }
            let quantity = self.rng.random_range(min..=max_quantity);
            reaction.set_reactant_quantity(index, quantity);
        }
        Ok(reaction)
    }

    /// A reaction with zero products although every reactant quantity is
    /// positive: each quantity is in `[1, max(1, coefficient - 1)]`.
    ///
    /// Reactions whose reactant coefficients are all 1 always react, so they
    /// are not candidates.
    fn reaction_without_products(
        &mut self,
        pool: &mut Vec<ReactionId>,
        level: Level,
    ) -> GameResult<Reaction<Fixed>> {
        let candidates: Vec<usize> = pool
            .iter()
            .enumerate()
            .filter(|(_, id)| !id.blueprint().reactant_coefficients_all_one())
            .map(|(index, _)| index)
            .collect();
        if candidates.is_empty() {
            return Err(GameError::NoZeroProductsCandidate(level));
        }
        let pick = candidates[self.rng.random_range(0..candidates.len())];
        let mut reaction = pool.remove(pick).reaction();
        for index in 0..reaction.reactants().len() {
            let max = reaction.reactants()[index].coefficient.saturating_sub(1).max(1);
            let quantity = self.rng.random_range(1..=max);
            reaction.set_reactant_quantity(index, quantity);
        }
        Ok(reaction)
    }
}

/// Brings every quantity of `reaction` into `[0, max_quantity]`.
///
/// Reactant quantities above the maximum are clamped first. Then reactants
/// are decremented by 1 in turn, recomputing after each step, and never below
/// 1, until nothing is out of range or a full pass changes nothing.
///
/// # Errors
///
/// [`GameError::CannotFixRangeViolation`] if a violation remains. This means
/// the reaction does not fit the quantity range and must not be offered.
///
/// # Examples
///
/// ```
/// use leftovers::game::fix_quantity_range_violation;
/// use leftovers::{Reaction, Substance};
///
/// // 3A + B -> 5C
/// let mut reaction = Reaction::new(
///     vec![Substance::new(3, "A", 0), Substance::new(1, "B", 0)],
///     vec![Substance::new(5, "C", 0)],
/// )
/// .unwrap();
/// reaction.set_reactant_quantity(0, 8);
/// reaction.set_reactant_quantity(1, 8);
/// assert_eq!(reaction.products()[0].quantity, 10);
///
/// fix_quantity_range_violation(&mut reaction, 8).unwrap();
/// assert_eq!(reaction.products()[0].quantity, 5);
/// ```
pub fn fix_quantity_range_violation<C: CoefficientPolicy>(
    reaction: &mut Reaction<C>,
    max_quantity: u32,
) -> GameResult<()> {
    let range = QuantityRange::new(0, max_quantity);
    if !reaction.has_range_violation(range) {
        return Ok(());
    }
    let violation = reaction.quantities();

    let count = reaction.reactants().len();
    for index in 0..count {
        if reaction.reactants()[index].quantity > max_quantity {
            reaction.set_reactant_quantity(index, max_quantity);
        }
    }

    let mut index = 0;
    let mut changed = false;
    while reaction.has_range_violation(range) {
        let quantity = reaction.reactants()[index].quantity;
        if quantity > 1 {
            reaction.set_reactant_quantity(index, quantity - 1);
            changed = true;
        }
        index += 1;
        if index == count {
            if !changed {
                break;
            }
            index = 0;
            changed = false;
        }
    }

    if reaction.has_range_violation(range) {
        log::warn!("quantity range violation cannot be fixed: {}", violation);
        return Err(GameError::CannotFixRangeViolation {
            reaction: reaction.to_string(),
            range,
        });
    }

    log::debug!(
        "quantity range violation: {} fixed: {}",
        violation,
        reaction.quantities()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoxType, Substance};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn generator(seed: u64) -> ChallengeGenerator<ChaCha8Rng> {
        ChallengeGenerator::new(ChaCha8Rng::seed_from_u64(seed))
    }

    fn reaction(reactants: &[(u32, &str)], products: &[(u32, &str)]) -> Reaction {
        let build = |terms: &[(u32, &str)]| {
            terms
                .iter()
                .map(|&(c, s)| Substance::new(c, s, 0))
                .collect::<Vec<_>>()
        };
        Reaction::new(build(reactants), build(products)).unwrap()
    }

    #[test]
    fn test_exactly_one_zero_products_challenge() {
        for level in Level::ALL {
            for seed in 0..50 {
                let challenges = generator(seed)
                    .create_challenges(5, level, 8, ChallengeVisibility::Both)
                    .unwrap();
                assert_eq!(challenges.len(), 5);
                let zero = challenges
                    .iter()
                    .filter(|c| c.reaction().has_zero_products())
                    .count();
                assert_eq!(zero, 1, "level {} seed {}", level, seed);
            }
        }
    }

    #[test]
    fn test_quantities_in_range_and_reactants_positive() {
        let range = QuantityRange::new(0, 8);
        for level in Level::ALL {
            for seed in 0..50 {
                let challenges = generator(seed)
                    .create_challenges(5, level, 8, ChallengeVisibility::Both)
                    .unwrap();
                for c in &challenges {
                    assert!(!c.reaction().has_range_violation(range), "{}", c.reaction());
                    assert!(c.reaction().reactants().iter().all(|r| r.quantity >= 1));
                    assert_eq!(c.interactive_box(), level.interactive_box());
                }
            }
        }
    }

    #[test]
    fn test_no_duplicate_reactions_in_batch() {
        let challenges = generator(3)
            .create_challenges(18, Level::Three, 8, ChallengeVisibility::Both)
            .unwrap();
        let mut equations: Vec<_> = challenges
            .iter()
            .map(|c| c.reaction().equation())
            .collect();
        equations.sort();
        equations.dedup();
        assert_eq!(equations.len(), 18);
    }

    #[test]
    fn test_same_seed_same_batch() {
        let batch = |seed| {
            generator(seed)
                .create_challenges(5, Level::One, 8, ChallengeVisibility::Both)
                .unwrap()
                .iter()
                .map(|c| c.reaction().quantities())
                .collect::<Vec<_>>()
        };
        let (a, b) = (batch(11), batch(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_challenge_has_zero_products() {
        let challenges = generator(5)
            .create_challenges(1, Level::Two, 8, ChallengeVisibility::Numbers)
            .unwrap();
        assert!(challenges[0].reaction().has_zero_products());
        assert!(!challenges[0].molecules_visible());
    }

    #[test]
    fn test_invalid_arguments() {
        let mut g = generator(0);
        let both = ChallengeVisibility::Both;
        assert_eq!(
            g.create_challenges(0, Level::One, 8, both).unwrap_err(),
            GameError::NoChallengesRequested
        );
        assert_eq!(
            g.create_challenges(5, Level::One, 0, both).unwrap_err(),
            GameError::InvalidMaxQuantity
        );
        assert_eq!(
            g.create_challenges(19, Level::Three, 8, both).unwrap_err(),
            GameError::PoolExhausted {
                level: Level::Three,
                requested: 19,
                available: 18,
            }
        );
    }

    #[test]
    fn test_small_max_quantity_is_reported() {
        // 2C2H6 + 7O2 needs 7 O2 for one event
        let mut pool = vec![ReactionId::CombustEthane];
        let mut g = generator(0);
        let err = g.reaction_with_products(&mut pool, 4).unwrap_err();
        assert_eq!(
            err,
            GameError::CoefficientExceedsMaxQuantity {
                equation: "2C2H6 + 7O2 -> 4CO2 + 6H2O".to_string(),
                symbol: "O2".to_string(),
                max_quantity: 4,
            }
        );
    }

    #[test]
    fn test_all_ones_pool_has_no_zero_products_candidate() {
        let mut pool = vec![ReactionId::BurnCarbon, ReactionId::MakeNitricOxide];
        let mut g = generator(0);
        let level = Level::Two;
        let err = g.reaction_without_products(&mut pool, level).unwrap_err();
        assert_eq!(err, GameError::NoZeroProductsCandidate(level));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_zero_products_quantities_below_coefficients() {
        let mut g = generator(21);
        for _ in 0..20 {
            let mut pool = vec![
                ReactionId::BurnCarbon,
                ReactionId::OxidizeAmmoniaToNitrogenDioxide,
            ];
            let level = Level::Three;
            let r = g.reaction_without_products(&mut pool, level).unwrap();
            assert_eq!(pool, vec![ReactionId::BurnCarbon]);
            assert!(r.has_zero_products());
            // 4NH3 + 7O2: NH3 in [1, 3], O2 in [1, 6]
            assert!((1..=3).contains(&r.reactants()[0].quantity));
            assert!((1..=6).contains(&r.reactants()[1].quantity));
        }
    }

    #[test]
    fn test_create_game_uses_config() {
        let config = GameConfig {
            challenges_per_game: 3,
            play_all: true,
            ..GameConfig::default()
        };
        let both = ChallengeVisibility::Both;
        let challenges = generator(9).create_game(&config, Level::One, both).unwrap();
        assert_eq!(challenges.len(), 3);
        for challenge in &challenges {
            assert!(challenge.is_correct());
            assert_eq!(challenge.interactive_box(), BoxType::Before);
        }
    }

    #[test]
    fn test_config_play_all_applies_to_one_game() {
        let both = ChallengeVisibility::Both;
        let mut g = generator(4);
        let config = GameConfig {
            play_all: true,
            ..GameConfig::default()
        };
        let game = g.create_game(&config, Level::Two, both).unwrap();
        assert!(game.iter().all(Challenge::is_correct));

        let later = g.create_challenges(5, Level::Two, 8, both).unwrap();
        assert!(!later.iter().any(Challenge::is_correct));
        let defaults = GameConfig::default();
        let game = g.create_game(&defaults, Level::Two, both).unwrap();
        assert!(!game.iter().any(Challenge::is_correct));

        let mut g = generator(4).with_play_all(true);
        let game = g.create_game(&defaults, Level::Two, both).unwrap();
        assert!(game.iter().all(Challenge::is_correct));
        let later = g.create_challenges(5, Level::Two, 8, both).unwrap();
        assert!(later.iter().all(Challenge::is_correct));
    }

    #[test]
    fn test_fix_leaves_valid_reaction_alone() {
        let mut r = reaction(&[(2, "H2"), (1, "O2")], &[(2, "H2O")]);
        r.set_reactant_quantity(0, 6);
        r.set_reactant_quantity(1, 5);
        let before = r.quantities();
        fix_quantity_range_violation(&mut r, 8).unwrap();
        assert_eq!(r.quantities(), before);
    }

    #[test]
    fn test_fix_terminates_in_range() {
        // 3A + B -> 5C at A=8, B=8 makes 10 C
        let mut r = reaction(&[(3, "A"), (1, "B")], &[(5, "C")]);
        r.set_reactant_quantity(0, 8);
        r.set_reactant_quantity(1, 8);
        fix_quantity_range_violation(&mut r, 8).unwrap();
        assert!(!r.has_range_violation(QuantityRange::new(0, 8)));
        assert_eq!(r.reactants()[0].quantity, 5);
        assert_eq!(r.reactants()[1].quantity, 6);
        assert_eq!(r.products()[0].quantity, 5);
    }

    #[test]
    fn test_fix_clamps_reactants_first() {
        let mut r = reaction(&[(1, "A"), (1, "B")], &[(1, "C")]);
        r.set_reactant_quantity(0, 12);
        r.set_reactant_quantity(1, 3);
        fix_quantity_range_violation(&mut r, 8).unwrap();
        assert_eq!(r.reactants()[0].quantity, 8);
        assert_eq!(r.reactants()[1].quantity, 3);
    }

    #[test]
    fn test_unfixable_violation_is_an_error() {
        // A + B -> 9C: one event already overflows, and reactants stop at 1
        let mut r = reaction(&[(1, "A"), (1, "B")], &[(9, "C")]);
        r.set_reactant_quantity(0, 8);
        r.set_reactant_quantity(1, 8);
        let err = fix_quantity_range_violation(&mut r, 8).unwrap_err();
        assert!(matches!(err, GameError::CannotFixRangeViolation { .. }));
        assert_eq!(r.reactants()[0].quantity, 1);
        assert_eq!(r.reactants()[1].quantity, 1);
    }
}
