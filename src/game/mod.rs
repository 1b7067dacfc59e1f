//! The matching game.
//!
//! Difficulty is based on how many values the player solves for, and on
//! whether they are Before or After terms:
//!
//! - **Level 1**: one- or two-product reactions, Before box interactive
//! - **Level 2**: one-product reactions, After box interactive
//! - **Level 3**: two-product reactions, After box interactive
//!
//! Every generated batch has:
//! - reactant coefficients > 0 and reactant quantities > 0
//! - exactly one challenge with zero products
//! - no duplicate reactions
//! - every quantity within the configured range
//!
//! ## Example
//!
//! ```
//! use leftovers::game::{ChallengeGenerator, ChallengeVisibility, GameSession, Level};
//! use leftovers::GameConfig;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let config = GameConfig::default();
//! let mut generator = ChallengeGenerator::new(ChaCha8Rng::seed_from_u64(7));
//! let challenges = generator
//!     .create_challenges(5, Level::Two, config.max_quantity(), ChallengeVisibility::Both)
//!     .unwrap();
//! assert_eq!(challenges.iter().filter(|c| c.reaction().has_zero_products()).count(), 1);
//!
//! let mut session = GameSession::new(challenges, &config);
//! session.current_mut().unwrap().show_answer();
//! assert!(session.check().unwrap());
//! assert_eq!(session.score(), 2);
//! ```

mod challenge;
pub mod diagnostics;
mod generator;
mod session;

pub use challenge::{Challenge, Guess, TermKind};
pub use generator::{fix_quantity_range_violation, ChallengeGenerator};
pub use session::{GameSession, PlayState};

use crate::catalog::ReactionId;
use crate::{BoxType, QuantityRange, ReactionError};

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while generating or playing challenges.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A batch must contain at least one challenge
    #[error("number of challenges must be > 0")]
    NoChallengesRequested,
    /// The quantity range must allow positive quantities
    #[error("max quantity must be > 0")]
    InvalidMaxQuantity,
    /// No such level
    #[error("unknown game level {0}")]
    UnknownLevel(usize),
    /// More challenges requested than the level has reactions
    #[error("level {level} has {available} reactions but {requested} challenges were requested")]
    PoolExhausted {
        level: Level,
        requested: usize,
        available: usize,
    },
    /// Every remaining reaction has all reactant coefficients equal to 1
    #[error("level {0} has no reaction that can produce zero products")]
    NoZeroProductsCandidate(Level),
    /// A reactant coefficient cannot fit in a box
    #[error("coefficient of {symbol} in {equation} exceeds max quantity {max_quantity}")]
    CoefficientExceedsMaxQuantity {
        equation: String,
        symbol: String,
        max_quantity: u32,
    },
    /// Decrementing reactants could not bring every quantity into range
    #[error("quantity range violation cannot be fixed: {reaction} (range {range})")]
    CannotFixRangeViolation {
        reaction: String,
        range: QuantityRange,
    },
    /// Range fixing removed every product from a challenge that needs some
    #[error("challenge lost all products while fixing quantities: {0}")]
    UnexpectedZeroProducts(String),
    /// The term is outside the challenge's interactive box
    #[error("{term:?} quantities are not editable when the {interactive:?} box is interactive")]
    NotInteractive {
        term: TermKind,
        interactive: BoxType,
    },
    /// The play state machine does not allow this action now
    #[error("cannot {action} while {state:?}")]
    InvalidTransition {
        action: &'static str,
        state: PlayState,
    },
    /// Every challenge in the session has been played
    #[error("the game is finished")]
    GameFinished,
    /// Building a reaction failed
    #[error(transparent)]
    Reaction(#[from] ReactionError),
}

/// Game levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    One,
    Two,
    Three,
}

// Level 2 is all the one-product reactions.
const LEVEL2_POOL: [ReactionId; 21] = [
    ReactionId::MakeWater,
    ReactionId::MakeHydrogenFluoride,
    ReactionId::MakeHydrogenChloride,
    ReactionId::MethanolFromCarbonMonoxide,
    ReactionId::MethanolFromFormaldehyde,
    ReactionId::HydrogenateEthylene,
    ReactionId::HydrogenateAcetylene,
    ReactionId::BurnCarbon,
    ReactionId::PartiallyBurnCarbon,
    ReactionId::BurnCarbonMonoxide,
    ReactionId::ReduceCarbonDioxide,
    ReactionId::MakeCarbonDisulfide,
    ReactionId::MakeAmmonia,
    ReactionId::MakeNitricOxide,
    ReactionId::MakeNitrogenDioxide,
    ReactionId::MakeNitrousOxide,
    ReactionId::MakePhosphine,
    ReactionId::MakePhosphorusTrifluoride,
    ReactionId::MakePhosphorusTrichloride,
    ReactionId::MakePhosphorusPentachloride,
    ReactionId::MakeSulfurTrioxide,
];

// Level 3 is all the two-product reactions.
const LEVEL3_POOL: [ReactionId; 18] = [
    ReactionId::CarbonAndSteam,
    ReactionId::ReformMethane,
    ReactionId::CombustMethane,
    ReactionId::CombustEthane,
    ReactionId::CombustEthylene,
    ReactionId::CombustAcetylene,
    ReactionId::CombustEthanol,
    ReactionId::ChlorinateEthane,
    ReactionId::MethaneAndSulfur,
    ReactionId::BurnCarbonDisulfide,
    ReactionId::OxidizeAmmoniaToNitrogen,
    ReactionId::OxidizeAmmoniaToNitricOxide,
    ReactionId::OxidizeAmmoniaToNitrogenDioxide,
    ReactionId::ReduceNitricOxide,
    ReactionId::SulfurFromSulfurDioxide,
    ReactionId::HydrogenSulfideFromSulfurDioxide,
    ReactionId::MakeOxygenDifluoride,
    ReactionId::HydrolyzeOxygenDifluoride,
];

impl Level {
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    /// Level from its 1-based number.
    pub fn from_number(number: usize) -> GameResult<Level> {
        match number {
            1 => Ok(Level::One),
            2 => Ok(Level::Two),
            3 => Ok(Level::Three),
            other => Err(GameError::UnknownLevel(other)),
        }
    }

    /// 1-based level number.
    pub fn number(self) -> usize {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }

    /// Reactions challenges are drawn from. Level 1 is the union of levels 2 and 3.
    pub fn pool(self) -> Vec<ReactionId> {
        match self {
            Level::One => LEVEL2_POOL
                .iter()
                .chain(LEVEL3_POOL.iter())
                .copied()
                .collect(),
            Level::Two => LEVEL2_POOL.to_vec(),
            Level::Three => LEVEL3_POOL.to_vec(),
        }
    }

    /// Box the player fills in.
    pub fn interactive_box(self) -> BoxType {
        match self {
            Level::One => BoxType::Before,
            Level::Two | Level::Three => BoxType::After,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// What is shown in the non-interactive parts of a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChallengeVisibility {
    /// Molecules and numbers
    Both,
    /// Molecules, numbers hidden
    Molecules,
    /// Numbers, molecules hidden
    Numbers,
}

impl ChallengeVisibility {
    pub fn molecules_visible(self) -> bool {
        matches!(
            self,
            ChallengeVisibility::Both | ChallengeVisibility::Molecules
        )
    }

    pub fn numbers_visible(self) -> bool {
        matches!(
            self,
            ChallengeVisibility::Both | ChallengeVisibility::Numbers
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_pools() {
        assert_eq!(Level::Two.pool().len(), 21);
        assert_eq!(Level::Three.pool().len(), 18);
        assert_eq!(Level::One.pool().len(), 39);
        for id in Level::Two.pool() {
            assert_eq!(id.blueprint().product_count(), 1, "{:?}", id);
        }
        for id in Level::Three.pool() {
            assert_eq!(id.blueprint().product_count(), 2, "{:?}", id);
        }
        let level1 = Level::One.pool();
        assert!(!level1.contains(&ReactionId::ChlorinatePhosphorus));
    }

    #[test]
    fn test_level_numbers() {
        for level in Level::ALL {
            assert_eq!(Level::from_number(level.number()).unwrap(), level);
        }
        assert_eq!(Level::from_number(0), Err(GameError::UnknownLevel(0)));
        assert_eq!(Level::from_number(4), Err(GameError::UnknownLevel(4)));
    }

    #[test]
    fn test_interactive_box_by_level() {
        assert_eq!(Level::One.interactive_box(), BoxType::Before);
        assert_eq!(Level::Two.interactive_box(), BoxType::After);
        assert_eq!(Level::Three.interactive_box(), BoxType::After);
    }

    #[test]
    fn test_visibility() {
        assert!(ChallengeVisibility::Both.molecules_visible());
        assert!(ChallengeVisibility::Both.numbers_visible());
        assert!(!ChallengeVisibility::Numbers.molecules_visible());
        assert!(!ChallengeVisibility::Molecules.numbers_visible());
    }
}
