//! # Leftovers: Typed Stoichiometry for Reactants, Products and Leftovers
//!
//! A small, correct-by-construction model of chemical reactions for an
//! educational simulation. Reactant quantities go in, product and leftover
//! quantities come out, using limiting-reagent arithmetic.
//!
//! ## Example
//!
//! ```
//! use leftovers::catalog::ReactionId;
//!
//! // 2H2 + O2 -> 2H2O
//! let mut water = ReactionId::MakeWater.reaction();
//! water.set_reactant_quantity(0, 4); // H2
//! water.set_reactant_quantity(1, 1); // O2
//!
//! assert_eq!(water.products()[0].quantity, 2);
//! assert_eq!(water.leftovers()[0].quantity, 2);
//! assert_eq!(water.leftovers()[1].quantity, 0);
//! ```
//!
//! Ordinary reactions have fixed coefficients. Only the custom sandwich can
//! change them, and the type system enforces it:
//!
//! ```compile_fail
//! use leftovers::catalog::ReactionId;
//!
//! let mut water = ReactionId::MakeWater.reaction();
//! water.set_reactant_coefficient(0, 3); // Compile error!
//! ```
//!
//! ```
//! use leftovers::catalog::sandwiches;
//! use leftovers::QuantityRange;
//!
//! let mut custom = sandwiches::custom();
//! custom.set_reactant_coefficient(0, 2, QuantityRange::COEFFICIENTS).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`reaction`]: reactions, recompute and change listeners
//! - [`catalog`]: named reactions and sandwich recipes
//! - [`screens`]: per-screen reaction selection
//! - [`game`]: challenge generation, guesses, scoring
//! - [`config`]: game configuration

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod config;
pub mod game;
pub mod reaction;
pub mod screens;

pub use config::{ConfigError, GameConfig};
pub use reaction::{
    reaction_events, AnyReaction, ListenerId, Reaction, ReactionChange, ReactionError,
    ReactionResult,
};

/// A participant in a chemical reaction: one reactant, product or leftover term.
///
/// Two substances are equal when symbol, coefficient and quantity all match.
///
/// # Examples
///
/// ```
/// use leftovers::Substance;
///
/// let h2 = Substance::new(2, "H2", 4);
/// assert_eq!(h2.with_quantity(0), Substance::new(2, "H2", 0));
/// assert_ne!(h2, Substance::new(1, "H2", 4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Substance {
    /// Coefficient in the balanced equation
    pub coefficient: u32,
    /// Symbol used in the reaction equation
    pub symbol: String,
    /// How much of the substance we have
    pub quantity: u32,
}

impl Substance {
    /// Creates a substance.
    pub fn new(coefficient: u32, symbol: impl Into<String>, quantity: u32) -> Self {
        Substance {
            coefficient,
            symbol: symbol.into(),
            quantity,
        }
    }

    /// Copy of this substance with a different quantity.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Substance {
            quantity,
            ..self.clone()
        }
    }

    /// Term as it appears in an equation, e.g. `2H2`. A coefficient of 1 is implied.
    pub fn term(&self) -> String {
        match self.coefficient {
            1 => self.symbol.clone(),
            c => format!("{}{}", c, self.symbol),
        }
    }
}

impl fmt::Display for Substance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.term(), self.quantity)
    }
}

/// Inclusive integer range used for quantities and custom coefficients.
///
/// # Examples
///
/// ```
/// use leftovers::QuantityRange;
///
/// let range = QuantityRange::default();
/// assert!(range.contains(0));
/// assert!(range.contains(8));
/// assert!(!range.contains(9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRange {
    pub min: u32,
    pub max: u32,
}

impl QuantityRange {
    /// Quantities shown in the Before/After boxes.
    pub const QUANTITIES: QuantityRange = QuantityRange { min: 0, max: 8 };

    /// Coefficients the custom sandwich may take.
    pub const COEFFICIENTS: QuantityRange = QuantityRange { min: 0, max: 3 };

    /// Creates a range. `min` must not exceed `max`.
    pub const fn new(min: u32, max: u32) -> Self {
        QuantityRange { min, max }
    }

    /// Is `value` within the range (inclusive)?
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Is the range well formed?
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

impl Default for QuantityRange {
    fn default() -> Self {
        Self::QUANTITIES
    }
}

impl fmt::Display for QuantityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// The two reaction boxes. In a game challenge exactly one is interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxType {
    /// Reactant quantities before the reaction
    Before,
    /// Product and leftover quantities after the reaction
    After,
}

/// Type Layer: Coefficient Policies
/// Marker trait for whether a reaction's coefficients may change.
///
/// - [`Fixed`]: coefficients are set by the balanced equation, forever
/// - [`CustomCoefficients`]: reactant coefficients are user-editable (custom sandwich)
pub trait CoefficientPolicy {
    /// Name used in debug output.
    const NAME: &'static str;
}

/// Coefficients are immutable once the reaction is built.
#[derive(Debug, Clone, Copy)]
pub struct Fixed;
impl CoefficientPolicy for Fixed {
    const NAME: &'static str = "Fixed";
}

/// Reactant coefficients may be edited after construction.
#[derive(Debug, Clone, Copy)]
pub struct CustomCoefficients;
impl CoefficientPolicy for CustomCoefficients {
    const NAME: &'static str = "CustomCoefficients";
}
